use crate::domain::model::{Magnitude, NumeralSystem};
use serde::Serialize;
use thiserror::Error;

/// Failure kinds a codec can report, independent of the offending input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    EmptyInput,
    InvalidDigit,
    InvalidGrammar,
    UndefinedValue,
    OutOfRange,
    Overflow,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("{system} input is empty")]
    EmptyInput { system: NumeralSystem },

    #[error("'{digit}' at position {position} is not a valid {system} digit")]
    InvalidDigit {
        system: NumeralSystem,
        digit: char,
        position: usize,
    },

    #[error("'{input}' is not a well-formed {system} numeral")]
    InvalidGrammar { system: NumeralSystem, input: String },

    #[error("{value} has no {system} representation")]
    UndefinedValue {
        system: NumeralSystem,
        value: Magnitude,
    },

    #[error("{value} is outside the {system} range {min}..={max}")]
    OutOfRange {
        system: NumeralSystem,
        value: Magnitude,
        min: Magnitude,
        max: Magnitude,
    },

    #[error("{system} value '{input}' exceeds the 64-bit signed range")]
    Overflow { system: NumeralSystem, input: String },
}

impl ConversionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput { .. } => ErrorKind::EmptyInput,
            Self::InvalidDigit { .. } => ErrorKind::InvalidDigit,
            Self::InvalidGrammar { .. } => ErrorKind::InvalidGrammar,
            Self::UndefinedValue { .. } => ErrorKind::UndefinedValue,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::Overflow { .. } => ErrorKind::Overflow,
        }
    }

    /// The numeral system whose rules produced this error.
    pub fn system(&self) -> NumeralSystem {
        match self {
            Self::EmptyInput { system }
            | Self::InvalidDigit { system, .. }
            | Self::InvalidGrammar { system, .. }
            | Self::UndefinedValue { system, .. }
            | Self::OutOfRange { system, .. }
            | Self::Overflow { system, .. } => *system,
        }
    }
}

#[derive(Error, Debug)]
pub enum NumconvError {
    #[error("Conversion failed: {0}")]
    Conversion(#[from] ConversionError),

    #[error("Unknown numeral system: '{name}'")]
    UnknownSystem { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl NumconvError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Conversion(e) => format!("Cannot convert: {e}"),
            Self::UnknownSystem { name } => format!("'{name}' is not a supported numeral system"),
            Self::IoError(e) => format!("Could not read a file: {e}"),
            Self::SerializationError(e) => format!("Could not render the report: {e}"),
            Self::ConfigValidationError { field, message } => {
                format!("The configuration is invalid ({field}): {message}")
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("The configuration value for {field} is invalid: {reason}")
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::Conversion(e) => match e.kind() {
                ErrorKind::EmptyInput => "Provide a non-empty number",
                ErrorKind::InvalidDigit => "Check that every digit belongs to the input system",
                ErrorKind::InvalidGrammar => "Check the number is written in the form its system expects",
                ErrorKind::UndefinedValue => "Roman numerals cannot express zero",
                ErrorKind::OutOfRange => "Pick a number inside the target system's range",
                ErrorKind::Overflow => "Use a number that fits in 64 bits",
            },
            Self::UnknownSystem { .. } => {
                "Use one of: binary, octal, decimal, hexadecimal, roman"
            }
            Self::IoError(_) => "Make sure the file exists and is readable",
            Self::SerializationError(_) => "Run again without --json",
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration file and try again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, NumconvError>;
