use crate::domain::model::NumeralSystem;
use crate::utils::error::{ConversionError, NumconvError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(NumconvError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(NumconvError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Rejects an empty numeral before any codec looks at its characters.
pub fn require_non_empty(
    system: NumeralSystem,
    raw: &str,
) -> std::result::Result<(), ConversionError> {
    if raw.is_empty() {
        return Err(ConversionError::EmptyInput { system });
    }
    Ok(())
}

/// Fails on the first character `accept` refuses, reporting its char offset.
pub fn check_alphabet(
    system: NumeralSystem,
    raw: &str,
    accept: impl Fn(char) -> bool,
) -> std::result::Result<(), ConversionError> {
    match raw.chars().enumerate().find(|(_, c)| !accept(*c)) {
        Some((position, digit)) => Err(ConversionError::InvalidDigit {
            system,
            digit,
            position,
        }),
        None => Ok(()),
    }
}
