use crate::utils::error::{ConversionError, ErrorKind, NumconvError};
use crate::utils::validation::{validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Decoded value of a numeral string.
pub type Magnitude = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumeralSystem {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
    Roman,
}

impl NumeralSystem {
    pub const ALL: [NumeralSystem; 5] = [
        NumeralSystem::Binary,
        NumeralSystem::Octal,
        NumeralSystem::Decimal,
        NumeralSystem::Hexadecimal,
        NumeralSystem::Roman,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Octal => "octal",
            Self::Decimal => "decimal",
            Self::Hexadecimal => "hexadecimal",
            Self::Roman => "roman",
        }
    }

    /// Every system except `self`, in [`NumeralSystem::ALL`] order.
    pub fn others(self) -> Vec<NumeralSystem> {
        Self::ALL.into_iter().filter(|s| *s != self).collect()
    }
}

impl fmt::Display for NumeralSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NumeralSystem {
    type Err = NumconvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" | "bin" => Ok(Self::Binary),
            "octal" | "oct" => Ok(Self::Octal),
            "decimal" | "dec" => Ok(Self::Decimal),
            "hexadecimal" | "hex" => Ok(Self::Hexadecimal),
            "roman" => Ok(Self::Roman),
            _ => Err(NumconvError::UnknownSystem {
                name: s.to_string(),
            }),
        }
    }
}

/// Largest Roman ceiling a policy may configure.
pub const ROMAN_CEILING_LIMIT: u32 = 20_000;

/// Choices left open by the numeral formats themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionPolicy {
    /// Strip surrounding whitespace before validation.
    pub trim_input: bool,
    /// Accept a `0x`/`0X` prefix on hexadecimal input.
    pub strip_hex_prefix: bool,
    /// Largest value accepted or produced by the Roman codec.
    pub roman_ceiling: u32,
}

impl Default for ConversionPolicy {
    fn default() -> Self {
        Self {
            trim_input: true,
            strip_hex_prefix: true,
            roman_ceiling: 3999,
        }
    }
}

impl Validate for ConversionPolicy {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_range("policy.roman_ceiling", self.roman_ceiling, 1, ROMAN_CEILING_LIMIT)
    }
}

/// One conversion: a raw numeral in `input` to each of `outputs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub input: NumeralSystem,
    pub raw: String,
    outputs: Vec<NumeralSystem>,
}

impl TranslationRequest {
    /// Repeated output systems are dropped, keeping the first occurrence.
    pub fn new(
        input: NumeralSystem,
        raw: impl Into<String>,
        outputs: impl IntoIterator<Item = NumeralSystem>,
    ) -> Self {
        let mut unique = Vec::new();
        for system in outputs {
            if !unique.contains(&system) {
                unique.push(system);
            }
        }
        Self {
            input,
            raw: raw.into(),
            outputs: unique,
        }
    }

    pub fn outputs(&self) -> &[NumeralSystem] {
        &self.outputs
    }
}

/// Per-output outcomes of one request, in the order the outputs were requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    magnitude: Magnitude,
    entries: Vec<(NumeralSystem, Result<String, ConversionError>)>,
}

impl TranslationResult {
    pub(crate) fn new(magnitude: Magnitude) -> Self {
        Self {
            magnitude,
            entries: Vec::new(),
        }
    }

    /// The value every output was encoded from.
    pub fn magnitude(&self) -> Magnitude {
        self.magnitude
    }

    pub(crate) fn push(&mut self, system: NumeralSystem, outcome: Result<String, ConversionError>) {
        self.entries.push((system, outcome));
    }

    pub fn get(&self, system: NumeralSystem) -> Option<&Result<String, ConversionError>> {
        self.entries
            .iter()
            .find(|(s, _)| *s == system)
            .map(|(_, outcome)| outcome)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(NumeralSystem, Result<String, ConversionError>)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn successes(&self) -> impl Iterator<Item = (NumeralSystem, &str)> {
        self.entries
            .iter()
            .filter_map(|(s, outcome)| outcome.as_ref().ok().map(|v| (*s, v.as_str())))
    }

    pub fn failures(&self) -> impl Iterator<Item = (NumeralSystem, &ConversionError)> {
        self.entries
            .iter()
            .filter_map(|(s, outcome)| outcome.as_ref().err().map(|e| (*s, e)))
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    pub fn report(&self, input: NumeralSystem) -> Report {
        Report {
            input,
            magnitude: self.magnitude,
            outputs: self
                .entries
                .iter()
                .map(|(system, outcome)| match outcome {
                    Ok(value) => ReportEntry {
                        system: *system,
                        value: Some(value.clone()),
                        error: None,
                        message: None,
                    },
                    Err(e) => ReportEntry {
                        system: *system,
                        value: None,
                        error: Some(e.kind()),
                        message: Some(e.to_string()),
                    },
                })
                .collect(),
        }
    }
}

/// Serializable view of a finished translation.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub input: NumeralSystem,
    pub magnitude: Magnitude,
    pub outputs: Vec<ReportEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub system: NumeralSystem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
