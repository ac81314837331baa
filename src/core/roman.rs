use crate::core::digits::{roman_value, ROMAN_ENCODE_TABLE};
use crate::domain::model::{Magnitude, NumeralSystem};
use crate::domain::ports::Codec;
use crate::utils::error::ConversionError;
use crate::utils::validation::{check_alphabet, require_non_empty};
use regex::Regex;
use std::sync::LazyLock;

const SYSTEM: NumeralSystem = NumeralSystem::Roman;

// Thousands, then hundreds, tens and units groups in subtractive form.
static ROMAN_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^M*(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$").unwrap()
});

/// Spellings people use for a Roman zero, uppercased.
const ZERO_FORMS: [&str; 3] = ["0", "N", "NULLA"];

/// Subtractive Roman numerals in `1..=ceiling`. Input is case-insensitive.
#[derive(Debug, Clone, Copy)]
pub struct RomanCodec {
    ceiling: Magnitude,
}

impl RomanCodec {
    /// `ceiling` comes from a policy that already passed validation.
    pub(crate) fn new(ceiling: u32) -> Self {
        Self {
            ceiling: Magnitude::from(ceiling),
        }
    }

    pub fn ceiling(&self) -> Magnitude {
        self.ceiling
    }

    fn out_of_range(&self, value: Magnitude) -> ConversionError {
        ConversionError::OutOfRange {
            system: SYSTEM,
            value,
            min: 1,
            max: self.ceiling,
        }
    }
}

impl Default for RomanCodec {
    fn default() -> Self {
        Self::new(3999)
    }
}

impl Codec for RomanCodec {
    fn system(&self) -> NumeralSystem {
        SYSTEM
    }

    fn validate(&self, raw: &str) -> Result<(), ConversionError> {
        require_non_empty(SYSTEM, raw)?;
        let upper = raw.to_ascii_uppercase();
        if ZERO_FORMS.contains(&upper.as_str()) {
            return Err(ConversionError::UndefinedValue {
                system: SYSTEM,
                value: 0,
            });
        }
        check_alphabet(SYSTEM, &upper, |c| roman_value(c).is_some())?;

        if !ROMAN_GRAMMAR.is_match(&upper) {
            return Err(ConversionError::InvalidGrammar {
                system: SYSTEM,
                input: raw.to_string(),
            });
        }
        Ok(())
    }

    fn decode(&self, raw: &str) -> Result<Magnitude, ConversionError> {
        self.validate(raw)?;

        let mut total: Magnitude = 0;
        let mut previous: Magnitude = 0;
        for current in raw.chars().filter_map(|c| roman_value(c.to_ascii_uppercase())) {
            // `previous` was already added; a larger successor turns the pair
            // into `current - previous`.
            total = if previous != 0 && current > previous {
                total.checked_add(current - 2 * previous)
            } else {
                total.checked_add(current)
            }
            .ok_or_else(|| ConversionError::Overflow {
                system: SYSTEM,
                input: raw.to_string(),
            })?;
            previous = current;
        }

        if total > self.ceiling {
            return Err(self.out_of_range(total));
        }
        Ok(total)
    }

    fn encode(&self, magnitude: Magnitude) -> Result<String, ConversionError> {
        if magnitude == 0 {
            return Err(ConversionError::UndefinedValue {
                system: SYSTEM,
                value: 0,
            });
        }
        if magnitude < 0 || magnitude > self.ceiling {
            return Err(self.out_of_range(magnitude));
        }

        let mut remaining = magnitude;
        let mut numeral = String::new();
        for (value, symbol) in ROMAN_ENCODE_TABLE {
            while remaining >= value {
                numeral.push_str(symbol);
                remaining -= value;
            }
        }
        Ok(numeral)
    }
}
