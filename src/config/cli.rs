use crate::domain::model::NumeralSystem;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "numconv")]
#[command(about = "Convert whole numbers between binary, octal, decimal, hexadecimal and roman")]
pub struct CliConfig {
    /// The numeral to convert
    #[arg(allow_hyphen_values = true)]
    pub number: String,

    /// Numeral system of the input
    #[arg(long, short, default_value = "decimal")]
    pub from: String,

    /// Output systems (comma separated); defaults to every other system
    #[arg(long, short, value_delimiter = ',')]
    pub to: Vec<String>,

    /// Path to a TOML policy file
    #[arg(long, short)]
    pub config: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn input_system(&self) -> Result<NumeralSystem> {
        self.from.parse()
    }

    /// `None` when `--to` was not given.
    pub fn output_systems(&self) -> Result<Option<Vec<NumeralSystem>>> {
        if self.to.is_empty() {
            return Ok(None);
        }
        self.to
            .iter()
            .map(|name| name.parse::<NumeralSystem>())
            .collect::<Result<Vec<_>>>()
            .map(Some)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("number", &self.number)?;
        self.input_system()?;
        self.output_systems()?;
        Ok(())
    }
}
