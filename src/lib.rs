pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use crate::core::translator::Translator;
pub use domain::model::{
    ConversionPolicy, Magnitude, NumeralSystem, Report, TranslationRequest, TranslationResult,
};
pub use domain::ports::Codec;
pub use utils::error::{ConversionError, ErrorKind, NumconvError, Result};
