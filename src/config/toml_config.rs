use crate::domain::model::{ConversionPolicy, NumeralSystem};
use crate::utils::error::{NumconvError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub policy: ConversionPolicy,
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// System names used when the command line gives no `--to`.
    pub outputs: Option<Vec<String>>,
}

impl TomlConfig {
    /// Loads a policy file from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(NumconvError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| NumconvError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value, leaving unknown names as-is.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures<'_>| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Parsed `[defaults].outputs`, if configured.
    pub fn default_outputs(&self) -> Result<Option<Vec<NumeralSystem>>> {
        let Some(names) = self.defaults.as_ref().and_then(|d| d.outputs.as_ref()) else {
            return Ok(None);
        };
        names
            .iter()
            .map(|name| name.parse::<NumeralSystem>())
            .collect::<Result<Vec<_>>>()
            .map(Some)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.policy.validate()?;

        if let Some(outputs) = self.defaults.as_ref().and_then(|d| d.outputs.as_ref()) {
            if outputs.is_empty() {
                return Err(NumconvError::InvalidConfigValueError {
                    field: "defaults.outputs".to_string(),
                    value: "[]".to_string(),
                    reason: "At least one output system is required".to_string(),
                });
            }
            for name in outputs {
                validate_non_empty_string("defaults.outputs", name)?;
                name.parse::<NumeralSystem>()
                    .map_err(|e| NumconvError::InvalidConfigValueError {
                        field: "defaults.outputs".to_string(),
                        value: name.clone(),
                        reason: e.to_string(),
                    })?;
            }
        }

        Ok(())
    }
}
