use crate::config::{GenerateSettings, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional `cpf-gen` settings file. Every key may be omitted.
///
/// ```toml
/// [generate]
/// count = 50
/// seed = 42
/// max_attempts = 1000
/// plain = false
///
/// [output]
/// format = "json"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TomlConfig {
    pub generate: GenerateConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    pub count: Option<i64>,
    pub seed: Option<u64>,
    pub max_attempts: Option<u32>,
    pub plain: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!("Loaded config from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(max_attempts) = self.generate.max_attempts {
            GenerateSettings::check_max_attempts("generate.max_attempts", max_attempts)?;
        }
        Ok(())
    }
}
