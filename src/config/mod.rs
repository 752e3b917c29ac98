#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::generator::DEFAULT_MAX_ATTEMPTS;
use crate::utils::error::{CpfError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_COUNT: i64 = 20;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One identifier per line.
    #[default]
    Text,
    /// A single JSON array of strings.
    Json,
}

/// Effective settings for a generation run after layering CLI flags over the
/// config file over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSettings {
    pub count: usize,
    pub seed: Option<u64>,
    pub max_attempts: u32,
    pub plain: bool,
    pub format: OutputFormat,
}

impl GenerateSettings {
    /// Negative counts produce no output rather than an error.
    pub fn clamp_count(count: i64) -> usize {
        usize::try_from(count).unwrap_or(0)
    }

    /// A cap of zero would fail every generation before the first draw.
    pub fn check_max_attempts(field: &str, max_attempts: u32) -> Result<()> {
        if max_attempts == 0 {
            return Err(CpfError::Config {
                field: field.to_string(),
                value: max_attempts.to_string(),
                reason: "at least one attempt is required".to_string(),
            });
        }
        Ok(())
    }
}

impl Validate for GenerateSettings {
    fn validate(&self) -> Result<()> {
        Self::check_max_attempts("max_attempts", self.max_attempts)
    }
}

impl Default for GenerateSettings {
    fn default() -> Self {
        Self {
            count: Self::clamp_count(DEFAULT_COUNT),
            seed: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            plain: false,
            format: OutputFormat::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_count() {
        assert_eq!(GenerateSettings::clamp_count(20), 20);
        assert_eq!(GenerateSettings::clamp_count(0), 0);
        assert_eq!(GenerateSettings::clamp_count(-3), 0);
    }

    #[test]
    fn test_default_settings() {
        let settings = GenerateSettings::default();
        assert_eq!(settings.count, 20);
        assert_eq!(settings.format, OutputFormat::Text);
        assert!(!settings.plain);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_zero_max_attempts_rejected() {
        let settings = GenerateSettings {
            max_attempts: 0,
            ..GenerateSettings::default()
        };
        match settings.validate() {
            Err(CpfError::Config { field, value, .. }) => {
                assert_eq!(field, "max_attempts");
                assert_eq!(value, "0");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
