use thiserror::Error;

#[derive(Error, Debug)]
pub enum CpfError {
    #[error("Expected {expected} digits, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Element at position {position} is not a decimal digit: {value}")]
    InvalidDigit { position: usize, value: u8 },

    #[error("No non-degenerate base drawn after {attempts} attempts")]
    ExhaustedRetries { attempts: u32 },

    #[error("Configuration error in '{field}' (value '{value}'): {reason}")]
    Config {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CpfError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CpfError::InvalidLength { .. } | CpfError::InvalidDigit { .. } => {
                "Pass exactly 9 base digits (or 11 for formatting), each between 0 and 9"
            }
            CpfError::ExhaustedRetries { .. } => {
                "Raise max_attempts or check that the digit source is not stuck on one value"
            }
            CpfError::Config { .. } => "Fix the offending value in the config file or CLI flags",
            CpfError::Io(_) => "Check that the file exists and is readable",
            CpfError::TomlParse(_) => "Make sure the config file is valid TOML",
            CpfError::Json(_) => "Retry with text output",
        }
    }
}

pub type Result<T> = std::result::Result<T, CpfError>;
