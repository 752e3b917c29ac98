pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{CliConfig, Command};

pub use crate::config::{toml_config::TomlConfig, GenerateSettings, OutputFormat};
pub use crate::core::checksum::{compute_verifiers, format_identifier};
pub use crate::core::generator::{generate, Generator};
pub use crate::core::mask::{mask, unmask};
pub use crate::core::validator::{check, is_valid, Rejection};
pub use crate::domain::model::{Cpf, Verifiers};
pub use crate::domain::ports::{DigitSource, RandomDigits};
pub use crate::utils::error::{CpfError, Result};
