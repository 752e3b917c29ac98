use crate::utils::error::{CpfError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// A config path has to name something: non-empty and free of NUL bytes.
pub fn validate_config_path(path: &str) -> Result<()> {
    let reason = if path.is_empty() {
        "path is empty"
    } else if path.contains('\0') {
        "path contains a NUL byte"
    } else {
        return Ok(());
    };

    Err(CpfError::Config {
        field: "config".to_string(),
        value: path.escape_default().to_string(),
        reason: reason.to_string(),
    })
}
