use crate::utils::error::{Result, TravelerError};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: impl Into<String>) -> TravelerError {
    TravelerError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// 設定檔路徑必須非空、不含 NUL，且副檔名為 .toml
pub fn validate_config_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }
    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    match Path::new(path).extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(()),
        Some(ext) => Err(invalid(
            field_name,
            path,
            format!("Unsupported config extension: {}. Expected toml", ext),
        )),
        None => Err(invalid(field_name, path, "Config file must have a .toml extension")),
    }
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(invalid(
            field_name,
            value,
            format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        ))
    }
}
