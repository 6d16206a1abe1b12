use crate::core::render::OutputFormat;
use crate::utils::error::{Result, TravelerError};
use crate::utils::validation::{validate_one_of, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub output: Option<OutputConfig>,
    pub clock: Option<ClockConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockConfig {
    /// 固定「今天」的年份，未設定時讀系統時鐘
    pub current_year: Option<i64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TravelerError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TravelerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TRAVELER_YEAR})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TravelerError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 取得輸出格式，未設定時為 None
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .map(str::parse::<OutputFormat>)
            .transpose()
    }

    pub fn current_year(&self) -> Option<i64> {
        self.clock.as_ref().and_then(|c| c.current_year)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(format) = self.output.as_ref().and_then(|o| o.format.as_deref()) {
            validate_one_of("output.format", format, &OutputFormat::NAMES)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[output]
format = "plain"

[clock]
current_year = 2024
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.output_format().unwrap(), Some(OutputFormat::Plain));
        assert_eq!(config.current_year(), Some(2024));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.output_format().unwrap(), None);
        assert_eq!(config.current_year(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TIME_TRAVELER_TEST_YEAR", "1999");

        let toml_content = r#"
[clock]
current_year = ${TIME_TRAVELER_TEST_YEAR}
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.current_year(), Some(1999));

        std::env::remove_var("TIME_TRAVELER_TEST_YEAR");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[output]
format = "yaml"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
        assert!(config.output_format().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[output]
format = "json"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output_format().unwrap(), Some(OutputFormat::Json));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = TomlConfig::from_file("/nonexistent/time-traveler.toml");
        assert!(matches!(result, Err(TravelerError::IoError(_))));
    }
}
