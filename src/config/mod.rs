pub mod toml_config;

use crate::adapters::{FixedClock, SystemClock};
use crate::core::render::OutputFormat;
use crate::domain::ports::Clock;
use crate::utils::error::Result;
use crate::utils::validation::{validate_config_path, Validate};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "time-traveler"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Compare a historical year with today, Oxford's founding and the oldest civilization")
)]
pub struct CliConfig {
    /// Time periods such as "1900 B.C." or "2020 AD"; reads stdin interactively when omitted
    #[cfg_attr(feature = "cli", arg(value_name = "PERIOD", allow_hyphen_values = true))]
    pub periods: Vec<String>,

    /// Path to TOML configuration file
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub config: Option<String>,

    /// Output format (overrides the config file)
    #[cfg_attr(feature = "cli", arg(short, long, value_enum))]
    pub format: Option<OutputFormat>,

    /// Use this year as "today" instead of the system clock
    #[cfg_attr(feature = "cli", arg(long, allow_hyphen_values = true))]
    pub year: Option<i64>,

    /// Enable verbose output
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub verbose: bool,

    /// Emit logs as JSON
    #[cfg_attr(feature = "cli", arg(long))]
    pub log_json: bool,
}

/// 合併 CLI 與 TOML 之後的最終設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub format: OutputFormat,
    pub fixed_year: Option<i64>,
}

impl Settings {
    pub fn clock(&self) -> Box<dyn Clock> {
        match self.fixed_year {
            Some(year) => Box::new(FixedClock::new(year)),
            None => Box::new(SystemClock),
        }
    }
}

impl CliConfig {
    /// 優先順序：命令列 > 設定檔 > 預設值
    pub fn resolve(&self) -> Result<Settings> {
        let file_config = match &self.config {
            Some(path) => {
                tracing::debug!("📁 Loading configuration from: {}", path);
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                config
            }
            None => TomlConfig::default(),
        };

        self.merge(&file_config)
    }

    fn merge(&self, file_config: &TomlConfig) -> Result<Settings> {
        let format = match self.format {
            Some(format) => format,
            None => file_config.output_format()?.unwrap_or_default(),
        };

        Ok(Settings {
            format,
            fixed_year: self.year.or_else(|| file_config.current_year()),
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_config_path("config", path)?;
        }
        Ok(())
    }
}
