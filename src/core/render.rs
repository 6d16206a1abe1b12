use crate::domain::model::{Comparison, TimeReport};
use crate::utils::error::{Result, TravelerError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Plain,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["markdown", "plain", "json"];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "markdown",
            OutputFormat::Plain => "plain",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = TravelerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "markdown" => Ok(OutputFormat::Markdown),
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            other => Err(TravelerError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: format!("Valid formats: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

pub fn render(report: &TimeReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Markdown => Ok(render_text(report, "**")),
        OutputFormat::Plain => Ok(render_text(report, "")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// 四段文字：原始輸入加上三個比較句，數值前後加上 `emphasis`
pub fn render_text(report: &TimeReport, emphasis: &str) -> String {
    let sentence = |lead: &str, cmp: &Comparison| {
        format!(
            "- {} approximately {emphasis}{}{emphasis} thousand years {} {}.",
            lead,
            cmp.millennia,
            cmp.relation,
            cmp.reference.description()
        )
    };

    [
        format!("{emphasis}Time Period:{emphasis} {}", report.period.input),
        sentence("The entered time period is", &report.today),
        sentence("It is", &report.oxford),
        sentence("It is", &report.oldest_civilization),
    ]
    .join("\n\n")
}
