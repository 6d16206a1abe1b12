use crate::adapters::SystemClock;
use crate::core::parser::parse_time_period;
use crate::core::render::{self, OutputFormat};
use crate::domain::model::{Comparison, ReferencePoint, TimeReport};
use crate::domain::ports::Clock;
use crate::utils::error::{InputError, Result};

/// 把輸入的年份與今天、牛津大學創校 (1096 AD)、最古老文明 (3500 B.C.) 比較
#[derive(Debug, Clone, Default)]
pub struct YearDifferenceCalculator<C: Clock = SystemClock> {
    clock: C,
}

impl YearDifferenceCalculator<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> YearDifferenceCalculator<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// 回傳 Markdown 格式的結果；錯誤訊息可直接顯示給使用者
    pub fn compute(&self, raw: &str) -> std::result::Result<String, InputError> {
        let report = self.evaluate(raw)?;
        Ok(render::render_text(&report, "**"))
    }

    pub fn compute_as(&self, raw: &str, format: OutputFormat) -> Result<String> {
        let report = self.evaluate(raw)?;
        render::render(&report, format)
    }

    pub fn evaluate(&self, raw: &str) -> std::result::Result<TimeReport, InputError> {
        let period = parse_time_period(raw)?;
        let current_year = self.clock.current_year();
        let year = period.year;

        let report = TimeReport {
            current_year,
            today: Comparison::between(year, ReferencePoint::today(current_year)),
            oxford: Comparison::between(year, ReferencePoint::oxford_founding()),
            oldest_civilization: Comparison::between(
                year,
                ReferencePoint::oldest_civilization(),
            ),
            period,
        };

        tracing::debug!(
            "Year {} vs {}: {} {}, oxford {} {}, oldest {} {}",
            year,
            current_year,
            report.today.magnitude,
            report.today.relation,
            report.oxford.magnitude,
            report.oxford.relation,
            report.oldest_civilization.magnitude,
            report.oldest_civilization.relation
        );

        Ok(report)
    }
}

/// 使用系統時鐘的便捷函式
pub fn calculate_time_difference(raw: &str) -> std::result::Result<String, InputError> {
    YearDifferenceCalculator::new().compute(raw)
}
