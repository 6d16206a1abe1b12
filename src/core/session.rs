use crate::core::calculator::YearDifferenceCalculator;
use crate::core::render::OutputFormat;
use crate::domain::ports::Clock;
use crate::utils::error::{InputError, Result};
use std::io::{BufRead, Write};

pub const TITLE: &str = "Time Traveler";
pub const PROMPT: &str = "Enter a time period (e.g., 1900 B.C. or 2020 AD):";

pub struct TravelerSession<C: Clock> {
    calculator: YearDifferenceCalculator<C>,
    format: OutputFormat,
}

impl<C: Clock> TravelerSession<C> {
    pub fn new(calculator: YearDifferenceCalculator<C>, format: OutputFormat) -> Self {
        Self { calculator, format }
    }

    /// 逐一計算命令列給的時期，回傳失敗的數量
    pub fn run_batch<W: Write, E: Write>(
        &self,
        periods: &[String],
        out: &mut W,
        err: &mut E,
    ) -> Result<usize> {
        let mut failures = 0;

        for (index, period) in periods.iter().enumerate() {
            if index > 0 {
                writeln!(out)?;
            }
            match self.calculator.compute_as(period, self.format) {
                Ok(message) => writeln!(out, "{}", message)?,
                Err(e) if e.is_input_error() => {
                    failures += 1;
                    writeln!(err, "{}", e)?;
                }
                Err(e) => return Err(e),
            }
        }

        tracing::debug!(
            "Processed {} period(s) as {}, {} failed",
            periods.len(),
            self.format,
            failures
        );
        Ok(failures)
    }

    /// 互動模式：每讀一行就輸出結果或錯誤訊息，直到 EOF
    ///
    /// 非 UTF-8 的行視為無效年份，不會中斷整個 session。
    pub fn run_interactive<R: BufRead, W: Write>(&self, mut input: R, out: &mut W) -> Result<()> {
        writeln!(out, "{}", TITLE)?;
        writeln!(out, "{}", PROMPT)?;
        out.flush()?;

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let result = match std::str::from_utf8(&buf) {
                Ok(line) => self.calculator.compute_as(line, self.format),
                Err(e) => {
                    tracing::debug!("Skipping non UTF-8 line: {}", e);
                    Err(InputError::InvalidYear.into())
                }
            };

            match result {
                Ok(message) => writeln!(out, "{}", message)?,
                Err(e) if e.is_input_error() => writeln!(out, "{}", e)?,
                Err(e) => return Err(e),
            }
            writeln!(out)?;
            out.flush()?;
        }

        Ok(())
    }
}
