use crate::domain::ports::Clock;
use chrono::{Datelike, Local};

/// 讀取系統時鐘 (本地時區) 的年份
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i64 {
        i64::from(Local::now().year())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    year: i64,
}

impl FixedClock {
    pub fn new(year: i64) -> Self {
        Self { year }
    }
}

impl Clock for FixedClock {
    fn current_year(&self) -> i64 {
        self.year
    }
}
