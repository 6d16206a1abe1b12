use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Era {
    Bc,
    Ad,
    /// 沒有標記，視為西元後
    Unspecified,
}

/// 解析後的年份，採天文紀年 (西元前為負數)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalYear {
    /// 去除前後空白的原始輸入，保留大小寫
    pub input: String,
    pub era: Era,
    pub year: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    Today,
    OxfordFounding,
    OldestCivilization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferencePoint {
    pub kind: ReferenceKind,
    pub year: i64,
}

impl ReferencePoint {
    pub const OXFORD_FOUNDING_YEAR: i64 = 1096;
    pub const OLDEST_CIVILIZATION_YEAR: i64 = -3500;

    pub fn today(current_year: i64) -> Self {
        Self {
            kind: ReferenceKind::Today,
            year: current_year,
        }
    }

    pub fn oxford_founding() -> Self {
        Self {
            kind: ReferenceKind::OxfordFounding,
            year: Self::OXFORD_FOUNDING_YEAR,
        }
    }

    pub fn oldest_civilization() -> Self {
        Self {
            kind: ReferenceKind::OldestCivilization,
            year: Self::OLDEST_CIVILIZATION_YEAR,
        }
    }

    /// 比較的方向：今天用 ago / in the future，其餘用 before / after
    pub fn relation_to(&self, year: i64) -> Relation {
        match self.kind {
            ReferenceKind::Today if self.year >= year => Relation::Ago,
            ReferenceKind::Today => Relation::InTheFuture,
            _ if year < self.year => Relation::Before,
            _ => Relation::After,
        }
    }

    pub fn description(&self) -> &'static str {
        match self.kind {
            ReferenceKind::Today => "today",
            ReferenceKind::OxfordFounding => {
                "the foundation of Oxford University (c. 1096 AD)"
            }
            ReferenceKind::OldestCivilization => {
                "the oldest recorded civilization (representative date: 3500 B.C.)"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relation {
    #[serde(rename = "ago")]
    Ago,
    #[serde(rename = "in the future")]
    InTheFuture,
    #[serde(rename = "before")]
    Before,
    #[serde(rename = "after")]
    After,
}

impl Relation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Ago => "ago",
            Relation::InTheFuture => "in the future",
            Relation::Before => "before",
            Relation::After => "after",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 以千年為單位、四捨五入到小數一位的數值，內部存成十分位整數
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(into = "f64")]
pub struct Millennia {
    tenths: u128,
}

impl Millennia {
    /// 0.05 千年 (50 年) 以上進位
    pub fn from_years(magnitude: u128) -> Self {
        Self {
            tenths: magnitude / 100 + u128::from(magnitude % 100 >= 50),
        }
    }
}

impl From<Millennia> for f64 {
    fn from(value: Millennia) -> Self {
        value.tenths as f64 / 10.0
    }
}

impl fmt::Display for Millennia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.tenths / 10, self.tenths % 10)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub reference: ReferencePoint,
    pub relation: Relation,
    /// 年份差的絕對值
    pub magnitude: u128,
    pub millennia: Millennia,
}

impl Comparison {
    pub fn between(year: i64, reference: ReferencePoint) -> Self {
        let magnitude = (i128::from(reference.year) - i128::from(year)).unsigned_abs();
        Self {
            reference,
            relation: reference.relation_to(year),
            magnitude,
            millennia: Millennia::from_years(magnitude),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeReport {
    pub period: HistoricalYear,
    pub current_year: i64,
    pub today: Comparison,
    pub oxford: Comparison,
    pub oldest_civilization: Comparison,
}
