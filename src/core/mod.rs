pub mod calculator;
pub mod parser;
pub mod render;
pub mod session;

pub use crate::domain::model::{Comparison, Era, HistoricalYear, Relation, TimeReport};
pub use crate::domain::ports::Clock;
pub use crate::utils::error::{InputError, Result};
