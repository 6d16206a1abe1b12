pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{FixedClock, SystemClock};
pub use config::{CliConfig, Settings};
pub use core::{
    calculator::{calculate_time_difference, YearDifferenceCalculator},
    render::OutputFormat,
    session::TravelerSession,
};
pub use utils::error::{InputError, Result, TravelerError};
