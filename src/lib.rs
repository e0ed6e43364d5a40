pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::AgeBounds;
pub use crate::core::driver::{Driver, RunSummary};
pub use crate::core::report::Outcome;
pub use domain::{model::UserRecord, sample::sample_records};
pub use utils::error::{AppError, ErrorKind, Result, ValidationError};
pub use utils::validation::{validate_age, AgeValidator};
