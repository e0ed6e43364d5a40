pub mod driver;
pub mod report;

pub use crate::domain::model::UserRecord;
pub use crate::utils::error::Result;
