use crate::domain::model::UserRecord;
use crate::utils::error::{Result, ValidationError};
use std::fmt;

/// The printable result of checking one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<'a> {
    Accepted(&'a UserRecord),
    Rejected(&'a ValidationError),
}

impl<'a> Outcome<'a> {
    pub fn from_result(result: &'a Result<UserRecord>) -> Self {
        match result {
            Ok(user) => Outcome::Accepted(user),
            Err(err) => Outcome::Rejected(err),
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted(_))
    }
}

impl fmt::Display for Outcome<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Accepted(user) => write!(f, "User {} has a valid age.", user.name()),
            // Rejections are printed verbatim.
            Outcome::Rejected(err) => write!(f, "{}", err),
        }
    }
}
