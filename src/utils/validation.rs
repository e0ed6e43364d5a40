use crate::config::AgeBounds;
use crate::domain::model::UserRecord;
use crate::utils::error::{Result, ValidationError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct AgeValidator {
    bounds: AgeBounds,
}

impl AgeValidator {
    pub fn new(bounds: AgeBounds) -> Result<Self> {
        bounds.validate()?;
        Ok(Self { bounds })
    }

    pub fn bounds(&self) -> AgeBounds {
        self.bounds
    }

    /// Returns the record unchanged when its age lies within the bounds.
    ///
    /// The lower bound is checked first, so a record can only ever fail
    /// with one kind of error.
    pub fn validate(&self, user: UserRecord) -> Result<UserRecord> {
        if user.age() < self.bounds.minimum {
            tracing::debug!(name = user.name(), age = user.age(), "rejected: underage");
            return Err(ValidationError::Underage {
                name: user.name().to_string(),
                age: user.age(),
                minimum: self.bounds.minimum,
            });
        }

        if user.age() > self.bounds.maximum {
            tracing::debug!(name = user.name(), age = user.age(), "rejected: implausible age");
            return Err(ValidationError::ImplausibleAge {
                name: user.name().to_string(),
                age: user.age(),
                maximum: self.bounds.maximum,
            });
        }

        Ok(user)
    }
}

/// Validates against the default 18..=120 range.
pub fn validate_age(user: UserRecord) -> Result<UserRecord> {
    AgeValidator::default().validate(user)
}
