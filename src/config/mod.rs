use crate::utils::error::{Result, ValidationError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};

pub const MINIMUM_AGE: u8 = 18;
pub const MAXIMUM_AGE: u8 = 120;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, clap::Parser)]
#[command(name = "user-age-check")]
#[command(about = "Checks a fixed set of user records for a plausible adult age")]
pub struct CliConfig {
    #[arg(long, help = "Enable verbose diagnostics on stderr")]
    pub verbose: bool,
}

/// Inclusive age range a record must fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBounds {
    pub minimum: u8,
    pub maximum: u8,
}

impl AgeBounds {
    pub fn new(minimum: u8, maximum: u8) -> Self {
        Self { minimum, maximum }
    }

    pub fn contains(&self, age: u8) -> bool {
        (self.minimum..=self.maximum).contains(&age)
    }
}

impl Default for AgeBounds {
    fn default() -> Self {
        Self::new(MINIMUM_AGE, MAXIMUM_AGE)
    }
}

impl Validate for AgeBounds {
    fn validate(&self) -> Result<()> {
        if self.minimum > self.maximum {
            return Err(ValidationError::InvalidBounds {
                minimum: self.minimum,
                maximum: self.maximum,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds_are_inclusive() {
        let bounds = AgeBounds::default();
        assert!(bounds.contains(18));
        assert!(bounds.contains(120));
        assert!(!bounds.contains(17));
        assert!(!bounds.contains(121));
    }

    #[test]
    fn test_inverted_bounds_fail_validation() {
        assert!(AgeBounds::default().validate().is_ok());
        assert!(AgeBounds::new(30, 30).validate().is_ok());
        assert_eq!(
            AgeBounds::new(65, 18).validate(),
            Err(ValidationError::InvalidBounds {
                minimum: 65,
                maximum: 18
            })
        );
    }
}
