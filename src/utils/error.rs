use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("User {name} is under {minimum}.")]
    Underage { name: String, age: u8, minimum: u8 },

    #[error("User {name}'s age {age} is not valid.")]
    ImplausibleAge { name: String, age: u8, maximum: u8 },

    #[error("Invalid age bounds: minimum {minimum} is greater than maximum {maximum}")]
    InvalidBounds { minimum: u8, maximum: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Underage,
    ImplausibleAge,
    Configuration,
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::Underage { .. } => ErrorKind::Underage,
            ValidationError::ImplausibleAge { .. } => ErrorKind::ImplausibleAge,
            ValidationError::InvalidBounds { .. } => ErrorKind::Configuration,
        }
    }

    /// Name of the rejected user, for record-level failures only.
    pub fn user_name(&self) -> Option<&str> {
        match self {
            ValidationError::Underage { name, .. } | ValidationError::ImplausibleAge { name, .. } => {
                Some(name)
            }
            _ => None,
        }
    }
}

/// Failures that abort a whole run rather than a single record.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation setup failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ValidationError>;
