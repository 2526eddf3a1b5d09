use thiserror::Error;

/// Failure raised when an entity is constructed or mutated with data that
/// violates one of its invariants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    OutOfRange {
        field: &'static str,
        message: String,
    },
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },
    #[error("{field}: {message}")]
    IncompatibleCombination {
        field: &'static str,
        message: String,
    },
}

impl ValidationError {
    pub fn out_of_range(field: &'static str, message: impl Into<String>) -> Self {
        ValidationError::OutOfRange {
            field,
            message: message.into(),
        }
    }

    pub fn empty(field: &'static str) -> Self {
        ValidationError::EmptyField { field }
    }

    pub fn incompatible(field: &'static str, message: impl Into<String>) -> Self {
        ValidationError::IncompatibleCombination {
            field,
            message: message.into(),
        }
    }

    /// Name of the field whose rule was violated.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::OutOfRange { field, .. }
            | ValidationError::EmptyField { field }
            | ValidationError::IncompatibleCombination { field, .. } => field,
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;
