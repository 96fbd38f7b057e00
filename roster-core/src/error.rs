//! Unified error type definition

use thiserror::Error;

use crate::types::{FormField, RecordId};

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Record not found
    #[error("Record not found: {0}")]
    RecordNotFound(RecordId),

    /// A form field was empty after trimming
    #[error("Field is required: {0}")]
    EmptyField(FormField),
}

impl CoreError {
    /// Whether it is expected behavior (user input, record no longer exists),
    /// used for log classification.
    ///
    /// Level `warn` or lower should be used when returning `true` and level
    /// `error` when returning `false`.
    /// **Please update this method when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::RecordNotFound(_) | Self::EmptyField(_) => true,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_field() {
        let err = CoreError::EmptyField(FormField::Email);
        assert_eq!(err.to_string(), "Field is required: email");
        assert!(err.is_expected());
    }

    #[test]
    fn not_found_carries_the_id() {
        let id = RecordId::new();
        let err = CoreError::RecordNotFound(id);
        assert!(err.to_string().contains(&id.to_string()));
    }
}
