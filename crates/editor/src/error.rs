//! Editor error types.

use thiserror::Error;

/// Errors returned when the controller API is used out of order.
///
/// Field-level validation problems are not errors - they are collected in
/// [`crate::validate::ValidationErrors`] and surfaced per-field. This enum
/// covers misuse of the mode state machine itself.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EditorError {
    /// An operation required a loaded account.
    #[error("no account is loaded")]
    AccountNotLoaded,

    /// A mode transition was requested while another edit is active.
    #[error("another edit is already in progress")]
    EditInProgress,

    /// An edit operation was requested outside the matching edit mode.
    #[error("no matching edit is active")]
    EditNotActive,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            EditorError::EditInProgress.to_string(),
            "another edit is already in progress"
        );
        assert_eq!(EditorError::AccountNotLoaded.to_string(), "no account is loaded");
    }
}
