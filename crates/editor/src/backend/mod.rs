//! Profile backend seam.
//!
//! [`ProfileBackend`] is the boundary where a real authentication/profile
//! service will plug in. Until that service exists, [`MockBackend`] stands
//! in with canned data and simulated latency.

pub mod mock;

pub use mock::MockBackend;

use secrecy::SecretString;
use thiserror::Error;

use profile_console_core::{Email, PhoneNumber};

use crate::models::{AdminAccount, PhotoUpload};

/// Errors from a backend round trip.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The service could not be reached or refused the request.
    #[error("profile service is unavailable")]
    Unavailable,
}

/// Validated basic-info changes, ready for the wire.
///
/// Constructed from a draft only after validation passes, so every field
/// here is already well-formed.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    /// New display name.
    pub name: String,
    /// New email address.
    pub email: Email,
    /// New phone number, or `None` to clear it.
    pub phone: Option<PhoneNumber>,
    /// Accepted photo upload, if one was selected.
    pub photo: Option<PhotoUpload>,
}

/// Password-change request.
///
/// Secrets stay wrapped end to end; nothing here is logged.
#[derive(Clone)]
pub struct PasswordChange {
    /// The admin's current password.
    pub current_password: SecretString,
    /// The requested new password.
    pub new_password: SecretString,
}

impl std::fmt::Debug for PasswordChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordChange")
            .field("current_password", &"[REDACTED]")
            .field("new_password", &"[REDACTED]")
            .finish()
    }
}

/// Asynchronous profile service operations.
pub trait ProfileBackend {
    /// Fetch the current admin account.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the service cannot be reached.
    fn fetch_account(
        &self,
    ) -> impl Future<Output = Result<AdminAccount, BackendError>> + Send;

    /// Apply basic-info changes and return the updated account.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the service cannot be reached.
    fn update_profile(
        &self,
        update: ProfileUpdate,
    ) -> impl Future<Output = Result<AdminAccount, BackendError>> + Send;

    /// Change the account password.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the service cannot be reached.
    fn change_password(
        &self,
        change: PasswordChange,
    ) -> impl Future<Output = Result<(), BackendError>> + Send;
}
