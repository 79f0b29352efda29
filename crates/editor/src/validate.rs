//! Pure field validation.
//!
//! Validators take a draft and return a [`ValidationErrors`] map - an empty
//! map means the draft is valid. They never touch state and never return
//! `Err`: a rejected field is data for the presentation layer, not a fault.

use std::collections::BTreeMap;

use secrecy::ExposeSecret;
use serde::Serialize;

use profile_console_core::{Email, PhoneNumber};

use crate::models::{PasswordChangeDraft, ProfileEditDraft};

/// Minimum accepted length for a new password.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Form fields that can carry a validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Phone,
    Photo,
    CurrentPassword,
    NewPassword,
    ConfirmNewPassword,
}

impl Field {
    /// Stable snake_case name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Photo => "photo",
            Self::CurrentPassword => "current_password",
            Self::NewPassword => "new_password",
            Self::ConfirmNewPassword => "confirm_new_password",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field validation messages.
///
/// Fully replaced on each validation pass; individual entries are cleared
/// as the user edits the corresponding field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    /// An empty error map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True if every field passed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of rejected fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message for a field, if it was rejected.
    #[must_use]
    pub fn message(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Record a message for a field, replacing any previous one.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Clear the message for a single field.
    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    /// Clear every message.
    pub fn clear_all(&mut self) {
        self.0.clear();
    }

    /// Iterate over `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Validate the basic-info draft (name, email, phone).
///
/// Photo acceptance happens at selection time, not here - an upload that
/// made it into the draft has already passed its checks.
#[must_use]
pub fn basic_info(draft: &ProfileEditDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if draft.name.trim().is_empty() {
        errors.insert(Field::Name, "name is required");
    }

    if let Err(e) = Email::parse(&draft.email) {
        errors.insert(Field::Email, e.to_string());
    }

    // Phone is optional; validate only when something was entered
    let phone = draft.phone.trim();
    if !phone.is_empty() {
        if let Err(e) = PhoneNumber::parse(phone) {
            errors.insert(Field::Phone, e.to_string());
        }
    }

    errors
}

/// Validate the password-change draft.
#[must_use]
pub fn password_change(draft: &PasswordChangeDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if draft.current_password.expose_secret().is_empty() {
        errors.insert(Field::CurrentPassword, "current password is required");
    }

    let new_password = draft.new_password.expose_secret();
    if new_password.is_empty() {
        errors.insert(Field::NewPassword, "new password is required");
    } else if new_password.len() < MIN_PASSWORD_LENGTH {
        errors.insert(
            Field::NewPassword,
            format!("new password must be at least {MIN_PASSWORD_LENGTH} characters"),
        );
    }

    let confirmation = draft.confirm_new_password.expose_secret();
    if confirmation.is_empty() {
        errors.insert(Field::ConfirmNewPassword, "please confirm the new password");
    } else if confirmation != new_password {
        errors.insert(Field::ConfirmNewPassword, "passwords do not match");
    }

    errors
}
