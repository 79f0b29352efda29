//! Transient edit drafts.
//!
//! Drafts hold raw user input, distinct from the committed
//! [`AdminAccount`](super::AdminAccount) record. They live inside the
//! controller's mode enum, so a draft cannot exist outside its edit mode.

use secrecy::{ExposeSecret, SecretString};

use super::account::AdminAccount;
use super::photo::PendingPhoto;

/// Editable copy of the basic account fields.
///
/// Field values are raw strings as typed; validation happens at submit
/// time (and parse-validated types are only constructed once validation
/// passes).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileEditDraft {
    /// Display name as typed.
    pub name: String,
    /// Email address as typed.
    pub email: String,
    /// Phone number as typed (may be empty - the field is optional).
    pub phone: String,
    /// Accepted photo upload awaiting save, if any.
    pub pending_photo: Option<PendingPhoto>,
}

impl ProfileEditDraft {
    /// Seed a draft from the committed account record.
    #[must_use]
    pub fn from_account(account: &AdminAccount) -> Self {
        Self {
            name: account.name.clone(),
            email: account.email.as_str().to_owned(),
            phone: account
                .phone
                .as_ref()
                .map(|p| p.as_str().to_owned())
                .unwrap_or_default(),
            pending_photo: None,
        }
    }
}

/// Transient password-change input.
///
/// All three fields are secrets: they are redacted from `Debug` output,
/// never serialized, and the draft is dropped after any submit attempt.
#[derive(Clone)]
pub struct PasswordChangeDraft {
    /// The admin's current password.
    pub current_password: SecretString,
    /// The requested new password.
    pub new_password: SecretString,
    /// Confirmation of the new password.
    pub confirm_new_password: SecretString,
}

impl PasswordChangeDraft {
    /// True if nothing has been typed into any field yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current_password.expose_secret().is_empty()
            && self.new_password.expose_secret().is_empty()
            && self.confirm_new_password.expose_secret().is_empty()
    }
}

impl Default for PasswordChangeDraft {
    fn default() -> Self {
        Self {
            current_password: SecretString::from(String::new()),
            new_password: SecretString::from(String::new()),
            confirm_new_password: SecretString::from(String::new()),
        }
    }
}

impl std::fmt::Debug for PasswordChangeDraft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordChangeDraft")
            .field("current_password", &"[REDACTED]")
            .field("new_password", &"[REDACTED]")
            .field("confirm_new_password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use profile_console_core::{AdminRole, AdminUserId, Email, PhoneNumber};

    use super::*;

    fn account() -> AdminAccount {
        AdminAccount {
            id: AdminUserId::new(1),
            name: "Alex Reyes".to_string(),
            email: Email::parse("admin@example.com").unwrap(),
            phone: Some(PhoneNumber::parse("081-234-5678").unwrap()),
            role: AdminRole::SuperAdmin,
            is_active: true,
            created_at: Utc::now(),
            profile_photo: None,
        }
    }

    #[test]
    fn test_draft_seeded_from_account() {
        let draft = ProfileEditDraft::from_account(&account());
        assert_eq!(draft.name, "Alex Reyes");
        assert_eq!(draft.email, "admin@example.com");
        assert_eq!(draft.phone, "081-234-5678");
        assert!(draft.pending_photo.is_none());
    }

    #[test]
    fn test_draft_seeded_without_phone() {
        let mut account = account();
        account.phone = None;
        let draft = ProfileEditDraft::from_account(&account);
        assert_eq!(draft.phone, "");
    }

    #[test]
    fn test_password_draft_debug_redacts() {
        let draft = PasswordChangeDraft {
            current_password: SecretString::from("hunter2".to_string()),
            new_password: SecretString::from("correct horse".to_string()),
            confirm_new_password: SecretString::from("correct horse".to_string()),
        };
        let debug = format!("{draft:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("correct horse"));
    }

    #[test]
    fn test_password_draft_is_empty() {
        assert!(PasswordChangeDraft::default().is_empty());

        let mut draft = PasswordChangeDraft::default();
        draft.new_password = SecretString::from("x".to_string());
        assert!(!draft.is_empty());
    }
}
