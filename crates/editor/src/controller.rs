//! Profile form controller.
//!
//! Owns the editor's entire mutable state: the committed account, the
//! active mode (with its draft), per-field validation messages, and the
//! transient UI status. Generic over [`ProfileBackend`] so the mock can be
//! swapped for the real service without touching this module.

use secrecy::SecretString;
use tracing::{error, info, warn};

use profile_console_core::{Email, PhoneNumber};

use crate::backend::{PasswordChange, ProfileBackend, ProfileUpdate};
use crate::config::EditorConfig;
use crate::error::EditorError;
use crate::models::{AdminAccount, PasswordChangeDraft, PendingPhoto, PhotoUpload, ProfileEditDraft};
use crate::status::UiStatus;
use crate::validate::{self, Field, ValidationErrors};

const MSG_LOAD_FAILED: &str = "Could not load your profile. Please try again.";
const MSG_VALIDATION_FAILED: &str = "Please correct the highlighted fields.";
const MSG_SAVE_FAILED: &str = "Something went wrong while saving. Please try again.";
const MSG_PROFILE_SAVED: &str = "Profile updated successfully.";
const MSG_PASSWORD_CHANGED: &str = "Password changed successfully.";

/// What the editor is currently doing.
///
/// The editing variants own their draft, so a draft cannot exist outside
/// its mode and two modes cannot be active at once.
#[derive(Debug, Clone, Default)]
pub enum EditorMode {
    /// Read-only display of the committed account.
    #[default]
    View,
    /// Basic-info fields are being edited.
    EditingBasic(ProfileEditDraft),
    /// The password-change form is open.
    EditingPassword(PasswordChangeDraft),
}

impl EditorMode {
    /// True in read-only display mode.
    #[must_use]
    pub const fn is_view(&self) -> bool {
        matches!(self, Self::View)
    }
}

/// Controller for the admin profile editor.
///
/// All operations take `&mut self`; overlapping saves are unrepresentable,
/// and the `saving` flag additionally refuses re-entry while a round trip
/// is in flight (the UI disables its controls off the same flag).
pub struct ProfileFormController<B> {
    backend: B,
    config: EditorConfig,
    account: Option<AdminAccount>,
    mode: EditorMode,
    errors: ValidationErrors,
    status: UiStatus,
}

impl<B: ProfileBackend> ProfileFormController<B> {
    /// Create a controller in view mode with no account loaded.
    #[must_use]
    pub fn new(backend: B, config: EditorConfig) -> Self {
        let status = UiStatus::new(config.status_ttl);
        Self {
            backend,
            config,
            account: None,
            mode: EditorMode::View,
            errors: ValidationErrors::new(),
            status,
        }
    }

    // =========================================================================
    // Read accessors
    // =========================================================================

    /// The backend this controller talks to.
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// The committed account, once loaded.
    #[must_use]
    pub const fn account(&self) -> Option<&AdminAccount> {
        self.account.as_ref()
    }

    /// The active mode and its draft, if any.
    #[must_use]
    pub const fn mode(&self) -> &EditorMode {
        &self.mode
    }

    /// Per-field validation messages from the last validation pass.
    #[must_use]
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Loading/saving flags and the transient status message.
    #[must_use]
    pub const fn status(&self) -> &UiStatus {
        &self.status
    }

    /// URL of the committed profile photo, rendered against the
    /// configured asset base.
    #[must_use]
    pub fn photo_url(&self) -> Option<url::Url> {
        self.account
            .as_ref()?
            .photo_url(&self.config.asset_base_url)
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Fetch the current admin account from the backend.
    ///
    /// On failure the account stays unloaded and an error status message
    /// is set; the caller may invoke this again to retry.
    pub async fn load_account(&mut self) {
        if self.status.loading {
            return;
        }
        self.status.loading = true;

        match self.backend.fetch_account().await {
            Ok(account) => {
                info!(account_id = %account.id, "account loaded");
                self.account = Some(account);
                self.status.clear_message();
            }
            Err(e) => {
                error!(error = %e, "account load failed");
                self.status.set_error(MSG_LOAD_FAILED);
            }
        }

        self.status.loading = false;
    }

    // =========================================================================
    // Mode transitions
    // =========================================================================

    /// Open the basic-info editor, seeding the draft from the account.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::EditInProgress`] if an edit is already
    /// active, or [`EditorError::AccountNotLoaded`] before a successful
    /// load.
    pub fn begin_edit(&mut self) -> Result<(), EditorError> {
        if !self.mode.is_view() {
            return Err(EditorError::EditInProgress);
        }
        let account = self.account.as_ref().ok_or(EditorError::AccountNotLoaded)?;

        self.mode = EditorMode::EditingBasic(ProfileEditDraft::from_account(account));
        self.errors.clear_all();
        self.status.clear_message();
        Ok(())
    }

    /// Open the password-change form with an empty draft.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::EditInProgress`] if an edit is already
    /// active, or [`EditorError::AccountNotLoaded`] before a successful
    /// load.
    pub fn begin_password_change(&mut self) -> Result<(), EditorError> {
        if !self.mode.is_view() {
            return Err(EditorError::EditInProgress);
        }
        if self.account.is_none() {
            return Err(EditorError::AccountNotLoaded);
        }

        self.mode = EditorMode::EditingPassword(PasswordChangeDraft::default());
        self.errors.clear_all();
        self.status.clear_message();
        Ok(())
    }

    /// Discard the active draft and return to view mode.
    ///
    /// Clears field errors and any status message. No-op in view mode.
    pub fn cancel(&mut self) {
        self.mode = EditorMode::View;
        self.errors.clear_all();
        self.status.clear_message();
    }

    // =========================================================================
    // Field edits (each clears its own validation message)
    // =========================================================================

    /// Update the name field of the basic-info draft.
    pub fn update_name(&mut self, value: impl Into<String>) {
        if let EditorMode::EditingBasic(draft) = &mut self.mode {
            draft.name = value.into();
            self.errors.clear(Field::Name);
        }
    }

    /// Update the email field of the basic-info draft.
    pub fn update_email(&mut self, value: impl Into<String>) {
        if let EditorMode::EditingBasic(draft) = &mut self.mode {
            draft.email = value.into();
            self.errors.clear(Field::Email);
        }
    }

    /// Update the phone field of the basic-info draft.
    pub fn update_phone(&mut self, value: impl Into<String>) {
        if let EditorMode::EditingBasic(draft) = &mut self.mode {
            draft.phone = value.into();
            self.errors.clear(Field::Phone);
        }
    }

    /// Update the current-password field of the password draft.
    pub fn update_current_password(&mut self, value: impl Into<String>) {
        if let EditorMode::EditingPassword(draft) = &mut self.mode {
            draft.current_password = SecretString::from(value.into());
            self.errors.clear(Field::CurrentPassword);
        }
    }

    /// Update the new-password field of the password draft.
    pub fn update_new_password(&mut self, value: impl Into<String>) {
        if let EditorMode::EditingPassword(draft) = &mut self.mode {
            draft.new_password = SecretString::from(value.into());
            self.errors.clear(Field::NewPassword);
        }
    }

    /// Update the confirmation field of the password draft.
    pub fn update_confirm_password(&mut self, value: impl Into<String>) {
        if let EditorMode::EditingPassword(draft) = &mut self.mode {
            draft.confirm_new_password = SecretString::from(value.into());
            self.errors.clear(Field::ConfirmNewPassword);
        }
    }

    /// Accept a photo selection into the basic-info draft.
    ///
    /// A file that is not an image, or exceeds the configured size
    /// ceiling, sets a photo-field validation message and leaves any
    /// previously accepted photo untouched.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::EditNotActive`] outside basic-info editing.
    pub fn set_photo(&mut self, upload: PhotoUpload) -> Result<(), EditorError> {
        let EditorMode::EditingBasic(draft) = &mut self.mode else {
            return Err(EditorError::EditNotActive);
        };

        match PendingPhoto::accept(upload, self.config.max_photo_bytes) {
            Ok(pending) => {
                draft.pending_photo = Some(pending);
                self.errors.clear(Field::Photo);
            }
            Err(e) => {
                warn!(error = %e, "photo rejected");
                self.errors.insert(Field::Photo, e.to_string());
            }
        }
        Ok(())
    }

    // =========================================================================
    // Submits
    // =========================================================================

    /// Validate and save the basic-info draft.
    ///
    /// On validation failure: field errors plus a generic error status,
    /// no backend call, draft retained. On backend failure: generic error
    /// status, edit mode and draft retained for retry. On success: the
    /// returned account becomes display state, the editor returns to view
    /// mode, and a success message is set.
    pub async fn submit_basic_info(&mut self) {
        if self.status.saving {
            return;
        }
        let EditorMode::EditingBasic(draft) = &self.mode else {
            return;
        };
        let draft = draft.clone();

        let errors = validate::basic_info(&draft);
        if !errors.is_empty() {
            warn!(rejected_fields = errors.len(), "basic-info validation failed");
            self.errors = errors;
            self.status.set_error(MSG_VALIDATION_FAILED);
            return;
        }

        // Validation above guarantees these parse
        let Some(update) = build_update(&draft) else {
            self.status.set_error(MSG_SAVE_FAILED);
            return;
        };

        self.status.saving = true;
        match self.backend.update_profile(update).await {
            Ok(account) => {
                info!(account_id = %account.id, "profile saved");
                self.account = Some(account);
                self.mode = EditorMode::View;
                self.errors.clear_all();
                self.status.set_success(MSG_PROFILE_SAVED);
            }
            Err(e) => {
                error!(error = %e, "profile save failed");
                self.status.set_error(MSG_SAVE_FAILED);
            }
        }
        self.status.saving = false;
    }

    /// Validate and submit the password-change draft.
    ///
    /// On validation failure the draft is retained for correction. Once
    /// the backend is called, the draft is dropped regardless of the
    /// outcome - secrets do not outlive the attempt.
    pub async fn submit_password_change(&mut self) {
        if self.status.saving {
            return;
        }
        let EditorMode::EditingPassword(draft) = &self.mode else {
            return;
        };

        let errors = validate::password_change(draft);
        if !errors.is_empty() {
            warn!(rejected_fields = errors.len(), "password validation failed");
            self.errors = errors;
            self.status.set_error(MSG_VALIDATION_FAILED);
            return;
        }

        let change = PasswordChange {
            current_password: draft.current_password.clone(),
            new_password: draft.new_password.clone(),
        };

        self.status.saving = true;
        let result = self.backend.change_password(change).await;

        // Drop the secrets with the draft before reporting the outcome
        self.mode = EditorMode::View;
        self.errors.clear_all();

        match result {
            Ok(()) => {
                info!("password changed");
                self.status.set_success(MSG_PASSWORD_CHANGED);
            }
            Err(e) => {
                error!(error = %e, "password change failed");
                self.status.set_error(MSG_SAVE_FAILED);
            }
        }
        self.status.saving = false;
    }
}

/// Build the wire payload from a draft that passed validation.
///
/// Returns `None` if a field fails to parse, which validation rules out.
fn build_update(draft: &ProfileEditDraft) -> Option<ProfileUpdate> {
    let email = Email::parse(&draft.email).ok()?;

    let phone = draft.phone.trim();
    let phone = if phone.is_empty() {
        None
    } else {
        Some(PhoneNumber::parse(phone).ok()?)
    };

    Some(ProfileUpdate {
        name: draft.name.trim().to_owned(),
        email,
        phone,
        photo: draft.pending_photo.as_ref().map(|p| p.upload.clone()),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use crate::backend::MockBackend;
    use crate::status::StatusKind;

    use super::*;

    fn test_config() -> EditorConfig {
        EditorConfig {
            fetch_latency: Duration::from_millis(50),
            save_latency: Duration::from_millis(50),
            latency_jitter: Duration::ZERO,
            ..EditorConfig::default()
        }
    }

    fn controller() -> ProfileFormController<MockBackend> {
        let config = test_config();
        ProfileFormController::new(MockBackend::new(&config), config)
    }

    async fn loaded_controller() -> ProfileFormController<MockBackend> {
        let mut controller = controller();
        controller.load_account().await;
        assert!(controller.account().is_some());
        controller
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_populates_account() {
        let controller = loaded_controller().await;
        let account = controller.account().unwrap();
        assert_eq!(account.name, "Alex Reyes");
        assert!(!controller.status().loading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_failure_sets_error_status() {
        let config = test_config();
        let backend = MockBackend::new(&config);
        backend.set_fail_requests(true);
        let mut controller = ProfileFormController::new(backend, config);

        controller.load_account().await;

        assert!(controller.account().is_none());
        assert!(!controller.status().loading);
        let message = controller.status().message().unwrap();
        assert_eq!(message.kind(), StatusKind::Error);
    }

    #[tokio::test(start_paused = true)]
    async fn test_begin_edit_requires_loaded_account() {
        let mut controller = controller();
        assert_eq!(controller.begin_edit(), Err(EditorError::AccountNotLoaded));
    }

    #[tokio::test(start_paused = true)]
    async fn test_mode_exclusivity() {
        let mut controller = loaded_controller().await;

        controller.begin_edit().unwrap();
        assert_eq!(
            controller.begin_password_change(),
            Err(EditorError::EditInProgress)
        );
        assert_eq!(controller.begin_edit(), Err(EditorError::EditInProgress));

        controller.cancel();
        controller.begin_password_change().unwrap();
        assert_eq!(controller.begin_edit(), Err(EditorError::EditInProgress));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_discards_draft_and_errors() {
        let mut controller = loaded_controller().await;
        controller.begin_edit().unwrap();
        controller.update_name("");
        controller.submit_basic_info().await;
        assert!(!controller.errors().is_empty());

        controller.cancel();

        assert!(controller.mode().is_view());
        assert!(controller.errors().is_empty());
        assert!(controller.status().message().is_none());
        // The committed account is untouched
        assert_eq!(controller.account().unwrap().name, "Alex Reyes");
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_empty_draft_rejects_name_and_email() {
        let mut controller = loaded_controller().await;
        controller.begin_edit().unwrap();
        controller.update_name("");
        controller.update_email("");
        controller.update_phone("");

        controller.submit_basic_info().await;

        let errors = controller.errors();
        assert!(errors.message(Field::Name).is_some());
        assert!(errors.message(Field::Email).is_some());
        assert!(errors.message(Field::Phone).is_none());
        // Still editing; backend was never called
        assert!(!controller.mode().is_view());
        assert_eq!(
            controller.status().message().unwrap().kind(),
            StatusKind::Error
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_editing_field_clears_its_error_only() {
        let mut controller = loaded_controller().await;
        controller.begin_edit().unwrap();
        controller.update_name("");
        controller.update_email("bad");
        controller.submit_basic_info().await;
        assert_eq!(controller.errors().len(), 2);

        controller.update_name("Alex");

        assert!(controller.errors().message(Field::Name).is_none());
        assert!(controller.errors().message(Field::Email).is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_successful_save_commits_draft() {
        let mut controller = loaded_controller().await;
        controller.begin_edit().unwrap();
        controller.update_name("Jamie Doe");
        controller.update_email("jamie@example.com");
        controller.update_phone("081-234-567");

        controller.submit_basic_info().await;

        assert!(controller.mode().is_view());
        let account = controller.account().unwrap();
        assert_eq!(account.name, "Jamie Doe");
        assert_eq!(account.email.as_str(), "jamie@example.com");
        assert_eq!(account.phone.as_ref().unwrap().as_str(), "081-234-567");

        let message = controller.status().message().unwrap();
        assert_eq!(message.kind(), StatusKind::Success);
        assert!(!controller.status().saving);
    }

    #[tokio::test(start_paused = true)]
    async fn test_save_failure_keeps_draft() {
        let config = test_config();
        let backend = MockBackend::new(&config);
        let mut controller = ProfileFormController::new(backend, config);
        controller.load_account().await;

        controller.begin_edit().unwrap();
        controller.update_name("Jamie Doe");

        // Service goes down between edit and submit
        controller.backend.set_fail_requests(true);
        controller.submit_basic_info().await;

        assert!(matches!(controller.mode(), EditorMode::EditingBasic(draft) if draft.name == "Jamie Doe"));
        assert_eq!(controller.account().unwrap().name, "Alex Reyes");
        assert_eq!(
            controller.status().message().unwrap().kind(),
            StatusKind::Error
        );
        assert!(!controller.status().saving);
    }

    #[tokio::test(start_paused = true)]
    async fn test_password_change_happy_path() {
        let mut controller = loaded_controller().await;
        controller.begin_password_change().unwrap();
        controller.update_current_password("old-secret");
        controller.update_new_password("12345678");
        controller.update_confirm_password("12345678");

        controller.submit_password_change().await;

        assert!(controller.mode().is_view());
        assert_eq!(
            controller.status().message().unwrap().kind(),
            StatusKind::Success
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_password_too_short_rejected() {
        let mut controller = loaded_controller().await;
        controller.begin_password_change().unwrap();
        controller.update_current_password("old-secret");
        controller.update_new_password("short");
        controller.update_confirm_password("short");

        controller.submit_password_change().await;

        assert!(controller.errors().message(Field::NewPassword).is_some());
        // Draft retained for correction
        assert!(matches!(controller.mode(), EditorMode::EditingPassword(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_password_draft_dropped_after_backend_failure() {
        let mut controller = loaded_controller().await;
        controller.begin_password_change().unwrap();
        controller.update_current_password("old-secret");
        controller.update_new_password("12345678");
        controller.update_confirm_password("12345678");

        controller.backend.set_fail_requests(true);
        controller.submit_password_change().await;

        // Secrets do not outlive the attempt
        assert!(controller.mode().is_view());
        assert_eq!(
            controller.status().message().unwrap().kind(),
            StatusKind::Error
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_photo_rejections() {
        let mut controller = loaded_controller().await;
        controller.begin_edit().unwrap();

        // 3 MB file exceeds the 2 MiB ceiling
        let oversized = PhotoUpload::new("big.png", "image/png", vec![0_u8; 3 * 1024 * 1024]);
        controller.set_photo(oversized).unwrap();
        assert!(controller.errors().message(Field::Photo).is_some());
        assert!(matches!(
            controller.mode(),
            EditorMode::EditingBasic(draft) if draft.pending_photo.is_none()
        ));

        let pdf = PhotoUpload::new("cv.pdf", "application/pdf", vec![0_u8; 64]);
        controller.set_photo(pdf).unwrap();
        assert!(controller.errors().message(Field::Photo).is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_photo_accepted_and_saved() {
        let mut controller = loaded_controller().await;
        controller.begin_edit().unwrap();

        let upload = PhotoUpload::new("me.jpg", "image/jpeg", vec![0_u8; 512]);
        controller.set_photo(upload).unwrap();

        let EditorMode::EditingBasic(draft) = controller.mode() else {
            panic!("expected basic edit mode");
        };
        let pending = draft.pending_photo.as_ref().unwrap();
        assert!(pending.preview.starts_with("data:image/jpeg;base64,"));

        controller.submit_basic_info().await;
        let path = controller.account().unwrap().profile_photo.clone().unwrap();
        assert!(path.starts_with("avatars/"));
        assert!(path.ends_with(".jpg"));
        assert!(controller.photo_url().unwrap().as_str().contains("/storage/avatars/"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_photo_outside_edit_mode() {
        let mut controller = loaded_controller().await;
        let upload = PhotoUpload::new("me.jpg", "image/jpeg", vec![0_u8; 16]);
        assert_eq!(
            controller.set_photo(upload),
            Err(EditorError::EditNotActive)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_message_expires() {
        let mut controller = loaded_controller().await;
        controller.begin_edit().unwrap();
        controller.update_name("Jamie Doe");
        controller.submit_basic_info().await;
        assert!(controller.status().message().is_some());

        tokio::time::advance(Duration::from_secs(4)).await;
        assert!(controller.status().message().is_none());
    }
}
