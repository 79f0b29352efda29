//! Profile Console - scripted demo session.
//!
//! Runs one full edit-and-save session against the mock backend so the
//! editor engine can be watched end to end: load, basic-info edit with a
//! photo, save, then a password change. All output goes through tracing.
//!
//! ```bash
//! cargo run -p profile-console-editor
//! RUST_LOG=debug cargo run -p profile-console-editor
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use tracing::info;

use profile_console_editor::{
    EditorConfig, MockBackend, PhotoUpload, ProfileFormController, StatusKind,
};

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter.
    // Defaults to info level for our crate if RUST_LOG is not set.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "profile_console_editor=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = EditorConfig::from_env().expect("Failed to load configuration");
    info!(asset_base = %config.asset_base_url, "configuration loaded");

    let backend = MockBackend::new(&config);
    let mut editor = ProfileFormController::new(backend, config);

    // Load the account
    editor.load_account().await;
    let Some(account) = editor.account() else {
        info!("no account available, exiting");
        return;
    };
    info!(name = %account.name, email = %account.email, "account loaded");

    // Edit basic info, including a photo selection
    editor.begin_edit().expect("view mode after load");
    editor.update_name("Jamie Doe");
    editor.update_email("jamie@example.com");
    editor.update_phone("081-234-567");
    editor
        .set_photo(PhotoUpload::new(
            "avatar.png",
            "image/png",
            vec![0_u8; 4 * 1024],
        ))
        .expect("basic edit is active");

    editor.submit_basic_info().await;
    report_status(&editor);
    if let Some(account) = editor.account() {
        info!(
            name = %account.name,
            email = %account.email,
            photo = %editor.photo_url().map(String::from).unwrap_or_default(),
            "account after save"
        );
    }

    // Change the password
    editor.begin_password_change().expect("view mode after save");
    editor.update_current_password("old-secret");
    editor.update_new_password("correct-horse-battery");
    editor.update_confirm_password("correct-horse-battery");

    editor.submit_password_change().await;
    report_status(&editor);
}

fn report_status<B: profile_console_editor::ProfileBackend>(
    editor: &ProfileFormController<B>,
) {
    if let Some(message) = editor.status().message() {
        match message.kind() {
            StatusKind::Success => info!(text = message.text(), "status"),
            StatusKind::Error => tracing::error!(text = message.text(), "status"),
        }
    }
    for (field, message) in editor.errors().iter() {
        tracing::warn!(field = %field, text = message, "field error");
    }
}
