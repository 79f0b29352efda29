//! Integration tests for Profile Console.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p profile-console-integration-tests
//! ```
//!
//! Scenarios live in `tests/` and drive the editor through its public API
//! with the mock backend. The helpers here build controllers with short,
//! jitter-free simulated latency; combined with `start_paused` tokio
//! tests, every scenario runs instantly and deterministically.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::time::Duration;

use profile_console_editor::{EditorConfig, MockBackend, ProfileFormController};

/// Configuration with short, jitter-free simulated latency.
#[must_use]
pub fn test_config() -> EditorConfig {
    EditorConfig {
        fetch_latency: Duration::from_millis(50),
        save_latency: Duration::from_millis(50),
        latency_jitter: Duration::ZERO,
        ..EditorConfig::default()
    }
}

/// A fresh controller over a mock backend, before any load.
#[must_use]
pub fn fresh_controller() -> ProfileFormController<MockBackend> {
    let config = test_config();
    ProfileFormController::new(MockBackend::new(&config), config)
}

/// A controller with the canned account already loaded.
///
/// # Panics
///
/// Panics if the mock load fails, which it does not unless the failure
/// toggle was set.
pub async fn loaded_controller() -> ProfileFormController<MockBackend> {
    let mut controller = fresh_controller();
    controller.load_account().await;
    assert!(controller.account().is_some(), "mock load should succeed");
    controller
}
