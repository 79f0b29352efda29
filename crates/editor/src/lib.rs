//! Profile Console Editor library.
//!
//! This crate provides the admin profile editor as a library, allowing it
//! to be tested and embedded.
//!
//! # Architecture
//!
//! - [`controller`] - `ProfileFormController`: mode state machine and
//!   orchestration of loads and saves
//! - [`validate`] - pure field validation producing per-field messages
//! - [`backend`] - the `ProfileBackend` seam and the latency-simulating
//!   `MockBackend`
//! - [`status`] - loading/saving flags and self-expiring status messages
//! - [`models`] - the committed account record and transient drafts
//! - [`config`] - environment-backed configuration with defaults
//!
//! Everything network-shaped is mocked: the backend trait is where the
//! real profile service will plug in.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod backend;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod status;
pub mod validate;

pub use backend::{BackendError, MockBackend, PasswordChange, ProfileBackend, ProfileUpdate};
pub use config::{ConfigError, EditorConfig};
pub use controller::{EditorMode, ProfileFormController};
pub use error::EditorError;
pub use models::{
    AdminAccount, PasswordChangeDraft, PendingPhoto, PhotoError, PhotoUpload, ProfileEditDraft,
};
pub use status::{StatusKind, StatusMessage, UiStatus};
pub use validate::{Field, ValidationErrors};
