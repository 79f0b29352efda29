//! Profile Console Core - Shared types library.
//!
//! This crate provides common types used across all Profile Console
//! components:
//! - `editor` - The profile editor engine (controller, validation, backend)
//! - `integration-tests` - End-to-end controller scenarios
//!
//! # Architecture
//!
//! The core crate contains only types and their parse errors - no I/O, no
//! async, no clients. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, phone numbers,
//!   and roles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
