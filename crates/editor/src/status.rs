//! Transient UI status.
//!
//! Loading/saving flags plus a single self-expiring status message. The
//! message carries an explicit [`StatusKind`] - the presentation layer
//! styles on the kind, never on the message text.

use std::time::Duration;

use tokio::time::Instant;

/// Whether a status message reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// A transient status message with an expiry deadline.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    text: String,
    kind: StatusKind,
    expires_at: Instant,
}

impl StatusMessage {
    fn new(text: impl Into<String>, kind: StatusKind, ttl: Duration) -> Self {
        Self {
            text: text.into(),
            kind,
            expires_at: Instant::now() + ttl,
        }
    }

    /// The message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether this message reports success or failure.
    #[must_use]
    pub const fn kind(&self) -> StatusKind {
        self.kind
    }

    /// True once the message's lifetime has elapsed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// UI-facing status owned by the controller.
#[derive(Debug, Clone)]
pub struct UiStatus {
    /// True while the initial account fetch is in flight.
    pub loading: bool,
    /// True while a save round trip is in flight (controls are disabled).
    pub saving: bool,
    message: Option<StatusMessage>,
    ttl: Duration,
}

impl UiStatus {
    /// Create an idle status whose messages expire after `ttl`.
    #[must_use]
    pub const fn new(ttl: Duration) -> Self {
        Self {
            loading: false,
            saving: false,
            message: None,
            ttl,
        }
    }

    /// The current message, if one is set and not yet expired.
    #[must_use]
    pub fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref().filter(|m| !m.is_expired())
    }

    /// Set a success message, replacing any previous message.
    pub fn set_success(&mut self, text: impl Into<String>) {
        self.message = Some(StatusMessage::new(text, StatusKind::Success, self.ttl));
    }

    /// Set an error message, replacing any previous message.
    pub fn set_error(&mut self, text: impl Into<String>) {
        self.message = Some(StatusMessage::new(text, StatusKind::Error, self.ttl));
    }

    /// Clear the message immediately, without waiting for expiry.
    pub fn clear_message(&mut self) {
        self.message = None;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(3);

    #[tokio::test(start_paused = true)]
    async fn test_message_visible_before_expiry() {
        let mut status = UiStatus::new(TTL);
        status.set_success("saved");

        let message = status.message().unwrap();
        assert_eq!(message.text(), "saved");
        assert_eq!(message.kind(), StatusKind::Success);
    }

    #[tokio::test(start_paused = true)]
    async fn test_message_expires_after_ttl() {
        let mut status = UiStatus::new(TTL);
        status.set_error("something went wrong");

        tokio::time::advance(Duration::from_millis(2_999)).await;
        assert!(status.message().is_some());

        tokio::time::advance(Duration::from_millis(2)).await;
        assert!(status.message().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_message_replaces_old() {
        let mut status = UiStatus::new(TTL);
        status.set_error("failed");
        status.set_success("saved");

        let message = status.message().unwrap();
        assert_eq!(message.kind(), StatusKind::Success);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_message() {
        let mut status = UiStatus::new(TTL);
        status.set_success("saved");
        status.clear_message();
        assert!(status.message().is_none());
    }
}
