//! Mock profile backend.
//!
//! Stands in for the future profile service: canned data, jittered
//! artificial latency, and merge-over-stored-account semantics with no
//! real persistence. No retries, no timeouts.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::{Days, Utc};
use rand::Rng as _;
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use profile_console_core::{AdminRole, AdminUserId, Email, PhoneNumber};

use crate::config::EditorConfig;
use crate::models::AdminAccount;

use super::{BackendError, PasswordChange, ProfileBackend, ProfileUpdate};

/// In-memory stand-in for the profile service.
pub struct MockBackend {
    account: Mutex<AdminAccount>,
    fetch_latency: Duration,
    save_latency: Duration,
    latency_jitter: Duration,
    fail_requests: AtomicBool,
}

impl MockBackend {
    /// Create a mock backend serving the canned account.
    #[must_use]
    pub fn new(config: &EditorConfig) -> Self {
        Self::with_account(Self::canned_account(), config)
    }

    /// Create a mock backend serving a specific account.
    #[must_use]
    pub fn with_account(account: AdminAccount, config: &EditorConfig) -> Self {
        Self {
            account: Mutex::new(account),
            fetch_latency: config.fetch_latency,
            save_latency: config.save_latency,
            latency_jitter: config.latency_jitter,
            fail_requests: AtomicBool::new(false),
        }
    }

    /// The fixed account returned by a fresh mock.
    #[must_use]
    pub fn canned_account() -> AdminAccount {
        AdminAccount {
            id: AdminUserId::new(1),
            name: "Alex Reyes".to_string(),
            email: Email::parse("admin@example.com")
                .expect("canned email is valid"),
            phone: PhoneNumber::parse("081-234-5678").ok(),
            role: AdminRole::SuperAdmin,
            is_active: true,
            created_at: Utc::now() - Days::new(365),
            profile_photo: None,
        }
    }

    /// Make every subsequent request fail with
    /// [`BackendError::Unavailable`], simulating an unreachable service.
    pub fn set_fail_requests(&self, fail: bool) {
        self.fail_requests.store(fail, Ordering::Relaxed);
    }

    /// Sleep for the configured base latency plus random jitter.
    async fn simulate_round_trip(&self, base: Duration) {
        let jitter_ceiling = self.latency_jitter.as_millis() as u64;
        let jitter = if jitter_ceiling == 0 {
            0
        } else {
            rand::rng().random_range(0..=jitter_ceiling)
        };
        let delay = base + Duration::from_millis(jitter);
        debug!(delay_ms = delay.as_millis() as u64, "simulating round trip");
        tokio::time::sleep(delay).await;
    }

    fn check_available(&self) -> Result<(), BackendError> {
        if self.fail_requests.load(Ordering::Relaxed) {
            return Err(BackendError::Unavailable);
        }
        Ok(())
    }

    /// Storage path a real asset host would assign to an accepted upload.
    fn storage_path(extension: Option<&str>) -> String {
        format!("avatars/{}.{}", Uuid::new_v4(), extension.unwrap_or("bin"))
    }
}

impl ProfileBackend for MockBackend {
    async fn fetch_account(&self) -> Result<AdminAccount, BackendError> {
        self.simulate_round_trip(self.fetch_latency).await;
        self.check_available()?;

        let account = self.account.lock().await.clone();
        info!(account_id = %account.id, "mock backend served account");
        Ok(account)
    }

    async fn update_profile(&self, update: ProfileUpdate) -> Result<AdminAccount, BackendError> {
        self.simulate_round_trip(self.save_latency).await;
        self.check_available()?;

        let mut account = self.account.lock().await;
        account.name = update.name;
        account.email = update.email;
        account.phone = update.phone;
        if let Some(photo) = update.photo {
            account.profile_photo = Some(Self::storage_path(photo.extension()));
        }

        info!(account_id = %account.id, "mock backend applied profile update");
        Ok(account.clone())
    }

    async fn change_password(&self, _change: PasswordChange) -> Result<(), BackendError> {
        self.simulate_round_trip(self.save_latency).await;
        self.check_available()?;

        // The stand-in accepts any current password; the real service
        // will verify it.
        info!("mock backend accepted password change");
        Ok(())
    }
}
