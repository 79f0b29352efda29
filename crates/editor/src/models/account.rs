//! Admin account domain type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use profile_console_core::{AdminRole, AdminUserId, Email, PhoneNumber};

/// The committed admin account record.
///
/// Created by the account loader; mutated only by a successful basic-info
/// save. Display state always reads from here, never from a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminAccount {
    /// Unique admin user ID.
    pub id: AdminUserId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: Email,
    /// Phone number, if one is on record.
    pub phone: Option<PhoneNumber>,
    /// Role/permission level.
    pub role: AdminRole,
    /// Whether the account is active.
    pub is_active: bool,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// Storage path of the profile photo, if one has been uploaded.
    pub profile_photo: Option<String>,
}

impl AdminAccount {
    /// Render the stored photo path against an asset base URL.
    ///
    /// Returns `None` if no photo is on record.
    #[must_use]
    pub fn photo_url(&self, asset_base: &Url) -> Option<Url> {
        let path = self.profile_photo.as_deref()?;
        let mut url = asset_base.clone();
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .extend(path.split('/'));
        Some(url)
    }
}
