//! Editor domain types.

pub mod account;
pub mod draft;
pub mod photo;

pub use account::AdminAccount;
pub use draft::{PasswordChangeDraft, ProfileEditDraft};
pub use photo::{PendingPhoto, PhotoError, PhotoUpload};
