//! Photo upload handling.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use thiserror::Error;

/// Problems with a selected photo file.
///
/// These are recovered locally as a field-specific validation message;
/// the upload is rejected and the draft left untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PhotoError {
    /// The selected file is not an image.
    #[error("the selected file is not an image ({content_type})")]
    NotAnImage {
        /// Content type of the rejected file.
        content_type: String,
    },
    /// The selected file exceeds the size ceiling.
    #[error("the photo must be {max} bytes or smaller (selected file is {size} bytes)")]
    TooLarge {
        /// Size of the rejected file in bytes.
        size: usize,
        /// Configured ceiling in bytes.
        max: usize,
    },
}

/// A file selected by the user, before acceptance checks.
#[derive(Clone, PartialEq, Eq)]
pub struct PhotoUpload {
    /// Original file name as selected.
    pub file_name: String,
    /// MIME content type reported for the file.
    pub content_type: String,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
}

impl PhotoUpload {
    /// Create an upload from its parts.
    #[must_use]
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// File extension from the original file name, if any.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        let (stem, ext) = self.file_name.rsplit_once('.')?;
        (!stem.is_empty() && !ext.is_empty()).then_some(ext)
    }
}

impl std::fmt::Debug for PhotoUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhotoUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("bytes", &format_args!("{} bytes", self.bytes.len()))
            .finish()
    }
}

/// An accepted photo upload plus its locally computed preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingPhoto {
    /// The accepted upload.
    pub upload: PhotoUpload,
    /// A `data:` URL preview for display before the save round trip.
    pub preview: String,
}

impl PendingPhoto {
    /// Accept an upload, producing the pending photo with its preview.
    ///
    /// # Errors
    ///
    /// Returns [`PhotoError::NotAnImage`] if the content type does not
    /// begin with `image/`, or [`PhotoError::TooLarge`] if the file
    /// exceeds `max_bytes`.
    pub fn accept(upload: PhotoUpload, max_bytes: usize) -> Result<Self, PhotoError> {
        if !upload.content_type.starts_with("image/") {
            return Err(PhotoError::NotAnImage {
                content_type: upload.content_type,
            });
        }

        if upload.bytes.len() > max_bytes {
            return Err(PhotoError::TooLarge {
                size: upload.bytes.len(),
                max: max_bytes,
            });
        }

        let preview = format!(
            "data:{};base64,{}",
            upload.content_type,
            BASE64.encode(&upload.bytes)
        );

        Ok(Self { upload, preview })
    }
}
