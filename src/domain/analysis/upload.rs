//! Client-side upload gate.
//!
//! Files are checked before anything is sent to the analyzer. Rejected files
//! never leave the client.

use thiserror::Error;

use super::FileType;
use crate::domain::foundation::ErrorCode;

/// MIME types the analyzer screen accepts.
pub const ACCEPTED_MIME_TYPES: [&str; 3] = ["application/pdf", "image/jpeg", "image/png"];

/// File extensions offered by the picker.
pub const ACCEPTED_EXTENSIONS: [&str; 4] = [".pdf", ".jpg", ".jpeg", ".png"];

/// Largest accepted file, 10 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Reasons a file is refused before upload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("File type not supported. Please upload PDF, JPG, or PNG.")]
    UnsupportedType { mime_type: String },

    #[error("File is too large. Please upload a file under 10MB.")]
    TooLarge { size: u64, max: u64 },
}

impl UploadError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::UnsupportedFile
    }
}

/// Metadata of a file the user picked or dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
}

impl UploadCandidate {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }

    /// Checks type then size, returning the file type to send.
    pub fn validate(&self) -> Result<FileType, UploadError> {
        validate_upload(&self.mime_type, self.size)
    }
}

/// Checks a file's MIME type and size against the gate.
pub fn validate_upload(mime_type: &str, size: u64) -> Result<FileType, UploadError> {
    if !ACCEPTED_MIME_TYPES.contains(&mime_type) {
        return Err(UploadError::UnsupportedType {
            mime_type: mime_type.to_string(),
        });
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge {
            size,
            max: MAX_UPLOAD_BYTES,
        });
    }
    Ok(FileType::from_mime(mime_type))
}
