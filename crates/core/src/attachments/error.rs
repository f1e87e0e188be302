use thiserror::Error;

/// Errors raised while issuing attachment URLs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AttachmentError {
    #[error("Invalid upload URL expiration: {0}")]
    InvalidExpiration(String),
    #[error("Failed to presign upload URL: {0}")]
    PresignFailed(String),
}
