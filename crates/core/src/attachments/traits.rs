use async_trait::async_trait;

use crate::books::BookId;

use super::AttachmentError;

/// Issues upload and retrieval URLs for book attachments.
#[async_trait]
pub trait AttachmentUrlIssuer: Send + Sync {
    /// A write-capable, time-limited URL for the object named after `book_id`.
    ///
    /// Does not check that the book exists.
    async fn upload_url(&self, book_id: BookId) -> Result<String, AttachmentError>;

    /// The permanent retrieval URL for the same object.
    ///
    /// Computed locally and deterministic in `book_id`.
    fn retrieval_url(&self, book_id: BookId) -> String;
}
