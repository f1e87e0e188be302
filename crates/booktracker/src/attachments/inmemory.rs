use std::time::Duration;

use async_trait::async_trait;

use booktracker_core::attachments::{retrieval_url, AttachmentError, AttachmentUrlIssuer};
use booktracker_core::books::BookId;

use crate::config::Config;

/// Issuer that fabricates upload URLs locally.
///
/// The upload URL is the retrieval URL with `X-Amz-Expires` appended, which
/// is enough for tests to assert on the object key and lifetime.
#[derive(Debug, Clone)]
pub struct InMemoryAttachmentIssuer {
    bucket: String,
    expires_in: Duration,
}

impl InMemoryAttachmentIssuer {
    pub fn new(bucket: impl Into<String>, expires_in: Duration) -> Self {
        Self {
            bucket: bucket.into(),
            expires_in,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.attachment_bucket, config.signed_url_ttl())
    }
}

#[async_trait]
impl AttachmentUrlIssuer for InMemoryAttachmentIssuer {
    async fn upload_url(&self, book_id: BookId) -> Result<String, AttachmentError> {
        if self.expires_in.is_zero() {
            return Err(AttachmentError::InvalidExpiration(
                "expiration must be greater than zero".to_string(),
            ));
        }

        Ok(format!(
            "{}?X-Amz-Expires={}",
            retrieval_url(&self.bucket, book_id),
            self.expires_in.as_secs()
        ))
    }

    fn retrieval_url(&self, book_id: BookId) -> String {
        retrieval_url(&self.bucket, book_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_upload_url_is_scoped_to_book() {
        let issuer = InMemoryAttachmentIssuer::new("bucket", Duration::from_secs(300));
        let id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440003").unwrap();

        let url = issuer.upload_url(id).await.unwrap();
        assert_eq!(
            url,
            "https://bucket.s3.amazonaws.com/550e8400-e29b-41d4-a716-446655440003?X-Amz-Expires=300"
        );
    }

    #[tokio::test]
    async fn test_zero_expiration_is_rejected() {
        let issuer = InMemoryAttachmentIssuer::new("bucket", Duration::ZERO);
        let result = issuer.upload_url(Uuid::new_v4()).await;
        assert!(matches!(result, Err(AttachmentError::InvalidExpiration(_))));
    }

    #[test]
    fn test_retrieval_url_matches_core_formula() {
        let issuer = InMemoryAttachmentIssuer::from_config(&Config::for_tests());
        let id = Uuid::new_v4();
        assert_eq!(
            issuer.retrieval_url(id),
            retrieval_url("books-attachments-test", id)
        );
    }
}
