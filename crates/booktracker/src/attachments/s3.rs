use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client;

use booktracker_core::attachments::{
    object_key, retrieval_url, AttachmentError, AttachmentUrlIssuer,
};
use booktracker_core::books::BookId;

use crate::config::Config;

/// S3-backed issuer. Upload URLs are presigned `PutObject` requests.
pub struct S3AttachmentIssuer {
    client: Client,
    bucket: String,
    expires_in: Duration,
}

impl S3AttachmentIssuer {
    pub fn new(client: Client, bucket: impl Into<String>, expires_in: Duration) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            expires_in,
        }
    }

    pub fn from_config(client: Client, config: &Config) -> Self {
        Self::new(client, &config.attachment_bucket, config.signed_url_ttl())
    }
}

#[async_trait]
impl AttachmentUrlIssuer for S3AttachmentIssuer {
    async fn upload_url(&self, book_id: BookId) -> Result<String, AttachmentError> {
        let presigning = PresigningConfig::expires_in(self.expires_in)
            .map_err(|e| AttachmentError::InvalidExpiration(e.to_string()))?;

        let request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(object_key(book_id))
            .presigned(presigning)
            .await
            .map_err(|e| AttachmentError::PresignFailed(e.to_string()))?;

        tracing::debug!(
            book_id = %book_id,
            bucket = %self.bucket,
            expires_in = self.expires_in.as_secs(),
            "Presigned upload URL"
        );

        Ok(request.uri().to_string())
    }

    fn retrieval_url(&self, book_id: BookId) -> String {
        retrieval_url(&self.bucket, book_id)
    }
}
