use std::time::Duration;

use clap::Args;

/// Application configuration.
///
/// Every option can be given as a flag or through its environment variable.
/// The storage options have no defaults; they name resources provisioned
/// outside this binary.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Key-value table holding book records
    #[arg(long, env = "BOOKS_TABLE")]
    pub books_table: String,

    /// Secondary index on `userId`
    #[arg(long, env = "BOOKS_USER_INDEX")]
    pub books_user_index: String,

    /// Bucket that stores book attachments
    #[arg(long, env = "ATTACHMENT_S3_BUCKET")]
    pub attachment_bucket: String,

    /// Lifetime of upload URLs, in seconds
    #[arg(long, env = "SIGNED_URL_EXPIRATION")]
    pub signed_url_expiration: u64,
}

impl Config {
    /// Get the upload URL lifetime as a Duration.
    pub fn signed_url_ttl(&self) -> Duration {
        Duration::from_secs(self.signed_url_expiration)
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            books_table: "books-test".to_string(),
            books_user_index: "UserIdIndex".to_string(),
            attachment_bucket: "books-attachments-test".to_string(),
            signed_url_expiration: 300,
        }
    }
}
