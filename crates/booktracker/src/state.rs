//! Application state with trait-object collaborators.
//!
//! Every collaborator is constructed once, in `main`, and injected here. The
//! backend combination is selected via feature flags.

use std::sync::Arc;

use booktracker_core::attachments::AttachmentUrlIssuer;
use booktracker_core::identity::IdentityResolver;
use booktracker_core::storage::BookRepository;

use crate::config::Config;
use crate::identity::JwtIdentityResolver;

// ============================================================================
// Compile-time feature validation
// ============================================================================

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "dynamodb", feature = "inmemory"))]
compile_error!("Cannot enable both 'dynamodb' and 'inmemory' storage features");

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!("Must enable exactly one storage feature: 'inmemory' or 'dynamodb'");

/// Shared application state.
///
/// Cloned for each request handler. Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    /// Book records.
    pub books: Arc<dyn BookRepository>,
    /// Upload and retrieval URLs for attachments.
    pub attachments: Arc<dyn AttachmentUrlIssuer>,
    /// Bearer token to caller identity.
    pub identity: Arc<dyn IdentityResolver>,
}

impl AppState {
    pub fn new(
        books: Arc<dyn BookRepository>,
        attachments: Arc<dyn AttachmentUrlIssuer>,
        identity: Arc<dyn IdentityResolver>,
    ) -> Self {
        Self {
            books,
            attachments,
            identity,
        }
    }

    /// State backed by in-process fakes.
    #[cfg(any(test, feature = "inmemory"))]
    pub fn in_memory(config: &Config) -> Self {
        use crate::attachments::InMemoryAttachmentIssuer;
        use crate::storage::InMemoryRepository;

        Self::new(
            Arc::new(InMemoryRepository::new()),
            Arc::new(InMemoryAttachmentIssuer::from_config(config)),
            Arc::new(JwtIdentityResolver::new()),
        )
    }

    /// State backed by DynamoDB and S3, with clients built from `sdk_config`.
    #[cfg(feature = "dynamodb")]
    pub fn from_aws(config: &Config, sdk_config: &aws_config::SdkConfig) -> Self {
        use crate::attachments::S3AttachmentIssuer;
        use crate::storage::DynamoDbRepository;

        let dynamodb = aws_sdk_dynamodb::Client::new(sdk_config);
        let s3 = aws_sdk_s3::Client::new(sdk_config);

        Self::new(
            Arc::new(DynamoDbRepository::from_config(dynamodb, config)),
            Arc::new(S3AttachmentIssuer::from_config(s3, config)),
            Arc::new(JwtIdentityResolver::new()),
        )
    }
}
