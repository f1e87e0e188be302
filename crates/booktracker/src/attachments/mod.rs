//! Attachment URL issuers.
//!
//! - `inmemory` (default): produces unsigned URLs with the expiry as a query
//!   parameter, for tests and local runs
//! - `dynamodb`: presigns S3 `PutObject` requests with `aws-sdk-s3`

#[cfg(any(test, feature = "inmemory"))]
mod inmemory;

#[cfg(feature = "dynamodb")]
mod s3;

#[cfg(any(test, feature = "inmemory"))]
pub use inmemory::InMemoryAttachmentIssuer;

#[cfg(feature = "dynamodb")]
pub use s3::S3AttachmentIssuer;
