//! Attachment URL issuance.
//!
//! An attachment is a single blob stored under the book's ID. Clients upload
//! it directly to blob storage through a short-lived upload URL; the record
//! keeps the permanent retrieval URL.

mod error;
mod traits;
mod url;

pub use error::AttachmentError;
pub use traits::AttachmentUrlIssuer;
pub use url::{object_key, retrieval_url};
