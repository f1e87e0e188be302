//! Request-scoped caller identity.
//!
//! Provides the `Caller` extractor, which resolves the bearer token on every
//! request to the `UserId` that owns the records being touched.

mod extractor;

use booktracker_core::books::UserId;

/// The authenticated caller of the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller(pub UserId);
