use crate::books::UserId;

use super::IdentityError;

/// Resolves a bearer token to the caller's identity.
pub trait IdentityResolver: Send + Sync {
    fn resolve(&self, token: &str) -> Result<UserId, IdentityError>;
}
