//! Caller identity.
//!
//! Tokens are verified upstream by the gateway authorizer; this layer only
//! extracts the subject from an already-trusted bearer token.

mod error;
mod functions;
mod traits;

pub use error::IdentityError;
pub use functions::bearer_token;
pub use traits::IdentityResolver;
