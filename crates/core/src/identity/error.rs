use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("missing authorization header")]
    MissingHeader,

    #[error("authorization header is not a bearer token")]
    NotBearer,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("missing required claim: {0}")]
    MissingClaim(String),
}
