//! Axum extractor for Caller.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};

use booktracker_core::identity::{bearer_token, IdentityError};

use super::Caller;
use crate::{handlers::AppError, state::AppState};

fn authorization_header(headers: &HeaderMap) -> Result<Option<&str>, IdentityError> {
    headers
        .get(AUTHORIZATION)
        .map(|v| v.to_str().map_err(|_| IdentityError::NotBearer))
        .transpose()
}

impl<S> FromRequestParts<S> for Caller
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let header = authorization_header(&parts.headers)?;
        let token = bearer_token(header)?;
        let user_id = state.identity.resolve(token)?;

        Ok(Caller(user_id))
    }
}
