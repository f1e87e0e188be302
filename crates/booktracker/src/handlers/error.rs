use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use booktracker_core::attachments::AttachmentError;
use booktracker_core::books::OwnershipError;
use booktracker_core::identity::IdentityError;
use booktracker_core::storage::{repository_error_to_status_code, RepositoryError};

/// Error returned by every handler and by the `Caller` extractor.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Unauthorized(#[from] IdentityError),

    #[error(transparent)]
    Ownership(#[from] OwnershipError),

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Attachment(#[from] AttachmentError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        let code = match self {
            Self::Unauthorized(_) => 401,
            Self::Ownership(e) => e.status_code(),
            Self::MalformedRequest(_) => 400,
            Self::Repository(e) => repository_error_to_status_code(e),
            Self::Attachment(_) => 500,
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Backend details stay in the logs.
        let message = match &self {
            Self::Repository(e) => {
                tracing::error!(status = %status, error = %e, "Storage failure");
                "Storage backend failure".to_string()
            }
            Self::Attachment(e) => {
                tracing::error!(status = %status, error = %e, "Attachment failure");
                "Attachment backend failure".to_string()
            }
            Self::Unauthorized(e) => {
                tracing::warn!(status = %status, error = %e, "Unauthorized request");
                "Unauthorized".to_string()
            }
            other => {
                tracing::warn!(status = %status, error = %other, "Request rejected");
                other.to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_status_codes() {
        let book_id = Uuid::new_v4();

        assert_eq!(
            AppError::from(IdentityError::MissingHeader).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::from(OwnershipError::NotFound { book_id }).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(OwnershipError::Forbidden { book_id }).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::MalformedRequest("missing field `name`".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(RepositoryError::ConnectionFailed("timeout".to_string())).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::from(AttachmentError::PresignFailed("no creds".to_string())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_backend_details_are_not_leaked() {
        let error = AppError::from(RepositoryError::QueryFailed(
            "arn:aws:dynamodb:secret-table".to_string(),
        ));
        assert!(!error.to_string().is_empty());

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
