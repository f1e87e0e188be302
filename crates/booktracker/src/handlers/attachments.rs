//! Attachment upload handler.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use booktracker_core::books::{verify_ownership, BookId};

use super::books::book_id_from_path;
use crate::{context::Caller, handlers::AppError, state::AppState};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlResponse {
    pub upload_url: String,
}

/// Issue an upload URL for a book's attachment (POST /books/{bookId}/attachment).
///
/// The ownership check runs first, so callers that do not own the book never
/// receive a signed URL. The record's `attachmentUrl` is set to the retrieval
/// URL before responding. An issued URL is not revoked if that write fails.
pub async fn issue_upload_url(
    Caller(user_id): Caller,
    State(state): State<AppState>,
    path: Result<Path<BookId>, PathRejection>,
) -> Result<(StatusCode, Json<UploadUrlResponse>), AppError> {
    let book_id = book_id_from_path(path)?;

    let existing = state.books.get_book(book_id).await?;
    verify_ownership(existing, book_id, &user_id)?;

    let upload_url = state.attachments.upload_url(book_id).await?;
    let retrieval_url = state.attachments.retrieval_url(book_id);

    state
        .books
        .update_attachment_url(book_id, &retrieval_url)
        .await?;

    tracing::info!(
        book_id = %book_id,
        user_id = %user_id,
        attachment_url = %retrieval_url,
        "Issued attachment upload URL"
    );

    Ok((StatusCode::CREATED, Json(UploadUrlResponse { upload_url })))
}
