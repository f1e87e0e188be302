//! Book CRUD handlers.
//!
//! Every mutating handler fetches the record and runs it through
//! `verify_ownership` before touching storage.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, HeaderName, StatusCode},
    Json,
};
use serde::Serialize;

use booktracker_core::books::{
    verify_ownership, BookId, BookItem, CreateBookRequest, UpdateBookRequest,
};

use crate::{context::Caller, handlers::AppError, state::AppState};

#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub item: BookItem,
}

#[derive(Debug, Serialize)]
pub struct ItemsResponse {
    pub items: Vec<BookItem>,
}

/// Sent on create and update responses only.
type AllowCredentials = [(HeaderName, &'static str); 1];

fn allow_credentials() -> AllowCredentials {
    [(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true")]
}

pub(crate) fn book_id_from_path(
    path: Result<Path<BookId>, PathRejection>,
) -> Result<BookId, AppError> {
    path.map(|Path(id)| id)
        .map_err(|e| AppError::MalformedRequest(e.body_text()))
}

fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    body.map(|Json(value)| value)
        .map_err(|e| AppError::MalformedRequest(e.body_text()))
}

/// Create a new book owned by the caller (POST /books).
pub async fn create_book(
    Caller(user_id): Caller,
    State(state): State<AppState>,
    body: Result<Json<CreateBookRequest>, JsonRejection>,
) -> Result<(StatusCode, AllowCredentials, Json<ItemResponse>), AppError> {
    let request = json_body(body)?;
    tracing::debug!(user_id = %user_id, request = ?request, "Received create book request");

    let book = request.into_book(user_id);
    state.books.put_book(&book).await?;

    tracing::info!(book_id = %book.book_id, user_id = %book.user_id, "Created book");

    Ok((
        StatusCode::CREATED,
        allow_credentials(),
        Json(ItemResponse { item: book }),
    ))
}

/// List the caller's books (GET /books).
///
/// Returns the full collection, without filtering on `done` or paginating.
pub async fn list_books(
    Caller(user_id): Caller,
    State(state): State<AppState>,
) -> Result<Json<ItemsResponse>, AppError> {
    let items = state.books.get_books_for_user(&user_id).await?;

    tracing::info!(user_id = %user_id, count = items.len(), "Listed books");

    Ok(Json(ItemsResponse { items }))
}

/// Update name, due date, and done flag of a book (PATCH /books/{bookId}).
pub async fn update_book(
    Caller(user_id): Caller,
    State(state): State<AppState>,
    path: Result<Path<BookId>, PathRejection>,
    body: Result<Json<UpdateBookRequest>, JsonRejection>,
) -> Result<(AllowCredentials, Json<BookId>), AppError> {
    let book_id = book_id_from_path(path)?;
    let update = json_body(body)?;

    let existing = state.books.get_book(book_id).await?;
    verify_ownership(existing, book_id, &user_id)?;

    state.books.update_book(book_id, &update).await?;

    tracing::info!(book_id = %book_id, user_id = %user_id, done = update.done, "Updated book");

    Ok((allow_credentials(), Json(book_id)))
}

/// Delete a book (DELETE /books/{bookId}).
pub async fn delete_book(
    Caller(user_id): Caller,
    State(state): State<AppState>,
    path: Result<Path<BookId>, PathRejection>,
) -> Result<Json<BookId>, AppError> {
    let book_id = book_id_from_path(path)?;

    let existing = state.books.get_book(book_id).await?;
    verify_ownership(existing, book_id, &user_id)?;

    state.books.delete_book(book_id).await?;

    tracing::info!(book_id = %book_id, user_id = %user_id, "Deleted book");

    Ok(Json(book_id))
}
