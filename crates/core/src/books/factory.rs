//! Record factory.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::requests::CreateBookRequest;
use super::types::{BookId, BookItem, UserId, RESERVED_FIELDS};

/// Build a new book from a creation request.
///
/// `done` starts false and `attachment_url` absent. Extra request fields are
/// copied verbatim except those named in [`RESERVED_FIELDS`]. No content
/// validation is performed.
pub fn build_book(
    owner: UserId,
    request: CreateBookRequest,
    book_id: BookId,
    created_at: DateTime<Utc>,
) -> BookItem {
    let CreateBookRequest {
        name,
        due_date,
        mut extra,
    } = request;

    extra.retain(|key, _| !RESERVED_FIELDS.contains(&key.as_str()));

    BookItem {
        book_id,
        user_id: owner,
        name,
        due_date,
        created_at,
        done: false,
        attachment_url: None,
        extra,
    }
}

/// Build a new book with a fresh v4 id and the current time.
pub fn new_book(owner: UserId, request: CreateBookRequest) -> BookItem {
    build_book(owner, request, Uuid::new_v4(), Utc::now())
}
