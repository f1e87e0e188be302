//! Ownership guard.

use super::error::OwnershipError;
use super::types::{BookId, BookItem, UserId};

/// Decide whether `caller` may act on a fetched book.
///
/// Returns the book on success so that callers cannot reach the mutation
/// without going through the check.
pub fn verify_ownership(
    book: Option<BookItem>,
    book_id: BookId,
    caller: &UserId,
) -> Result<BookItem, OwnershipError> {
    match book {
        None => Err(OwnershipError::NotFound { book_id }),
        Some(book) if !book.is_owned_by(caller) => Err(OwnershipError::Forbidden { book_id }),
        Some(book) => Ok(book),
    }
}
