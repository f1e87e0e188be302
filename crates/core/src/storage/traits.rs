use async_trait::async_trait;

use crate::books::{BookId, BookItem, UpdateBookRequest, UserId};

use super::Result;

/// Repository for book records.
///
/// One logical table keyed by `bookId` with a secondary index on `userId`.
/// Every call is a single remote operation; none are retried.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Gets a book by its ID. Absence is `Ok(None)`.
    async fn get_book(&self, id: BookId) -> Result<Option<BookItem>>;

    /// Gets every book owned by `user_id`, in no particular order.
    async fn get_books_for_user(&self, user_id: &UserId) -> Result<Vec<BookItem>>;

    /// Inserts or fully overwrites the book at `book.book_id`.
    async fn put_book(&self, book: &BookItem) -> Result<()>;

    /// Deletes a book by its ID. Deleting an absent ID is not an error.
    async fn delete_book(&self, id: BookId) -> Result<()>;

    /// Rewrites `name`, `dueDate`, and `done`, leaving every other field alone.
    async fn update_book(&self, id: BookId, update: &UpdateBookRequest) -> Result<()>;

    /// Rewrites only `attachmentUrl`.
    async fn update_attachment_url(&self, id: BookId, attachment_url: &str) -> Result<()>;
}
