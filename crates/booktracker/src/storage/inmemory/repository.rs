//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use booktracker_core::books::{BookId, BookItem, UpdateBookRequest, UserId};
use booktracker_core::storage::{BookRepository, Result};

/// In-memory storage backend.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
///
/// Partial updates against an absent ID are a no-op: unlike a key-value store,
/// this backend cannot hold a row without the required fields.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    books: Arc<RwLock<HashMap<BookId, BookItem>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookRepository for InMemoryRepository {
    async fn get_book(&self, id: BookId) -> Result<Option<BookItem>> {
        let books = self.books.read().await;
        Ok(books.get(&id).cloned())
    }

    async fn get_books_for_user(&self, user_id: &UserId) -> Result<Vec<BookItem>> {
        let books = self.books.read().await;
        Ok(books
            .values()
            .filter(|b| &b.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn put_book(&self, book: &BookItem) -> Result<()> {
        let mut books = self.books.write().await;
        books.insert(book.book_id, book.clone());
        Ok(())
    }

    async fn delete_book(&self, id: BookId) -> Result<()> {
        let mut books = self.books.write().await;
        books.remove(&id);
        Ok(())
    }

    async fn update_book(&self, id: BookId, update: &UpdateBookRequest) -> Result<()> {
        let mut books = self.books.write().await;
        if let Some(book) = books.get_mut(&id) {
            update.apply_to(book);
        }
        Ok(())
    }

    async fn update_attachment_url(&self, id: BookId, attachment_url: &str) -> Result<()> {
        let mut books = self.books.write().await;
        if let Some(book) = books.get_mut(&id) {
            book.attachment_url = Some(attachment_url.to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use booktracker_core::books::CreateBookRequest;
    use uuid::Uuid;

    fn book_for(owner: &str, name: &str) -> BookItem {
        CreateBookRequest::new(name).into_book(UserId::new(owner))
    }

    #[tokio::test]
    async fn test_put_and_get() {
        let repo = InMemoryRepository::new();
        let book = book_for("U1", "Dune");

        repo.put_book(&book).await.unwrap();

        let retrieved = repo.get_book(book.book_id).await.unwrap();
        assert_eq!(retrieved, Some(book));
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let repo = InMemoryRepository::new();
        let result = repo.get_book(Uuid::new_v4()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let repo = InMemoryRepository::new();
        let mut book = book_for("U1", "Original");
        repo.put_book(&book).await.unwrap();

        book.name = "Replaced".to_string();
        repo.put_book(&book).await.unwrap();

        let retrieved = repo.get_book(book.book_id).await.unwrap().unwrap();
        assert_eq!(retrieved.name, "Replaced");
    }

    #[tokio::test]
    async fn test_get_books_for_user_filters_by_owner() {
        let repo = InMemoryRepository::new();
        let a = book_for("U1", "A");
        let b = book_for("U1", "B");
        let c = book_for("U2", "C");

        for book in [&a, &b, &c] {
            repo.put_book(book).await.unwrap();
        }

        let mut ids: Vec<BookId> = repo
            .get_books_for_user(&UserId::new("U1"))
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.book_id)
            .collect();
        ids.sort();

        let mut expected = vec![a.book_id, b.book_id];
        expected.sort();
        assert_eq!(ids, expected);

        let none = repo.get_books_for_user(&UserId::new("U3")).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryRepository::new();
        let book = book_for("U1", "Dune");

        repo.put_book(&book).await.unwrap();
        repo.delete_book(book.book_id).await.unwrap();

        assert!(repo.get_book(book.book_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_nonexistent_is_ok() {
        let repo = InMemoryRepository::new();
        assert!(repo.delete_book(Uuid::new_v4()).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_rewrites_three_fields() {
        let repo = InMemoryRepository::new();
        let book = book_for("U1", "Original");
        repo.put_book(&book).await.unwrap();

        repo.update_book(book.book_id, &UpdateBookRequest::new("X", "2025-01-01", true))
            .await
            .unwrap();

        let updated = repo.get_book(book.book_id).await.unwrap().unwrap();
        assert_eq!(updated.name, "X");
        assert_eq!(updated.due_date.as_deref(), Some("2025-01-01"));
        assert!(updated.done);
        assert_eq!(updated.user_id, book.user_id);
        assert_eq!(updated.created_at, book.created_at);
        assert_eq!(updated.attachment_url, None);
    }

    #[tokio::test]
    async fn test_update_attachment_url_only() {
        let repo = InMemoryRepository::new();
        let book = book_for("U1", "Dune");
        repo.put_book(&book).await.unwrap();

        repo.update_attachment_url(book.book_id, "https://bucket.s3.amazonaws.com/x")
            .await
            .unwrap();

        let updated = repo.get_book(book.book_id).await.unwrap().unwrap();
        assert_eq!(
            updated.attachment_url.as_deref(),
            Some("https://bucket.s3.amazonaws.com/x")
        );
        assert_eq!(updated.name, book.name);
        assert_eq!(updated.done, book.done);
    }

    #[tokio::test]
    async fn test_updates_on_absent_id_are_noops() {
        let repo = InMemoryRepository::new();
        let id = Uuid::new_v4();

        repo.update_book(id, &UpdateBookRequest::new("X", "2025-01-01", true))
            .await
            .unwrap();
        repo.update_attachment_url(id, "https://bucket.s3.amazonaws.com/x")
            .await
            .unwrap();

        assert!(repo.get_book(id).await.unwrap().is_none());
    }
}
