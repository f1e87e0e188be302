use thiserror::Error;

use super::types::BookId;

/// Outcome of a failed ownership check.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OwnershipError {
    #[error("Book not found: {book_id}")]
    NotFound { book_id: BookId },
    #[error("Not allowed to modify book: {book_id}")]
    Forbidden { book_id: BookId },
}

impl OwnershipError {
    /// HTTP status code for this outcome.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Forbidden { .. } => 403,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_ownership_error_display_and_status() {
        let book_id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440003").unwrap();

        let not_found = OwnershipError::NotFound { book_id };
        assert_eq!(
            not_found.to_string(),
            "Book not found: 550e8400-e29b-41d4-a716-446655440003"
        );
        assert_eq!(not_found.status_code(), 404);

        let forbidden = OwnershipError::Forbidden { book_id };
        assert_eq!(forbidden.status_code(), 403);
    }
}
