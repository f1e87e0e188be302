//! API request types for book operations.
//!
//! Pure data types with no I/O, shared by the handlers and the repositories.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::factory::new_book;
use super::types::{BookItem, UserId};

/// Request payload for creating a new book.
///
/// Any field besides `name` and `dueDate` lands in `extra` and is copied onto
/// the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreateBookRequest {
    /// Create a new request with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            due_date: None,
            extra: Map::new(),
        }
    }

    /// Set the due date.
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Add a pass-through field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Convert into a fresh `BookItem` owned by `owner`.
    pub fn into_book(self, owner: UserId) -> BookItem {
        new_book(owner, self)
    }
}

/// Request payload for updating a book.
///
/// All three fields are required; a body missing any of them is rejected
/// instead of writing nulls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookRequest {
    pub name: String,
    pub due_date: String,
    pub done: bool,
}

impl UpdateBookRequest {
    pub fn new(name: impl Into<String>, due_date: impl Into<String>, done: bool) -> Self {
        Self {
            name: name.into(),
            due_date: due_date.into(),
            done,
        }
    }

    /// Apply the update to a book, touching only `name`, `due_date`, and `done`.
    pub fn apply_to(&self, book: &mut BookItem) {
        book.name = self.name.clone();
        book.due_date = Some(self.due_date.clone());
        book.done = self.done;
    }
}
