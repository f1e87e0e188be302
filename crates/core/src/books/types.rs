use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Primary key of a book record.
pub type BookId = Uuid;

/// Field names owned by the server. Extra request fields with these names are
/// dropped before a record is built.
pub const RESERVED_FIELDS: [&str; 7] = [
    "bookId",
    "userId",
    "name",
    "dueDate",
    "createdAt",
    "done",
    "attachmentUrl",
];

/// Opaque caller identity (the token subject).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The single persisted entity.
///
/// `book_id`, `user_id`, and `created_at` never change after creation.
/// `attachment_url` is serialized as `null` until an upload URL is issued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookItem {
    pub book_id: BookId,
    pub user_id: UserId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(
        serialize_with = "crate::serde::serialize_iso8601",
        deserialize_with = "crate::serde::deserialize_iso8601"
    )]
    pub created_at: DateTime<Utc>,
    pub done: bool,
    #[serde(default)]
    pub attachment_url: Option<String>,
    /// Caller-supplied fields without a dedicated column, passed through verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BookItem {
    /// Returns true if `user_id` owns this record.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_book() -> BookItem {
        BookItem {
            book_id: Uuid::parse_str("550e8400-e29b-41d4-a716-446655440003").unwrap(),
            user_id: UserId::new("auth0|u1"),
            name: "Dune".to_string(),
            due_date: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
            done: false,
            attachment_url: None,
            extra: Map::new(),
        }
    }

    #[test]
    fn test_book_serializes_camel_case() {
        let json = serde_json::to_value(sample_book()).unwrap();

        assert_eq!(json["bookId"], "550e8400-e29b-41d4-a716-446655440003");
        assert_eq!(json["userId"], "auth0|u1");
        assert_eq!(json["createdAt"], "2024-01-15T10:30:00.000Z");
        assert_eq!(json["done"], false);
        assert!(json["attachmentUrl"].is_null());
        assert!(json.get("attachmentUrl").is_some());
        assert!(json.get("dueDate").is_none());
    }

    #[test]
    fn test_book_extra_fields_are_flattened() {
        let mut book = sample_book();
        book.extra
            .insert("author".to_string(), Value::String("Frank Herbert".into()));

        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["author"], "Frank Herbert");

        let parsed: BookItem = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, book);
    }

    #[test]
    fn test_is_owned_by() {
        let book = sample_book();
        assert!(book.is_owned_by(&UserId::new("auth0|u1")));
        assert!(!book.is_owned_by(&UserId::new("auth0|u2")));
    }

    #[test]
    fn test_user_id_display() {
        assert_eq!(UserId::from("google-oauth2|42").to_string(), "google-oauth2|42");
    }
}
