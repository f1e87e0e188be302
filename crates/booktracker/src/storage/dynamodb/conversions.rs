//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! `BookItem`. Reading an item validates its shape so that malformed rows are
//! rejected at the storage boundary.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use booktracker_core::books::{BookItem, UserId, RESERVED_FIELDS};
use booktracker_core::serde::{format_iso8601, parse_iso8601};
use booktracker_core::storage::RepositoryError;
use chrono::{DateTime, Utc};
use serde_json::{Map, Number, Value};
use uuid::Uuid;

// ============================================================================
// Attribute names
// ============================================================================

pub const BOOK_ID: &str = "bookId";
pub const USER_ID: &str = "userId";
pub const NAME: &str = "name";
pub const DUE_DATE: &str = "dueDate";
pub const CREATED_AT: &str = "createdAt";
pub const DONE: &str = "done";
pub const ATTACHMENT_URL: &str = "attachmentUrl";

// ============================================================================
// Book conversions
// ============================================================================

/// Convert a BookItem to a DynamoDB item.
pub fn book_to_item(book: &BookItem) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    // Pass-through fields first so the typed fields always win.
    for (key, value) in &book.extra {
        item.insert(key.clone(), json_to_attribute(value));
    }

    item.insert(
        BOOK_ID.to_string(),
        AttributeValue::S(book.book_id.to_string()),
    );
    item.insert(
        USER_ID.to_string(),
        AttributeValue::S(book.user_id.to_string()),
    );
    item.insert(NAME.to_string(), AttributeValue::S(book.name.clone()));
    if let Some(due_date) = &book.due_date {
        item.insert(DUE_DATE.to_string(), AttributeValue::S(due_date.clone()));
    }
    item.insert(
        CREATED_AT.to_string(),
        AttributeValue::S(format_iso8601(&book.created_at)),
    );
    item.insert(DONE.to_string(), AttributeValue::Bool(book.done));
    item.insert(
        ATTACHMENT_URL.to_string(),
        match &book.attachment_url {
            Some(url) => AttributeValue::S(url.clone()),
            None => AttributeValue::Null(true),
        },
    );

    item
}

/// Convert a DynamoDB item to BookItem.
pub fn item_to_book(item: &HashMap<String, AttributeValue>) -> Result<BookItem, RepositoryError> {
    let mut extra = Map::new();
    for (key, value) in item {
        if RESERVED_FIELDS.contains(&key.as_str()) {
            continue;
        }
        extra.insert(key.clone(), attribute_to_json(value)?);
    }

    Ok(BookItem {
        book_id: get_uuid(item, BOOK_ID)?,
        user_id: UserId::new(get_string(item, USER_ID)?),
        name: get_string(item, NAME)?,
        due_date: get_optional_string(item, DUE_DATE)?,
        created_at: get_datetime(item, CREATED_AT)?,
        done: get_bool(item, DONE)?,
        attachment_url: get_optional_string(item, ATTACHMENT_URL)?,
        extra,
    })
}

// ============================================================================
// JSON <-> AttributeValue
// ============================================================================

/// Convert an arbitrary JSON value to an AttributeValue.
pub fn json_to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(values) => AttributeValue::L(values.iter().map(json_to_attribute).collect()),
        Value::Object(map) => AttributeValue::M(
            map.iter()
                .map(|(k, v)| (k.clone(), json_to_attribute(v)))
                .collect(),
        ),
    }
}

/// Convert an AttributeValue back to JSON.
///
/// Binary attributes have no JSON form and are rejected.
pub fn attribute_to_json(value: &AttributeValue) -> Result<Value, RepositoryError> {
    match value {
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::N(n) => parse_number(n),
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::Ss(values) => Ok(Value::Array(
            values.iter().cloned().map(Value::String).collect(),
        )),
        AttributeValue::Ns(values) => values
            .iter()
            .map(|n| parse_number(n))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::L(values) => values
            .iter()
            .map(attribute_to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::M(map) => map
            .iter()
            .map(|(k, v)| attribute_to_json(v).map(|v| (k.clone(), v)))
            .collect::<Result<Map<_, _>, _>>()
            .map(Value::Object),
        other => Err(RepositoryError::InvalidData(format!(
            "Unsupported attribute type: {:?}",
            other
        ))),
    }
}

fn parse_number(n: &str) -> Result<Value, RepositoryError> {
    if let Ok(i) = n.parse::<i64>() {
        return Ok(Value::Number(i.into()));
    }
    if let Ok(u) = n.parse::<u64>() {
        return Ok(Value::Number(u.into()));
    }
    n.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| RepositoryError::InvalidData(format!("Invalid number: {}", n)))
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get an optional string attribute. Absent and `NULL` both read as `None`;
/// any other non-string type is invalid.
fn get_optional_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<Option<String>, RepositoryError> {
    match item.get(key) {
        None | Some(AttributeValue::Null(_)) => Ok(None),
        Some(AttributeValue::S(s)) => Ok(Some(s.clone())),
        Some(_) => Err(RepositoryError::InvalidData(format!(
            "Invalid field: {}",
            key
        ))),
    }
}

/// Get a required boolean attribute.
fn get_bool(item: &HashMap<String, AttributeValue>, key: &str) -> Result<bool, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_bool().ok())
        .copied()
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a required UUID attribute.
fn get_uuid(item: &HashMap<String, AttributeValue>, key: &str) -> Result<Uuid, RepositoryError> {
    let s = get_string(item, key)?;
    Uuid::parse_str(&s)
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid UUID {}: {}", key, e)))
}

/// Get a required datetime attribute (RFC 3339 format).
fn get_datetime(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<DateTime<Utc>, RepositoryError> {
    let s = get_string(item, key)?;
    parse_iso8601(&s)
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid datetime {}: {}", key, e)))
}
