//! DynamoDB repository implementation.
//!
//! Implements `BookRepository` from `booktracker_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use booktracker_core::books::{BookId, BookItem, UpdateBookRequest, UserId};
use booktracker_core::storage::{BookRepository, Result};

use super::conversions::{
    book_to_item, item_to_book, ATTACHMENT_URL, BOOK_ID, DONE, DUE_DATE, NAME, USER_ID,
};
use super::error::{
    is_missing_item, map_delete_item_error, map_get_item_error, map_put_item_error,
    map_query_error, map_update_item_error,
};
use crate::config::Config;

/// DynamoDB-based repository implementation.
///
/// The client is injected by the caller; this type never builds its own.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
    user_index: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client, table, and index.
    pub fn new(
        client: Client,
        table_name: impl Into<String>,
        user_index: impl Into<String>,
    ) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            user_index: user_index.into(),
        }
    }

    /// Creates a new repository using the table and index named in `config`.
    pub fn from_config(client: Client, config: &Config) -> Self {
        Self::new(client, &config.books_table, &config.books_user_index)
    }

    fn key(id: BookId) -> AttributeValue {
        AttributeValue::S(id.to_string())
    }
}

/// Condition shared by both partial updates. Without it UpdateItem would
/// create a row holding only the updated attributes, which `item_to_book`
/// then rejects on every read.
const ITEM_EXISTS: &str = "attribute_exists(#bookId)";

#[async_trait]
impl BookRepository for DynamoDbRepository {
    async fn get_book(&self, id: BookId) -> Result<Option<BookItem>> {
        tracing::debug!(book_id = %id, table = %self.table_name, "GetItem");

        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(BOOK_ID, Self::key(id))
            .send()
            .await
            .map_err(|e| map_get_item_error(e, id.to_string()))?;

        match result.item {
            Some(item) => Ok(Some(item_to_book(&item)?)),
            None => Ok(None),
        }
    }

    async fn get_books_for_user(&self, user_id: &UserId) -> Result<Vec<BookItem>> {
        tracing::debug!(user_id = %user_id, index = %self.user_index, "Query");

        let mut books = Vec::new();
        let mut start_key = None;

        // Follow LastEvaluatedKey so callers always see the full collection.
        loop {
            let page = self
                .client
                .query()
                .table_name(&self.table_name)
                .index_name(&self.user_index)
                .key_condition_expression("#userId = :userId")
                .expression_attribute_names("#userId", USER_ID)
                .expression_attribute_values(":userId", AttributeValue::S(user_id.to_string()))
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(map_query_error)?;

            for item in page.items() {
                books.push(item_to_book(item)?);
            }

            match page.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        Ok(books)
    }

    async fn put_book(&self, book: &BookItem) -> Result<()> {
        tracing::debug!(book_id = %book.book_id, table = %self.table_name, "PutItem");

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(book_to_item(book)))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, book.book_id.to_string()))?;

        Ok(())
    }

    async fn delete_book(&self, id: BookId) -> Result<()> {
        tracing::debug!(book_id = %id, table = %self.table_name, "DeleteItem");

        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(BOOK_ID, Self::key(id))
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, id.to_string()))?;

        Ok(())
    }

    async fn update_book(&self, id: BookId, update: &UpdateBookRequest) -> Result<()> {
        tracing::debug!(book_id = %id, table = %self.table_name, "UpdateItem");

        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(BOOK_ID, Self::key(id))
            .update_expression("SET #name = :name, #dueDate = :dueDate, #done = :done")
            .condition_expression(ITEM_EXISTS)
            .expression_attribute_names("#bookId", BOOK_ID)
            .expression_attribute_names("#name", NAME)
            .expression_attribute_names("#dueDate", DUE_DATE)
            .expression_attribute_names("#done", DONE)
            .expression_attribute_values(":name", AttributeValue::S(update.name.clone()))
            .expression_attribute_values(":dueDate", AttributeValue::S(update.due_date.clone()))
            .expression_attribute_values(":done", AttributeValue::Bool(update.done))
            .send()
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if is_missing_item(&e) => {
                tracing::debug!(book_id = %id, "UpdateItem skipped, item no longer exists");
                Ok(())
            }
            Err(e) => Err(map_update_item_error(e, id.to_string())),
        }
    }

    async fn update_attachment_url(&self, id: BookId, attachment_url: &str) -> Result<()> {
        tracing::debug!(book_id = %id, table = %self.table_name, "UpdateItem attachmentUrl");

        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(BOOK_ID, Self::key(id))
            .update_expression("SET #attachmentUrl = :attachmentUrl")
            .condition_expression(ITEM_EXISTS)
            .expression_attribute_names("#bookId", BOOK_ID)
            .expression_attribute_names("#attachmentUrl", ATTACHMENT_URL)
            .expression_attribute_values(
                ":attachmentUrl",
                AttributeValue::S(attachment_url.to_string()),
            )
            .send()
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if is_missing_item(&e) => {
                tracing::debug!(book_id = %id, "UpdateItem skipped, item no longer exists");
                Ok(())
            }
            Err(e) => Err(map_update_item_error(e, id.to_string())),
        }
    }
}
