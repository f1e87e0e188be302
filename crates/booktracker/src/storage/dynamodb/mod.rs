//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of `BookRepository`
//! using `aws-sdk-dynamodb`. Books live in a single table keyed by `bookId`
//! with a global secondary index on `userId`.

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
