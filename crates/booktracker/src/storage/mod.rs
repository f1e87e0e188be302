//! Storage backend implementations.
//!
//! This module provides concrete implementations of `BookRepository` from
//! `booktracker_core::storage`. The backend is selected at compile time via
//! feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): in-process HashMap, for tests and local runs
//! - `dynamodb`: AWS DynamoDB storage backend using `aws-sdk-dynamodb`
//!
//! # Examples
//!
//! Build with DynamoDB:
//! ```bash
//! cargo build -p booktracker --no-default-features --features dynamodb
//! ```

#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(any(test, feature = "inmemory"))]
pub use inmemory::InMemoryRepository;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;
