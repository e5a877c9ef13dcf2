//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of the repository
//! trait using `aws-sdk-dynamodb`. The table uses `email` as its partition key
//! and `category` as its sort key; there are no secondary indexes.

mod conversions;
mod error;
mod keys;
mod repository;

pub use repository::DynamoDbRepository;
