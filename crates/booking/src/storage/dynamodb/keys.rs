//! DynamoDB key attributes.
//!
//! Pure functions for building the primary key of a booking item.
//! All functions are sync and have no side effects.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

/// Partition key attribute.
pub const PARTITION_KEY: &str = "email";

/// Sort key attribute.
pub const SORT_KEY: &str = "category";

/// Placeholder for the partition key in expressions.
pub const PARTITION_KEY_NAME: &str = "#email";

/// Placeholder for the sort key in expressions.
pub const SORT_KEY_NAME: &str = "#category";

/// Build the primary key map for `(email, category)`.
pub fn primary_key(email: &str, category: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            PARTITION_KEY.to_string(),
            AttributeValue::S(email.to_string()),
        ),
        (SORT_KEY.to_string(), AttributeValue::S(category.to_string())),
    ])
}

/// Key condition selecting one partition.
pub fn partition_condition() -> String {
    format!("{PARTITION_KEY_NAME} = :email")
}

/// Filter expression matching a category during a scan.
pub fn category_filter() -> String {
    format!("{SORT_KEY_NAME} = :category")
}

/// Condition that only holds when the item already exists.
pub fn exists_condition() -> String {
    format!("attribute_exists({PARTITION_KEY_NAME})")
}
