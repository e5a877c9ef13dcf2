//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! bookings. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use booking_core::booking::Booking;
use booking_core::storage::RepositoryError;

use super::keys;

/// Descriptive attribute names on stored items.
pub const NAME_ATTRIBUTE: &str = "Name";
pub const SURNAME_ATTRIBUTE: &str = "Surname";

/// Convert a Booking to a DynamoDB item.
pub fn booking_to_item(booking: &Booking) -> HashMap<String, AttributeValue> {
    let mut item = keys::primary_key(&booking.email, &booking.category);

    item.insert(
        NAME_ATTRIBUTE.to_string(),
        AttributeValue::S(booking.name.clone()),
    );
    item.insert(
        SURNAME_ATTRIBUTE.to_string(),
        AttributeValue::S(booking.surname.clone()),
    );

    item
}

/// Convert a DynamoDB item to a Booking.
pub fn item_to_booking(item: &HashMap<String, AttributeValue>) -> Result<Booking, RepositoryError> {
    Ok(Booking {
        name: get_string(item, NAME_ATTRIBUTE)?,
        surname: get_string(item, SURNAME_ATTRIBUTE)?,
        email: get_string(item, keys::PARTITION_KEY)?,
        category: get_string(item, keys::SORT_KEY)?,
    })
}

/// Convert a page of DynamoDB items to bookings.
pub fn items_to_bookings(
    items: &[HashMap<String, AttributeValue>],
) -> Result<Vec<Booking>, RepositoryError> {
    items.iter().map(item_to_booking).collect()
}

/// Get a required string attribute.
fn get_string(item: &HashMap<String, AttributeValue>, key: &str) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}
