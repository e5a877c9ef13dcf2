use super::{Booking, BookingError};

/// Rejects an empty key component.
///
/// Only emptiness is checked; whitespace and case are stored as given.
///
/// # Examples
///
/// ```
/// use booking_core::booking::validate_key;
///
/// assert!(validate_key("email", "a@x.com").is_ok());
/// assert!(validate_key("category", "").is_err());
/// ```
pub fn validate_key(field: &str, value: &str) -> Result<(), BookingError> {
    if value.is_empty() {
        return Err(BookingError::InvalidInput(format!("{field} is required")));
    }
    Ok(())
}

/// Validates a booking before it reaches the store.
pub fn validate_booking(booking: &Booking) -> Result<(), BookingError> {
    validate_key("email", &booking.email)?;
    validate_key("category", &booking.category)
}
