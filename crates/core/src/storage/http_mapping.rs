//! Pure functions for mapping errors to HTTP status codes.
//!
//! This module provides HTTP status code mappings for [`BookingError`]
//! variants, following the Functional Core pattern - pure functions with no
//! side effects. Repository errors reach this mapping only after conversion
//! into a [`BookingError`].

use crate::booking::BookingError;

/// Maps a [`BookingError`] to the HTTP status code returned to clients.
///
/// - `InvalidInput` -> 400 (Bad Request)
/// - `NotFound` -> 404 (Not Found)
/// - `StoreUnavailable` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use booking_core::booking::BookingError;
/// use booking_core::storage::booking_error_to_status_code;
///
/// let error = BookingError::InvalidInput("email is required".to_string());
/// assert_eq!(booking_error_to_status_code(&error), 400);
/// ```
pub fn booking_error_to_status_code(error: &BookingError) -> u16 {
    match error {
        BookingError::InvalidInput(_) => 400,
        BookingError::NotFound(_) => 404,
        BookingError::StoreUnavailable(_) => 500,
    }
}
