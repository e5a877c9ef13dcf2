mod error;
mod types;
mod validation;

pub use error::{BookingError, Result};
pub use types::{Booking, BookingKey};
pub use validation::{validate_booking, validate_key};
