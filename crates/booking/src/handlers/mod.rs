pub mod bookings;
pub mod error;
pub mod health;

pub use error::AppError;
