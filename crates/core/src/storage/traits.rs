use async_trait::async_trait;

use crate::booking::Booking;

use super::Result;

/// Record store for bookings, keyed by (`email`, `category`).
///
/// `email` is the partition component and is served by a direct index
/// lookup. `category` is a plain attribute: filtering on it scans the whole
/// collection. Implementations accept empty key components; rejecting them is
/// the caller's job.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Inserts or overwrites the booking at its composite key (last write wins).
    async fn put_booking(&self, booking: &Booking) -> Result<Booking>;

    /// Gets every booking, in no particular order.
    async fn get_all_bookings(&self) -> Result<Vec<Booking>>;

    /// Gets every booking in the partition of `email`.
    async fn get_bookings_by_email(&self, email: &str) -> Result<Vec<Booking>>;

    /// Gets every booking whose category equals `category` (full scan).
    async fn get_bookings_by_category(&self, category: &str) -> Result<Vec<Booking>>;

    /// Deletes the booking at (`email`, `category`).
    ///
    /// Fails with `RepositoryError::NotFound` when no such booking exists.
    async fn delete_booking(&self, email: &str, category: &str) -> Result<()>;
}
