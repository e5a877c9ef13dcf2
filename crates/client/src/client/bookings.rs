//! Booking API operations.

use booking_core::booking::{Booking, BookingKey};
use serde::{Deserialize, Serialize};
use urlencoding::encode;

use super::BookingClient;
use crate::error::Result;

/// Confirmation returned by a successful delete.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

impl BookingClient {
    /// Create or overwrite a booking.
    pub async fn create_booking(&self, booking: &Booking) -> Result<Booking> {
        let response = self
            .client
            .post(self.url("/booking/"))
            .json(booking)
            .send()
            .await?;
        self.handle_response(response, "booking").await
    }

    /// List all bookings.
    pub async fn list_bookings(&self) -> Result<Vec<Booking>> {
        let response = self.client.get(self.url("/booking/")).send().await?;
        self.handle_response(response, "bookings").await
    }

    /// List the bookings of one registrant.
    pub async fn list_bookings_by_email(&self, email: &str) -> Result<Vec<Booking>> {
        let response = self
            .client
            .get(self.url(&booking_email_path(email)))
            .send()
            .await?;
        self.handle_response(response, "bookings").await
    }

    /// List the bookings of one category.
    pub async fn list_bookings_by_category(&self, category: &str) -> Result<Vec<Booking>> {
        let response = self
            .client
            .get(self.url(&booking_category_path(category)))
            .send()
            .await?;
        self.handle_response(response, "bookings").await
    }

    /// Delete the booking at (email, category).
    pub async fn delete_booking(&self, email: &str, category: &str) -> Result<DeleteConfirmation> {
        let response = self
            .client
            .delete(self.url(&booking_key_path(email, category)))
            .send()
            .await?;
        let resource = format!("booking {}", BookingKey::new(email, category));
        self.handle_response(response, &resource).await
    }
}

fn booking_email_path(email: &str) -> String {
    format!("/booking/email/{}", encode(email))
}

fn booking_category_path(category: &str) -> String {
    format!("/booking/category/{}", encode(category))
}

fn booking_key_path(email: &str, category: &str) -> String {
    format!("/booking/{}/{}", encode(email), encode(category))
}
