//! booking_client - CLI client for the booking API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::BookingClient;
pub use error::{ClientError, Result};
