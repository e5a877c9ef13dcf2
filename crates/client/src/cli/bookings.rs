//! Booking CLI commands.

use clap::{Parser, Subcommand};

/// Booking management commands.
#[derive(Debug, Parser)]
pub struct BookingsCommand {
    #[command(subcommand)]
    pub action: BookingsAction,
}

/// Available booking actions.
#[derive(Debug, Subcommand)]
pub enum BookingsAction {
    /// List bookings, optionally for one email or one category.
    List {
        /// Only bookings of this registrant.
        #[arg(long, conflicts_with = "category")]
        email: Option<String>,
        /// Only bookings of this category (full scan on the server).
        #[arg(long)]
        category: Option<String>,
    },
    /// Create a booking, overwriting any booking with the same email and category.
    Create {
        /// Attendee first name.
        #[arg(long)]
        name: String,
        /// Attendee surname.
        #[arg(long)]
        surname: String,
        /// Attendee email.
        #[arg(long)]
        email: String,
        /// Event category.
        #[arg(long)]
        category: String,
    },
    /// Delete the booking for an email and category.
    Delete {
        /// Attendee email.
        email: String,
        /// Event category.
        category: String,
    },
}
