//! booking-client CLI entry point.

use booking_client::cli::bookings::BookingsAction;
use booking_client::cli::{Cli, Commands, OutputFormat};
use booking_client::client::BookingClient;
use booking_client::output::{format_output, pretty};
use booking_core::booking::Booking;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = BookingClient::new(&cli.base_url);

    match cli.command {
        Commands::Bookings(bookings_cmd) => match bookings_cmd.action {
            BookingsAction::List { email, category } => {
                let bookings = match (email, category) {
                    (Some(email), _) => client.list_bookings_by_email(&email).await?,
                    (None, Some(category)) => client.list_bookings_by_category(&category).await?,
                    (None, None) => client.list_bookings().await?,
                };
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&bookings, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_bookings(&bookings)),
                }
            }
            BookingsAction::Create {
                name,
                surname,
                email,
                category,
            } => {
                let booking = client
                    .create_booking(&Booking::new(name, surname, email, category))
                    .await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&booking, cli.format)),
                    OutputFormat::Pretty => {
                        println!("Stored:\n{}", pretty::format_booking(&booking))
                    }
                }
            }
            BookingsAction::Delete { email, category } => {
                let confirmation = client.delete_booking(&email, &category).await?;
                match cli.format {
                    OutputFormat::Json => {
                        println!("{}", format_output(&confirmation, cli.format))
                    }
                    OutputFormat::Pretty if !cli.quiet => println!("{}", confirmation.message),
                    OutputFormat::Pretty => {}
                }
            }
        },
        Commands::Health => {
            let health = client.health().await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&health, cli.format)),
                OutputFormat::Pretty => println!("Server status: {}", health.status),
            }
        }
    }

    Ok(())
}
