//! Pretty output formatting.

use booking_core::booking::Booking;

/// Format a booking for display.
pub fn format_booking(booking: &Booking) -> String {
    format!(
        "{} {}\n  Email: {}\n  Category: {}",
        booking.name, booking.surname, booking.email, booking.category
    )
}

/// Format bookings for display.
pub fn format_bookings(bookings: &[Booking]) -> String {
    if bookings.is_empty() {
        return "No bookings found.".to_string();
    }
    let mut output = format!("BOOKINGS ({})\n", bookings.len());
    output.push_str(&"-".repeat(40));
    for booking in bookings {
        output.push_str(&format!("\n{}", format_booking(booking)));
        output.push('\n');
    }
    output
}
