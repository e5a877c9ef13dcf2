use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use booking_core::booking::BookingError;
use booking_core::storage::booking_error_to_status_code;

/// Error returned by booking handlers.
///
/// Wraps a [`BookingError`] and renders it as `{"error": "<message>"}` with
/// the status code from [`booking_error_to_status_code`].
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = StatusCode::from_u16(booking_error_to_status_code(&self.0))
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status_code.is_client_error() {
            tracing::warn!(status = %status_code, error = %self.0, "Booking request rejected");
        }

        (
            status_code,
            Json(serde_json::json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        Self(err)
    }
}
