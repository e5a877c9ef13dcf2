//! Booking CRUD handlers.
//!
//! Handlers only extract request data and delegate to
//! [`BookingService`](crate::service::BookingService); status codes come from
//! [`AppError`].

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};

use booking_core::booking::{Booking, BookingError};

use crate::{handlers::AppError, service::DeleteConfirmation, state::AppState};

/// Create or overwrite a booking (POST /booking/).
pub async fn create_booking(
    State(state): State<AppState>,
    payload: Result<Json<Booking>, JsonRejection>,
) -> Result<Json<Booking>, AppError> {
    let Json(booking) = payload
        .map_err(|e| BookingError::InvalidInput(format!("Failed to parse booking: {e}")))?;

    tracing::debug!(
        email = %booking.email,
        category = %booking.category,
        "Received create booking request"
    );

    let stored = state.bookings.create_booking(booking).await?;
    Ok(Json(stored))
}

/// List every booking (GET /booking/).
pub async fn list_bookings(State(state): State<AppState>) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = state.bookings.list_all().await?;
    Ok(Json(bookings))
}

/// List the bookings of one registrant (GET /booking/email/{email}).
pub async fn list_bookings_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = state.bookings.list_by_email(&email).await?;
    Ok(Json(bookings))
}

/// List the bookings of one category (GET /booking/category/{category}).
pub async fn list_bookings_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = state.bookings.list_by_category(&category).await?;
    Ok(Json(bookings))
}

/// Delete a booking (DELETE /booking/{email}/{category}).
pub async fn delete_booking(
    State(state): State<AppState>,
    Path((email, category)): Path<(String, String)>,
) -> Result<Json<DeleteConfirmation>, AppError> {
    tracing::debug!(%email, %category, "Received delete booking request");

    let confirmation = state.bookings.delete_booking(&email, &category).await?;
    Ok(Json(confirmation))
}

/// Router fallback for booking paths with an empty key segment.
///
/// Path parameters never bind to an empty segment, so `GET /booking/email/`,
/// `GET /booking/category/`, `DELETE /booking/{email}/` and
/// `DELETE /booking//{category}` land here and go through the same
/// validation as the routed handlers. Anything else is a plain 404.
pub async fn empty_key_segment(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Response {
    let Some(rest) = uri.path().strip_prefix("/booking/") else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let segments: Vec<&str> = rest.split('/').collect();

    let rejected = match segments.as_slice() {
        ["email", ""] if method == Method::GET => state.bookings.list_by_email("").await.err(),
        ["category", ""] if method == Method::GET => {
            state.bookings.list_by_category("").await.err()
        }
        [email, category]
            if method == Method::DELETE && (email.is_empty() || category.is_empty()) =>
        {
            state.bookings.delete_booking(email, category).await.err()
        }
        _ => None,
    };

    match rejected {
        Some(err) => AppError(err).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
