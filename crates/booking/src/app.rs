use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        bookings::{
            create_booking, delete_booking, empty_key_segment, list_bookings,
            list_bookings_by_category, list_bookings_by_email,
        },
        health::health,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    // Any origin may call the API; there is no authentication.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/booking", get(list_bookings).post(create_booking))
        .route("/booking/", get(list_bookings).post(create_booking))
        .route("/booking/email/{email}", get(list_bookings_by_email))
        .route(
            "/booking/category/{category}",
            get(list_bookings_by_category),
        )
        .route("/booking/{email}/{category}", delete(delete_booking))
        .route("/health", get(health))
        .fallback(empty_key_segment)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}
