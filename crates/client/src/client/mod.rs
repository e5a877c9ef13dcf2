//! HTTP client for the booking API.

pub mod bookings;
pub mod health;

use serde::Deserialize;

use crate::error::{ClientError, Result};

/// Error body returned by the server.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the booking API.
#[derive(Debug, Clone)]
pub struct BookingClient {
    client: reqwest::Client,
    base_url: String,
}

impl BookingClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a success body or turn the response into a [`ClientError`].
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
        resource: &str,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return response.json().await.map_err(ClientError::from);
        }

        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = error_message(&text);

        if status.as_u16() == 404 {
            Err(ClientError::NotFound {
                resource: resource.to_string(),
            })
        } else {
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Extract the `error` field of a JSON error body, falling back to raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| body.to_string())
}
