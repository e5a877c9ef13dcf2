//! Health check operations.

use serde::{Deserialize, Serialize};

use super::BookingClient;
use crate::error::Result;

/// Server liveness status.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl BookingClient {
    /// Check server liveness.
    pub async fn health(&self) -> Result<HealthStatus> {
        let response = self.client.get(self.url("/health")).send().await?;
        self.handle_response(response, "health").await
    }
}
