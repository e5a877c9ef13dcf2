//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. The storage backend is chosen via feature flags and
//! constructed once at startup.

use std::sync::Arc;

use booking_core::storage::BookingRepository;

use crate::service::BookingService;

/// Shared application state.
///
/// Cloned for each request handler. The repository behind the service is
/// shared, so every clone sees the same bookings.
#[derive(Clone)]
pub struct AppState {
    pub bookings: BookingService,
}

impl AppState {
    /// Creates AppState around an already constructed repository.
    pub fn with_repository(repo: Arc<dyn BookingRepository>) -> Self {
        Self {
            bookings: BookingService::new(repo),
        }
    }
}

// ============================================================================
// Factory functions for the different backends
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;
    use crate::config::Config;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        pub async fn new(_config: &Config) -> Result<Self, anyhow::Error> {
            tracing::info!("Using in-memory booking storage");
            Ok(Self::with_repository(Arc::new(InMemoryRepository::new())))
        }
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb {
    use super::*;
    use crate::config::Config;
    use crate::storage::DynamoDbRepository;

    impl AppState {
        /// Creates AppState with DynamoDB storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo =
                DynamoDbRepository::connect(&config.table_name, config.dynamodb_endpoint.as_deref())
                    .await;

            tracing::info!(
                table = repo.table_name(),
                endpoint = ?config.dynamodb_endpoint,
                "Using DynamoDB booking storage"
            );

            Ok(Self::with_repository(Arc::new(repo)))
        }
    }
}

#[cfg(test)]
impl Default for AppState {
    /// In-memory state for handler tests, regardless of the selected backend.
    fn default() -> Self {
        Self::with_repository(Arc::new(crate::storage::InMemoryRepository::new()))
    }
}
