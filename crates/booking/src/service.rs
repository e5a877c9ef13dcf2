//! Booking service: validates requests and translates them into repository
//! calls.
//!
//! Handlers never talk to the repository directly. Every method returns a
//! [`BookingError`]; conversion to HTTP status codes happens in the handlers.

use std::sync::Arc;

use serde::Serialize;

use booking_core::booking::{validate_booking, validate_key, Booking, BookingError, Result};
use booking_core::storage::{BookingRepository, RepositoryError};

/// Liveness payload returned by the health check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// Confirmation returned by a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

/// Request/response layer over a [`BookingRepository`].
#[derive(Clone)]
pub struct BookingService {
    repo: Arc<dyn BookingRepository>,
}

impl BookingService {
    pub fn new(repo: Arc<dyn BookingRepository>) -> Self {
        Self { repo }
    }

    /// Creates or overwrites the booking at its (email, category) key.
    ///
    /// Repeating a create with the same key is an update, not an error.
    pub async fn create_booking(&self, input: Booking) -> Result<Booking> {
        validate_booking(&input)?;

        let stored = self.repo.put_booking(&input).await.map_err(store_error)?;

        tracing::info!(key = %stored.key(), "Stored booking");
        Ok(stored)
    }

    /// Lists every booking.
    pub async fn list_all(&self) -> Result<Vec<Booking>> {
        self.repo.get_all_bookings().await.map_err(store_error)
    }

    /// Lists the bookings of one registrant.
    pub async fn list_by_email(&self, email: &str) -> Result<Vec<Booking>> {
        validate_key("email", email)?;
        self.repo
            .get_bookings_by_email(email)
            .await
            .map_err(store_error)
    }

    /// Lists the bookings of one category across all registrants.
    pub async fn list_by_category(&self, category: &str) -> Result<Vec<Booking>> {
        validate_key("category", category)?;
        self.repo
            .get_bookings_by_category(category)
            .await
            .map_err(store_error)
    }

    /// Deletes the booking at (email, category).
    ///
    /// Fails with [`BookingError::NotFound`] when nothing is stored there.
    pub async fn delete_booking(&self, email: &str, category: &str) -> Result<DeleteConfirmation> {
        validate_key("email", email)?;
        validate_key("category", category)?;

        self.repo
            .delete_booking(email, category)
            .await
            .map_err(store_error)?;

        tracing::info!(%email, %category, "Deleted booking");
        Ok(DeleteConfirmation {
            message: format!("Booking for {email} in {category} deleted"),
        })
    }

    /// Constant liveness signal, independent of the store.
    pub fn health_check(&self) -> HealthStatus {
        HealthStatus { status: "healthy" }
    }
}

/// Converts a repository failure, logging infrastructure faults.
fn store_error(err: RepositoryError) -> BookingError {
    let err = BookingError::from(err);
    if let BookingError::StoreUnavailable(message) = &err {
        tracing::error!(error = %message, "Booking store operation failed");
    }
    err
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use async_trait::async_trait;

    use super::*;
    use crate::storage::InMemoryRepository;

    fn service() -> BookingService {
        BookingService::new(Arc::new(InMemoryRepository::new()))
    }

    /// Repository whose every call fails as if the backend were unreachable.
    struct UnavailableRepository;

    #[async_trait]
    impl BookingRepository for UnavailableRepository {
        async fn put_booking(&self, _: &Booking) -> booking_core::storage::Result<Booking> {
            Err(RepositoryError::ConnectionFailed("unreachable".to_string()))
        }

        async fn get_all_bookings(&self) -> booking_core::storage::Result<Vec<Booking>> {
            Err(RepositoryError::ConnectionFailed("unreachable".to_string()))
        }

        async fn get_bookings_by_email(
            &self,
            _: &str,
        ) -> booking_core::storage::Result<Vec<Booking>> {
            Err(RepositoryError::QueryFailed("Table not found".to_string()))
        }

        async fn get_bookings_by_category(
            &self,
            _: &str,
        ) -> booking_core::storage::Result<Vec<Booking>> {
            Err(RepositoryError::QueryFailed("Table not found".to_string()))
        }

        async fn delete_booking(&self, _: &str, _: &str) -> booking_core::storage::Result<()> {
            Err(RepositoryError::ConnectionFailed("unreachable".to_string()))
        }
    }

    #[tokio::test]
    async fn test_booking_lifecycle_scenario() {
        let service = service();

        service
            .create_booking(Booking::new("Ana", "Lee", "a@x.com", "Workshop"))
            .await
            .unwrap();
        let bookings = service.list_by_email("a@x.com").await.unwrap();
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].category, "Workshop");

        service
            .create_booking(Booking::new("Ana", "Lee", "a@x.com", "Summit"))
            .await
            .unwrap();
        let bookings = service.list_by_email("a@x.com").await.unwrap();
        let categories: HashSet<&str> = bookings.iter().map(|b| b.category.as_str()).collect();
        assert_eq!(categories, HashSet::from(["Workshop", "Summit"]));

        assert!(service.delete_booking("a@x.com", "Workshop").await.is_ok());
        assert_eq!(
            service.delete_booking("a@x.com", "Workshop").await,
            Err(BookingError::NotFound("a@x.com/Workshop".to_string()))
        );

        let bookings = service.list_by_email("a@x.com").await.unwrap();
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].category, "Summit");
    }

    #[tokio::test]
    async fn test_create_with_empty_email_stores_nothing() {
        let service = service();

        let result = service
            .create_booking(Booking::new("Ana", "Lee", "", "Workshop"))
            .await;

        assert!(matches!(result, Err(BookingError::InvalidInput(_))));
        assert!(service.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_with_empty_category_is_invalid() {
        let service = service();

        let result = service
            .create_booking(Booking::new("Ana", "Lee", "a@x.com", ""))
            .await;

        assert!(matches!(result, Err(BookingError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_repeated_create_is_an_update() {
        let service = service();

        service
            .create_booking(Booking::new("Ana", "Lee", "a@x.com", "Workshop"))
            .await
            .unwrap();
        let stored = service
            .create_booking(Booking::new("Ana", "Park", "a@x.com", "Workshop"))
            .await
            .unwrap();

        assert_eq!(stored.surname, "Park");
        let bookings = service.list_by_email("a@x.com").await.unwrap();
        assert_eq!(bookings, vec![stored]);
    }

    #[tokio::test]
    async fn test_list_all_empty_is_ok() {
        assert!(service().list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_by_category_matches_exactly() {
        let service = service();
        for (email, category) in [
            ("a@x.com", "Workshop"),
            ("b@x.com", "Workshop"),
            ("b@x.com", "Summit"),
            ("c@x.com", "workshop"),
        ] {
            service
                .create_booking(Booking::new("N", "S", email, category))
                .await
                .unwrap();
        }

        let bookings = service.list_by_category("Workshop").await.unwrap();
        let emails: HashSet<&str> = bookings.iter().map(|b| b.email.as_str()).collect();

        assert_eq!(bookings.len(), 2);
        assert_eq!(emails, HashSet::from(["a@x.com", "b@x.com"]));
    }

    #[tokio::test]
    async fn test_empty_query_arguments_are_invalid() {
        let service = service();

        assert!(matches!(
            service.list_by_email("").await,
            Err(BookingError::InvalidInput(_))
        ));
        assert!(matches!(
            service.list_by_category("").await,
            Err(BookingError::InvalidInput(_))
        ));
        assert!(matches!(
            service.delete_booking("", "Workshop").await,
            Err(BookingError::InvalidInput(_))
        ));
        assert!(matches!(
            service.delete_booking("a@x.com", "").await,
            Err(BookingError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_store_failures_become_store_unavailable() {
        let service = BookingService::new(Arc::new(UnavailableRepository));

        assert!(matches!(
            service
                .create_booking(Booking::new("Ana", "Lee", "a@x.com", "Workshop"))
                .await,
            Err(BookingError::StoreUnavailable(_))
        ));
        assert!(matches!(
            service.list_all().await,
            Err(BookingError::StoreUnavailable(_))
        ));
        assert!(matches!(
            service.list_by_email("a@x.com").await,
            Err(BookingError::StoreUnavailable(_))
        ));
        assert!(matches!(
            service.list_by_category("Workshop").await,
            Err(BookingError::StoreUnavailable(_))
        ));
        assert!(matches!(
            service.delete_booking("a@x.com", "Workshop").await,
            Err(BookingError::StoreUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_health_check_ignores_store_state() {
        let service = BookingService::new(Arc::new(UnavailableRepository));
        assert_eq!(service.health_check(), HealthStatus { status: "healthy" });
    }
}
