//! In-memory repository implementation.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use booking_core::booking::{Booking, BookingKey};
use booking_core::storage::{BookingRepository, RepositoryError, Result};

/// Partition index: email -> (category -> booking).
type Partitions = HashMap<String, BTreeMap<String, Booking>>;

/// In-memory storage backend.
///
/// A single coarse lock guards the whole index, so every operation is atomic
/// with respect to every other.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    partitions: Arc<RwLock<Partitions>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingRepository for InMemoryRepository {
    async fn put_booking(&self, booking: &Booking) -> Result<Booking> {
        let mut partitions = self.partitions.write().await;
        partitions
            .entry(booking.email.clone())
            .or_default()
            .insert(booking.category.clone(), booking.clone());
        Ok(booking.clone())
    }

    async fn get_all_bookings(&self) -> Result<Vec<Booking>> {
        let partitions = self.partitions.read().await;
        Ok(partitions
            .values()
            .flat_map(|partition| partition.values())
            .cloned()
            .collect())
    }

    async fn get_bookings_by_email(&self, email: &str) -> Result<Vec<Booking>> {
        let partitions = self.partitions.read().await;
        Ok(partitions
            .get(email)
            .map(|partition| partition.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn get_bookings_by_category(&self, category: &str) -> Result<Vec<Booking>> {
        // No secondary index on category: every partition is examined.
        let partitions = self.partitions.read().await;
        Ok(partitions
            .values()
            .flat_map(|partition| partition.values())
            .filter(|booking| booking.category == category)
            .cloned()
            .collect())
    }

    async fn delete_booking(&self, email: &str, category: &str) -> Result<()> {
        let mut partitions = self.partitions.write().await;

        let removed = match partitions.get_mut(email) {
            Some(partition) => {
                let removed = partition.remove(category).is_some();
                if partition.is_empty() {
                    partitions.remove(email);
                }
                removed
            }
            None => false,
        };

        if !removed {
            return Err(RepositoryError::NotFound {
                entity_type: "Booking",
                id: BookingKey::new(email, category).to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn ana(category: &str) -> Booking {
        Booking::new("Ana", "Lee", "a@x.com", category)
    }

    fn categories(bookings: &[Booking]) -> HashSet<String> {
        bookings.iter().map(|b| b.category.clone()).collect()
    }

    #[tokio::test]
    async fn test_put_returns_stored_booking() {
        let repo = InMemoryRepository::new();
        let booking = ana("Workshop");

        let stored = repo.put_booking(&booking).await.unwrap();

        assert_eq!(stored, booking);
    }

    #[tokio::test]
    async fn test_put_same_key_overwrites() {
        let repo = InMemoryRepository::new();
        repo.put_booking(&ana("Workshop")).await.unwrap();
        repo.put_booking(&Booking::new("Anna", "Leigh", "a@x.com", "Workshop"))
            .await
            .unwrap();

        let bookings = repo.get_bookings_by_email("a@x.com").await.unwrap();

        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].name, "Anna");
        assert_eq!(bookings[0].surname, "Leigh");
    }

    #[tokio::test]
    async fn test_get_by_email_only_returns_partition() {
        let repo = InMemoryRepository::new();
        repo.put_booking(&ana("Workshop")).await.unwrap();
        repo.put_booking(&Booking::new("Bo", "Kim", "b@x.com", "Workshop"))
            .await
            .unwrap();
        repo.put_booking(&Booking::new("Cy", "Ng", "c@x.com", "Summit"))
            .await
            .unwrap();

        let bookings = repo.get_bookings_by_email("b@x.com").await.unwrap();

        assert_eq!(bookings.len(), 1);
        assert!(bookings.iter().all(|b| b.email == "b@x.com"));
    }

    #[tokio::test]
    async fn test_get_by_email_unknown_partition_is_empty() {
        let repo = InMemoryRepository::new();
        repo.put_booking(&ana("Workshop")).await.unwrap();

        let bookings = repo.get_bookings_by_email("nobody@x.com").await.unwrap();

        assert!(bookings.is_empty());
    }

    #[tokio::test]
    async fn test_get_by_category_spans_partitions() {
        let repo = InMemoryRepository::new();
        repo.put_booking(&ana("Workshop")).await.unwrap();
        repo.put_booking(&ana("Summit")).await.unwrap();
        repo.put_booking(&Booking::new("Bo", "Kim", "b@x.com", "Workshop"))
            .await
            .unwrap();

        let bookings = repo.get_bookings_by_category("Workshop").await.unwrap();
        let emails: HashSet<&str> = bookings.iter().map(|b| b.email.as_str()).collect();

        assert_eq!(bookings.len(), 2);
        assert!(bookings.iter().all(|b| b.category == "Workshop"));
        assert_eq!(emails, HashSet::from(["a@x.com", "b@x.com"]));
    }

    #[tokio::test]
    async fn test_get_all_is_stable_without_writes() {
        let repo = InMemoryRepository::new();
        repo.put_booking(&ana("Workshop")).await.unwrap();
        repo.put_booking(&ana("Summit")).await.unwrap();
        repo.put_booking(&Booking::new("Bo", "Kim", "b@x.com", "Gala"))
            .await
            .unwrap();

        let first: HashSet<Booking> = repo.get_all_bookings().await.unwrap().into_iter().collect();
        let second: HashSet<Booking> =
            repo.get_all_bookings().await.unwrap().into_iter().collect();

        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_get_all_empty() {
        let repo = InMemoryRepository::new();
        assert!(repo.get_all_bookings().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_never_inserted_is_not_found() {
        let repo = InMemoryRepository::new();

        let result = repo.delete_booking("a@x.com", "Workshop").await;

        assert_eq!(
            result,
            Err(RepositoryError::NotFound {
                entity_type: "Booking",
                id: "a@x.com/Workshop".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_delete_requires_both_components_to_match() {
        let repo = InMemoryRepository::new();
        repo.put_booking(&ana("Workshop")).await.unwrap();

        assert!(repo.delete_booking("a@x.com", "Summit").await.is_err());
        assert!(repo.delete_booking("b@x.com", "Workshop").await.is_err());
        assert_eq!(repo.get_all_bookings().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_then_partition_excludes_booking() {
        let repo = InMemoryRepository::new();
        repo.put_booking(&ana("Workshop")).await.unwrap();
        repo.put_booking(&ana("Summit")).await.unwrap();

        repo.delete_booking("a@x.com", "Workshop").await.unwrap();
        let bookings = repo.get_bookings_by_email("a@x.com").await.unwrap();

        assert_eq!(categories(&bookings), HashSet::from(["Summit".to_string()]));
    }

    #[tokio::test]
    async fn test_delete_twice_reports_not_found() {
        let repo = InMemoryRepository::new();
        repo.put_booking(&ana("Workshop")).await.unwrap();

        assert!(repo.delete_booking("a@x.com", "Workshop").await.is_ok());
        assert!(matches!(
            repo.delete_booking("a@x.com", "Workshop").await,
            Err(RepositoryError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_store_accepts_empty_keys() {
        let repo = InMemoryRepository::new();
        let booking = Booking::new("Ana", "Lee", "", "");

        repo.put_booking(&booking).await.unwrap();

        assert_eq!(repo.get_bookings_by_email("").await.unwrap(), vec![booking]);
        assert!(repo.delete_booking("", "").await.is_ok());
    }

    #[tokio::test]
    async fn test_concurrent_puts_distinct_keys() {
        let repo = InMemoryRepository::new();

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    let booking =
                        Booking::new("Ana", "Lee", format!("{}@x.com", i % 4), format!("cat-{i}"));
                    repo.put_booking(&booking).await
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(repo.get_all_bookings().await.unwrap().len(), 32);
        assert_eq!(repo.get_bookings_by_email("0@x.com").await.unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_concurrent_puts_same_key_leave_one_record() {
        let repo = InMemoryRepository::new();

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    let booking = Booking::new(format!("Name{i}"), "Lee", "a@x.com", "Workshop");
                    repo.put_booking(&booking).await
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let bookings = repo.get_bookings_by_email("a@x.com").await.unwrap();
        assert_eq!(bookings.len(), 1);
        assert!(bookings[0].name.starts_with("Name"));
        assert_eq!(bookings[0].surname, "Lee");
    }
}
