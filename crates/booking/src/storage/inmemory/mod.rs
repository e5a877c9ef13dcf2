//! In-memory storage backend.
//!
//! Bookings live in a two-level map wrapped in `Arc<RwLock<_>>`: the outer
//! map is the partition index keyed by email, the inner map orders a
//! partition's bookings by category. Data is not persisted.
//!
//! # Example
//!
//! ```rust,ignore
//! use booking::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! repo.put_booking(&booking).await?;
//! ```

mod repository;

pub use repository::InMemoryRepository;
