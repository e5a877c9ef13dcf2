//! Storage backend implementations.
//!
//! This module provides concrete implementations of the
//! [`BookingRepository`](booking_core::storage::BookingRepository) trait. The
//! implementation is selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): process-local storage, lost on restart
//! - `dynamodb`: AWS DynamoDB storage backend using `aws-sdk-dynamodb`
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time.
//!
//! # Examples
//!
//! Build with in-memory storage (default):
//! ```bash
//! cargo build -p booking
//! ```
//!
//! Build with DynamoDB:
//! ```bash
//! cargo build -p booking --no-default-features --features dynamodb
//! ```

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "inmemory", feature = "dynamodb"))]
compile_error!(
    "Features 'inmemory' and 'dynamodb' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!(
    "No storage backend selected. Enable 'inmemory' or 'dynamodb' feature. \
    Example: cargo build -p booking --features dynamodb"
);

#[cfg(any(feature = "inmemory", test))]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(any(feature = "inmemory", test))]
pub use inmemory::InMemoryRepository;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;
