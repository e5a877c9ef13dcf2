//! booking_core - domain types and storage contracts for the booking directory.
//!
//! This crate is the functional core: plain data types, validation, error
//! kinds and the repository trait. It performs no I/O.

pub mod booking;
pub mod storage;
