//! Event storage.
//!
//! [`EventStore`] is the seam request handlers talk to; the in-memory
//! implementation is the only backend today.

use thiserror::Error;

use crate::models::{CreateEventRequest, Event};

pub mod memory;

pub use memory::InMemoryEventStore;

/// Failures detected at commit time, independent of upstream validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Invalid start date format")]
    InvalidStartDate,

    #[error("Invalid end date format")]
    InvalidEndDate,

    #[error("End date must be after start date")]
    InvalidDateRange,
}

pub trait EventStore: Send + Sync {
    /// Parses and checks the request, then stores and returns the new event.
    fn create_event(&self, request: &CreateEventRequest) -> Result<Event, StoreError>;

    /// All events in insertion order.
    fn list_events(&self) -> Vec<Event>;
}
