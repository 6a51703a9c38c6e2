use parking_lot::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use super::{EventStore, StoreError};
use crate::models::{CreateEventRequest, Event};
use crate::utils::datetime::parse_datetime;

/// Ordered, append-only event list held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    events: RwLock<Vec<Event>>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn build_event(request: &CreateEventRequest) -> Result<Event, StoreError> {
        let start_date =
            parse_datetime(&request.start_date).ok_or(StoreError::InvalidStartDate)?;
        let end_date = parse_datetime(&request.end_date).ok_or(StoreError::InvalidEndDate)?;

        if start_date >= end_date {
            return Err(StoreError::InvalidDateRange);
        }

        Ok(Event {
            id: Uuid::new_v4(),
            name: request.name.clone(),
            description: request.description.clone(),
            start_date,
            end_date,
            timezone: request.timezone.clone(),
        })
    }
}

impl EventStore for InMemoryEventStore {
    fn create_event(&self, request: &CreateEventRequest) -> Result<Event, StoreError> {
        let mut events = self.events.write();

        let event = Self::build_event(request).map_err(|e| {
            warn!(error = %e, name = %request.name, "Rejected event at store");
            e
        })?;

        events.push(event.clone());
        info!(event_id = %event.id, name = %event.name, total = events.len(), "Event created");

        Ok(event)
    }

    fn list_events(&self) -> Vec<Event> {
        self.events.read().clone()
    }
}
