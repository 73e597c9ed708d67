//! In-memory reference implementation of the store contract.

use calgrid_core::{validate, Event, EventDraft, EventId};
use tracing::{debug, info};

use crate::error::{Result, StoreError};
use crate::store::EventStore;

/// An in-memory event collection.
///
/// Events are held in insertion order (the index tie-break for equal start
/// times depends on it) and ids are assigned from a monotonic counter, so an
/// id is never reused within one store even after deletes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    events: Vec<Event>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with existing events (e.g. loaded from disk), resuming
    /// id assignment past the highest id seen.
    pub fn with_events(events: Vec<Event>) -> Self {
        let next_id = events
            .iter()
            .filter_map(|e| e.id.as_str().strip_prefix("evt-"))
            .filter_map(|n| n.parse::<u64>().ok())
            .max()
            .map(|n| n + 1)
            .unwrap_or_default();
        Self { events, next_id }
    }

    /// The collection snapshot, in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    fn assign_id(&mut self) -> EventId {
        let id = EventId::new(format!("evt-{}", self.next_id));
        self.next_id += 1;
        id
    }

    fn position(&self, id: &EventId) -> Option<usize> {
        self.events.iter().position(|e| &e.id == id)
    }
}

impl EventStore for MemoryStore {
    fn list_events(&self) -> Result<Vec<Event>> {
        debug!(count = self.events.len(), "listing events");
        Ok(self.events.clone())
    }

    fn create_event(&mut self, draft: &EventDraft) -> Result<Event> {
        let validated = validate(draft)?;
        let event = validated.with_id(self.assign_id());
        info!(id = %event.id, title = %event.title, "created event");
        self.events.push(event.clone());
        Ok(event)
    }

    fn update_event(&mut self, id: &EventId, draft: &EventDraft) -> Result<Event> {
        // Validate before looking anything up so a bad draft never causes
        // a partial write.
        let validated = validate(draft)?;
        let position = self.position(id).ok_or_else(|| StoreError::NotFound {
            id: id.clone(),
        })?;
        let event = validated.with_id(id.clone());
        // Replace in place: the event keeps its slot, so the insertion-order
        // tie-break is unaffected by edits.
        self.events[position] = event.clone();
        info!(id = %event.id, title = %event.title, "updated event");
        Ok(event)
    }

    fn delete_event(&mut self, id: &EventId) -> Result<()> {
        let position = self.position(id).ok_or_else(|| StoreError::NotFound {
            id: id.clone(),
        })?;
        self.events.remove(position);
        info!(id = %id, "deleted event");
        Ok(())
    }
}
