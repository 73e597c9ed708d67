//! The store contract the grid engine's callers depend on.

use calgrid_core::{Event, EventDraft, EventId};

use crate::error::Result;

/// CRUD access to the event collection.
///
/// This is the seam between the pure engine and persistence. Implementations
/// must validate drafts through the core gate before storing anything, assign
/// ids on create, use full-replace semantics on update, and report unknown
/// ids as `NotFound` (including repeated deletes of an already-absent id).
///
/// `list_events` returns the collection in insertion order; the event
/// index's tie-break for equal start times depends on that order being
/// stable across calls.
pub trait EventStore {
    /// The full current collection, in insertion order.
    fn list_events(&self) -> Result<Vec<Event>>;

    /// Validate a draft, assign an id, and admit it into the collection.
    fn create_event(&mut self, draft: &EventDraft) -> Result<Event>;

    /// Replace the event with the given id. The id is immutable; everything
    /// else comes from the draft.
    fn update_event(&mut self, id: &EventId, draft: &EventDraft) -> Result<Event>;

    /// Remove the event with the given id.
    fn delete_event(&mut self, id: &EventId) -> Result<()>;
}
