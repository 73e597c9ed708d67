//! JSON-file-backed store: the wire format, persisted to disk.
//!
//! The file holds a JSON array of events in the same camelCase token shape
//! the REST contract exchanges. The whole file is rewritten after every
//! mutation; there is no partial update, which keeps the on-disk state a
//! plain snapshot of the collection.

use std::fs;
use std::path::{Path, PathBuf};

use calgrid_core::{validate, Event, EventDraft, EventId};
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::memory::MemoryStore;
use crate::store::EventStore;

/// An event store persisted as a JSON array file.
///
/// Wraps a [`MemoryStore`] for the collection semantics (validation gate,
/// id assignment, insertion order) and flushes it to disk after each
/// mutation. A missing file reads as an empty collection; I/O and parse
/// failures surface as [`StoreError::Transport`], as does a stored event
/// that no longer passes the validation gate (the file may have been
/// edited by hand).
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonFileStore {
    /// Open the store at `path`, loading any existing events.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let events = load_events(&path)?;
        debug!(path = %path.display(), count = events.len(), "opened event file");
        Ok(Self {
            path,
            inner: MemoryStore::with_events(events),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(self.inner.events())
            .map_err(|e| StoreError::transport(format!("serialize events: {e}")))?;
        fs::write(&self.path, json)
            .map_err(|e| StoreError::transport(format!("write {}: {e}", self.path.display())))
    }
}

fn load_events(path: &Path) -> Result<Vec<Event>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let contents = fs::read_to_string(path)
        .map_err(|e| StoreError::transport(format!("read {}: {e}", path.display())))?;
    let events: Vec<Event> = serde_json::from_str(&contents)
        .map_err(|e| StoreError::transport(format!("parse {}: {e}", path.display())))?;
    // The file may have been edited by hand; every event it holds must
    // still pass the same gate that admitted it, or the whole load fails.
    for event in &events {
        validate(&event.to_draft()).map_err(|e| {
            StoreError::transport(format!(
                "invalid event {} in {}: {e}",
                event.id,
                path.display()
            ))
        })?;
    }
    Ok(events)
}

impl EventStore for JsonFileStore {
    fn list_events(&self) -> Result<Vec<Event>> {
        self.inner.list_events()
    }

    fn create_event(&mut self, draft: &EventDraft) -> Result<Event> {
        let event = self.inner.create_event(draft)?;
        self.persist()?;
        Ok(event)
    }

    fn update_event(&mut self, id: &EventId, draft: &EventDraft) -> Result<Event> {
        let event = self.inner.update_event(id, draft)?;
        self.persist()?;
        Ok(event)
    }

    fn delete_event(&mut self, id: &EventId) -> Result<()> {
        self.inner.delete_event(id)?;
        self.persist()
    }
}
