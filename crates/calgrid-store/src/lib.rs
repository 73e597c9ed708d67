//! # calgrid-store
//!
//! The persistence boundary for the calgrid engine.
//!
//! The grid engine itself never performs I/O; it renders whatever snapshot it
//! is given. This crate owns the other side of that seam: the [`EventStore`]
//! contract (list/create/update/delete with full-replace update semantics and
//! `NotFound` for unknown ids), an in-memory reference implementation, a
//! JSON-file-backed implementation, and the bounded retry policy for
//! transient transport failures.
//!
//! Every mutation passes through the core validation gate before it touches
//! stored data, so any event reachable through a store upholds the data
//! model invariants.
//!
//! ## Modules
//!
//! - [`store`] -- the `EventStore` trait
//! - [`memory`] -- in-memory reference store, also the id assigner
//! - [`json`] -- JSON-file-backed store (the wire format, persisted)
//! - [`retry`] -- bounded retry with backoff for transient failures
//! - [`error`] -- the store error taxonomy

pub mod error;
pub mod json;
pub mod memory;
pub mod retry;
pub mod store;

pub use error::StoreError;
pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use retry::{retry_transient, RetryPolicy};
pub use store::EventStore;
