//! # calgrid-core
//!
//! Pure calendar grid and event-layout engine.
//!
//! Given a reference date and a snapshot of the event collection, this crate
//! computes which calendar cells a month or week view contains, which day each
//! cell represents (including spillover from adjacent months), which events
//! land in which cell, and in what order they render within a cell. It also
//! owns the validation gate that admits events into the collection.
//!
//! Everything here is deterministic and side-effect free: no clock reads, no
//! I/O, no internal state between calls. The caller owns the mutable view
//! state (reference date, "today", the event snapshot) and passes it in on
//! every render.
//!
//! ## Quick start
//!
//! ```rust
//! use calgrid_core::{render_month, CalendarDate, GridConfig, Membership};
//!
//! let reference = "2024-02-01".parse::<CalendarDate>().unwrap();
//! let today = "2024-02-14".parse::<CalendarDate>().unwrap();
//! let view = render_month(reference, today, &[], &GridConfig::default());
//!
//! // Feb 2024 starts on a Thursday and has 29 days: 4 + 29 = 33 cells,
//! // rounded up to 5 rows of 7.
//! assert_eq!(view.cells.len(), 35);
//! let current: Vec<u32> = view
//!     .cells
//!     .iter()
//!     .filter(|c| c.membership == Membership::Current)
//!     .map(|c| c.date.day())
//!     .collect();
//! assert_eq!(current, (1..=29).collect::<Vec<_>>());
//! ```
//!
//! ## Modules
//!
//! - [`datemath`] -- leap years, month lengths, weekday offsets, clamped month arithmetic
//! - [`grid`] -- month/week cell sequences with previous/current/next membership
//! - [`index`] -- per-date event buckets with deterministic intra-day ordering
//! - [`validate`] -- the first-failure-wins validation gate for event drafts
//! - [`view`] -- joins grid cells with index buckets into renderable views
//! - [`types`] -- the event model and its validated value types
//! - [`error`] -- validation error kinds

pub mod datemath;
pub mod error;
pub mod grid;
pub mod index;
pub mod types;
pub mod validate;
pub mod view;

pub use error::ValidationError;
pub use grid::{month_grid, week_grid, CalendarCell, GridConfig, Membership};
pub use index::EventIndex;
pub use types::{
    CalendarDate, Color, Event, EventDraft, EventId, TokenError, ValidatedEvent, WallClockTime,
};
pub use validate::validate;
pub use view::{render_month, render_week, MonthView, WeekView};
