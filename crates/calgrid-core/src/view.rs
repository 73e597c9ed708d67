//! The view join: grid cells plus index buckets, ready for display.
//!
//! This is the contract a display layer consumes. Both renderers are pure
//! functions of the reference date, "today", and an immutable snapshot of
//! the event collection; calling them twice with the same inputs yields
//! the same view.

use serde::{Deserialize, Serialize};

use crate::grid::{month_grid, week_grid, CalendarCell, GridConfig};
use crate::index::EventIndex;
use crate::types::{CalendarDate, Event};

/// A month view: row-major cells with their events attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthView {
    pub year: i32,
    /// 1-based month number.
    pub month: u32,
    pub cells: Vec<CalendarCell>,
}

/// A week view: 7 cells starting at the configured first day of the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekView {
    /// The date of the first cell.
    pub start: CalendarDate,
    pub cells: Vec<CalendarCell>,
}

fn attach_events(cells: &mut [CalendarCell], index: &EventIndex) {
    for cell in cells {
        cell.events = index.bucket(cell.date).to_vec();
    }
}

/// Render the month view containing `reference` from an event snapshot.
pub fn render_month(
    reference: CalendarDate,
    today: CalendarDate,
    events: &[Event],
    config: &GridConfig,
) -> MonthView {
    let index = EventIndex::build(events);
    let mut cells = month_grid(reference, today, config);
    attach_events(&mut cells, &index);
    MonthView {
        year: reference.year(),
        month: reference.month(),
        cells,
    }
}

/// Render the 7-day week view containing `reference` from an event snapshot.
pub fn render_week(
    reference: CalendarDate,
    today: CalendarDate,
    events: &[Event],
    config: &GridConfig,
) -> WeekView {
    let index = EventIndex::build(events);
    let mut cells = week_grid(reference, today, config);
    attach_events(&mut cells, &index);
    let start = cells[0].date;
    WeekView { start, cells }
}
