//! Month and week grids: the ordered cell sequences a calendar view displays.
//!
//! Grid building is total over valid calendar dates; there are no error
//! conditions. Cells come out row-major, 7 per row, starting from the
//! configured first day of the week, with leading/trailing cells borrowed
//! from the adjacent months so every row is full.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::datemath::{add_days, days_in_month, first_weekday_offset, week_start};
use crate::types::{CalendarDate, Event};

/// A cell's relationship to the viewed month.
///
/// Week views have no notion of membership; every week cell is `Current`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Membership {
    Previous,
    Current,
    Next,
}

/// View configuration owned by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    /// Which weekday starts a row. Sunday in the reference behavior.
    pub first_day_of_week: Weekday,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            first_day_of_week: Weekday::Sun,
        }
    }
}

/// One day-box in a rendered grid. Derived on every render, never persisted.
///
/// `events` is empty as produced by the grid builders; the view join in
/// [`crate::view`] fills it from the event index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarCell {
    pub date: CalendarDate,
    pub membership: Membership,
    pub is_today: bool,
    pub events: Vec<Event>,
}

impl CalendarCell {
    fn new(date: CalendarDate, membership: Membership, today: CalendarDate) -> Self {
        Self {
            date,
            membership,
            is_today: date == today,
            events: Vec::new(),
        }
    }
}

/// Build the month grid containing `reference`.
///
/// Cell count is `first_weekday_offset + days_in_month`, rounded up to a
/// multiple of 7, which yields 4 to 6 rows (no month spans more than 6 weeks
/// under any first-day-of-week convention). Leading cells carry
/// `Membership::Previous` dates, trailing cells `Membership::Next`, with
/// month/year rollover handled by the date arithmetic (December's trailing
/// cells land in January of the following year).
///
/// `today` is supplied by the caller so rendering stays deterministic; a
/// cell's `is_today` is set iff its date equals it.
pub fn month_grid(
    reference: CalendarDate,
    today: CalendarDate,
    config: &GridConfig,
) -> Vec<CalendarCell> {
    let first_weekday = first_weekday_offset(reference, config.first_day_of_week);
    let last_date = days_in_month(reference.year(), reference.month());

    let total = first_weekday + last_date;
    let cell_count = total.div_ceil(7) * 7;

    // Day 1 of the viewed month, then walk outward in both directions.
    let first_of_month = add_days(reference, 1 - i64::from(reference.day()));

    (0..cell_count)
        .map(|i| {
            let date = add_days(first_of_month, i64::from(i) - i64::from(first_weekday));
            let membership = if i < first_weekday {
                Membership::Previous
            } else if i - first_weekday < last_date {
                Membership::Current
            } else {
                Membership::Next
            };
            CalendarCell::new(date, membership, today)
        })
        .collect()
}

/// Build the 7-cell week grid containing `reference`, starting at the
/// configured first day of the week. Every cell is `Membership::Current`.
pub fn week_grid(
    reference: CalendarDate,
    today: CalendarDate,
    config: &GridConfig,
) -> Vec<CalendarCell> {
    let start = week_start(reference, config.first_day_of_week);
    (0..7i64)
        .map(|i| CalendarCell::new(add_days(start, i), Membership::Current, today))
        .collect()
}
