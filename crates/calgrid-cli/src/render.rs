//! Plain-text rendering of month and week views for the terminal.
//!
//! Month cells are 5 characters wide: the day number, brackets around
//! today, and a trailing `*` when the day has events. Spillover days from
//! adjacent months render like any other cell; their events still show.

use calgrid_core::{Membership, MonthView, WeekView};
use chrono::Weekday;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// `MonthView.month` is always 1..=12.
fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[month as usize - 1]
}

fn day_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

fn day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Render a month view: title line, weekday header, the grid, then an
/// agenda of the viewed month's events in bucket order.
pub fn month_to_string(view: &MonthView) -> String {
    let mut out = format!("{} {}\n", month_name(view.month), view.year);

    // Weekday header follows the configured first day of the week, which
    // is whatever weekday the first cell landed on.
    let mut weekday = view.cells[0].date.weekday();
    for _ in 0..7 {
        out.push_str(&format!("  {} ", day_abbrev(weekday)));
        weekday = weekday.succ();
    }
    out.push('\n');

    for row in view.cells.chunks(7) {
        for cell in row {
            let day = format!("{:>2}", cell.date.day());
            let boxed = if cell.is_today {
                format!("[{day}]")
            } else {
                format!(" {day} ")
            };
            let marker = if cell.events.is_empty() { ' ' } else { '*' };
            out.push_str(&format!("{boxed}{marker}"));
        }
        out.push('\n');
    }

    let mut agenda = String::new();
    for cell in &view.cells {
        if cell.membership != Membership::Current {
            continue;
        }
        for event in &cell.events {
            agenda.push_str(&format!(
                "  {}  {}-{}  {}\n",
                cell.date, event.start_time, event.end_time, event.title
            ));
        }
    }
    if !agenda.is_empty() {
        out.push('\n');
        out.push_str(&agenda);
    }

    out
}

/// Render a week view: one line per day with its events stacked beneath in
/// index order.
pub fn week_to_string(view: &WeekView) -> String {
    let mut out = format!("Week of {}\n", view.start);

    for cell in &view.cells {
        let today_mark = if cell.is_today { "  (today)" } else { "" };
        out.push_str(&format!(
            "{} {}{}\n",
            day_name(cell.date.weekday()),
            cell.date,
            today_mark
        ));
        for event in &cell.events {
            out.push_str(&format!(
                "    {}-{}  {}\n",
                event.start_time, event.end_time, event.title
            ));
        }
    }

    out
}
