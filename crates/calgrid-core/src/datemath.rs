//! Pure calendar arithmetic: leap years, month lengths, weekday offsets,
//! and month/day addition.
//!
//! Month addition clamps the day-of-month when the target month is shorter
//! (Jan 31 + 1 month = Feb 28, or Feb 29 in a leap year). The clamp policy
//! was chosen over native date-rollover overflow for predictability; it is
//! what `chrono`'s `Months` arithmetic does natively.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

use crate::types::CalendarDate;

/// Gregorian leap-year rule: divisible by 4 and (not by 100, or by 400).
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given month (1-based), leap-year aware.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    debug_assert!((1..=12).contains(&month), "month must be 1..=12");
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// How many cells into a week row the given date falls, with 0 meaning the
/// configured first day of the week.
pub fn weekday_offset(date: CalendarDate, first_day_of_week: Weekday) -> u32 {
    let from_sunday = date.weekday().num_days_from_sunday();
    let anchor = first_day_of_week.num_days_from_sunday();
    (from_sunday + 7 - anchor) % 7
}

/// Weekday index of day 1 of the given month, with 0 meaning the configured
/// first day of the week (Sunday in the default configuration).
pub fn first_weekday_offset(date_in_month: CalendarDate, first_day_of_week: Weekday) -> u32 {
    let first = date_in_month
        .as_naive()
        .with_day(1)
        .expect("day 1 exists in every month");
    weekday_offset(CalendarDate::from_naive(first), first_day_of_week)
}

/// The first day of the 7-day window containing `date`, under the given
/// first-day-of-week convention.
pub fn week_start(date: CalendarDate, first_day_of_week: Weekday) -> CalendarDate {
    let offset = weekday_offset(date, first_day_of_week);
    add_days(date, -i64::from(offset))
}

/// Calendar-correct day addition. Saturates at the supported date range
/// rather than wrapping.
pub fn add_days(date: CalendarDate, delta: i64) -> CalendarDate {
    let shifted = if delta >= 0 {
        date.as_naive().checked_add_days(Days::new(delta as u64))
    } else {
        date.as_naive().checked_sub_days(Days::new(delta.unsigned_abs()))
    };
    let fallback = if delta >= 0 {
        NaiveDate::MAX
    } else {
        NaiveDate::MIN
    };
    CalendarDate::from_naive(shifted.unwrap_or(fallback))
}

/// Calendar-correct month addition, clamping the day-of-month when the
/// target month is shorter. Saturates at the supported date range.
pub fn add_months(date: CalendarDate, delta: i32) -> CalendarDate {
    let shifted = if delta >= 0 {
        date.as_naive().checked_add_months(Months::new(delta as u32))
    } else {
        date.as_naive()
            .checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    let fallback = if delta >= 0 {
        NaiveDate::MAX
    } else {
        NaiveDate::MIN
    };
    CalendarDate::from_naive(shifted.unwrap_or(fallback))
}
