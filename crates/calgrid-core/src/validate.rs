//! The validation gate for event drafts.
//!
//! Runs a fixed sequence of checks and stops at the first failure, so a
//! draft with several problems reports the one a UI should surface first.
//! All checks are pure; the gate either returns the normalized event
//! (trimmed title, canonical-case color, typed date/time fields) or the
//! first failing error.

use crate::error::{Result, ValidationError};
use crate::types::{CalendarDate, Color, EventDraft, TokenError, ValidatedEvent, WallClockTime};

/// Maximum title length in characters, after trimming.
pub const MAX_TITLE_LEN: usize = 100;

/// Maximum description length in characters.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Validate a candidate event, producing its normalized, typed form.
///
/// Checks run in a fixed order, each failing fast:
///
/// 1. `title` non-empty after trimming
/// 2. `title` at most [`MAX_TITLE_LEN`] characters
/// 3. `date` matches the `YYYY-MM-DD` token shape
/// 4. `date` denotes a real calendar day
/// 5. `startTime` / `endTime` match `HH:MM` (00-23 hours, 00-59 minutes)
/// 6. `endTime` strictly after `startTime` in minutes-since-midnight
/// 7. `description`, if present, at most [`MAX_DESCRIPTION_LEN`] characters
/// 8. `color` matches `#RRGGBB` (hex, case-insensitive)
///
/// Validation is idempotent: the token projection of an accepted event
/// re-validates to the same result.
pub fn validate(draft: &EventDraft) -> Result<ValidatedEvent> {
    let title = draft.title.trim();
    if title.is_empty() {
        return Err(ValidationError::RequiredFieldMissing { field: "title" });
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError::FieldTooLong {
            field: "title",
            max: MAX_TITLE_LEN,
        });
    }

    let date = match CalendarDate::parse(&draft.date) {
        Ok(date) => date,
        Err(TokenError::Shape) => {
            return Err(ValidationError::InvalidFormat { field: "date" });
        }
        Err(TokenError::Value) => {
            return Err(ValidationError::InvalidValue { field: "date" });
        }
    };

    // A time token that parses but is out of range (e.g. "25:00") is still
    // a format failure here; the observed behavior validates times with a
    // single pattern check.
    let start_time = WallClockTime::parse(&draft.start_time)
        .map_err(|_| ValidationError::InvalidFormat { field: "startTime" })?;
    let end_time = WallClockTime::parse(&draft.end_time)
        .map_err(|_| ValidationError::InvalidFormat { field: "endTime" })?;

    if end_time.minutes_since_midnight() <= start_time.minutes_since_midnight() {
        return Err(ValidationError::InvalidRange {
            message: "endTime must be after startTime".to_string(),
        });
    }

    if let Some(description) = &draft.description {
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(ValidationError::FieldTooLong {
                field: "description",
                max: MAX_DESCRIPTION_LEN,
            });
        }
    }

    let color = Color::parse(&draft.color)
        .map_err(|_| ValidationError::InvalidFormat { field: "color" })?;

    Ok(ValidatedEvent {
        title: title.to_string(),
        date,
        start_time,
        end_time,
        description: draft.description.clone(),
        color,
    })
}
