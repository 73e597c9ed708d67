//! The event model and its validated value types.
//!
//! Dates, times, and colors cross the wire as canonical string tokens
//! (`YYYY-MM-DD`, `HH:MM`, `#RRGGBB`) and are parsed into opaque value types
//! at the validation boundary. Past that boundary the rest of the engine
//! never touches raw strings.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a canonical token failed to parse.
///
/// Distinguishes a malformed string from a well-formed one that names an
/// impossible value, because the validator reports those differently for
/// dates (`InvalidFormat` vs `InvalidValue`).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// The string does not match the token grammar.
    #[error("malformed token")]
    Shape,
    /// The string matches the grammar but denotes an impossible value.
    #[error("impossible value")]
    Value,
}

// ---------------------------------------------------------------------------
// CalendarDate
// ---------------------------------------------------------------------------

/// A local calendar day with no time-of-day or time-zone component.
///
/// Canonical token: `YYYY-MM-DD`. This is a "local day" label, not an
/// instant; two events on `2025-11-30` share a bucket regardless of where
/// the process runs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from components. Returns `None` for impossible days
    /// (month outside 1..=12, day past the end of the month).
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse the canonical `YYYY-MM-DD` token.
    ///
    /// The shape check is strict: exactly four digits, a dash, two digits,
    /// a dash, two digits. No other separators, no missing zero-padding.
    pub fn parse(token: &str) -> Result<Self, TokenError> {
        let bytes = token.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(TokenError::Shape);
        }
        let digits_ok = bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !digits_ok {
            return Err(TokenError::Shape);
        }
        // Slices are all-ASCII-digit at this point, so parsing cannot fail
        // except by being out of range for the component type.
        let year: i32 = token[0..4].parse().map_err(|_| TokenError::Shape)?;
        let month: u32 = token[5..7].parse().map_err(|_| TokenError::Shape)?;
        let day: u32 = token[8..10].parse().map_err(|_| TokenError::Shape)?;
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(TokenError::Value)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// 1-based month number.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// 1-based day of month.
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Wrap an already-valid `chrono` date.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The underlying `chrono` date, for callers that need to interoperate.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDate {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = TokenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> String {
        date.to_string()
    }
}

// ---------------------------------------------------------------------------
// WallClockTime
// ---------------------------------------------------------------------------

/// A wall-clock time of day with no date or time zone attached.
///
/// Canonical token: `HH:MM`, 24-hour, zero-padded. Ordering follows
/// minutes-since-midnight, which is also how the event time range
/// constraint is checked.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct WallClockTime {
    hour: u8,
    minute: u8,
}

impl WallClockTime {
    /// Build a time from components. Returns `None` if out of range.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour <= 23 && minute <= 59 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    /// Parse the canonical `HH:MM` token (zero-padded, 24-hour).
    pub fn parse(token: &str) -> Result<Self, TokenError> {
        let bytes = token.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(TokenError::Shape);
        }
        if !(bytes[0].is_ascii_digit()
            && bytes[1].is_ascii_digit()
            && bytes[3].is_ascii_digit()
            && bytes[4].is_ascii_digit())
        {
            return Err(TokenError::Shape);
        }
        let hour = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
        let minute = (bytes[3] - b'0') * 10 + (bytes[4] - b'0');
        Self::new(hour, minute).ok_or(TokenError::Value)
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes since midnight, the comparison domain for time ranges and
    /// intra-day event ordering.
    pub fn minutes_since_midnight(&self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }
}

impl fmt::Display for WallClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for WallClockTime {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for WallClockTime {
    type Error = TokenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<WallClockTime> for String {
    fn from(time: WallClockTime) -> String {
        time.to_string()
    }
}

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// A display tag in canonical `#RRGGBB` form.
///
/// Input is case-insensitive; the stored form is uppercase hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Parse a `#RRGGBB` token, normalizing hex digits to uppercase.
    pub fn parse(token: &str) -> Result<Self, TokenError> {
        let bytes = token.as_bytes();
        if bytes.len() != 7 || bytes[0] != b'#' {
            return Err(TokenError::Shape);
        }
        if !bytes[1..].iter().all(|b| b.is_ascii_hexdigit()) {
            return Err(TokenError::Shape);
        }
        Ok(Self(token.to_ascii_uppercase()))
    }

    /// The canonical (uppercase) token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Color {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = TokenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> String {
        color.0
    }
}

// ---------------------------------------------------------------------------
// Event model
// ---------------------------------------------------------------------------

/// Opaque event identifier, assigned by the persistence layer on creation
/// and immutable thereafter.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A candidate event as it arrives over the wire: untyped string tokens,
/// no id. This is what `POST /events` and `PUT /events/{id}` bodies carry.
///
/// A draft becomes an [`Event`] only by passing through
/// [`validate`](crate::validate::validate) and having the store assign an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "EventDraft::default_color")]
    pub color: String,
}

impl EventDraft {
    /// The default display color when a draft omits one (the UI's blue).
    fn default_color() -> String {
        "#3B82F6".to_string()
    }
}

/// A validated, normalized event without an id: the output of the
/// validation gate. Title is trimmed, color canonicalized, and the
/// date/time fields carry their typed forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedEvent {
    pub title: String,
    pub date: CalendarDate,
    pub start_time: WallClockTime,
    pub end_time: WallClockTime,
    pub description: Option<String>,
    pub color: Color,
}

impl ValidatedEvent {
    /// Pair with a storage-assigned id to form a full [`Event`].
    pub fn with_id(self, id: EventId) -> Event {
        Event {
            id,
            title: self.title,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            description: self.description,
            color: self.color,
        }
    }

    /// Project back into wire tokens, e.g. to re-validate or resubmit.
    pub fn to_draft(&self) -> EventDraft {
        EventDraft {
            title: self.title.clone(),
            date: self.date.to_string(),
            start_time: self.start_time.to_string(),
            end_time: self.end_time.to_string(),
            description: self.description.clone(),
            color: self.color.to_string(),
        }
    }
}

/// A scheduled item admitted into the collection.
///
/// Invariants (enforced by the validation gate, the sole entry point):
/// `id` unique across the collection, `start_time < end_time` in
/// minutes-since-midnight (no cross-midnight events), title and
/// description within their length limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub date: CalendarDate,
    pub start_time: WallClockTime,
    pub end_time: WallClockTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub color: Color,
}

impl Event {
    /// Project back into wire tokens (without the id), e.g. as the starting
    /// point for an edit.
    pub fn to_draft(&self) -> EventDraft {
        EventDraft {
            title: self.title.clone(),
            date: self.date.to_string(),
            start_time: self.start_time.to_string(),
            end_time: self.end_time.to_string(),
            description: self.description.clone(),
            color: self.color.to_string(),
        }
    }
}
