//! Tests for the event index: exact-date grouping and stable intra-day
//! ordering.

use calgrid_core::{Color, Event, EventId, EventIndex, WallClockTime};

fn event(id: &str, title: &str, date: &str, start: &str, end: &str) -> Event {
    Event {
        id: EventId::new(id),
        title: title.to_string(),
        date: date.parse().expect("valid date token"),
        start_time: start.parse().expect("valid time token"),
        end_time: end.parse().expect("valid time token"),
        description: None,
        color: Color::parse("#3B82F6").expect("valid color"),
    }
}

#[test]
fn empty_collection_builds_an_empty_index() {
    let index = EventIndex::build(&[]);
    assert!(index.is_empty());
    assert_eq!(index.len(), 0);
    assert_eq!(index.bucket("2025-11-30".parse().unwrap()), &[]);
}

#[test]
fn events_group_by_exact_date() {
    let events = vec![
        event("1", "Standup", "2025-11-30", "09:00", "09:15"),
        event("2", "Review", "2025-12-01", "14:00", "15:00"),
        event("3", "Lunch", "2025-11-30", "12:00", "13:00"),
    ];
    let index = EventIndex::build(&events);

    assert_eq!(index.len(), 3);
    assert_eq!(index.bucket("2025-11-30".parse().unwrap()).len(), 2);
    assert_eq!(index.bucket("2025-12-01".parse().unwrap()).len(), 1);
    assert_eq!(index.bucket("2025-12-02".parse().unwrap()).len(), 0);
}

#[test]
fn buckets_sort_by_start_time() {
    let events = vec![
        event("1", "Afternoon", "2025-11-30", "15:00", "16:00"),
        event("2", "Morning", "2025-11-30", "09:00", "09:30"),
        event("3", "Noon", "2025-11-30", "12:00", "12:30"),
    ];
    let index = EventIndex::build(&events);

    let titles: Vec<&str> = index
        .bucket("2025-11-30".parse().unwrap())
        .iter()
        .map(|e| e.title.as_str())
        .collect();
    assert_eq!(titles, ["Morning", "Noon", "Afternoon"]);
}

#[test]
fn equal_start_times_keep_input_order() {
    // [10:00, 09:00 (first seen), 09:00 (second seen)] must come out as
    // [09:00 first, 09:00 second, 10:00].
    let events = vec![
        event("1", "Late", "2025-11-30", "10:00", "11:00"),
        event("2", "TieFirst", "2025-11-30", "09:00", "10:00"),
        event("3", "TieSecond", "2025-11-30", "09:00", "09:30"),
    ];
    let index = EventIndex::build(&events);

    let titles: Vec<&str> = index
        .bucket("2025-11-30".parse().unwrap())
        .iter()
        .map(|e| e.title.as_str())
        .collect();
    assert_eq!(titles, ["TieFirst", "TieSecond", "Late"]);
}

#[test]
fn rebuild_is_deterministic() {
    let events = vec![
        event("1", "A", "2025-11-30", "09:00", "10:00"),
        event("2", "B", "2025-11-30", "09:00", "10:00"),
        event("3", "C", "2025-12-01", "08:00", "09:00"),
    ];
    let first = EventIndex::build(&events);
    let second = EventIndex::build(&events);

    let date = "2025-11-30".parse().unwrap();
    assert_eq!(first.bucket(date), second.bucket(date));
}

#[test]
fn dates_iterate_in_ascending_order() {
    let events = vec![
        event("1", "C", "2025-12-25", "09:00", "10:00"),
        event("2", "A", "2025-01-01", "09:00", "10:00"),
        event("3", "B", "2025-06-15", "09:00", "10:00"),
    ];
    let index = EventIndex::build(&events);

    let dates: Vec<String> = index.dates().map(|d| d.to_string()).collect();
    assert_eq!(dates, ["2025-01-01", "2025-06-15", "2025-12-25"]);
}

#[test]
fn short_time_windows_stay_in_their_own_day() {
    // An event's time window never bleeds into an adjacent date bucket;
    // grouping is an exact date match.
    let events = vec![event("1", "LateNight", "2025-11-30", "23:00", "23:59")];
    let index = EventIndex::build(&events);

    assert_eq!(index.bucket("2025-11-30".parse().unwrap()).len(), 1);
    assert_eq!(index.bucket("2025-12-01".parse().unwrap()).len(), 0);
}
