//! Tests for the JSON-file-backed store: persistence across reopen, wire
//! format on disk, and transport error classification.

use std::path::PathBuf;

use calgrid_core::EventDraft;
use calgrid_store::{EventStore, JsonFileStore, StoreError};

fn temp_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("calgrid-test-{name}.json"));
    // Clean up from any prior run.
    let _ = std::fs::remove_file(&path);
    path
}

fn standup_draft() -> EventDraft {
    EventDraft {
        title: "Standup".to_string(),
        date: "2025-11-30".to_string(),
        start_time: "09:00".to_string(),
        end_time: "09:15".to_string(),
        description: Some("Daily sync".to_string()),
        color: "#0EA5E9".to_string(),
    }
}

#[test]
fn missing_file_opens_as_empty_collection() {
    let path = temp_path("missing");
    let store = JsonFileStore::open(&path).expect("missing file is an empty store");
    assert!(store.list_events().unwrap().is_empty());
}

#[test]
fn events_survive_a_reopen() {
    let path = temp_path("reopen");
    let created = {
        let mut store = JsonFileStore::open(&path).unwrap();
        store.create_event(&standup_draft()).unwrap()
    };

    let reopened = JsonFileStore::open(&path).unwrap();
    let events = reopened.list_events().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0], created);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn file_holds_the_wire_format() {
    let path = temp_path("wire-format");
    let mut store = JsonFileStore::open(&path).unwrap();
    store.create_event(&standup_draft()).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\"startTime\": \"09:00\""));
    assert!(contents.contains("\"date\": \"2025-11-30\""));
    assert!(contents.contains("\"color\": \"#0EA5E9\""));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn delete_persists() {
    let path = temp_path("delete-persists");
    let mut store = JsonFileStore::open(&path).unwrap();
    let created = store.create_event(&standup_draft()).unwrap();
    store.delete_event(&created.id).unwrap();
    drop(store);

    let reopened = JsonFileStore::open(&path).unwrap();
    assert!(reopened.list_events().unwrap().is_empty());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn reopen_does_not_reuse_ids() {
    let path = temp_path("id-resume");
    let first = {
        let mut store = JsonFileStore::open(&path).unwrap();
        store.create_event(&standup_draft()).unwrap()
    };

    let mut reopened = JsonFileStore::open(&path).unwrap();
    let second = reopened.create_event(&standup_draft()).unwrap();
    assert_ne!(first.id, second.id);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn corrupt_file_is_a_transport_failure() {
    let path = temp_path("corrupt");
    std::fs::write(&path, "not json at all").unwrap();

    let err = JsonFileStore::open(&path).unwrap_err();
    assert!(matches!(err, StoreError::Transport { .. }));
    assert!(err.is_retryable());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn hand_edited_file_with_inverted_times_fails_to_open() {
    // Well-formed JSON, but the event violates the time-range constraint.
    // Loading must not serve events the validation gate would reject.
    let path = temp_path("inverted-times-on-disk");
    std::fs::write(
        &path,
        r##"[{"id":"evt-0","title":"Standup","date":"2025-11-30","startTime":"10:00","endTime":"09:00","color":"#0EA5E9"}]"##,
    )
    .unwrap();

    let err = JsonFileStore::open(&path).unwrap_err();
    assert!(matches!(err, StoreError::Transport { .. }));
    assert!(err.to_string().contains("evt-0"));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn hand_edited_file_with_oversized_title_fails_to_open() {
    let path = temp_path("long-title-on-disk");
    let json = format!(
        r##"[{{"id":"evt-0","title":"{}","date":"2025-11-30","startTime":"09:00","endTime":"10:00","color":"#0EA5E9"}}]"##,
        "x".repeat(200)
    );
    std::fs::write(&path, json).unwrap();

    let err = JsonFileStore::open(&path).unwrap_err();
    assert!(matches!(err, StoreError::Transport { .. }));

    let _ = std::fs::remove_file(&path);
}
