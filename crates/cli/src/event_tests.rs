// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use chrono::TimeZone;
use rstest::rstest;

fn sample_event(kind: EventKind) -> Event {
    Event {
        id: 7,
        timestamp: Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap(),
        kind,
    }
}

#[test]
fn test_serializes_with_top_level_type_tag() {
    let event = sample_event(EventKind::Start {
        prompt: "describe the repo".to_string(),
    });
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["type"], "start");
    assert_eq!(value["id"], 7);
    assert_eq!(value["prompt"], "describe the repo");
}

#[test]
fn test_done_event_has_no_payload_fields() {
    let value = serde_json::to_value(sample_event(EventKind::Done)).unwrap();
    assert_eq!(value["type"], "done");
    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 3); // id, timestamp, type
}

#[test]
fn test_round_trips_through_json() {
    let event = sample_event(EventKind::Diff {
        path: Some("src/utils.js".to_string()),
        before: "old".to_string(),
        after: "new".to_string(),
    });
    let json = serde_json::to_string(&event).unwrap();
    let back: Event = serde_json::from_str(&json).unwrap();
    assert_eq!(back, event);
}

fn progress() -> BatchProgress {
    BatchProgress {
        current: 1,
        total: 2,
    }
}

fn summary() -> RunSummary {
    RunSummary {
        result: String::new(),
        status: RunStatus::Completed,
        recommendations: Vec::new(),
        file_changes: Vec::new(),
        prompt: String::new(),
    }
}

#[rstest]
#[case(EventKind::Start { prompt: String::new() }, Phase::Start)]
#[case(EventKind::Thinking { text: String::new() }, Phase::Thinking)]
#[case(EventKind::Diff { path: None, before: String::new(), after: String::new() }, Phase::Diff)]
#[case(EventKind::Result { summary: summary() }, Phase::Result)]
#[case(EventKind::Done, Phase::Done)]
#[case(EventKind::FileStarted { path: "a".to_string(), progress: progress() }, Phase::FileStarted)]
#[case(EventKind::FileCompleted { path: "a".to_string(), progress: progress() }, Phase::FileCompleted)]
#[case(
    EventKind::FileFailed { path: "a".to_string(), error: "nope".to_string(), progress: progress() },
    Phase::FileFailed
)]
fn test_phase_maps_every_kind(#[case] kind: EventKind, #[case] phase: Phase) {
    assert_eq!(kind.phase(), phase);
}

#[test]
fn test_run_status_serializes_lowercase() {
    assert_eq!(
        serde_json::to_value(RunStatus::Completed).unwrap(),
        "completed"
    );
    assert_eq!(serde_json::to_value(RunStatus::Failed).unwrap(), "failed");
}

#[test]
fn test_batch_progress_displays_as_fraction() {
    let progress = BatchProgress {
        current: 3,
        total: 10,
    };
    assert_eq!(progress.to_string(), "3/10");
}
