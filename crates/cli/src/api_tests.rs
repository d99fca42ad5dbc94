// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::event::{Event, EventKind, Phase};
use std::fs;
use tempfile::TempDir;

fn keyed_options(prompt: &str) -> InvokeOptions {
    InvokeOptions {
        print_mode: true,
        api_key: Some("test-key".to_string()),
        ..InvokeOptions::new(prompt)
    }
}

#[test]
fn test_invoke_requires_print_mode() {
    let options = InvokeOptions {
        print_mode: false,
        ..keyed_options("hello")
    };
    let err = invoke(&options).unwrap_err();
    assert!(matches!(err, AgentError::Configuration(_)));
}

#[test]
fn test_invoke_rejects_empty_prompt() {
    let err = invoke(&keyed_options("")).unwrap_err();
    assert!(matches!(err, AgentError::Configuration(_)));
    let err = invoke(&keyed_options("   ")).unwrap_err();
    assert!(matches!(err, AgentError::Configuration(_)));
}

#[test]
fn test_invoke_without_any_key_is_an_authentication_error() {
    std::env::remove_var(crate::env::CURSOR_API_KEY);
    let options = InvokeOptions {
        api_key: None,
        ..keyed_options("hello")
    };
    let err = invoke(&options).unwrap_err();
    assert!(matches!(err, AgentError::Authentication));
}

#[test]
fn test_any_nonempty_key_succeeds() {
    for key in ["x", "sk-not-validated", "clearly wrong"] {
        let options = InvokeOptions {
            api_key: Some(key.to_string()),
            ..keyed_options("hello")
        };
        assert!(invoke(&options).is_ok());
    }
}

#[test]
fn test_invoke_text_matches_streaming_result_payload() {
    let prompt = "describe the repository layout";
    let Rendered::Text(text) = invoke(&keyed_options(prompt)).unwrap() else {
        panic!("expected text rendering");
    };

    let result_event = stream(prompt, None)
        .find(|e| e.phase() == Phase::Result)
        .unwrap();
    let EventKind::Result { summary } = result_event.kind else {
        panic!("filtered on result phase");
    };
    assert_eq!(text, summary.result);
}

#[test]
fn test_invoke_json_has_result_and_status() {
    let options = InvokeOptions {
        output_format: OutputFormat::Json,
        ..keyed_options("review recent changes")
    };
    let Rendered::Json(value) = invoke(&options).unwrap() else {
        panic!("expected JSON rendering");
    };
    assert!(value["result"].is_string());
    assert_eq!(value["status"], "completed");
}

#[test]
fn test_invoke_stream_json_returns_placeholder() {
    let options = InvokeOptions {
        output_format: OutputFormat::StreamJson,
        ..keyed_options("hello")
    };
    assert_eq!(invoke(&options).unwrap(), Rendered::StreamDeferred);
}

#[test]
fn test_independent_streams_do_not_share_ids() {
    let first: Vec<Event> = stream("one", None).collect();
    let second: Vec<Event> = stream("two", None).collect();
    assert_eq!(first[0].id, 0);
    assert_eq!(second[0].id, 0);
}

#[test]
fn test_stream_with_output_file_writes_report() {
    let dir = TempDir::new().unwrap();
    let report = dir.path().join("analysis.txt");
    let events: Vec<Event> = stream("analyze the project", Some(report.clone())).collect();

    assert!(report.exists());
    assert!(events.iter().any(|e| e.phase() == Phase::Diff));
}

#[test]
fn test_agent_construction_requires_a_key() {
    std::env::remove_var(crate::env::CURSOR_API_KEY);
    assert!(matches!(
        Agent::new(None),
        Err(AgentError::Authentication)
    ));
    let agent = Agent::new(Some("dummy-key".to_string())).unwrap();
    assert_eq!(agent.api_key(), "dummy-key");
}

#[test]
fn test_agent_analyze_returns_text() {
    let agent = Agent::new(Some("dummy-key".to_string())).unwrap();
    let rendered = agent.analyze("what does this code do?", false).unwrap();
    assert!(matches!(rendered, Rendered::Text(_)));
}

#[test]
fn test_agent_review_returns_json_naming_the_target() {
    let agent = Agent::new(Some("dummy-key".to_string())).unwrap();
    let Rendered::Json(value) = agent.review("recent changes").unwrap() else {
        panic!("expected JSON rendering");
    };
    assert!(value["prompt"]
        .as_str()
        .unwrap()
        .contains("Review recent changes"));
    assert_eq!(value["status"], "completed");
}

#[test]
fn test_agent_stream_batch_builds_per_file_prompts() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), "alpha").unwrap();
    let pattern = format!("{}/*.txt", dir.path().display());

    let agent = Agent::new(Some("dummy-key".to_string())).unwrap();
    let events: Vec<Event> = agent
        .stream_batch(&pattern, "add doc comments")
        .unwrap()
        .collect();

    let start = events.iter().find(|e| e.phase() == Phase::Start).unwrap();
    let EventKind::Start { prompt } = &start.kind else {
        panic!("filtered on start phase");
    };
    assert!(prompt.ends_with("a.txt: add doc comments"));
}

#[test]
fn test_batch_facade_runs_eagerly() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), "alpha").unwrap();
    let pattern = format!("{}/*.txt", dir.path().display());

    let items = batch(&pattern, "describe {file}").unwrap();
    assert_eq!(items.len(), 1);
    assert!(!items[0].events.is_empty());
}
