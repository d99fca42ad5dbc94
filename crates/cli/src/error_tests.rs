// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

#[test]
fn test_configuration_message_includes_detail() {
    let err = AgentError::Configuration("prompt must not be empty".to_string());
    assert_eq!(
        err.to_string(),
        "configuration error: prompt must not be empty"
    );
}

#[test]
fn test_authentication_message_names_env_var() {
    assert!(AgentError::Authentication
        .to_string()
        .contains("CURSOR_API_KEY"));
}

#[test]
fn test_unsupported_format_echoes_input() {
    let err = AgentError::UnsupportedFormat("yaml".to_string());
    assert!(err.to_string().contains("\"yaml\""));
}

#[test]
fn test_pattern_error_converts() {
    let parse_err = glob::Pattern::new("[").unwrap_err();
    let err: AgentError = parse_err.into();
    assert!(matches!(err, AgentError::Pattern(_)));
}

#[test]
fn test_every_variant_exits_nonzero() {
    let errors = [
        AgentError::Configuration("x".to_string()),
        AgentError::Authentication,
        AgentError::UnsupportedFormat("x".to_string()),
    ];
    for err in errors {
        assert_eq!(err.exit_code(), 1);
    }
}
