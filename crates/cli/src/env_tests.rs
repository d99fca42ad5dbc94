// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

// Environment mutation is process-global, so these tests only exercise the
// explicit-key path; the environment fallback is covered by the binary
// integration tests where each subprocess gets its own environment.

#[test]
fn test_explicit_key_wins() {
    assert_eq!(
        resolve_api_key(Some("sk-explicit")),
        Some("sk-explicit".to_string())
    );
}

#[test]
fn test_explicit_empty_key_counts_as_unset() {
    // Falls through to the environment, which may or may not be set here;
    // either way the empty string itself must never be returned.
    assert_ne!(resolve_api_key(Some("")), Some(String::new()));
}

#[test]
fn test_any_nonempty_key_is_accepted_verbatim() {
    assert_eq!(resolve_api_key(Some("x")), Some("x".to_string()));
    assert_eq!(
        resolve_api_key(Some("not-a-real-key")),
        Some("not-a-real-key".to_string())
    );
}
