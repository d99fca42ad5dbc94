// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by cursorless are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// `CURSOR_API_KEY`: API key resolved when none is passed explicitly.
pub const CURSOR_API_KEY: &str = "CURSOR_API_KEY";

/// API key from the environment, treating an empty value as unset.
pub fn api_key() -> Option<String> {
    std::env::var(CURSOR_API_KEY)
        .ok()
        .filter(|key| !key.is_empty())
}

/// Resolve an effective API key: explicit value first, environment second.
///
/// An explicit empty string counts as unset, matching the CLI contract that
/// only key presence matters.
pub fn resolve_api_key(explicit: Option<&str>) -> Option<String> {
    explicit
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .or_else(api_key)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
