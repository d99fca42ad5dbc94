// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy for the simulator facade.
//!
//! All variants are fail-fast: they are raised before any event is produced.
//! Per-file batch failures are deliberately not represented here; they are
//! contained in the failed `BatchItem` (or a `file_failed` event) and never
//! abort a batch.

use thiserror::Error;

/// Errors surfaced by the facade entry points.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Required mode flag or prompt missing.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// No API key supplied and none resolvable from `CURSOR_API_KEY`.
    ///
    /// The key's value is never validated; only its presence is checked.
    #[error("authentication error: no API key set; pass --api-key or set CURSOR_API_KEY")]
    Authentication,

    /// Output format outside the supported set.
    #[error("unsupported output format: {0:?} (expected text, json, or stream-json)")]
    UnsupportedFormat(String),

    /// Glob pattern failed to parse.
    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

impl AgentError {
    /// Process exit code for this error when surfaced by the CLI.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
