// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output format handling for text, JSON, and streaming JSON modes.

use std::str::FromStr;

use clap::ValueEnum;
use serde_json::json;

use crate::error::AgentError;
use crate::event::{RunStatus, RunSummary};

/// Output format for responses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,
    /// JSON response object
    Json,
    /// Line-delimited streaming JSON events
    #[value(name = "stream-json")]
    StreamJson,
}

impl FromStr for OutputFormat {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "stream-json" => Ok(Self::StreamJson),
            other => Err(AgentError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// A rendered response, shaped by the requested [`OutputFormat`].
#[derive(Clone, Debug, PartialEq)]
pub enum Rendered {
    /// Human-readable response text, unchanged.
    Text(String),
    /// Structured response object.
    Json(serde_json::Value),
    /// Placeholder for `stream-json` requested from the non-streaming entry
    /// point. Streaming output is not materializable as a single value;
    /// callers wanting events should use `api::stream` instead. This is a
    /// documented contract, not an error.
    StreamDeferred,
}

impl Rendered {
    /// Stdout representation: text verbatim, JSON pretty-printed, the
    /// deferred placeholder as an empty string.
    pub fn to_stdout_string(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            Self::StreamDeferred => String::new(),
        }
    }
}

/// Render an aggregated run payload into the requested output shape.
pub fn render(summary: &RunSummary, format: OutputFormat) -> Rendered {
    match format {
        OutputFormat::Text => Rendered::Text(summary.result.clone()),
        OutputFormat::Json => Rendered::Json(json!({
            "result": summary.result,
            "status": summary.status,
            "recommendations": summary.recommendations,
            "file_changes": summary.file_changes,
            "prompt": summary.prompt,
            "exit_code": exit_code(summary.status),
        })),
        OutputFormat::StreamJson => Rendered::StreamDeferred,
    }
}

fn exit_code(status: RunStatus) -> i32 {
    match status {
        RunStatus::Completed => 0,
        RunStatus::Failed => 1,
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
