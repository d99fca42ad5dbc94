// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Event data model for simulated agent streams.
//!
//! Every unit of output from a simulated run is an [`Event`]: a uniquely
//! numbered, timestamped envelope around one of the closed set of
//! [`EventKind`] payloads. Serialized events carry the kind as a top-level
//! `"type"` tag, matching the line-delimited stream-json wire shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One unit of a simulated event stream.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique, strictly increasing within one logical stream.
    pub id: u64,
    /// Wall-clock capture at emission; non-decreasing within a stream.
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: EventKind,
}

impl Event {
    /// Phase tag of this event.
    pub fn phase(&self) -> Phase {
        self.kind.phase()
    }
}

/// Type-specific payload, tagged on the wire as `"type"`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    /// Session begin; echoes the prompt.
    Start { prompt: String },
    /// Incremental text chunk.
    Thinking { text: String },
    /// Simulated before/after fragment for a file-modifying run.
    Diff {
        path: Option<String>,
        before: String,
        after: String,
    },
    /// Final aggregated payload, identical to the non-streaming response.
    Result { summary: RunSummary },
    /// Terminal marker; the stream is exhausted after this event.
    Done,
    /// A batch item moved to in-progress.
    FileStarted { path: String, progress: BatchProgress },
    /// A batch item completed.
    FileCompleted { path: String, progress: BatchProgress },
    /// A batch item failed; later items still run.
    FileFailed {
        path: String,
        error: String,
        progress: BatchProgress,
    },
}

impl EventKind {
    /// Map to the closed set of phase tags.
    pub fn phase(&self) -> Phase {
        match self {
            Self::Start { .. } => Phase::Start,
            Self::Thinking { .. } => Phase::Thinking,
            Self::Diff { .. } => Phase::Diff,
            Self::Result { .. } => Phase::Result,
            Self::Done => Phase::Done,
            Self::FileStarted { .. } => Phase::FileStarted,
            Self::FileCompleted { .. } => Phase::FileCompleted,
            Self::FileFailed { .. } => Phase::FileFailed,
        }
    }
}

/// Closed set of phase tags an event can belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Start,
    Thinking,
    Diff,
    Result,
    Done,
    FileStarted,
    FileCompleted,
    FileFailed,
}

/// Aggregated payload of one simulated run.
///
/// This is the single source of response content: the streaming path embeds
/// it in the `result` event and the non-streaming path renders it directly,
/// so both always agree for a given prompt.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Human-readable response line.
    pub result: String,
    pub status: RunStatus,
    pub recommendations: Vec<String>,
    /// Simulated modifications the run claims to have made.
    pub file_changes: Vec<FileChange>,
    /// The prompt this summary answers, echoed for traceability.
    pub prompt: String,
}

/// One simulated file modification reported in a run summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChange {
    pub path: String,
    /// What the simulated run claims to have done, e.g. `"updated"`.
    pub action: String,
    pub lines_added: u32,
}

/// Terminal status of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Completed,
    Failed,
}

/// Position of one file within a batch, e.g. "3 of 10".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchProgress {
    /// 1-based index of the current file in path order.
    pub current: usize,
    pub total: usize,
}

impl std::fmt::Display for BatchProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.current, self.total)
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
