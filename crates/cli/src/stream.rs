// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-run event generation.
//!
//! [`EventStream`] manufactures the ordered event sequence for one simulated
//! agent invocation: `start`, zero or more `thinking` chunks, `diff`
//! fragments for file-modifying runs, a final `result`, and a terminal
//! `done`. Events are produced one per `next()` call with no buffering; each
//! consumes exactly one id from the session's [`EventCounter`].
//!
//! Payload content is a pure function of the prompt (via its SHA-256
//! digest), so two runs with the same prompt and starting id emit
//! byte-identical events apart from timestamps. That determinism is what
//! makes the stream usable as a test fixture.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::counter::EventCounter;
use crate::event::{Event, EventKind, FileChange, RunStatus, RunSummary};

/// Thinking chunks, emitted in order; the prompt digest picks how many.
const THINKING_CHUNKS: [&str; 4] = [
    "Scanning the working tree for relevant files...",
    "Reading the files most related to the request...",
    "Drafting an approach...",
    "Writing up the final summary...",
];

/// Recommendation pool; the prompt digest picks a rotation and count.
const RECOMMENDATIONS: [&str; 4] = [
    "Add doc comments to the public API",
    "Increase unit test coverage for edge cases",
    "Extract long functions into smaller helpers",
    "Pin dependency versions in the build manifest",
];

/// Paths the simulated run claims to have touched; digest-selected.
const CHANGED_PATHS: [&str; 4] = [
    "src/utils.js",
    "src/app.js",
    "src/components/view.js",
    "docs/overview.md",
];

/// What a single simulated run is asked to do.
#[derive(Clone, Debug)]
pub struct RunSpec {
    pub prompt: String,
    pub kind: RunKind,
    /// When set, the final aggregated text is written here once, at result
    /// emission.
    pub output_target: Option<PathBuf>,
}

impl RunSpec {
    /// A read-only analysis run; emits no diff events.
    pub fn analysis(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            kind: RunKind::Analysis,
            output_target: None,
        }
    }

    /// A run that simulates modifying `path`; emits diff events tagged with
    /// it.
    pub fn edit(prompt: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            kind: RunKind::Edit { path: path.into() },
            output_target: None,
        }
    }

    /// Write the final aggregated text to `path` when the result is emitted.
    pub fn with_output_target(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_target = Some(path.into());
        self
    }
}

/// Whether the run reads or simulates a modification.
#[derive(Clone, Debug)]
pub enum RunKind {
    Analysis,
    Edit { path: String },
}

/// Build the aggregated payload for a prompt.
///
/// Shared by the streaming `result` event and the non-streaming facade so
/// the two paths always return identical content for the same prompt.
pub fn summarize(prompt: &str) -> RunSummary {
    let digest = Sha256::digest(prompt.as_bytes());
    let fingerprint = hex::encode(&digest[..4]);
    let count = 1 + (digest[2] as usize % RECOMMENDATIONS.len());
    let start = digest[3] as usize % RECOMMENDATIONS.len();
    let recommendations = (0..count)
        .map(|i| RECOMMENDATIONS[(start + i) % RECOMMENDATIONS.len()].to_string())
        .collect();
    let file_changes = vec![FileChange {
        path: CHANGED_PATHS[digest[4] as usize % CHANGED_PATHS.len()].to_string(),
        action: "updated".to_string(),
        lines_added: u32::from(digest[5]) % 40 + 1,
    }];
    RunSummary {
        result: format!(
            "Simulated agent run {}: handled \"{}\" with no blocking issues found.",
            fingerprint, prompt
        ),
        status: RunStatus::Completed,
        recommendations,
        file_changes,
        prompt: prompt.to_string(),
    }
}

fn thinking_chunks(prompt: &str) -> Vec<String> {
    let digest = Sha256::digest(prompt.as_bytes());
    let count = 1 + (digest[0] as usize % THINKING_CHUNKS.len());
    THINKING_CHUNKS[..count]
        .iter()
        .map(|chunk| chunk.to_string())
        .collect()
}

fn diff_fragments(prompt: &str, path: &str) -> Vec<(String, String)> {
    let digest = Sha256::digest(prompt.as_bytes());
    let count = 1 + (digest[1] as usize % 2);
    (0..count)
        .map(|i| {
            (
                format!("// {}: pending change {}", path, i + 1),
                format!("// {}: applied change {} for \"{}\"", path, i + 1, prompt),
            )
        })
        .collect()
}

/// Lazy, finite, non-restartable event sequence for one simulated run.
///
/// Consuming the iterator is the session; dropping it early is allowed and
/// leaves no resource behind (the optional artifact write is a single scoped
/// open/write/close at result emission, never a held-open handle).
#[derive(Debug)]
pub struct EventStream {
    spec: RunSpec,
    counter: EventCounter,
    thinking: Vec<String>,
    diffs: Vec<(String, String)>,
    state: StreamState,
    last_timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug)]
enum StreamState {
    Start,
    Thinking(usize),
    Diff(usize),
    Result,
    Done,
    Exhausted,
}

impl EventStream {
    /// Begin a fresh session drawing ids from `counter`.
    pub fn new(spec: RunSpec, counter: EventCounter) -> Self {
        let thinking = thinking_chunks(&spec.prompt);
        let diffs = match &spec.kind {
            RunKind::Edit { path } => diff_fragments(&spec.prompt, path),
            RunKind::Analysis => Vec::new(),
        };
        Self {
            spec,
            counter,
            thinking,
            diffs,
            state: StreamState::Start,
            last_timestamp: None,
        }
    }

    /// Clamp this stream's timestamps to at least `floor`, so a stream
    /// embedded in a larger sequence never steps behind events already
    /// emitted there.
    pub(crate) fn with_timestamp_floor(mut self, floor: Option<DateTime<Utc>>) -> Self {
        self.last_timestamp = floor;
        self
    }

    /// Wrap a payload in the next numbered, timestamped envelope.
    ///
    /// Timestamps are clamped against the previous emission so they never
    /// decrease within the stream even if the wall clock steps backwards.
    fn emit(&mut self, kind: EventKind) -> Event {
        let now = Utc::now();
        let timestamp = match self.last_timestamp {
            Some(prev) if prev > now => prev,
            _ => now,
        };
        self.last_timestamp = Some(timestamp);
        Event {
            id: self.counter.next_id(),
            timestamp,
            kind,
        }
    }

    fn build_result(&self) -> RunSummary {
        let mut summary = summarize(&self.spec.prompt);
        if let Some(target) = &self.spec.output_target {
            if let Err(err) = std::fs::write(target, &summary.result) {
                // Contained, like batch per-item failures: report in the
                // payload rather than poisoning the stream.
                summary.status = RunStatus::Failed;
                summary.result = format!("failed to write {}: {}", target.display(), err);
            }
        }
        summary
    }
}

impl Iterator for EventStream {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        loop {
            match self.state {
                StreamState::Start => {
                    self.state = StreamState::Thinking(0);
                    let prompt = self.spec.prompt.clone();
                    return Some(self.emit(EventKind::Start { prompt }));
                }
                StreamState::Thinking(i) => {
                    if i < self.thinking.len() {
                        self.state = StreamState::Thinking(i + 1);
                        let text = self.thinking[i].clone();
                        return Some(self.emit(EventKind::Thinking { text }));
                    }
                    self.state = StreamState::Diff(0);
                }
                StreamState::Diff(i) => {
                    if i < self.diffs.len() {
                        self.state = StreamState::Diff(i + 1);
                        let (before, after) = self.diffs[i].clone();
                        let path = match &self.spec.kind {
                            RunKind::Edit { path } => Some(path.clone()),
                            RunKind::Analysis => None,
                        };
                        return Some(self.emit(EventKind::Diff { path, before, after }));
                    }
                    self.state = StreamState::Result;
                }
                StreamState::Result => {
                    let summary = self.build_result();
                    self.state = StreamState::Done;
                    return Some(self.emit(EventKind::Result { summary }));
                }
                StreamState::Done => {
                    self.state = StreamState::Exhausted;
                    return Some(self.emit(EventKind::Done));
                }
                StreamState::Exhausted => return None,
            }
        }
    }
}

impl std::iter::FusedIterator for EventStream {}

#[cfg(test)]
#[path = "stream_tests.rs"]
mod tests;
