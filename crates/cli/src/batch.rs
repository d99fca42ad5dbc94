// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Batch orchestration across glob-matched files.
//!
//! Both forms enumerate matches in lexicographic path order and thread one
//! shared [`EventCounter`] through every per-file generator, so ids never
//! repeat or reset mid-batch. A single file's failure marks that item failed
//! and never aborts the remaining batch. Zero matches is an empty result,
//! not an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::counter::EventCounter;
use crate::error::AgentError;
use crate::event::{BatchProgress, Event, EventKind};
use crate::stream::{EventStream, RunSpec};
use crate::template;

/// One file's simulated processing record within a batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatchItem {
    pub path: String,
    pub status: BatchStatus,
    /// Diagnostic attached to failed items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// The file's event sub-sequence, numbered by the batch's shared
    /// counter. Empty for failed items.
    pub events: Vec<Event>,
}

impl BatchItem {
    fn pending(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            status: BatchStatus::Pending,
            error: None,
            events: Vec::new(),
        }
    }
}

/// Lifecycle of a batch item; `Completed` and `Failed` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BatchStatus {
    Pending,
    InProgress,
    Completed,
    Failed,
}

/// A glob match, or the error the walk produced for one path.
#[derive(Debug)]
enum Candidate {
    Path(String),
    Unreadable { path: String, error: String },
}

impl Candidate {
    fn path(&self) -> &str {
        match self {
            Self::Path(path) => path,
            Self::Unreadable { path, .. } => path,
        }
    }

    /// Per-item failure check: enumeration errors and unreadable paths fail
    /// the item, nothing else.
    fn check(&self) -> Result<(), String> {
        match self {
            Self::Path(path) => std::fs::metadata(path)
                .map(|_| ())
                .map_err(|err| format!("cannot read {}: {}", path, err)),
            Self::Unreadable { error, .. } => Err(error.clone()),
        }
    }
}

/// Expand `pattern` and sort matches lexicographically by path string.
///
/// Order is stable across repeated calls over the same tree. Invalid glob
/// syntax is the only fail-fast error; per-path problems become candidates
/// that will fail their item.
fn matched_candidates(pattern: &str) -> Result<Vec<Candidate>, AgentError> {
    let mut candidates: Vec<Candidate> = glob::glob(pattern)?
        .map(|entry| match entry {
            Ok(path) => Candidate::Path(path.to_string_lossy().into_owned()),
            Err(err) => Candidate::Unreadable {
                path: err.path().to_string_lossy().into_owned(),
                error: err.to_string(),
            },
        })
        .collect();
    candidates.sort_by(|a, b| a.path().cmp(b.path()));
    Ok(candidates)
}

/// Eagerly process every file matching `pattern`, in path order.
///
/// Each file's prompt is `template` with `{file}` substituted; each run
/// draws ids from the shared `counter`.
pub fn run_batch(
    pattern: &str,
    template: &str,
    counter: &EventCounter,
) -> Result<Vec<BatchItem>, AgentError> {
    let candidates = matched_candidates(pattern)?;
    let mut items = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let mut item = BatchItem::pending(candidate.path());
        item.status = BatchStatus::InProgress;
        match candidate.check() {
            Ok(()) => {
                let prompt = template::expand(template, &item.path);
                let spec = RunSpec::edit(prompt, item.path.clone());
                item.events = EventStream::new(spec, counter.clone()).collect();
                item.status = BatchStatus::Completed;
            }
            Err(error) => {
                item.status = BatchStatus::Failed;
                item.error = Some(error);
            }
        }
        items.push(item);
    }
    Ok(items)
}

/// Lazy batch form: one flat event sequence across all files.
///
/// Per file it yields `file_started`, the file's generator events, then
/// `file_completed` or `file_failed`. Batch-level progress events draw ids
/// from the same shared counter as the per-file events, keeping the whole
/// sequence contiguous. Timestamps are clamped across the whole sequence,
/// markers and generator events alike, so they never decrease mid-batch.
#[derive(Debug)]
pub struct BatchStream {
    counter: EventCounter,
    template: String,
    files: std::vec::IntoIter<Candidate>,
    total: usize,
    current: usize,
    state: BatchState,
    last_timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug)]
enum BatchState {
    /// Ready to pick up the next file (or finish).
    Idle,
    /// Forwarding one file's generator events.
    Streaming {
        path: String,
        progress: BatchProgress,
        inner: EventStream,
    },
    /// A `file_failed` event is owed for this file.
    Failing {
        path: String,
        error: String,
        progress: BatchProgress,
    },
}

impl BatchStream {
    /// Expand `pattern` up front; event production starts on first `next()`.
    pub fn new(pattern: &str, template: &str, counter: EventCounter) -> Result<Self, AgentError> {
        let candidates = matched_candidates(pattern)?;
        Ok(Self {
            counter,
            template: template.to_string(),
            total: candidates.len(),
            files: candidates.into_iter(),
            current: 0,
            state: BatchState::Idle,
            last_timestamp: None,
        })
    }

    /// Wrap a payload in the next numbered, timestamped envelope, clamping
    /// the timestamp against the last event yielded from any state.
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
}

impl Iterator for BatchStream {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        loop {
            match std::mem::replace(&mut self.state, BatchState::Idle) {
                BatchState::Idle => {
                    let candidate = self.files.next()?;
                    self.current += 1;
                    let progress = BatchProgress {
                        current: self.current,
                        total: self.total,
                    };
                    let path = candidate.path().to_string();
                    let check = candidate.check();
                    // Emit the marker first so the inner stream can floor
                    // its timestamps at the marker's.
                    let event = self.emit(EventKind::FileStarted {
                        path: path.clone(),
                        progress,
                    });
                    self.state = match check {
                        Ok(()) => {
                            let prompt = template::expand(&self.template, &path);
                            let spec = RunSpec::edit(prompt, path.clone());
                            BatchState::Streaming {
                                path,
                                progress,
                                inner: EventStream::new(spec, self.counter.clone())
                                    .with_timestamp_floor(self.last_timestamp),
                            }
                        }
                        Err(error) => BatchState::Failing {
                            path,
                            error,
                            progress,
                        },
                    };
                    return Some(event);
                }
                BatchState::Streaming {
                    path,
                    progress,
                    mut inner,
                } => {
                    if let Some(event) = inner.next() {
                        self.last_timestamp = Some(event.timestamp);
                        self.state = BatchState::Streaming {
                            path,
                            progress,
                            inner,
                        };
                        return Some(event);
                    }
                    // Inner stream exhausted; the item is complete.
                    return Some(self.emit(EventKind::FileCompleted { path, progress }));
                }
                BatchState::Failing {
                    path,
                    error,
                    progress,
                } => {
                    return Some(self.emit(EventKind::FileFailed {
                        path,
                        error,
                        progress,
                    }));
                }
            }
        }
    }
}

impl std::iter::FusedIterator for BatchStream {}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
