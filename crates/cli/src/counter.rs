// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared monotonic event-id source.
//!
//! Every event in a session or batch draws exactly one id from an
//! `EventCounter`. The counter is an explicit handle, never a process-wide
//! singleton, so tests can start independent reproducible streams at any id.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Cloneable handle over a monotonically increasing id counter.
///
/// Clones share the same underlying counter, which is what lets a batch
/// thread one id sequence through every per-file generator it spawns.
#[derive(Clone, Debug)]
pub struct EventCounter {
    next: Arc<AtomicU64>,
}

impl EventCounter {
    /// Create a counter starting at id 0.
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Create a counter whose first issued id is `start`.
    pub fn starting_at(start: u64) -> Self {
        Self {
            next: Arc::new(AtomicU64::new(start)),
        }
    }

    /// Consume and return the next id. The sole way the counter advances.
    pub fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }

    /// Observe the id that the next call to [`next_id`](Self::next_id)
    /// would return, without consuming it.
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::SeqCst)
    }
}

impl Default for EventCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "counter_tests.rs"]
mod tests;
