// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cursor CLI Simulator
//!
//! A test crate that simulates the `cursor-agent` CLI for integration
//! testing. Provides a deterministic, offline test double that responds to
//! the same invocation modes, output formats, streaming behavior, and
//! glob-driven batch processing as the real tool. Identical prompts yield
//! byte-identical event payloads (timestamps aside), so consumers can assert
//! on output without a live backend.
//!
//! Entry points live in [`api`]: `invoke` for single non-streaming
//! responses, `stream` for one session's event sequence, `batch` and
//! `stream_batch` for glob-driven fan-out, and [`api::Agent`] as the
//! object-style facade.

pub mod api;
pub mod batch;
#[doc(hidden)]
pub mod cli;
pub mod counter;
#[doc(hidden)]
pub mod demo;
pub mod env;
pub mod error;
pub mod event;
pub mod format;
pub mod stream;
pub mod template;
