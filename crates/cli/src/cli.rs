// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing matching the cursor-agent interface.

use std::path::PathBuf;

use clap::Parser;

use crate::format::OutputFormat;

/// Cursor CLI Simulator
#[derive(Parser, Clone, Debug)]
#[command(name = "cursor-agent", version, about = "Cursor CLI Simulator")]
pub struct Cli {
    /// The prompt to send (positional; falls back to stdin)
    #[arg(value_name = "PROMPT")]
    pub prompt: Option<String>,

    /// Print mode - non-interactive single response (required for output)
    #[arg(short = 'p', long)]
    pub print: bool,

    /// Apply simulated changes without confirmation
    #[arg(long)]
    pub force: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    /// Stream partial output incrementally (with stream-json)
    #[arg(long)]
    pub stream_partial_output: bool,

    /// API key; only presence is checked, never validity
    #[arg(long, env = "CURSOR_API_KEY")]
    pub api_key: Option<String>,

    /// File the streaming run writes its final summary to
    #[arg(long)]
    pub output_file: Option<PathBuf>,
}

impl Cli {
    /// Whether this invocation selects the line-delimited streaming path.
    pub fn wants_event_stream(&self) -> bool {
        self.output_format == OutputFormat::StreamJson && self.stream_partial_output
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
