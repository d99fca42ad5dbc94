// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in demonstration sequence.
//!
//! Runs when the binary is invoked with no prompt, no piped stdin, and no
//! `--print`: a short tour of the simulator's entry points instead of a
//! usage error. Uses a throwaway key since key values are never validated.

use std::io::Write;

use crate::api::{self, Agent, InvokeOptions};
use crate::format::OutputFormat;

const DEMO_KEY: &str = "demo-key";

/// Write the demonstration sequence to `writer`.
pub fn run_demo<W: Write>(writer: &mut W) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(writer, "=== Example 1: simple query ===")?;
    let rendered = api::invoke(&InvokeOptions {
        print_mode: true,
        api_key: Some(DEMO_KEY.to_string()),
        ..InvokeOptions::new("What does this codebase do?")
    })?;
    writeln!(writer, "{}", rendered.to_stdout_string())?;

    writeln!(writer, "\n=== Example 2: code review (JSON) ===")?;
    let agent = Agent::new(Some(DEMO_KEY.to_string()))?;
    let rendered = agent.review("recent changes")?;
    writeln!(writer, "{}", rendered.to_stdout_string())?;

    writeln!(writer, "\n=== Example 3: streaming analysis ===")?;
    for event in api::stream("Analyze this project structure", None) {
        writeln!(writer, "{}", serde_json::to_string(&event)?)?;
    }

    writeln!(writer, "\n=== Example 4: streaming batch ===")?;
    for event in api::stream_batch("*.toml", "summarize {file}")? {
        writeln!(writer, "{}", serde_json::to_string(&event)?)?;
    }

    Ok(())
}

#[cfg(test)]
#[path = "demo_tests.rs"]
mod tests;
