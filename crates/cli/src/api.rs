// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Functional and object-style entry points for the simulator.
//!
//! `invoke` is the non-streaming path; `stream`, `batch`, and `stream_batch`
//! cover the event-producing paths. [`Agent`] wraps the same operations with
//! an API key captured at construction. Every entry point creates its own
//! [`EventCounter`], so independent sessions never share id state; tests
//! wanting a specific starting id construct the generators directly.

use std::path::PathBuf;

use crate::batch::{run_batch, BatchItem, BatchStream};
use crate::counter::EventCounter;
use crate::env;
use crate::error::AgentError;
use crate::format::{render, OutputFormat, Rendered};
use crate::stream::{summarize, EventStream, RunSpec};
use crate::template;

/// Arguments for the non-streaming [`invoke`] entry point.
#[derive(Clone, Debug)]
pub struct InvokeOptions {
    pub prompt: String,
    /// Non-interactive mode; required for any output.
    pub print_mode: bool,
    /// Accepted for compatibility; the simulator never mutates files.
    pub force: bool,
    pub output_format: OutputFormat,
    /// Accepted for compatibility; partial output only exists on the
    /// streaming path.
    pub stream_partial_output: bool,
    /// Explicit API key; falls back to `CURSOR_API_KEY` when absent.
    pub api_key: Option<String>,
}

impl InvokeOptions {
    /// Options with the same defaults as the real CLI: flags unset, text
    /// output, key resolved from the environment.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            print_mode: false,
            force: false,
            output_format: OutputFormat::Text,
            stream_partial_output: false,
            api_key: None,
        }
    }
}

/// Simulate one non-interactive agent invocation.
///
/// Fail-fast order: configuration (print mode, non-empty prompt), then
/// authentication (key presence only, never validity), then rendering.
/// The response content is identical to what the streaming path embeds in
/// its `result` event for the same prompt.
pub fn invoke(options: &InvokeOptions) -> Result<Rendered, AgentError> {
    if !options.print_mode {
        return Err(AgentError::Configuration(
            "print mode is required for non-interactive output; pass --print".to_string(),
        ));
    }
    if options.prompt.trim().is_empty() {
        return Err(AgentError::Configuration(
            "prompt must not be empty".to_string(),
        ));
    }
    env::resolve_api_key(options.api_key.as_deref()).ok_or(AgentError::Authentication)?;

    let summary = summarize(&options.prompt);
    Ok(render(&summary, options.output_format))
}

/// Start a fresh streaming session for one prompt.
///
/// With an `output_file` the run simulates creating a report there: it emits
/// diff events tagged with the file and writes the final aggregated text to
/// it once, at result emission. Without one the run is a read-only analysis.
pub fn stream(prompt: &str, output_file: Option<PathBuf>) -> EventStream {
    let spec = match output_file {
        Some(path) => {
            RunSpec::edit(prompt, path.to_string_lossy().into_owned()).with_output_target(path)
        }
        None => RunSpec::analysis(prompt),
    };
    EventStream::new(spec, EventCounter::new())
}

/// Eagerly process every file matching `pattern` with a templated prompt.
pub fn batch(pattern: &str, prompt_template: &str) -> Result<Vec<BatchItem>, AgentError> {
    run_batch(pattern, prompt_template, &EventCounter::new())
}

/// Lazily stream a batch over `pattern`, progress events included.
pub fn stream_batch(pattern: &str, prompt_template: &str) -> Result<BatchStream, AgentError> {
    BatchStream::new(pattern, prompt_template, EventCounter::new())
}

/// Object-style facade capturing an API key at construction.
///
/// Construction fails with [`AgentError::Authentication`] when no key is
/// supplied and none is resolvable from `CURSOR_API_KEY`.
pub struct Agent {
    api_key: String,
}

impl Agent {
    pub fn new(api_key: Option<String>) -> Result<Self, AgentError> {
        let api_key =
            env::resolve_api_key(api_key.as_deref()).ok_or(AgentError::Authentication)?;
        Ok(Self { api_key })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Analyze a codebase or file; text response.
    pub fn analyze(&self, prompt: &str, force: bool) -> Result<Rendered, AgentError> {
        invoke(&InvokeOptions {
            print_mode: true,
            force,
            api_key: Some(self.api_key.clone()),
            ..InvokeOptions::new(prompt)
        })
    }

    /// Run a simulated code review of `target`; JSON response.
    pub fn review(&self, target: &str) -> Result<Rendered, AgentError> {
        let prompt = format!(
            "Review {} and provide feedback on:\n\
             \x20 - code quality and readability\n\
             \x20 - potential bugs or issues\n\
             \x20 - security considerations\n\
             \x20 - best-practice compliance\n\n\
             Give concrete suggestions for improvement.",
            target
        );
        invoke(&InvokeOptions {
            print_mode: true,
            force: true,
            output_format: OutputFormat::Json,
            api_key: Some(self.api_key.clone()),
            ..InvokeOptions::new(prompt)
        })
    }

    /// Stream a project analysis that writes its summary to `output_file`.
    pub fn stream_analysis(&self, output_file: impl Into<PathBuf>) -> EventStream {
        let path = output_file.into();
        let prompt = format!(
            "Analyze this project and create a summary report in {}",
            path.display()
        );
        stream(&prompt, Some(path))
    }

    /// Stream a batch that applies `instruction` to every file matching
    /// `pattern`.
    pub fn stream_batch(&self, pattern: &str, instruction: &str) -> Result<BatchStream, AgentError> {
        let template = format!("{}: {}", template::FILE_PLACEHOLDER, instruction);
        stream_batch(pattern, &template)
    }
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
