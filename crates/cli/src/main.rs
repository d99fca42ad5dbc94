// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cursor CLI simulator binary entry point.

use std::io::{IsTerminal, Read, Write};

use clap::Parser;

use cursorless::api::{self, InvokeOptions};
use cursorless::cli::Cli;
use cursorless::demo;
use cursorless::env;
use cursorless::error::AgentError;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version keep clap's exit 0; real argument errors
            // exit 1 like every other configuration failure.
            if !err.use_stderr() {
                err.exit();
            }
            let _ = err.print();
            std::process::exit(1);
        }
    };
    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        let code = err
            .downcast_ref::<AgentError>()
            .map(AgentError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let Some(prompt) = resolve_prompt(&cli)? else {
        if cli.print {
            return Err(AgentError::Configuration(
                "a prompt is required with --print; pass one or pipe stdin".to_string(),
            )
            .into());
        }
        // Bare invocation: demonstrate the simulator instead of failing.
        let mut stdout = std::io::stdout();
        return demo::run_demo(&mut stdout);
    };

    if cli.wants_event_stream() {
        if !cli.print {
            return Err(AgentError::Configuration(
                "print mode is required for non-interactive output; pass --print".to_string(),
            )
            .into());
        }
        if env::resolve_api_key(cli.api_key.as_deref()).is_none() {
            return Err(AgentError::Authentication.into());
        }
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        for event in api::stream(&prompt, cli.output_file.clone()) {
            writeln!(handle, "{}", serde_json::to_string(&event)?)?;
            handle.flush()?;
        }
        return Ok(());
    }

    let rendered = api::invoke(&InvokeOptions {
        prompt,
        print_mode: cli.print,
        force: cli.force,
        output_format: cli.output_format,
        stream_partial_output: cli.stream_partial_output,
        api_key: cli.api_key.clone(),
    })?;
    println!("{}", rendered.to_stdout_string());
    Ok(())
}

/// Positional prompt first, then piped stdin; `None` when neither is given.
fn resolve_prompt(cli: &Cli) -> Result<Option<String>, std::io::Error> {
    if let Some(prompt) = &cli.prompt {
        return Ok(Some(prompt.clone()));
    }
    if std::io::stdin().is_terminal() {
        return Ok(None);
    }
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}
