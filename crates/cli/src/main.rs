// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! jc - grammar-driven command shell

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod color;
mod demo;
mod env;
mod exit_error;
mod repl;

use anyhow::Result;
use clap::Parser;
use jc_shell::{Shell, ShellConfig};
use std::io;
use std::path::PathBuf;

use crate::color::Style;
use crate::exit_error::ExitError;
use crate::repl::{Flow, Repl};

#[derive(Parser, Debug)]
#[command(
    name = "jc",
    version,
    about = "Grammar-driven interactive command shell",
    after_help = "End a line with '?' to list what can come next instead of running it."
)]
struct Cli {
    /// Shell config file (TOML). Defaults to $JC_CONFIG
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Prompt text. Overrides the config file and $JC_PROMPT
    #[arg(long, value_name = "TEXT")]
    prompt: Option<String>,

    /// Run one line and exit
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    command: Option<String>,

    /// Do not print the prompt
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    if let Err(e) = run() {
        let code = e.downcast_ref::<ExitError>().map_or(1, |c| c.code);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(code);
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain to avoid noisy duplicate output (common when
/// thiserror variants use `#[error("... {0}")]` with `#[from]`).
/// Otherwise we render the full chain so context isn't lost.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

/// Log to stderr so command output on stdout stays clean.
/// Filter: JC_LOG > RUST_LOG > "warn".
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = env::log_filter()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .try_init();
}

/// Config file from `--config` or $JC_CONFIG, prompt from `--prompt` or
/// $JC_PROMPT.
fn load_config(cli: &Cli) -> Result<ShellConfig> {
    let path = cli.config.clone().or_else(env::config_path);
    let mut config = match path {
        Some(path) => ShellConfig::load(&path)?,
        None => ShellConfig::default(),
    };
    if let Some(prompt) = cli.prompt.clone().or_else(env::prompt) {
        config.prompt = prompt;
    }
    Ok(config)
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();

    let mut shell = Shell::new(load_config(&cli)?)?;
    demo::register(&mut shell)?;

    let repl = Repl::new(&shell, Style::detect()).quiet(cli.quiet);
    let stdout = io::stdout();
    let stderr = io::stderr();

    if let Some(line) = &cli.command {
        let flow = repl.line(line, &mut stdout.lock(), &mut stderr.lock())?;
        if flow == Flow::Failed {
            return Err(ExitError::new(1, String::new()).into());
        }
        return Ok(());
    }

    let failures = repl.run(io::stdin().lock(), &mut stdout.lock(), &mut stderr.lock())?;
    tracing::debug!(failures, "input finished");
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
