// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line-at-a-time read-eval-print loop.
//!
//! A line ending in `?` is not executed: the loop prints the toolbar help
//! and candidates for the text before the `?` instead.

use crate::color::Style;
use jc_shell::{Outcome, Shell, ShellError};
use std::io::{self, BufRead, Write};

/// How a line went, and whether to keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Failed,
    Exit,
}

pub struct Repl<'s> {
    shell: &'s Shell,
    style: Style,
    quiet: bool,
}

impl<'s> Repl<'s> {
    pub fn new(shell: &'s Shell, style: Style) -> Self {
        Self {
            shell,
            style,
            quiet: false,
        }
    }

    /// Suppress the prompt.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Read lines until `exit` or end of input. Returns how many lines failed.
    pub fn run<R, W, E>(&self, input: R, out: &mut W, err: &mut E) -> io::Result<usize>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut failures = 0;
        let mut lines = input.lines();
        loop {
            self.prompt(out)?;
            let Some(line) = lines.next() else {
                break;
            };
            match self.line(&line?, out, err)? {
                Flow::Continue => {}
                Flow::Failed => failures += 1,
                Flow::Exit => break,
            }
        }
        Ok(failures)
    }

    /// Execute or complete one line.
    pub fn line<W: Write, E: Write>(&self, line: &str, out: &mut W, err: &mut E) -> io::Result<Flow> {
        if let Some(partial) = line.strip_suffix('?') {
            self.complete(partial, out)?;
            return Ok(Flow::Continue);
        }
        match self.shell.execute(line) {
            Ok(Outcome::Output(text)) => {
                writeln!(out, "{text}")?;
                Ok(Flow::Continue)
            }
            Ok(Outcome::Silent) => Ok(Flow::Continue),
            Ok(Outcome::Exit) => Ok(Flow::Exit),
            Err(e) => {
                self.report(line, &e, err)?;
                Ok(Flow::Failed)
            }
        }
    }

    fn prompt<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        write!(out, "{}", self.shell.prompt())?;
        out.flush()
    }

    fn complete<W: Write>(&self, partial: &str, out: &mut W) -> io::Result<()> {
        let completion = self.shell.complete(partial);
        if !completion.toolbar.is_empty() {
            writeln!(out, "{}", self.style.context(&completion.toolbar))?;
        }
        if !completion.candidates.is_empty() {
            let painted: Vec<String> = completion
                .candidates
                .iter()
                .map(|c| self.style.literal(c))
                .collect();
            writeln!(out, "{}", painted.join("  "))?;
        }
        Ok(())
    }

    fn report<E: Write>(&self, line: &str, error: &ShellError, err: &mut E) -> io::Result<()> {
        tracing::debug!(%error, "line failed");
        let text = error
            .diagnostic(line)
            .unwrap_or_else(|| format!("error: {error}"));
        writeln!(err, "{}", self.style.diagnostic(&text))
    }
}

#[cfg(test)]
#[path = "repl_tests.rs"]
mod tests;
