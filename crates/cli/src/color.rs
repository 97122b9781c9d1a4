// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::IsTerminal;

pub mod codes {
    /// Error labels and carets: pastel cyan / steel blue
    pub const HEADER: u8 = 74;
    /// Candidates and literals: light grey
    pub const LITERAL: u8 = 250;
    /// Toolbar help: medium grey
    pub const CONTEXT: u8 = 245;
    /// Diagnostic gutter: darker grey
    pub const MUTED: u8 = 240;

    /// Pre-formatted ANSI escape sequences for use in tests
    #[cfg(test)]
    pub const HEADER_START: &str = "\x1b[38;5;74m";
    #[cfg(test)]
    pub const LITERAL_START: &str = "\x1b[38;5;250m";
    #[cfg(test)]
    pub const CONTEXT_START: &str = "\x1b[38;5;245m";
    #[cfg(test)]
    pub const MUTED_START: &str = "\x1b[38;5;240m";
    #[cfg(test)]
    pub const RESET: &str = "\x1b[0m";
}

/// Determine if color output should be enabled.
///
/// Priority: `NO_COLOR=1` disables → `COLOR=1` forces → TTY check.
pub fn should_colorize() -> bool {
    if crate::env::no_color() {
        return false;
    }
    if crate::env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

const RESET: &str = "\x1b[0m";

/// Paints REPL output in the shared palette, or passes text through
/// unchanged when color is off.
#[derive(Debug, Clone, Copy)]
pub struct Style {
    colorize: bool,
}

impl Style {
    pub fn new(colorize: bool) -> Self {
        Self { colorize }
    }

    /// Decide once from the environment and terminal.
    pub fn detect() -> Self {
        Self::new(should_colorize())
    }

    fn paint(&self, code: u8, text: &str) -> String {
        if self.colorize && !text.is_empty() {
            format!("{}{text}{RESET}", fg256(code))
        } else {
            text.to_string()
        }
    }

    pub fn header(&self, text: &str) -> String {
        self.paint(codes::HEADER, text)
    }

    pub fn literal(&self, text: &str) -> String {
        self.paint(codes::LITERAL, text)
    }

    pub fn context(&self, text: &str) -> String {
        self.paint(codes::CONTEXT, text)
    }

    pub fn muted(&self, text: &str) -> String {
        self.paint(codes::MUTED, text)
    }

    /// Style a rustc-style diagnostic: the `error:` label and carets in the
    /// header color, the `-->` and `|` gutter muted.
    pub fn diagnostic(&self, text: &str) -> String {
        if !self.colorize {
            return text.to_string();
        }
        let lines: Vec<String> = text.lines().map(|line| self.diagnostic_line(line)).collect();
        lines.join("\n")
    }

    fn diagnostic_line(&self, line: &str) -> String {
        if let Some(rest) = line.strip_prefix("error:") {
            return format!("{}{rest}", self.header("error:"));
        }
        if let Some(rest) = line.strip_prefix("  -->") {
            return format!("{}{rest}", self.muted("  -->"));
        }
        if let Some(rest) = line.strip_prefix("   |") {
            let gutter = self.muted("   |");
            let is_caret = !rest.trim().is_empty() && rest.trim().chars().all(|c| c == '^');
            if is_caret {
                let indent = rest.len() - rest.trim_start().len();
                return format!("{gutter}{}{}", &rest[..indent], self.header(rest.trim_start()));
            }
            return format!("{gutter}{rest}");
        }
        line.to_string()
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
