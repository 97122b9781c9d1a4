// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell-like tokenization of input lines.
//!
//! Whitespace separates tokens. Double quotes group text containing spaces
//! (with `\"` and `\\` escapes); single quotes group text literally. Quoted
//! and unquoted parts written together join into one token.

use crate::span::Span;
use thiserror::Error;

/// Lexer errors for input lines.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexerError {
    /// A `"` with no closing quote.
    #[error("unterminated double quote at position {}", span.start)]
    UnterminatedDoubleQuote {
        /// From the opening quote to the end of the line.
        span: Span,
    },

    /// A `'` with no closing quote.
    #[error("unterminated single quote at position {}", span.start)]
    UnterminatedSingleQuote {
        /// From the opening quote to the end of the line.
        span: Span,
    },
}

impl LexerError {
    pub fn span(&self) -> Span {
        match self {
            LexerError::UnterminatedDoubleQuote { span }
            | LexerError::UnterminatedSingleQuote { span } => *span,
        }
    }
}

/// One token of an input line, unquoted, with its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputToken {
    pub value: String,
    pub span: Span,
}

impl InputToken {
    pub fn new(value: impl Into<String>, span: Span) -> Self {
        Self {
            value: value.into(),
            span,
        }
    }
}

/// Tokenize a line for execution. Unbalanced quotes are an error.
///
/// # Examples
///
/// ```
/// use jc_grammar::tokenize;
///
/// let tokens = tokenize(r#"node -f2 "custom f2""#)?;
/// let values: Vec<_> = tokens.iter().map(|t| t.value.as_str()).collect();
/// assert_eq!(values, ["node", "-f2", "custom f2"]);
/// # Ok::<(), jc_grammar::LexerError>(())
/// ```
pub fn tokenize(line: &str) -> Result<Vec<InputToken>, LexerError> {
    Tokenizer::new(line, true).run()
}

/// Tokenize a partial line for completion. An unterminated quote closes at
/// the end of the line.
pub fn tokenize_lenient(line: &str) -> Vec<InputToken> {
    Tokenizer::new(line, false).run().unwrap_or_default()
}

struct Tokenizer<'a> {
    line: &'a str,
    strict: bool,
    tokens: Vec<InputToken>,
    current: String,
    start: Option<usize>,
}

impl<'a> Tokenizer<'a> {
    fn new(line: &'a str, strict: bool) -> Self {
        Self {
            line,
            strict,
            tokens: Vec::new(),
            current: String::new(),
            start: None,
        }
    }

    fn begin(&mut self, pos: usize) {
        if self.start.is_none() {
            self.start = Some(pos);
        }
    }

    fn finish(&mut self, end: usize) {
        if let Some(start) = self.start.take() {
            let value = std::mem::take(&mut self.current);
            self.tokens.push(InputToken::new(value, Span::new(start, end)));
        }
    }

    fn run(mut self) -> Result<Vec<InputToken>, LexerError> {
        let mut chars = self.line.char_indices().peekable();

        while let Some((pos, ch)) = chars.next() {
            match ch {
                c if c.is_whitespace() => self.finish(pos),
                '"' => {
                    self.begin(pos);
                    let mut closed = false;
                    while let Some((_, c)) = chars.next() {
                        match c {
                            '"' => {
                                closed = true;
                                break;
                            }
                            '\\' => match chars.peek() {
                                Some(&(_, next @ ('"' | '\\'))) => {
                                    self.current.push(next);
                                    chars.next();
                                }
                                _ => self.current.push('\\'),
                            },
                            c => self.current.push(c),
                        }
                    }
                    if !closed && self.strict {
                        return Err(LexerError::UnterminatedDoubleQuote {
                            span: Span::new(pos, self.line.len()),
                        });
                    }
                }
                '\'' => {
                    self.begin(pos);
                    let mut closed = false;
                    for (_, c) in chars.by_ref() {
                        if c == '\'' {
                            closed = true;
                            break;
                        }
                        self.current.push(c);
                    }
                    if !closed && self.strict {
                        return Err(LexerError::UnterminatedSingleQuote {
                            span: Span::new(pos, self.line.len()),
                        });
                    }
                }
                '\\' => {
                    self.begin(pos);
                    match chars.next() {
                        Some((_, next)) => self.current.push(next),
                        None => self.current.push('\\'),
                    }
                }
                c => {
                    self.begin(pos);
                    self.current.push(c);
                }
            }
        }

        self.finish(self.line.len());
        Ok(self.tokens)
    }
}

/// Split a completion buffer into committed tokens and the token being typed.
///
/// The partial token is empty when the buffer ends in whitespace.
pub fn split_partial(line: &str) -> (Vec<InputToken>, String) {
    let mut tokens = tokenize_lenient(line);
    match tokens.last() {
        Some(last) if last.span.end == line.len() => {
            let partial = tokens.pop().map(|t| t.value).unwrap_or_default();
            (tokens, partial)
        }
        _ => (tokens, String::new()),
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
