// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Grammar-string lexer.

use crate::error::GrammarError;
use crate::span::Span;
use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TokenKind {
    Word(String),
    Constant(String),
    LBracket,
    RBracket,
    Pipe,
    Operator(char),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Word(word) => write!(f, "word '{word}'"),
            TokenKind::Constant(word) => write!(f, "constant <{word}>"),
            TokenKind::LBracket => f.write_str("'['"),
            TokenKind::RBracket => f.write_str("']'"),
            TokenKind::Pipe => f.write_str("'|'"),
            TokenKind::Operator(op) => write!(f, "operator '{op}'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// Characters allowed in command and argument names.
pub(crate) fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.')
}

fn take_word(chars: &mut Peekable<CharIndices<'_>>) -> String {
    let mut word = String::new();
    while let Some(&(_, ch)) = chars.peek() {
        if !is_word_char(ch) {
            break;
        }
        word.push(ch);
        chars.next();
    }
    word
}

pub(crate) fn tokenize(input: &str) -> Result<Vec<Token>, GrammarError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(start, ch)) = chars.peek() {
        let single = match ch {
            '[' => Some(TokenKind::LBracket),
            ']' => Some(TokenKind::RBracket),
            '|' => Some(TokenKind::Pipe),
            '?' | '*' | '+' | '!' | '@' => Some(TokenKind::Operator(ch)),
            _ => None,
        };
        if let Some(kind) = single {
            chars.next();
            tokens.push(Token {
                kind,
                span: Span::new(start, start + 1),
            });
            continue;
        }

        if ch.is_whitespace() {
            chars.next();
        } else if ch == '<' {
            chars.next();
            let name = take_word(&mut chars);
            match chars.next() {
                Some((end, '>')) if !name.is_empty() => tokens.push(Token {
                    kind: TokenKind::Constant(name),
                    span: Span::new(start, end + 1),
                }),
                _ => {
                    return Err(GrammarError::MalformedConstant {
                        span: Span::new(start, start + 1),
                    })
                }
            }
        } else if is_word_char(ch) {
            let word = take_word(&mut chars);
            let span = Span::new(start, start + word.len());
            tokens.push(Token {
                kind: TokenKind::Word(word),
                span,
            });
        } else {
            return Err(GrammarError::UnexpectedCharacter {
                ch,
                span: Span::new(start, start + ch.len_utf8()),
            });
        }
    }

    Ok(tokens)
}
