// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Grammar-definition and input-matching errors.

use crate::span::{context_snippet, diagnostic_context, Span};
use thiserror::Error;

/// Errors raised while compiling a grammar string into rules and a parse tree.
///
/// These indicate a mistake by the command author, so hosts surface them at
/// registration time rather than at the prompt.
///
/// # Examples
///
/// ```
/// use jc_grammar::{Grammar, GrammarError};
///
/// let result = Grammar::parse("node name [nid|nsig");
/// assert!(matches!(result, Err(GrammarError::UnclosedBracket { .. })));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// A character that has no meaning in the grammar DSL.
    #[error("unexpected character '{ch}' at position {}", span.start)]
    UnexpectedCharacter {
        /// The offending character.
        ch: char,
        /// Location in the grammar string.
        span: Span,
    },

    /// A `<literal` without its closing `>`, or an empty `<>`.
    #[error("malformed constant at position {}", span.start)]
    MalformedConstant {
        /// Location of the opening `<`.
        span: Span,
    },

    /// A token that doesn't fit the grammar at this point.
    #[error("unexpected {found} at position {}, expected {expected}", span.start)]
    UnexpectedToken {
        /// Description of the token that was found.
        found: String,
        /// Description of what was expected.
        expected: String,
        /// Location in the grammar string.
        span: Span,
    },

    /// The grammar string ended early.
    #[error("unexpected end of grammar, expected {expected}")]
    UnexpectedEnd {
        /// Description of what was expected.
        expected: String,
        /// Empty span at the end of the grammar string.
        span: Span,
    },

    /// A `[` that is never closed.
    #[error("unbalanced '[' at position {}", span.start)]
    UnclosedBracket {
        /// Location of the opening bracket.
        span: Span,
    },

    /// A `]` not followed by one of `? * + ! @`.
    #[error("missing group operator after ']' at position {}, expected one of ? * + ! @", span.start)]
    MissingOperator {
        /// Location right after the closing bracket.
        span: Span,
    },

    /// A group or an alternative with nothing in it, e.g. `[]?` or `[a|]?`.
    #[error("empty group alternative at position {}", span.start)]
    EmptyAlternative {
        /// Location of the enclosing bracket or separator.
        span: Span,
    },

    /// Brackets nested deeper than the configured limit.
    #[error("groups nested deeper than {limit} levels at position {}", span.start)]
    NestingTooDeep {
        /// The configured limit.
        limit: usize,
        /// Location of the bracket that crossed the limit.
        span: Span,
    },

    /// An End rule inside a bracketed group.
    #[error("end rule nested inside a group")]
    NestedEnd,

    /// A rule following the End rule in a sequence.
    #[error("rule '{rule}' follows the end rule")]
    RuleAfterEnd {
        /// Name or operator of the trailing rule.
        rule: String,
    },

    /// The grammar names an argument that was never declared.
    #[error("grammar names undeclared argument <{name}>")]
    UndeclaredArgument {
        /// The unknown argument name.
        name: String,
        /// Location in the grammar string.
        span: Span,
    },

    /// Two arguments share a name in one argument set.
    #[error("duplicate argument name: {name}")]
    DuplicateArgument {
        /// The repeated name.
        name: String,
    },

    /// An argument-bearing node was attached under a second parent.
    #[error("node '{label}' already has a parent")]
    Reparent {
        /// Label of the node.
        label: String,
    },

    /// Something tried to hang a child off the End node.
    #[error("the end node cannot have children")]
    ChildOfEnd,

    /// A second Start or End node in one tree.
    #[error("a parse tree has exactly one {kind} node")]
    DuplicateSentinel {
        /// `start` or `end`.
        kind: &'static str,
    },
}

impl GrammarError {
    /// Get the span in the grammar string associated with this error, if any.
    pub fn span(&self) -> Option<Span> {
        match self {
            GrammarError::UnexpectedCharacter { span, .. }
            | GrammarError::MalformedConstant { span }
            | GrammarError::UnexpectedToken { span, .. }
            | GrammarError::UnexpectedEnd { span, .. }
            | GrammarError::UnclosedBracket { span }
            | GrammarError::MissingOperator { span }
            | GrammarError::EmptyAlternative { span }
            | GrammarError::NestingTooDeep { span, .. }
            | GrammarError::UndeclaredArgument { span, .. } => Some(*span),
            GrammarError::NestedEnd
            | GrammarError::RuleAfterEnd { .. }
            | GrammarError::DuplicateArgument { .. }
            | GrammarError::Reparent { .. }
            | GrammarError::ChildOfEnd
            | GrammarError::DuplicateSentinel { .. } => None,
        }
    }

    /// Snippet of the grammar with carets under the error location.
    pub fn context(&self, grammar: &str) -> Option<String> {
        Some(context_snippet(grammar, self.span()?))
    }

    /// Rich diagnostic with column info, or `None` if no span.
    pub fn diagnostic(&self, grammar: &str) -> Option<String> {
        Some(diagnostic_context(grammar, self.span()?, &self.to_string()))
    }
}

/// Errors raised while matching a tokenized input line against a parse tree.
///
/// None of these are fatal; the host reports them and keeps prompting.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Fewer tokens than the grammar's minimum argument count.
    #[error("too few arguments: expected at least {expected}, got {found}")]
    TooFewArguments {
        /// Minimum number of tokens the grammar needs.
        expected: usize,
        /// Number of tokens supplied.
        found: usize,
    },

    /// A token that no reachable node accepts.
    #[error("<{token}> not found")]
    UnknownArgument {
        /// The offending token.
        token: String,
        /// Location in the input line.
        span: Span,
    },

    /// A bare token left over once only the end of the command is reachable.
    #[error("too many arguments: <{token}>")]
    TooManyArguments {
        /// The first extra token.
        token: String,
        /// Location in the input line.
        span: Span,
    },

    /// Input ran out before the end of the command, or a mandatory argument
    /// never received a value.
    #[error("mandatory argument <{name}> not present")]
    MandatoryArgumentMissing {
        /// The missing argument, or `a|b` when any one of several would do.
        name: String,
    },

    /// An argument type rejected a raw value.
    #[error("invalid value '{value}' for <{name}>: {reason}")]
    TypeConversion {
        /// Argument name.
        name: String,
        /// The raw value as typed.
        value: String,
        /// Why the type rejected it.
        reason: String,
        /// Location in the input line.
        span: Span,
    },
}

impl MatchError {
    /// Get the span in the input line associated with this error, if any.
    pub fn span(&self) -> Option<Span> {
        match self {
            MatchError::UnknownArgument { span, .. }
            | MatchError::TooManyArguments { span, .. }
            | MatchError::TypeConversion { span, .. } => Some(*span),
            MatchError::TooFewArguments { .. } | MatchError::MandatoryArgumentMissing { .. } => {
                None
            }
        }
    }

    /// Rich diagnostic pointing into the input line, or `None` if no span.
    pub fn diagnostic(&self, line: &str) -> Option<String> {
        Some(diagnostic_context(line, self.span()?, &self.to_string()))
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
