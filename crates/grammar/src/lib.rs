// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Grammar-driven command line parsing.
//!
//! A command is declared with a grammar string and a set of typed
//! arguments. The grammar is parsed into rules, the rules are compiled into
//! a parse tree, and input lines are matched against that tree to produce
//! bound values or completion suggestions.
//!
//! # Quick Start
//!
//! ```
//! use jc_grammar::{tokenize, Argument, ArgumentSet, CommandSyntax, Int, Str, Value};
//!
//! let args = ArgumentSet::new()
//!     .with(Argument::new("name", Str))?
//!     .with(Argument::new("nid", Int).default_value(0))?
//!     .with(Argument::new("nsig", Str).default_value(""))?;
//! let syntax = CommandSyntax::compile("node name [nid|nsig]?", args)?;
//!
//! let bound = syntax.bind(&tokenize("n1 -nsig abc").unwrap()).unwrap();
//! assert_eq!(bound.get("nsig"), Some(&Value::from("abc")));
//! assert_eq!(bound.get("nid"), Some(&Value::Int(0)));
//! # Ok::<(), jc_grammar::GrammarError>(())
//! ```
//!
//! # Grammar Notation
//!
//! ```text
//! command f1 <LIT> [f2|f3]? [f4 f5]* [f6]+ [f7|f8]! [rest]@
//! ```
//!
//! - bare words are positional arguments
//! - `<LIT>` is a literal token
//! - `[...]?` zero or one, `[...]*` zero or more, `[...]+` one or more,
//!   `[...]!` exactly one, `[...]@` free-form
//! - `|` separates alternatives inside a group
//!
//! Inside `?`, `*`, `+` and `!` groups a member is given as `-name value` or
//! `name=value`. Free-form members take tokens as they come.

mod argtype;
mod argument;
mod compiled;
mod error;
mod input;
mod matcher;
mod rule;
mod span;
mod syntax;
mod tree;
mod value;

pub use argtype::{
    ArgType, CandidateSource, Choice, CompletionContext, ConversionError, Dynamic, Int, Map,
    Prefix, Str,
};
pub use argument::{ArgId, Argument, ArgumentSet, Bindings};
pub use compiled::CommandSyntax;
pub use error::{GrammarError, MatchError};
pub use input::{split_partial, tokenize, tokenize_lenient, InputToken, LexerError};
pub use matcher::{Matcher, Suggestions};
pub use rule::{minimum_argument_count, Payload, Rule, RuleKind};
pub use span::{context_snippet, diagnostic_context, Span};
pub use syntax::{Grammar, ParserConfig};
pub use tree::{build, Edge, Frontier, Node, NodeId, NodeKind, ParseTree};
pub use value::{Repeat, Value};
