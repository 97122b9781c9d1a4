// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A command's grammar, arguments and parse tree compiled together.

use crate::argtype::CompletionContext;
use crate::argument::{ArgumentSet, Bindings};
use crate::error::{GrammarError, MatchError};
use crate::input::InputToken;
use crate::matcher::{Matcher, Suggestions};
use crate::syntax::{Grammar, ParserConfig};
use crate::tree::{build, ParseTree};

/// Everything needed to match and complete one command.
///
/// Compiled once at registration and never changed afterwards.
#[derive(Debug, Clone)]
pub struct CommandSyntax {
    grammar: Grammar,
    args: ArgumentSet,
    tree: ParseTree,
}

impl CommandSyntax {
    /// Parse `source` and build its tree against `args`.
    ///
    /// # Examples
    ///
    /// ```
    /// use jc_grammar::{tokenize, Argument, ArgumentSet, CommandSyntax, Int, Str};
    ///
    /// let args = ArgumentSet::new()
    ///     .with(Argument::new("tname", Str))?
    ///     .with(Argument::new("tid", Int).default_value(0))?;
    /// let syntax = CommandSyntax::compile("tenant tname [tid]?", args)?;
    /// assert_eq!(syntax.command(), "tenant");
    ///
    /// let bound = syntax.bind(&tokenize("acme -tid 7").unwrap()).unwrap();
    /// assert_eq!(bound.get("tid").and_then(|v| v.as_int()), Some(7));
    /// # Ok::<(), jc_grammar::GrammarError>(())
    /// ```
    pub fn compile(source: &str, args: ArgumentSet) -> Result<Self, GrammarError> {
        Self::compile_with_config(source, args, &ParserConfig::default())
    }

    pub fn compile_with_config(
        source: &str,
        args: ArgumentSet,
        config: &ParserConfig,
    ) -> Result<Self, GrammarError> {
        let grammar = Grammar::parse_with_config(source, config)?;
        Self::from_grammar(grammar, args)
    }

    /// A command with no grammar: its arguments are all positional.
    pub fn from_arguments(command: &str, args: ArgumentSet) -> Result<Self, GrammarError> {
        let grammar = Grammar::from_arguments(command, &args);
        Self::from_grammar(grammar, args)
    }

    fn from_grammar(grammar: Grammar, args: ArgumentSet) -> Result<Self, GrammarError> {
        let tree = build(&args, grammar.rules())?;
        Ok(Self {
            grammar,
            args,
            tree,
        })
    }

    pub fn command(&self) -> &str {
        self.grammar.command()
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn arguments(&self) -> &ArgumentSet {
        &self.args
    }

    pub fn tree(&self) -> &ParseTree {
        &self.tree
    }

    pub fn matcher(&self) -> Matcher<'_> {
        Matcher::new(&self.tree, &self.args, self.grammar.rules())
    }

    /// Match argument tokens (command name excluded).
    pub fn bind(&self, tokens: &[InputToken]) -> Result<Bindings<'_>, MatchError> {
        self.matcher().match_tokens(tokens)
    }

    /// Suggestions for the token after `committed` (command name excluded).
    pub fn suggest(
        &self,
        committed: &[InputToken],
        partial: &str,
        ctx: &CompletionContext<'_>,
    ) -> Suggestions {
        self.matcher().suggest(committed, partial, ctx)
    }
}

#[cfg(test)]
#[path = "compiled_tests.rs"]
mod tests;
