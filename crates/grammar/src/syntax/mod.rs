// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Grammar parser that turns a grammar string into rules.
//!
//! ```text
//! grammar  := command (word | <constant>)* group*
//! group    := '[' item* ('|' item+)* ']' operator
//! item     := word | <constant> | group
//! operator := '?' | '*' | '+' | '!' | '@'
//! ```

mod lexer;

use crate::argument::ArgumentSet;
use crate::error::GrammarError;
use crate::rule::{minimum_argument_count, Rule, RuleKind};
use crate::span::Span;
use lexer::{Token, TokenKind};
use serde::{Deserialize, Serialize};

/// Limits applied while parsing a grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Maximum bracket nesting depth (0 = unlimited).
    pub max_nesting_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: 16,
        }
    }
}

/// A parsed grammar: the command name and its top-level rules.
///
/// The rule list always ends with exactly one [`RuleKind::End`].
///
/// # Examples
///
/// ```
/// use jc_grammar::{Grammar, RuleKind};
///
/// let grammar = Grammar::parse("tenant tname [tid]?")?;
/// assert_eq!(grammar.command(), "tenant");
/// let kinds: Vec<_> = grammar.rules().iter().map(|r| r.kind).collect();
/// assert_eq!(kinds, [RuleKind::Required, RuleKind::ZeroOrOne, RuleKind::End]);
/// # Ok::<(), jc_grammar::GrammarError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grammar {
    command: String,
    rules: Vec<Rule>,
    source: String,
}

impl Grammar {
    /// Parse with the default [`ParserConfig`].
    pub fn parse(source: &str) -> Result<Grammar, GrammarError> {
        Grammar::parse_with_config(source, &ParserConfig::default())
    }

    pub fn parse_with_config(source: &str, config: &ParserConfig) -> Result<Grammar, GrammarError> {
        let tokens = lexer::tokenize(source)?;
        let mut parser = Parser {
            tokens,
            pos: 0,
            input_len: source.len(),
            max_depth: config.max_nesting_depth,
        };
        let (command, rules) = parser.parse_grammar()?;
        tracing::debug!(%command, rules = rules.len(), "parsed grammar");
        Ok(Grammar {
            command,
            rules,
            source: source.to_string(),
        })
    }

    /// Grammar for a command declared without one: every argument is
    /// Required, in declaration order.
    pub fn from_arguments(command: &str, args: &ArgumentSet) -> Grammar {
        let mut source = command.to_string();
        let mut rules = Vec::with_capacity(args.len() + 1);
        for (position, name) in args.names().enumerate() {
            source.push(' ');
            let start = source.len();
            source.push_str(name);
            rules.push(Rule::leaf(
                RuleKind::Required,
                position,
                name,
                Span::new(start, source.len()),
            ));
        }
        rules.push(Rule::end(rules.len(), Span::empty(source.len())));
        Grammar {
            command: command.to_string(),
            rules,
            source,
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The grammar string as written.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn minimum_argument_count(&self) -> usize {
        minimum_argument_count(&self.rules)
    }
}

/// Bracket contents before the operator decides how words are classified.
enum Item {
    Leaf {
        name: String,
        constant: bool,
        span: Span,
    },
    Group(Rule),
    Pipe(Span),
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    input_len: usize,
    max_depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<&TokenKind> {
        self.peek().map(|token| &token.kind)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn eof_span(&self) -> Span {
        Span::empty(self.input_len)
    }

    fn unexpected_token(&self, expected: &str) -> GrammarError {
        match self.peek() {
            Some(token) => GrammarError::UnexpectedToken {
                found: token.kind.to_string(),
                expected: expected.to_string(),
                span: token.span,
            },
            None => GrammarError::UnexpectedEnd {
                expected: expected.to_string(),
                span: self.eof_span(),
            },
        }
    }

    /// Grammar: command (word | <constant>)* group*
    fn parse_grammar(&mut self) -> Result<(String, Vec<Rule>), GrammarError> {
        let command = match self.peek_kind() {
            Some(TokenKind::Word(word)) => word.clone(),
            _ => return Err(self.unexpected_token("command name")),
        };
        self.pos += 1;

        let mut rules = Vec::new();
        while let Some(token) = self.peek() {
            let (kind, name) = match &token.kind {
                TokenKind::Word(name) => (RuleKind::Required, name.clone()),
                TokenKind::Constant(name) => (RuleKind::Constant, name.clone()),
                _ => break,
            };
            let span = token.span;
            rules.push(Rule::leaf(kind, rules.len(), name, span));
            self.pos += 1;
        }

        while !self.at_end() {
            match self.peek_kind() {
                Some(TokenKind::LBracket) => {
                    let group = self.parse_group(1, rules.len())?;
                    rules.push(group);
                }
                Some(TokenKind::Word(_) | TokenKind::Constant(_)) => {
                    return Err(self.unexpected_token("'[' (positional arguments come first)"));
                }
                _ => return Err(self.unexpected_token("'['")),
            }
        }

        rules.push(Rule::end(rules.len(), self.eof_span()));
        Ok((command, rules))
    }

    /// Grammar: '[' item* ('|' item+)* ']' operator
    fn parse_group(&mut self, depth: usize, position: usize) -> Result<Rule, GrammarError> {
        let open = match self.peek() {
            Some(token) => token.span,
            None => return Err(self.unexpected_token("'['")),
        };
        self.pos += 1;
        if self.max_depth != 0 && depth > self.max_depth {
            return Err(GrammarError::NestingTooDeep {
                limit: self.max_depth,
                span: open,
            });
        }

        let mut items = Vec::new();
        let close = loop {
            let Some(token) = self.peek() else {
                return Err(GrammarError::UnclosedBracket { span: open });
            };
            let (kind, span) = (token.kind.clone(), token.span);
            let item = match kind {
                TokenKind::RBracket => {
                    self.pos += 1;
                    break span;
                }
                TokenKind::LBracket => {
                    items.push(Item::Group(self.parse_group(depth + 1, 0)?));
                    continue;
                }
                TokenKind::Word(name) => Item::Leaf {
                    name,
                    constant: false,
                    span,
                },
                TokenKind::Constant(name) => Item::Leaf {
                    name,
                    constant: true,
                    span,
                },
                TokenKind::Pipe => Item::Pipe(span),
                TokenKind::Operator(_) => {
                    return Err(self.unexpected_token("argument, '[', '|' or ']'"));
                }
            };
            items.push(item);
            self.pos += 1;
        };

        let (kind, op_span) = match self.peek() {
            Some(Token {
                kind: TokenKind::Operator(op),
                span,
            }) => match RuleKind::from_operator(*op) {
                Some(kind) => (kind, *span),
                None => return Err(GrammarError::MissingOperator { span: *span }),
            },
            _ => {
                return Err(GrammarError::MissingOperator {
                    span: Span::empty(close.end),
                })
            }
        };
        self.pos += 1;

        let rules = alternatives(items, kind, open)?;
        Ok(Rule::group(kind, position, rules, open.merge(op_span)))
    }
}

/// Classify bracket items and number them, restarting after every `|`.
fn alternatives(items: Vec<Item>, kind: RuleKind, open: Span) -> Result<Vec<Rule>, GrammarError> {
    let member = kind.member_kind();
    let mut rules = Vec::with_capacity(items.len());
    let mut position = 0;
    let mut last_separator = open;

    for item in items {
        match item {
            Item::Pipe(span) => {
                if position == 0 {
                    return Err(GrammarError::EmptyAlternative { span });
                }
                position = 0;
                last_separator = span;
            }
            Item::Leaf {
                name,
                constant,
                span,
            } => {
                let kind = if constant { RuleKind::Constant } else { member };
                rules.push(Rule::leaf(kind, position, name, span));
                position += 1;
            }
            Item::Group(mut group) => {
                group.position = position;
                rules.push(group);
                position += 1;
            }
        }
    }

    if position == 0 {
        return Err(GrammarError::EmptyAlternative {
            span: last_separator,
        });
    }
    Ok(rules)
}

#[cfg(test)]
#[path = "../syntax_tests/mod.rs"]
mod tests;
