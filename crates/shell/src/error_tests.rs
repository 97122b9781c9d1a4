// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use jc_grammar::Span;

#[test]
fn match_errors_point_into_the_line() {
    let line = "tenant acme bogus";
    let err = ShellError::from(MatchError::TooManyArguments {
        token: "bogus".to_string(),
        span: Span::new(12, 17),
    });
    similar_asserts::assert_eq!(
        err.diagnostic(line).unwrap(),
        "error: too many arguments: <bogus>\n  --> column 13\n   |\n   | tenant acme bogus\n   |             ^^^^^"
    );
}

#[test]
fn lexer_errors_point_at_the_quote() {
    let line = r#"tenant "acme"#;
    let err = ShellError::from(LexerError::UnterminatedDoubleQuote {
        span: Span::new(7, 12),
    });
    let diagnostic = err.diagnostic(line).unwrap();
    assert!(diagnostic.contains("column 8"), "{diagnostic}");
}

#[test]
fn errors_without_location_have_no_diagnostic() {
    let err = ShellError::UnknownCommand("nope".to_string());
    assert_eq!(err.diagnostic("nope"), None);
    assert_eq!(err.to_string(), "unknown command: nope");
}

#[test]
fn invalid_grammar_shows_the_grammar() {
    let err = ShellError::InvalidGrammar {
        command: "node".to_string(),
        inner: Box::new(GrammarError::UnclosedBracket {
            span: Span::new(10, 11),
        }),
        source_text: "node name [nid|nsig".to_string(),
    };
    let text = err.to_string();
    assert!(text.starts_with("invalid grammar for 'node':\nerror: "), "{text}");
    assert!(text.contains("   | node name [nid|nsig\n   |           ^"), "{text}");
}

#[test]
fn handler_errors_name_the_command() {
    assert_eq!(
        ShellError::handler("tenant", "no such tenant").to_string(),
        "tenant: no such tenant"
    );
}
