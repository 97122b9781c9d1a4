// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{int, output, shell, Command, Invocation, Outcome, Shell, ShellConfig, ShellError};
use jc_grammar::{Argument, LexerError, MatchError, Span, Str};

#[yare::parameterized(
    positional_and_default = { "tenant acme", "tname=acme tid=0" },
    flag_value = { "tenant acme -tid 7", "tname=acme tid=7" },
    named_value = { "tenant acme tid=7", "tname=acme tid=7" },
    quoted = { r#"tenant "big co""#, "tname=big co tid=0" },
    second_alternative = { "node n1 -nsig abc", "name=n1 nid=0 nsig=abc" },
    repeated_group = { "leaf l1 -lid 1 -laddr a -lid 2 -laddr b", "name=l1 lid=[1, 2] laddr=[a, b]" },
)]
fn executes(line: &str, expected: &str) {
    assert_eq!(output(shell().execute(line).unwrap()), expected);
}

#[test]
fn blank_lines_do_nothing() {
    let shell = shell();
    assert_eq!(shell.execute("").unwrap(), Outcome::Silent);
    assert_eq!(shell.execute("   ").unwrap(), Outcome::Silent);
}

#[test]
fn unknown_command() {
    let err = shell().execute("frobnicate now").unwrap_err();
    assert!(matches!(err, ShellError::UnknownCommand(ref name) if name == "frobnicate"));
}

#[test]
fn spans_count_from_the_start_of_the_line() {
    let err = shell().execute("tenant acme bogus").unwrap_err();
    assert!(
        matches!(
            err,
            ShellError::Match(MatchError::TooManyArguments { span, .. }) if span == Span::new(12, 17)
        ),
        "got {err:?}"
    );
}

#[test]
fn conversion_errors_name_the_argument() {
    let line = "node n1 -nid twelve";
    let err = shell().execute(line).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid value 'twelve' for <nid>: 'twelve' is not a number"
    );
    let diagnostic = err.diagnostic(line).unwrap();
    assert!(diagnostic.ends_with("   | node n1 -nid twelve\n   |              ^^^^^^"));
}

#[test]
fn one_or_more_needs_a_pass() {
    let err = shell().execute("leaf l1").unwrap_err();
    assert!(matches!(
        err,
        ShellError::Match(MatchError::TooFewArguments {
            expected: 2,
            found: 1
        })
    ));
}

#[test]
fn unterminated_quote_is_an_error() {
    let err = shell().execute(r#"tenant "acme"#).unwrap_err();
    assert!(matches!(
        err,
        ShellError::Lexer(LexerError::UnterminatedDoubleQuote { .. })
    ));
}

#[test]
fn handler_errors_are_returned() {
    let err = shell().execute("fail").unwrap_err();
    assert_eq!(err.to_string(), "fail: it broke");
}

#[test]
fn shell_survives_errors() {
    let shell = shell();
    assert!(shell.execute("node").is_err());
    assert!(shell.execute("nope").is_err());
    assert_eq!(output(shell.execute("node n1").unwrap()), "name=n1 nid=0 nsig=");
}

#[test]
fn handlers_see_typed_values_and_the_line() {
    let mut shell = Shell::new(ShellConfig::default()).unwrap();
    shell
        .register(
            Command::builder("sum", |inv: &Invocation<'_>| {
                let total: i64 = inv.items("n").iter().filter_map(|v| v.as_int()).sum();
                Ok(Outcome::Output(format!("{} -> {total}", inv.line())))
            })
            .grammar("sum [n]+")
            .arg(Argument::new("n", jc_grammar::Int)),
        )
        .unwrap();
    assert_eq!(
        output(shell.execute("sum -n 1 n=2 -n 3").unwrap()),
        "sum -n 1 n=2 -n 3 -> 6"
    );
}

#[test]
fn handlers_can_fill_the_cache() {
    let shell = shell();
    shell.execute("tenant acme").unwrap();
    assert_eq!(shell.cache().get("tenants").unwrap(), ["acme"]);
    assert_eq!(shell.complete("tenant ac").candidates, ["acme"]);
}

#[test]
fn lines_run_concurrently() {
    let shell = shell();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8i64)
            .map(|i| {
                let shell = &shell;
                scope.spawn(move || shell.execute(&format!("node n{i} -nid {i}")))
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let text = output(handle.join().unwrap().unwrap());
            assert_eq!(text, format!("name=n{i} nid={} nsig=", int(i as i64)));
        }
    });
}

#[test]
fn registration_replaces_by_default() {
    let mut shell = shell();
    shell
        .register(
            Command::builder("node", |_| Ok(Outcome::Output("replaced".into())))
                .arg(Argument::new("name", Str)),
        )
        .unwrap();
    assert_eq!(output(shell.execute("node n1").unwrap()), "replaced");
}

#[test]
fn registration_can_reject_duplicates() {
    let mut shell = Shell::new(ShellConfig {
        reject_duplicate_commands: true,
        ..ShellConfig::default()
    })
    .unwrap();
    let err = shell
        .register(Command::builder("help", |_| Ok(Outcome::Silent)))
        .unwrap_err();
    assert!(matches!(err, ShellError::DuplicateCommand(ref name) if name == "help"));
}
