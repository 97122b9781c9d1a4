// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn slice_returns_spanned_text() {
    let span = Span::new(5, 9);
    assert_eq!(span.slice("node name"), "name");
}

#[test]
fn slice_out_of_bounds_is_empty() {
    assert_eq!(Span::new(4, 40).slice("node"), "");
}

#[test]
fn merge_covers_both() {
    let merged = Span::new(3, 5).merge(Span::new(1, 4));
    assert_eq!(merged, Span::new(1, 5));
    assert_eq!(merged.len(), 4);
}

#[test]
fn empty_span_has_no_length() {
    let span = Span::empty(7);
    assert!(span.is_empty());
    assert_eq!(span.len(), 0);
}

#[test]
fn snippet_points_at_span() {
    let snippet = context_snippet("node name [nid", Span::new(10, 11));
    assert_eq!(snippet, "node name [nid\n          ^");
}

#[test]
fn snippet_on_empty_span_draws_one_caret() {
    let snippet = context_snippet("leaf", Span::empty(4));
    assert_eq!(snippet, "leaf\n    ^");
}

#[test]
fn diagnostic_reports_one_based_column() {
    let diag = diagnostic_context("dbg name [opts]#", Span::new(15, 16), "bad operator");
    assert!(diag.starts_with("error: bad operator\n"));
    assert!(diag.contains("--> column 16"));
    assert!(diag.contains("   | dbg name [opts]#"));
    assert!(diag.ends_with(&format!("   | {}^", " ".repeat(15))));
}
