// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::codes::{CONTEXT_START, HEADER_START, LITERAL_START, MUTED_START, RESET};
use super::*;
use serial_test::serial;

#[test]
fn codes_have_expected_values() {
    assert_eq!(codes::HEADER, 74);
    assert_eq!(codes::LITERAL, 250);
    assert_eq!(codes::CONTEXT, 245);
    assert_eq!(codes::MUTED, 240);
}

#[test]
#[serial]
fn should_colorize_respects_no_color() {
    std::env::set_var("NO_COLOR", "1");
    std::env::set_var("COLOR", "1");
    assert!(!should_colorize(), "NO_COLOR=1 should override COLOR=1");
    std::env::remove_var("NO_COLOR");
    std::env::remove_var("COLOR");
}

#[test]
#[serial]
fn should_colorize_respects_color_force() {
    std::env::remove_var("NO_COLOR");
    std::env::set_var("COLOR", "1");
    assert!(should_colorize(), "COLOR=1 should force color on");
    std::env::remove_var("COLOR");
}

#[test]
#[serial]
fn detect_follows_the_environment() {
    std::env::set_var("NO_COLOR", "1");
    assert_eq!(Style::detect().header("x"), "x");
    std::env::remove_var("NO_COLOR");
    std::env::set_var("COLOR", "1");
    assert_eq!(Style::detect().header("x"), format!("{HEADER_START}x{RESET}"));
    std::env::remove_var("COLOR");
}

#[test]
fn colored_helpers_wrap_text() {
    let style = Style::new(true);
    assert_eq!(style.header("h"), format!("{HEADER_START}h{RESET}"));
    assert_eq!(style.literal("l"), format!("{LITERAL_START}l{RESET}"));
    assert_eq!(style.context("c"), format!("{CONTEXT_START}c{RESET}"));
    assert_eq!(style.muted("m"), format!("{MUTED_START}m{RESET}"));
}

#[test]
fn plain_helpers_pass_through() {
    let style = Style::new(false);
    assert_eq!(style.header("h"), "h");
    assert_eq!(style.literal("l"), "l");
    assert_eq!(style.context("c"), "c");
    assert_eq!(style.muted("m"), "m");
}

#[test]
fn empty_text_stays_empty() {
    assert_eq!(Style::new(true).context(""), "");
}

const DIAGNOSTIC: &str = "error: <bogus> not found\n  --> column 13\n   |\n   | tenant acme bogus\n   |             ^^^^^";

#[test]
fn plain_diagnostic_is_unchanged() {
    assert_eq!(Style::new(false).diagnostic(DIAGNOSTIC), DIAGNOSTIC);
}

#[test]
fn colored_diagnostic_paints_label_gutter_and_carets() {
    let styled = Style::new(true).diagnostic(DIAGNOSTIC);
    let lines: Vec<&str> = styled.lines().collect();
    assert_eq!(
        lines[0],
        format!("{HEADER_START}error:{RESET} <bogus> not found")
    );
    assert_eq!(lines[1], format!("{MUTED_START}  -->{RESET} column 13"));
    assert_eq!(lines[2], format!("{MUTED_START}   |{RESET}"));
    assert_eq!(lines[3], format!("{MUTED_START}   |{RESET} tenant acme bogus"));
    assert_eq!(
        lines[4],
        format!("{MUTED_START}   |{RESET}             {HEADER_START}^^^^^{RESET}")
    );
}
