// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::command::Outcome;
use jc_grammar::ParserConfig;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing_subscriber::fmt::MakeWriter;

fn command(name: &str, description: &str) -> Command {
    Command::builder(name, |_| Ok(Outcome::Silent))
        .description(description)
        .build(&ParserConfig::default())
        .unwrap()
}

/// A writer that captures log output for testing
#[derive(Clone, Default)]
struct CapturedLogs {
    logs: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.logs.lock()).to_string()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.logs.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn keeps_registration_order() {
    let mut registry = Registry::new();
    registry.insert(command("tenant", "")).unwrap();
    registry.insert(command("node", "")).unwrap();
    registry.insert(command("leaf", "")).unwrap();
    assert_eq!(registry.names().collect::<Vec<_>>(), ["tenant", "node", "leaf"]);
    assert_eq!(registry.len(), 3);
    assert!(registry.contains("node"));
    assert!(registry.get("dbg").is_none());
}

#[test]
fn duplicates_replace_and_warn() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    let mut registry = Registry::new();
    tracing::subscriber::with_default(subscriber, || {
        registry.insert(command("node", "first")).unwrap();
        registry.insert(command("node", "second")).unwrap();
    });

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get("node").unwrap().description(), "second");
    let output = logs.contents();
    assert!(output.contains("replacing registered command"), "{output}");
}

#[test]
fn duplicates_can_be_rejected() {
    let mut registry = Registry::new().reject_duplicates(true);
    registry.insert(command("node", "first")).unwrap();
    let err = registry.insert(command("node", "second")).unwrap_err();
    assert!(matches!(err, ShellError::DuplicateCommand(ref name) if name == "node"));
    assert_eq!(registry.get("node").unwrap().description(), "first");
}
