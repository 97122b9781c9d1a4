// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{strs, Fixture};
use crate::error::MatchError;
use crate::value::Value;
use proptest::prelude::*;

fn positional(count: usize) -> Fixture {
    let names: Vec<String> = (0..count).map(|i| format!("a{i}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let source = format!("cmd {}", refs.join(" "));
    Fixture::new(&source, strs(&refs))
}

proptest! {
    #[test]
    fn positional_values_round_trip(values in proptest::collection::vec("[a-z0-9]{1,8}", 1..6)) {
        let fixture = positional(values.len());
        let bound = fixture.bind(&values.join(" ")).unwrap();
        let expected: Vec<Value> = values.iter().map(|v| Value::from(v.as_str())).collect();
        prop_assert_eq!(bound.values().cloned().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn short_lines_are_too_few(count in 2usize..6, given in 0usize..6) {
        prop_assume!(given < count);
        let fixture = positional(count);
        let line = vec!["x"; given].join(" ");
        prop_assert_eq!(
            fixture.bind(&line).unwrap_err(),
            MatchError::TooFewArguments { expected: count, found: given }
        );
    }

    #[test]
    fn long_lines_are_too_many(count in 1usize..5, extra in 1usize..4) {
        let fixture = positional(count);
        let line = vec!["x"; count + extra].join(" ");
        let err = fixture.bind(&line).unwrap_err();
        prop_assert!(
            matches!(err, MatchError::TooManyArguments { .. }),
            "unexpected {:?}",
            err
        );
    }
}

#[test]
fn free_form_loop_reenters_its_own_node() {
    let fixture = Fixture::new("dbg [opts]@", strs(&["opts"]));
    let bound = fixture.bind("a b c d").unwrap();
    assert_eq!(
        bound["opts"],
        Value::List(vec!["a".into(), "b".into(), "c".into(), "d".into()])
    );
}
