//! Property-based tests for the load/save round trip and the section API.

use launcher_ini::{from_str, to_string, Document, Operator, Section};
use proptest::prelude::*;

fn operator() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Assign),
        Just(Operator::Append),
        Just(Operator::Remove),
    ]
}

// Keys never end in '+' or '-', which would read back as part of the operator.
fn key() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_.]{0,11}"
}

// Single-line values without surrounding whitespace or a trailing backslash.
fn value() -> impl Strategy<Value = String> {
    "([A-Za-z0-9?=,:/_.-]([A-Za-z0-9?=,:/_. -]{0,14}[A-Za-z0-9?=,:/_.-])?)?"
}

fn section_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_. ]{0,10}[A-Za-z0-9]"
}

fn document() -> impl Strategy<Value = Document> {
    prop::collection::vec(
        (
            section_name(),
            prop::collection::vec((key(), value(), operator()), 0..8),
        ),
        0..5,
    )
    .prop_map(|sections| {
        let mut doc = Document::new();
        for (name, assignments) in sections {
            let section = doc.append_section(&name);
            for (k, v, op) in assignments {
                section.add(&k, v, op);
            }
        }
        doc
    })
}

proptest! {
    #[test]
    fn prop_single_line_round_trip(doc in document()) {
        let text = to_string(&doc);
        let reread = from_str(&text);
        prop_assert_eq!(reread.sections(), doc.sections());
        prop_assert_eq!(to_string(&reread), text);
    }

    #[test]
    fn prop_add_preserves_append_order(
        k in key(),
        values in prop::collection::vec((value(), operator()), 1..10),
    ) {
        let mut section = Section::new("S");
        for (v, op) in &values {
            section.add(&k, v.as_str(), *op);
        }
        let got: Vec<_> = section
            .get_all(&k.to_uppercase())
            .iter()
            .map(|e| (e.text().to_string(), e.operator()))
            .collect();
        prop_assert_eq!(got, values);
    }

    #[test]
    fn prop_remove_only_drops_matches(
        k in key(),
        values in prop::collection::vec("[abc]", 1..12),
        target in "[abc]",
    ) {
        let mut section = Section::new("S");
        for v in &values {
            section.add(&k, v.as_str(), Operator::Append);
        }
        let expected: Vec<&String> = values.iter().filter(|v| **v != target).collect();

        prop_assert_eq!(section.remove(&k, &target), values.len() - expected.len());

        let remaining: Vec<&str> = section.get_all(&k).iter().map(|e| e.text()).collect();
        prop_assert_eq!(remaining, expected.iter().map(|s| s.as_str()).collect::<Vec<_>>());
        prop_assert_eq!(section.contains_key(&k), !expected.is_empty());
    }

    #[test]
    fn prop_set_leaves_single_entry(
        k in key(),
        before in prop::collection::vec(value(), 0..5),
        v in value(),
    ) {
        let mut section = Section::new("S");
        for b in &before {
            section.add(&k, b.as_str(), Operator::Append);
        }
        section.set(&k.to_lowercase(), v.as_str(), Operator::Assign);

        prop_assert_eq!(section.get_all(&k).len(), 1);
        prop_assert_eq!(section.get_string(&k), Some(v.as_str()));
        prop_assert_eq!(section.len(), 1);
    }
}
