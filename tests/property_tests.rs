//! Property-based tests over generated values
//!
//! Keys are drawn from an alphabet without `.`, `:` and `;` so that token
//! paths can be compared structurally.

use proptest::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use toon_flat::{flatten, to_string, to_value, Number, ToonMap, ToonValue};

fn leaf() -> impl Strategy<Value = ToonValue> {
    prop_oneof![
        Just(ToonValue::Null),
        Just(ToonValue::Undefined),
        any::<bool>().prop_map(ToonValue::Bool),
        any::<i64>().prop_map(|n| ToonValue::Number(Number::Integer(n))),
        (-1.0e9f64..1.0e9).prop_map(|f| ToonValue::Number(Number::Float(f))),
        "[a-zA-Z0-9 ]{0,12}".prop_map(ToonValue::String),
    ]
}

fn value() -> impl Strategy<Value = ToonValue> {
    leaf().prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(ToonValue::Array),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..6).prop_map(|fields| {
                let mut map = ToonMap::new();
                for (key, value) in fields {
                    map.insert(key, value);
                }
                ToonValue::Object(map)
            }),
        ]
    })
}

fn leaf_count(value: &ToonValue) -> usize {
    match value {
        ToonValue::Array(items) => items.iter().map(leaf_count).sum(),
        ToonValue::Object(map) => map.values().map(leaf_count).sum(),
        _ => 1,
    }
}

proptest! {
    #[test]
    fn prop_deterministic(v in value()) {
        let first = flatten(&v).unwrap().to_string();
        let second = flatten(&v).unwrap().to_string();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_one_token_per_leaf(v in value()) {
        let doc = flatten(&v).unwrap();
        prop_assert_eq!(doc.len(), leaf_count(&v));
    }

    #[test]
    fn prop_serde_path_matches_value_path(v in value()) {
        prop_assert_eq!(to_string(&v).unwrap(), flatten(&v).unwrap().to_string());
    }

    #[test]
    fn prop_paths_are_distinct(v in value()) {
        let doc = flatten(&v).unwrap();
        let mut paths: Vec<String> = doc.iter().map(|t| t.path.to_string()).collect();
        let total = paths.len();
        paths.sort();
        paths.dedup();
        prop_assert_eq!(paths.len(), total);
    }

    #[test]
    fn prop_array_indices_in_order(items in prop::collection::vec(any::<i32>(), 0..30)) {
        let doc = flatten(&to_value(&items).unwrap()).unwrap();
        prop_assert_eq!(doc.len(), items.len());
        for (i, (token, item)) in doc.iter().zip(&items).enumerate() {
            prop_assert_eq!(token.path.to_string(), i.to_string());
            prop_assert_eq!(&token.value, &item.to_string());
        }
    }

    #[test]
    fn prop_object_order_preserved(keys in prop::collection::vec("[a-z]{1,8}", 0..12)) {
        let mut map = ToonMap::new();
        for (i, key) in keys.iter().enumerate() {
            map.insert(key.clone(), ToonValue::from(i as i64));
        }
        let expected: Vec<String> = map.keys().cloned().collect();
        let doc = flatten(&ToonValue::Object(map)).unwrap();
        let paths: Vec<String> = doc.iter().map(|t| t.path.to_string()).collect();
        prop_assert_eq!(paths, expected);
    }

    #[test]
    fn prop_btreemap_struct_matches(entries in prop::collection::btree_map("[a-z]{1,6}", any::<u16>(), 0..10)) {
        #[derive(Serialize)]
        struct Wrapper {
            entries: BTreeMap<String, u16>,
        }
        let expected = entries
            .iter()
            .map(|(k, v)| format!("entries.{}:{}", k, v))
            .collect::<Vec<_>>()
            .join(";");
        prop_assert_eq!(to_string(&Wrapper { entries }).unwrap(), expected);
    }

    #[test]
    fn prop_strings_are_verbatim(s in "\\PC{0,20}") {
        prop_assert_eq!(to_string(&vec![s.clone()]).unwrap(), format!("0:{}", s));
    }

    #[test]
    fn prop_floats_round_trip_through_text(f in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        let text = flatten(&ToonValue::from(f)).unwrap().tokens()[0].value.clone();
        let parsed: f64 = text.parse().unwrap();
        if f == 0.0 {
            prop_assert_eq!(parsed, 0.0);
        } else {
            prop_assert_eq!(parsed, f);
        }
    }
}
