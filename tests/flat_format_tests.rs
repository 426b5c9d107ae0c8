use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use toon_flat::{
    flatten, to_string, to_value, toon, Error, FlattenOptions, ToonMap, Value,
};

fn encode(value: &Value) -> String {
    flatten(value).unwrap().to_string()
}

#[test]
fn test_single_boolean() {
    assert_eq!(encode(&toon!({"a": true})), "a:true");
}

#[test]
fn test_key_order_preserved_as_given() {
    assert_eq!(encode(&toon!({"a": 1, "b": "x"})), "a:1;b:x");
    assert_eq!(encode(&toon!({"b": "x", "a": 1})), "b:x;a:1");
}

#[test]
fn test_nested_object_path() {
    assert_eq!(encode(&toon!({"a": {"b": 1}})), "a.b:1");
}

#[test]
fn test_array_indices_in_path() {
    assert_eq!(encode(&toon!({"a": [1, 2]})), "a.0:1;a.1:2");
}

#[test]
fn test_null_leaf() {
    assert_eq!(encode(&toon!({"a": null})), "a:null");
}

#[test]
fn test_empty_object_is_empty_document() {
    assert_eq!(encode(&toon!({})), "");
    assert!(flatten(&toon!({})).unwrap().is_empty());
}

#[test]
fn test_undefined_uses_sentinel() {
    assert_eq!(encode(&toon!({"a": undefined, "b": null})), "a:undefined;b:null");
}

#[test]
fn test_no_escaping_performed() {
    // Indistinguishable from a token `a:x` followed by a fragment `y`.
    assert_eq!(encode(&toon!({"a": "x;y"})), "a:x;y");
    assert_eq!(encode(&toon!({"a": "k:v"})), "a:k:v");
    assert_eq!(encode(&toon!({"a.b": 1})), "a.b:1");
}

#[test]
fn test_unicode_passes_through() {
    assert_eq!(encode(&toon!({"emoji": "👋 hello", "名前": "太郎"})), "emoji:👋 hello;名前:太郎");
}

#[test]
fn test_scalar_root_has_empty_path() {
    assert_eq!(encode(&toon!(42)), ":42");
    assert_eq!(encode(&toon!("ab")), ":ab");
    assert_eq!(encode(&toon!(null)), ":null");
}

#[test]
fn test_empty_key_at_root_adds_no_separator() {
    assert_eq!(encode(&toon!({"": {"b": 1}})), "b:1");
    assert_eq!(encode(&toon!({"a": {"": {"b": 1}}})), "a..b:1");
}

#[test]
fn test_mixed_nesting_pre_order() {
    let value = toon!({
        "users": [
            {"id": 1, "roles": ["admin"]},
            {"id": 2, "roles": []}
        ],
        "total": 2
    });
    assert_eq!(
        encode(&value),
        "users.0.id:1;users.0.roles.0:admin;users.1.id:2;total:2"
    );
}

#[test]
fn test_numeric_rendering() {
    let value = toon!({
        "int": 7,
        "whole": 2.0,
        "frac": 0.25,
        "tiny": 0.0000001
    });
    assert_eq!(encode(&value), "int:7;whole:2;frac:0.25;tiny:0.0000001");

    let mut map = ToonMap::new();
    map.insert("big".to_string(), Value::from(u64::MAX));
    map.insert("neg".to_string(), Value::from(-3));
    assert_eq!(encode(&Value::Object(map)), "big:18446744073709551615;neg:-3");
}

#[test]
fn test_repeated_calls_are_identical() {
    let value = toon!({"a": [1, {"b": "c"}], "d": 1.5});
    let first = encode(&value);
    for _ in 0..10 {
        assert_eq!(encode(&value), first);
    }
}

#[test]
fn test_input_not_mutated() {
    let value = toon!({"a": [1, 2], "b": {"c": null}});
    let before = value.clone();
    let _ = flatten(&value).unwrap();
    assert_eq!(value, before);
}

#[test]
fn test_json_input_order_is_document_order() {
    let value = Value::from_json(r#"{"zebra": 1, "apple": {"y": 2, "x": 3}}"#).unwrap();
    assert_eq!(encode(&value), "zebra:1;apple.y:2;apple.x:3");
}

/// A node that can be shared, and therefore can end up inside itself.
struct Node {
    name: String,
    children: RefCell<Vec<Rc<Node>>>,
}

impl Serialize for Node {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("name", &self.name)?;
        let children = self.children.borrow();
        let children: Vec<&Node> = children.iter().map(|child| &**child).collect();
        map.serialize_entry("children", &children)?;
        map.end()
    }
}

fn cyclic_node() -> Rc<Node> {
    let node = Rc::new(Node {
        name: "root".to_string(),
        children: RefCell::new(Vec::new()),
    });
    node.children.borrow_mut().push(Rc::clone(&node));
    node
}

fn break_cycle(node: &Rc<Node>) {
    node.children.borrow_mut().clear();
}

#[test]
fn test_cyclic_structure_is_reported() {
    let node = cyclic_node();
    let result = to_string(&*node);
    break_cycle(&node);

    match result {
        Err(Error::DepthLimitExceeded { limit, path }) => {
            assert_eq!(limit, 128);
            assert!(path.starts_with("children.0.children.0"));
        }
        other => panic!("expected depth limit error, got {:?}", other),
    }
}

#[test]
fn test_cyclic_structure_is_reported_by_to_value() {
    let node = cyclic_node();
    let result = to_value(&*node);
    break_cycle(&node);
    assert!(matches!(result, Err(Error::DepthLimitExceeded { .. })));
}

#[test]
fn test_acyclic_shared_nodes_encode() {
    let leaf = Rc::new(Node {
        name: "leaf".to_string(),
        children: RefCell::new(Vec::new()),
    });
    let root = Node {
        name: "root".to_string(),
        children: RefCell::new(vec![Rc::clone(&leaf), Rc::clone(&leaf)]),
    };
    assert_eq!(
        to_string(&root).unwrap(),
        "name:root;children.0.name:leaf;children.1.name:leaf"
    );
}

#[test]
fn test_pathologically_deep_value_is_reported() {
    let mut value = toon!(1);
    for _ in 0..200 {
        let mut map = ToonMap::new();
        map.insert("n".to_string(), value);
        value = Value::Object(map);
    }

    let err = flatten(&value).unwrap_err();
    assert!(matches!(err, Error::DepthLimitExceeded { limit: 128, .. }));

    let options = FlattenOptions::new().with_max_depth(256);
    let doc = toon_flat::flatten_with_options(&value, &options).unwrap();
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.tokens()[0].path.len(), 200);
}
