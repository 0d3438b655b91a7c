use std::sync::Arc;

use ink_ir::{FunctionDef, Node, NodeKind, Param, Span};
use pretty_assertions::assert_eq;

use super::*;
use crate::environment::Frame;

fn list(values: Vec<Value>) -> Value {
    values
        .into_iter()
        .enumerate()
        .map(|(i, v)| (i.to_string(), v))
        .collect::<Composite>()
        .into()
}

fn identity_def() -> Arc<FunctionDef> {
    Arc::new(FunctionDef {
        params: vec![Param::Named("x".to_string())],
        body: Node::new(NodeKind::Ident("x".to_string()), Span::DUMMY),
        span: Span::DUMMY,
    })
}

#[test]
fn test_empty_equals_everything() {
    assert!(Value::Empty.equals(&Value::Null));
    assert!(Value::Number(3.0).equals(&Value::Empty));
    assert!(Value::Empty.equals(&Value::from("x")));
}

#[test]
fn test_different_tags_are_unequal() {
    assert!(!Value::Number(1.0).equals(&Value::from("1")));
    assert!(!Value::Null.equals(&Value::Bool(false)));
}

#[test]
fn test_strings_compare_by_bytes() {
    assert!(Value::from("abc").equals(&Value::from("abc")));
    assert!(!Value::from("abc").equals(&Value::from("abd")));
}

#[test]
fn test_composites_compare_structurally() {
    let a = list(vec![Value::Number(1.0), list(vec![Value::from("x")])]);
    let b = list(vec![Value::Number(1.0), list(vec![Value::from("x")])]);
    let c = list(vec![Value::Number(1.0)]);
    assert!(a.equals(&b));
    assert!(!a.equals(&c));
    assert!(a.equals(&a));
}

#[test]
fn test_self_referencing_composite_equals_itself() {
    let c = Composite::new();
    c.set("me", Value::Composite(c.clone()));
    let v = Value::Composite(c);
    assert!(v.equals(&v.clone()));
}

#[test]
fn test_distinct_cyclic_composites_compare_without_overflow() {
    let a = Composite::new();
    a.set("s", Value::Composite(a.clone()));
    let b = Composite::new();
    b.set("s", Value::Composite(b.clone()));
    assert!(Value::Composite(a.clone()).equals(&Value::Composite(b.clone())));

    a.set("n", Value::Number(1.0));
    b.set("n", Value::Number(2.0));
    assert!(!Value::Composite(a).equals(&Value::Composite(b)));
}

#[test]
fn test_cyclic_composite_renders_back_reference() {
    let a = Composite::new();
    a.set("n", Value::Number(1.0));
    a.set("s", Value::Composite(a.clone()));
    assert_eq!(Value::Composite(a.clone()).to_string(), "{n: 1, s: {...}}");

    // A shared but acyclic child is rendered in full each time.
    let child: Value = Composite::new().into();
    let parent = list(vec![child.clone(), child]);
    assert_eq!(parent.to_string(), "{0: {}, 1: {}}");
}

#[test]
fn test_call_thunks_clone_with_their_bindings() {
    let mut bindings = Table::default();
    bindings.insert("x".to_string(), Value::Number(4.0));
    let thunk = Value::Thunk(Box::new(CallThunk {
        bindings,
        function: FunctionValue { def: identity_def(), env: Frame::root() },
    }));
    let Value::Thunk(copy) = thunk.clone() else {
        panic!("clone changed the value kind");
    };
    assert!(copy.bindings["x"].equals(&Value::Number(4.0)));
    assert_eq!(copy.function.def.params.len(), 1);
    assert_eq!(thunk.type_name(), "function");
}

#[test]
fn test_functions_compare_by_definition() {
    let def = identity_def();
    let f = Value::function(Arc::clone(&def), Frame::root());
    let same_def = Value::function(def, Frame::root());
    let other = Value::function(identity_def(), Frame::root());
    assert!(f.equals(&same_def));
    assert!(!f.equals(&other));
}

#[test]
fn test_type_names() {
    assert_eq!(Value::Number(1.0).type_name(), "number");
    assert_eq!(Value::from("").type_name(), "string");
    assert_eq!(Value::Bool(true).type_name(), "boolean");
    assert_eq!(Value::Null.type_name(), "()");
    assert_eq!(Value::Empty.type_name(), "_");
    assert_eq!(list(vec![]).type_name(), "composite");
    assert_eq!(
        Value::function(identity_def(), Frame::root()).type_name(),
        "function"
    );
}

#[test]
fn test_canonical_rendering() {
    let nested = list(vec![Value::from("it's"), Value::Number(2.5), Value::Null]);
    assert_eq!(nested.to_string(), r"{0: 'it\'s', 1: 2.5, 2: ()}");
    assert_eq!(Value::from("raw").to_plain_string(), "raw");
    assert_eq!(Value::from("raw").to_string(), "'raw'");
    assert_eq!(Value::Number(1e3).to_string(), "1000");
    assert_eq!(list(vec![]).to_string(), "{}");
    assert_eq!(
        Value::function(identity_def(), Frame::root()).to_string(),
        "(x) => x"
    );
}

#[test]
fn test_composite_keys_render_sorted() {
    let c: Composite = [
        ("b".to_string(), Value::Number(2.0)),
        ("a".to_string(), Value::Number(1.0)),
    ]
    .into_iter()
    .collect();
    assert_eq!(c.keys(), vec!["a", "b"]);
    assert_eq!(Value::Composite(c).to_string(), "{a: 1, b: 2}");
}

#[test]
fn test_string_buffer_writes() {
    let buf = StrBuffer::from("abc");
    assert_eq!(buf.write_at(1, b"XYZ"), Ok(()));
    assert_eq!(buf.to_vec(), b"aXYZ".to_vec());
    assert_eq!(buf.write_at(4, b"!"), Ok(()));
    assert_eq!(buf.to_vec(), b"aXYZ!".to_vec());
    assert_eq!(buf.write_at(9, b"?"), Err(5));
}

#[test]
fn test_shared_handles_alias() {
    let a = Composite::new();
    let b = a.clone();
    b.set("x", Value::Number(2.0));
    assert!(a.get("x").is_some_and(|v| v.equals(&Value::Number(2.0))));
    assert!(a.ptr_eq(&b));
}
