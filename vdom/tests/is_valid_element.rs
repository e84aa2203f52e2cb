//! End-to-end classification checks across every construction path.
//!
//! Descriptors from the factory, hyperscript, markup literals, and clones
//! must classify as valid elements; primitives, plain objects, and bare
//! component definitions must not.

use vdom::test_support::{object_with, props, stateful_component, stateless_component};
use vdom::{Value, clone_vnode, create_element, element, h, is_valid_element};

#[test]
fn rejects_non_object_values() {
    assert!(!is_valid_element(&Value::Int(33)));
    assert!(!is_valid_element(&Value::Bool(false)));
    assert!(!is_valid_element(&Value::Bool(true)));
    assert!(!is_valid_element(&Value::from("some text")));
    assert!(!is_valid_element(&Value::Int(0)));
    assert!(!is_valid_element(&Value::Undefined));
}

#[test]
fn rejects_invalid_objects() {
    assert!(!is_valid_element(&Value::Null), "null is not an element");
    assert!(
        !is_valid_element(&Value::Object(Default::default())),
        "empty object is not an element"
    );
    assert!(
        !is_valid_element(&object_with("dom", Value::from("fake data"))),
        "a lone dom attribute is not an element"
    );
}

#[test]
fn accepts_factory_element() {
    let el = create_element("div", None, vec![Value::from("Do a thing")]);
    assert!(is_valid_element(&el.into()));
}

#[test]
fn accepts_factory_stateless_component() {
    let comp = create_element(stateless_component(), None, Vec::new());
    assert!(is_valid_element(&comp.into()));
}

#[test]
fn accepts_factory_stateful_component() {
    let comp = create_element(stateful_component(), None, Vec::new());
    assert!(is_valid_element(&comp.into()));
}

#[test]
fn accepts_markup_literal() {
    let node = element! { div { "Hello world" } };
    assert!(is_valid_element(&node.into()));
}

#[test]
fn accepts_clone_of_markup_literal() {
    let node = element! { div { "Hello world" } };
    let cloned = clone_vnode(&node, None, vec![Value::from("Hello world 2!")]);
    assert!(is_valid_element(&cloned.into()));
}

#[test]
fn accepts_hyperscript_element() {
    let el = h("div", None, vec![Value::from("Do a thing")]);
    assert!(is_valid_element(&el.into()));
}

#[test]
fn accepts_hyperscript_selector_element() {
    let el = h("div#main.note", Some(props(&[("title", "t")])), Vec::new());
    assert!(is_valid_element(&el.into()));
}

#[test]
fn accepts_hyperscript_components() {
    let stateless = h(stateless_component(), None, Vec::new());
    let stateful = h(stateful_component(), None, Vec::new());
    assert!(is_valid_element(&stateless.into()));
    assert!(is_valid_element(&stateful.into()));
}

#[test]
fn rejects_bare_component_definitions() {
    assert!(!is_valid_element(&Value::Component(stateless_component())));
    assert!(!is_valid_element(&Value::Component(stateful_component())));
}

/// Wrapping a definition in a constructor makes an element; the definition
/// by itself stays invalid.
#[test]
fn wrapping_a_definition_changes_its_classification() {
    let comp = stateless_component();
    let wrapped = create_element(comp.clone(), None, Vec::new());
    assert!(is_valid_element(&wrapped.into()));
    assert!(!is_valid_element(&Value::Component(comp)));
}

#[test]
fn classification_does_not_mutate_input() {
    let el: Value = create_element("div", Some(props(&[("class", "x")])), Vec::new()).into();
    let snapshot = el.clone();
    assert!(is_valid_element(&el));
    assert!(is_valid_element(&el));
    assert_eq!(el, snapshot);
}
