//! Classification of arbitrary values as element descriptors.

use crate::core::types::{NodeKind, Value};

/// True iff `value` is an element descriptor a renderer could mount.
///
/// The check is structural and reads only the `kind` discriminator stamped
/// by the construction facilities:
/// - `Element` and `Component` descriptors qualify.
/// - Text descriptors, primitives, `Null`/`Undefined`, plain objects (even
///   ones carrying a `dom` attribute), and bare component definitions do
///   not.
///
/// Total over every [`Value`]: never panics, never invokes the value, never
/// recurses into children, never mutates its input.
pub fn is_valid_element(value: &Value) -> bool {
    match value {
        Value::Node(node) => matches!(node.kind, NodeKind::Element | NodeKind::Component),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clone_node::clone_vnode;
    use crate::core::create_element::{create_element, create_text_vnode};
    use crate::core::types::{DomRef, Value};
    use crate::test_support::{object_with, stateful_component, stateless_component};

    #[test]
    fn rejects_primitives_and_undefined() {
        assert!(!is_valid_element(&Value::Int(33)));
        assert!(!is_valid_element(&Value::Int(0)));
        assert!(!is_valid_element(&Value::Float(1.5)));
        assert!(!is_valid_element(&Value::Bool(true)));
        assert!(!is_valid_element(&Value::Bool(false)));
        assert!(!is_valid_element(&Value::from("some text")));
        assert!(!is_valid_element(&Value::Undefined));
    }

    #[test]
    fn rejects_null() {
        assert!(!is_valid_element(&Value::Null));
    }

    #[test]
    fn rejects_empty_object() {
        assert!(!is_valid_element(&Value::Object(Default::default())));
    }

    /// A lone `dom` attribute must not qualify; the discriminator is
    /// authoritative.
    #[test]
    fn rejects_object_with_only_dom_attribute() {
        let fake = object_with("dom", Value::from("fake data"));
        assert!(!is_valid_element(&fake));
    }

    #[test]
    fn rejects_bare_component_definitions() {
        assert!(!is_valid_element(&Value::Component(stateless_component())));
        assert!(!is_valid_element(&Value::Component(stateful_component())));
    }

    #[test]
    fn rejects_text_descriptors() {
        let text = create_text_vnode("Do a thing");
        assert!(!is_valid_element(&text.into()));
    }

    #[test]
    fn accepts_host_element_descriptors() {
        let el = create_element("div", None, vec![Value::from("Do a thing")]);
        assert!(is_valid_element(&el.into()));
    }

    #[test]
    fn accepts_component_descriptors() {
        let stateless = create_element(stateless_component(), None, Vec::new());
        let stateful = create_element(stateful_component(), None, Vec::new());
        assert!(is_valid_element(&stateless.into()));
        assert!(is_valid_element(&stateful.into()));
    }

    #[test]
    fn accepts_cloned_descriptors() {
        let el = create_element("div", None, Vec::new());
        let cloned = clone_vnode(&el, None, vec![Value::from("text2")]);
        assert!(is_valid_element(&cloned.into()));
    }

    /// Mounting fills the `dom` slot; classification must not change.
    #[test]
    fn accepts_mounted_descriptors() {
        let mut el = create_element("div", None, Vec::new());
        el.dom = Some(DomRef(7));
        assert!(is_valid_element(&el.into()));
    }

    #[test]
    fn classification_is_idempotent_and_non_mutating() {
        let el: Value = create_element("div", None, vec![Value::from("x")]).into();
        let snapshot = el.clone();
        assert!(is_valid_element(&el));
        assert!(is_valid_element(&el));
        assert_eq!(el, snapshot);
    }
}
