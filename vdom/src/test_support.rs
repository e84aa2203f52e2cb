//! Test-only helpers for constructing descriptors and dynamic values.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::core::create_element::create_element;
use crate::core::types::{Component, ComponentDef, Props, VNode, Value};

/// Props map from string key/value pairs.
pub fn props(entries: &[(&str, &str)]) -> Props {
    entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), serde_json::Value::String((*v).to_string())))
        .collect()
}

/// Stateless component definition rendering an empty `div`.
pub fn stateless_component() -> ComponentDef {
    ComponentDef::Stateless {
        name: "StatelessFixture",
        render: Arc::new(|_props| create_element("div", None, Vec::new())),
    }
}

/// Stateful (class-like) component definition rendering an empty `div`.
pub fn stateful_component() -> ComponentDef {
    ComponentDef::Stateful {
        name: "StatefulFixture",
        construct: Arc::new(|| Box::new(FixtureComponent)),
    }
}

struct FixtureComponent;

impl Component for FixtureComponent {
    fn render(&self, _props: &Props) -> VNode {
        create_element("div", None, Vec::new())
    }
}

/// Plain object value with a single attribute.
pub fn object_with(key: &str, value: Value) -> Value {
    let mut map = BTreeMap::new();
    map.insert(key.to_string(), value);
    Value::Object(map)
}
