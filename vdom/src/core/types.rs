//! Shared types for the element-descriptor value space.
//!
//! These types define stable contracts between the construction facilities
//! and the classifier. They hold no I/O handles and behave deterministically;
//! the only non-data members are the callbacks carried by [`ComponentDef`],
//! which nothing in this crate ever invokes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Prop map attached to a descriptor.
///
/// `BTreeMap` keeps iteration order deterministic across runs.
pub type Props = BTreeMap<String, serde_json::Value>;

/// Discriminator stamped on every descriptor by the construction facilities.
///
/// Classification reads this field and nothing else. `Element` and
/// `Component` descriptors are renderable elements; `Text` descriptors are
/// materialized text runs and do not qualify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Host element with a tag name (`"div"`, `"span"`, ...).
    Element,
    /// Component invocation, stateless or stateful.
    Component,
    /// Text run materialized from literal content.
    Text,
}

/// Opaque handle to mounted renderer output.
///
/// The renderer fills this slot at mount time; the classifier never consults
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomRef(pub u64);

/// Render callback of a stateless component definition.
pub type RenderFn = Arc<dyn Fn(&Props) -> VNode + Send + Sync>;

/// Factory producing a stateful component instance.
pub type ComponentFactory = Arc<dyn Fn() -> Box<dyn Component> + Send + Sync>;

/// Behaviour of a stateful component instance.
///
/// Instantiation and rendering belong to the renderer; this crate only
/// carries the definition around as opaque data.
pub trait Component: Send + Sync {
    fn render(&self, props: &Props) -> VNode;
}

/// A component definition.
///
/// Calling a definition through a construction facility yields an element
/// descriptor wrapping it; the definition by itself is not an element.
#[derive(Clone)]
pub enum ComponentDef {
    /// Plain function: props in, descriptor out.
    Stateless {
        name: &'static str,
        render: RenderFn,
    },
    /// Class-like definition the renderer instantiates before rendering.
    Stateful {
        name: &'static str,
        construct: ComponentFactory,
    },
}

impl ComponentDef {
    pub fn name(&self) -> &'static str {
        match self {
            ComponentDef::Stateless { name, .. } | ComponentDef::Stateful { name, .. } => name,
        }
    }
}

/// Definitions compare by identity: two definitions are equal when they wrap
/// the same callback, not when they happen to behave alike.
impl PartialEq for ComponentDef {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                ComponentDef::Stateless { render: a, .. },
                ComponentDef::Stateless { render: b, .. },
            ) => Arc::ptr_eq(a, b),
            (
                ComponentDef::Stateful { construct: a, .. },
                ComponentDef::Stateful { construct: b, .. },
            ) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for ComponentDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentDef::Stateless { name, .. } => write!(f, "Stateless({name})"),
            ComponentDef::Stateful { name, .. } => write!(f, "Stateful({name})"),
        }
    }
}

/// Tag of a descriptor: what the renderer would mount.
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    /// Host element tag name, e.g. `"div"`.
    Host(String),
    /// Component definition to instantiate at render time.
    Component(ComponentDef),
    /// Text content carried by a text descriptor.
    Text(String),
}

impl From<&str> for Tag {
    fn from(tag: &str) -> Self {
        Tag::Host(tag.to_string())
    }
}

impl From<String> for Tag {
    fn from(tag: String) -> Self {
        Tag::Host(tag)
    }
}

impl From<ComponentDef> for Tag {
    fn from(def: ComponentDef) -> Self {
        Tag::Component(def)
    }
}

/// Element descriptor: an immutable description of a renderable unit.
///
/// Descriptors are produced by the construction facilities
/// ([`create_element`](crate::core::create_element::create_element),
/// [`h`](crate::core::hyperscript::h), the [`element!`](macro@crate::element)
/// macro) and by [`clone_vnode`](crate::core::clone_node::clone_vnode).
/// The constructors are the only writers of `kind`; the classifier treats
/// every other field as opaque.
#[derive(Debug, Clone, PartialEq)]
pub struct VNode {
    pub kind: NodeKind,
    pub tag: Tag,
    pub props: Props,
    pub children: Vec<Value>,
    /// Reconciliation key, lifted out of the props by the constructors.
    pub key: Option<String>,
    /// Renderer bookkeeping slot. Empty until mounted.
    pub dom: Option<DomRef>,
}

/// Any value application code can hand to the renderer.
///
/// This is the unconstrained input space of
/// [`is_valid_element`](crate::core::classifier::is_valid_element):
/// primitives, plain attribute objects, bare component definitions, and
/// descriptors all live here.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Undefined,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Plain attribute map. Not a descriptor, whatever its keys hold.
    Object(BTreeMap<String, Value>),
    /// Bare component definition that has not been through a constructor.
    Component(ComponentDef),
    /// An element descriptor.
    Node(Box<VNode>),
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<VNode> for Value {
    fn from(node: VNode) -> Self {
        Value::Node(Box::new(node))
    }
}

impl From<ComponentDef> for Value {
    fn from(def: ComponentDef) -> Self {
        Value::Component(def)
    }
}
