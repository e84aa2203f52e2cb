//! Element descriptors for a virtual-DOM renderer.
//!
//! This crate models the value space a renderer traffics in: element
//! descriptors ([`VNode`]) produced by the construction facilities, and the
//! dynamic values ([`Value`]) application code can hand to a renderer. The
//! exported predicate [`is_valid_element`] tells the two apart.
//!
//! - **[`core`]**: Pure, deterministic logic (types, construction,
//!   classification). No I/O, fully testable in isolation.
//! - **[`markup`]**: The [`element!`] macro, desugaring structural markup
//!   literals to `create_element` calls.
//!
//! Rendering, diffing, and component instantiation belong to the renderer;
//! this crate only describes what there is to render.

pub mod core;
pub mod logging;
pub mod markup;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::classifier::is_valid_element;
pub use crate::core::clone_node::clone_vnode;
pub use crate::core::create_element::{create_element, create_text_vnode};
pub use crate::core::hyperscript::h;
pub use crate::core::types::{Component, ComponentDef, DomRef, NodeKind, Props, Tag, VNode, Value};

// Expansion target for `element!`; not public API.
#[doc(hidden)]
pub use serde_json as __serde_json;
