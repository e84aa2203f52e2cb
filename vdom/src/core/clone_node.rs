//! Clone operation for element descriptors.

use crate::core::create_element::take_key;
use crate::core::types::{Props, VNode, Value};
use tracing::trace;

/// Produce a new, independent descriptor from an existing one.
///
/// `overrides` merge into the source props (override wins); non-empty
/// `children` replace the source children. The `key` is re-lifted from the
/// merged props and the `dom` slot is cleared: the clone has not been
/// mounted, whatever the source's state. Kind and tag carry over, so a
/// clone of a valid element is itself valid.
pub fn clone_vnode(node: &VNode, overrides: Option<Props>, children: Vec<Value>) -> VNode {
    let mut props = node.props.clone();
    if let Some(key) = &node.key {
        props.insert("key".to_string(), serde_json::Value::String(key.clone()));
    }
    if let Some(overrides) = overrides {
        props.extend(overrides);
    }
    let key = take_key(&mut props);

    let children = if children.is_empty() {
        node.children.clone()
    } else {
        children
    };

    trace!(kind = ?node.kind, "cloned element descriptor");

    VNode {
        kind: node.kind,
        tag: node.tag.clone(),
        props,
        children,
        key,
        dom: None,
    }
}
