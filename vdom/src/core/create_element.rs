//! Element factory: the primary construction facility.

use crate::core::types::{NodeKind, Props, Tag, VNode, Value};
use tracing::trace;

/// Create an element descriptor from a tag, optional props, and children.
///
/// Host tags yield [`NodeKind::Element`]; component tags yield
/// [`NodeKind::Component`]. A string-valued `key` prop is lifted onto the
/// descriptor itself. The `dom` slot starts empty; the renderer fills it at
/// mount time.
pub fn create_element(tag: impl Into<Tag>, props: Option<Props>, children: Vec<Value>) -> VNode {
    let tag = tag.into();
    let kind = match &tag {
        Tag::Host(_) => NodeKind::Element,
        Tag::Component(_) => NodeKind::Component,
        Tag::Text(_) => NodeKind::Text,
    };
    let mut props = props.unwrap_or_default();
    let key = take_key(&mut props);

    trace!(kind = ?kind, children = children.len(), "created element descriptor");

    VNode {
        kind,
        tag,
        props,
        children,
        key,
        dom: None,
    }
}

/// Create a text descriptor from literal content.
///
/// Text descriptors carry no props or children and are not valid elements.
pub fn create_text_vnode(text: impl Into<String>) -> VNode {
    VNode {
        kind: NodeKind::Text,
        tag: Tag::Text(text.into()),
        props: Props::new(),
        children: Vec::new(),
        key: None,
        dom: None,
    }
}

/// Remove a string-valued `key` prop and return it.
///
/// Non-string `key` values stay in the prop map untouched.
pub(crate) fn take_key(props: &mut Props) -> Option<String> {
    let key = props.get("key").and_then(|v| v.as_str()).map(str::to_string)?;
    props.remove("key");
    Some(key)
}
