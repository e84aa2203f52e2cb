//! Hyperscript construction helper.
//!
//! Alternative authoring syntax producing the same descriptor shape as
//! [`create_element`]. Host tags accept CSS-style selector sugar:
//! `h("div#main.note", ..)` is `create_element("div", {id, class}, ..)`,
//! and a bare `".note"` selector defaults the tag to `div`.

use std::sync::LazyLock;

use crate::core::create_element::create_element;
use crate::core::types::{Props, Tag, VNode, Value};
use tracing::trace;

static SELECTOR_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^([A-Za-z][A-Za-z0-9-]*)?((?:[#.][A-Za-z0-9_-]+)+)$").unwrap()
});

static PIECE_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"([#.])([A-Za-z0-9_-]+)").unwrap());

/// Create an element descriptor, hyperscript style.
///
/// Delegates to [`create_element`]; the output is structurally
/// indistinguishable from the factory's. Selector sugar contributes `id`
/// and `class` props: an explicit `id` prop wins over the sugar, while
/// sugar classes and an explicit `class` prop concatenate. Strings that do
/// not parse as a selector are used verbatim as the tag name, so the
/// operation stays total.
pub fn h(tag: impl Into<Tag>, props: Option<Props>, children: Vec<Value>) -> VNode {
    match tag.into() {
        Tag::Host(selector) => {
            let (tag_name, sugar) = parse_selector(&selector);
            let props = merge_sugar(props.unwrap_or_default(), sugar);
            create_element(tag_name, Some(props), children)
        }
        other => create_element(other, props, children),
    }
}

struct SelectorSugar {
    id: Option<String>,
    classes: Vec<String>,
}

impl SelectorSugar {
    fn none() -> Self {
        SelectorSugar {
            id: None,
            classes: Vec::new(),
        }
    }
}

fn parse_selector(selector: &str) -> (String, SelectorSugar) {
    let Some(caps) = SELECTOR_RE.captures(selector) else {
        return (selector.to_string(), SelectorSugar::none());
    };

    // Hyperscript convention: a selector with no tag part means `div`.
    let tag = caps
        .get(1)
        .map_or_else(|| "div".to_string(), |m| m.as_str().to_string());

    let mut sugar = SelectorSugar::none();
    for piece in PIECE_RE.captures_iter(&caps[2]) {
        match &piece[1] {
            "#" => sugar.id = Some(piece[2].to_string()),
            _ => sugar.classes.push(piece[2].to_string()),
        }
    }

    trace!(selector, tag = %tag, "parsed hyperscript selector");
    (tag, sugar)
}

fn merge_sugar(mut props: Props, sugar: SelectorSugar) -> Props {
    if let Some(id) = sugar.id {
        props
            .entry("id".to_string())
            .or_insert_with(|| serde_json::Value::String(id));
    }

    if !sugar.classes.is_empty() {
        let mut class = sugar.classes.join(" ");
        if let Some(existing) = props.get("class").and_then(|v| v.as_str()) {
            class.push(' ');
            class.push_str(existing);
        }
        props.insert("class".to_string(), serde_json::Value::String(class));
    }

    props
}
