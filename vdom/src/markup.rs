//! Structural markup literals.
//!
//! [`element!`](macro@crate::element) is the crate's markup-literal authoring
//! path: element-shaped literals that desugar to
//! [`create_element`](crate::core::create_element::create_element) calls at
//! expansion time, the same way a templating front end would compile markup
//! down to factory calls.
//!
//! ```
//! use vdom::{element, is_valid_element};
//!
//! let node = element! { div { class: "greeting", "Hello world" } };
//! assert!(is_valid_element(&node.into()));
//! ```

/// Build an element descriptor from a markup literal.
///
/// Body entries are comma-separated and read in order:
/// - `ident: expr` pairs become props (values converted through
///   `serde_json::json!`),
/// - nested `ident { .. }` blocks become child elements,
/// - any other expression becomes a child value via `Into<Value>`.
///
/// ```
/// use vdom::element;
///
/// let node = element! {
///     ul {
///         class: "menu",
///         li { key: "a", "First" },
///         li { key: "b", "Second" },
///     }
/// };
/// assert_eq!(node.children.len(), 2);
/// ```
#[macro_export]
macro_rules! element {
    ($tag:ident) => {
        $crate::core::create_element::create_element(
            stringify!($tag),
            ::std::option::Option::None,
            ::std::vec::Vec::new(),
        )
    };
    ($tag:ident { $($body:tt)* }) => {{
        let mut props = $crate::core::types::Props::new();
        let mut children: ::std::vec::Vec<$crate::core::types::Value> = ::std::vec::Vec::new();
        $crate::__element_body!(props, children, $($body)*);
        let props = if props.is_empty() {
            ::std::option::Option::None
        } else {
            ::std::option::Option::Some(props)
        };
        $crate::core::create_element::create_element(stringify!($tag), props, children)
    }};
}

/// Recursive body muncher for [`element!`]. Not public API.
#[doc(hidden)]
#[macro_export]
macro_rules! __element_body {
    ($props:ident, $children:ident $(,)?) => {};
    ($props:ident, $children:ident, $key:ident: $value:expr $(, $($rest:tt)*)?) => {
        $props.insert(stringify!($key).to_string(), $crate::__serde_json::json!($value));
        $crate::__element_body!($props, $children $(, $($rest)*)?);
    };
    ($props:ident, $children:ident, $tag:ident { $($inner:tt)* } $(, $($rest:tt)*)?) => {
        $children.push($crate::core::types::Value::from($crate::element!($tag { $($inner)* })));
        $crate::__element_body!($props, $children $(, $($rest)*)?);
    };
    ($props:ident, $children:ident, $child:expr $(, $($rest:tt)*)?) => {
        $children.push($crate::core::types::Value::from($child));
        $crate::__element_body!($props, $children $(, $($rest)*)?);
    };
}
