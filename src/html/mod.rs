//! HTML DOM plumbing
//!
//! Thin helpers over `markup5ever_rcdom` used by the page runtime and the
//! controllers:
//!
//! - `dom`: parsing, attributes, classes, tree navigation
//! - `query`: document-order searches
//! - `content`: inner HTML / text content, fragment parsing
//! - `style`: inline `style` attribute editing
//! - `serializer`: DOM back to bytes

pub mod content;
pub mod dom;
pub mod query;
pub mod serializer;
pub mod style;
pub mod utils;

pub use content::{inner_html, parse_fragment, text_content};
pub use dom::{
    add_class, create_text_node, find_nodes, get_child_node_by_name, get_node_attr,
    get_node_name, get_parent_node, has_class, html_to_dom, is_element, remove_class,
    set_node_attr, toggle_class,
};
pub use query::{find_all, find_first, is_descendant_of};
pub use serializer::serialize_document;
pub use style::{get_style_property, set_style_property};
pub use utils::{has_markup, is_void_element, WHITESPACES};
