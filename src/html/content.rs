//! Reading and replacing element content.
//!
//! The replace helpers return the nodes they inserted so the page runtime
//! can report them to structural-change watchers.

use html5ever::serialize::{serialize, SerializeOpts, TraversalScope};
use html5ever::tendril::TendrilSink;
use html5ever::parse_fragment as parse_html_fragment;
use html5ever::{namespace_url, ns, LocalName, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};

use super::dom::{append_child, create_text_node, take_children};

/// Serializes the children of `node`, like `Element.innerHTML`
pub fn inner_html(node: &Handle) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let serializable: SerializableHandle = node.clone().into();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::ChildrenOnly(None),
        ..Default::default()
    };

    serialize(&mut buf, &serializable, opts)
        .map(|()| String::from_utf8_lossy(&buf).into_owned())
        .unwrap_or_default()
}

/// Concatenated text of all descendant text nodes, like `Node.textContent`
pub fn text_content(node: &Handle) -> String {
    let mut text = String::new();
    collect_text(node, &mut text);
    text
}

fn collect_text(node: &Handle, out: &mut String) {
    for child in node.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => out.push_str(&contents.borrow()),
            NodeData::Element { .. } => collect_text(child, out),
            _ => {}
        }
    }
}

/// Parses an HTML fragment in a `<body>` context and returns its top-level nodes, detached
pub fn parse_fragment(html: &str) -> Vec<Handle> {
    let dom = parse_html_fragment(
        RcDom::default(),
        ParseOpts::default(),
        QualName::new(None, ns!(html), LocalName::from("body")),
        vec![],
    )
    .one(html);

    // The fragment parser wraps its output in a synthetic <html> element
    let document_children = take_children(&dom.document);
    document_children
        .iter()
        .flat_map(take_children)
        .collect()
}

/// Replaces all children of `node` with a single text node.
///
/// Returns the inserted node (none for an empty string).
pub fn replace_with_text(node: &Handle, text: &str) -> Vec<Handle> {
    take_children(node);

    if text.is_empty() {
        return Vec::new();
    }

    let text_node = create_text_node(text);
    append_child(node, text_node.clone());
    vec![text_node]
}

/// Replaces all children of `node` with the parsed `html`, returning the new top-level nodes
pub fn replace_with_html(node: &Handle, html: &str) -> Vec<Handle> {
    take_children(node);
    append_html(node, html)
}

/// Appends the parsed `html` to `node`, returning the new top-level nodes
pub fn append_html(node: &Handle, html: &str) -> Vec<Handle> {
    let nodes = parse_fragment(html);
    for child in nodes.iter() {
        append_child(node, child.clone());
    }
    nodes
}
