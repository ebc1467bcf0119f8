use std::cell::RefCell;
use std::rc::Rc;

use encoding_rs::Encoding;
use html5ever::interface::{Attribute, QualName};
use html5ever::parse_document;
use html5ever::tendril::{format_tendril, StrTendril, TendrilSink};
use html5ever::{namespace_url, ns, LocalName};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom};

use crate::error::SiteError;

use super::utils::WHITESPACES;

/// Converts HTML bytes into a DOM
pub fn html_to_dom(data: &[u8], document_encoding: &str) -> Result<RcDom, SiteError> {
    let s: String = if let Some(encoding) = Encoding::for_label(document_encoding.as_bytes()) {
        let (string, _, _) = encoding.decode(data);
        string.to_string()
    } else {
        String::from_utf8_lossy(data).to_string()
    };

    let dom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut s.as_bytes())?;

    Ok(dom)
}

/// Finds nodes along a path of element names, e.g. `["html", "head", "title"]`
pub fn find_nodes(node: &Handle, node_names: &[&str]) -> Vec<Handle> {
    let mut found_nodes = Vec::new();
    let Some((node_name, rest)) = node_names.split_first() else {
        return found_nodes;
    };

    let matches = get_node_name(node) == Some(*node_name);

    if rest.is_empty() {
        if matches {
            found_nodes.push(node.clone());
        }

        for child_node in node.children.borrow().iter() {
            found_nodes.append(&mut find_nodes(child_node, node_names));
        }
    } else if matches {
        for child_node in node.children.borrow().iter() {
            found_nodes.append(&mut find_nodes(child_node, rest));
        }
    } else {
        for child_node in node.children.borrow().iter() {
            found_nodes.append(&mut find_nodes(child_node, node_names));
        }
    }

    found_nodes
}

/// Returns the first direct child element with the given name
pub fn get_child_node_by_name(parent: &Handle, node_name: &str) -> Option<Handle> {
    let children = parent.children.borrow();
    children
        .iter()
        .find(|child| get_node_name(child) == Some(node_name))
        .cloned()
}

/// Returns the value of an attribute
pub fn get_node_attr(node: &Handle, attr_name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| &*attr.name.local == attr_name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

/// Returns the local name of an element node
pub fn get_node_name(node: &Handle) -> Option<&'_ str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

pub fn is_element(node: &Handle) -> bool {
    matches!(node.data, NodeData::Element { .. })
}

/// Returns the parent node, leaving the child's parent link intact
pub fn get_parent_node(child: &Handle) -> Option<Handle> {
    let weak = child.parent.take();
    let parent = weak.as_ref().and_then(|node| node.upgrade());
    child.parent.set(weak);
    parent
}

/// Sets an attribute, or removes it when `attr_value` is `None`
pub fn set_node_attr(node: &Handle, attr_name: &str, attr_value: Option<String>) {
    if let NodeData::Element { attrs, .. } = &node.data {
        let attrs_mut = &mut attrs.borrow_mut();
        let mut i = 0;
        let mut found_existing_attr: bool = false;

        while i < attrs_mut.len() {
            if &attrs_mut[i].name.local == attr_name {
                found_existing_attr = true;

                if let Some(attr_value) = attr_value.as_deref() {
                    attrs_mut[i].value.clear();
                    attrs_mut[i].value.push_slice(attr_value);
                } else {
                    attrs_mut.remove(i);
                    continue;
                }
            }

            i += 1;
        }

        if !found_existing_attr {
            if let Some(attr_value) = attr_value {
                let name = LocalName::from(attr_name);

                attrs_mut.push(Attribute {
                    name: QualName::new(None, ns!(), name),
                    value: format_tendril!("{}", attr_value),
                });
            }
        }
    };
}

fn class_list(node: &Handle) -> Vec<String> {
    get_node_attr(node, "class")
        .map(|value| {
            value
                .split(WHITESPACES)
                .filter(|class| !class.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn write_class_list(node: &Handle, classes: &[String]) {
    set_node_attr(node, "class", Some(classes.join(" ")));
}

pub fn has_class(node: &Handle, class_name: &str) -> bool {
    class_list(node).iter().any(|class| class == class_name)
}

pub fn add_class(node: &Handle, class_name: &str) {
    if !is_element(node) {
        return;
    }

    let mut classes = class_list(node);
    if !classes.iter().any(|class| class == class_name) {
        classes.push(class_name.to_string());
        write_class_list(node, &classes);
    }
}

pub fn remove_class(node: &Handle, class_name: &str) {
    let mut classes = class_list(node);
    let before = classes.len();
    classes.retain(|class| class != class_name);

    if classes.len() != before {
        write_class_list(node, &classes);
    }
}

/// Adds or removes a class depending on `force`, returns whether it is now present
pub fn toggle_class(node: &Handle, class_name: &str, force: Option<bool>) -> bool {
    let present = force.unwrap_or_else(|| !has_class(node, class_name));

    if present {
        add_class(node, class_name);
    } else {
        remove_class(node, class_name);
    }

    present
}

/// Creates a detached text node
pub fn create_text_node(text: &str) -> Handle {
    Node::new(NodeData::Text {
        contents: RefCell::new(StrTendril::from_slice(text)),
    })
}

/// Appends `child` to `parent`, detaching it from its previous parent first
pub fn append_child(parent: &Handle, child: Handle) {
    if let Some(previous) = get_parent_node(&child) {
        previous
            .children
            .borrow_mut()
            .retain(|node| !Rc::ptr_eq(node, &child));
    }

    child.parent.set(Some(Rc::downgrade(parent)));
    parent.children.borrow_mut().push(child);
}

/// Detaches and returns all children of `node`
pub fn take_children(node: &Handle) -> Vec<Handle> {
    let children = std::mem::take(&mut *node.children.borrow_mut());
    for child in children.iter() {
        child.parent.set(None);
    }
    children
}
