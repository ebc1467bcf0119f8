//! Document-order searches over an rcdom tree.
//!
//! Results follow pre-order traversal, the same order a browser's
//! `querySelectorAll` reports.

use std::rc::Rc;

use markup5ever_rcdom::Handle;

use super::dom::{get_parent_node, is_element};

/// Collects every element below `root` (excluding `root`) that satisfies `predicate`
pub fn find_all<F>(root: &Handle, predicate: F) -> Vec<Handle>
where
    F: Fn(&Handle) -> bool,
{
    let mut found = Vec::new();
    let mut stack: Vec<Handle> = root.children.borrow().iter().rev().cloned().collect();

    while let Some(node) = stack.pop() {
        if is_element(&node) && predicate(&node) {
            found.push(node.clone());
        }

        stack.extend(node.children.borrow().iter().rev().cloned());
    }

    found
}

/// Like [`find_all`], but `root` itself is also tested
pub fn find_all_inclusive<F>(root: &Handle, predicate: F) -> Vec<Handle>
where
    F: Fn(&Handle) -> bool,
{
    let mut found = Vec::new();
    if is_element(root) && predicate(root) {
        found.push(root.clone());
    }
    found.extend(find_all(root, predicate));
    found
}

/// First element below `root` satisfying `predicate`
pub fn find_first<F>(root: &Handle, predicate: F) -> Option<Handle>
where
    F: Fn(&Handle) -> bool,
{
    let mut stack: Vec<Handle> = root.children.borrow().iter().rev().cloned().collect();

    while let Some(node) = stack.pop() {
        if is_element(&node) && predicate(&node) {
            return Some(node);
        }

        stack.extend(node.children.borrow().iter().rev().cloned());
    }

    None
}

/// True when `node` is `ancestor` or lies somewhere beneath it
pub fn is_descendant_of(node: &Handle, ancestor: &Handle) -> bool {
    let mut current = Some(node.clone());

    while let Some(candidate) = current {
        if Rc::ptr_eq(&candidate, ancestor) {
            return true;
        }
        current = get_parent_node(&candidate);
    }

    false
}
