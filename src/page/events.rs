//! Event listener registry.

use std::cell::Cell;
use std::rc::Rc;

use markup5ever_rcdom::Handle;

use super::Listener;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    MouseEnter,
    MouseLeave,
}

impl EventKind {
    /// Whether ancestors are visited before the target
    ///
    /// Every kind reaches the target and all of its ancestors. A click
    /// bubbles from the target up. Entering the target from outside the
    /// document enters each ancestor first.
    pub fn outermost_first(self) -> bool {
        matches!(self, EventKind::MouseEnter)
    }
}

pub struct Event {
    pub kind: EventKind,
    pub target: Handle,
    default_prevented: Cell<bool>,
}

impl Event {
    pub fn new(kind: EventKind, target: Handle) -> Self {
        Self {
            kind,
            target,
            default_prevented: Cell::new(false),
        }
    }

    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

struct Registration {
    node: Handle,
    kind: EventKind,
    listener: Listener,
}

#[derive(Default)]
pub struct ListenerRegistry {
    registrations: Vec<Registration>,
}

impl ListenerRegistry {
    pub fn add(&mut self, node: &Handle, kind: EventKind, listener: Listener) {
        self.registrations.push(Registration {
            node: node.clone(),
            kind,
            listener,
        });
    }

    /// Listeners registered on exactly `node` for `kind`, in registration order
    pub fn listeners_for(&self, node: &Handle, kind: EventKind) -> Vec<Listener> {
        self.registrations
            .iter()
            .filter(|registration| registration.kind == kind && Rc::ptr_eq(&registration.node, node))
            .map(|registration| registration.listener.clone())
            .collect()
    }

    pub fn count_for(&self, node: &Handle) -> usize {
        self.registrations
            .iter()
            .filter(|registration| Rc::ptr_eq(&registration.node, node))
            .count()
    }
}
