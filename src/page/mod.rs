//! Headless page runtime
//!
//! A `Page` owns a parsed document together with everything a browser
//! window would otherwise provide to the site scripts: a virtual clock with
//! timers, event listeners, structural-change watchers, local storage, the
//! navigator locale and the viewport width.
//!
//! All work happens on one thread. Every callback runs to completion, and
//! queued mutation records are delivered after each event dispatch and each
//! timer task. `Page` is a cheap handle; clones refer to the same page.

pub mod events;
pub mod mutation;
mod timers;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use html5ever::interface::{Attribute, QualName};
use html5ever::tendril::format_tendril;
use html5ever::tree_builder::create_element;
use html5ever::{namespace_url, ns, LocalName};
use markup5ever_rcdom::{Handle, RcDom};

use crate::error::SiteResult;
use crate::html::content::{append_html, replace_with_html, replace_with_text};
use crate::html::dom::{self, find_nodes, get_child_node_by_name, get_node_attr, html_to_dom};
use crate::html::query::{find_all, find_first};
use crate::html::serializer::serialize_document;
use crate::storage::{MemoryStorage, Storage};

pub use events::{Event, EventKind};
pub use mutation::{MutationRecord, WatchId};
pub use timers::TimerId;

pub type Listener = Rc<dyn Fn(&Page, &Event)>;
pub type TimerTask = Rc<dyn Fn(&Page)>;
pub type WatchCallback = Rc<dyn Fn(&Page, &[MutationRecord])>;

/// Delivery rounds per checkpoint before giving up on a watcher that keeps inserting nodes
const MAX_DELIVERY_ROUNDS: usize = 64;

pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

/// Environment the page is loaded into
#[derive(Clone, Debug)]
pub struct PageOptions {
    /// Browser-reported locale, e.g. `en-US`
    pub locale: Option<String>,
    pub viewport_width: u32,
    /// Charset used to decode and re-encode the document
    pub encoding: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            locale: None,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            encoding: "utf-8".to_string(),
        }
    }
}

struct PageInner {
    dom: RcDom,
    encoding: String,
    locale: Option<String>,
    viewport_width: Cell<u32>,
    timers: RefCell<timers::TimerQueue>,
    listeners: RefCell<events::ListenerRegistry>,
    watchers: RefCell<mutation::MutationWatchers>,
    storage: RefCell<Box<dyn Storage>>,
}

#[derive(Clone)]
pub struct Page {
    inner: Rc<PageInner>,
}

impl Page {
    pub fn load(data: &[u8], options: PageOptions, storage: Box<dyn Storage>) -> SiteResult<Self> {
        let dom = html_to_dom(data, &options.encoding)?;

        Ok(Self {
            inner: Rc::new(PageInner {
                dom,
                encoding: options.encoding,
                locale: options.locale,
                viewport_width: Cell::new(options.viewport_width),
                timers: RefCell::new(timers::TimerQueue::default()),
                listeners: RefCell::new(events::ListenerRegistry::default()),
                watchers: RefCell::new(mutation::MutationWatchers::default()),
                storage: RefCell::new(storage),
            }),
        })
    }

    /// Loads a UTF-8 document with default options and in-memory storage
    pub fn from_html(html: &str) -> SiteResult<Self> {
        Self::load(
            html.as_bytes(),
            PageOptions::default(),
            Box::new(MemoryStorage::new()),
        )
    }

    // Document

    pub fn document(&self) -> Handle {
        self.inner.dom.document.clone()
    }

    /// The root `<html>` element
    pub fn document_element(&self) -> Option<Handle> {
        get_child_node_by_name(&self.inner.dom.document, "html")
    }

    pub fn head(&self) -> Option<Handle> {
        find_nodes(&self.inner.dom.document, &["html", "head"])
            .into_iter()
            .next()
    }

    pub fn body(&self) -> Option<Handle> {
        self.document_element()
            .and_then(|html| get_child_node_by_name(&html, "body"))
    }

    pub fn query_all<F>(&self, predicate: F) -> Vec<Handle>
    where
        F: Fn(&Handle) -> bool,
    {
        find_all(&self.inner.dom.document, predicate)
    }

    pub fn query_first<F>(&self, predicate: F) -> Option<Handle>
    where
        F: Fn(&Handle) -> bool,
    {
        find_first(&self.inner.dom.document, predicate)
    }

    pub fn element_by_id(&self, id: &str) -> Option<Handle> {
        self.query_first(|node| get_node_attr(node, "id").as_deref() == Some(id))
    }

    /// Creates a detached element owned by this document
    pub fn create_element(&self, tag: &str, attrs: &[(&str, &str)]) -> Handle {
        let attrs = attrs
            .iter()
            .map(|(name, value)| Attribute {
                name: QualName::new(None, ns!(), LocalName::from(*name)),
                value: format_tendril!("{}", value),
            })
            .collect();

        create_element(
            &self.inner.dom,
            QualName::new(None, ns!(html), LocalName::from(tag)),
            attrs,
        )
    }

    pub fn serialize(&self) -> SiteResult<Vec<u8>> {
        serialize_document(&self.inner.dom.document, &self.inner.encoding)
    }

    // Structural changes reported to watchers

    pub fn append_child(&self, parent: &Handle, child: Handle) {
        dom::append_child(parent, child.clone());
        self.record(parent, &[child]);
    }

    /// Parses `html` and appends the result to `parent`
    pub fn append_html(&self, parent: &Handle, html: &str) -> Vec<Handle> {
        let added = append_html(parent, html);
        self.record(parent, &added);
        added
    }

    /// `element.innerHTML = html`
    pub fn set_inner_html(&self, node: &Handle, html: &str) {
        let added = replace_with_html(node, html);
        self.record(node, &added);
    }

    /// `element.textContent = text`
    pub fn set_text_content(&self, node: &Handle, text: &str) {
        let added = replace_with_text(node, text);
        self.record(node, &added);
    }

    fn record(&self, target: &Handle, added: &[Handle]) {
        self.inner.watchers.borrow_mut().record(target, added);
    }

    /// Subscribes to node insertions anywhere under `root`
    pub fn watch<F>(&self, root: &Handle, callback: F) -> WatchId
    where
        F: Fn(&Page, &[MutationRecord]) + 'static,
    {
        self.inner
            .watchers
            .borrow_mut()
            .watch(root, Rc::new(callback))
    }

    /// Subscribes to element insertions under `root`, one call per inserted element
    pub fn watch_added_elements<F>(&self, root: &Handle, on_element_added: F) -> WatchId
    where
        F: Fn(&Page, &Handle) + 'static,
    {
        self.watch(root, move |page, records| {
            for record in records {
                for node in record.added_nodes.iter().filter(|node| dom::is_element(node)) {
                    on_element_added(page, node);
                }
            }
        })
    }

    pub fn unwatch(&self, id: WatchId) -> bool {
        self.inner.watchers.borrow_mut().unwatch(id)
    }

    /// Delivers queued mutation records, including records queued by the callbacks themselves
    pub fn flush_mutations(&self) {
        for _ in 0..MAX_DELIVERY_ROUNDS {
            let batches = self.inner.watchers.borrow_mut().take_pending();
            if batches.is_empty() {
                return;
            }

            for (callback, records) in batches {
                callback(self, &records);
            }
        }

        if self.inner.watchers.borrow().has_pending() {
            tracing::warn!(
                "Mutation records still pending after {} delivery rounds",
                MAX_DELIVERY_ROUNDS
            );
        }
    }

    // Events

    pub fn add_event_listener<F>(&self, node: &Handle, kind: EventKind, listener: F)
    where
        F: Fn(&Page, &Event) + 'static,
    {
        self.inner
            .listeners
            .borrow_mut()
            .add(node, kind, Rc::new(listener));
    }

    pub fn listener_count(&self, node: &Handle) -> usize {
        self.inner.listeners.borrow().count_for(node)
    }

    /// Dispatches an event at `target`, returning false when a listener prevented the default
    pub fn dispatch(&self, target: &Handle, kind: EventKind) -> bool {
        let event = Event::new(kind, target.clone());

        let mut path = vec![target.clone()];
        let mut current = dom::get_parent_node(target);
        while let Some(node) = current {
            current = dom::get_parent_node(&node);
            path.push(node);
        }
        if kind.outermost_first() {
            path.reverse();
        }

        for node in path.iter() {
            let listeners = self.inner.listeners.borrow().listeners_for(node, kind);
            for listener in listeners {
                listener(self, &event);
            }
        }

        self.flush_mutations();
        !event.default_prevented()
    }

    pub fn click(&self, target: &Handle) -> bool {
        self.dispatch(target, EventKind::Click)
    }

    /// Moves the pointer from outside the document onto `target`
    pub fn mouse_enter(&self, target: &Handle) {
        self.dispatch(target, EventKind::MouseEnter);
    }

    /// Moves the pointer from `target` out of the document
    pub fn mouse_leave(&self, target: &Handle) {
        self.dispatch(target, EventKind::MouseLeave);
    }

    // Timers

    /// Time elapsed on the virtual clock since the page was loaded
    pub fn now(&self) -> Duration {
        self.inner.timers.borrow().now()
    }

    pub fn set_timeout<F>(&self, delay: Duration, task: F) -> TimerId
    where
        F: Fn(&Page) + 'static,
    {
        self.inner
            .timers
            .borrow_mut()
            .schedule(delay, None, Rc::new(task))
    }

    pub fn set_interval<F>(&self, period: Duration, task: F) -> TimerId
    where
        F: Fn(&Page) + 'static,
    {
        self.inner
            .timers
            .borrow_mut()
            .schedule(period, Some(period), Rc::new(task))
    }

    pub fn clear_timer(&self, id: TimerId) {
        self.inner.timers.borrow_mut().clear(id);
    }

    pub fn timer_pending(&self, id: TimerId) -> bool {
        self.inner.timers.borrow().is_pending(id)
    }

    pub fn pending_timer_count(&self) -> usize {
        self.inner.timers.borrow().len()
    }

    /// Moves the clock forward, running every timer that falls due on the way
    pub fn advance(&self, duration: Duration) {
        let until = self.now() + duration;

        loop {
            let task = self.inner.timers.borrow_mut().pop_due(until);
            let Some(task) = task else {
                break;
            };

            task(self);
            self.flush_mutations();
        }

        self.inner.timers.borrow_mut().set_now(until);
    }

    // Environment

    /// Browser-reported locale, if any
    pub fn locale(&self) -> Option<&str> {
        self.inner.locale.as_deref()
    }

    pub fn viewport_width(&self) -> u32 {
        self.inner.viewport_width.get()
    }

    pub fn set_viewport_width(&self, width: u32) {
        self.inner.viewport_width.set(width);
    }

    pub fn storage_get(&self, key: &str) -> Option<String> {
        self.inner.storage.borrow().get_item(key)
    }

    pub fn storage_set(&self, key: &str, value: &str) -> SiteResult<()> {
        self.inner.storage.borrow_mut().set_item(key, value)
    }
}
