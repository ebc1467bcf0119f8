//! Structural-change watchers, the page's MutationObserver.
//!
//! Records are queued when nodes are inserted through the page and handed to
//! callbacks at the next delivery checkpoint.

use markup5ever_rcdom::Handle;

use crate::html::query::is_descendant_of;

use super::WatchCallback;

/// Nodes inserted under `target` by one operation
#[derive(Clone)]
pub struct MutationRecord {
    pub target: Handle,
    pub added_nodes: Vec<Handle>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WatchId(u64);

struct Watcher {
    id: WatchId,
    root: Handle,
    callback: WatchCallback,
    pending: Vec<MutationRecord>,
}

#[derive(Default)]
pub struct MutationWatchers {
    next_id: u64,
    watchers: Vec<Watcher>,
}

impl MutationWatchers {
    pub fn watch(&mut self, root: &Handle, callback: WatchCallback) -> WatchId {
        let id = WatchId(self.next_id);
        self.next_id += 1;
        self.watchers.push(Watcher {
            id,
            root: root.clone(),
            callback,
            pending: Vec::new(),
        });
        id
    }

    pub fn unwatch(&mut self, id: WatchId) -> bool {
        let before = self.watchers.len();
        self.watchers.retain(|watcher| watcher.id != id);
        self.watchers.len() != before
    }

    /// Queues a record for every watcher whose subtree contains `target`
    pub fn record(&mut self, target: &Handle, added_nodes: &[Handle]) {
        if added_nodes.is_empty() {
            return;
        }

        for watcher in self.watchers.iter_mut() {
            if is_descendant_of(target, &watcher.root) {
                watcher.pending.push(MutationRecord {
                    target: target.clone(),
                    added_nodes: added_nodes.to_vec(),
                });
            }
        }
    }

    pub fn has_pending(&self) -> bool {
        self.watchers.iter().any(|watcher| !watcher.pending.is_empty())
    }

    /// Drains the queued records, grouped per watcher in subscription order
    pub fn take_pending(&mut self) -> Vec<(WatchCallback, Vec<MutationRecord>)> {
        self.watchers
            .iter_mut()
            .filter(|watcher| !watcher.pending.is_empty())
            .map(|watcher| (watcher.callback.clone(), std::mem::take(&mut watcher.pending)))
            .collect()
    }
}
