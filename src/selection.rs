//! Tracks the single node that is open for detail editing.

use crate::model::NodeId;
use crate::store::{GraphEvent, GraphObserver, GraphStore, ObserverId};
use std::cell::Cell;
use std::rc::Rc;
use tracing::debug;

/// Holds at most one selected node id.
///
/// Clones share the same selection. [`attach`](Self::attach) registers a clone
/// with a [`GraphStore`] so that removing the selected node clears the selection
/// before `remove_node` returns.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    selected: Rc<Cell<Option<NodeId>>>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a controller already linked to `store`.
    pub fn attached_to(store: &mut GraphStore) -> (Self, ObserverId) {
        let selection = Self::new();
        let observer = selection.attach(store);
        (selection, observer)
    }

    pub fn attach(&self, store: &mut GraphStore) -> ObserverId {
        store.subscribe(Box::new(self.clone()))
    }

    /// Sets the selection to exactly `node_id`; `None` clears it.
    pub fn select(&self, node_id: Option<NodeId>) {
        if self.selected.get() != node_id {
            debug!(selected = ?node_id.map(|id| id.short()), "selection changed");
        }
        self.selected.set(node_id);
    }

    pub fn clear(&self) {
        self.select(None);
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected.get()
    }

    pub fn is_selected(&self, node_id: NodeId) -> bool {
        self.selected.get() == Some(node_id)
    }
}

impl GraphObserver for SelectionController {
    fn on_graph_event(&mut self, event: &GraphEvent) {
        if let GraphEvent::NodeRemoved { node, .. } = event {
            if self.is_selected(node.id) {
                self.clear();
            }
        }
    }
}
