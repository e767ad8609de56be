//! Common test utilities for building graphs and observing store events.
use flowblox::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Shorthand for a canvas position.
#[allow(dead_code)]
pub fn pos(x: f64, y: f64) -> Position {
    Position::new(x, y)
}

/// A store with an input node `T` at the top and an output node `O` below it.
#[allow(dead_code)]
pub fn create_input_output_store() -> (GraphStore, NodeId, NodeId) {
    let mut store = GraphStore::new();
    let t = store.add_node(NodeType::Input, pos(0.0, 0.0), "T");
    let o = store.add_node(NodeType::Output, pos(0.0, 200.0), "O");
    (store, t, o)
}

/// A four-node chain: input -> data -> ai -> output, stacked 200px apart.
#[allow(dead_code)]
pub fn create_chain_store() -> (GraphStore, Vec<NodeId>) {
    let mut store = GraphStore::new();
    let ids: Vec<NodeId> = [
        (NodeType::Input, "Form"),
        (NodeType::Data, "PostgreSQL"),
        (NodeType::Ai, "GPT Model"),
        (NodeType::Output, "Reply"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (node_type, title))| store.add_node(node_type, pos(100.0, i as f64 * 200.0), title))
    .collect();
    for pair in ids.windows(2) {
        store
            .add_connection(pair[0], pair[1])
            .expect("chain connection should be valid");
    }
    (store, ids)
}

/// Records every event the store emits. Clones share the same log.
#[derive(Clone, Default)]
#[allow(dead_code)]
pub struct RecordingObserver {
    pub events: Rc<RefCell<Vec<GraphEvent>>>,
}

#[allow(dead_code)]
impl RecordingObserver {
    pub fn attach(store: &mut GraphStore) -> Self {
        let recorder = Self::default();
        let log = Rc::clone(&recorder.events);
        store.subscribe(Box::new(move |event: &GraphEvent| {
            log.borrow_mut().push(event.clone())
        }));
        recorder
    }

    pub fn take(&self) -> Vec<GraphEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }
}

/// Asserts that every connection references two distinct existing nodes and
/// that no ordered pair appears twice.
#[allow(dead_code)]
pub fn assert_graph_consistent(store: &GraphStore) {
    let mut seen = std::collections::HashSet::new();
    for c in store.connections() {
        assert!(store.contains_node(c.source_id), "dangling source {}", c.source_id);
        assert!(store.contains_node(c.target_id), "dangling target {}", c.target_id);
        assert_ne!(c.source_id, c.target_id, "self-loop on {}", c.source_id);
        assert!(seen.insert((c.source_id, c.target_id)), "duplicate pair");
    }
}
