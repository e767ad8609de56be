use crate::model::{Connection, Node};

/// A change applied to the graph, delivered to observers after the store has
/// reached its new consistent state.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphEvent {
    NodeAdded(Node),
    /// Title or position changed. Carries the node as it is now.
    NodeUpdated(Node),
    /// The node and every connection that referenced it, removed together.
    NodeRemoved {
        node: Node,
        connections: Vec<Connection>,
    },
    ConnectionAdded(Connection),
    ConnectionRemoved(Connection),
}

/// Receives every graph mutation synchronously, before the mutating call returns.
pub trait GraphObserver {
    fn on_graph_event(&mut self, event: &GraphEvent);
}

impl<F> GraphObserver for F
where
    F: FnMut(&GraphEvent),
{
    fn on_graph_event(&mut self, event: &GraphEvent) {
        self(event)
    }
}

/// Handle returned by [`GraphStore::subscribe`](super::GraphStore::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub(super) u64);
