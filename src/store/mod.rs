use crate::error::ConnectionError;
use crate::model::{Connection, ConnectionId, Node, NodeId, NodeType, Position};
use ahash::AHashSet;
use std::fmt;
use tracing::debug;

mod event;

pub use event::{GraphEvent, GraphObserver, ObserverId};

/// Sole owner of the workflow graph.
///
/// Every operation leaves the graph consistent: each connection references two
/// distinct existing nodes, and no ordered `(source, target)` pair appears twice.
/// Removing a node removes its connections in the same step, so no observer
/// and no reader ever sees a dangling connection.
///
/// Nodes and connections are kept in insertion order, which is what
/// [`vertical_order`](crate::layout::vertical_order) uses to break ties.
#[derive(Default)]
pub struct GraphStore {
    nodes: Vec<Node>,
    connections: Vec<Connection>,
    /// Index of existing `(source, target)` pairs for duplicate checks.
    pairs: AHashSet<(NodeId, NodeId)>,
    observers: Vec<(ObserverId, Box<dyn GraphObserver>)>,
    next_observer_id: u64,
}

impl fmt::Debug for GraphStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphStore")
            .field("nodes", &self.nodes)
            .field("connections", &self.connections)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer that is called after every mutation.
    pub fn subscribe(&mut self, observer: Box<dyn GraphObserver>) -> ObserverId {
        let id = ObserverId(self.next_observer_id);
        self.next_observer_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Returns `false` if no observer was registered under `id`.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    fn notify(&mut self, event: GraphEvent) {
        for (_, observer) in self.observers.iter_mut() {
            observer.on_graph_event(&event);
        }
    }

    // --- Nodes ---

    pub fn add_node(
        &mut self,
        node_type: NodeType,
        position: Position,
        title: impl Into<String>,
    ) -> NodeId {
        let node = Node {
            id: NodeId::new(),
            node_type,
            title: title.into(),
            position,
        };
        let id = node.id;
        debug!(node_id = %id, node_type = %node_type, "node added");
        self.nodes.push(node.clone());
        self.notify(GraphEvent::NodeAdded(node));
        id
    }

    /// Removes the node and every connection touching it. Absent ids are ignored.
    pub fn remove_node(&mut self, node_id: NodeId) {
        let Some(index) = self.nodes.iter().position(|n| n.id == node_id) else {
            debug!(node_id = %node_id, "remove_node ignored, node absent");
            return;
        };
        let node = self.nodes.remove(index);

        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.connections)
            .into_iter()
            .partition(|c| c.involves(node_id));
        self.connections = kept;
        for connection in &removed {
            self.pairs
                .remove(&(connection.source_id, connection.target_id));
        }

        debug!(
            node_id = %node_id,
            cascaded = removed.len(),
            "node removed"
        );
        self.notify(GraphEvent::NodeRemoved {
            node,
            connections: removed,
        });
    }

    /// Changes a node's display title. Absent ids are ignored.
    pub fn rename_node(&mut self, node_id: NodeId, title: impl Into<String>) {
        let title = title.into();
        let Some(node) = self.nodes.iter_mut().find(|n| n.id == node_id) else {
            return;
        };
        if node.title == title {
            return;
        }
        node.title = title;
        let updated = node.clone();
        debug!(node_id = %node_id, title = %updated.title, "node renamed");
        self.notify(GraphEvent::NodeUpdated(updated));
    }

    /// Moves a node to a new canvas position. Absent ids are ignored.
    pub fn move_node(&mut self, node_id: NodeId, position: Position) {
        let Some(node) = self.nodes.iter_mut().find(|n| n.id == node_id) else {
            return;
        };
        if node.position == position {
            return;
        }
        node.position = position;
        let updated = node.clone();
        debug!(node_id = %node_id, position = %position, "node moved");
        self.notify(GraphEvent::NodeUpdated(updated));
    }

    // --- Connections ---

    pub fn add_connection(
        &mut self,
        source_id: NodeId,
        target_id: NodeId,
    ) -> Result<ConnectionId, ConnectionError> {
        if source_id == target_id {
            return Err(ConnectionError::SameNode { node_id: source_id });
        }
        for node_id in [source_id, target_id] {
            if !self.contains_node(node_id) {
                return Err(ConnectionError::NodeNotFound { node_id });
            }
        }
        if !self.pairs.insert((source_id, target_id)) {
            return Err(ConnectionError::DuplicateConnection {
                source_id,
                target_id,
            });
        }

        let connection = Connection {
            id: ConnectionId::new(),
            source_id,
            target_id,
        };
        let id = connection.id;
        debug!(
            connection_id = %id,
            source_id = %source_id,
            target_id = %target_id,
            "connection added"
        );
        self.connections.push(connection.clone());
        self.notify(GraphEvent::ConnectionAdded(connection));
        Ok(id)
    }

    /// Removes a single connection. Absent ids are ignored.
    pub fn remove_connection(&mut self, connection_id: ConnectionId) {
        let Some(index) = self
            .connections
            .iter()
            .position(|c| c.id == connection_id)
        else {
            debug!(connection_id = %connection_id, "remove_connection ignored, connection absent");
            return;
        };
        let connection = self.connections.remove(index);
        self.pairs
            .remove(&(connection.source_id, connection.target_id));
        debug!(connection_id = %connection_id, "connection removed");
        self.notify(GraphEvent::ConnectionRemoved(connection));
    }

    // --- Reads ---

    /// All nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All connections in insertion order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn node(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == node_id)
    }

    pub fn connection(&self, connection_id: ConnectionId) -> Option<&Connection> {
        self.connections.iter().find(|c| c.id == connection_id)
    }

    pub fn contains_node(&self, node_id: NodeId) -> bool {
        self.node(node_id).is_some()
    }

    pub fn contains_connection(&self, source_id: NodeId, target_id: NodeId) -> bool {
        self.pairs.contains(&(source_id, target_id))
    }

    /// Connections that start or end at `node_id`.
    pub fn connections_of(&self, node_id: NodeId) -> impl Iterator<Item = &Connection> {
        self.connections.iter().filter(move |c| c.involves(node_id))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
