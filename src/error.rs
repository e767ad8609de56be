use crate::model::NodeId;
use thiserror::Error;

/// Reasons a connection cannot be added to the graph.
///
/// These are expected outcomes of user gestures, never bugs. Callers match on
/// the variant to decide how (or whether) to tell the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    #[error("Node '{node_id}' cannot be connected to itself")]
    SameNode { node_id: NodeId },

    #[error("Node '{node_id}' does not exist in the graph")]
    NodeNotFound { node_id: NodeId },

    #[error("A connection from '{source_id}' to '{target_id}' already exists")]
    DuplicateConnection { source_id: NodeId, target_id: NodeId },
}

/// Errors raised while loading a recorded input-event script.
#[derive(Error, Debug, Clone)]
pub enum ScriptError {
    #[error("Failed to parse event script: {0}")]
    Parse(String),

    #[error("Failed to read event script '{path}': {message}")]
    Io { path: String, message: String },
}
