use crate::draft::CommitOutcome;
use crate::model::{ConnectionId, NodeId, NodeType, Position};
use serde::{Deserialize, Serialize};

/// Input events a canvas host forwards to the [`Editor`](super::Editor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum InputEvent {
    PointerDownOnOutputHandle {
        node_id: NodeId,
    },
    PointerUpOnInputHandle {
        node_id: NodeId,
    },
    PointerMove {
        position: Position,
    },
    /// Pointer released anywhere that is not an input handle.
    PointerUpOnBackground,
    ClickNode {
        node_id: NodeId,
    },
    ClickBackground,
    RequestAddNode {
        node_type: NodeType,
        position: Position,
        title: String,
    },
    /// The add button below the last node: default title and placement.
    RequestAppendNode {
        node_type: NodeType,
    },
    RequestRemoveNode {
        node_id: NodeId,
    },
    /// Typically a double click on a rendered connection.
    RequestRemoveConnection {
        connection_id: ConnectionId,
    },
    RequestRenameNode {
        node_id: NodeId,
        title: String,
    },
    RequestMoveNode {
        node_id: NodeId,
        position: Position,
    },
}

/// What an [`InputEvent`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    /// The event changed editor state.
    Handled,
    /// The event did not apply, e.g. a pointer move while idle or an absent id.
    Ignored,
    NodeAdded(NodeId),
    /// A drag was released over an input handle.
    Commit(CommitOutcome),
}

impl EventOutcome {
    pub(super) fn from_flag(handled: bool) -> Self {
        if handled {
            EventOutcome::Handled
        } else {
            EventOutcome::Ignored
        }
    }
}
