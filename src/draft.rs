//! The "dragging a new connection" interaction.
//!
//! The machine is driven by plain method calls, so any pointer framework (or a
//! test feeding synthetic events) can drive it.

use crate::error::ConnectionError;
use crate::layout::{self, CubicBezier, NodeSize};
use crate::model::{ConnectionId, NodeId, Position};
use crate::store::GraphStore;
use serde::Serialize;
use tracing::debug;

/// A connection that is being dragged and is not attached to a target yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConnectionDraft {
    pub source_id: NodeId,
    pub cursor_position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DraftState {
    #[default]
    Idle,
    Dragging(ConnectionDraft),
}

/// Result of releasing a drag over an input handle.
#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome {
    /// No drag was in progress.
    NotDragging,
    Committed(ConnectionId),
    /// The store refused the connection. The draft is still discarded.
    Rejected(ConnectionError),
}

impl CommitOutcome {
    pub fn connection_id(&self) -> Option<ConnectionId> {
        match self {
            CommitOutcome::Committed(id) => Some(*id),
            _ => None,
        }
    }
}

/// Two-state machine: `Idle` or `Dragging(source, cursor)`.
///
/// Every `commit` and `cancel` returns the machine to `Idle`.
#[derive(Debug, Clone, Default)]
pub struct ConnectionDraftMachine {
    state: DraftState,
    node_size: NodeSize,
}

impl ConnectionDraftMachine {
    pub fn new(node_size: NodeSize) -> Self {
        Self {
            state: DraftState::Idle,
            node_size,
        }
    }

    pub fn state(&self) -> DraftState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DraftState::Dragging(_))
    }

    pub fn draft(&self) -> Option<&ConnectionDraft> {
        match &self.state {
            DraftState::Dragging(draft) => Some(draft),
            DraftState::Idle => None,
        }
    }

    /// Begins dragging from `source_id`'s output handle, with the cursor on
    /// that anchor. Refused (returns `false`, machine unchanged) when the node
    /// does not exist. A drag already in progress is replaced.
    pub fn start_drag(&mut self, store: &GraphStore, source_id: NodeId) -> bool {
        let Some(node) = store.node(source_id) else {
            debug!(source_id = %source_id, "start_drag refused, node absent");
            return false;
        };
        if let DraftState::Dragging(previous) = self.state {
            debug!(source_id = %previous.source_id, "previous draft replaced");
        }
        let anchor = layout::anchor_points(node, self.node_size).output;
        self.state = DraftState::Dragging(ConnectionDraft {
            source_id,
            cursor_position: anchor,
        });
        debug!(source_id = %source_id, "drag started");
        true
    }

    /// Moves the free end of the draft. Returns `false` when idle.
    pub fn update_cursor(&mut self, position: Position) -> bool {
        match &mut self.state {
            DraftState::Dragging(draft) => {
                draft.cursor_position = position;
                true
            }
            DraftState::Idle => false,
        }
    }

    /// Attempts to attach the draft to `target_id` and returns to `Idle`.
    pub fn commit(&mut self, store: &mut GraphStore, target_id: NodeId) -> CommitOutcome {
        let DraftState::Dragging(draft) = std::mem::take(&mut self.state) else {
            return CommitOutcome::NotDragging;
        };
        match store.add_connection(draft.source_id, target_id) {
            Ok(id) => CommitOutcome::Committed(id),
            Err(err) => {
                debug!(
                    source_id = %draft.source_id,
                    target_id = %target_id,
                    reason = %err,
                    "draft commit rejected"
                );
                CommitOutcome::Rejected(err)
            }
        }
    }

    /// Discards the draft without touching the graph. Returns `true` if a
    /// draft was discarded.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = DraftState::Idle;
        if was_dragging {
            debug!("drag cancelled");
        }
        was_dragging
    }

    /// The preview curve from the source's output anchor to the cursor.
    ///
    /// `None` when idle, or when the source node has disappeared mid-drag.
    pub fn preview(&self, store: &GraphStore) -> Option<CubicBezier> {
        let draft = self.draft()?;
        let source = store.node(draft.source_id)?;
        let anchor = layout::anchor_points(source, self.node_size).output;
        Some(layout::draft_path(anchor, draft.cursor_position))
    }
}
