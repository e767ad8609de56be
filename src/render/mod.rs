//! Renderer-facing snapshot of the editor state.

use crate::draft::ConnectionDraftMachine;
use crate::layout::{self, Anchors, CubicBezier, NodeSize};
use crate::model::{ConnectionId, NodeId, NodeType, Position};
use crate::selection::SelectionController;
use crate::store::GraphStore;
use ahash::AHashMap;
use serde::Serialize;

pub mod svg;

/// Radius of the dot drawn where a connection meets its target.
pub const END_MARKER_RADIUS: f64 = 4.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderNode {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub title: String,
    pub position: Position,
    pub icon: &'static str,
    pub color: &'static str,
    pub anchors: Anchors,
    pub selected: bool,
    /// Topmost node in vertical order.
    pub is_first: bool,
    /// Whether the node offers a delete button. The topmost node does not.
    pub removable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderConnection {
    pub id: ConnectionId,
    pub source_id: NodeId,
    pub target_id: NodeId,
    pub curve: CubicBezier,
    /// SVG path data for `curve`.
    pub path: String,
    pub end_marker: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderDraft {
    pub source_id: NodeId,
    pub cursor: Position,
    pub curve: CubicBezier,
    pub path: String,
}

/// One frame: nodes top to bottom, resolved connections, and the live draft.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderFrame {
    pub node_size: NodeSize,
    pub nodes: Vec<RenderNode>,
    pub connections: Vec<RenderConnection>,
    pub draft: Option<RenderDraft>,
    pub can_append: bool,
}

impl RenderFrame {
    pub fn node(&self, id: NodeId) -> Option<&RenderNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

pub fn build_frame(
    store: &GraphStore,
    selection: &SelectionController,
    draft: &ConnectionDraftMachine,
    node_size: NodeSize,
    can_append: bool,
) -> RenderFrame {
    let ordered = layout::vertical_order(store.nodes());

    let anchors: AHashMap<NodeId, Anchors> = ordered
        .iter()
        .map(|node| (node.id, layout::anchor_points(node, node_size)))
        .collect();

    let nodes = ordered
        .iter()
        .enumerate()
        .map(|(index, node)| RenderNode {
            id: node.id,
            node_type: node.node_type,
            title: node.title.clone(),
            position: node.position,
            icon: node.node_type.icon(),
            color: node.node_type.color(),
            anchors: layout::anchor_points(node, node_size),
            selected: selection.is_selected(node.id),
            is_first: index == 0,
            removable: index != 0,
        })
        .collect();

    // The store never holds a connection to a missing node; skipping keeps
    // rendering total regardless.
    let connections = store
        .connections()
        .iter()
        .filter_map(|connection| {
            let source = anchors.get(&connection.source_id)?.output;
            let target = anchors.get(&connection.target_id)?.input;
            let curve = layout::connection_path(source, target);
            Some(RenderConnection {
                id: connection.id,
                source_id: connection.source_id,
                target_id: connection.target_id,
                path: curve.to_svg_path(),
                curve,
                end_marker: target,
            })
        })
        .collect();

    let draft = draft.draft().and_then(|d| {
        let source = anchors.get(&d.source_id)?.output;
        let curve = layout::draft_path(source, d.cursor_position);
        Some(RenderDraft {
            source_id: d.source_id,
            cursor: d.cursor_position,
            path: curve.to_svg_path(),
            curve,
        })
    });

    RenderFrame {
        node_size,
        nodes,
        connections,
        draft,
        can_append,
    }
}
