//! Pure geometry for drawing the workflow.
//!
//! Nothing here touches a store; every function is a deterministic function of
//! its arguments, so renderers can call them as often as they like.

use crate::model::{Node, Position};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

mod curve;

pub use curve::CubicBezier;

/// Fixed on-canvas size of every node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeSize {
    pub width: f64,
    pub height: f64,
}

impl Default for NodeSize {
    fn default() -> Self {
        Self {
            width: 256.0,
            height: 140.0,
        }
    }
}

/// Where connections attach to a node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Anchors {
    /// Bottom-center; connections leave from here.
    pub output: Position,
    /// Top-center; connections arrive here.
    pub input: Position,
}

/// Nodes sorted top to bottom by `position.y`.
///
/// The sort is stable: nodes at the same height keep their relative order
/// from `nodes`. Stored positions are not modified.
pub fn vertical_order(nodes: &[Node]) -> Vec<&Node> {
    nodes
        .iter()
        .sorted_by(|a, b| sort_key(a.position.y).total_cmp(&sort_key(b.position.y)))
        .collect()
}

// total_cmp orders -0.0 before 0.0; fold them together so they tie.
fn sort_key(y: f64) -> f64 {
    y + 0.0
}

pub fn anchor_points(node: &Node, size: NodeSize) -> Anchors {
    let center_x = node.position.x + size.width / 2.0;
    Anchors {
        output: Position::new(center_x, node.position.y + size.height),
        input: Position::new(center_x, node.position.y),
    }
}

/// Curve for a committed connection between an output anchor and an input anchor.
///
/// Both control points sit on the horizontal line halfway between the anchors,
/// so vertically stacked nodes get a straight drop and offset nodes an S-curve.
pub fn connection_path(source: Position, target: Position) -> CubicBezier {
    let mid_y = (source.y + target.y) / 2.0;
    CubicBezier {
        start: source,
        control1: Position::new(source.x, mid_y),
        control2: Position::new(target.x, mid_y),
        end: target,
    }
}

/// Curve for the live preview that follows the pointer while a connection is
/// being dragged. Control points share the horizontal midpoint.
pub fn draft_path(source: Position, cursor: Position) -> CubicBezier {
    let mid_x = (source.x + cursor.x) / 2.0;
    CubicBezier {
        start: source,
        control1: Position::new(mid_x, source.y),
        control2: Position::new(mid_x, cursor.y),
        end: cursor,
    }
}
