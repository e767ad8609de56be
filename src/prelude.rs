//! Prelude module for convenient imports
//!
//! Re-exports the types most hosts need to drive a workflow canvas.
//!
//! # Example
//!
//! ```rust
//! use flowblox::prelude::*;
//!
//! let mut store = GraphStore::new();
//! let a = store.add_node(NodeType::Ai, Position::new(0.0, 0.0), "Summarize");
//! let err = store.add_connection(a, a).unwrap_err();
//! assert!(matches!(err, ConnectionError::SameNode { .. }));
//! ```

// Graph and interaction state
pub use crate::draft::{CommitOutcome, ConnectionDraft, ConnectionDraftMachine, DraftState};
pub use crate::editor::{Editor, EditorBuilder, EditorConfig, EventOutcome, InputEvent};
pub use crate::selection::SelectionController;
pub use crate::store::{GraphEvent, GraphObserver, GraphStore, ObserverId};

// Model types
pub use crate::model::{Connection, ConnectionId, Node, NodeId, NodeType, Position};

// Geometry and rendering
pub use crate::layout::{Anchors, CubicBezier, NodeSize};
pub use crate::render::RenderFrame;

// Error types
pub use crate::error::{ConnectionError, ScriptError};
