//! # Flowblox - Workflow Canvas Core
//!
//! **Flowblox** is the model behind a node-based workflow canvas: users place
//! typed nodes and wire them together by dragging from an output handle to an
//! input handle. The crate owns the graph, the "connection being dragged"
//! interaction and the geometry used to draw both, and is independent of any
//! UI toolkit.
//!
//! ## Components
//!
//! 1.  **[`GraphStore`](store::GraphStore)**: owns nodes and connections and keeps them consistent.
//!     No self-loops, no duplicate `(source, target)` pairs, no dangling connections.
//! 2.  **[`SelectionController`](selection::SelectionController)**: the single node open for editing,
//!     cleared automatically when that node is removed.
//! 3.  **[`ConnectionDraftMachine`](draft::ConnectionDraftMachine)**: `Idle` / `Dragging` state machine
//!     driven by pointer events.
//! 4.  **[`layout`]**: vertical ordering, node anchors and Bezier paths.
//!
//! [`Editor`](editor::Editor) wires these together and consumes host input events.
//!
//! ## Quick Start
//!
//! ```rust
//! use flowblox::prelude::*;
//!
//! let mut editor = Editor::new();
//!
//! let input = editor.store_mut().add_node(NodeType::Input, Position::new(0.0, 0.0), "Form");
//! let output = editor.store_mut().add_node(NodeType::Output, Position::new(0.0, 200.0), "Reply");
//!
//! // Drag from the input node's output handle and release on the output node.
//! editor.dispatch(InputEvent::PointerDownOnOutputHandle { node_id: input });
//! editor.dispatch(InputEvent::PointerMove { position: Position::new(0.0, 150.0) });
//! let outcome = editor.dispatch(InputEvent::PointerUpOnInputHandle { node_id: output });
//! assert!(matches!(outcome, EventOutcome::Commit(CommitOutcome::Committed(_))));
//!
//! let frame = editor.frame();
//! assert_eq!(frame.connections.len(), 1);
//! println!("{}", frame.connections[0].path);
//!
//! // Removing a node removes its connections with it.
//! editor.dispatch(InputEvent::RequestRemoveNode { node_id: input });
//! assert!(editor.store().connections().is_empty());
//! ```

pub mod draft;
pub mod editor;
pub mod error;
pub mod layout;
pub mod model;
pub mod palette;
pub mod prelude;
pub mod render;
pub mod script;
pub mod selection;
pub mod store;
