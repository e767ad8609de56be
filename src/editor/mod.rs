use crate::draft::{CommitOutcome, ConnectionDraftMachine};
use crate::layout::{self, NodeSize};
use crate::model::{NodeId, NodeType, Position};
use crate::render::{self, RenderFrame};
use crate::selection::SelectionController;
use crate::store::{GraphObserver, GraphStore, ObserverId};
use serde::Deserialize;
use tracing::debug;

mod input;

pub use input::{EventOutcome, InputEvent};

/// Canvas settings shared by layout, placement and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub node_size: NodeSize,
    /// Canvas width used to center newly appended nodes.
    pub viewport_width: f64,
    /// Vertical distance between an appended node and the lowest existing node.
    pub append_spacing: f64,
    /// `y` of the first node placed on an empty canvas.
    pub first_node_y: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            node_size: NodeSize::default(),
            viewport_width: 1024.0,
            append_spacing: 200.0,
            first_node_y: 200.0,
        }
    }
}

pub struct EditorBuilder {
    config: EditorConfig,
    observers: Vec<Box<dyn GraphObserver>>,
}

impl EditorBuilder {
    pub fn new() -> Self {
        Self {
            config: EditorConfig::default(),
            observers: Vec::new(),
        }
    }
    pub fn with_config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }
    pub fn with_node_size(mut self, node_size: NodeSize) -> Self {
        self.config.node_size = node_size;
        self
    }
    pub fn with_viewport_width(mut self, width: f64) -> Self {
        self.config.viewport_width = width;
        self
    }
    pub fn with_append_spacing(mut self, spacing: f64) -> Self {
        self.config.append_spacing = spacing;
        self
    }
    pub fn with_first_node_y(mut self, y: f64) -> Self {
        self.config.first_node_y = y;
        self
    }
    /// Registers a renderer or other listener before any node exists.
    pub fn with_observer(mut self, observer: Box<dyn GraphObserver>) -> Self {
        self.observers.push(observer);
        self
    }
    pub fn build(self) -> Editor {
        let mut store = GraphStore::new();
        let (selection, _) = SelectionController::attached_to(&mut store);
        for observer in self.observers {
            store.subscribe(observer);
        }
        Editor {
            store,
            selection,
            draft: ConnectionDraftMachine::new(self.config.node_size),
            config: self.config,
        }
    }
}

impl Default for EditorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The root of a workflow canvas: owns the graph, the selection and the
/// connection draft, and turns host input events into operations on them.
pub struct Editor {
    store: GraphStore,
    selection: SelectionController,
    draft: ConnectionDraftMachine,
    config: EditorConfig,
}

impl Default for Editor {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> EditorBuilder {
        EditorBuilder::new()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    /// Direct access for programmatic edits. Selection stays linked to the store.
    pub fn store_mut(&mut self) -> &mut GraphStore {
        &mut self.store
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn draft(&self) -> &ConnectionDraftMachine {
        &self.draft
    }

    pub fn subscribe(&mut self, observer: Box<dyn GraphObserver>) -> ObserverId {
        self.store.subscribe(observer)
    }

    /// Applies one input event. Events never fail; inapplicable ones are ignored.
    pub fn dispatch(&mut self, event: InputEvent) -> EventOutcome {
        match event {
            InputEvent::PointerDownOnOutputHandle { node_id } => {
                EventOutcome::from_flag(self.draft.start_drag(&self.store, node_id))
            }
            InputEvent::PointerUpOnInputHandle { node_id } => {
                match self.draft.commit(&mut self.store, node_id) {
                    CommitOutcome::NotDragging => EventOutcome::Ignored,
                    outcome => EventOutcome::Commit(outcome),
                }
            }
            InputEvent::PointerMove { position } => {
                EventOutcome::from_flag(self.draft.update_cursor(position))
            }
            InputEvent::PointerUpOnBackground => EventOutcome::from_flag(self.draft.cancel()),
            InputEvent::ClickNode { node_id } => {
                if !self.store.contains_node(node_id) {
                    return EventOutcome::Ignored;
                }
                self.selection.select(Some(node_id));
                EventOutcome::Handled
            }
            InputEvent::ClickBackground => {
                self.selection.clear();
                self.draft.cancel();
                EventOutcome::Handled
            }
            InputEvent::RequestAddNode {
                node_type,
                position,
                title,
            } => EventOutcome::NodeAdded(self.store.add_node(node_type, position, title)),
            InputEvent::RequestAppendNode { node_type } => match self.append_node(node_type) {
                Some(id) => EventOutcome::NodeAdded(id),
                None => EventOutcome::Ignored,
            },
            InputEvent::RequestRemoveNode { node_id } => {
                let present = self.store.contains_node(node_id);
                self.store.remove_node(node_id);
                EventOutcome::from_flag(present)
            }
            InputEvent::RequestRemoveConnection { connection_id } => {
                let present = self.store.connection(connection_id).is_some();
                self.store.remove_connection(connection_id);
                EventOutcome::from_flag(present)
            }
            InputEvent::RequestRenameNode { node_id, title } => {
                let present = self.store.contains_node(node_id);
                self.store.rename_node(node_id, title);
                EventOutcome::from_flag(present)
            }
            InputEvent::RequestMoveNode { node_id, position } => {
                let present = self.store.contains_node(node_id);
                self.store.move_node(node_id, position);
                EventOutcome::from_flag(present)
            }
        }
    }

    /// The add button is offered until the workflow has an output node.
    pub fn can_append(&self) -> bool {
        !self
            .store
            .nodes()
            .iter()
            .any(|n| n.node_type == NodeType::Output)
    }

    /// Where [`append_node`](Self::append_node) would place the next node.
    pub fn next_append_position(&self) -> Position {
        let x = self.config.viewport_width / 2.0 - self.config.node_size.width / 2.0;
        let y = layout::vertical_order(self.store.nodes())
            .last()
            .map(|lowest| lowest.position.y + self.config.append_spacing)
            .unwrap_or(self.config.first_node_y);
        Position::new(x, y)
    }

    /// Adds a node of `node_type` below the lowest node with its default title.
    /// Returns `None` once the workflow already ends in an output node.
    pub fn append_node(&mut self, node_type: NodeType) -> Option<NodeId> {
        if !self.can_append() {
            debug!(node_type = %node_type, "append refused, workflow already has an output");
            return None;
        }
        let position = self.next_append_position();
        Some(
            self.store
                .add_node(node_type, position, node_type.default_title()),
        )
    }

    /// Everything a renderer needs for the current state.
    pub fn frame(&self) -> RenderFrame {
        render::build_frame(
            &self.store,
            &self.selection,
            &self.draft,
            self.config.node_size,
            self.can_append(),
        )
    }
}
