//! Recorded editing sessions.
//!
//! Node ids are random, so a script refers to nodes by names it assigns when
//! adding them. [`ScriptRunner`] resolves those names and replays each step as
//! an [`InputEvent`].

use crate::editor::{Editor, EventOutcome, InputEvent};
use crate::error::ScriptError;
use crate::model::{NodeId, NodeType, Position};
use ahash::AHashMap;
use serde::Deserialize;
use std::fs;
use tracing::debug;

/// One step of a script, as written in JSON (`{"step": "add_node", ...}`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum ScriptStep {
    AddNode {
        name: String,
        #[serde(rename = "type")]
        node_type: NodeType,
        position: Position,
        title: Option<String>,
    },
    AppendNode {
        name: String,
        #[serde(rename = "type")]
        node_type: NodeType,
    },
    RemoveNode {
        node: String,
    },
    RenameNode {
        node: String,
        title: String,
    },
    MoveNode {
        node: String,
        position: Position,
    },
    StartDrag {
        node: String,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    /// Releases the pointer over `on`'s input handle, or over the background.
    Release {
        on: Option<String>,
    },
    ClickNode {
        node: String,
    },
    ClickBackground,
    Disconnect {
        source: String,
        target: String,
    },
}

pub fn load_script(json: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    serde_json::from_str(json).map_err(|e| ScriptError::Parse(e.to_string()))
}

pub fn load_script_file(path: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    let json = fs::read_to_string(path).map_err(|e| ScriptError::Io {
        path: path.to_string(),
        message: e.to_string(),
    })?;
    load_script(&json)
}

/// Replays script steps against an editor, remembering node names.
pub struct ScriptRunner<'e> {
    editor: &'e mut Editor,
    names: AHashMap<String, NodeId>,
}

impl<'e> ScriptRunner<'e> {
    pub fn new(editor: &'e mut Editor) -> Self {
        Self {
            editor,
            names: AHashMap::new(),
        }
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.names.get(name).copied()
    }

    pub fn run(&mut self, steps: impl IntoIterator<Item = ScriptStep>) -> Vec<EventOutcome> {
        steps.into_iter().map(|step| self.step(step)).collect()
    }

    /// Applies one step. Steps naming an unknown node are ignored, except a
    /// release, which then cancels the drag like a release over the background.
    pub fn step(&mut self, step: ScriptStep) -> EventOutcome {
        let event = match self.translate(step) {
            Translated::Event(event) => event,
            Translated::Add(name, event) => {
                let outcome = self.editor.dispatch(event);
                if let EventOutcome::NodeAdded(id) = outcome {
                    self.names.insert(name, id);
                }
                return outcome;
            }
            Translated::Unresolved(name) => {
                debug!(name = %name, "script step names an unknown node");
                return EventOutcome::Ignored;
            }
        };
        self.editor.dispatch(event)
    }

    fn translate(&self, step: ScriptStep) -> Translated {
        let event = match step {
            ScriptStep::AddNode {
                name,
                node_type,
                position,
                title,
            } => {
                let title = title.unwrap_or_else(|| node_type.default_title());
                return Translated::Add(
                    name,
                    InputEvent::RequestAddNode {
                        node_type,
                        position,
                        title,
                    },
                );
            }
            ScriptStep::AppendNode { name, node_type } => {
                return Translated::Add(name, InputEvent::RequestAppendNode { node_type });
            }
            ScriptStep::RemoveNode { node } => match self.node_id(&node) {
                Some(node_id) => InputEvent::RequestRemoveNode { node_id },
                None => return Translated::Unresolved(node),
            },
            ScriptStep::RenameNode { node, title } => match self.node_id(&node) {
                Some(node_id) => InputEvent::RequestRenameNode { node_id, title },
                None => return Translated::Unresolved(node),
            },
            ScriptStep::MoveNode { node, position } => match self.node_id(&node) {
                Some(node_id) => InputEvent::RequestMoveNode { node_id, position },
                None => return Translated::Unresolved(node),
            },
            ScriptStep::StartDrag { node } => match self.node_id(&node) {
                Some(node_id) => InputEvent::PointerDownOnOutputHandle { node_id },
                None => return Translated::Unresolved(node),
            },
            ScriptStep::PointerMove { x, y } => InputEvent::PointerMove {
                position: Position::new(x, y),
            },
            ScriptStep::Release { on } => match on.as_deref().and_then(|n| self.node_id(n)) {
                Some(node_id) => InputEvent::PointerUpOnInputHandle { node_id },
                None => InputEvent::PointerUpOnBackground,
            },
            ScriptStep::ClickNode { node } => match self.node_id(&node) {
                Some(node_id) => InputEvent::ClickNode { node_id },
                None => return Translated::Unresolved(node),
            },
            ScriptStep::ClickBackground => InputEvent::ClickBackground,
            ScriptStep::Disconnect { source, target } => {
                let (Some(source_id), Some(target_id)) =
                    (self.node_id(&source), self.node_id(&target))
                else {
                    return Translated::Unresolved(format!("{} -> {}", source, target));
                };
                let found = self
                    .editor
                    .store()
                    .connections()
                    .iter()
                    .find(|c| c.source_id == source_id && c.target_id == target_id);
                match found {
                    Some(connection) => InputEvent::RequestRemoveConnection {
                        connection_id: connection.id,
                    },
                    None => return Translated::Unresolved(format!("{} -> {}", source, target)),
                }
            }
        };
        Translated::Event(event)
    }
}

enum Translated {
    Event(InputEvent),
    /// Adds a node and binds its id to the name.
    Add(String, InputEvent),
    Unresolved(String),
}
