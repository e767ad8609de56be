use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier of a node, allocated by the store when the node is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub Uuid);

impl NodeId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The first eight hex characters, as shown in the node detail panel.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A point in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The closed set of node kinds a workflow can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Ai,
    Data,
    Input,
    Output,
}

/// Input widget used by a type-specific field of the detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldKind {
    Select {
        options: &'static [(&'static str, &'static str)],
    },
}

/// A type-specific field shown in the node detail panel, beyond name and type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DetailField {
    pub label: &'static str,
    pub kind: FieldKind,
}

const AI_FIELDS: &[DetailField] = &[DetailField {
    label: "Model Selection",
    kind: FieldKind::Select {
        options: &[
            ("gpt-4o", "GPT-4o"),
            ("gpt-3.5-turbo", "GPT-3.5 Turbo"),
            ("claude-3", "Claude 3"),
        ],
    },
}];

const DATA_FIELDS: &[DetailField] = &[DetailField {
    label: "Data Source",
    kind: FieldKind::Select {
        options: &[
            ("csv", "CSV Upload"),
            ("api", "API Endpoint"),
            ("database", "Database"),
        ],
    },
}];

impl NodeType {
    pub const ALL: [NodeType; 4] = [
        NodeType::Ai,
        NodeType::Data,
        NodeType::Input,
        NodeType::Output,
    ];

    /// Lowercase tag used in event scripts and render output.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Ai => "ai",
            NodeType::Data => "data",
            NodeType::Input => "input",
            NodeType::Output => "output",
        }
    }

    /// Capitalized name shown in the detail panel.
    pub fn label(&self) -> &'static str {
        match self {
            NodeType::Ai => "Ai",
            NodeType::Data => "Data",
            NodeType::Input => "Input",
            NodeType::Output => "Output",
        }
    }

    /// Icon name drawn in the node header.
    pub fn icon(&self) -> &'static str {
        match self {
            NodeType::Ai => "MessageSquare",
            NodeType::Data => "Database",
            NodeType::Input => "FileInput",
            NodeType::Output => "FileOutput",
        }
    }

    /// Header color as a hex string.
    pub fn color(&self) -> &'static str {
        match self {
            NodeType::Ai => "#a855f7",
            NodeType::Data => "#3b82f6",
            NodeType::Input => "#f97316",
            NodeType::Output => "#22c55e",
        }
    }

    pub fn detail_fields(&self) -> &'static [DetailField] {
        match self {
            NodeType::Ai => AI_FIELDS,
            NodeType::Data => DATA_FIELDS,
            NodeType::Input | NodeType::Output => &[],
        }
    }

    /// Title given to nodes created from the add button.
    pub fn default_title(&self) -> String {
        format!("New {} Node", self.label())
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown node type '{}'", s))
    }
}

/// A typed, positioned vertex of the workflow graph.
///
/// `id` and `node_type` are fixed once the node is in a store. Title and position
/// change only through [`GraphStore`](crate::store::GraphStore) operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub title: String,
    pub position: Position,
}
