//! The catalog of node templates offered by the "add node" menu.

use crate::model::NodeType;
use serde::Serialize;

/// One entry of the add-node menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NodeTemplate {
    pub label: &'static str,
    pub node_type: NodeType,
    pub icon: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteCategory {
    pub name: &'static str,
    pub items: &'static [NodeTemplate],
}

const PURPLE: &str = "#a855f7";
const BLUE: &str = "#3b82f6";
const AMBER: &str = "#f59e0b";
const SKY: &str = "#0ea5e9";
const INDIGO: &str = "#6366f1";
const ORANGE: &str = "#f97316";
const GREEN: &str = "#22c55e";
const SLATE: &str = "#64748b";

macro_rules! template {
    ($label:expr, $ty:ident, $icon:expr, $color:expr) => {
        NodeTemplate {
            label: $label,
            node_type: NodeType::$ty,
            icon: $icon,
            color: $color,
        }
    };
}

static PALETTE: &[PaletteCategory] = &[
    PaletteCategory {
        name: "LLMs",
        items: &[
            template!("GPT Model", Ai, "MessageSquare", PURPLE),
            template!("Claude Model", Ai, "Brain", PURPLE),
        ],
    },
    PaletteCategory {
        name: "Databases",
        items: &[
            template!("MySQL", Data, "Database", BLUE),
            template!("PostgreSQL", Data, "Database", BLUE),
            template!("Oracle", Data, "Database", BLUE),
            template!("SQL Server", Data, "Server", BLUE),
            template!("MongoDB", Data, "Database", BLUE),
        ],
    },
    PaletteCategory {
        name: "File Systems",
        items: &[
            template!("Flat File", Data, "FileBadge", AMBER),
            template!("SFTP Server", Data, "FileBox", AMBER),
        ],
    },
    PaletteCategory {
        name: "Cloud Services",
        items: &[
            template!("Salesforce", Data, "Cloud", SKY),
            template!("Amazon S3", Data, "Cloud", SKY),
            template!("Azure Blob", Data, "Cloud", SKY),
            template!("Google BigQuery", Data, "Table", SKY),
        ],
    },
    PaletteCategory {
        name: "APIs & Messaging",
        items: &[
            template!("REST API", Data, "Link", INDIGO),
            template!("Apache Kafka", Data, "ArrowUpDown", INDIGO),
        ],
    },
    PaletteCategory {
        name: "Input/Output",
        items: &[
            template!("Input", Input, "FileInput", ORANGE),
            template!("Output", Output, "FileOutput", GREEN),
            template!("Text Output", Output, "FileText", GREEN),
        ],
    },
    PaletteCategory {
        name: "Other",
        items: &[
            template!("Function", Data, "Cog", SLATE),
            template!("Custom Connector", Data, "Box", SLATE),
        ],
    },
];

/// All categories in menu order.
pub fn palette() -> &'static [PaletteCategory] {
    PALETTE
}

/// Looks up a template by its menu label (case-insensitive).
pub fn find_template(label: &str) -> Option<&'static NodeTemplate> {
    PALETTE
        .iter()
        .flat_map(|category| category.items.iter())
        .find(|item| item.label.eq_ignore_ascii_case(label))
}

/// Every template that creates nodes of `node_type`.
pub fn templates_for(node_type: NodeType) -> impl Iterator<Item = &'static NodeTemplate> {
    PALETTE
        .iter()
        .flat_map(|category| category.items.iter())
        .filter(move |item| item.node_type == node_type)
}
