//! Unit tests for error messages, node type mappings and the palette.
mod common;
use common::*;
use flowblox::model::FieldKind;
use flowblox::palette::{find_template, palette, templates_for};
use flowblox::prelude::*;

#[test]
fn test_error_display() {
    let (_, t, o) = create_input_output_store();

    let err = ConnectionError::SameNode { node_id: t };
    assert!(err.to_string().contains(&t.to_string()));
    assert!(err.to_string().contains("itself"));

    let err = ConnectionError::NodeNotFound { node_id: o };
    assert!(err.to_string().contains(&o.to_string()));

    let err = ConnectionError::DuplicateConnection {
        source_id: t,
        target_id: o,
    };
    assert!(err.to_string().contains(&t.to_string()));
    assert!(err.to_string().contains(&o.to_string()));
    assert!(err.to_string().contains("already exists"));

    let io = ScriptError::Io {
        path: "session.json".to_string(),
        message: "not found".to_string(),
    };
    assert!(io.to_string().contains("session.json"));
}

#[test]
fn test_node_type_mappings_are_total() {
    for t in NodeType::ALL {
        assert!(!t.icon().is_empty());
        assert!(t.color().starts_with('#'));
        assert_eq!(t.default_title(), format!("New {} Node", t.label()));
    }
    assert_eq!(NodeType::Output.to_string(), "output");
    assert_eq!(format!("{:<7}|", NodeType::Ai), "ai     |");
}

#[test]
fn test_detail_fields_per_type() {
    let ai = NodeType::Ai.detail_fields();
    assert_eq!(ai.len(), 1);
    assert_eq!(ai[0].label, "Model Selection");
    let FieldKind::Select { options } = ai[0].kind;
    assert!(options.iter().any(|(value, _)| *value == "gpt-4o"));

    let data = NodeType::Data.detail_fields();
    assert_eq!(data[0].label, "Data Source");

    assert!(NodeType::Input.detail_fields().is_empty());
    assert!(NodeType::Output.detail_fields().is_empty());
}

#[test]
fn test_palette_catalog() {
    let categories: Vec<&str> = palette().iter().map(|c| c.name).collect();
    assert_eq!(categories.first(), Some(&"LLMs"));
    assert!(categories.contains(&"Input/Output"));

    let kafka = find_template("apache kafka").expect("Kafka should be listed");
    assert_eq!(kafka.node_type, NodeType::Data);
    assert!(find_template("Teleporter").is_none());

    let outputs: Vec<&str> = templates_for(NodeType::Output).map(|t| t.label).collect();
    assert_eq!(outputs, vec!["Output", "Text Output"]);
    assert_eq!(templates_for(NodeType::Ai).count(), 2);
}

#[test]
fn test_node_serializes_with_type_tag() {
    let (store, t, _) = create_input_output_store();
    let json = serde_json::to_value(store.node(t).unwrap()).unwrap();
    assert_eq!(json["type"], "input");
    assert_eq!(json["title"], "T");
    assert_eq!(json["position"]["y"], 0.0);
}
