//! Integration tests for Flowblox
//!
//! End-to-end sessions that drive the editor the way a canvas host would.
//!
mod common;
use common::*;
use flowblox::prelude::*;
use flowblox::script::{ScriptRunner, ScriptStep, load_script};

#[test]
fn test_connect_then_remove_source() {
    let mut editor = Editor::new();
    let t = editor
        .store_mut()
        .add_node(NodeType::Input, pos(0.0, 0.0), "T");
    let o = editor
        .store_mut()
        .add_node(NodeType::Output, pos(0.0, 200.0), "O");

    editor.dispatch(InputEvent::PointerDownOnOutputHandle { node_id: t });
    editor.dispatch(InputEvent::PointerMove {
        position: pos(0.0, 150.0),
    });
    editor.dispatch(InputEvent::PointerUpOnInputHandle { node_id: o });

    let connections = editor.store().connections();
    assert_eq!(connections.len(), 1);
    assert_eq!(
        (connections[0].source_id, connections[0].target_id),
        (t, o)
    );

    editor.dispatch(InputEvent::RequestRemoveNode { node_id: t });

    let store = editor.store();
    assert!(store.nodes().iter().all(|n| n.title != "T"));
    assert_eq!(store.connection_count(), 0);
    let ids: Vec<NodeId> = store.nodes().iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![o]);
}

#[test]
fn test_build_full_pipeline_by_appending() {
    let mut editor = Editor::new();
    let ids: Vec<NodeId> = [NodeType::Input, NodeType::Data, NodeType::Ai, NodeType::Output]
        .into_iter()
        .filter_map(|t| editor.append_node(t))
        .collect();
    assert_eq!(ids.len(), 4);

    for pair in ids.windows(2) {
        editor.dispatch(InputEvent::PointerDownOnOutputHandle { node_id: pair[0] });
        editor.dispatch(InputEvent::PointerMove {
            position: pos(500.0, 10.0),
        });
        let outcome = editor.dispatch(InputEvent::PointerUpOnInputHandle { node_id: pair[1] });
        assert!(matches!(
            outcome,
            EventOutcome::Commit(CommitOutcome::Committed(_))
        ));
    }

    let frame = editor.frame();
    let order: Vec<NodeId> = frame.nodes.iter().map(|n| n.id).collect();
    assert_eq!(order, ids);
    assert_eq!(frame.connections.len(), 3);
    assert!(!frame.can_append);
    assert_graph_consistent(editor.store());
}

const SESSION_SCRIPT: &str = r#"[
    { "step": "add_node", "name": "form", "type": "input", "position": { "x": 0, "y": 0 }, "title": "Form" },
    { "step": "append_node", "name": "db", "type": "data" },
    { "step": "append_node", "name": "reply", "type": "output" },
    { "step": "start_drag", "node": "form" },
    { "step": "pointer_move", "x": 300, "y": 180 },
    { "step": "release", "on": "db" },
    { "step": "start_drag", "node": "db" },
    { "step": "release", "on": "db" },
    { "step": "start_drag", "node": "db" },
    { "step": "pointer_move", "x": 10, "y": 10 },
    { "step": "release" },
    { "step": "start_drag", "node": "db" },
    { "step": "release", "on": "reply" },
    { "step": "click_node", "node": "db" },
    { "step": "rename_node", "node": "db", "title": "Orders DB" },
    { "step": "disconnect", "source": "form", "target": "db" },
    { "step": "remove_node", "node": "ghost" }
]"#;

#[test]
fn test_script_replay() {
    let steps = load_script(SESSION_SCRIPT).expect("script should parse");
    assert_eq!(steps.len(), 17);
    assert_eq!(steps[10], ScriptStep::Release { on: None });

    let mut editor = Editor::new();
    let (outcomes, db, reply) = {
        let mut runner = ScriptRunner::new(&mut editor);
        let outcomes = runner.run(steps);
        assert!(runner.node_id("ghost").is_none());
        (
            outcomes,
            runner.node_id("db").unwrap(),
            runner.node_id("reply").unwrap(),
        )
    };

    // self-connection attempt is rejected, not fatal
    assert!(matches!(
        outcomes[7],
        EventOutcome::Commit(CommitOutcome::Rejected(ConnectionError::SameNode { .. }))
    ));
    // release over the background cancels
    assert_eq!(outcomes[10], EventOutcome::Handled);
    assert_eq!(outcomes[16], EventOutcome::Ignored);

    let store = editor.store();
    assert_eq!(store.node_count(), 3);
    assert_eq!(store.connection_count(), 1);
    assert!(store.contains_connection(db, reply));
    assert_eq!(store.node(db).unwrap().title, "Orders DB");
    assert_eq!(editor.selection().selected(), Some(db));
    assert!(!editor.draft().is_dragging());
}

#[test]
fn test_malformed_script_is_reported() {
    let err = load_script(r#"[{ "step": "teleport" }]"#).unwrap_err();
    assert!(matches!(err, ScriptError::Parse(_)));
    assert!(err.to_string().contains("Failed to parse event script"));
}

#[test]
fn test_input_events_parse_from_json() {
    let json = r#"{ "event": "request_add_node", "node_type": "ai", "position": { "x": 1.0, "y": 2.0 }, "title": "GPT Model" }"#;
    let event: InputEvent = serde_json::from_str(json).unwrap();

    let mut editor = Editor::new();
    let EventOutcome::NodeAdded(id) = editor.dispatch(event) else {
        panic!("Expected NodeAdded");
    };
    let node = editor.store().node(id).unwrap();
    assert_eq!(node.node_type, NodeType::Ai);
    assert_eq!(node.title, "GPT Model");
}
