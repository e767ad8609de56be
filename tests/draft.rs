//! Tests for the connection-draft state machine.
mod common;
use common::*;
use flowblox::prelude::*;

fn machine() -> ConnectionDraftMachine {
    ConnectionDraftMachine::new(NodeSize::default())
}

#[test]
fn test_starts_idle() {
    let draft = machine();
    assert_eq!(draft.state(), DraftState::Idle);
    assert!(draft.draft().is_none());
}

#[test]
fn test_start_drag_puts_cursor_on_output_anchor() {
    let (store, t, _) = create_input_output_store();
    let mut draft = machine();

    assert!(draft.start_drag(&store, t));
    let current = draft.draft().expect("should be dragging");
    assert_eq!(current.source_id, t);
    // 256x140 node at the origin: bottom-center
    assert_eq!(current.cursor_position, pos(128.0, 140.0));
}

#[test]
fn test_start_drag_from_missing_node_is_refused() {
    let (mut store, t, _) = create_input_output_store();
    store.remove_node(t);
    let mut draft = machine();

    assert!(!draft.start_drag(&store, t));
    assert_eq!(draft.state(), DraftState::Idle);
}

#[test]
fn test_update_cursor_follows_pointer_in_order() {
    let (store, t, _) = create_input_output_store();
    let mut draft = machine();
    draft.start_drag(&store, t);

    for (i, y) in [150.0, 160.0, 90.0].into_iter().enumerate() {
        assert!(draft.update_cursor(pos(i as f64, y)));
        assert_eq!(draft.draft().unwrap().cursor_position, pos(i as f64, y));
    }
    assert_eq!(draft.draft().unwrap().source_id, t);
}

#[test]
fn test_update_cursor_while_idle_is_ignored() {
    let mut draft = machine();
    assert!(!draft.update_cursor(pos(5.0, 5.0)));
    assert_eq!(draft.state(), DraftState::Idle);
}

#[test]
fn test_cancel_never_creates_a_connection() {
    let (store, t, _) = create_input_output_store();
    let mut draft = machine();

    draft.start_drag(&store, t);
    draft.update_cursor(pos(10.0, 300.0));
    assert!(draft.cancel());

    assert_eq!(draft.state(), DraftState::Idle);
    assert_eq!(store.connection_count(), 0);
    assert!(!draft.cancel());
}

#[test]
fn test_commit_creates_one_connection_and_returns_to_idle() {
    let (mut store, t, o) = create_input_output_store();
    let mut draft = machine();

    draft.start_drag(&store, t);
    for y in [150.0, 170.0, 190.0] {
        draft.update_cursor(pos(128.0, y));
    }
    let outcome = draft.commit(&mut store, o);

    let id = outcome.connection_id().expect("commit should succeed");
    assert_eq!(store.connection_count(), 1);
    let connection = store.connection(id).unwrap();
    assert_eq!((connection.source_id, connection.target_id), (t, o));
    assert_eq!(draft.state(), DraftState::Idle);
}

#[test]
fn test_rejected_commits_still_return_to_idle() {
    let (mut store, t, o) = create_input_output_store();
    store.add_connection(t, o).unwrap();
    let mut draft = machine();

    draft.start_drag(&store, t);
    let outcome = draft.commit(&mut store, t);
    assert_eq!(
        outcome,
        CommitOutcome::Rejected(ConnectionError::SameNode { node_id: t })
    );
    assert!(!draft.is_dragging());

    draft.start_drag(&store, t);
    let outcome = draft.commit(&mut store, o);
    assert!(matches!(
        outcome,
        CommitOutcome::Rejected(ConnectionError::DuplicateConnection { .. })
    ));
    assert!(!draft.is_dragging());
    assert_eq!(store.connection_count(), 1);
}

#[test]
fn test_commit_after_source_removed_is_rejected() {
    let (mut store, t, o) = create_input_output_store();
    let mut draft = machine();

    draft.start_drag(&store, t);
    store.remove_node(t);
    assert!(draft.preview(&store).is_none());

    let outcome = draft.commit(&mut store, o);
    assert_eq!(
        outcome,
        CommitOutcome::Rejected(ConnectionError::NodeNotFound { node_id: t })
    );
    assert!(!draft.is_dragging());
}

#[test]
fn test_commit_while_idle_does_nothing() {
    let (mut store, _, o) = create_input_output_store();
    let mut draft = machine();
    assert_eq!(draft.commit(&mut store, o), CommitOutcome::NotDragging);
    assert_eq!(store.connection_count(), 0);
}

#[test]
fn test_new_drag_replaces_previous_draft() {
    let (store, t, o) = create_input_output_store();
    let mut draft = machine();

    draft.start_drag(&store, t);
    draft.update_cursor(pos(500.0, 500.0));
    draft.start_drag(&store, o);

    let current = draft.draft().unwrap();
    assert_eq!(current.source_id, o);
    assert_eq!(current.cursor_position, pos(128.0, 340.0));
}

#[test]
fn test_preview_tracks_cursor() {
    let (store, t, _) = create_input_output_store();
    let mut draft = machine();
    assert!(draft.preview(&store).is_none());

    draft.start_drag(&store, t);
    draft.update_cursor(pos(328.0, 240.0));
    let curve = draft.preview(&store).unwrap();

    assert_eq!(curve.start, pos(128.0, 140.0));
    assert_eq!(curve.end, pos(328.0, 240.0));
    assert_eq!(curve.control1, pos(228.0, 140.0));
    assert_eq!(curve.control2, pos(228.0, 240.0));
}
