//! End-to-end tests for the editor facade: load, create, update, delete,
//! undo/redo, each flow ending with rebuilt edges and a snapshot.
mod common;
use common::*;
use flowtree::prelude::*;

fn loaded_editor() -> FlowEditor {
    let mut editor = FlowEditor::new();
    editor.load(&business_hours_payload());
    editor
}

fn label_of(editor: &FlowEditor, id: i64) -> String {
    editor
        .store()
        .node(&NodeId::Int(id))
        .expect("node exists")
        .data
        .label
        .clone()
}

#[test]
fn test_load_populates_store_and_baseline() {
    let editor = loaded_editor();
    assert_eq!(editor.store().nodes().len(), 5);
    assert_eq!(editor.store().edges().len(), 4);
    assert_eq!(editor.history().len(), 1);
    assert!(!editor.history().can_undo());
}

#[test]
fn test_create_node_under_root() {
    let mut editor = loaded_editor();
    let positions_before: Vec<(String, Position)> = editor
        .store()
        .nodes()
        .iter()
        .map(|n| (n.id.clone(), n.position))
        .collect();

    let spec = NewNodeSpec::new("Goodbye", "See you!", CreateKind::SendMessage).under(1);
    let id = editor.create_node(spec).expect("node created");

    let node = editor
        .store()
        .node(&NodeId::from(id.clone()))
        .expect("node in store");
    assert_eq!(node.data.label, "Goodbye");
    assert_eq!(node.data.description, "See you!");
    // One live sibling under the root, so the new node lands one step lower.
    assert_eq!(node.position, Position::new(400.0, 500.0));

    // Existing nodes never shift when a node is added.
    for (node_id, position) in positions_before {
        let unchanged = editor
            .store()
            .node(&NodeId::from(node_id))
            .expect("node still present");
        assert_eq!(unchanged.position, position);
    }

    let edge = edge_between(editor.store().edges(), "1", &id);
    assert_eq!(edge.kind, EdgeKind::Default);
    assert!(!edge.animated);

    assert!(editor.history().can_undo());
    assert!(editor.undo());
    assert!(editor.store().node(&NodeId::from(id)).is_none());
}

#[test]
fn test_create_node_under_connector_gets_styled_edge() {
    let mut editor = loaded_editor();
    let spec = NewNodeSpec::new("Open reply", "We are open!", CreateKind::SendMessage)
        .under("s");
    let id = editor.create_node(spec).expect("node created");

    // Success column, below the branch's two existing children.
    let node = editor
        .store()
        .node(&NodeId::from(id.clone()))
        .expect("node in store");
    assert_eq!(node.position, Position::new(100.0, 1100.0));

    // The edge is redirected to the connector's dateTime parent and styled.
    let edge = edge_between(editor.store().edges(), "2", &id);
    assert_eq!(edge.label.as_deref(), Some("Success"));
    assert_eq!(edge.style.stroke.as_deref(), Some("#10b981"));
    assert!(edge.animated);
}

#[test]
fn test_update_flow_snapshots_and_undoes() {
    let mut editor = loaded_editor();
    editor.update_node(&NodeId::Int(3), NodeUpdate::label("renamed"));

    let node = editor.store().node(&NodeId::Int(3)).expect("node exists");
    assert_eq!(node.data.label, "renamed");
    assert_eq!(editor.history().len(), 2);

    assert!(editor.undo());
    let node = editor.store().node(&NodeId::Int(3)).expect("node exists");
    assert_eq!(node.data.label, "Send Message");

    assert!(editor.redo());
    let node = editor.store().node(&NodeId::Int(3)).expect("node exists");
    assert_eq!(node.data.label, "renamed");
}

#[test]
fn test_delete_cascades_through_connector_branches() {
    let mut editor = loaded_editor();
    editor.delete_node(&NodeId::Int(2));

    // The business-hours node and everything below both outcome branches.
    let ids: Vec<&str> = editor
        .store()
        .nodes()
        .iter()
        .map(|n| n.id.as_str())
        .collect();
    assert_eq!(ids, vec!["1"]);
    assert!(editor.store().edges().is_empty());

    assert!(editor.undo());
    assert_eq!(editor.store().nodes().len(), 5);
    assert_eq!(editor.store().edges().len(), 4);
}

#[test]
fn test_delete_cascades_down_a_plain_chain() {
    let mut editor = FlowEditor::new();
    editor.load(&linear_payload());
    editor.delete_node(&NodeId::Int(2));

    let ids: Vec<&str> = editor
        .store()
        .nodes()
        .iter()
        .map(|n| n.id.as_str())
        .collect();
    assert_eq!(ids, vec!["1"]);
    assert!(editor.store().edges().is_empty());
}

#[test]
fn test_delete_leaf_keeps_the_rest_intact() {
    let mut editor = loaded_editor();
    editor.delete_node(&NodeId::Int(5));

    assert_eq!(editor.store().nodes().len(), 4);
    assert!(editor.store().node(&NodeId::Int(5)).is_none());
    // The sibling branch edge survives.
    let edge = edge_between(editor.store().edges(), "2", "3");
    assert_eq!(edge.label.as_deref(), Some("Success"));
}

#[test]
fn test_edit_after_undo_is_recorded_and_invalidates_redo() {
    let mut editor = loaded_editor();
    editor.update_node(&NodeId::Int(3), NodeUpdate::label("renamed"));
    assert!(editor.undo());
    assert!(editor.history().can_redo());

    // An edit made after undo forks the timeline: it must be recorded and
    // must replace the redo tail.
    editor.update_node(&NodeId::Int(3), NodeUpdate::label("fork"));
    assert!(!editor.history().can_redo());
    assert!(!editor.redo());
    assert_eq!(label_of(&editor, 3), "fork");

    // And it is itself undoable and redoable.
    assert!(editor.undo());
    assert_eq!(label_of(&editor, 3), "Send Message");
    assert!(editor.redo());
    assert_eq!(label_of(&editor, 3), "fork");
}

#[test]
fn test_manual_snapshot_records_direct_store_edits() {
    let mut editor = loaded_editor();
    editor
        .store_mut()
        .set_node_position(&NodeId::Int(3), Position::new(5.0, 5.0));
    editor.snapshot();
    assert_eq!(editor.history().len(), 2);

    assert!(editor.undo());
    let node = editor.store().node(&NodeId::Int(3)).expect("node exists");
    assert_eq!(node.position, Position::new(100.0, 700.0));
}
