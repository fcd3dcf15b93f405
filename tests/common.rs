//! Common test utilities for building payload trees.
use flowtree::prelude::*;

/// Minimal payload: the worked example from the product docs.
///
/// trigger(1) -> dateTime(2) -> success connector('s') -> sendMessage(3)
#[allow(dead_code)]
pub const EXAMPLE_PAYLOAD_JSON: &str = r#"[
    { "id": 1, "parentId": -1, "type": "trigger", "data": { "type": "conversationOpened", "oncePerContact": false } },
    { "id": 2, "parentId": 1, "type": "dateTime", "data": { "timezone": "UTC", "action": "businessHours" } },
    { "id": "s", "parentId": 2, "type": "dateTimeConnector", "data": { "connectorType": "success" } },
    { "id": 3, "parentId": "s", "type": "sendMessage", "data": { "payload": [ { "type": "text", "text": "We are open!" } ] } }
]"#;

#[allow(dead_code)]
pub fn payload_node(id: impl Into<NodeId>, parent: impl Into<NodeId>, kind: NodeKind) -> PayloadNode {
    PayloadNode {
        id: id.into(),
        parent_id: parent.into(),
        kind,
        name: None,
        data: PayloadData::default(),
    }
}

#[allow(dead_code)]
pub fn connector_node(
    id: impl Into<NodeId>,
    parent: impl Into<NodeId>,
    outcome: ConnectorKind,
) -> PayloadNode {
    PayloadNode {
        data: PayloadData {
            connector_type: Some(outcome),
            ..PayloadData::default()
        },
        ..payload_node(id, parent, NodeKind::DateTimeConnector)
    }
}

/// A connector-free chain: trigger(1) -> sendMessage(2) -> addComment(3).
#[allow(dead_code)]
pub fn linear_payload() -> Vec<PayloadNode> {
    vec![
        payload_node(1, -1, NodeKind::Trigger),
        PayloadNode {
            data: PayloadData {
                payload: Some(vec![MessagePart::text("Hello")]),
                ..PayloadData::default()
            },
            ..payload_node(2, 1, NodeKind::SendMessage)
        },
        PayloadNode {
            data: PayloadData {
                comment: Some("follow up".to_string()),
                ..PayloadData::default()
            },
            ..payload_node(3, 2, NodeKind::AddComment)
        },
    ]
}

/// A business-hours tree with both outcome branches populated:
///
/// trigger(1)
///   dateTime(2) declaring connectors ["s", "f"]
///     success('s')  -> sendMessage(3), sendMessage(5)
///     failure('f')  -> addComment(4)
#[allow(dead_code)]
pub fn business_hours_payload() -> Vec<PayloadNode> {
    vec![
        payload_node(1, -1, NodeKind::Trigger),
        PayloadNode {
            data: PayloadData {
                times: Some(default_business_hours()),
                connectors: Some(vec![NodeId::from("s"), NodeId::from("f")]),
                timezone: Some("Europe/Berlin".to_string()),
                action: Some("businessHours".to_string()),
                ..PayloadData::default()
            },
            ..payload_node(2, 1, NodeKind::DateTime)
        },
        connector_node("s", 2, ConnectorKind::Success),
        connector_node("f", 2, ConnectorKind::Failure),
        PayloadNode {
            data: PayloadData {
                payload: Some(vec![MessagePart::text("We are open")]),
                ..PayloadData::default()
            },
            ..payload_node(3, "s", NodeKind::SendMessage)
        },
        PayloadNode {
            data: PayloadData {
                comment: Some("outside business hours".to_string()),
                ..PayloadData::default()
            },
            ..payload_node(4, "f", NodeKind::AddComment)
        },
        PayloadNode {
            data: PayloadData {
                payload: Some(vec![MessagePart::text("Talk soon")]),
                ..PayloadData::default()
            },
            ..payload_node(5, "s", NodeKind::SendMessage)
        },
    ]
}

/// Store preloaded from a payload, the way the editor does it.
#[allow(dead_code)]
pub fn store_from(payload: &[PayloadNode]) -> FlowStore {
    let (nodes, edges) = GraphBuilder::default().build(payload);
    let mut store = FlowStore::new();
    store.set_nodes(nodes);
    store.set_edges(edges);
    store
}

#[allow(dead_code)]
pub fn edge_between<'a>(edges: &'a [RenderEdge], source: &str, target: &str) -> &'a RenderEdge {
    edges
        .iter()
        .find(|e| e.source == source && e.target == target)
        .unwrap_or_else(|| panic!("expected an edge {} -> {}", source, target))
}
