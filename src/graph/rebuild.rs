//! Reverse edge derivation: after structural edits the live render-node list is
//! the only source of truth, so edges are rebuilt from each node's carried
//! payload information instead of the original payload list.

use crate::graph::builder::edge_to;
use crate::graph::types::{RenderEdge, RenderNode};
use crate::payload::{ConnectorKind, NodeId, NodeKind, PayloadData, PayloadNode};
use ahash::AHashMap;

/// Rebuilds the full edge set from live render nodes. Structurally identical
/// to the forward path for the same tree.
pub fn rebuild_edges(nodes: &[RenderNode]) -> Vec<RenderEdge> {
    let connectors = collect_connectors(nodes);

    nodes
        .iter()
        .filter_map(|node| {
            let parent_id = effective_parent(node);
            if parent_id.is_root_marker() {
                return None;
            }
            let connector = connectors.get(&parent_id.key());
            Some(edge_to(parent_id, &node.id, connector))
        })
        .collect()
}

/// Parent reference of a render node: the original payload's parent, falling
/// back to the copy on the render data (they only diverge if a caller built a
/// render node by hand).
fn effective_parent(node: &RenderNode) -> &NodeId {
    if node.data.original.parent_id.is_root_marker() && !node.data.parent_id.is_root_marker() {
        &node.data.parent_id
    } else {
        &node.data.original.parent_id
    }
}

/// Reconstructs the connector lookup table from the render-node list.
///
/// The flat render list does not retain connector nodes, so connectors are
/// gathered from three places in order: originals that happen to be connectors,
/// each `dateTime` node's `connector_objects`, and finally the connector ids a
/// `dateTime` node declares under `data.connectors`. Declared ids that resolve
/// nowhere get a synthesized connector (first id = success, second = failure)
/// so rendering stays total.
fn collect_connectors(nodes: &[RenderNode]) -> AHashMap<String, PayloadNode> {
    let mut connectors: AHashMap<String, PayloadNode> = AHashMap::new();

    for node in nodes {
        if node.data.original.is_connector() {
            connectors.insert(node.data.original.id.key(), node.data.original.clone());
        }
    }

    for node in nodes {
        if let Some(objects) = &node.data.connector_objects {
            for connector in objects {
                if connector.is_connector() {
                    connectors.insert(connector.id.key(), connector.clone());
                }
            }
        }
    }

    for node in nodes {
        let original = &node.data.original;
        if original.kind != NodeKind::DateTime {
            continue;
        }
        // Resolved connector_objects already covered this node above.
        if node.data.connector_objects.is_some() {
            continue;
        }
        let Some(ids) = original
            .data
            .connectors
            .as_ref()
            .or(node.data.fields.connectors.as_ref())
        else {
            continue;
        };

        for (index, connector_id) in ids.iter().enumerate() {
            let key = connector_id.key();
            if connectors.contains_key(&key) {
                continue;
            }
            let found = nodes
                .iter()
                .map(|other| &other.data.original)
                .find(|other| other.is_connector() && other.id.same(connector_id))
                .cloned();
            let connector =
                found.unwrap_or_else(|| synthesize_connector(connector_id, &node.id, index));
            connectors.insert(key, connector);
        }
    }

    connectors
}

/// Plausible stand-in for a connector that was declared but never retained:
/// the first listed id is the success outcome, the second the failure.
fn synthesize_connector(connector_id: &NodeId, owner_key: &str, index: usize) -> PayloadNode {
    let kind = if index == 0 {
        ConnectorKind::Success
    } else {
        ConnectorKind::Failure
    };
    PayloadNode {
        id: connector_id.clone(),
        parent_id: NodeId::Str(owner_key.to_string()),
        kind: NodeKind::DateTimeConnector,
        name: Some(kind.label().to_string()),
        data: PayloadData {
            connector_type: Some(kind),
            ..PayloadData::default()
        },
    }
}
