use crate::graph::types::{
    EdgeKind, EdgeStyle, LabelBackground, LabelStyle, Position, RenderData, RenderEdge, RenderNode,
};
use crate::layout::LayoutEngine;
use crate::payload::{ConnectorKind, NodeId, NodeKind, PayloadNode};
use ahash::AHashMap;
use itertools::Itertools;

const DEFAULT_DESCRIPTION_LIMIT: usize = 50;

/// Transforms the flat payload list into renderable nodes and edges.
///
/// Connectors are never emitted as nodes; their semantics are folded into the
/// styling of the edge between the `dateTime` node and the connector's
/// children.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    layout: LayoutEngine,
    description_limit: usize,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self {
            layout: LayoutEngine::default(),
            description_limit: DEFAULT_DESCRIPTION_LIMIT,
        }
    }
}

impl GraphBuilder {
    pub fn new(layout: LayoutEngine) -> Self {
        Self {
            layout,
            description_limit: DEFAULT_DESCRIPTION_LIMIT,
        }
    }

    pub fn with_description_limit(mut self, limit: usize) -> Self {
        self.description_limit = limit;
        self
    }

    pub fn layout(&self) -> &LayoutEngine {
        &self.layout
    }

    /// Forward transform: nodes and edges in one pass.
    pub fn build(&self, payload: &[PayloadNode]) -> (Vec<RenderNode>, Vec<RenderEdge>) {
        (self.to_render_nodes(payload), self.to_render_edges(payload))
    }

    /// Payload list to render nodes: root-first stable order, connectors
    /// excluded, one shared layout solve for all positions.
    pub fn to_render_nodes(&self, payload: &[PayloadNode]) -> Vec<RenderNode> {
        let sorted: Vec<PayloadNode> = payload
            .iter()
            .cloned()
            .sorted_by_key(|n| !n.is_root())
            .collect();

        let connector_map: AHashMap<String, &PayloadNode> = sorted
            .iter()
            .filter(|n| n.is_connector())
            .map(|n| (n.id.key(), n))
            .collect();

        let positions = self.layout.solve(&sorted);
        let anchor = self.layout.config();

        sorted
            .iter()
            .filter_map(|item| {
                let kind = item.kind.render_kind()?;
                let position = positions
                    .get(&item.id.key())
                    .copied()
                    .unwrap_or_else(|| Position::new(anchor.base_x, anchor.base_y));

                let label = item
                    .name
                    .clone()
                    .filter(|name| !name.is_empty())
                    .unwrap_or_else(|| default_label(item));
                let description = describe(item, self.description_limit);

                // dateTime nodes carry their resolved connector children so the
                // reverse path can rebuild edges without the payload list.
                // Declared ids are resolved first; connector children that were
                // never declared are picked up by a parent scan, otherwise the
                // reverse path could not reconstruct their edges.
                let connector_objects = if item.kind == NodeKind::DateTime {
                    let mut objects: Vec<PayloadNode> = item
                        .data
                        .connectors
                        .iter()
                        .flatten()
                        .filter_map(|id| connector_map.get(&id.key()))
                        .map(|c| (*c).clone())
                        .collect();
                    for candidate in sorted
                        .iter()
                        .filter(|n| n.is_connector() && n.parent_id.same(&item.id))
                    {
                        if !objects.iter().any(|o| o.id.same(&candidate.id)) {
                            objects.push(candidate.clone());
                        }
                    }
                    if objects.is_empty() { None } else { Some(objects) }
                } else {
                    None
                };

                Some(RenderNode {
                    id: item.id.key(),
                    kind,
                    position,
                    data: RenderData {
                        label,
                        description,
                        parent_id: item.parent_id.clone(),
                        original: item.clone(),
                        connector_objects,
                        fields: item.data.clone(),
                    },
                })
            })
            .collect()
    }

    /// Payload list to render edges. For a node whose direct parent is a
    /// connector, the edge's true source is the connector's own parent and the
    /// edge is styled per outcome; otherwise a plain edge from the direct
    /// parent.
    pub fn to_render_edges(&self, payload: &[PayloadNode]) -> Vec<RenderEdge> {
        let connector_map: AHashMap<String, &PayloadNode> = payload
            .iter()
            .filter(|n| n.is_connector())
            .map(|n| (n.id.key(), n))
            .collect();

        payload
            .iter()
            .filter(|node| !node.is_root() && !node.is_connector())
            .map(|node| {
                let connector = connector_map.get(&node.parent_id.key()).copied();
                edge_to(&node.parent_id, &node.id.key(), connector)
            })
            .collect()
    }
}

/// Builds the edge arriving at `target_key`. With a connector, the source is
/// redirected to the connector's parent and the edge gets outcome styling.
pub(crate) fn edge_to(
    parent_id: &NodeId,
    target_key: &str,
    connector: Option<&PayloadNode>,
) -> RenderEdge {
    match connector {
        Some(connector) => {
            let outcome = connector
                .connector_kind()
                .unwrap_or(ConnectorKind::Failure);
            let source = connector.parent_id.key();
            RenderEdge {
                id: format!("edge-{}-{}", source, target_key),
                source,
                target: target_key.to_string(),
                kind: EdgeKind::Smoothstep,
                label: Some(outcome.label().to_string()),
                style: EdgeStyle {
                    stroke: Some(outcome.stroke().to_string()),
                    stroke_width: Some(2.0),
                },
                label_style: Some(LabelStyle {
                    fill: "#ffffff".to_string(),
                    font_weight: 500,
                    font_size: 12,
                }),
                label_bg: Some(LabelBackground {
                    fill: outcome.stroke().to_string(),
                    rx: 6.0,
                    ry: 6.0,
                }),
                animated: true,
            }
        }
        None => {
            let source = parent_id.key();
            RenderEdge {
                id: format!("edge-{}-{}", source, target_key),
                source,
                target: target_key.to_string(),
                kind: EdgeKind::Default,
                label: None,
                style: EdgeStyle::default(),
                label_style: None,
                label_bg: None,
                animated: false,
            }
        }
    }
}

/// Display title fallback when the node has no explicit name.
fn default_label(node: &PayloadNode) -> String {
    match node.kind {
        NodeKind::Trigger => "Trigger".to_string(),
        NodeKind::SendMessage => "Send Message".to_string(),
        NodeKind::AddComment => "Add Comment".to_string(),
        NodeKind::DateTime => "Business Hours".to_string(),
        NodeKind::DateTimeConnector => node
            .connector_kind()
            .unwrap_or(ConnectorKind::Failure)
            .label()
            .to_string(),
    }
}

/// Kind-derived summary line, truncated at `max_length` characters with a
/// trailing ellipsis marker.
fn describe(node: &PayloadNode, max_length: usize) -> String {
    let description = match node.kind {
        NodeKind::SendMessage => node
            .data
            .payload
            .as_ref()
            .and_then(|parts| parts.iter().find(|p| p.part_type == "text"))
            .and_then(|p| p.text.clone())
            .unwrap_or_default(),
        NodeKind::AddComment => node.data.comment.clone().unwrap_or_default(),
        NodeKind::DateTime => format!(
            "Business Hours - {}",
            node.data.timezone.as_deref().unwrap_or("UTC")
        ),
        NodeKind::Trigger => {
            let trigger = node
                .data
                .trigger_type
                .as_deref()
                .unwrap_or("conversationOpened");
            if trigger == "messageReceived" {
                "Message Received".to_string()
            } else {
                "Conversation Opened".to_string()
            }
        }
        NodeKind::DateTimeConnector => String::new(),
    };

    if description.chars().count() > max_length {
        let truncated: String = description.chars().take(max_length).collect();
        format!("{}...", truncated)
    } else {
        description
    }
}
