//! Live editor state: the current render nodes, edges, and selection.
//!
//! The store is an explicitly constructed, owned value passed to whatever
//! needs it; there is no process-wide singleton. All id comparisons use the
//! string-normalized key, since ids arrive as numbers or strings depending on
//! the code path.

use crate::graph::types::{Position, RenderEdge, RenderNode};
use crate::payload::{DaySchedule, MessagePart, NodeId, PayloadData};
use log::{debug, trace};

/// Partial update applied to a render node. Unset fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct NodeUpdate {
    pub label: Option<String>,
    pub description: Option<String>,
    pub fields: FieldUpdate,
}

impl NodeUpdate {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }
}

/// Payload-relevant fields a partial update may touch. Exactly these are
/// mirrored back into the node's `original.data`, keeping the wire and render
/// representations synchronized.
#[derive(Debug, Clone, Default)]
pub struct FieldUpdate {
    pub trigger_type: Option<String>,
    pub once_per_contact: Option<bool>,
    pub payload: Option<Vec<MessagePart>>,
    pub comment: Option<String>,
    pub times: Option<Vec<DaySchedule>>,
    pub timezone: Option<String>,
    pub action: Option<String>,
}

impl FieldUpdate {
    fn apply(&self, data: &mut PayloadData) {
        if let Some(trigger_type) = &self.trigger_type {
            data.trigger_type = Some(trigger_type.clone());
        }
        if let Some(once) = self.once_per_contact {
            data.once_per_contact = Some(once);
        }
        if let Some(payload) = &self.payload {
            data.payload = Some(payload.clone());
        }
        if let Some(comment) = &self.comment {
            data.comment = Some(comment.clone());
        }
        if let Some(times) = &self.times {
            data.times = Some(times.clone());
        }
        if let Some(timezone) = &self.timezone {
            data.timezone = Some(timezone.clone());
        }
        if let Some(action) = &self.action {
            data.action = Some(action.clone());
        }
    }
}

/// Partial position change.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionChange {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

/// Holds the rendered graph and selection, and exposes the mutation primitives
/// the edit flows are built from. Operations on unknown ids are silent no-ops.
#[derive(Debug, Clone, Default)]
pub struct FlowStore {
    nodes: Vec<RenderNode>,
    edges: Vec<RenderEdge>,
    selected: Option<NodeId>,
}

impl FlowStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[RenderNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[RenderEdge] {
        &self.edges
    }

    pub fn selected_id(&self) -> Option<&NodeId> {
        self.selected.as_ref()
    }

    pub fn set_nodes(&mut self, nodes: Vec<RenderNode>) {
        self.nodes = nodes;
    }

    pub fn set_edges(&mut self, edges: Vec<RenderEdge>) {
        self.edges = edges;
    }

    pub fn add_node(&mut self, node: RenderNode) {
        debug!("store: add node {}", node.id);
        self.nodes.push(node);
    }

    pub fn node(&self, id: &NodeId) -> Option<&RenderNode> {
        let key = id.key();
        self.nodes.iter().find(|n| n.id == key)
    }

    /// Children of a parent, matched through the carried payload parent id,
    /// falling back to the render-data copy for hand-built nodes.
    pub fn children_of(&self, parent_id: &NodeId) -> Vec<&RenderNode> {
        self.nodes
            .iter()
            .filter(|n| {
                n.data.original.parent_id.same(parent_id)
                    || n.data.parent_id.same(parent_id)
            })
            .collect()
    }

    pub fn selected_node(&self) -> Option<&RenderNode> {
        self.selected.as_ref().and_then(|id| {
            let key = id.key();
            self.nodes.iter().find(|n| n.id == key)
        })
    }

    pub fn set_selected(&mut self, id: Option<NodeId>) {
        self.selected = id;
    }

    pub fn clear_selected(&mut self) {
        self.selected = None;
    }

    /// Merges a partial update into the matching node.
    ///
    /// `data.original` and `data.parent_id` are preserved by construction: the
    /// update cannot name them, so no caller can erase them. Payload-relevant
    /// fields are applied to both the editable copy and `original.data`.
    pub fn update_node(&mut self, id: &NodeId, update: NodeUpdate) {
        let key = id.key();
        let Some(node) = self.nodes.iter_mut().find(|n| n.id == key) else {
            trace!("store: update for unknown node {}", key);
            return;
        };
        debug!("store: update node {}", key);

        if let Some(label) = update.label {
            node.data.label = label;
        }
        if let Some(description) = update.description {
            node.data.description = description;
        }
        update.fields.apply(&mut node.data.fields);
        update.fields.apply(&mut node.data.original.data);
    }

    /// Removes the node and every edge touching it; clears the selection if it
    /// pointed at the removed node. Cascading deletion of descendants is the
    /// caller's responsibility.
    pub fn delete_node(&mut self, id: &NodeId) {
        let key = id.key();
        let nodes_before = self.nodes.len();
        self.nodes.retain(|n| n.id != key);
        self.edges.retain(|e| e.source != key && e.target != key);
        if self.selected.as_ref().is_some_and(|s| s.key() == key) {
            self.selected = None;
        }
        if self.nodes.len() != nodes_before {
            debug!("store: deleted node {}", key);
        }
    }

    pub fn update_node_position(&mut self, id: &NodeId, change: PositionChange) {
        let key = id.key();
        let Some(node) = self.nodes.iter_mut().find(|n| n.id == key) else {
            return;
        };
        if let Some(x) = change.x {
            node.position.x = x;
        }
        if let Some(y) = change.y {
            node.position.y = y;
        }
    }

    /// Convenience for drag handlers that always move both axes.
    pub fn set_node_position(&mut self, id: &NodeId, position: Position) {
        self.update_node_position(
            id,
            PositionChange {
                x: Some(position.x),
                y: Some(position.y),
            },
        );
    }
}
