use crate::payload::{NodeId, NodeKind, PayloadData, PayloadNode};
use serde::{Deserialize, Serialize};

/// A 2-D canvas position.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Render-side node type. Connectors have no render kind: they are folded into
/// edge styling instead of being drawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RenderKind {
    #[serde(rename = "trigger")]
    Trigger,
    #[serde(rename = "sendMessage")]
    SendMessage,
    #[serde(rename = "addComment")]
    AddComment,
    #[serde(rename = "businessHours")]
    BusinessHours,
}

impl NodeKind {
    /// Maps a payload type tag to its render kind; `None` for connectors.
    pub fn render_kind(self) -> Option<RenderKind> {
        match self {
            NodeKind::Trigger => Some(RenderKind::Trigger),
            NodeKind::SendMessage => Some(RenderKind::SendMessage),
            NodeKind::AddComment => Some(RenderKind::AddComment),
            NodeKind::DateTime => Some(RenderKind::BusinessHours),
            NodeKind::DateTimeConnector => None,
        }
    }
}

/// Editable data carried by a render node.
///
/// `original` and `parent_id` must survive every partial update: edge
/// reconstruction reads parent and connector information from them, so losing
/// either breaks the rebuild path. The store preserves both by construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderData {
    pub label: String,
    pub description: String,
    /// Copied from the payload for edge reconstruction.
    pub parent_id: NodeId,
    /// Owned back-reference to the originating payload node.
    pub original: PayloadNode,
    /// A `dateTime` node's resolved connector children. Connectors are excluded
    /// from the render list, so they ride along here for edge rebuilding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connector_objects: Option<Vec<PayloadNode>>,
    /// Flattened, editable copy of the payload data fields.
    pub fields: PayloadData,
}

/// A renderable graph node derived from a payload node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderNode {
    /// String-normalized payload id.
    pub id: String,
    pub kind: RenderKind,
    pub position: Position,
    pub data: RenderData,
}

/// Visual edge kind.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    #[default]
    Default,
    Smoothstep,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EdgeStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
}

/// Label text styling for connector-mediated edges.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabelStyle {
    pub fill: String,
    pub font_weight: u32,
    pub font_size: u32,
}

/// Rounded background pill behind a connector edge label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabelBackground {
    pub fill: String,
    pub rx: f64,
    pub ry: f64,
}

/// A renderable edge. Never points to or from a connector id: connector
/// semantics are folded into the edge between the `dateTime` node and the
/// connector's children.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderEdge {
    /// Always `edge-<source>-<target>`.
    pub id: String,
    pub source: String,
    pub target: String,
    pub kind: EdgeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub style: EdgeStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_style: Option<LabelStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_bg: Option<LabelBackground>,
    /// True exactly when the edge represents a success/failure transition.
    pub animated: bool,
}
