use serde::{Deserialize, Serialize};
use std::fmt;

/// A node identifier as it appears on the wire: either a JSON string or an
/// integer, depending on which code path produced the payload.
///
/// Every identity comparison in this crate goes through the string-normalized
/// form ([`NodeId::key`] / [`NodeId::same`]) instead of native equality. This is
/// a load-bearing convention: `NodeId::Int(2)` and `NodeId::Str("2")` refer to
/// the same node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum NodeId {
    Int(i64),
    Str(String),
}

impl NodeId {
    /// The `-1` sentinel marking the tree root's parent.
    pub const ROOT: NodeId = NodeId::Int(-1);

    /// String-normalized form used for all identity comparisons and map keys.
    pub fn key(&self) -> String {
        match self {
            NodeId::Int(value) => value.to_string(),
            NodeId::Str(value) => value.clone(),
        }
    }

    /// Identity comparison across the string/integer representations.
    pub fn same(&self, other: &NodeId) -> bool {
        match (self, other) {
            (NodeId::Int(a), NodeId::Int(b)) => a == b,
            (NodeId::Str(a), NodeId::Str(b)) => a == b,
            _ => self.key() == other.key(),
        }
    }

    /// Whether this value is the `-1` root marker.
    pub fn is_root_marker(&self) -> bool {
        match self {
            NodeId::Int(value) => *value == -1,
            NodeId::Str(value) => value == "-1",
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Int(value) => write!(f, "{}", value),
            NodeId::Str(value) => f.write_str(value),
        }
    }
}

impl From<i64> for NodeId {
    fn from(value: i64) -> Self {
        NodeId::Int(value)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        NodeId::Str(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        NodeId::Str(value)
    }
}

/// Wire-level node type tag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum NodeKind {
    #[serde(rename = "trigger")]
    Trigger,
    #[serde(rename = "sendMessage")]
    SendMessage,
    #[serde(rename = "addComment")]
    AddComment,
    #[serde(rename = "dateTime")]
    DateTime,
    #[serde(rename = "dateTimeConnector")]
    DateTimeConnector,
}

/// Outcome carried by a `dateTimeConnector` node.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ConnectorKind {
    Success,
    Failure,
}

impl ConnectorKind {
    /// Edge label shown on connector-mediated transitions.
    pub fn label(self) -> &'static str {
        match self {
            ConnectorKind::Success => "Success",
            ConnectorKind::Failure => "Failure",
        }
    }

    /// Edge stroke color for this outcome.
    pub fn stroke(self) -> &'static str {
        match self {
            ConnectorKind::Success => "#10b981",
            ConnectorKind::Failure => "#ef4444",
        }
    }

    /// Horizontal layout direction: success branches left, failure right.
    pub fn direction(self) -> f64 {
        match self {
            ConnectorKind::Success => -1.0,
            ConnectorKind::Failure => 1.0,
        }
    }
}

/// One entry of a send-message payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessagePart {
    #[serde(rename = "type")]
    pub part_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
}

impl MessagePart {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            part_type: "text".to_string(),
            text: Some(text.into()),
            attachment: None,
        }
    }
}

/// One day of a business-hours schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub day: String,
    pub start_time: String,
    pub end_time: String,
}

/// Type-specific node payload. All fields are optional on the wire; which ones
/// are populated depends on the node kind (see the factory defaults).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PayloadData {
    /// Trigger subtype, e.g. `conversationOpened` or `messageReceived`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub trigger_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub once_per_contact: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Vec<MessagePart>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub times: Option<Vec<DaySchedule>>,
    /// Connector child ids declared by a `dateTime` node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connectors: Option<Vec<NodeId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connector_type: Option<ConnectorKind>,
}

/// A single node of the flat, parent-referencing payload list.
///
/// The list is trusted to be a tree: exactly one node carries the `-1` root
/// marker and every other `parent_id` resolves to an existing id. Violations
/// are not errors; orphans render at a documented fallback position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayloadNode {
    pub id: NodeId,
    pub parent_id: NodeId,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub data: PayloadData,
}

impl PayloadNode {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_root_marker()
    }

    pub fn is_connector(&self) -> bool {
        self.kind == NodeKind::DateTimeConnector
    }

    pub fn connector_kind(&self) -> Option<ConnectorKind> {
        self.data.connector_type
    }
}
