use crate::payload::node::{
    DaySchedule, MessagePart, NodeId, NodeKind, PayloadData, PayloadNode,
};
use rand::Rng;
use rand::distr::Alphanumeric;
use serde::{Deserialize, Serialize};

const ID_LENGTH: usize = 7;

/// UI-facing node kinds that can be created interactively. Triggers and
/// connectors are only ever produced by the loaded payload, never by the user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CreateKind {
    #[serde(rename = "sendMessage")]
    SendMessage,
    #[serde(rename = "addComment")]
    AddComment,
    #[serde(rename = "businessHours")]
    BusinessHours,
}

impl CreateKind {
    /// Maps the UI-facing kind to the payload type tag.
    pub fn payload_kind(self) -> NodeKind {
        match self {
            CreateKind::SendMessage => NodeKind::SendMessage,
            CreateKind::AddComment => NodeKind::AddComment,
            CreateKind::BusinessHours => NodeKind::DateTime,
        }
    }
}

/// Everything the factory needs to construct a fresh payload node.
#[derive(Debug, Clone)]
pub struct NewNodeSpec {
    pub title: String,
    pub description: String,
    pub kind: CreateKind,
    /// Attach under this node; defaults to the root marker when omitted.
    pub parent_id: Option<NodeId>,
    /// Business-hours timezone override; `UTC` when omitted.
    pub timezone: Option<String>,
}

impl NewNodeSpec {
    pub fn new(title: impl Into<String>, description: impl Into<String>, kind: CreateKind) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind,
            parent_id: None,
            timezone: None,
        }
    }

    pub fn under(mut self, parent_id: impl Into<NodeId>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }
}

/// Generates a fresh node id: short lowercase alphanumeric, collision
/// probability negligible at session scale (36^7 id space).
pub fn generate_node_id() -> NodeId {
    let mut rng = rand::rng();
    let id: String = (&mut rng)
        .sample_iter(Alphanumeric)
        .take(ID_LENGTH)
        .map(char::from)
        .collect::<String>()
        .to_lowercase();
    NodeId::Str(id)
}

/// Constructs a new payload node with the correct default data shape for its
/// kind.
pub fn create_node(spec: NewNodeSpec) -> PayloadNode {
    let NewNodeSpec {
        title,
        description,
        kind,
        parent_id,
        timezone,
    } = spec;

    let data = match kind {
        CreateKind::SendMessage => PayloadData {
            payload: Some(if description.is_empty() {
                Vec::new()
            } else {
                vec![MessagePart::text(description)]
            }),
            ..PayloadData::default()
        },
        CreateKind::AddComment => PayloadData {
            comment: Some(description),
            ..PayloadData::default()
        },
        CreateKind::BusinessHours => PayloadData {
            times: Some(default_business_hours()),
            connectors: Some(Vec::new()),
            timezone: Some(timezone.unwrap_or_else(|| "UTC".to_string())),
            action: Some("businessHours".to_string()),
            ..PayloadData::default()
        },
    };

    PayloadNode {
        id: generate_node_id(),
        parent_id: parent_id.unwrap_or(NodeId::ROOT),
        kind: kind.payload_kind(),
        name: Some(title),
        data,
    }
}

/// Default 7-day schedule: every day 09:00-17:00.
pub fn default_business_hours() -> Vec<DaySchedule> {
    ["mon", "tue", "wed", "thu", "fri", "sat", "sun"]
        .iter()
        .map(|day| DaySchedule {
            day: day.to_string(),
            start_time: "09:00".to_string(),
            end_time: "17:00".to_string(),
        })
        .collect()
}
