//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the flowtree crate. Import
//! this module to get the core functionality without importing each type
//! individually.

// Editing facade and state
pub use crate::editor::FlowEditor;
pub use crate::history::{History, MAX_HISTORY};
pub use crate::store::{FieldUpdate, FlowStore, NodeUpdate, PositionChange};

// Graph transformation
pub use crate::graph::{
    EdgeKind, EdgeStyle, GraphBuilder, LabelBackground, LabelStyle, Position, RenderData,
    RenderEdge, RenderKind, RenderNode, rebuild_edges,
};
pub use crate::layout::{LayoutConfig, LayoutEngine};

// Payload schema and construction
pub use crate::payload::{
    ConnectorKind, CreateKind, DaySchedule, FlowDocument, MessagePart, NewNodeSpec, NodeId,
    NodeKind, PayloadData, PayloadNode, create_node, default_business_hours, generate_node_id,
};

// Error types
pub use crate::error::{EditError, PayloadError};
