use crate::error::PayloadError;
use crate::payload::node::PayloadNode;
use std::fs;
use std::path::Path;

/// A parsed payload asset: the flat node list as shipped in `payload.json`.
///
/// Parsing is the only fallible boundary of the crate; everything downstream
/// of a successfully parsed document is total.
#[derive(Debug, Clone, Default)]
pub struct FlowDocument {
    pub nodes: Vec<PayloadNode>,
}

impl FlowDocument {
    /// Parse a payload document from a JSON array of nodes.
    pub fn from_json(input: &str) -> Result<Self, PayloadError> {
        let nodes = serde_json::from_str(input)
            .map_err(|e| PayloadError::JsonParse(e.to_string()))?;
        Ok(Self { nodes })
    }

    /// Load and parse a payload document from a file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PayloadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| PayloadError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// The tree root, if the document declares one.
    pub fn root(&self) -> Option<&PayloadNode> {
        self.nodes.iter().find(|n| n.is_root())
    }

    pub fn into_nodes(self) -> Vec<PayloadNode> {
        self.nodes
    }
}
