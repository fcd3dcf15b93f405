use thiserror::Error;

/// Errors that can occur at the payload JSON boundary.
#[derive(Error, Debug, Clone)]
pub enum PayloadError {
    #[error("Failed to parse payload JSON: {0}")]
    JsonParse(String),

    #[error("Failed to read payload file '{path}': {message}")]
    Io { path: String, message: String },
}

/// Errors surfaced by editor flows. These are caller-contract violations and are
/// reported to the immediate caller rather than swallowed; malformed-tree
/// conditions never reach this type (they degrade to documented fallbacks
/// instead, see the layout and graph modules).
#[derive(Error, Debug, Clone)]
pub enum EditError {
    #[error("The node factory produced a payload node that could not be rendered")]
    NodeConstruction,
}
