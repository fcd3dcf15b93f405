//! # Flowtree - Chatbot Flow Editor Core
//!
//! **Flowtree** is the engine behind a visual flow editor for chatbot-style
//! decision trees. It transforms a flat, parent-referencing payload list into a
//! renderable node/edge graph, keeps that graph consistent under interactive
//! create/update/delete edits, and provides bounded snapshot undo/redo.
//!
//! ## Core Workflow
//!
//! 1. **Parse**: load the payload asset with [`payload::FlowDocument`] (or
//!    supply your own `Vec<PayloadNode>`).
//! 2. **Build**: [`graph::GraphBuilder`] turns the flat list into render nodes
//!    (positions from the recursive [`layout::LayoutEngine`]) and styled edges,
//!    folding business-hours connectors into edge styling instead of drawing
//!    them.
//! 3. **Edit**: [`editor::FlowEditor`] wires the [`store::FlowStore`] and
//!    [`history::History`] together and runs every edit flow in the required
//!    order: mutate nodes, rebuild edges from the live nodes, snapshot.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flowtree::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let document = FlowDocument::from_file("assets/payload.json")?;
//!
//!     let mut editor = FlowEditor::new();
//!     editor.load(&document.nodes);
//!
//!     // Attach a message under the root trigger.
//!     let root_id = document.root().map(|n| n.id.clone()).expect("payload has a root");
//!     let spec = NewNodeSpec::new("Welcome", "Hello there!", CreateKind::SendMessage)
//!         .under(root_id);
//!     let new_id = editor.create_node(spec)?;
//!     println!("created node {}", new_id);
//!
//!     // Change of heart.
//!     editor.undo();
//!     Ok(())
//! }
//! ```

pub mod editor;
pub mod error;
pub mod graph;
pub mod history;
pub mod layout;
pub mod payload;
pub mod prelude;
pub mod store;
