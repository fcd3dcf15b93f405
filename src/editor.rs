//! The facade external callers (UI layers, tests) talk to. Wires the store,
//! graph builder, and history together, and enforces the ordering every edit
//! flow must follow: mutate nodes, rebuild edges from the live nodes, then
//! snapshot.

use crate::error::EditError;
use crate::graph::{rebuild_edges, GraphBuilder};
use crate::history::History;
use crate::payload::{create_node, NewNodeSpec, NodeId, PayloadNode};
use crate::store::{FlowStore, NodeUpdate};
use log::debug;

#[derive(Debug, Default)]
pub struct FlowEditor {
    store: FlowStore,
    history: History,
    builder: GraphBuilder,
}

impl FlowEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: GraphBuilder) -> Self {
        Self {
            store: FlowStore::new(),
            history: History::new(),
            builder,
        }
    }

    pub fn store(&self) -> &FlowStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut FlowStore {
        &mut self.store
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Populates the store from a payload list and seeds the history baseline.
    /// Assignment is all-or-nothing: nodes and edges are built before either
    /// is stored.
    pub fn load(&mut self, payload: &[PayloadNode]) {
        let (nodes, edges) = self.builder.build(payload);
        debug!(
            "editor: loaded {} nodes, {} edges",
            nodes.len(),
            edges.len()
        );
        self.store.set_nodes(nodes);
        self.store.set_edges(edges);
        self.history.init(&self.store);
    }

    /// Creates a node from the factory spec, places it against the live render
    /// positions (existing nodes never shift), appends it, rebuilds edges, and
    /// snapshots. Returns the new node's render id.
    pub fn create_node(&mut self, spec: NewNodeSpec) -> Result<String, EditError> {
        let payload_node = create_node(spec);

        // Payload view of the live graph: originals plus the connectors that
        // only survive inside connector_objects, plus the new node.
        let mut all_payload: Vec<PayloadNode> =
            Vec::with_capacity(self.store.nodes().len() + 1);
        for node in self.store.nodes() {
            all_payload.push(node.data.original.clone());
            if let Some(connectors) = &node.data.connector_objects {
                all_payload.extend(connectors.iter().cloned());
            }
        }
        all_payload.push(payload_node.clone());

        let position =
            self.builder
                .layout()
                .place_new_node(&payload_node, self.store.nodes(), &all_payload);

        let mut rendered = self
            .builder
            .to_render_nodes(std::slice::from_ref(&payload_node));
        let mut node = rendered.pop().ok_or(EditError::NodeConstruction)?;
        node.position = position;
        let id = node.id.clone();

        self.store.add_node(node);
        self.refresh_edges();
        self.history.save_state(&self.store);
        Ok(id)
    }

    /// Merges a partial update, rebuilds edges, snapshots.
    pub fn update_node(&mut self, id: &NodeId, update: NodeUpdate) {
        self.store.update_node(id, update);
        self.refresh_edges();
        self.history.save_state(&self.store);
    }

    /// Deletes the node and all its descendants, rebuilds edges, snapshots.
    pub fn delete_node(&mut self, id: &NodeId) {
        self.remove_subtree(id);
        self.refresh_edges();
        self.history.save_state(&self.store);
    }

    fn remove_subtree(&mut self, id: &NodeId) {
        // Children under a business-hours node reference its connectors as
        // their parent, so the connector ids count as branch roots too.
        let branch_parents = self.branch_parents(id);
        self.store.delete_node(id);
        for parent in branch_parents {
            let children: Vec<NodeId> = self
                .store
                .children_of(&parent)
                .iter()
                .map(|n| n.data.original.id.clone())
                .collect();
            for child in children {
                self.remove_subtree(&child);
            }
        }
    }

    fn branch_parents(&self, id: &NodeId) -> Vec<NodeId> {
        let mut parents = vec![id.clone()];
        if let Some(node) = self.store.node(id) {
            if let Some(connectors) = &node.data.connector_objects {
                parents.extend(connectors.iter().map(|c| c.id.clone()));
            } else if let Some(ids) = &node.data.original.data.connectors {
                parents.extend(ids.iter().cloned());
            }
        }
        parents
    }

    pub fn undo(&mut self) -> bool {
        let acted = self.history.undo(&mut self.store);
        if acted {
            // Feed the guard its restoration echo so the next real edit is
            // recorded instead of absorbed.
            self.history.save_state(&self.store);
        }
        acted
    }

    pub fn redo(&mut self) -> bool {
        let acted = self.history.redo(&mut self.store);
        if acted {
            self.history.save_state(&self.store);
        }
        acted
    }

    /// Records the current store state; for callers that mutate the store
    /// directly (e.g. drag handlers) outside the built-in flows.
    pub fn snapshot(&mut self) {
        self.history.save_state(&self.store);
    }

    fn refresh_edges(&mut self) {
        let edges = rebuild_edges(self.store.nodes());
        self.store.set_edges(edges);
    }
}
