//! Snapshot-based undo/redo over the store's node/edge state.
//!
//! Snapshots are owned clones: every field of the render types is owned data,
//! so a clone is a full deep copy with no aliasing against the live store.
//! Restores never trust a snapshot's stored edges; edges are rebuilt from the
//! restored nodes so they always reflect the current reconstruction rules.

use crate::graph::rebuild_edges;
use crate::graph::types::{RenderEdge, RenderNode};
use crate::store::FlowStore;
use log::{debug, trace};

/// Sliding-window cap on retained snapshots.
pub const MAX_HISTORY: usize = 50;

#[derive(Debug, Clone)]
struct Snapshot {
    nodes: Vec<RenderNode>,
    edges: Vec<RenderEdge>,
}

impl Snapshot {
    fn capture(store: &FlowStore) -> Self {
        Self {
            nodes: store.nodes().to_vec(),
            edges: store.edges().to_vec(),
        }
    }
}

/// Ordered snapshot list plus a cursor, with a one-shot guard that keeps the
/// restore performed by undo/redo from being recorded as a fresh edit.
#[derive(Debug, Default)]
pub struct History {
    snapshots: Vec<Snapshot>,
    cursor: usize,
    restoring: bool,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        !self.snapshots.is_empty() && self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Records the store's current state.
    ///
    /// A call arriving immediately after an undo/redo is a no-op that clears
    /// the guard. Otherwise any redo tail beyond the cursor is dropped, the
    /// snapshot is appended, and the oldest snapshot is evicted once the cap
    /// is reached.
    pub fn save_state(&mut self, store: &FlowStore) {
        if self.restoring {
            self.restoring = false;
            trace!("history: skipping save during restore");
            return;
        }

        if !self.snapshots.is_empty() && self.cursor + 1 < self.snapshots.len() {
            self.snapshots.truncate(self.cursor + 1);
        }

        self.snapshots.push(Snapshot::capture(store));
        if self.snapshots.len() > MAX_HISTORY {
            self.snapshots.remove(0);
        }
        self.cursor = self.snapshots.len() - 1;
        debug!(
            "history: saved snapshot {}/{}",
            self.cursor + 1,
            self.snapshots.len()
        );
    }

    /// Steps back one snapshot. Returns whether a restore happened.
    pub fn undo(&mut self, store: &mut FlowStore) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.restoring = true;
        self.cursor -= 1;
        self.restore(store);
        debug!("history: undo to snapshot {}", self.cursor);
        true
    }

    /// Steps forward one snapshot. Returns whether a restore happened.
    pub fn redo(&mut self, store: &mut FlowStore) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.restoring = true;
        self.cursor += 1;
        self.restore(store);
        debug!("history: redo to snapshot {}", self.cursor);
        true
    }

    fn restore(&self, store: &mut FlowStore) {
        let snapshot = self.snapshots[self.cursor].clone();
        store.set_nodes(snapshot.nodes);
        // Edges are re-derived from the restored nodes, never read back from
        // the snapshot.
        let edges = rebuild_edges(store.nodes());
        store.set_edges(edges);
    }

    /// Seeds a single baseline snapshot, only when history is empty and the
    /// store already holds nodes. Idempotent.
    pub fn init(&mut self, store: &FlowStore) {
        if !self.snapshots.is_empty() || store.nodes().is_empty() {
            return;
        }
        self.snapshots.push(Snapshot::capture(store));
        self.cursor = 0;
        debug!("history: seeded baseline snapshot");
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.cursor = 0;
        self.restoring = false;
    }
}
