//! Deterministic tree layout for the payload graph.
//!
//! Positions are pure functions of the full node set. The solver recurses
//! parent-first with a per-call memo map, so deep sibling chains stay linear
//! instead of quadratic.

use crate::graph::types::{Position, RenderNode};
use crate::payload::{ConnectorKind, PayloadNode};
use ahash::AHashMap;

/// Spacing constants for the tree layout.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// X of the root anchor and of every regular (non-branch) column.
    pub base_x: f64,
    /// Y of the root anchor.
    pub base_y: f64,
    /// Horizontal offset of a success/failure branch column.
    pub horizontal_spacing: f64,
    /// Vertical step between a parent and its children, and between stacked
    /// siblings.
    pub vertical_spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_x: 400.0,
            base_y: 100.0,
            horizontal_spacing: 300.0,
            vertical_spacing: 200.0,
        }
    }
}

/// Computes positions from parent/child relationships, resolving the true
/// anchor of connector children through the connector's own `dateTime` parent.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Position of a single node given the full node set. Deterministic and
    /// pure; uses a fresh memo per call.
    pub fn position(&self, node: &PayloadNode, all_nodes: &[PayloadNode]) -> Position {
        let mut memo = AHashMap::new();
        self.resolve(node, all_nodes, &mut memo)
    }

    /// Positions for every node in the set, sharing one memo across the solve.
    pub fn solve(&self, all_nodes: &[PayloadNode]) -> AHashMap<String, Position> {
        let mut memo = AHashMap::with_capacity(all_nodes.len());
        for node in all_nodes {
            self.resolve(node, all_nodes, &mut memo);
        }
        memo
    }

    fn resolve(
        &self,
        node: &PayloadNode,
        all_nodes: &[PayloadNode],
        memo: &mut AHashMap<String, Position>,
    ) -> Position {
        let key = node.id.key();
        if let Some(cached) = memo.get(&key) {
            return *cached;
        }
        let cfg = &self.config;

        let position = if node.is_root() {
            Position::new(cfg.base_x, cfg.base_y)
        } else {
            let parent = all_nodes.iter().find(|n| n.id.same(&node.parent_id));
            match parent {
                // Orphan: one vertical step below the anchor rather than an error.
                None => Position::new(cfg.base_x, cfg.base_y + cfg.vertical_spacing),
                Some(connector) if connector.is_connector() => {
                    let outcome = connector
                        .connector_kind()
                        .unwrap_or(ConnectorKind::Failure);
                    let x = cfg.base_x + outcome.direction() * cfg.horizontal_spacing;

                    // Children of one outcome stack below the dateTime node, two
                    // full steps down, in input order.
                    let index = sibling_index(node, all_nodes, false);
                    let anchor = all_nodes
                        .iter()
                        .find(|n| n.id.same(&connector.parent_id))
                        .map(|grandparent| self.resolve(grandparent, all_nodes, memo))
                        .unwrap_or_else(|| self.resolve(connector, all_nodes, memo));

                    Position::new(
                        x,
                        anchor.y
                            + cfg.vertical_spacing * 2.0
                            + index as f64 * cfg.vertical_spacing,
                    )
                }
                Some(parent) => {
                    let parent_pos = self.resolve(parent, all_nodes, memo);
                    let index = sibling_index(node, all_nodes, true);
                    Position::new(
                        cfg.base_x,
                        parent_pos.y
                            + cfg.vertical_spacing
                            + index as f64 * cfg.vertical_spacing,
                    )
                }
            }
        };

        memo.insert(key, position);
        position
    }

    /// Position for a freshly created node against the live render state.
    ///
    /// Reuses existing render positions so unrelated nodes never visibly
    /// shift: only the new node's slot is computed. `all_payload` must contain
    /// the payload view of the live graph (including loose connectors) plus
    /// the new node.
    pub fn place_new_node(
        &self,
        new_node: &PayloadNode,
        existing: &[RenderNode],
        all_payload: &[PayloadNode],
    ) -> Position {
        let cfg = &self.config;
        if new_node.is_root() {
            return Position::new(cfg.base_x, cfg.base_y);
        }

        let Some(parent_pos) = live_parent_position(&new_node.parent_id, existing, all_payload)
        else {
            // Parent unknown: drop below everything currently on the canvas.
            let max_y = existing
                .iter()
                .map(|n| n.position.y)
                .fold(cfg.base_y, f64::max);
            return Position::new(cfg.base_x, max_y + cfg.vertical_spacing);
        };

        let live_siblings = existing
            .iter()
            .filter(|n| n.data.original.parent_id.same(&new_node.parent_id))
            .count();

        let connector = all_payload
            .iter()
            .find(|n| n.id.same(&new_node.parent_id) && n.is_connector());

        match connector {
            Some(connector) => {
                let outcome = connector
                    .connector_kind()
                    .unwrap_or(ConnectorKind::Failure);
                Position::new(
                    cfg.base_x + outcome.direction() * cfg.horizontal_spacing,
                    parent_pos.y
                        + cfg.vertical_spacing * 2.0
                        + live_siblings as f64 * cfg.vertical_spacing,
                )
            }
            None => Position::new(
                cfg.base_x,
                parent_pos.y
                    + cfg.vertical_spacing
                    + live_siblings as f64 * cfg.vertical_spacing,
            ),
        }
    }
}

/// Index of `node` among nodes sharing its parent, in input order. With
/// `skip_connectors`, connector siblings are not counted.
fn sibling_index(node: &PayloadNode, all_nodes: &[PayloadNode], skip_connectors: bool) -> usize {
    all_nodes
        .iter()
        .filter(|n| n.parent_id.same(&node.parent_id))
        .filter(|n| !skip_connectors || !n.is_connector())
        .position(|n| n.id.same(&node.id))
        .unwrap_or(0)
}

/// Live position of a parent: directly from the render node when it is
/// rendered, or through the connector's `dateTime` parent when the parent is a
/// non-rendered connector.
fn live_parent_position(
    parent_id: &crate::payload::NodeId,
    existing: &[RenderNode],
    all_payload: &[PayloadNode],
) -> Option<Position> {
    let parent_key = parent_id.key();
    if let Some(node) = existing.iter().find(|n| n.id == parent_key) {
        return Some(node.position);
    }
    let connector = all_payload
        .iter()
        .find(|n| n.id.same(parent_id) && n.is_connector())?;
    let anchor_key = connector.parent_id.key();
    existing
        .iter()
        .find(|n| n.id == anchor_key)
        .map(|n| n.position)
}
