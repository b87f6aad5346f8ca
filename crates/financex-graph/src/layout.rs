//! Layout engine - concentric rings grouped by node type.
//!
//! Pure geometry: the same snapshot and drawing area always produce the
//! same positions. Nodes of one type share a ring, rings grow outward in
//! first-seen type order. Snapshots here hold tens of nodes, not
//! thousands, so no force simulation is needed to keep same-type nodes
//! visually clustered.

use egui::{Pos2, Vec2};
use financex_types::{GraphNode, GraphSnapshot};
use std::collections::HashMap;
use std::f32::consts::TAU;

// =============================================================================
// LAYOUT CONSTANTS
// =============================================================================

/// Innermost ring radius, as a fraction of the base radius.
const RING_BASE: f32 = 0.5;

/// Radius increment per additional type ring.
const RING_STEP: f32 = 0.3;

/// Base radius for a drawing area: min(width, height) / 3.
pub fn base_radius(area: Vec2) -> f32 {
    area.x.min(area.y) / 3.0
}

/// Radius of the ring for the `ring`-th type group (0-indexed).
pub fn ring_radius(area: Vec2, ring: usize) -> f32 {
    base_radius(area) * (RING_BASE + RING_STEP * ring as f32)
}

// =============================================================================
// LAYOUT
// =============================================================================

/// Assign every node of `snapshot` a position inside `area`.
///
/// Node `i` of the `k`-th type group (n members) sits at angle
/// `2*pi*i/n` on the ring with radius `ring_radius(area, k)`, centered
/// on the area's center. Deterministic; no hidden state.
pub fn compute_layout(snapshot: &GraphSnapshot, area: Vec2) -> HashMap<String, Pos2> {
    let mut positions = HashMap::with_capacity(snapshot.nodes.len());
    if snapshot.nodes.is_empty() {
        return positions;
    }

    let center = Pos2::new(area.x / 2.0, area.y / 2.0);

    for (ring, (_, members)) in type_groups(snapshot).iter().enumerate() {
        let count = members.len();
        if count == 0 {
            continue;
        }
        let radius = ring_radius(area, ring);
        for (i, node) in members.iter().enumerate() {
            let angle = TAU * i as f32 / count as f32;
            positions.insert(
                node.id.clone(),
                Pos2::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                ),
            );
        }
    }

    positions
}

/// Nodes grouped by type tag, groups ordered by first appearance in the
/// snapshot's node list.
pub fn type_groups(snapshot: &GraphSnapshot) -> Vec<(&str, Vec<&GraphNode>)> {
    let mut groups: Vec<(&str, Vec<&GraphNode>)> = Vec::new();
    for node in &snapshot.nodes {
        match groups
            .iter_mut()
            .find(|(tag, _)| *tag == node.node_type.as_str())
        {
            Some((_, members)) => members.push(node),
            None => groups.push((node.node_type.as_str(), vec![node])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use financex_types::GraphStats;
    use proptest::prelude::*;

    fn node(id: &str, node_type: &str) -> GraphNode {
        GraphNode {
            id: id.to_string(),
            label: id.to_string(),
            node_type: node_type.to_string(),
        }
    }

    fn snapshot(nodes: Vec<GraphNode>) -> GraphSnapshot {
        GraphSnapshot {
            nodes,
            edges: vec![],
            stats: GraphStats::default(),
        }
    }

    const AREA: Vec2 = Vec2::new(600.0, 400.0);

    fn distance_from_center(pos: Pos2) -> f32 {
        let center = Pos2::new(AREA.x / 2.0, AREA.y / 2.0);
        pos.distance(center)
    }

    #[test]
    fn empty_snapshot_produces_no_positions() {
        assert!(compute_layout(&snapshot(vec![]), AREA).is_empty());
    }

    #[test]
    fn single_type_lands_on_innermost_ring() {
        let positions = compute_layout(
            &snapshot(vec![
                node("v1", "vendor"),
                node("v2", "vendor"),
                node("v3", "vendor"),
                node("v4", "vendor"),
            ]),
            AREA,
        );
        assert_eq!(positions.len(), 4);
        let expected = base_radius(AREA) * 0.5;
        for pos in positions.values() {
            assert!((distance_from_center(*pos) - expected).abs() < 1e-3);
        }
        // Node 0 sits at angle zero, directly right of center.
        let first = positions["v1"];
        assert!((first.x - (AREA.x / 2.0 + expected)).abs() < 1e-3);
        assert!((first.y - AREA.y / 2.0).abs() < 1e-3);
    }

    #[test]
    fn second_type_gets_a_wider_ring() {
        let positions = compute_layout(
            &snapshot(vec![node("v1", "vendor"), node("i1", "invoice")]),
            AREA,
        );
        let r = base_radius(AREA);
        assert!((distance_from_center(positions["v1"]) - r * 0.5).abs() < 1e-3);
        assert!((distance_from_center(positions["i1"]) - r * 0.8).abs() < 1e-3);
    }

    #[test]
    fn type_groups_preserve_first_seen_order() {
        let snap = snapshot(vec![
            node("i1", "invoice"),
            node("v1", "vendor"),
            node("i2", "invoice"),
            node("t1", "transaction"),
            node("v2", "vendor"),
        ]);
        let groups = type_groups(&snap);
        let tags: Vec<&str> = groups.iter().map(|(tag, _)| *tag).collect();
        assert_eq!(tags, vec!["invoice", "vendor", "transaction"]);
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].1.len(), 2);
        assert_eq!(groups[2].1.len(), 1);
    }

    #[test]
    fn same_ring_nodes_get_distinct_points() {
        let positions = compute_layout(
            &snapshot(vec![
                node("a", "vendor"),
                node("b", "vendor"),
                node("c", "vendor"),
            ]),
            AREA,
        );
        assert!(positions["a"] != positions["b"]);
        assert!(positions["b"] != positions["c"]);
        assert!(positions["a"] != positions["c"]);
    }

    #[test]
    fn layout_is_deterministic() {
        let snap = snapshot(vec![
            node("v1", "vendor"),
            node("i1", "invoice"),
            node("t1", "transaction"),
            node("p1", "product"),
        ]);
        let first = compute_layout(&snap, AREA);
        let second = compute_layout(&snap, AREA);
        assert_eq!(first, second);
    }

    proptest! {
        /// Every node lands exactly on the ring of its type group, and
        /// every node gets a position.
        #[test]
        fn nodes_land_on_their_type_ring(counts in proptest::collection::vec(1usize..8, 1..4)) {
            let mut nodes = Vec::new();
            for (group, &n) in counts.iter().enumerate() {
                for i in 0..n {
                    nodes.push(node(&format!("n{}_{}", group, i), &format!("type{}", group)));
                }
            }
            let total: usize = counts.iter().sum();
            let positions = compute_layout(&snapshot(nodes), AREA);
            prop_assert_eq!(positions.len(), total);

            for (group, &n) in counts.iter().enumerate() {
                let expected = ring_radius(AREA, group);
                for i in 0..n {
                    let pos = positions[&format!("n{}_{}", group, i)];
                    prop_assert!((distance_from_center(pos) - expected).abs() < 1e-2);
                }
            }
        }
    }
}
