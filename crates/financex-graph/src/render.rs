//! Renderer - full clear-then-draw repaint of a snapshot.
//!
//! Edges first (below nodes), then markers, then labels. Snapshots are
//! small and repaints happen on data load or resize only, so there is no
//! incremental diffing.

use crate::colors;
use crate::surface::DrawSurface;
use egui::{Pos2, Stroke, Vec2};
use financex_types::GraphSnapshot;
use std::collections::HashMap;

/// Maximum label characters drawn beneath a marker.
pub const LABEL_MAX_CHARS: usize = 15;

/// Vertical gap between a marker's edge and its label.
const LABEL_GAP: f32 = 4.0;

pub struct GraphRenderer {
    pub node_radius: f32,
    pub edge_width: f32,
    pub label_size: f32,
}

impl Default for GraphRenderer {
    fn default() -> Self {
        Self {
            node_radius: 14.0,
            edge_width: 1.5,
            label_size: 11.0,
        }
    }
}

impl GraphRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint `snapshot` onto `surface` using the positions from the
    /// layout engine. A zero-sized area is a no-op, not an error.
    pub fn render(
        &self,
        surface: &mut dyn DrawSurface,
        snapshot: &GraphSnapshot,
        positions: &HashMap<String, Pos2>,
        area: Vec2,
    ) {
        if area.x <= 0.0 || area.y <= 0.0 {
            return;
        }

        surface.clear(colors::background());

        // Edges below nodes. The backend's edge list can be slightly out
        // of sync with its node list; dangling references are skipped.
        let edge_stroke = Stroke::new(self.edge_width, colors::edge_color());
        for edge in &snapshot.edges {
            let endpoints = (positions.get(&edge.source), positions.get(&edge.target));
            let (Some(&from), Some(&to)) = endpoints else {
                tracing::trace!(source = %edge.source, target = %edge.target, "skipping dangling edge");
                continue;
            };
            surface.line(from, to, edge_stroke);
        }

        for node in &snapshot.nodes {
            let Some(&center) = positions.get(&node.id) else {
                continue;
            };
            surface.circle(
                center,
                self.node_radius,
                colors::node_fill(&node.node_type),
                Stroke::new(1.5, colors::node_border(&node.node_type)),
            );
            let label = truncate_label(&node.label, LABEL_MAX_CHARS);
            surface.text(
                Pos2::new(center.x, center.y + self.node_radius + LABEL_GAP),
                &label,
                self.label_size,
                colors::label_color(),
            );
        }
    }
}

/// Cap a label at `max_chars` characters, ellipsized. Counts characters
/// rather than bytes so multi-byte labels never split mid-character.
fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        label.to_string()
    } else {
        let mut truncated: String = label.chars().take(max_chars.saturating_sub(1)).collect();
        truncated.push('…');
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::compute_layout;
    use crate::surface::{DrawCall, RecordingSurface};
    use financex_types::{GraphEdge, GraphNode, GraphStats};

    fn node(id: &str, node_type: &str) -> GraphNode {
        GraphNode {
            id: id.to_string(),
            label: id.to_string(),
            node_type: node_type.to_string(),
        }
    }

    fn edge(source: &str, target: &str) -> GraphEdge {
        GraphEdge {
            source: source.to_string(),
            target: target.to_string(),
            relationship: "related_to".to_string(),
        }
    }

    fn snapshot(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) -> GraphSnapshot {
        GraphSnapshot {
            nodes,
            edges,
            stats: GraphStats::default(),
        }
    }

    const AREA: Vec2 = Vec2::new(600.0, 400.0);

    fn render_to_surface(snapshot: &GraphSnapshot) -> RecordingSurface {
        let positions = compute_layout(snapshot, AREA);
        let mut surface = RecordingSurface::new();
        GraphRenderer::new().render(&mut surface, snapshot, &positions, AREA);
        surface
    }

    #[test]
    fn draws_one_line_per_resolvable_edge() {
        let snap = snapshot(
            vec![node("a", "vendor"), node("b", "invoice"), node("c", "invoice")],
            vec![edge("b", "a"), edge("c", "a")],
        );
        let surface = render_to_surface(&snap);
        assert_eq!(surface.lines(), 2);
        assert_eq!(surface.circles(), 3);
        assert_eq!(surface.texts().len(), 3);
    }

    #[test]
    fn dangling_edges_are_skipped_silently() {
        let snap = snapshot(
            vec![node("a", "vendor"), node("b", "invoice")],
            vec![edge("b", "a"), edge("b", "ghost"), edge("ghost", "a")],
        );
        let surface = render_to_surface(&snap);
        assert_eq!(surface.lines(), 1);
        assert_eq!(surface.circles(), 2);
    }

    #[test]
    fn clear_is_the_first_call() {
        let snap = snapshot(vec![node("a", "vendor")], vec![]);
        let surface = render_to_surface(&snap);
        assert!(matches!(surface.calls.first(), Some(DrawCall::Clear { .. })));
    }

    #[test]
    fn empty_snapshot_only_clears() {
        let surface = render_to_surface(&snapshot(vec![], vec![]));
        assert_eq!(surface.calls.len(), 1);
        assert!(matches!(surface.calls[0], DrawCall::Clear { .. }));
    }

    #[test]
    fn zero_sized_area_is_a_no_op() {
        let snap = snapshot(vec![node("a", "vendor")], vec![edge("a", "a")]);
        let positions = compute_layout(&snap, AREA);
        let mut surface = RecordingSurface::new();
        GraphRenderer::new().render(&mut surface, &snap, &positions, Vec2::ZERO);
        assert!(surface.calls.is_empty());

        GraphRenderer::new().render(&mut surface, &snap, &positions, Vec2::new(100.0, 0.0));
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn labels_are_capped_at_fifteen_chars() {
        let mut long = node("n1", "product");
        long.label = "Lenovo ThinkPad X1 Carbon Gen 11".to_string();
        let snap = snapshot(vec![long], vec![]);
        let surface = render_to_surface(&snap);
        let texts = surface.texts();
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].chars().count(), LABEL_MAX_CHARS);
        assert!(texts[0].ends_with('…'));
    }

    #[test]
    fn truncate_label_keeps_short_labels_and_counts_chars() {
        assert_eq!(truncate_label("Vendor 2", 15), "Vendor 2");
        assert_eq!(truncate_label("exactly15chars.", 15), "exactly15chars.");
        assert_eq!(truncate_label("déjà-vu supplies GmbH", 15).chars().count(), 15);
    }
}
