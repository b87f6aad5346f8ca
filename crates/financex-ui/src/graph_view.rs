//! Graph view container.
//!
//! Holds one snapshot, drives the layout engine and renderer, and shows
//! inline loading/error states. Positions are recomputed only when the
//! snapshot or the drawing area changes; the layout itself is
//! deterministic, so a recompute never moves nodes for the same inputs.

use egui::{Align2, Color32, FontId, Pos2, Rect, RichText, Sense, Ui, Vec2};
use financex_graph::{colors, compute_layout, GraphRenderer, PainterSurface};
use financex_types::GraphSnapshot;
use std::collections::HashMap;

use crate::api::ApiError;

pub struct GraphViewPanel {
    snapshot: Option<GraphSnapshot>,
    error: Option<String>,
    loading: bool,
    positions: HashMap<String, Pos2>,
    laid_out_for: Option<Vec2>,
    renderer: GraphRenderer,
    show_legend: bool,
}

impl Default for GraphViewPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphViewPanel {
    pub fn new() -> Self {
        Self {
            snapshot: None,
            error: None,
            loading: false,
            positions: HashMap::new(),
            laid_out_for: None,
            renderer: GraphRenderer::new(),
            show_legend: true,
        }
    }

    pub fn set_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn set_result(&mut self, result: Result<GraphSnapshot, ApiError>) {
        self.loading = false;
        match result {
            Ok(snapshot) => {
                self.snapshot = Some(snapshot);
                self.positions.clear();
                self.laid_out_for = None;
                self.error = None;
            }
            Err(error) => self.error = Some(error.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_data(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn ui(&mut self, ui: &mut Ui) {
        if self.loading {
            ui.centered_and_justified(|ui| ui.spinner());
            return;
        }
        if let Some(error) = &self.error {
            ui.centered_and_justified(|ui| {
                ui.colored_label(
                    Color32::from_rgb(248, 113, 113),
                    format!("Failed to load graph: {error}"),
                );
            });
            return;
        }
        let Some(snapshot) = self.snapshot.as_ref() else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No graph loaded.").color(Color32::GRAY));
            });
            return;
        };

        let size = ui.available_size();
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        let rect = response.rect;
        let area = rect.size();

        if self.laid_out_for != Some(area) {
            self.positions = compute_layout(snapshot, area);
            self.laid_out_for = Some(area);
        }

        let mut surface = PainterSurface::new(&painter, rect);
        self.renderer
            .render(&mut surface, snapshot, &self.positions, area);

        if self.show_legend {
            draw_legend(&painter, rect, snapshot);
        }
    }
}

/// Legend in the top-left corner. The counts come straight from the
/// backend's stats block; they are display hints, not re-derived.
fn draw_legend(painter: &egui::Painter, rect: Rect, snapshot: &GraphSnapshot) {
    let stats = &snapshot.stats;
    let entries = [
        ("vendor", stats.vendors),
        ("invoice", stats.invoices),
        ("transaction", stats.transactions),
        ("product", stats.products),
    ];

    let mut y = rect.min.y + 12.0;
    for (tag, count) in entries {
        painter.circle_filled(Pos2::new(rect.min.x + 14.0, y), 5.0, colors::node_fill(tag));
        painter.text(
            Pos2::new(rect.min.x + 24.0, y),
            Align2::LEFT_CENTER,
            format!("{tag} ({count})"),
            FontId::proportional(11.0),
            colors::label_color(),
        );
        y += 16.0;
    }

    painter.text(
        Pos2::new(rect.min.x + 14.0, y + 4.0),
        Align2::LEFT_CENTER,
        format!("{} nodes, {} edges", stats.total_nodes, stats.total_edges),
        FontId::proportional(10.0),
        Color32::GRAY,
    );
}
