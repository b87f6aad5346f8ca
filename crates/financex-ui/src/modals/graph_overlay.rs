//! Full-window graph overlay.
//!
//! Embeds the graph view a chat answer referenced through its opaque
//! `graph_url`. Opening and dismissing the overlay never touches the
//! transcript; it owns its own [`GraphViewPanel`].

use egui::{Color32, RichText};

use crate::api::ApiError;
use crate::graph_view::GraphViewPanel;
use financex_types::GraphSnapshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphOverlayResult {
    None,
    Closed,
}

pub struct GraphOverlayModal {
    open: bool,
    /// The opaque view reference this overlay was opened for.
    path: String,
    view: GraphViewPanel,
}

impl Default for GraphOverlayModal {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphOverlayModal {
    pub fn new() -> Self {
        Self {
            open: false,
            path: String::new(),
            view: GraphViewPanel::new(),
        }
    }

    /// Open for an opaque view reference. The caller starts the fetch
    /// and delivers the snapshot through [`Self::set_result`].
    pub fn open(&mut self, path: String) {
        self.open = true;
        self.path = path;
        self.view = GraphViewPanel::new();
        self.view.set_loading();
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn set_result(&mut self, result: Result<GraphSnapshot, ApiError>) {
        self.view.set_result(result);
    }

    pub fn ui(&mut self, ctx: &egui::Context) -> GraphOverlayResult {
        if !self.open {
            return GraphOverlayResult::None;
        }

        let mut result = GraphOverlayResult::None;
        let overlay_rect = ctx.screen_rect().shrink(24.0);

        egui::Window::new("Graph view")
            .collapsible(false)
            .resizable(false)
            .fixed_rect(overlay_rect)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(self.path.as_str())
                            .monospace()
                            .size(10.0)
                            .color(Color32::GRAY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Close").clicked() {
                            result = GraphOverlayResult::Closed;
                        }
                    });
                });
                ui.separator();
                self.view.ui(ui);
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            result = GraphOverlayResult::Closed;
        }

        if result == GraphOverlayResult::Closed {
            self.close();
        }
        result
    }
}
