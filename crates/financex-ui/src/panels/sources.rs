//! Provenance sources presenter.
//!
//! Shows the triples cited for an assistant answer: a bounded preview
//! with an expand/collapse toggle, and a control opening the full graph
//! view when the answer carries one. Expansion is view state held here;
//! the transcript itself is never mutated from this panel.

use egui::{Color32, RichText, Ui};
use financex_types::SourceTriple;
use std::collections::HashSet;

/// Rows shown while collapsed.
pub const PREVIEW_LEN: usize = 3;

/// Stands in for a label the backend left blank.
const PLACEHOLDER: &str = "·";

#[derive(Debug, Clone)]
pub enum SourcesAction {
    /// Open the full graph view behind this opaque reference.
    OpenGraph(String),
}

#[derive(Default)]
pub struct SourcesPanel {
    /// Transcript indices whose source list is expanded.
    expanded: HashSet<usize>,
}

impl SourcesPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the sources block for the message at `message_idx`.
    /// Renders nothing at all when there are no triples.
    pub fn ui(
        &mut self,
        ui: &mut Ui,
        message_idx: usize,
        sources: &[SourceTriple],
        graph_ref: Option<&str>,
    ) -> Option<SourcesAction> {
        if sources.is_empty() {
            return None;
        }

        let mut action = None;
        let expanded = self.expanded.contains(&message_idx);
        let shown = visible_count(sources.len(), expanded);

        ui.add_space(2.0);
        ui.label(
            RichText::new(format!("Sources ({})", sources.len()))
                .size(11.0)
                .color(Color32::GRAY),
        );
        for triple in &sources[..shown] {
            ui.label(
                RichText::new(format_triple(triple))
                    .size(11.0)
                    .color(Color32::from_rgb(156, 163, 175)),
            );
        }

        ui.horizontal(|ui| {
            if sources.len() > PREVIEW_LEN {
                let toggle_text = if expanded {
                    "Show less".to_string()
                } else {
                    format!("Show all {}", sources.len())
                };
                if ui.small_button(toggle_text).clicked() {
                    if expanded {
                        self.expanded.remove(&message_idx);
                    } else {
                        self.expanded.insert(message_idx);
                    }
                }
            }
            if let Some(path) = graph_ref {
                if ui.small_button("View in graph").clicked() {
                    action = Some(SourcesAction::OpenGraph(path.to_string()));
                }
            }
        });

        action
    }
}

/// Rows visible for a list of `len` triples.
pub fn visible_count(len: usize, expanded: bool) -> usize {
    if expanded {
        len
    } else {
        len.min(PREVIEW_LEN)
    }
}

/// `source — relationship → target`, with a placeholder glyph for any
/// part the backend left blank.
pub fn format_triple(triple: &SourceTriple) -> String {
    fn part(value: &Option<String>) -> &str {
        value
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .unwrap_or(PLACEHOLDER)
    }
    format!(
        "{} — {} → {}",
        part(&triple.source),
        part(&triple.relationship),
        part(&triple.target)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(source: Option<&str>, relationship: Option<&str>, target: Option<&str>) -> SourceTriple {
        SourceTriple {
            source: source.map(String::from),
            relationship: relationship.map(String::from),
            target: target.map(String::from),
        }
    }

    #[test]
    fn collapsed_shows_at_most_the_preview() {
        assert_eq!(visible_count(0, false), 0);
        assert_eq!(visible_count(1, false), 1);
        assert_eq!(visible_count(3, false), 3);
        assert_eq!(visible_count(4, false), 3);
        assert_eq!(visible_count(10, false), 3);
    }

    #[test]
    fn expanded_shows_everything() {
        for len in [0, 1, 3, 4, 10] {
            assert_eq!(visible_count(len, true), len);
        }
    }

    #[test]
    fn triples_render_source_relationship_target() {
        let full = triple(Some("INV-1"), Some("billed_to"), Some("Vendor 2"));
        assert_eq!(format_triple(&full), "INV-1 — billed_to → Vendor 2");
    }

    #[test]
    fn missing_parts_render_a_placeholder() {
        let no_target = triple(Some("INV-1"), Some("billed_to"), None);
        assert_eq!(format_triple(&no_target), "INV-1 — billed_to → ·");

        let blank_source = triple(Some("   "), Some("matches"), Some("TX-9"));
        assert_eq!(format_triple(&blank_source), "· — matches → TX-9");

        let empty = SourceTriple::default();
        assert_eq!(format_triple(&empty), "· — · → ·");
    }
}
