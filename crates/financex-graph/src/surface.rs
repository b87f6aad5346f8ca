//! Drawing surface abstraction.
//!
//! The renderer paints through a narrow capability (clear, line, circle,
//! text) instead of holding an `egui::Painter` directly, so the same
//! code draws onto the live canvas in the app and onto a recording
//! surface in headless tests.

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke};

/// Drawing capability handed to the renderer. Positions are local to
/// the drawing area (origin at its top-left corner).
pub trait DrawSurface {
    /// Fill the whole area with `color`.
    fn clear(&mut self, color: Color32);
    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke);
    fn circle(&mut self, center: Pos2, radius: f32, fill: Color32, stroke: Stroke);
    /// Draw `text` horizontally centered on `pos.x`, top-anchored at `pos.y`.
    fn text(&mut self, pos: Pos2, text: &str, size: f32, color: Color32);
}

// =============================================================================
// EGUI-BACKED SURFACE
// =============================================================================

/// Surface backed by a live egui painter, drawing into `rect`.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.rect.min + pos.to_vec2()
    }
}

impl DrawSurface for PainterSurface<'_> {
    fn clear(&mut self, color: Color32) {
        self.painter.rect_filled(self.rect, 0.0, color);
    }

    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke) {
        self.painter
            .line_segment([self.to_screen(from), self.to_screen(to)], stroke);
    }

    fn circle(&mut self, center: Pos2, radius: f32, fill: Color32, stroke: Stroke) {
        self.painter
            .circle(self.to_screen(center), radius, fill, stroke);
    }

    fn text(&mut self, pos: Pos2, text: &str, size: f32, color: Color32) {
        self.painter.text(
            self.to_screen(pos),
            Align2::CENTER_TOP,
            text,
            FontId::proportional(size),
            color,
        );
    }
}

// =============================================================================
// RECORDING SURFACE (headless)
// =============================================================================

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear {
        color: Color32,
    },
    Line {
        from: Pos2,
        to: Pos2,
    },
    Circle {
        center: Pos2,
        radius: f32,
        fill: Color32,
    },
    Text {
        pos: Pos2,
        text: String,
    },
}

/// Surface that records draw calls instead of painting, so renderer
/// behavior can be asserted without a display.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Line { .. }))
            .count()
    }

    pub fn circles(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Circle { .. }))
            .count()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self, color: Color32) {
        self.calls.push(DrawCall::Clear { color });
    }

    fn line(&mut self, from: Pos2, to: Pos2, _stroke: Stroke) {
        self.calls.push(DrawCall::Line { from, to });
    }

    fn circle(&mut self, center: Pos2, radius: f32, fill: Color32, _stroke: Stroke) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            fill,
        });
    }

    fn text(&mut self, pos: Pos2, text: &str, _size: f32, _color: Color32) {
        self.calls.push(DrawCall::Text {
            pos,
            text: text.to_string(),
        });
    }
}
