//! Graph layout and rendering for the FinanceX knowledge graph explorer.
//!
//! Split into three pieces:
//! - [`layout`]: pure geometry, snapshot + drawing area -> node positions
//! - [`surface`]: the narrow drawing capability the renderer paints through
//! - [`render`]: clear-then-draw repaint of a snapshot onto a surface
//!
//! The surface is a trait so the renderer can be exercised headless; the
//! app hands it an egui-backed implementation.

pub mod colors;
pub mod layout;
pub mod render;
pub mod surface;

pub use layout::compute_layout;
pub use render::GraphRenderer;
pub use surface::{DrawCall, DrawSurface, PainterSurface, RecordingSurface};
