//! UI panels.

mod chat;
mod data;
mod kpi;
mod sources;

pub use chat::{ChatPanel, ChatPanelAction};
pub use data::{DataKind, DataPanel};
pub use kpi::kpi_strip;
pub use sources::{SourcesAction, SourcesPanel};
