//! FinanceX Explorer - knowledge graph client.
//!
//! Chat with the FinanceX knowledge graph and explore the graph itself.
//! All backend access goes through [`api::ApiClient`]; conversation state
//! lives in [`session::ChatSession`]; drawing is delegated to the
//! `financex-graph` crate.

pub mod api;
pub mod app;
pub mod config;
pub mod graph_view;
pub mod modals;
pub mod panels;
pub mod session;

pub use app::ExplorerApp;
