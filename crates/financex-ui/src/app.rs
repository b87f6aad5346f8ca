//! Explorer application - chat on the left, graph or data on the right.
//!
//! Layout:
//! ┌────────────┬──────────────────────┐
//! │  Chat      │  Graph | Data        │
//! │  (left)    │  (central tabs)      │
//! └────────────┴──────────────────────┘
//!
//! Async results flow back through `Arc<Mutex<Option<Result<..>>>>`
//! holders filled by the IO runtime and drained here every frame.

use std::future::Future;
use std::sync::{Arc, Mutex};

use eframe::egui;
use egui::{Color32, RichText};

use crate::api::{ApiClient, ApiError};
use crate::config::AppConfig;
use crate::graph_view::GraphViewPanel;
use crate::modals::{GraphOverlayModal, GraphOverlayResult};
use crate::panels::{kpi_strip, ChatPanel, ChatPanelAction, DataKind, DataPanel, SourcesPanel};
use crate::session::{ChatReply, ChatSession};
use financex_types::{ChatRequest, DataRecord, GraphSnapshot, KpiSummary};

/// Holder a background request writes its result into.
type Pending<T> = Arc<Mutex<Option<Result<T, ApiError>>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainView {
    Graph,
    Data,
}

pub struct ExplorerApp {
    api: ApiClient,
    runtime: Arc<tokio::runtime::Runtime>,

    // Chat (left panel)
    session: ChatSession,
    chat_panel: ChatPanel,
    sources_panel: SourcesPanel,
    cite_sources: bool,

    // Central panel
    view: MainView,
    graph_panel: GraphViewPanel,
    data_panel: DataPanel,
    overlay: GraphOverlayModal,

    // Header state
    kpis: Option<KpiSummary>,
    backend_ok: Option<bool>,

    // Async result holders
    pending_chat: Option<Pending<ChatReply>>,
    pending_graph: Option<Pending<GraphSnapshot>>,
    pending_overlay: Option<Pending<GraphSnapshot>>,
    pending_kpis: Option<Pending<KpiSummary>>,
    pending_health: Option<Pending<()>>,
    pending_data: Option<(DataKind, Pending<Vec<DataRecord>>)>,
}

impl ExplorerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let runtime = Arc::new(
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .expect("failed to create tokio runtime"),
        );

        let mut app = Self {
            api: ApiClient::new(&config.api_base),
            runtime,
            session: ChatSession::new(),
            chat_panel: ChatPanel::new(),
            sources_panel: SourcesPanel::new(),
            cite_sources: true,
            view: MainView::Graph,
            graph_panel: GraphViewPanel::new(),
            data_panel: DataPanel::new(),
            overlay: GraphOverlayModal::new(),
            kpis: None,
            backend_ok: None,
            pending_chat: None,
            pending_graph: None,
            pending_overlay: None,
            pending_kpis: None,
            pending_health: None,
            pending_data: None,
        };

        app.load_graph();
        app.load_kpis();
        app.check_health();
        app
    }

    // =========================================================================
    // API CALLS
    // =========================================================================

    fn spawn<T, F>(&self, future: F) -> Pending<T>
    where
        T: Send + 'static,
        F: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        let holder: Pending<T> = Arc::new(Mutex::new(None));
        let slot = holder.clone();
        self.runtime.spawn(async move {
            let result = future.await;
            if let Ok(mut guard) = slot.lock() {
                *guard = Some(result);
            }
        });
        holder
    }

    fn load_graph(&mut self) {
        self.graph_panel.set_loading();
        let api = self.api.clone();
        self.pending_graph = Some(self.spawn(async move { api.graph().await }));
    }

    fn load_kpis(&mut self) {
        let api = self.api.clone();
        self.pending_kpis = Some(self.spawn(async move { api.kpis().await }));
    }

    fn check_health(&mut self) {
        let api = self.api.clone();
        self.pending_health = Some(self.spawn(async move { api.health().await }));
    }

    fn load_data(&mut self, kind: DataKind) {
        self.data_panel.set_loading(kind);
        let api = self.api.clone();
        let holder = self.spawn(async move {
            match kind {
                DataKind::Invoices => api.invoices().await,
                DataKind::Transactions => api.transactions().await,
            }
        });
        self.pending_data = Some((kind, holder));
    }

    fn send_chat(&mut self, text: String) {
        // The session enforces the one-in-flight invariant; a rejected
        // send changes nothing and dispatches nothing.
        let Some(query) = self.session.begin_send(&text) else {
            return;
        };

        let api = self.api.clone();
        if self.cite_sources {
            self.pending_chat = Some(self.spawn(async move {
                api.chat_with_sources(&query).await.map(ChatReply::from)
            }));
        } else {
            let request = ChatRequest {
                query,
                session_id: Some(self.session.session_id.to_string()),
            };
            self.pending_chat =
                Some(self.spawn(async move { api.chat(&request).await.map(ChatReply::from) }));
        }
    }

    fn open_overlay(&mut self, path: String) {
        self.overlay.open(path.clone());
        let api = self.api.clone();
        self.pending_overlay = Some(self.spawn(async move { api.graph_at(&path).await }));
    }

    // =========================================================================
    // ASYNC RESULT HANDLING
    // =========================================================================

    fn take<T>(pending: &mut Option<Pending<T>>) -> Option<Result<T, ApiError>> {
        let result = pending
            .as_ref()
            .and_then(|holder| holder.try_lock().ok())
            .and_then(|mut guard| guard.take());
        if result.is_some() {
            *pending = None;
        }
        result
    }

    fn check_pending_requests(&mut self) {
        if let Some(result) = Self::take(&mut self.pending_chat) {
            self.session.complete(result);
        }

        if let Some(result) = Self::take(&mut self.pending_graph) {
            if let Err(error) = &result {
                tracing::warn!(%error, "graph fetch failed");
            }
            self.graph_panel.set_result(result);
        }

        if let Some(result) = Self::take(&mut self.pending_overlay) {
            // The user may have dismissed the overlay mid-fetch.
            if self.overlay.is_open() {
                self.overlay.set_result(result);
            }
        }

        if let Some(result) = Self::take(&mut self.pending_kpis) {
            match result {
                Ok(kpis) => self.kpis = Some(kpis),
                Err(error) => tracing::warn!(%error, "KPI fetch failed"),
            }
        }

        if let Some(result) = Self::take(&mut self.pending_health) {
            self.backend_ok = Some(result.is_ok());
        }

        if let Some((kind, holder)) = self.pending_data.take() {
            match holder.try_lock().ok().and_then(|mut guard| guard.take()) {
                Some(result) => self.data_panel.set_result(kind, result),
                None => self.pending_data = Some((kind, holder)),
            }
        }
    }

    fn any_pending(&self) -> bool {
        self.pending_chat.is_some()
            || self.pending_graph.is_some()
            || self.pending_overlay.is_some()
            || self.pending_kpis.is_some()
            || self.pending_health.is_some()
            || self.pending_data.is_some()
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_pending_requests();

        if self.any_pending() {
            ctx.request_repaint();
        }

        // Overlay first so it sits on top of everything.
        let overlay_result = self.overlay.ui(ctx);
        if overlay_result == GraphOverlayResult::Closed {
            self.pending_overlay = None;
        }

        // =====================================================================
        // TOP PANEL - title, health, KPIs, view tabs
        // =====================================================================
        let mut refresh_clicked = false;
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("FinanceX Explorer").strong().size(15.0));

                if let Some(ok) = self.backend_ok {
                    let (dot_color, text) = if ok {
                        (Color32::from_rgb(74, 222, 128), "backend up")
                    } else {
                        (Color32::from_rgb(248, 113, 113), "backend unreachable")
                    };
                    ui.label(RichText::new("●").color(dot_color).size(11.0))
                        .on_hover_text(text);
                }

                ui.separator();
                kpi_strip(ui, self.kpis.as_ref());
                ui.separator();

                for (view, label) in [(MainView::Graph, "Graph"), (MainView::Data, "Data")] {
                    if ui.selectable_label(self.view == view, label).clicked() {
                        self.view = view;
                    }
                }

                if ui.button("↻").on_hover_text("Reload graph and KPIs").clicked() {
                    refresh_clicked = true;
                }

                if self.graph_panel.is_loading() {
                    ui.spinner();
                }
            });
        });

        if refresh_clicked {
            self.load_graph();
            self.load_kpis();
            self.check_health();
        }

        // =====================================================================
        // LEFT PANEL - chat
        // =====================================================================
        let mut chat_action = ChatPanelAction::None;
        egui::SidePanel::left("chat")
            .resizable(true)
            .default_width(420.0)
            .show(ctx, |ui| {
                chat_action = self.chat_panel.ui(
                    ui,
                    &self.session,
                    &mut self.sources_panel,
                    &mut self.cite_sources,
                );
            });

        match chat_action {
            ChatPanelAction::None => {}
            ChatPanelAction::Send(text) => self.send_chat(text),
            ChatPanelAction::OpenGraph(path) => self.open_overlay(path),
        }

        // =====================================================================
        // CENTRAL PANEL - graph or data browser
        // =====================================================================
        let mut data_request = None;
        egui::CentralPanel::default().show(ctx, |ui| match self.view {
            MainView::Graph => self.graph_panel.ui(ui),
            MainView::Data => data_request = self.data_panel.ui(ui),
        });

        if let Some(kind) = data_request {
            self.load_data(kind);
        }
    }
}
