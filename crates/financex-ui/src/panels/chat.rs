//! Chat panel.
//!
//! Transcript, provenance blocks, and the input row. The panel only
//! reads session state; sends are reported back to the app as actions.

use egui::{Color32, RichText, ScrollArea, TextEdit, Ui};

use super::{SourcesAction, SourcesPanel};
use crate::session::{ChatMessage, ChatSession, Role};

/// Actions that can be triggered from the chat panel.
#[derive(Debug, Clone)]
pub enum ChatPanelAction {
    None,
    Send(String),
    OpenGraph(String),
}

pub struct ChatPanel {
    /// Input text buffer.
    input: String,
}

impl Default for ChatPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatPanel {
    pub fn new() -> Self {
        Self {
            input: String::new(),
        }
    }

    pub fn ui(
        &mut self,
        ui: &mut Ui,
        session: &ChatSession,
        sources: &mut SourcesPanel,
        cite_sources: &mut bool,
    ) -> ChatPanelAction {
        let mut action = ChatPanelAction::None;

        ui.vertical(|ui| {
            // Header
            ui.horizontal(|ui| {
                ui.label(RichText::new("Chat").strong().size(14.0));
                if session.is_pending() {
                    ui.spinner();
                    ui.label(RichText::new("thinking...").size(11.0).color(Color32::GRAY));
                }
            });
            ui.separator();

            // Messages area
            let input_area_height = 60.0;
            let available_height = ui.available_height() - input_area_height;
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .max_height(available_height)
                .show(ui, |ui| {
                    for (idx, msg) in session.messages().iter().enumerate() {
                        render_message(ui, msg);
                        if msg.role == Role::Assistant {
                            if let Some(SourcesAction::OpenGraph(path)) =
                                sources.ui(ui, idx, &msg.sources, msg.graph_ref.as_deref())
                            {
                                action = ChatPanelAction::OpenGraph(path);
                            }
                        }
                        ui.add_space(8.0);
                    }
                });

            ui.separator();

            // Input row
            ui.horizontal(|ui| {
                let response = ui.add(
                    TextEdit::singleline(&mut self.input)
                        .hint_text("Ask about vendors, invoices, transactions...")
                        .desired_width(ui.available_width() - 60.0),
                );

                let enter_pressed =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                let can_send = !self.input.trim().is_empty() && !session.is_pending();

                let send_clicked = ui
                    .add_enabled(can_send, egui::Button::new("Send"))
                    .clicked();

                if (send_clicked || enter_pressed) && can_send {
                    action = ChatPanelAction::Send(std::mem::take(&mut self.input));
                    response.request_focus();
                }
            });
            ui.checkbox(cite_sources, "Cite sources")
                .on_hover_text("Answer with provenance triples from the knowledge graph");
        });

        action
    }
}

fn render_message(ui: &mut Ui, msg: &ChatMessage) {
    let is_user = msg.role == Role::User;
    let bg_color = if is_user {
        Color32::from_rgb(40, 60, 80)
    } else {
        Color32::from_rgb(50, 50, 60)
    };

    egui::Frame::default()
        .fill(bg_color)
        .inner_margin(8.0)
        .rounding(4.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let role_text = if is_user { "You" } else { "Assistant" };
                ui.label(RichText::new(role_text).strong().color(if is_user {
                    Color32::LIGHT_BLUE
                } else {
                    Color32::LIGHT_GREEN
                }));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(msg.timestamp.format("%H:%M").to_string())
                            .small()
                            .color(Color32::GRAY),
                    );
                });
            });

            ui.label(&msg.text);
        });
}
