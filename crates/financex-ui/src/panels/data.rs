//! Data browser - the CSV-backed invoice and transaction listings.
//!
//! Records are free-form JSON objects; the column set is derived from
//! the first record of whatever the backend returns.

use egui::{Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use financex_types::DataRecord;

use crate::api::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    Invoices,
    Transactions,
}

impl DataKind {
    fn display_name(&self) -> &'static str {
        match self {
            DataKind::Invoices => "Invoices",
            DataKind::Transactions => "Transactions",
        }
    }
}

/// Load lifecycle of one listing.
#[derive(Default)]
enum Listing {
    #[default]
    NotLoaded,
    Loading,
    Ready(Vec<DataRecord>),
    Failed(String),
}

#[derive(Default)]
pub struct DataPanel {
    selected: Option<DataKind>,
    invoices: Listing,
    transactions: Listing,
}

impl DataPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_loading(&mut self, kind: DataKind) {
        *self.listing_mut(kind) = Listing::Loading;
    }

    pub fn set_result(&mut self, kind: DataKind, result: Result<Vec<DataRecord>, ApiError>) {
        *self.listing_mut(kind) = match result {
            Ok(records) => Listing::Ready(records),
            Err(error) => Listing::Failed(error.to_string()),
        };
    }

    fn listing_mut(&mut self, kind: DataKind) -> &mut Listing {
        match kind {
            DataKind::Invoices => &mut self.invoices,
            DataKind::Transactions => &mut self.transactions,
        }
    }

    fn listing(&self, kind: DataKind) -> &Listing {
        match kind {
            DataKind::Invoices => &self.invoices,
            DataKind::Transactions => &self.transactions,
        }
    }

    /// Render the browser. Returns the listing the app should fetch, if
    /// one is needed (tab first opened, or refresh clicked).
    pub fn ui(&mut self, ui: &mut Ui) -> Option<DataKind> {
        let mut load_request = None;

        ui.horizontal(|ui| {
            for kind in [DataKind::Invoices, DataKind::Transactions] {
                if ui
                    .selectable_label(self.selected == Some(kind), kind.display_name())
                    .clicked()
                {
                    self.selected = Some(kind);
                    if matches!(self.listing(kind), Listing::NotLoaded) {
                        load_request = Some(kind);
                    }
                }
            }

            if let Some(kind) = self.selected {
                if ui.button("↻").on_hover_text("Reload").clicked() {
                    load_request = Some(kind);
                }
            }
        });
        ui.separator();

        let Some(kind) = self.selected else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("Pick a listing above.").color(Color32::GRAY));
            });
            return load_request;
        };

        match self.listing(kind) {
            Listing::NotLoaded | Listing::Loading => {
                ui.centered_and_justified(|ui| ui.spinner());
            }
            Listing::Failed(error) => {
                ui.colored_label(
                    Color32::from_rgb(248, 113, 113),
                    format!("Failed to load {}: {}", kind.display_name(), error),
                );
            }
            Listing::Ready(records) => render_table(ui, records),
        }

        load_request
    }
}

fn render_table(ui: &mut Ui, records: &[DataRecord]) {
    let Some(first) = records.first() else {
        ui.label(RichText::new("No records.").color(Color32::GRAY));
        return;
    };
    let columns: Vec<&String> = first.keys().collect();

    TableBuilder::new(ui)
        .striped(true)
        .columns(Column::auto().resizable(true), columns.len())
        .header(18.0, |mut header| {
            for column in &columns {
                header.col(|ui| {
                    ui.label(RichText::new(column.as_str()).strong().size(11.0));
                });
            }
        })
        .body(|body| {
            body.rows(18.0, records.len(), |mut row| {
                let record = &records[row.index()];
                for column in &columns {
                    row.col(|ui| {
                        ui.label(RichText::new(cell_text(record.get(*column))).size(11.0));
                    });
                }
            });
        });
}

/// Flatten a JSON value into table cell text.
fn cell_text(value: Option<&serde_json::Value>) -> String {
    match value {
        None | Some(serde_json::Value::Null) => "–".to_string(),
        Some(serde_json::Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}
