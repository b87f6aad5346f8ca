//! KPI strip - headline counts from the fast CSV-backed endpoint.
//!
//! Degrades to dashes while the numbers are unknown; a KPI failure is
//! never surfaced as a dialog.

use egui::{Color32, RichText, Ui};
use financex_types::KpiSummary;

pub fn kpi_strip(ui: &mut Ui, kpis: Option<&KpiSummary>) {
    let metric = |value: Option<usize>| match value {
        Some(v) => v.to_string(),
        None => "–".to_string(),
    };

    let entries = [
        ("Invoices", kpis.map(|k| k.total_invoices)),
        ("Transactions", kpis.map(|k| k.total_transactions)),
        ("Vendors", kpis.map(|k| k.total_vendors)),
        ("Anomalies", kpis.map(|k| k.anomalies)),
    ];

    for (label, value) in entries {
        ui.label(RichText::new(label).size(10.0).color(Color32::GRAY));
        let highlight = label == "Anomalies" && value.unwrap_or(0) > 0;
        ui.label(
            RichText::new(metric(value))
                .strong()
                .size(12.0)
                .color(if highlight {
                    Color32::from_rgb(251, 191, 36) // Amber
                } else {
                    Color32::from_rgb(212, 212, 212)
                }),
        );
        ui.add_space(6.0);
    }
}
