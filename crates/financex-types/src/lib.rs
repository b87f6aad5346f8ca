//! Shared API types for the FinanceX explorer.
//!
//! Single source of truth for every type crossing the HTTP boundary
//! between this client and the FinanceX backend services (chat, graph,
//! KPI, and data listings). No inline struct definitions at call sites.
//!
//! The backend is not under our control, so response types are lenient:
//! fields it may omit carry `#[serde(default)]`, and nothing here is
//! treated as an invariant the client re-derives.

use serde::{Deserialize, Serialize};

// ============================================================================
// GRAPH SNAPSHOT
// ============================================================================

/// One node of a graph snapshot. Immutable for the snapshot's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Identifier, unique within a snapshot.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Type tag, e.g. "vendor", "invoice", "transaction", "product".
    /// Open set; unrecognized tags still render (with a fallback color).
    #[serde(rename = "type")]
    pub node_type: String,
}

/// Directed edge referencing nodes by identifier only. An edge whose
/// endpoint is missing from the node set is dangling and gets skipped at
/// render time, never treated as fatal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub relationship: String,
}

/// Aggregate counts reported by the backend. Display hints for the
/// legend only; the renderer does not depend on them for correctness.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphStats {
    #[serde(default)]
    pub total_nodes: usize,
    #[serde(default)]
    pub total_edges: usize,
    #[serde(default)]
    pub vendors: usize,
    #[serde(default)]
    pub invoices: usize,
    #[serde(default)]
    pub transactions: usize,
    #[serde(default)]
    pub products: usize,
}

/// Point-in-time graph returned by `GET /graph/graph`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphSnapshot {
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
    #[serde(default)]
    pub stats: GraphStats,
}

impl GraphSnapshot {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// ============================================================================
// CHAT API
// ============================================================================

/// Body for `POST /api/v1/chat`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub query: String,
    /// Correlation token for multi-turn conversations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// Response from `POST /api/v1/chat`.
///
/// Backend revisions have named the answer field differently, so all
/// known variants are accepted; [`ChatResponse::answer_text`] fixes the
/// precedence.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

impl ChatResponse {
    /// The first non-empty of `answer`, `response`, `message`, in that
    /// order. Whitespace-only fields count as empty.
    pub fn answer_text(&self) -> Option<&str> {
        [&self.answer, &self.response, &self.message]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .map(str::trim)
            .find(|text| !text.is_empty())
    }
}

/// One provenance fact cited as evidence for an answer. Labels are
/// free-form strings; they are not guaranteed to resolve to snapshot
/// node identifiers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceTriple {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub relationship: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
}

/// Response from `POST /api/v1/chat_with_sources`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourcedChatResponse {
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<SourceTriple>,
    /// Opaque path to a pre-rendered graph view for this answer. The
    /// client only ever joins it onto the configured base address.
    #[serde(default)]
    pub graph_url: Option<String>,
}

// ============================================================================
// KPI & DATA LISTINGS
// ============================================================================

/// Headline counts from `GET /kpi/kpis` (the fast CSV-backed service).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KpiSummary {
    #[serde(default)]
    pub total_invoices: usize,
    #[serde(default)]
    pub total_transactions: usize,
    #[serde(default)]
    pub anomalies: usize,
    #[serde(default)]
    pub total_vendors: usize,
}

/// One free-form record from the data listing endpoints. Column set is
/// whatever the backing CSV happens to contain.
pub type DataRecord = serde_json::Map<String, serde_json::Value>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_snapshot_deserializes_wire_format() {
        let json = r#"{
            "nodes": [
                {"id": "vendor_2", "label": "Vendor 2", "type": "vendor"},
                {"id": "inv_v2_m02", "label": "INV-V2-M02-828264", "type": "invoice"}
            ],
            "edges": [
                {"source": "inv_v2_m02", "target": "vendor_2", "relationship": "issued_by"}
            ],
            "stats": {"total_nodes": 2, "total_edges": 1, "vendors": 1, "invoices": 1,
                      "transactions": 0, "products": 0}
        }"#;
        let snapshot: GraphSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.nodes.len(), 2);
        assert_eq!(snapshot.nodes[0].node_type, "vendor");
        assert_eq!(snapshot.edges[0].relationship, "issued_by");
        assert_eq!(snapshot.stats.vendors, 1);
    }

    #[test]
    fn graph_snapshot_tolerates_missing_stats() {
        let snapshot: GraphSnapshot = serde_json::from_str(r#"{"nodes": [], "edges": []}"#).unwrap();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.stats, GraphStats::default());
    }

    #[test]
    fn answer_text_prefers_answer_over_response_over_message() {
        let all: ChatResponse = serde_json::from_str(
            r#"{"answer": "A", "response": "B", "message": "C"}"#,
        )
        .unwrap();
        assert_eq!(all.answer_text(), Some("A"));

        let no_answer: ChatResponse =
            serde_json::from_str(r#"{"response": "B", "message": "C"}"#).unwrap();
        assert_eq!(no_answer.answer_text(), Some("B"));

        let message_only: ChatResponse = serde_json::from_str(r#"{"message": "C"}"#).unwrap();
        assert_eq!(message_only.answer_text(), Some("C"));
    }

    #[test]
    fn answer_text_skips_blank_fields() {
        let blank_answer: ChatResponse =
            serde_json::from_str(r#"{"answer": "   ", "response": "9 invoices."}"#).unwrap();
        assert_eq!(blank_answer.answer_text(), Some("9 invoices."));

        let all_blank: ChatResponse =
            serde_json::from_str(r#"{"answer": "", "message": " "}"#).unwrap();
        assert_eq!(all_blank.answer_text(), None);
        assert_eq!(ChatResponse::default().answer_text(), None);
    }

    #[test]
    fn sourced_response_defaults_missing_fields() {
        let response: SourcedChatResponse = serde_json::from_str(
            r#"{"answer": "9 invoices.",
                "sources": [{"source": "INV-1", "relationship": "billed_to", "target": "Vendor 2"}]}"#,
        )
        .unwrap();
        assert_eq!(response.answer, "9 invoices.");
        assert_eq!(response.sources.len(), 1);
        assert_eq!(response.sources[0].source.as_deref(), Some("INV-1"));
        assert!(response.graph_url.is_none());

        let bare: SourcedChatResponse = serde_json::from_str("{}").unwrap();
        assert!(bare.answer.is_empty());
        assert!(bare.sources.is_empty());
    }

    #[test]
    fn source_triple_fields_may_be_null() {
        let triple: SourceTriple =
            serde_json::from_str(r#"{"source": null, "relationship": "matches"}"#).unwrap();
        assert!(triple.source.is_none());
        assert_eq!(triple.relationship.as_deref(), Some("matches"));
        assert!(triple.target.is_none());
    }

    #[test]
    fn chat_request_omits_absent_session_id() {
        let request = ChatRequest {
            query: "How many invoices do we have in total?".into(),
            session_id: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("session_id"));

        let with_session = ChatRequest {
            query: "and last month?".into(),
            session_id: Some("abc-123".into()),
        };
        let json = serde_json::to_string(&with_session).unwrap();
        assert!(json.contains(r#""session_id":"abc-123""#));
    }

    #[test]
    fn kpi_summary_deserializes() {
        let kpis: KpiSummary = serde_json::from_str(
            r#"{"total_invoices": 9, "total_transactions": 12, "anomalies": 3, "total_vendors": 4}"#,
        )
        .unwrap();
        assert_eq!(kpis.total_invoices, 9);
        assert_eq!(kpis.anomalies, 3);
    }
}
