//! API client for the FinanceX backend.
//!
//! Thin typed wrapper over reqwest. Paths follow the gateway mounts:
//! chat under `/api/v1`, the graph service under `/graph`, KPIs under
//! `/kpi`, CSV listings under `/data`.

use financex_types::{
    ChatRequest, ChatResponse, DataRecord, GraphSnapshot, KpiSummary, SourcedChatResponse,
};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure talking to the backend.
///
/// Transport, protocol, and semantic failures are distinguished here but
/// all collapse to one user-visible outcome at the session boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (connection refused, DNS, ...).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    /// The body was not the JSON we expected.
    #[error("invalid response: {0}")]
    Decode(String),
    /// A success response that carried no usable answer.
    #[error("the response contained no answer")]
    EmptyAnswer,
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Join an opaque path onto the base address. No validation; graph
    /// view references from chat answers pass through here untouched.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::decode(response).await
    }

    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }

    // =========================================================================
    // TYPED ENDPOINTS
    // =========================================================================

    /// Plain chat query, with the session correlation token.
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        self.post("/api/v1/chat", request).await
    }

    /// Chat query that also returns provenance triples.
    pub async fn chat_with_sources(&self, query: &str) -> Result<SourcedChatResponse, ApiError> {
        #[derive(serde::Serialize)]
        struct Body<'a> {
            query: &'a str,
        }
        self.post("/api/v1/chat_with_sources", &Body { query }).await
    }

    /// Current graph snapshot for visualization.
    pub async fn graph(&self) -> Result<GraphSnapshot, ApiError> {
        self.get("/graph/graph").await
    }

    /// Snapshot behind an opaque graph view reference.
    pub async fn graph_at(&self, path: &str) -> Result<GraphSnapshot, ApiError> {
        self.get(path).await
    }

    pub async fn kpis(&self) -> Result<KpiSummary, ApiError> {
        self.get("/kpi/kpis").await
    }

    pub async fn invoices(&self) -> Result<Vec<DataRecord>, ApiError> {
        self.get("/data/invoices").await
    }

    pub async fn transactions(&self) -> Result<Vec<DataRecord>, ApiError> {
        self.get("/data/transactions").await
    }

    /// Gateway health probe.
    pub async fn health(&self) -> Result<(), ApiError> {
        let _: serde_json::Value = self.get("/health").await?;
        Ok(())
    }
}
