//! Chat session state.
//!
//! One conversation instance: an append-only transcript, the single
//! in-flight-request flag, and the session correlation token. All
//! mutation goes through [`ChatSession::begin_send`] and
//! [`ChatSession::complete`], so the send contract is testable without a
//! rendering surface or a live backend. The session lives exactly as
//! long as the view that created it; nothing is persisted.

use chrono::{DateTime, Local};
use financex_types::{ChatResponse, SourceTriple, SourcedChatResponse};
use uuid::Uuid;

use crate::api::ApiError;

/// Greeting seeded into every new session.
const GREETING: &str = "Hi! Ask me about your vendors, invoices, and transactions.";

/// Fixed remediation line shown when a query fails for any reason; the
/// underlying error text is appended for diagnostics.
pub const CHAT_FAILED_MESSAGE: &str =
    "Sorry, I couldn't get an answer from the knowledge graph. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Local>,
    /// Provenance triples cited for an assistant answer.
    pub sources: Vec<SourceTriple>,
    /// Opaque reference to a full graph view for this answer.
    pub graph_ref: Option<String>,
}

impl ChatMessage {
    fn user(text: String) -> Self {
        Self {
            role: Role::User,
            text,
            timestamp: Local::now(),
            sources: Vec::new(),
            graph_ref: None,
        }
    }

    fn assistant(text: String) -> Self {
        Self {
            role: Role::Assistant,
            text,
            timestamp: Local::now(),
            sources: Vec::new(),
            graph_ref: None,
        }
    }
}

/// Normalized successful reply, whichever chat endpoint produced it.
#[derive(Debug, Clone, Default)]
pub struct ChatReply {
    pub answer: String,
    pub sources: Vec<SourceTriple>,
    pub graph_ref: Option<String>,
}

impl From<SourcedChatResponse> for ChatReply {
    fn from(response: SourcedChatResponse) -> Self {
        Self {
            answer: response.answer,
            sources: response.sources,
            graph_ref: response.graph_url,
        }
    }
}

impl From<ChatResponse> for ChatReply {
    fn from(response: ChatResponse) -> Self {
        Self {
            answer: response.answer_text().unwrap_or_default().to_string(),
            sources: Vec::new(),
            graph_ref: None,
        }
    }
}

pub struct ChatSession {
    /// Correlation token sent with plain chat requests. Owned by the
    /// session that generated it, never read from ambient state.
    pub session_id: Uuid,
    messages: Vec<ChatMessage>,
    pending: bool,
    last_error: Option<String>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            messages: vec![ChatMessage::assistant(GREETING.to_string())],
            pending: false,
            last_error: None,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Start a send. Appends the user message and returns the trimmed
    /// query to dispatch, or `None` (and no state change at all) when
    /// the text is blank or a request is already in flight.
    pub fn begin_send(&mut self, text: &str) -> Option<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.pending {
            return None;
        }
        self.messages.push(ChatMessage::user(trimmed.to_string()));
        self.pending = true;
        Some(trimmed.to_string())
    }

    /// Finish the in-flight send. Exactly one assistant message is
    /// appended whatever the outcome; a success whose answer is blank
    /// counts as a failure. Clears the pending flag either way.
    pub fn complete(&mut self, outcome: Result<ChatReply, ApiError>) {
        let outcome = outcome.and_then(|reply| {
            if reply.answer.trim().is_empty() {
                Err(ApiError::EmptyAnswer)
            } else {
                Ok(reply)
            }
        });

        match outcome {
            Ok(reply) => {
                self.messages.push(ChatMessage {
                    role: Role::Assistant,
                    text: reply.answer,
                    timestamp: Local::now(),
                    sources: reply.sources,
                    graph_ref: reply.graph_ref,
                });
                self.last_error = None;
            }
            Err(error) => {
                let error = error.to_string();
                self.messages.push(ChatMessage::assistant(format!(
                    "{CHAT_FAILED_MESSAGE}\n({error})"
                )));
                self.last_error = Some(error);
            }
        }
        self.pending = false;
    }
}
