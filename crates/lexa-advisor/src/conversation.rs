//! Conversation state for the chat front-end
//!
//! The history is append-only. The one structural change allowed is
//! [`Conversation::reset`], which truncates back to the welcome message.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const WELCOME_MESSAGE: &str = "Hello, I am Lexa's Conversational Intelligence. I have analyzed your current sponsor licence data. How can I assist you with your UKVI audit readiness today?";

/// Starter questions offered before the first exchange
pub const SUGGESTED_QUESTIONS: [&str; 4] = [
    "Which workers have the highest risk scores?",
    "Run a mock audit summary",
    "Are our salaries above the new 2024 thresholds?",
    "What documents are missing for Marcus Thorne?",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One entry in the chat history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    /// Wall-clock time for display, `HH:MM`
    pub timestamp: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self::at(ChatRole::User, content, Local::now())
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::at(ChatRole::Assistant, content, Local::now())
    }

    pub fn at(role: ChatRole, content: impl Into<String>, time: DateTime<Local>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: display_time(&time),
        }
    }
}

pub fn display_time(time: &DateTime<Local>) -> String {
    time.format("%H:%M").to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversationError {
    #[error("Question is empty")]
    EmptyInput,

    #[error("A query is already in flight")]
    QueryInFlight,
}

/// Ticket for a submitted question awaiting its answer
#[derive(Debug)]
pub struct PendingQuery {
    question: String,
    epoch: u64,
}

impl PendingQuery {
    pub fn question(&self) -> &str {
        &self.question
    }
}

/// Ordered chat history, seeded with a welcome message
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    pending: bool,
    // Bumped on reset so answers to pre-reset questions are dropped
    epoch: u64,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    pub fn new() -> Self {
        Self::with_welcome(ChatMessage::assistant(WELCOME_MESSAGE))
    }

    pub fn with_welcome(welcome: ChatMessage) -> Self {
        Self {
            messages: vec![welcome],
            pending: false,
            epoch: 0,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false; the welcome message is never removed
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Starter questions, offered only before the first exchange
    pub fn suggestions(&self) -> &'static [&'static str] {
        if self.messages.len() == 1 {
            &SUGGESTED_QUESTIONS
        } else {
            &[]
        }
    }

    /// Record a user question and mark a query as in flight
    pub fn submit(&mut self, input: &str) -> Result<PendingQuery, ConversationError> {
        let question = input.trim();
        if question.is_empty() {
            return Err(ConversationError::EmptyInput);
        }
        if self.pending {
            return Err(ConversationError::QueryInFlight);
        }

        self.messages.push(ChatMessage::user(question));
        self.pending = true;

        Ok(PendingQuery {
            question: question.to_string(),
            epoch: self.epoch,
        })
    }

    /// Record the answer to a pending query.
    ///
    /// Returns false, leaving the history untouched, when the query was
    /// submitted before the last reset.
    pub fn complete(&mut self, query: PendingQuery, answer: impl Into<String>) -> bool {
        if query.epoch != self.epoch {
            tracing::debug!("Dropping answer to a question asked before reset");
            return false;
        }

        self.messages.push(ChatMessage::assistant(answer));
        self.pending = false;
        true
    }

    /// Truncate to the welcome message and forget any pending query
    pub fn reset(&mut self) {
        self.messages.truncate(1);
        self.pending = false;
        self.epoch += 1;
    }
}
