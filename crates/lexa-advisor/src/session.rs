//! Advisory session - one conversation driven against one service

use std::time::Duration;

use lexa_types::AdvisoryContext;

use crate::advisor::{AdviceOutcome, AdvisoryService, FallbackReason};
use crate::conversation::{Conversation, ConversationError};

/// A chat session: history plus the service that answers it.
///
/// `ask` takes `&mut self`, so at most one query is in flight per session.
#[derive(Debug)]
pub struct AdvisorySession {
    service: AdvisoryService,
    conversation: Conversation,
    timeout: Option<Duration>,
}

impl AdvisorySession {
    pub fn new(service: AdvisoryService) -> Self {
        Self {
            service,
            conversation: Conversation::new(),
            timeout: None,
        }
    }

    /// Give up on the backend after `timeout`, answering with the
    /// recalibrating fallback
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn service(&self) -> &AdvisoryService {
        &self.service
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn reset(&mut self) {
        self.conversation.reset();
    }

    /// Run one exchange: record the question, query, record the answer
    pub async fn ask(
        &mut self,
        input: &str,
        context: &AdvisoryContext,
    ) -> Result<AdviceOutcome, ConversationError> {
        let pending = self.conversation.submit(input)?;

        let query = self.service.advise(pending.question(), context);
        let outcome = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, query).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    tracing::warn!(timeout_ms = limit.as_millis() as u64, "Advisory query timed out");
                    AdviceOutcome::Fallback(FallbackReason::TimedOut)
                }
            },
            None => query.await,
        };

        self.conversation.complete(pending, outcome.text());
        Ok(outcome)
    }
}
