//! Advisory Query Service
//!
//! One question plus one context snapshot in, one answer string out. The
//! service never returns an error: every failure becomes a fixed fallback
//! sentence. No retries, caching or timeouts happen here.

use std::fmt;

use lexa_llm::{CompletionRequest, LLMRouter, Message};
use lexa_types::AdvisoryContext;

use crate::config::AdvisorConfig;
use crate::prompt::render_prompt;

/// Returned when the backend answered with no text
pub const NO_RESPONSE_FALLBACK: &str = "I'm sorry, I couldn't generate a response at this time.";

/// Returned when the backend could not be reached or failed
pub const RECALIBRATING_FALLBACK: &str =
    "Lexa's intelligence orchestrator is currently recalibrating. Please try again in a moment.";

/// Why an advisory query fell back to a fixed answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// The backend succeeded but produced no text
    EmptyResponse,
    /// The backend call failed
    Backend { message: String },
    /// The context snapshot could not be serialized
    ContextEncoding { message: String },
    /// The caller gave up waiting
    TimedOut,
}

impl FallbackReason {
    /// The user-facing sentence for this reason
    pub fn text(&self) -> &'static str {
        match self {
            Self::EmptyResponse => NO_RESPONSE_FALLBACK,
            Self::Backend { .. } | Self::ContextEncoding { .. } | Self::TimedOut => {
                RECALIBRATING_FALLBACK
            }
        }
    }
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyResponse => write!(f, "empty response"),
            Self::Backend { message } => write!(f, "backend error: {}", message),
            Self::ContextEncoding { message } => write!(f, "context encoding failed: {}", message),
            Self::TimedOut => write!(f, "timed out"),
        }
    }
}

/// Result of one advisory query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdviceOutcome {
    /// Text produced by the backend, unmodified
    Generated(String),
    /// A fixed fallback sentence stands in for generated text
    Fallback(FallbackReason),
}

impl AdviceOutcome {
    /// The answer to show; never empty
    pub fn text(&self) -> &str {
        match self {
            Self::Generated(text) => text,
            Self::Fallback(reason) => reason.text(),
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Generated(text) => text,
            Self::Fallback(reason) => reason.text().to_string(),
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, Self::Generated(_))
    }

    pub fn fallback_reason(&self) -> Option<&FallbackReason> {
        match self {
            Self::Generated(_) => None,
            Self::Fallback(reason) => Some(reason),
        }
    }
}

/// Forwards compliance questions to the generation backend
#[derive(Debug, Clone)]
pub struct AdvisoryService {
    llm: LLMRouter,
    config: AdvisorConfig,
}

impl AdvisoryService {
    /// Create a service with default settings
    pub fn new(llm: LLMRouter) -> Self {
        Self::with_config(llm, AdvisorConfig::default())
    }

    pub fn with_config(llm: LLMRouter, config: AdvisorConfig) -> Self {
        Self { llm, config }
    }

    /// Create from environment
    pub fn from_env() -> Self {
        Self::with_config(LLMRouter::from_env(), AdvisorConfig::from_env())
    }

    pub fn llm(&self) -> &LLMRouter {
        &self.llm
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// The request that would be sent for this question
    pub fn build_request(
        &self,
        question: &str,
        context: &AdvisoryContext,
    ) -> serde_json::Result<CompletionRequest> {
        let prompt = render_prompt(question, context)?;

        let mut request = CompletionRequest::new(vec![Message::user(prompt)])
            .with_system(self.config.system_instruction.clone())
            .with_temperature(self.config.temperature);
        if let Some(model) = &self.config.model {
            request = request.with_model(model.clone());
        }
        if let Some(max_tokens) = self.config.max_tokens {
            request = request.with_max_tokens(max_tokens);
        }

        Ok(request)
    }

    /// Ask one question, reporting which path produced the answer
    pub async fn advise(&self, question: &str, context: &AdvisoryContext) -> AdviceOutcome {
        let request = match self.build_request(question, context) {
            Ok(request) => request,
            Err(e) => {
                tracing::error!(error = %e, "Failed to encode advisory context");
                return AdviceOutcome::Fallback(FallbackReason::ContextEncoding {
                    message: e.to_string(),
                });
            }
        };

        match self.llm.complete(request).await {
            Ok(response) if response.is_empty() => {
                tracing::warn!(
                    provider = %self.llm.kind(),
                    finish_reason = ?response.finish_reason,
                    "Backend returned no text"
                );
                AdviceOutcome::Fallback(FallbackReason::EmptyResponse)
            }
            Ok(response) => {
                tracing::debug!(
                    provider = %self.llm.kind(),
                    total_tokens = response.usage.total_tokens,
                    "Advisory response generated"
                );
                AdviceOutcome::Generated(response.content)
            }
            Err(e) => {
                tracing::error!(provider = %self.llm.kind(), error = %e, "Advisory generation failed");
                AdviceOutcome::Fallback(FallbackReason::Backend {
                    message: e.to_string(),
                })
            }
        }
    }

    /// Ask one question; always returns non-empty text
    pub async fn get_advice(&self, question: &str, context: &AdvisoryContext) -> String {
        self.advise(question, context).await.into_text()
    }
}
