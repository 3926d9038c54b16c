use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use lexa_advisor::{
    parse_context, question_segment, AdviceOutcome, AdvisorConfig, AdvisorySession,
    AdvisoryService, ChatRole, ConversationError, FallbackReason, NO_RESPONSE_FALLBACK,
    RECALIBRATING_FALLBACK, SYSTEM_INSTRUCTION,
};
use lexa_llm::{
    CompletionRequest, CompletionResponse, LLMError, LLMProvider, LLMRouter, ProviderKind,
    Result as LLMResult,
};
use lexa_types::{fixtures, AdvisoryContext};

enum Reply {
    Text(&'static str),
    Fail,
    Stall,
}

/// Backend fake that records every request it receives
struct ScriptedProvider {
    reply: Reply,
    seen: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedProvider {
    fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            seen: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<CompletionRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl LLMProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "Scripted"
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Gemini
    }

    async fn is_available(&self) -> bool {
        true
    }

    async fn complete(&self, request: CompletionRequest) -> LLMResult<CompletionResponse> {
        self.seen.lock().unwrap().push(request);
        match self.reply {
            Reply::Text(text) => Ok(CompletionResponse::new(text)),
            Reply::Fail => Err(LLMError::NetworkError {
                message: "connection reset by peer".to_string(),
            }),
            Reply::Stall => {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok(CompletionResponse::new("too late"))
            }
        }
    }
}

fn service_with(provider: Arc<ScriptedProvider>) -> AdvisoryService {
    AdvisoryService::new(LLMRouter::new(provider))
}

const QUESTION: &str = "Which workers have the highest risk scores?";

#[tokio::test]
async fn test_generated_text_returned_unmodified() {
    let narrative = "  1. Marcus Thorne (92) - visa expired.\n2. David Chen (68)\n";
    let provider = ScriptedProvider::new(Reply::Text(narrative));
    let service = service_with(provider.clone());

    let outcome = service.advise(QUESTION, &fixtures::demo_context()).await;
    assert_eq!(outcome, AdviceOutcome::Generated(narrative.to_string()));

    let answer = service.get_advice(QUESTION, &fixtures::demo_context()).await;
    assert_eq!(answer, narrative);
    assert_eq!(provider.requests().len(), 2);
}

#[tokio::test]
async fn test_empty_text_yields_no_response_fallback() {
    let service = service_with(ScriptedProvider::new(Reply::Text("")));

    let outcome = service.advise(QUESTION, &fixtures::demo_context()).await;
    assert_eq!(outcome, AdviceOutcome::Fallback(FallbackReason::EmptyResponse));
    assert_eq!(outcome.text(), NO_RESPONSE_FALLBACK);
}

#[tokio::test]
async fn test_whitespace_text_returned_unmodified() {
    for text in ["\n", "   \n"] {
        let service = service_with(ScriptedProvider::new(Reply::Text(text)));

        let outcome = service.advise(QUESTION, &fixtures::demo_context()).await;
        assert_eq!(outcome, AdviceOutcome::Generated(text.to_string()));

        let answer = service.get_advice(QUESTION, &fixtures::demo_context()).await;
        assert_eq!(answer, text);
    }
}

#[tokio::test]
async fn test_backend_failure_yields_recalibrating_fallback() {
    let service = service_with(ScriptedProvider::new(Reply::Fail));

    let outcome = service.advise(QUESTION, &fixtures::demo_context()).await;
    match &outcome {
        AdviceOutcome::Fallback(FallbackReason::Backend { message }) => {
            assert!(message.contains("connection reset"));
        }
        other => panic!("expected backend fallback, got {:?}", other),
    }

    let answer = service.get_advice(QUESTION, &fixtures::demo_context()).await;
    assert_eq!(
        answer,
        "Lexa's intelligence orchestrator is currently recalibrating. Please try again in a moment."
    );
}

#[tokio::test]
async fn test_answer_is_never_empty() {
    let replies = [
        Reply::Text("ok"),
        Reply::Text(""),
        Reply::Text(" "),
        Reply::Fail,
    ];
    let contexts = [fixtures::demo_context(), AdvisoryContext::default()];

    for reply in replies {
        let service = service_with(ScriptedProvider::new(reply));
        for context in &contexts {
            for question in [QUESTION, "x", "Are our salaries above the new 2024 thresholds?"] {
                let answer = service.get_advice(question, context).await;
                assert!(!answer.is_empty());
            }
        }
    }
}

#[tokio::test]
async fn test_request_carries_context_instruction_and_temperature() {
    let provider = ScriptedProvider::new(Reply::Text("ok"));
    let service = service_with(provider.clone());
    let context = fixtures::demo_context();

    service.get_advice(QUESTION, &context).await;

    let requests = provider.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];

    assert_eq!(request.system.as_deref(), Some(SYSTEM_INSTRUCTION));
    assert_eq!(request.temperature, Some(0.7));
    assert!(request.model.is_none());

    let prompt = &request.messages[0].content;
    assert_eq!(parse_context(prompt), Some(context));
    assert_eq!(question_segment(prompt), Some(QUESTION));
}

#[tokio::test]
async fn test_configured_model_and_temperature_forwarded() {
    let provider = ScriptedProvider::new(Reply::Text("ok"));
    let service = AdvisoryService::with_config(
        LLMRouter::new(provider.clone()),
        AdvisorConfig::default()
            .with_model("gemini-pro-test")
            .with_temperature(0.2),
    );

    service.get_advice(QUESTION, &fixtures::demo_context()).await;

    let request = &provider.requests()[0];
    assert_eq!(request.model.as_deref(), Some("gemini-pro-test"));
    assert_eq!(request.temperature, Some(0.2));
}

#[tokio::test]
async fn test_session_records_exchange() {
    let provider = ScriptedProvider::new(Reply::Text("Marcus Thorne carries the highest risk."));
    let mut session = AdvisorySession::new(service_with(provider));

    let outcome = session
        .ask("  Which workers have the highest risk scores? ", &fixtures::demo_context())
        .await
        .unwrap();
    assert!(outcome.is_generated());

    let messages = session.conversation().messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].role, ChatRole::User);
    assert_eq!(messages[1].content, QUESTION);
    assert_eq!(messages[2].role, ChatRole::Assistant);
    assert_eq!(messages[2].content, "Marcus Thorne carries the highest risk.");
    assert!(!session.conversation().is_pending());
}

#[tokio::test]
async fn test_session_records_fallback_as_assistant_message() {
    let mut session = AdvisorySession::new(service_with(ScriptedProvider::new(Reply::Fail)));

    session.ask(QUESTION, &fixtures::demo_context()).await.unwrap();

    let last = session.conversation().last().unwrap();
    assert_eq!(last.role, ChatRole::Assistant);
    assert_eq!(last.content, RECALIBRATING_FALLBACK);
}

#[tokio::test]
async fn test_session_timeout_maps_to_recalibrating() {
    let mut session = AdvisorySession::new(service_with(ScriptedProvider::new(Reply::Stall)))
        .with_timeout(Duration::from_millis(50));

    let outcome = session.ask(QUESTION, &fixtures::demo_context()).await.unwrap();

    assert_eq!(outcome, AdviceOutcome::Fallback(FallbackReason::TimedOut));
    assert_eq!(session.conversation().last().unwrap().content, RECALIBRATING_FALLBACK);
    assert!(!session.conversation().is_pending());
}

#[tokio::test]
async fn test_session_rejects_blank_input_without_calling_backend() {
    let provider = ScriptedProvider::new(Reply::Text("ok"));
    let mut session = AdvisorySession::new(service_with(provider.clone()));

    let err = session.ask("   ", &fixtures::demo_context()).await.unwrap_err();
    assert_eq!(err, ConversationError::EmptyInput);
    assert_eq!(session.conversation().len(), 1);
    assert!(provider.requests().is_empty());
}

#[tokio::test]
async fn test_session_reset_after_exchanges() {
    let mut session = AdvisorySession::new(service_with(ScriptedProvider::new(Reply::Text("ok"))));
    for question in ["one", "two", "three"] {
        session.ask(question, &fixtures::demo_context()).await.unwrap();
    }
    assert_eq!(session.conversation().len(), 7);

    session.reset();
    assert_eq!(session.conversation().len(), 1);
    assert_eq!(session.conversation().suggestions().len(), 4);
}

#[tokio::test]
async fn test_offline_router_recalibrates() {
    let service = AdvisoryService::new(LLMRouter::from_kind(ProviderKind::Offline));
    let answer = service.get_advice(QUESTION, &fixtures::demo_context()).await;
    assert_eq!(answer, RECALIBRATING_FALLBACK);
}
