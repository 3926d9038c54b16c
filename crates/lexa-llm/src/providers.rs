//! Generation backend implementations

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::types::*;

/// Trait for generation backends
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Get the provider name
    fn name(&self) -> &'static str;

    /// Get the provider kind
    fn kind(&self) -> ProviderKind;

    /// Default model, if the provider has one
    fn model(&self) -> Option<&str> {
        None
    }

    /// Check if the provider is available
    async fn is_available(&self) -> bool;

    /// Generate text for a request
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

// ============================================================================
// Gemini Provider (Hosted, Default)
// ============================================================================

pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";

/// Configuration for the Gemini provider
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_GEMINI_URL.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
        }
    }

    /// Reads `GEMINI_API_KEY` (or `API_KEY`), `LEXA_GEMINI_MODEL` and
    /// `LEXA_GEMINI_URL`. Returns `None` when no key is set.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .ok()
            .filter(|k| !k.trim().is_empty())?;

        Some(Self {
            base_url: env_or("LEXA_GEMINI_URL", DEFAULT_GEMINI_URL),
            api_key,
            model: env_or("LEXA_GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }
}

/// Google Gemini `generateContent` provider
pub struct GeminiProvider {
    config: GeminiConfig,
    client: reqwest::Client,
}

impl GeminiProvider {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Option<Self> {
        Some(Self::new(GeminiConfig::from_env()?))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    contents: Vec<GeminiContent>,
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    /// Thinking-model reasoning parts, excluded from the answer
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    thought: bool,
}

impl GeminiContent {
    fn text(role: Option<&str>, text: &str) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![GeminiPart {
                text: Some(text.to_string()),
                thought: false,
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    usage_metadata: Option<GeminiUsage>,
    #[serde(default)]
    model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsage {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}

fn gemini_request(request: &CompletionRequest) -> GeminiRequest {
    let mut system = request.system.clone().unwrap_or_default();
    let mut contents = Vec::new();

    for msg in &request.messages {
        match msg.role {
            MessageRole::System => {
                if !system.is_empty() {
                    system.push_str("\n\n");
                }
                system.push_str(&msg.content);
            }
            MessageRole::User => contents.push(GeminiContent::text(Some("user"), &msg.content)),
            MessageRole::Assistant => {
                contents.push(GeminiContent::text(Some("model"), &msg.content))
            }
        }
    }

    GeminiRequest {
        system_instruction: if system.is_empty() {
            None
        } else {
            Some(GeminiContent::text(None, &system))
        },
        contents,
        generation_config: GeminiGenerationConfig {
            temperature: request.temperature,
            max_output_tokens: request.max_tokens,
        },
    }
}

/// Concatenated text of the first candidate, skipping thought parts
fn gemini_text(response: &GeminiResponse) -> String {
    response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .filter(|p| !p.thought)
                .filter_map(|p| p.text.as_deref())
                .collect::<String>()
        })
        .unwrap_or_default()
}

#[async_trait]
impl LLMProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "Gemini"
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Gemini
    }

    fn model(&self) -> Option<&str> {
        Some(&self.config.model)
    }

    async fn is_available(&self) -> bool {
        // Just check if we have an API key
        !self.config.api_key.is_empty()
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let model = request
            .model
            .clone()
            .unwrap_or_else(|| self.config.model.clone());
        let body = gemini_request(&request);

        tracing::debug!(provider = "gemini", model = %model, "sending generateContent request");

        let response = self
            .client
            .post(self.config.endpoint(&model))
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LLMError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after_seconds = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(0);
            return Err(LLMError::RateLimited { retry_after_seconds });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LLMError::RequestFailed {
                message: format!("HTTP {}: {}", status, body),
            });
        }

        let gemini_response: GeminiResponse =
            response.json().await.map_err(|e| LLMError::InvalidResponse {
                message: e.to_string(),
            })?;

        let usage = gemini_response.usage_metadata.as_ref();
        Ok(CompletionResponse {
            content: gemini_text(&gemini_response),
            usage: TokenUsage {
                prompt_tokens: usage.map_or(0, |u| u.prompt_token_count),
                completion_tokens: usage.map_or(0, |u| u.candidates_token_count),
                total_tokens: usage.map_or(0, |u| u.total_token_count),
            },
            finish_reason: gemini_response
                .candidates
                .first()
                .and_then(|c| c.finish_reason.clone()),
            model: gemini_response.model_version.clone().or(Some(model)),
        })
    }
}

// ============================================================================
// Ollama Provider (Local)
// ============================================================================

/// Configuration for Ollama provider
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    pub base_url: String,
    pub model: String,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: env_or("LEXA_OLLAMA_URL", "http://localhost:11434"),
            model: env_or("LEXA_OLLAMA_MODEL", "llama3.1:8b"),
        }
    }
}

/// Ollama local LLM provider
pub struct OllamaProvider {
    config: OllamaConfig,
    client: reqwest::Client,
}

impl OllamaProvider {
    pub fn new(config: OllamaConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(OllamaConfig::default())
    }
}

#[derive(Serialize)]
struct OllamaRequest {
    model: String,
    prompt: String,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    options: OllamaOptions,
}

#[derive(Serialize)]
struct OllamaOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<u32>,
}

#[derive(Deserialize)]
struct OllamaResponse {
    #[serde(default)]
    response: String,
    #[serde(default)]
    done_reason: Option<String>,
    #[serde(default)]
    prompt_eval_count: u32,
    #[serde(default)]
    eval_count: u32,
}

fn ollama_prompt(messages: &[Message]) -> String {
    // A single user message goes through untouched
    if let [only] = messages {
        if only.role == MessageRole::User {
            return only.content.clone();
        }
    }

    messages
        .iter()
        .map(|m| match m.role {
            MessageRole::User => format!("User: {}", m.content),
            MessageRole::Assistant => format!("Assistant: {}", m.content),
            MessageRole::System => format!("System: {}", m.content),
        })
        .collect::<Vec<_>>()
        .join("\n\n")
        + "\n\nAssistant:"
}

#[async_trait]
impl LLMProvider for OllamaProvider {
    fn name(&self) -> &'static str {
        "Ollama"
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Ollama
    }

    fn model(&self) -> Option<&str> {
        Some(&self.config.model)
    }

    async fn is_available(&self) -> bool {
        let url = format!("{}/api/tags", self.config.base_url);
        self.client.get(&url).send().await.is_ok()
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let model = request
            .model
            .clone()
            .unwrap_or_else(|| self.config.model.clone());

        let ollama_request = OllamaRequest {
            model: model.clone(),
            prompt: ollama_prompt(&request.messages),
            stream: false,
            system: request.system.clone(),
            options: OllamaOptions {
                temperature: request.temperature,
                num_predict: request.max_tokens,
            },
        };

        tracing::debug!(provider = "ollama", model = %model, "sending generate request");

        let url = format!("{}/api/generate", self.config.base_url);
        let response = self
            .client
            .post(&url)
            .json(&ollama_request)
            .send()
            .await
            .map_err(|e| LLMError::NetworkError {
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(LLMError::RequestFailed {
                message: format!("HTTP {}", response.status()),
            });
        }

        let ollama_response: OllamaResponse =
            response.json().await.map_err(|e| LLMError::InvalidResponse {
                message: e.to_string(),
            })?;

        Ok(CompletionResponse {
            content: ollama_response.response,
            usage: TokenUsage {
                prompt_tokens: ollama_response.prompt_eval_count,
                completion_tokens: ollama_response.eval_count,
                total_tokens: ollama_response.prompt_eval_count + ollama_response.eval_count,
            },
            finish_reason: ollama_response.done_reason,
            model: Some(model),
        })
    }
}

// ============================================================================
// Offline Provider
// ============================================================================

/// Stand-in when no backend is configured; every completion fails
pub struct OfflineProvider;

impl OfflineProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OfflineProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LLMProvider for OfflineProvider {
    fn name(&self) -> &'static str {
        "Offline"
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Offline
    }

    async fn is_available(&self) -> bool {
        false
    }

    async fn complete(&self, _request: CompletionRequest) -> Result<CompletionResponse> {
        Err(LLMError::ProviderNotAvailable {
            provider: "offline".to_string(),
        })
    }
}
