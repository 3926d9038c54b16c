//! LLM Router - Selects and holds the generation backend

use std::sync::Arc;

use crate::providers::*;
use crate::types::*;

/// Holds the provider chosen for this process.
///
/// Cloning is cheap; clones share the same provider.
#[derive(Clone)]
pub struct LLMRouter {
    provider: Arc<dyn LLMProvider>,
    kind: ProviderKind,
}

impl std::fmt::Debug for LLMRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LLMRouter")
            .field("provider", &self.provider.name())
            .field("kind", &self.kind)
            .finish()
    }
}

impl LLMRouter {
    /// Create a router with a specific provider
    pub fn new(provider: Arc<dyn LLMProvider>) -> Self {
        let kind = provider.kind();
        Self { provider, kind }
    }

    /// Create a router from environment variables
    ///
    /// Reads `LEXA_LLM_PROVIDER` to select the provider:
    /// - `gemini` (default): Google Gemini, needs `GEMINI_API_KEY` or `API_KEY`
    /// - `ollama`: Local Ollama instance
    /// - `offline`: No backend; every query takes the fallback path
    pub fn from_env() -> Self {
        // Try to load .env file (ignore errors)
        let _ = dotenvy::dotenv();

        let provider_name =
            std::env::var("LEXA_LLM_PROVIDER").unwrap_or_else(|_| "gemini".to_string());

        let kind = match ProviderKind::from_str(&provider_name) {
            Some(kind) => kind,
            None => {
                tracing::warn!(provider = %provider_name, "Unknown LLM provider, using gemini");
                ProviderKind::Gemini
            }
        };

        Self::from_kind(kind)
    }

    /// Create a router for a specific provider kind, configured from the environment
    pub fn from_kind(kind: ProviderKind) -> Self {
        let provider: Arc<dyn LLMProvider> = match kind {
            ProviderKind::Gemini => {
                if let Some(p) = GeminiProvider::from_env() {
                    Arc::new(p)
                } else {
                    tracing::warn!("Gemini API key not found, running offline");
                    Arc::new(OfflineProvider::new())
                }
            }
            ProviderKind::Ollama => Arc::new(OllamaProvider::from_env()),
            ProviderKind::Offline => Arc::new(OfflineProvider::new()),
        };

        Self::new(provider)
    }

    /// Get the current provider
    pub fn provider(&self) -> &Arc<dyn LLMProvider> {
        &self.provider
    }

    /// Get the provider kind
    pub fn kind(&self) -> ProviderKind {
        self.kind
    }

    /// Default model of the current provider
    pub fn model(&self) -> Option<&str> {
        self.provider.model()
    }

    /// Check if the provider is available
    pub async fn is_available(&self) -> bool {
        self.provider.is_available().await
    }

    /// Complete a request using the current provider
    pub async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        self.provider.complete(request).await
    }
}

impl Default for LLMRouter {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Builder for LLM router with explicit configuration
#[derive(Default)]
pub struct LLMRouterBuilder {
    kind: Option<ProviderKind>,
    gemini_config: Option<GeminiConfig>,
    ollama_config: Option<OllamaConfig>,
}

impl LLMRouterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: ProviderKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_gemini(mut self, config: GeminiConfig) -> Self {
        self.gemini_config = Some(config);
        self.kind = Some(ProviderKind::Gemini);
        self
    }

    pub fn with_ollama(mut self, config: OllamaConfig) -> Self {
        self.ollama_config = Some(config);
        self.kind = Some(ProviderKind::Ollama);
        self
    }

    pub fn build(self) -> LLMRouter {
        let kind = self.kind.unwrap_or(ProviderKind::Offline);

        let provider: Arc<dyn LLMProvider> = match kind {
            ProviderKind::Gemini => match self.gemini_config {
                Some(config) => Arc::new(GeminiProvider::new(config)),
                None => Arc::new(OfflineProvider::new()),
            },
            ProviderKind::Ollama => {
                let config = self.ollama_config.unwrap_or_default();
                Arc::new(OllamaProvider::new(config))
            }
            ProviderKind::Offline => Arc::new(OfflineProvider::new()),
        };

        LLMRouter::new(provider)
    }
}
