//! Lexa LLM - Generation backend abstraction
//!
//! A single interface over the text-generation backends Lexa can talk to:
//!
//! ## Hosted
//! - Google Gemini (default): `generateContent` REST endpoint
//!
//! ## Local (no API keys required)
//! - Ollama: `http://localhost:11434`
//!
//! ## Offline
//! - A provider that is never available, selected when no backend is
//!   configured. Every completion fails, so callers take their fallback path.
//!
//! Providers are constructed explicitly and handed to an [`LLMRouter`]; there
//! is no process-wide client.

pub mod providers;
pub mod router;
pub mod types;

pub use providers::*;
pub use router::*;
pub use types::*;
