//! Advisory configuration

use std::time::Duration;

use crate::prompt::SYSTEM_INSTRUCTION;

/// Sampling temperature favouring consistency over creativity
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Settings applied to every advisory request
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisorConfig {
    /// Model override; the provider default when unset
    pub model: Option<String>,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
    pub system_instruction: String,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            model: None,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: None,
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
        }
    }
}

impl AdvisorConfig {
    /// Reads `LEXA_ADVISOR_TEMPERATURE`; malformed values keep the default
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("LEXA_ADVISOR_TEMPERATURE") {
            match parse_temperature(&raw) {
                Some(t) => config.temperature = t,
                None => tracing::warn!(
                    value = %raw,
                    "Ignoring LEXA_ADVISOR_TEMPERATURE, expected a number in 0.0-2.0"
                ),
            }
        }

        config
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = instruction.into();
        self
    }
}

/// Parse a sampling temperature, accepting only 0.0-2.0
pub fn parse_temperature(raw: &str) -> Option<f32> {
    raw.trim()
        .parse::<f32>()
        .ok()
        .filter(|t| (0.0..=2.0).contains(t))
}

/// Caller-side timeout for chat sessions, from `LEXA_ADVISOR_TIMEOUT_SECS`
pub fn session_timeout_from_env() -> Option<Duration> {
    std::env::var("LEXA_ADVISOR_TIMEOUT_SECS")
        .ok()
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AdvisorConfig::default();
        assert_eq!(config.temperature, 0.7);
        assert!(config.model.is_none());
        assert!(config.max_tokens.is_none());
        assert_eq!(config.system_instruction, SYSTEM_INSTRUCTION);
    }

    #[test]
    fn test_parse_temperature() {
        assert_eq!(parse_temperature("0.2"), Some(0.2));
        assert_eq!(parse_temperature(" 1 "), Some(1.0));
        assert_eq!(parse_temperature("2.5"), None);
        assert_eq!(parse_temperature("-0.1"), None);
        assert_eq!(parse_temperature("warm"), None);
    }

    #[test]
    fn test_builders() {
        let config = AdvisorConfig::default()
            .with_model("gemini-test")
            .with_temperature(0.3)
            .with_max_tokens(512);
        assert_eq!(config.model.as_deref(), Some("gemini-test"));
        assert_eq!(config.temperature, 0.3);
        assert_eq!(config.max_tokens, Some(512));
    }
}
