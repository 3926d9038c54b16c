//! Error types for snapshot parsing

use thiserror::Error;

/// Result type for lexa-types operations
pub type Result<T> = std::result::Result<T, TypesError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypesError {
    /// A textual enum value did not match any known variant
    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}

impl TypesError {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.to_string(),
        }
    }

    /// Get an error code for display and logs
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownVariant { .. } => "UNKNOWN_VARIANT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_variant_message() {
        let err = TypesError::unknown("compliance status", "Great");
        assert_eq!(err.to_string(), "Unknown compliance status: Great");
        assert_eq!(err.error_code(), "UNKNOWN_VARIANT");
    }
}
