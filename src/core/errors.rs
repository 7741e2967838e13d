use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Machine-readable category attached to every local fault
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Validation,
    Configuration,
    Decode,
    Api,
    Authentication,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "VALIDATION_ERROR",
            Self::Configuration => "CONFIGURATION_ERROR",
            Self::Decode => "DECODE_ERROR",
            Self::Api => "API_ERROR",
            Self::Authentication => "AUTHENTICATION_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Faults raised locally by the client.
///
/// Failures reported by the remote service are never represented here; they
/// come back as [`crate::core::types::ApiResponse::Error`].
#[derive(Error, Debug)]
pub enum BlindPayError {
    #[error("{message}")]
    Validation {
        message: String,
        context: BTreeMap<String, String>,
    },

    #[error("{0}")]
    Configuration(String),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to serialize request body: {0}")]
    Serialization(String),

    #[error("Unknown receiver type: {}/{}", .receiver_type.as_deref().unwrap_or(""), .kyc_type.as_deref().unwrap_or(""))]
    UnknownVariant {
        receiver_type: Option<String>,
        kyc_type: Option<String>,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] crate::core::config::ConfigError),
}

impl BlindPayError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            context: BTreeMap::new(),
        }
    }

    /// Validation failure with a single diagnostic key attached
    pub fn validation_with(
        message: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let mut context = BTreeMap::new();
        context.insert(key.into(), value.into());
        Self::Validation {
            message: message.into(),
            context,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Validation { .. } => ErrorCode::Validation,
            Self::Configuration(_) | Self::Config(_) => ErrorCode::Configuration,
            Self::Decode(_) | Self::Serialization(_) | Self::UnknownVariant { .. } => {
                ErrorCode::Decode
            }
        }
    }

    /// Diagnostic key/value pairs describing the fault
    pub fn context(&self) -> BTreeMap<String, String> {
        match self {
            Self::Validation { context, .. } => context.clone(),
            Self::UnknownVariant {
                receiver_type,
                kyc_type,
            } => {
                let mut context = BTreeMap::new();
                if let Some(receiver_type) = receiver_type {
                    context.insert("type".to_string(), receiver_type.clone());
                }
                if let Some(kyc_type) = kyc_type {
                    context.insert("kyc_type".to_string(), kyc_type.clone());
                }
                context
            }
            _ => BTreeMap::new(),
        }
    }

    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

/// Fails with a validation error naming `label` when `value` is empty
pub fn require_non_empty(value: &str, label: &str) -> Result<(), BlindPayError> {
    if value.is_empty() {
        tracing::debug!(field = label, "rejected empty identifier");
        return Err(BlindPayError::validation_with(
            format!("{} cannot be empty", label),
            "field",
            label,
        ));
    }
    Ok(())
}
