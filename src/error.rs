use crate::constants::{
    API_VERSION, ERROR_CANCELLED, ERROR_INTERNAL, ERROR_INVALID_ARGUMENT, ERROR_INVALID_CONFIG,
    ERROR_PARSE, ERROR_TRANSPORT, ERROR_UPSTREAM, PROVIDER_NAME,
};
use crate::types::{ErrorMeta, ToolErrorEnvelope, ToolErrorInfo};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Every violated configuration rule, in field declaration order.
    #[error("{}", .violations.join("|"))]
    InvalidConfig { violations: Vec<String> },
    #[error("invalid argument: {message}")]
    InvalidArgument {
        message: String,
        details: Option<serde_json::Value>,
    },
    #[error("request cancelled")]
    Cancelled,
    #[error("upstream error: {0}")]
    Upstream(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => ERROR_INVALID_CONFIG,
            Self::InvalidArgument { .. } => ERROR_INVALID_ARGUMENT,
            Self::Cancelled => ERROR_CANCELLED,
            Self::Upstream(_) => ERROR_UPSTREAM,
            Self::Parse(_) => ERROR_PARSE,
            Self::Transport(_) => ERROR_TRANSPORT,
            Self::Internal(_) => ERROR_INTERNAL,
        }
    }

    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            Self::InvalidArgument { details, .. } => details.clone(),
            Self::InvalidConfig { violations } => Some(serde_json::json!({ "violations": violations })),
            _ => None,
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::InvalidConfig { violations } => violations.join("|"),
            Self::InvalidArgument { message, .. } => message.clone(),
            Self::Cancelled => "Search cancelled.".to_string(),
            Self::Upstream(message)
            | Self::Parse(message)
            | Self::Transport(message)
            | Self::Internal(message) => message.clone(),
        }
    }

    #[must_use]
    pub fn to_envelope(&self, server_version: &str, trace_id: &str) -> ToolErrorEnvelope {
        ToolErrorEnvelope {
            api_version: API_VERSION.to_string(),
            error: ToolErrorInfo {
                code: self.code().to_string(),
                message: self.message(),
                details: self.details(),
            },
            meta: ErrorMeta {
                provider: PROVIDER_NAME.to_string(),
                server_version: server_version.to_string(),
                trace_id: trace_id.to_string(),
            },
        }
    }

    #[must_use]
    pub fn invalid_argument_with_details(
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            details: Some(details),
        }
    }
}
