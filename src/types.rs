use crate::error::AppError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchDepth {
    Standard,
    Deep,
}

impl SearchDepth {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Deep => "deep",
        }
    }
}

/// Raw `search-web` arguments as delivered by the host.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchWebArgs {
    pub query: String,
    pub depth: SearchDepth,
}

/// A validated search, built only from arguments that passed the schema boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub depth: SearchDepth,
}

impl TryFrom<SearchWebArgs> for SearchRequest {
    type Error = AppError;

    fn try_from(args: SearchWebArgs) -> Result<Self, Self::Error> {
        if args.query.trim().is_empty() {
            return Err(AppError::invalid_argument_with_details(
                "query must not be empty",
                serde_json::json!({"field": "query"}),
            ));
        }

        Ok(Self {
            query: args.query,
            depth: args.depth,
        })
    }
}

/// Body of `POST /search`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkupSearchPayload<'a> {
    pub q: &'a str,
    pub depth: SearchDepth,
    pub output_type: &'static str,
    pub include_images: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolErrorEnvelope {
    pub api_version: String,
    pub error: ToolErrorInfo,
    pub meta: ErrorMeta,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolErrorInfo {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorMeta {
    pub provider: String,
    pub server_version: String,
    pub trace_id: String,
}
