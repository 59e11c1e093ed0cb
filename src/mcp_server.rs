use crate::constants::{
    DEPTH_DESCRIPTION, QUERY_DESCRIPTION, SEARCH_WEB_DESCRIPTION, SERVER_INSTRUCTIONS, SERVER_NAME,
    TOOL_SEARCH_WEB,
};
use crate::error::AppError;
use crate::service::SearchService;
use crate::types::{SearchRequest, SearchWebArgs};
use mcpkit::capability::{ServerCapabilities, ServerInfo};
use mcpkit::error::McpError;
use mcpkit::types::content::Content;
use mcpkit::types::tool::{CallToolResult, Tool, ToolAnnotations, ToolOutput};
use mcpkit::{Context, ServerHandler, ToolHandler};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct LinkupMcpServer {
    service: Arc<SearchService>,
}

impl LinkupMcpServer {
    #[must_use]
    pub fn new(service: SearchService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    fn tools() -> Vec<Tool> {
        vec![search_tool_schema()]
    }

    async fn search_web(
        &self,
        args: Value,
        trace_id: &str,
        ctx: &Context<'_>,
    ) -> Result<ToolOutput, McpError> {
        let request = match parse_tool_args::<SearchWebArgs>(args, TOOL_SEARCH_WEB)
            .and_then(SearchRequest::try_from)
        {
            Ok(request) => request,
            Err(error) => {
                tracing::warn!(trace_id, %error, "rejected search-web arguments");
                return Ok(error_tool_output(
                    &error,
                    self.service.server_version(),
                    trace_id,
                ));
            }
        };

        match self
            .service
            .execute_search(request, trace_id, || ctx.is_cancelled())
            .await
        {
            Ok(results) => json_tool_output(&results),
            Err(error) => Ok(error_tool_output(
                &error,
                self.service.server_version(),
                trace_id,
            )),
        }
    }
}

impl ServerHandler for LinkupMcpServer {
    fn server_info(&self) -> ServerInfo {
        ServerInfo::new(SERVER_NAME, self.service.server_version())
    }

    fn capabilities(&self) -> ServerCapabilities {
        ServerCapabilities::new().with_tools()
    }

    fn instructions(&self) -> Option<String> {
        Some(SERVER_INSTRUCTIONS.to_string())
    }
}

impl ToolHandler for LinkupMcpServer {
    async fn list_tools(&self, _ctx: &Context<'_>) -> Result<Vec<Tool>, McpError> {
        Ok(Self::tools())
    }

    async fn call_tool(
        &self,
        name: &str,
        args: Value,
        ctx: &Context<'_>,
    ) -> Result<ToolOutput, McpError> {
        let trace_id = Uuid::new_v4().to_string();

        match name {
            TOOL_SEARCH_WEB => self.search_web(args, &trace_id, ctx).await,
            _ => Err(McpError::invalid_params(
                "tools/call",
                format!("Unknown tool: {name}"),
            )),
        }
    }
}

fn normalize_args(value: Value) -> Value {
    match value {
        Value::Null => Value::Object(serde_json::Map::new()),
        other => other,
    }
}

fn parse_tool_args<T>(value: Value, tool_name: &str) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_value(normalize_args(value)).map_err(|error| {
        AppError::invalid_argument_with_details(
            format!("Invalid arguments for {tool_name}"),
            serde_json::json!({ "reason": error.to_string() }),
        )
    })
}

/// Provider results go out compact, exactly as `serde_json` encodes them.
fn json_tool_output<T: Serialize>(value: &T) -> Result<ToolOutput, McpError> {
    let json = serde_json::to_string(value).map_err(|error| {
        McpError::internal(format!("Failed to serialize tool response: {error}"))
    })?;

    Ok(ToolOutput::Success(CallToolResult {
        content: vec![Content::text(json)],
        is_error: None,
    }))
}

fn error_tool_output(error: &AppError, server_version: &str, trace_id: &str) -> ToolOutput {
    let envelope = error.to_envelope(server_version, trace_id);
    let payload = serde_json::to_string_pretty(&envelope).unwrap_or_else(|_| {
        format!(
            "{{\"api_version\":\"v1\",\"error\":{{\"code\":\"{}\",\"message\":\"{}\"}},\"meta\":{{\"trace_id\":\"{}\"}}}}",
            error.code(),
            error.message().replace('"', "\\\""),
            trace_id
        )
    });

    ToolOutput::Success(CallToolResult {
        content: vec![Content::text(payload)],
        is_error: Some(true),
    })
}

#[must_use]
pub fn search_tool_schema() -> Tool {
    Tool::new(TOOL_SEARCH_WEB)
        .description(SEARCH_WEB_DESCRIPTION)
        .input_schema(serde_json::json!({
            "type": "object",
            "additionalProperties": false,
            "required": ["query", "depth"],
            "properties": {
                "query": {
                    "type": "string",
                    "minLength": 1,
                    "description": QUERY_DESCRIPTION
                },
                "depth": {
                    "type": "string",
                    "enum": ["standard", "deep"],
                    "description": DEPTH_DESCRIPTION
                }
            }
        }))
        .annotations(ToolAnnotations::read_only())
}
