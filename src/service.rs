use crate::client::LinkupClient;
use crate::config::RuntimeConfig;
use crate::error::AppError;
use crate::types::SearchRequest;
use serde_json::Value;
use std::time::Instant;

/// Read-only state shared by every `search-web` invocation.
#[derive(Debug)]
pub struct SearchService {
    client: LinkupClient,
    config: RuntimeConfig,
    server_version: String,
}

impl SearchService {
    pub fn new(config: RuntimeConfig) -> Result<Self, AppError> {
        let client = LinkupClient::new(&config)?;

        Ok(Self {
            client,
            config,
            server_version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }

    #[must_use]
    pub fn server_version(&self) -> &str {
        &self.server_version
    }

    #[must_use]
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.client.endpoint()
    }

    pub async fn execute_search<F>(
        &self,
        request: SearchRequest,
        trace_id: &str,
        is_cancelled: F,
    ) -> Result<Value, AppError>
    where
        F: Fn() -> bool,
    {
        let started = Instant::now();
        tracing::info!(trace_id, depth = request.depth.as_str(), "search-web started");

        let outcome = self.client.search(&request, is_cancelled).await;
        let duration_ms = started.elapsed().as_millis() as u64;

        match &outcome {
            Ok(_) => tracing::info!(trace_id, duration_ms, "search-web completed"),
            Err(error) => tracing::warn!(
                trace_id,
                duration_ms,
                code = error.code(),
                %error,
                "search-web failed"
            ),
        }

        outcome
    }
}
