use crate::config::RuntimeConfig;
use crate::constants::{OUTPUT_TYPE_SEARCH_RESULTS, SEARCH_PATH};
use crate::error::AppError;
use crate::parsing::parse_linkup_error_message;
use crate::types::{LinkupSearchPayload, SearchRequest};
use futures_util::StreamExt;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;
use std::time::Duration;

#[derive(Debug)]
pub struct LinkupClient {
    http: reqwest::Client,
    endpoint: String,
    request_timeout: Duration,
    max_response_bytes: usize,
}

impl LinkupClient {
    pub fn new(config: &RuntimeConfig) -> Result<Self, AppError> {
        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|error| AppError::Internal(format!("Invalid API key header: {error}")))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, authorization);

        let http = reqwest::Client::builder()
            .user_agent(format!("linkup-mcp/{}", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(|error| {
                AppError::Internal(format!("Failed to create HTTP client: {error}"))
            })?;

        Ok(Self {
            http,
            endpoint: search_endpoint(&config.base_url),
            request_timeout: Duration::from_millis(config.request_timeout_ms),
            max_response_bytes: config.max_response_bytes,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Runs one search and returns the provider's `results` value untouched.
    ///
    /// Exactly one HTTP request is made; failures are returned, never retried.
    pub async fn search<F>(
        &self,
        request: &SearchRequest,
        is_cancelled: F,
    ) -> Result<Value, AppError>
    where
        F: Fn() -> bool,
    {
        if is_cancelled() {
            return Err(AppError::Cancelled);
        }

        let payload = LinkupSearchPayload {
            q: &request.query,
            depth: request.depth,
            output_type: OUTPUT_TYPE_SEARCH_RESULTS,
            include_images: false,
        };

        let exchange = async {
            let response = self
                .http
                .post(&self.endpoint)
                .json(&payload)
                .send()
                .await
                .map_err(|error| AppError::Upstream(format!("Failed to call Linkup API: {error}")))?;

            let status = response.status().as_u16();
            let body = self.read_response_body(response, &is_cancelled).await?;
            Ok::<_, AppError>((status, body))
        };

        let (status, raw_body) = tokio::time::timeout(self.request_timeout, exchange)
            .await
            .map_err(|_| {
                AppError::Upstream(format!(
                    "Timed out after {} ms waiting for Linkup API response",
                    self.request_timeout.as_millis()
                ))
            })??;

        tracing::debug!(status, bytes = raw_body.len(), "linkup response received");

        if !(200..300).contains(&status) {
            let fallback = format!("Request failed ({status}).");
            let error_body = String::from_utf8_lossy(&raw_body);
            let detail = parse_linkup_error_message(&error_body, &fallback);
            return Err(AppError::Upstream(format!(
                "Linkup API returned HTTP {status}: {detail}"
            )));
        }

        let body = String::from_utf8(raw_body)
            .map_err(|error| AppError::Parse(format!("Response body was not valid UTF-8: {error}")))?;
        let mut parsed_payload = serde_json::from_str::<Value>(&body)
            .map_err(|error| AppError::Parse(format!("Invalid JSON response: {error}")))?;

        parsed_payload
            .get_mut("results")
            .map(Value::take)
            .ok_or_else(|| AppError::Parse("Linkup response is missing 'results'".to_string()))
    }

    /// Collects the body up to `max_response_bytes`.
    ///
    /// Non-2xx bodies past the cap are truncated rather than rejected.
    async fn read_response_body<F>(
        &self,
        response: reqwest::Response,
        is_cancelled: &F,
    ) -> Result<Vec<u8>, AppError>
    where
        F: Fn() -> bool,
    {
        let success = response.status().is_success();
        let mut stream = response.bytes_stream();
        let mut bytes = Vec::<u8>::new();

        while let Some(chunk_result) = stream.next().await {
            if is_cancelled() {
                return Err(AppError::Cancelled);
            }

            let chunk = chunk_result.map_err(|error| {
                AppError::Upstream(format!("Failed while reading response body: {error}"))
            })?;

            if bytes.len() + chunk.len() > self.max_response_bytes {
                if !success {
                    let remaining = self.max_response_bytes - bytes.len();
                    bytes.extend_from_slice(&chunk[..remaining]);
                    break;
                }
                return Err(AppError::Upstream(format!(
                    "Response body exceeded {} byte limit",
                    self.max_response_bytes
                )));
            }

            bytes.extend_from_slice(&chunk);
        }

        Ok(bytes)
    }
}

#[must_use]
pub fn search_endpoint(base_url: &str) -> String {
    format!("{}/{SEARCH_PATH}", base_url.trim_end_matches('/'))
}
