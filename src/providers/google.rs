use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::errors::ProviderError;
use crate::language_utils::LanguageCode;
use crate::providers::{Provider, ProviderRequest, ProviderResponse};

/// Default endpoint of the public Google Translate API
pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Google Translate client for the keyless `client=gtx` endpoint
#[derive(Debug, Clone)]
pub struct GoogleTranslate {
    /// Full URL of the translate endpoint
    endpoint: String,
    /// HTTP client for making requests
    client: Client,
}

impl GoogleTranslate {
    /// Create a client against the default endpoint
    pub fn new() -> Self {
        Self::with_config(DEFAULT_ENDPOINT, 30, default_user_agent())
    }

    /// Create a client with explicit endpoint, timeout and user agent
    pub fn with_config(endpoint: impl Into<String>, timeout_secs: u64, user_agent: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .user_agent(user_agent.into())
                .pool_idle_timeout(Duration::from_secs(90))
                .build()
                .unwrap_or_default(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build the request URL with all query parameters encoded
    pub fn build_url(&self, text: &str, source: LanguageCode, target: LanguageCode) -> Result<Url, ProviderError> {
        Url::parse_with_params(
            &self.endpoint,
            &[
                ("client", "gtx"),
                ("sl", source.as_str()),
                ("tl", target.as_str()),
                ("dt", "t"),
                ("q", text),
            ],
        )
        .map_err(|e| ProviderError::RequestFailed(format!("Invalid endpoint '{}': {}", self.endpoint, e)))
    }

    /// Parse the nested array body: `[[["translated","original",..],..],null,"src",..]`
    pub fn parse_response(body: &str) -> Result<ProviderResponse, ProviderError> {
        let json: Value = serde_json::from_str(body)
            .map_err(|e| ProviderError::ParseError(format!("Invalid JSON: {}", e)))?;

        let sentences = json
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| ProviderError::ParseError("Missing sentence array".to_string()))?;

        let text: String = sentences
            .iter()
            .filter_map(|sentence| sentence.get(0).and_then(Value::as_str))
            .collect();

        let detected_language = json.get(2).and_then(Value::as_str).map(str::to_string);

        Ok(ProviderResponse { text, detected_language })
    }
}

impl Default for GoogleTranslate {
    fn default() -> Self {
        Self::new()
    }
}

pub fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

fn map_transport_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() || e.is_connect() {
        ProviderError::ConnectionError(e.to_string())
    } else {
        ProviderError::RequestFailed(e.to_string())
    }
}

#[async_trait]
impl Provider for GoogleTranslate {
    async fn translate(&self, request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        let url = self.build_url(&request.text, request.source_language, request.target_language)?;

        debug!(
            "Google Translate request {} -> {} ({} chars)",
            request.source_language,
            request.target_language,
            request.text.chars().count()
        );

        let response = self.client.get(url).send().await.map_err(map_transport_error)?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimitExceeded(format!(
                "Google Translate returned {}",
                status
            )));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!("Google Translate error: {}", status);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body = response.text().await.map_err(map_transport_error)?;
        Self::parse_response(&body)
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        self.translate(ProviderRequest::new("hello", LanguageCode::En, LanguageCode::Ar))
            .await
            .map(|_| ())
    }

    fn name(&self) -> &str {
        "google"
    }
}
