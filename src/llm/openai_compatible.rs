// ABOUTME: OpenAI-compatible chat completion client used for advice generation
// ABOUTME: Works against OpenAI itself or any compatible endpoint (Ollama, vLLM, LocalAI)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # `OpenAI`-Compatible Provider
//!
//! Implementation of [`LlmProvider`] for the `/chat/completions` endpoint.
//!
//! ## Configuration
//!
//! - `PIERRE_ADVISOR_LLM_BASE_URL`: Base URL (default: <https://api.openai.com/v1>)
//! - `PIERRE_ADVISOR_LLM_MODEL`: Model to use (default: `gpt-3.5-turbo`)
//! - `PIERRE_ADVISOR_API_KEY`: API key, falling back to `OPENAI_API_KEY`
//!
//! The API key is only ever sent in the `Authorization` header.
//!
//! ## Example
//!
//! ```rust,no_run
//! use pierre_advisor::llm::{ChatMessage, ChatRequest, LlmProvider, OpenAiCompatibleProvider};
//! use pierre_advisor::errors::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let provider = OpenAiCompatibleProvider::from_env()?;
//!     let request = ChatRequest::new(vec![ChatMessage::user("How often should I stretch?")]);
//!     let response = provider.complete(&request).await?;
//!     println!("{}", response.content);
//!     Ok(())
//! }
//! ```

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

use super::{ChatMessage, ChatRequest, ChatResponse, LlmProvider, TokenUsage};
use crate::errors::AppError;

// ============================================================================
// Configuration Constants
// ============================================================================

/// Environment variable for the completion endpoint base URL
pub const BASE_URL_ENV: &str = "PIERRE_ADVISOR_LLM_BASE_URL";

/// Environment variable for the model identifier
pub const MODEL_ENV: &str = "PIERRE_ADVISOR_LLM_MODEL";

/// Environment variable for the API key
pub const API_KEY_ENV: &str = "PIERRE_ADVISOR_API_KEY";

/// Conventional `OpenAI` API key variable, used when `PIERRE_ADVISOR_API_KEY` is unset
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Default base URL (`OpenAI`)
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Connection timeout
const CONNECT_TIMEOUT_SECS: u64 = 30;

/// Whole-request timeout
const REQUEST_TIMEOUT_SECS: u64 = 120;

// ============================================================================
// API Request/Response Types (OpenAI-compatible format)
// ============================================================================

/// OpenAI-compatible API request structure
#[derive(Debug, Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    n: Option<u32>,
}

/// Message structure for OpenAI-compatible API
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OpenAiMessage {
    role: String,
    content: String,
}

impl From<&ChatMessage> for OpenAiMessage {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: msg.role.as_str().to_owned(),
            content: msg.content.clone(),
        }
    }
}

/// OpenAI-compatible API response structure
#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
    #[serde(default)]
    usage: Option<OpenAiUsage>,
    #[serde(default)]
    model: Option<String>,
}

/// Choice in response
#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
    finish_reason: Option<String>,
}

/// Message in response
#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}

/// Usage statistics in response
#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    #[serde(rename = "prompt_tokens")]
    prompt: u32,
    #[serde(rename = "completion_tokens")]
    completion: u32,
    #[serde(rename = "total_tokens")]
    total: u32,
}

/// Error response structure
#[derive(Debug, Deserialize)]
struct OpenAiErrorResponse {
    error: OpenAiErrorDetail,
}

/// Error detail structure
#[derive(Debug, Deserialize)]
struct OpenAiErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
}

// ============================================================================
// Provider Configuration
// ============================================================================

/// Configuration for the `OpenAI`-compatible provider
#[derive(Clone)]
pub struct OpenAiCompatibleConfig {
    /// Base URL for the API (e.g., <https://api.openai.com/v1>)
    pub base_url: String,
    /// API key (optional for local servers)
    pub api_key: Option<String>,
    /// Default model to use
    pub default_model: String,
    /// Provider name for logging
    pub provider_name: String,
    /// Provider display name used in error messages
    pub display_name: String,
}

impl std::fmt::Debug for OpenAiCompatibleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiCompatibleConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("default_model", &self.default_model)
            .field("provider_name", &self.provider_name)
            .field("display_name", &self.display_name)
            .finish()
    }
}

impl OpenAiCompatibleConfig {
    /// Create configuration for the hosted `OpenAI` API
    #[must_use]
    pub fn openai(api_key: impl Into<String>, model: &str) -> Self {
        Self {
            api_key: Some(api_key.into()),
            default_model: model.to_owned(),
            ..Self::default()
        }
    }

    /// Create configuration for a local Ollama instance
    #[must_use]
    pub fn ollama(model: &str) -> Self {
        Self {
            base_url: "http://localhost:11434/v1".to_owned(),
            api_key: None,
            default_model: model.to_owned(),
            provider_name: "ollama".to_owned(),
            display_name: "Ollama (Local)".to_owned(),
        }
    }

    /// Load configuration from environment variables
    ///
    /// Empty values are treated as unset.
    #[must_use]
    pub fn from_env() -> Self {
        let non_empty = |name: &str| env::var(name).ok().filter(|v| !v.trim().is_empty());

        let base_url = non_empty(BASE_URL_ENV).unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        let default_model = non_empty(MODEL_ENV).unwrap_or_else(|| DEFAULT_MODEL.to_owned());
        let api_key = non_empty(API_KEY_ENV).or_else(|| non_empty(OPENAI_API_KEY_ENV));

        // Detect provider type from URL for better display names
        let (provider_name, display_name) = if base_url.contains("api.openai.com") {
            ("openai", "OpenAI")
        } else if base_url.contains(":11434") {
            ("ollama", "Ollama (Local)")
        } else {
            ("openai-compatible", "OpenAI-compatible endpoint")
        };

        Self {
            base_url,
            api_key,
            default_model,
            provider_name: provider_name.to_owned(),
            display_name: display_name.to_owned(),
        }
    }
}

impl Default for OpenAiCompatibleConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key: None,
            default_model: DEFAULT_MODEL.to_owned(),
            provider_name: "openai".to_owned(),
            display_name: "OpenAI".to_owned(),
        }
    }
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Generic `OpenAI`-compatible LLM provider
pub struct OpenAiCompatibleProvider {
    client: Client,
    config: OpenAiCompatibleConfig,
}

impl OpenAiCompatibleProvider {
    /// Create a new provider with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: OpenAiCompatibleConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;

        info!(
            "Initializing {} provider: base_url={}, model={}",
            config.display_name, config.base_url, config.default_model
        );

        Ok(Self { client, config })
    }

    /// Create a provider from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(OpenAiCompatibleConfig::from_env())
    }

    /// Configuration this provider was built with
    #[must_use]
    pub const fn config(&self) -> &OpenAiCompatibleConfig {
        &self.config
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint
        )
    }

    /// Convert an internal request to the wire format
    fn build_request(&self, request: &ChatRequest) -> OpenAiRequest {
        let model = request
            .model
            .as_deref()
            .unwrap_or(&self.config.default_model);

        OpenAiRequest {
            model: model.to_owned(),
            messages: request.messages.iter().map(OpenAiMessage::from).collect(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            n: request.candidate_count,
        }
    }

    /// Parse error response from API
    fn parse_error_response(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        let service = self.config.display_name.as_str();

        if let Ok(error_response) = serde_json::from_str::<OpenAiErrorResponse>(body) {
            let error_type = error_response
                .error
                .error_type
                .unwrap_or_else(|| "unknown".to_owned());

            match status.as_u16() {
                401 | 403 => AppError::external_auth(format!(
                    "API authentication failed: {}",
                    error_response.error.message
                )),
                429 => AppError::external_rate_limited(Self::extract_rate_limit_message(
                    &error_response.error.message,
                )),
                404 => AppError::external_service(
                    service,
                    format!("Model or endpoint not found: {}", error_response.error.message),
                ),
                500..=599 => AppError::external_unavailable(
                    service,
                    format!("Service unavailable: {}", error_response.error.message),
                ),
                _ => AppError::external_service(
                    service,
                    format!("{} - {}", error_type, error_response.error.message),
                ),
            }
        } else {
            match status.as_u16() {
                401 | 403 => AppError::external_auth(format!("API authentication failed ({status})")),
                429 => AppError::external_rate_limited(Self::extract_rate_limit_message(body)),
                500..=599 => AppError::external_unavailable(
                    service,
                    format!("The completion service is not responding ({status})"),
                ),
                _ => AppError::external_service(
                    service,
                    format!(
                        "API error ({}): {}",
                        status,
                        body.chars().take(200).collect::<String>()
                    ),
                ),
            }
        }
    }

    /// Convert a successful response body into a [`ChatResponse`]
    ///
    /// Only the first choice is used. A missing `content` reads as empty text.
    fn parse_response(&self, body: &str) -> Result<ChatResponse, AppError> {
        let service = self.config.display_name.as_str();

        let openai_response: OpenAiResponse = serde_json::from_str(body).map_err(|e| {
            error!("Failed to parse API response: {}", e);
            AppError::external_service(service, format!("Failed to parse response: {e}"))
                .with_source(e)
        })?;

        let choice = openai_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::external_service(service, "API returned no choices"))?;

        let content = choice.message.content.unwrap_or_default();

        debug!(
            "Received response from {}: {} chars, finish_reason: {:?}",
            self.config.provider_name,
            content.len(),
            choice.finish_reason
        );

        Ok(ChatResponse {
            content,
            model: openai_response
                .model
                .unwrap_or_else(|| self.config.default_model.clone()),
            usage: openai_response.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt,
                completion_tokens: u.completion,
                total_tokens: u.total,
            }),
            finish_reason: choice.finish_reason,
        })
    }

    /// Extract a user-friendly rate limit message from an OpenAI-style error
    fn extract_rate_limit_message(message: &str) -> String {
        let lowered = message.to_lowercase();
        if let Some(retry_pos) = lowered.find("try again in ") {
            let after_prefix = &lowered[retry_pos + 13..];
            if let Some(end_pos) = after_prefix.find(|c: char| !c.is_ascii_digit() && c != '.') {
                if let Ok(seconds) = after_prefix[..end_pos].parse::<f64>() {
                    let seconds_int = seconds.ceil() as u64;
                    return format!(
                        "Advice rate limit reached. Please try again in {seconds_int} seconds."
                    );
                }
            }
        }
        "Advice rate limit reached. Please wait a moment and try again.".to_owned()
    }

    /// Add authorization header if API key is configured
    fn add_auth_header(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(ref api_key) = self.config.api_key {
            request.bearer_auth(api_key)
        } else {
            request
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &str {
        &self.config.provider_name
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }

    #[instrument(skip(self, request), fields(provider = %self.config.provider_name, model = %request.model.as_deref().unwrap_or(&self.config.default_model)))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let openai_request = self.build_request(request);
        debug!(
            "Sending chat completion request with {} messages",
            openai_request.messages.len()
        );

        let http_request = self
            .client
            .post(self.api_url("chat/completions"))
            .json(&openai_request);

        let response = self
            .add_auth_header(http_request)
            .send()
            .await
            .map_err(|e| {
                error!(
                    "Failed to send request to {}: {}",
                    self.config.provider_name, e
                );
                if e.is_connect() || e.is_timeout() {
                    AppError::external_unavailable(
                        self.config.display_name.as_str(),
                        format!("Cannot reach {}", self.config.base_url),
                    )
                    .with_source(e)
                } else {
                    AppError::external_service(
                        self.config.display_name.as_str(),
                        format!("Request failed: {e}"),
                    )
                }
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read API response: {}", e);
            AppError::external_service(
                self.config.display_name.as_str(),
                format!("Failed to read response: {e}"),
            )
        })?;

        if !status.is_success() {
            error!(status = %status, "Completion service returned an error status");
            return Err(self.parse_error_response(status, &body));
        }

        self.parse_response(&body)
    }
}
