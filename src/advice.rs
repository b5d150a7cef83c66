// ABOUTME: Advice Request Builder turning a preferences record into generated health advice
// ABOUTME: Serializes preferences into a prompt, calls the LLM once, and reports failures as values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Advice Requests
//!
//! [`AdviceRequestBuilder`] is the single boundary between the form and the
//! completion service. It renders a [`UserPreferences`] record into a fixed
//! natural-language prompt, issues exactly one chat completion with fixed
//! generation parameters, and returns either the trimmed advice text or an
//! [`AdviceFailure`] carrying a message that can be shown to the user as-is.
//!
//! Failures are never retried and never propagate as errors past this module.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use pierre_advisor::advice::AdviceRequestBuilder;
//! use pierre_advisor::llm::OpenAiCompatibleProvider;
//! use pierre_advisor::models::PreferencesForm;
//!
//! # fn main() -> Result<(), pierre_advisor::errors::AppError> {
//! let provider = OpenAiCompatibleProvider::from_env()?;
//! let advisor = AdviceRequestBuilder::new(Arc::new(provider));
//! let preferences = PreferencesForm::default().build()?;
//!
//! match advisor.request_advice_blocking(&preferences) {
//!     Ok(advice) => println!("{advice}"),
//!     Err(failure) => eprintln!("{failure}"),
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tokio::runtime::Handle;
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::config::AdvisorConfig;
use crate::constants::generation::{CANDIDATE_COUNT, MAX_TOKENS, TEMPERATURE};
use crate::constants::prompt_tokens::{LIST_SEPARATOR, NO, NONE_SPECIFIED, YES};
use crate::errors::{AppError, ErrorCode};
use crate::llm::{
    get_health_advisor_system_prompt, ChatMessage, ChatRequest, LlmProvider,
    OpenAiCompatibleProvider,
};
use crate::models::UserPreferences;

/// Why an advice request produced no advice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{message}")]
pub struct AdviceFailure {
    /// Classification of the underlying failure
    pub code: ErrorCode,
    /// Display-ready explanation
    pub message: String,
    /// Correlation id logged with the failed request
    pub request_id: String,
}

impl From<AppError> for AdviceFailure {
    fn from(error: AppError) -> Self {
        let request_id = error
            .request_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        Self {
            code: error.code,
            message: format!("Could not generate advice. {error}"),
            request_id,
        }
    }
}

/// Outcome of a single advice request
pub type AdviceResult = Result<String, AdviceFailure>;

/// Shape handed to the UI: exactly one of the two fields is present
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdviceOutcome {
    /// Generated advice on success
    pub advice: Option<String>,
    /// Message to display on failure
    pub error: Option<String>,
}

impl From<AdviceResult> for AdviceOutcome {
    fn from(result: AdviceResult) -> Self {
        match result {
            Ok(advice) => Self {
                advice: Some(advice),
                error: None,
            },
            Err(failure) => Self {
                advice: None,
                error: Some(failure.message),
            },
        }
    }
}

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        NONE_SPECIFIED.to_owned()
    } else {
        values.join(LIST_SEPARATOR)
    }
}

/// Render a preferences record into the advice prompt
#[must_use]
pub fn build_prompt(preferences: &UserPreferences) -> String {
    let equipment = if preferences.equipment_available() {
        YES
    } else {
        NO
    };

    format!(
        "Please give personalized exercise advice for a user with the following preferences.\n\
         \n\
         - Available times: {times}\n\
         - Preferred exercises: {exercises}\n\
         - Exercise location: {location}\n\
         - Equipment available: {equipment}\n\
         - Weekly exercise frequency: {frequency} times per week\n\
         - Goal: {goal}\n\
         \n\
         Suggest a weekly routine that fits these times, how to make the most of the location \
         and equipment, and practical tips for reaching the goal.",
        times = join_or_none(preferences.available_times()),
        exercises = join_or_none(preferences.exercises()),
        location = preferences.location(),
        frequency = preferences.frequency(),
        goal = preferences.goal(),
    )
}

/// Builds advice prompts and sends them to the completion service
#[derive(Clone)]
pub struct AdviceRequestBuilder {
    provider: Arc<dyn LlmProvider>,
    model: Option<String>,
}

impl AdviceRequestBuilder {
    /// Create a builder around an already-configured completion client
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider,
            model: None,
        }
    }

    /// Create a builder for the configured `OpenAI`-compatible endpoint
    ///
    /// # Errors
    ///
    /// Returns a display-ready failure when the hosted API is selected without
    /// a credential, or when the HTTP client cannot be created.
    pub fn from_config(config: &AdvisorConfig) -> Result<Self, AdviceFailure> {
        config
            .require_api_key()
            .and_then(|()| OpenAiCompatibleProvider::new(config.llm.clone()))
            .map(|provider| Self::new(Arc::new(provider)))
            .map_err(|e| {
                warn!(code = ?e.code, "Advice unavailable: {e}");
                AdviceFailure::from(e)
            })
    }

    /// Override the provider's default model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Model identifier that will be sent with each request
    #[must_use]
    pub fn model(&self) -> &str {
        self.model
            .as_deref()
            .unwrap_or_else(|| self.provider.default_model())
    }

    /// Assemble the chat request: fixed persona, rendered prompt, fixed parameters
    #[must_use]
    pub fn build_chat_request(&self, preferences: &UserPreferences) -> ChatRequest {
        ChatRequest::new(vec![
            ChatMessage::system(get_health_advisor_system_prompt()),
            ChatMessage::user(build_prompt(preferences)),
        ])
        .with_model(self.model())
        .with_max_tokens(MAX_TOKENS)
        .with_candidate_count(CANDIDATE_COUNT)
        .with_temperature(TEMPERATURE)
    }

    /// Request advice for a preferences record
    ///
    /// Issues exactly one completion call. Any client error is converted into
    /// an [`AdviceFailure`]; nothing is retried.
    pub async fn request_advice(&self, preferences: &UserPreferences) -> AdviceResult {
        let request_id = Uuid::new_v4().to_string();
        let span = info_span!(
            "advice_request",
            request_id = %request_id,
            provider = %self.provider.name(),
            model = %self.model(),
        );

        self.send(preferences, &request_id).instrument(span).await
    }

    /// Blocking wrapper around [`Self::request_advice`] for synchronous callers
    ///
    /// Drives the request on a private current-thread runtime. Inside an async
    /// runtime this returns an `InternalError` failure instead of blocking.
    pub fn request_advice_blocking(&self, preferences: &UserPreferences) -> AdviceResult {
        if Handle::try_current().is_ok() {
            error!("Blocking advice request issued from inside an async runtime");
            return Err(AdviceFailure::from(AppError::internal(
                "Blocking advice requests cannot run inside an async runtime",
            )));
        }

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| {
                error!("Failed to start advice runtime: {e}");
                AdviceFailure::from(
                    AppError::internal(format!("Failed to start advice runtime: {e}"))
                        .with_source(e),
                )
            })?;

        runtime.block_on(self.request_advice(preferences))
    }

    async fn send(&self, preferences: &UserPreferences, request_id: &str) -> AdviceResult {
        let request = self.build_chat_request(preferences);
        info!("Requesting advice");

        let response = self.provider.complete(&request).await.map_err(|e| {
            error!(code = ?e.code, "Advice request failed: {e}");
            AdviceFailure::from(e.with_request_id(request_id))
        })?;

        let advice = response.content.trim();
        if advice.is_empty() {
            error!("Completion service returned empty advice");
            return Err(AdviceFailure::from(
                AppError::external_service(self.provider.name(), "The response contained no text")
                    .with_request_id(request_id),
            ));
        }

        info!(
            chars = advice.len(),
            total_tokens = response.usage.as_ref().map(|u| u.total_tokens),
            "Advice generated"
        );
        Ok(advice.to_owned())
    }
}
