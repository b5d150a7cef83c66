// ABOUTME: Environment-driven configuration for the advisor binary and library
// ABOUTME: Bundles completion client settings and logging settings passed explicitly to constructors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Configuration
//!
//! All configuration comes from the environment and is read once, at startup.
//! The resulting values are handed to constructors; nothing reads credentials
//! from global state afterwards.

use tracing::warn;

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::llm::{OpenAiCompatibleConfig, API_KEY_ENV, OPENAI_API_KEY_ENV};
use crate::logging::LoggingConfig;

/// Complete advisor configuration
#[derive(Debug, Clone, Default)]
pub struct AdvisorConfig {
    /// Completion service settings
    pub llm: OpenAiCompatibleConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl AdvisorConfig {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            llm: OpenAiCompatibleConfig::from_env(),
            logging: LoggingConfig::from_env(),
        }
    }

    /// Whether a completion credential is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.llm.api_key.is_some()
    }

    /// Require a credential before talking to a hosted endpoint
    ///
    /// Local OpenAI-compatible servers accept unauthenticated requests, so a
    /// missing key is only an error for the hosted `OpenAI` API.
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` when the hosted API is selected without a key.
    pub fn require_api_key(&self) -> AppResult<()> {
        if self.has_api_key() {
            return Ok(());
        }
        if self.llm.provider_name == "openai" {
            return Err(AppError::new(
                ErrorCode::ConfigMissing,
                format!("Set {API_KEY_ENV} or {OPENAI_API_KEY_ENV} to request advice"),
            ));
        }
        warn!(
            base_url = %self.llm.base_url,
            "No API key configured; sending unauthenticated requests"
        );
        Ok(())
    }
}
