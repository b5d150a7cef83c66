// ABOUTME: Main library entry point for the Pierre advisor form application
// ABOUTME: Collects fitness preferences and turns them into LLM-generated health advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Advisor
//!
//! Library behind a small preferences form: it offers half-hour availability
//! slots, resolves the submitted fields into a [`models::UserPreferences`]
//! record, records the submission through a storage stub, and optionally asks
//! an `OpenAI`-compatible completion service for personalized advice.
//!
//! ## Architecture
//!
//! - **`time_slots`** / **models** (from `pierre-advisor-core`): pure inputs
//! - **advice**: prompt rendering and the single completion call
//! - **llm**: provider trait and the `OpenAI`-compatible HTTP client
//! - **persistence**: logging-only save step
//! - **config** / **logging**: environment-driven setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use pierre_advisor::advice::AdviceRequestBuilder;
//! use pierre_advisor::config::AdvisorConfig;
//! use pierre_advisor::llm::OpenAiCompatibleProvider;
//! use pierre_advisor::models::{Exercise, PreferencesForm};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), pierre_advisor::errors::AppError> {
//!     let config = AdvisorConfig::from_env();
//!     let provider = OpenAiCompatibleProvider::new(config.llm)?;
//!     let advisor = AdviceRequestBuilder::new(Arc::new(provider));
//!
//!     let form = PreferencesForm {
//!         selected_exercises: vec![Exercise::Running],
//!         ..PreferencesForm::default()
//!     };
//!     let outcome = advisor.request_advice(&form.build()?).await;
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```

pub use pierre_advisor_core::{constants, errors, models, time_slots};

/// Advice Request Builder: prompt rendering and completion call
pub mod advice;

/// Environment-driven configuration
pub mod config;

/// LLM provider abstraction and `OpenAI`-compatible client
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Save step for submitted preferences
pub mod persistence;
