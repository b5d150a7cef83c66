// ABOUTME: Integration tests for the OpenAI-compatible completion client
// ABOUTME: Validates configuration constructors, from_env parsing, and unreachable-endpoint errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_advisor::errors::ErrorCode;
use pierre_advisor::llm::{
    ChatMessage, ChatRequest, LlmProvider, OpenAiCompatibleConfig, OpenAiCompatibleProvider,
    API_KEY_ENV, BASE_URL_ENV, MODEL_ENV, OPENAI_API_KEY_ENV,
};
use serial_test::serial;
use std::env;

// =============================================================================
// OpenAiCompatibleConfig Tests
// =============================================================================

#[test]
fn test_openai_compatible_config_default() {
    let config = OpenAiCompatibleConfig::default();

    assert_eq!(config.base_url, "https://api.openai.com/v1");
    assert!(config.api_key.is_none());
    assert_eq!(config.default_model, "gpt-3.5-turbo");
    assert_eq!(config.provider_name, "openai");
    assert_eq!(config.display_name, "OpenAI");
}

#[test]
fn test_openai_compatible_config_openai() {
    let config = OpenAiCompatibleConfig::openai("sk-test", "gpt-4o-mini");

    assert_eq!(config.base_url, "https://api.openai.com/v1");
    assert_eq!(config.api_key.as_deref(), Some("sk-test"));
    assert_eq!(config.default_model, "gpt-4o-mini");
    assert_eq!(config.provider_name, "openai");
}

#[test]
fn test_openai_compatible_config_ollama() {
    let config = OpenAiCompatibleConfig::ollama("qwen2.5:7b");

    assert_eq!(config.base_url, "http://localhost:11434/v1");
    assert!(config.api_key.is_none());
    assert_eq!(config.default_model, "qwen2.5:7b");
    assert_eq!(config.provider_name, "ollama");
    assert_eq!(config.display_name, "Ollama (Local)");
}

#[test]
fn test_openai_compatible_config_debug_hides_key() {
    let config = OpenAiCompatibleConfig::openai("sk-very-secret", "gpt-3.5-turbo");

    let rendered = format!("{config:?}");
    assert!(!rendered.contains("sk-very-secret"));
}

// =============================================================================
// OpenAiCompatibleProvider Creation Tests
// =============================================================================

#[test]
fn test_openai_compatible_provider_new() {
    let provider =
        OpenAiCompatibleProvider::new(OpenAiCompatibleConfig::ollama("qwen2.5:7b")).unwrap();

    assert_eq!(provider.name(), "ollama");
    assert_eq!(provider.default_model(), "qwen2.5:7b");
    assert_eq!(provider.config().base_url, "http://localhost:11434/v1");
}

#[tokio::test]
async fn test_unreachable_endpoint_is_unavailable() {
    let config = OpenAiCompatibleConfig {
        base_url: "http://127.0.0.1:1/v1".to_owned(),
        ..OpenAiCompatibleConfig::ollama("test-model")
    };
    let provider = OpenAiCompatibleProvider::new(config).unwrap();
    let request = ChatRequest::new(vec![ChatMessage::user("hello")]).with_max_tokens(5);

    let err = provider.complete(&request).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
    assert!(err.message.contains("127.0.0.1:1"));
}

// =============================================================================
// Environment Variable Parsing Tests
// =============================================================================

mod env_tests {
    use super::*;

    const VARS: [&str; 4] = [API_KEY_ENV, OPENAI_API_KEY_ENV, BASE_URL_ENV, MODEL_ENV];

    fn with_clean_env<F, T>(f: F) -> T
    where
        F: FnOnce() -> T,
    {
        let saved: Vec<(&str, Option<String>)> =
            VARS.iter().map(|name| (*name, env::var(name).ok())).collect();
        for name in VARS {
            env::remove_var(name);
        }

        let result = f();

        for (name, value) in saved {
            match value {
                Some(v) => env::set_var(name, v),
                None => env::remove_var(name),
            }
        }

        result
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        with_clean_env(|| {
            let config = OpenAiCompatibleConfig::from_env();

            assert_eq!(config.base_url, "https://api.openai.com/v1");
            assert_eq!(config.default_model, "gpt-3.5-turbo");
            assert_eq!(config.provider_name, "openai");
            assert!(config.api_key.is_none());
        });
    }

    #[test]
    #[serial]
    fn test_from_env_custom_url_and_model() {
        with_clean_env(|| {
            env::set_var(BASE_URL_ENV, "http://custom-host:9999/v1");
            env::set_var(MODEL_ENV, "custom-model");

            let config = OpenAiCompatibleConfig::from_env();

            assert_eq!(config.base_url, "http://custom-host:9999/v1");
            assert_eq!(config.default_model, "custom-model");
            assert_eq!(config.provider_name, "openai-compatible");
        });
    }

    #[test]
    #[serial]
    fn test_from_env_detects_ollama_port() {
        with_clean_env(|| {
            env::set_var(BASE_URL_ENV, "http://localhost:11434/v1");

            assert_eq!(OpenAiCompatibleConfig::from_env().provider_name, "ollama");
        });
    }

    #[test]
    #[serial]
    fn test_from_env_prefers_advisor_key() {
        with_clean_env(|| {
            env::set_var(OPENAI_API_KEY_ENV, "sk-fallback");
            assert_eq!(
                OpenAiCompatibleConfig::from_env().api_key.as_deref(),
                Some("sk-fallback")
            );

            env::set_var(API_KEY_ENV, "sk-advisor");
            assert_eq!(
                OpenAiCompatibleConfig::from_env().api_key.as_deref(),
                Some("sk-advisor")
            );
        });
    }

    #[test]
    #[serial]
    fn test_from_env_empty_values_ignored() {
        with_clean_env(|| {
            env::set_var(API_KEY_ENV, "");
            env::set_var(MODEL_ENV, "  ");

            let config = OpenAiCompatibleConfig::from_env();

            assert!(config.api_key.is_none());
            assert_eq!(config.default_model, "gpt-3.5-turbo");
        });
    }

    #[test]
    #[serial]
    fn test_provider_from_env() {
        with_clean_env(|| {
            assert!(OpenAiCompatibleProvider::from_env().is_ok());
        });
    }
}
