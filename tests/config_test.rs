// ABOUTME: Integration tests for advisor configuration loading
// ABOUTME: Validates credential requirements for hosted and local completion endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_advisor::config::AdvisorConfig;
use pierre_advisor::errors::ErrorCode;
use pierre_advisor::llm::{OpenAiCompatibleConfig, API_KEY_ENV, BASE_URL_ENV, OPENAI_API_KEY_ENV};
use serial_test::serial;
use std::env;

#[test]
fn test_hosted_api_without_key_is_rejected() {
    let config = AdvisorConfig::default();

    assert!(!config.has_api_key());
    let err = config.require_api_key().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigMissing);
    assert!(err.message.contains(API_KEY_ENV));
}

#[test]
fn test_hosted_api_with_key_is_accepted() {
    let config = AdvisorConfig {
        llm: OpenAiCompatibleConfig::openai("sk-test", "gpt-3.5-turbo"),
        ..AdvisorConfig::default()
    };

    assert!(config.has_api_key());
    assert!(config.require_api_key().is_ok());
}

#[test]
fn test_local_endpoint_without_key_is_accepted() {
    let config = AdvisorConfig {
        llm: OpenAiCompatibleConfig::ollama("llama3.1"),
        ..AdvisorConfig::default()
    };

    assert!(config.require_api_key().is_ok());
}

#[test]
#[serial]
fn test_from_env_reads_llm_settings() {
    let saved: Vec<(&str, Option<String>)> = [API_KEY_ENV, OPENAI_API_KEY_ENV, BASE_URL_ENV]
        .into_iter()
        .map(|name| (name, env::var(name).ok()))
        .collect();
    env::remove_var(OPENAI_API_KEY_ENV);
    env::set_var(API_KEY_ENV, "sk-from-env");
    env::set_var(BASE_URL_ENV, "http://localhost:11434/v1");

    let config = AdvisorConfig::from_env();

    for (name, value) in saved {
        match value {
            Some(v) => env::set_var(name, v),
            None => env::remove_var(name),
        }
    }

    assert!(config.has_api_key());
    assert_eq!(config.llm.provider_name, "ollama");
}
