// ABOUTME: Form submission commands for pierre-advisor
// ABOUTME: Validates and saves preferences, previews the prompt, and requests advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_advisor::{
    advice::{build_prompt, AdviceOutcome, AdviceRequestBuilder},
    config::AdvisorConfig,
    errors::AppResult,
    models::PreferencesForm,
    persistence::{LoggingPreferencesStore, PreferencesStore},
    time_slots::generate_time_slots,
};
use serde_json::json;
use tracing::info;

type Result<T> = AppResult<T>;

/// Print the prompt the advice request would carry
pub fn print_prompt(form: &PreferencesForm) -> Result<()> {
    let preferences = form.build()?;
    println!("{}", build_prompt(&preferences));
    Ok(())
}

/// Validate, save, and optionally request advice
pub fn submit(
    config: &AdvisorConfig,
    form: &PreferencesForm,
    request_advice: bool,
    as_json: bool,
) -> Result<()> {
    form.validate_times(&generate_time_slots())?;
    let preferences = form.build()?;

    let receipt = LoggingPreferencesStore.save(&preferences)?;
    info!(durable = receipt.durable, "Preferences submitted");
    if !as_json {
        println!("{}", receipt.message);
    }

    // Advice problems are reported in the outcome; the save has already succeeded
    let outcome = request_advice.then(|| {
        let result = AdviceRequestBuilder::from_config(config).and_then(|advisor| {
            if !as_json {
                eprintln!("Generating advice...");
            }
            advisor.request_advice_blocking(&preferences)
        });
        AdviceOutcome::from(result)
    });

    if as_json {
        let report = json!({
            "saved": receipt,
            "preferences": preferences,
            "advice": outcome,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if let Some(outcome) = outcome {
        if let Some(advice) = outcome.advice {
            println!();
            println!("{advice}");
        }
        if let Some(error) = outcome.error {
            eprintln!("{error}");
        }
    }

    Ok(())
}
