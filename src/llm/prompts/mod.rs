// ABOUTME: System prompts for advice requests loaded at compile time
// ABOUTME: Provides the professional health advisor persona sent as the system message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # System Prompts
//!
//! Prompts are loaded at compile time from markdown files for easy maintenance.

/// Health advisor persona sent as the first message of every advice request
pub const HEALTH_ADVISOR_SYSTEM_PROMPT: &str = include_str!("health_advisor_system.md");

/// Get the system prompt framing the assistant as a professional health advisor
#[must_use]
pub fn get_health_advisor_system_prompt() -> &'static str {
    HEALTH_ADVISOR_SYSTEM_PROMPT.trim_end()
}
