// ABOUTME: Re-exports command modules for pierre-advisor
// ABOUTME: Provides the slot listing and form submission commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod slots;
pub mod submit;
