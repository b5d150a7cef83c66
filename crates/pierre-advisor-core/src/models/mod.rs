// ABOUTME: Preference data models collected by the advisor form
// ABOUTME: Re-exports option catalogs, the raw form, and the resolved preferences record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Preference Models
//!
//! The form collects six fields. [`PreferencesForm`] holds them exactly as the
//! UI supplied them; [`PreferencesForm::build`] resolves the free-text overrides
//! and produces the immutable [`UserPreferences`] record that the rest of the
//! system consumes.

mod catalog;
mod preferences;

pub use catalog::{Exercise, FitnessGoal, Location};
pub use preferences::{Frequency, Goal, PreferencesForm, UserPreferences};
