// ABOUTME: Core types and constants for the Pierre advisor form application
// ABOUTME: Foundation crate with error handling, preference models, and time-slot generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Advisor Core
//!
//! Foundation crate shared by the advisor library and its binaries. Everything in
//! here is a pure function of its inputs: no network, no global state.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Time window, generation parameters and input limits
//! - **models**: Exercise/location/goal catalogs and the `UserPreferences` record
//! - **`time_slots`**: Half-hour time labels offered by the availability picker

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Preference catalogs and the resolved preferences record
pub mod models;

/// Half-hour time-slot generation for a reference day
pub mod time_slots;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{
    Exercise, FitnessGoal, Frequency, Goal, Location, PreferencesForm, UserPreferences,
};
pub use time_slots::{generate_time_slots, generate_time_slots_for, time_slot_labels, TimeSlot};
