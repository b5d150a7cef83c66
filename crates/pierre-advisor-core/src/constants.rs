// ABOUTME: Constants for the advisor form, organized by domain
// ABOUTME: Time window bounds, completion generation parameters, and input limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into small domain modules rather than a single flat list.

/// Availability picker window
pub mod time_window {
    /// First selectable hour (06:00)
    pub const START_HOUR: u32 = 6;

    /// Last selectable hour (22:00, inclusive)
    pub const END_HOUR: u32 = 22;

    /// Distance between two consecutive slots
    pub const STEP_MINUTES: i64 = 30;

    /// Label format: 12-hour clock, zero-padded, AM/PM suffix
    pub const LABEL_FORMAT: &str = "%I:%M %p";

    /// Number of labels produced for the window
    pub const SLOT_COUNT: usize = 33;
}

/// Fixed parameters sent with every advice request
pub mod generation {
    /// Upper bound on generated tokens
    pub const MAX_TOKENS: u32 = 500;

    /// Number of candidates requested
    pub const CANDIDATE_COUNT: u32 = 1;

    /// Sampling temperature
    pub const TEMPERATURE: f32 = 0.7;
}

/// Limits applied to free-text form fields
pub mod input_limits {
    /// Maximum characters kept from a custom exercise or custom goal
    pub const MAX_CUSTOM_FIELD_CHARS: usize = 200;

    /// Lowest weekly frequency accepted
    pub const MIN_FREQUENCY: u8 = 1;

    /// Highest weekly frequency accepted
    pub const MAX_FREQUENCY: u8 = 7;

    /// Frequency preselected by the form
    pub const DEFAULT_FREQUENCY: u8 = 3;
}

/// Prompt rendering tokens
pub mod prompt_tokens {
    /// Rendering of `equipment_available == true`
    pub const YES: &str = "yes";

    /// Rendering of `equipment_available == false`
    pub const NO: &str = "no";

    /// Separator used for list-valued fields
    pub const LIST_SEPARATOR: &str = ", ";

    /// Rendering of an empty list-valued field
    pub const NONE_SPECIFIED: &str = "none specified";
}
