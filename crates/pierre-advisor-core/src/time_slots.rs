// ABOUTME: Half-hour time-slot generation for the availability picker
// ABOUTME: Produces 12-hour labels from 06:00 AM through 10:00 PM for a reference day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Time Slots
//!
//! The availability picker offers every half-hour boundary between 06:00 and
//! 22:00 inclusive. Slots are computed on naive wall-clock time for the calendar
//! day, so the sequence depends only on the date and never on the time of call
//! or on daylight-saving transitions.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, Local, NaiveDate, NaiveTime};

use crate::constants::time_window::{
    END_HOUR, LABEL_FORMAT, SLOT_COUNT, START_HOUR, STEP_MINUTES,
};
use crate::errors::{AppError, AppResult};

/// A selectable half-hour boundary, rendered as e.g. `"06:30 AM"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot(NaiveTime);

impl TimeSlot {
    /// Wall-clock time of the slot
    #[must_use]
    pub const fn time(&self) -> NaiveTime {
        self.0
    }

    /// Human-readable label in 12-hour format with AM/PM suffix
    #[must_use]
    pub fn label(&self) -> String {
        self.0.format(LABEL_FORMAT).to_string()
    }

    /// Parse a label previously produced by [`TimeSlot::label`]
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if the text is not a 12-hour `HH:MM AM|PM` label.
    pub fn parse(label: &str) -> AppResult<Self> {
        NaiveTime::parse_from_str(label.trim(), LABEL_FORMAT)
            .map(Self)
            .map_err(|e| {
                AppError::invalid_format(format!("'{label}' is not a time label like 06:00 AM"))
                    .with_source(e)
            })
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(LABEL_FORMAT))
    }
}

impl FromStr for TimeSlot {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Generate the slots for an explicit calendar day
///
/// The cursor starts at 06:00:00.000, the boundary check is inclusive, and the
/// cursor advances by exactly 30 minutes, yielding 33 slots.
#[must_use]
pub fn generate_time_slots_for(day: NaiveDate) -> Vec<TimeSlot> {
    let (Some(mut cursor), Some(end)) = (
        day.and_hms_opt(START_HOUR, 0, 0),
        day.and_hms_opt(END_HOUR, 0, 0),
    ) else {
        return Vec::new();
    };

    let step = Duration::minutes(STEP_MINUTES);
    let mut slots = Vec::with_capacity(SLOT_COUNT);
    while cursor <= end {
        slots.push(TimeSlot(cursor.time()));
        cursor += step;
    }
    slots
}

/// Generate the slots for the current local calendar day
///
/// Regenerated on every call; nothing is cached.
#[must_use]
pub fn generate_time_slots() -> Vec<TimeSlot> {
    generate_time_slots_for(Local::now().date_naive())
}

/// Labels for the current local calendar day, in picker order
#[must_use]
pub fn time_slot_labels() -> Vec<String> {
    generate_time_slots().iter().map(TimeSlot::label).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_label_is_zero_padded_twelve_hour() {
        let slot = TimeSlot(NaiveTime::from_hms_opt(6, 30, 0).unwrap());
        assert_eq!(slot.label(), "06:30 AM");

        let slot = TimeSlot(NaiveTime::from_hms_opt(12, 0, 0).unwrap());
        assert_eq!(slot.label(), "12:00 PM");
    }

    #[test]
    fn test_parse_round_trips_label() {
        let slot = TimeSlot::parse("10:00 PM").unwrap();
        assert_eq!(slot.time(), NaiveTime::from_hms_opt(22, 0, 0).unwrap());
        assert_eq!(slot.to_string(), "10:00 PM");
    }

    #[test]
    fn test_parse_rejects_24_hour_text() {
        assert!(TimeSlot::parse("22:00").is_err());
        assert!("noon".parse::<TimeSlot>().is_err());
    }
}
