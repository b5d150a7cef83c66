// ABOUTME: User preferences record and the raw form that resolves into it
// ABOUTME: Applies custom-goal override, custom-exercise append, and frequency range rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::catalog::{Exercise, FitnessGoal, Location};
use crate::constants::input_limits::{
    DEFAULT_FREQUENCY, MAX_CUSTOM_FIELD_CHARS, MAX_FREQUENCY, MIN_FREQUENCY,
};
use crate::errors::{AppError, AppResult};
use crate::time_slots::TimeSlot;

/// Weekly exercise frequency, always within 1..=7
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Frequency(u8);

impl Frequency {
    /// Create a frequency, rejecting values outside 1..=7
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when `times_per_week` is 0 or above 7.
    pub fn new(times_per_week: u8) -> AppResult<Self> {
        if (MIN_FREQUENCY..=MAX_FREQUENCY).contains(&times_per_week) {
            Ok(Self(times_per_week))
        } else {
            Err(AppError::value_out_of_range(format!(
                "frequency must be between {MIN_FREQUENCY} and {MAX_FREQUENCY} times per week, got {times_per_week}"
            )))
        }
    }

    /// Sessions per week
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }
}

impl Default for Frequency {
    fn default() -> Self {
        Self(DEFAULT_FREQUENCY)
    }
}

impl TryFrom<u8> for Frequency {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Frequency> for u8 {
    fn from(value: Frequency) -> Self {
        value.0
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resolved goal: a catalog entry or the user's own words
///
/// Serialized as `{"kind": "catalog" | "custom", "value": ...}` so a custom
/// goal reading `fitness` stays distinct from the catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Goal {
    /// One of the catalog goals
    Catalog(FitnessGoal),
    /// Free-text goal that overrode the catalog selection
    Custom(String),
}

impl Goal {
    /// Resolve the catalog selection against an optional free-text override
    ///
    /// A non-blank override always wins, whatever the catalog selection was.
    #[must_use]
    pub fn resolve(selected: FitnessGoal, custom: &str) -> Self {
        sanitize_custom_text("custom_goal", custom).map_or(Self::Catalog(selected), Self::Custom)
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Catalog(goal) => write!(f, "{goal}"),
            Self::Custom(text) => f.write_str(text),
        }
    }
}

/// Trim a free-text field, treat blank as absent, and cap its length
fn sanitize_custom_text(field: &str, raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let char_count = trimmed.chars().count();
    if char_count > MAX_CUSTOM_FIELD_CHARS {
        warn!(
            field,
            char_count,
            limit = MAX_CUSTOM_FIELD_CHARS,
            "Truncating free-text form field"
        );
        return Some(trimmed.chars().take(MAX_CUSTOM_FIELD_CHARS).collect());
    }
    Some(trimmed.to_owned())
}

fn push_unique(list: &mut Vec<String>, item: String) {
    if !list.contains(&item) {
        list.push(item);
    }
}

/// Immutable record of a user's fitness preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    available_times: Vec<String>,
    exercises: Vec<String>,
    location: Location,
    equipment_available: bool,
    frequency: Frequency,
    goal: Goal,
}

impl UserPreferences {
    /// Selected time labels, in selection order
    #[must_use]
    pub fn available_times(&self) -> &[String] {
        &self.available_times
    }

    /// Catalog exercises followed by the custom entry, if any
    #[must_use]
    pub fn exercises(&self) -> &[String] {
        &self.exercises
    }

    /// Exercise location
    #[must_use]
    pub const fn location(&self) -> Location {
        self.location
    }

    /// Whether equipment is available
    #[must_use]
    pub const fn equipment_available(&self) -> bool {
        self.equipment_available
    }

    /// Weekly frequency
    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Resolved goal
    #[must_use]
    pub const fn goal(&self) -> &Goal {
        &self.goal
    }
}

/// Raw field values as collected by the form, before resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesForm {
    /// Labels picked from the generated time slots
    pub selected_times: Vec<String>,
    /// Catalog exercises ticked by the user
    pub selected_exercises: Vec<Exercise>,
    /// Exercise typed in when the catalog lacks it
    pub custom_exercise: String,
    /// Selected location
    pub location: Location,
    /// Equipment checkbox
    pub equipment_available: bool,
    /// Frequency slider value
    pub frequency: u8,
    /// Selected catalog goal
    pub goal: FitnessGoal,
    /// Goal typed in to override the catalog goal
    pub custom_goal: String,
}

impl Default for PreferencesForm {
    fn default() -> Self {
        Self {
            selected_times: Vec::new(),
            selected_exercises: Vec::new(),
            custom_exercise: String::new(),
            location: Location::default(),
            equipment_available: false,
            frequency: DEFAULT_FREQUENCY,
            goal: FitnessGoal::default(),
            custom_goal: String::new(),
        }
    }
}

impl PreferencesForm {
    /// Check that every selected time is one of the offered slots
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` for text that is not a time label, or
    /// `InvalidInput` for a label outside the offered slots.
    pub fn validate_times(&self, offered: &[TimeSlot]) -> AppResult<()> {
        for label in &self.selected_times {
            let slot = TimeSlot::parse(label)?;
            if !offered.contains(&slot) {
                return Err(AppError::invalid_input(format!(
                    "'{label}' is not an available time slot"
                )));
            }
        }
        Ok(())
    }

    /// Resolve the raw fields into an immutable preferences record
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when the frequency is outside 1..=7.
    pub fn build(&self) -> AppResult<UserPreferences> {
        let frequency = Frequency::new(self.frequency)?;

        let mut available_times = Vec::with_capacity(self.selected_times.len());
        for label in &self.selected_times {
            let label = label.trim();
            if !label.is_empty() {
                push_unique(&mut available_times, label.to_owned());
            }
        }

        let mut exercises = Vec::with_capacity(self.selected_exercises.len() + 1);
        for exercise in &self.selected_exercises {
            push_unique(&mut exercises, exercise.as_str().to_owned());
        }
        if let Some(custom) = sanitize_custom_text("custom_exercise", &self.custom_exercise) {
            push_unique(&mut exercises, custom);
        }

        Ok(UserPreferences {
            available_times,
            exercises,
            location: self.location,
            equipment_available: self.equipment_available,
            frequency,
            goal: Goal::resolve(self.goal, &self.custom_goal),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_trims_and_drops_blank() {
        assert_eq!(sanitize_custom_text("f", "   "), None);
        assert_eq!(
            sanitize_custom_text("f", "  rowing \n"),
            Some("rowing".to_owned())
        );
    }

    #[test]
    fn test_sanitize_truncates_on_char_boundary() {
        let long = "가".repeat(MAX_CUSTOM_FIELD_CHARS + 10);
        let kept = sanitize_custom_text("f", &long).unwrap();
        assert_eq!(kept.chars().count(), MAX_CUSTOM_FIELD_CHARS);
    }

    #[test]
    fn test_push_unique_keeps_first_occurrence() {
        let mut list = vec!["running".to_owned()];
        push_unique(&mut list, "yoga".to_owned());
        push_unique(&mut list, "running".to_owned());
        assert_eq!(list, vec!["running", "yoga"]);
    }

    #[test]
    fn test_goal_serialization_keeps_origin() {
        let catalog = serde_json::to_value(Goal::Catalog(FitnessGoal::Fitness)).unwrap();
        let custom = serde_json::to_value(Goal::Custom("fitness".to_owned())).unwrap();

        assert_eq!(catalog, serde_json::json!({"kind": "catalog", "value": "fitness"}));
        assert_eq!(custom, serde_json::json!({"kind": "custom", "value": "fitness"}));
        assert_ne!(catalog, custom);
        assert_eq!(serde_json::from_value::<Goal>(custom).unwrap(), Goal::Custom("fitness".to_owned()));
    }

    #[test]
    fn test_frequency_serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<Frequency>("0").is_err());
        assert_eq!(serde_json::from_str::<Frequency>("7").unwrap().get(), 7);
    }
}
