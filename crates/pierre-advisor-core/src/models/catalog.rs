// ABOUTME: Fixed option catalogs offered by the preferences form
// ABOUTME: Exercise, location, and goal enumerations with canonical kebab-case tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

fn unknown_option(kind: &str, value: &str, options: &[&str]) -> AppError {
    AppError::invalid_input(format!(
        "unknown {kind} '{value}' (expected one of: {})",
        options.join(", ")
    ))
}

/// Exercises listed in the form's catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Exercise {
    /// Running
    Running,
    /// Cycling
    Cycling,
    /// Swimming
    Swimming,
    /// Weight training
    WeightTraining,
    /// Yoga
    Yoga,
    /// Pilates
    Pilates,
    /// Tennis
    Tennis,
    /// Basketball
    Basketball,
}

impl Exercise {
    /// Every catalog entry in display order
    pub const ALL: [Self; 8] = [
        Self::Running,
        Self::Cycling,
        Self::Swimming,
        Self::WeightTraining,
        Self::Yoga,
        Self::Pilates,
        Self::Tennis,
        Self::Basketball,
    ];

    /// Canonical token
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Cycling => "cycling",
            Self::Swimming => "swimming",
            Self::WeightTraining => "weight-training",
            Self::Yoga => "yoga",
            Self::Pilates => "pilates",
            Self::Tennis => "tennis",
            Self::Basketball => "basketball",
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Exercise {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|e| e.as_str() == needle)
            .ok_or_else(|| {
                unknown_option("exercise", s, &Self::ALL.map(|e| e.as_str()))
            })
    }
}

/// Where the user exercises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Location {
    /// At home
    #[default]
    Home,
    /// In a gym
    Gym,
    /// In a park
    Park,
    /// Elsewhere outdoors
    Outdoor,
}

impl Location {
    /// Every location in display order
    pub const ALL: [Self; 4] = [Self::Home, Self::Gym, Self::Park, Self::Outdoor];

    /// Canonical token
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Gym => "gym",
            Self::Park => "park",
            Self::Outdoor => "outdoor",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Location {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|l| l.as_str() == needle)
            .ok_or_else(|| unknown_option("location", s, &Self::ALL.map(|l| l.as_str())))
    }
}

/// Goals offered by the form's goal selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitnessGoal {
    /// Lose weight
    #[default]
    WeightLoss,
    /// Gain muscle
    MuscleGain,
    /// Improve general fitness
    Fitness,
    /// Maintain current health
    Maintenance,
}

impl FitnessGoal {
    /// Every goal in display order
    pub const ALL: [Self; 4] = [
        Self::WeightLoss,
        Self::MuscleGain,
        Self::Fitness,
        Self::Maintenance,
    ];

    /// Canonical token
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WeightLoss => "weight-loss",
            Self::MuscleGain => "muscle-gain",
            Self::Fitness => "fitness",
            Self::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitnessGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|g| g.as_str() == needle)
            .ok_or_else(|| unknown_option("goal", s, &Self::ALL.map(|g| g.as_str())))
    }
}
