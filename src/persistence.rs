// ABOUTME: Storage seam for submitted preferences with a logging-only stub implementation
// ABOUTME: Marks the extension point for a durable store without performing any write
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Preferences Persistence
//!
//! No durable store exists yet. [`LoggingPreferencesStore`] accepts a record,
//! logs it, and acknowledges the save so the submit flow can report success.

use serde::Serialize;
use tracing::info;

use crate::errors::AppResult;
use crate::models::UserPreferences;

/// Acknowledgement returned after a save
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveReceipt {
    /// Message suitable for direct display
    pub message: String,
    /// Whether the record was written somewhere durable
    pub durable: bool,
}

/// Destination for submitted preferences
pub trait PreferencesStore: Send + Sync {
    /// Record a preferences submission
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be stored.
    fn save(&self, preferences: &UserPreferences) -> AppResult<SaveReceipt>;
}

/// Stub store that only logs the record
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingPreferencesStore;

impl LoggingPreferencesStore {
    /// Message shown after a successful save
    pub const SUCCESS_MESSAGE: &'static str = "Preferences saved successfully!";
}

impl PreferencesStore for LoggingPreferencesStore {
    fn save(&self, preferences: &UserPreferences) -> AppResult<SaveReceipt> {
        let record = serde_json::to_string(preferences)?;
        info!(record = %record, "Saving preferences (no durable store configured)");

        Ok(SaveReceipt {
            message: Self::SUCCESS_MESSAGE.to_owned(),
            durable: false,
        })
    }
}
