// ABOUTME: Time slot listing command for pierre-advisor
// ABOUTME: Prints the half-hour labels offered by the availability picker
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use pierre_advisor::time_slots::{generate_time_slots, generate_time_slots_for};
use tracing::debug;

/// Print one label per line
pub fn print_slots(date: Option<NaiveDate>) {
    let slots = date.map_or_else(generate_time_slots, generate_time_slots_for);
    debug!(count = slots.len(), ?date, "Generated time slots");

    for slot in slots {
        println!("{slot}");
    }
}
