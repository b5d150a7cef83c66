// ABOUTME: Integration tests for the half-hour time slot generator
// ABOUTME: Validates slot count, boundaries, spacing, labels, and repeatability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{NaiveDate, Timelike};
use pierre_advisor::constants::time_window::SLOT_COUNT;
use pierre_advisor::time_slots::{
    generate_time_slots, generate_time_slots_for, time_slot_labels, TimeSlot,
};

fn fixed_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
}

// =============================================================================
// Generation Tests
// =============================================================================

#[test]
fn test_generates_thirty_three_slots() {
    assert_eq!(SLOT_COUNT, 33);
    assert_eq!(generate_time_slots().len(), SLOT_COUNT);
    assert_eq!(generate_time_slots_for(fixed_day()).len(), SLOT_COUNT);
}

#[test]
fn test_first_and_last_labels() {
    let labels = time_slot_labels();

    assert_eq!(labels.first().map(String::as_str), Some("06:00 AM"));
    assert_eq!(labels.get(1).map(String::as_str), Some("06:30 AM"));
    assert_eq!(labels.last().map(String::as_str), Some("10:00 PM"));
}

#[test]
fn test_noon_and_afternoon_use_pm_suffix() {
    let labels = time_slot_labels();

    assert!(labels.contains(&"11:30 AM".to_owned()));
    assert!(labels.contains(&"12:00 PM".to_owned()));
    assert!(labels.contains(&"12:30 PM".to_owned()));
    assert!(labels.contains(&"01:00 PM".to_owned()));
}

#[test]
fn test_slots_are_thirty_minutes_apart() {
    let slots = generate_time_slots_for(fixed_day());

    for pair in slots.windows(2) {
        let gap = pair[1].time() - pair[0].time();
        assert_eq!(gap.num_minutes(), 30);
    }
}

#[test]
fn test_slots_fall_inside_window() {
    for slot in generate_time_slots_for(fixed_day()) {
        let hour = slot.time().hour();
        assert!((6..=22).contains(&hour), "{slot} outside window");
        assert!(slot.time().minute() == 0 || slot.time().minute() == 30);
        assert_eq!(slot.time().second(), 0);
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    assert_eq!(time_slot_labels(), time_slot_labels());
    assert_eq!(
        generate_time_slots_for(fixed_day()),
        generate_time_slots_for(fixed_day())
    );
}

#[test]
fn test_any_day_yields_same_labels() {
    // Spring-forward day in the US; labels do not depend on the date
    let dst = generate_time_slots_for(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    let leap = generate_time_slots_for(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

    let dst_labels: Vec<String> = dst.iter().map(TimeSlot::label).collect();
    let leap_labels: Vec<String> = leap.iter().map(TimeSlot::label).collect();
    assert_eq!(dst_labels, leap_labels);
}

// =============================================================================
// Label Parsing Tests
// =============================================================================

#[test]
fn test_every_label_parses_back() {
    for slot in generate_time_slots_for(fixed_day()) {
        assert_eq!(TimeSlot::parse(&slot.label()).unwrap(), slot);
    }
}

#[test]
fn test_parse_rejects_non_labels() {
    assert!(TimeSlot::parse("sometime").is_err());
    assert!(TimeSlot::parse("25:00 PM").is_err());
    assert!("06:00".parse::<TimeSlot>().is_err());
}
