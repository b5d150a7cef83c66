// ABOUTME: Pierre Advisor CLI - terminal front end for the fitness preferences form
// ABOUTME: Lists time slots, previews prompts, and submits preferences for optional LLM advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Show today's selectable time slots
//! pierre-advisor slots
//!
//! # Preview the prompt that would be sent
//! pierre-advisor prompt --time "06:00 AM" --exercise running --location gym --equipment
//!
//! # Save preferences and ask for advice
//! pierre-advisor submit --time "06:00 AM" --exercise running --location gym \
//!     --equipment --frequency 3 --goal weight-loss --advice
//! ```

mod commands;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use pierre_advisor::config::AdvisorConfig;
use pierre_advisor::constants::input_limits::{DEFAULT_FREQUENCY, MAX_FREQUENCY, MIN_FREQUENCY};
use pierre_advisor::models::{Exercise, FitnessGoal, Location, PreferencesForm};

#[derive(Parser)]
#[command(
    name = "pierre-advisor",
    about = "Pierre fitness preferences form",
    long_about = "Collects fitness preferences, records them, and optionally asks an OpenAI-compatible model for personalized health advice."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Print the selectable half-hour time slots
    Slots {
        /// Reference day (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Print the advice prompt for the given preferences without sending it
    Prompt {
        #[command(flatten)]
        form: FormArgs,
    },

    /// Save preferences and optionally request advice
    Submit {
        #[command(flatten)]
        form: FormArgs,

        /// Request advice from the completion service after saving
        #[arg(long)]
        advice: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Raw form fields
#[derive(Args, Debug)]
struct FormArgs {
    /// Available time slot, e.g. "06:00 AM" (repeatable)
    #[arg(long = "time")]
    times: Vec<String>,

    /// Preferred catalog exercise (repeatable)
    #[arg(long = "exercise")]
    exercises: Vec<Exercise>,

    /// Exercise not in the catalog
    #[arg(long)]
    custom_exercise: Option<String>,

    /// Exercise location
    #[arg(long, default_value_t = Location::Home)]
    location: Location,

    /// Exercise equipment is available
    #[arg(long)]
    equipment: bool,

    /// Sessions per week (1-7)
    #[arg(
        long,
        default_value_t = DEFAULT_FREQUENCY,
        value_parser = clap::value_parser!(u8)
            .range(i64::from(MIN_FREQUENCY)..=i64::from(MAX_FREQUENCY))
    )]
    frequency: u8,

    /// Catalog goal
    #[arg(long, default_value_t = FitnessGoal::WeightLoss)]
    goal: FitnessGoal,

    /// Goal in your own words; overrides --goal
    #[arg(long)]
    custom_goal: Option<String>,
}

impl From<FormArgs> for PreferencesForm {
    fn from(args: FormArgs) -> Self {
        Self {
            selected_times: args.times,
            selected_exercises: args.exercises,
            custom_exercise: args.custom_exercise.unwrap_or_default(),
            location: args.location,
            equipment_available: args.equipment,
            frequency: args.frequency,
            goal: args.goal,
            custom_goal: args.custom_goal.unwrap_or_default(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AdvisorConfig::from_env();
    if cli.verbose {
        config.logging = config.logging.with_level("debug");
    }
    config.logging.init()?;

    match cli.command {
        Command::Slots { date } => commands::slots::print_slots(date),
        Command::Prompt { form } => commands::submit::print_prompt(&form.into())?,
        Command::Submit { form, advice, json } => {
            commands::submit::submit(&config, &form.into(), advice, json)?;
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse_submit(extra: &[&str]) -> Result<FormArgs, clap::Error> {
        let args = ["pierre-advisor", "submit", "--time", "06:00 AM"]
            .into_iter()
            .chain(extra.iter().copied());
        match Cli::try_parse_from(args)?.command {
            Command::Submit { form, .. } => Ok(form),
            _ => unreachable!("submit subcommand parsed"),
        }
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_frequency_defaults_to_three() {
        assert_eq!(parse_submit(&[]).unwrap().frequency, DEFAULT_FREQUENCY);
    }

    #[test]
    fn test_frequency_outside_range_is_usage_error() {
        for bad in ["0", "8", "300"] {
            let err = parse_submit(&["--frequency", bad]).err().unwrap();
            assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation, "{bad}");
        }
        assert_eq!(parse_submit(&["--frequency", "7"]).unwrap().frequency, 7);
    }

    #[test]
    fn test_form_args_convert_to_form() {
        let form = PreferencesForm::from(
            parse_submit(&["--exercise", "running", "--location", "gym", "--equipment"]).unwrap(),
        );

        assert_eq!(form.selected_times, vec!["06:00 AM"]);
        assert_eq!(form.selected_exercises, vec![Exercise::Running]);
        assert_eq!(form.location, Location::Gym);
        assert!(form.equipment_available);
        assert!(form.custom_goal.is_empty());
    }
}
