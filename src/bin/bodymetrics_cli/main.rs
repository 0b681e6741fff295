// ABOUTME: Body metrics CLI - computes BMI and BMR from the command line
// ABOUTME: Runs the same validation and calculation pipeline as the HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # BMI with category, risk level and recommendation
//! bodymetrics-cli bmi --height 175 --weight 70
//!
//! # BMR with daily calorie needs, English labels
//! bodymetrics-cli --locale en bmr --height 175 --weight 70 --age 30 --gender M
//!
//! # Print the HTTP response body instead of text
//! bodymetrics-cli --json bmr --height 160 --weight 60 --age 30 --gender F
//! ```

mod commands;

use bodymetrics_core::errors::ErrorResponse;
use bodymetrics_core::models::Locale;
use bodymetrics_intelligence::CalorieBasis;
use bodymetrics_server::services::HealthMetricsService;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "bodymetrics-cli",
    about = "Body metrics calculator",
    long_about = "Computes Body Mass Index and Basal Metabolic Rate with the same validation rules as the HTTP API."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Label language (fr or en)
    #[arg(long, global = true, default_value = "fr")]
    locale: Locale,

    /// BMR value the activity multipliers apply to (rounded or precise)
    #[arg(long, global = true, default_value = "rounded")]
    calorie_basis: CalorieBasis,

    /// Print the JSON body the HTTP API would return
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Body Mass Index with category, risk level and recommendation
    Bmi {
        /// Height in centimeters
        #[arg(long, allow_hyphen_values = true)]
        height: String,

        /// Weight in kilograms
        #[arg(long, allow_hyphen_values = true)]
        weight: String,
    },

    /// Basal Metabolic Rate with daily calorie needs per activity level
    Bmr {
        /// Height in centimeters
        #[arg(long, allow_hyphen_values = true)]
        height: String,

        /// Weight in kilograms
        #[arg(long, allow_hyphen_values = true)]
        weight: String,

        /// Age in years
        #[arg(long, allow_hyphen_values = true)]
        age: String,

        /// Gender code (M or F)
        #[arg(long)]
        gender: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let service = HealthMetricsService::new(cli.locale, cli.calorie_basis);

    let outcome = match cli.command {
        Command::Bmi { height, weight } => {
            commands::bmi(&service, &[("height", height), ("weight", weight)], cli.json)
        }
        Command::Bmr {
            height,
            weight,
            age,
            gender,
        } => commands::bmr(
            &service,
            &[
                ("height", height),
                ("weight", weight),
                ("age", age),
                ("gender", gender),
            ],
            cli.json,
        ),
    };

    match outcome {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            let body = ErrorResponse::from(&error);
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&body).unwrap_or(body.error)
                );
            } else {
                eprintln!("Error: {}", body.error);
            }
            ExitCode::FAILURE
        }
    }
}
