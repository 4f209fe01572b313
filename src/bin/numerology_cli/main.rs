// ABOUTME: numerology-cli - command-line front end over the numerology insights library
// ABOUTME: Prints profiles, readings, daily forecasts, compatibility and chat replies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Compute a profile locally (no remote call)
//! numerology-cli profile --name "John Smith" --birth-date 1990-11-22
//!
//! # Personality reading
//! numerology-cli reading --name "John Smith" --birth-date 1990-11-22
//!
//! # Today's energy forecast
//! numerology-cli daily --name "John Smith" --birth-date 1990-11-22
//!
//! # Compatibility between two people
//! numerology-cli compatibility --name "John Smith" --birth-date 1990-11-22 \
//!     --partner-name "Ada Lovelace" --partner-birth-date 1815-12-10
//!
//! # One chat turn, streamed, with earlier messages from a JSON file
//! numerology-cli chat --name "John Smith" --birth-date 1990-11-22 \
//!     --history history.json --stream "What should I focus on this year?"
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use futures_util::StreamExt;
use serde::Serialize;
use tokio::io::{self, AsyncWriteExt};
use tracing::info;

use numerology_insights::engine::{compatibility, NumerologyProfile};
use numerology_insights::gateway::InsightGateway;
use numerology_insights::insights::build_chat_context;
use numerology_insights::llm::ChatMessage;
use numerology_insights::logging::LoggingConfig;

#[derive(Parser)]
#[command(
    name = "numerology-cli",
    about = "Numerology profiles and AI readings",
    long_about = "Computes numerology and zodiac profiles and asks a Gemini model for readings, forecasts and chat replies."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Args)]
struct Person {
    /// Display name
    #[arg(long)]
    name: String,

    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    birth_date: NaiveDate,
}

#[derive(Subcommand)]
enum Command {
    /// Print the computed profile and make no remote call
    Profile {
        #[command(flatten)]
        person: Person,

        /// Evaluation date for the personal and universal day (defaults to today)
        #[arg(long)]
        on: Option<NaiveDate>,
    },

    /// Personality reading
    Reading {
        #[command(flatten)]
        person: Person,
    },

    /// Daily energy forecast
    Daily {
        #[command(flatten)]
        person: Person,

        /// Forecast date (defaults to today)
        #[arg(long)]
        on: Option<NaiveDate>,
    },

    /// Compatibility reading for two people
    Compatibility {
        #[command(flatten)]
        person: Person,

        /// Partner display name
        #[arg(long)]
        partner_name: String,

        /// Partner birth date (YYYY-MM-DD)
        #[arg(long)]
        partner_birth_date: NaiveDate,
    },

    /// One chat turn grounded in the profile
    Chat {
        #[command(flatten)]
        person: Person,

        /// JSON file with earlier messages: [{"role": "user", "content": "..."}]
        #[arg(long)]
        history: Option<PathBuf>,

        /// Print the reply as it arrives
        #[arg(long)]
        stream: bool,

        /// Message to send
        message: String,
    },
}

fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn load_history(path: Option<&PathBuf>) -> Result<Vec<ChatMessage>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading chat history from {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("parsing chat history in {}", path.display()))
}

async fn chat(
    gateway: &InsightGateway,
    person: &Person,
    history: &[ChatMessage],
    message: &str,
    stream: bool,
) -> Result<()> {
    let context = build_chat_context(&person.name, person.birth_date)?;

    if !stream {
        let reply = gateway
            .chat_response_with_context(&context, history, message)
            .await?;
        println!("{reply}");
        return Ok(());
    }

    let mut fragments = gateway
        .chat_stream_with_context(&context, history, message)
        .await?;
    let mut stdout = io::stdout();
    while let Some(fragment) = fragments.next().await {
        stdout.write_all(fragment?.as_bytes()).await?;
        stdout.flush().await?;
    }
    stdout.write_all(b"\n").await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    let today = Local::now().date_naive();

    if let Command::Profile { person, on } = &cli.command {
        let profile =
            NumerologyProfile::calculate_on(&person.name, person.birth_date, on.unwrap_or(today))?;
        return print_json(&profile);
    }

    let gateway = InsightGateway::from_env()?;
    info!(models = ?gateway.models(), "numerology-cli");

    match cli.command {
        Command::Profile { .. } => Ok(()),
        Command::Reading { person } => {
            let insight = gateway
                .personality_insight(&person.name, person.birth_date)
                .await?;
            print_json(&insight)
        }
        Command::Daily { person, on } => {
            let energy = gateway
                .daily_energy(&person.name, person.birth_date, on.unwrap_or(today))
                .await?;
            print_json(&energy)
        }
        Command::Compatibility {
            person,
            partner_name,
            partner_birth_date,
        } => {
            let first = NumerologyProfile::calculate_on(&person.name, person.birth_date, today)?;
            let second =
                NumerologyProfile::calculate_on(&partner_name, partner_birth_date, today)?;
            let score = compatibility(&first, &second);
            let insight = gateway.compatibility_insight_for(&first, &second).await;
            print_json(&serde_json::json!({
                "score": score.score,
                "level": score.level,
                "insight": insight,
            }))
        }
        Command::Chat {
            person,
            history,
            stream,
            message,
        } => {
            let history = load_history(history.as_ref())?;
            chat(&gateway, &person, &history, &message, stream).await
        }
    }
}
