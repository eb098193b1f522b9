// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::{Args, Parser, Subcommand};
use pointpath_core::badges::{badges_for, legend};
use pointpath_core::catalog::search_airlines;
use pointpath_core::{explain, AirlineRecommendation, BookabilityResult, Registry, Settings};
use pointpath_extract::date::format_date;
use pointpath_extract::{extract_with, FlightData, InputKind, Profile};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::borrow::Cow;
use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "pointpath", author, version, about, long_about = None)]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Settings file (defaults to the per-user config directory)
    #[arg(long, global = true, env = "POINTPATH_CONFIG")]
    config: Option<PathBuf>,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// Itinerary text. Read from --file or stdin when omitted
    text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Text came from OCR of a screenshot
    #[arg(long)]
    ocr: bool,

    /// Pasted text, even when settings default to OCR
    #[arg(long, conflicts_with = "ocr")]
    plain: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract flight fields from itinerary text
    Extract(InputArgs),
    /// List the transfer programs that can book an airline
    Resolve { airline: String },
    /// Recommend a transfer program and explain how to book
    Explain { airline: String },
    /// Extract, resolve and explain in one go
    Check(InputArgs),
    /// List known airlines with their booking badges
    Airlines {
        /// Case-insensitive name filter
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Explain the booking badges
    Legend,
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => std::env::var("POINTPATH_LOG")
            .ok()
            .and_then(|v| LevelFilter::from_str(&v).ok())
            .unwrap_or(LevelFilter::Warn),
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn read_input(args: &InputArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {:?}", path));
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read stdin")?;
    Ok(buf)
}

fn profile_for(args: &InputArgs, settings: &Settings) -> Profile {
    if args.ocr || (settings.ocr_by_default && !args.plain) {
        Profile::Ocr
    } else {
        Profile::Text
    }
}

fn registry_for(settings: &Settings) -> Result<Cow<'static, Registry>> {
    match &settings.registry_path {
        Some(path) => {
            let registry = Registry::load(path)
                .with_context(|| format!("Failed to load partner table {:?}", path))?;
            Ok(Cow::Owned(registry))
        }
        None => Ok(Cow::Borrowed(Registry::global())),
    }
}

fn with_badges(airline: &str, result: &BookabilityResult, show: bool) -> String {
    let emojis = badges_for(airline, result).emojis;
    if show && !emojis.is_empty() {
        format!("{} {}", airline, emojis.concat())
    } else {
        airline.to_string()
    }
}

fn print_flight(data: &FlightData) {
    let unknown = "-";
    let year = chrono::Local::now().year();
    println!("Airline:     {}", data.airline.as_deref().unwrap_or(unknown));
    println!(
        "Route:       {} → {}",
        data.origin.as_deref().unwrap_or(unknown),
        data.destination.as_deref().unwrap_or(unknown)
    );
    match data.departure_date.as_deref() {
        Some(raw) if !raw.is_empty() => {
            println!("Date:        {} ({})", raw, format_date(raw, year))
        }
        _ => println!("Date:        {}", unknown),
    }
    match data.cabin_class {
        Some(cabin) => println!("Cabin:       {}", cabin),
        None => println!("Cabin:       {}", unknown),
    }
    match data.cash_price {
        Some(price) => println!("Price:       ${:.2}", price),
        None => println!("Price:       {}", unknown),
    }
}

fn print_bookability(airline: &str, result: &BookabilityResult, show_badges: bool) {
    println!("{}", with_badges(airline, result, show_badges));
    println!("{}", result.message);
    for p in &result.partner_programs {
        println!(
            "  {:<9} {} ({}, {})",
            p.relationship.as_str(),
            p.partner_name,
            p.transfer_ratio,
            p.transfer_time
        );
    }
}

fn print_recommendation(rec: &AirlineRecommendation) {
    match &rec.iata_code {
        Some(code) => println!("{} ({}) - {}", rec.name, code, rec.category),
        None => println!("{} - {}", rec.name, rec.category),
    }
    println!(
        "Preferred: {} ({}, {})",
        rec.preferred_partner, rec.transfer_ratio, rec.transfer_time
    );
    println!("How to book:");
    for (i, step) in rec.how_to_book_steps.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
    println!("Notes:");
    for note in &rec.notes {
        println!("  - {}", note);
    }
    println!("Why:");
    for reason in &rec.recommendation_reasons {
        println!("  - {}", reason);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = TermLogger::init(
        log_level(cli.verbose),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Logger already initialised: {}", e);
    }

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    log::debug!("[Cli] Settings: {:?}", settings);
    let json = cli.json || settings.json_output;

    match &cli.command {
        Commands::Extract(args) => {
            let text = read_input(args)?;
            let kind = InputKind::classify(&text);
            if !json && kind == InputKind::Url {
                eprintln!("{}", kind.hint());
            }
            let data = extract_with(&text, profile_for(args, &settings));
            if json {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                print_flight(&data);
            }
        }
        Commands::Resolve { airline } => {
            let registry = registry_for(&settings)?;
            let result = registry.resolve(airline);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_bookability(airline.trim(), &result, settings.show_badges);
            }
        }
        Commands::Explain { airline } => {
            let registry = registry_for(&settings)?;
            let result = registry.resolve(airline);
            let rec = explain(airline, &result);
            if json {
                println!("{}", serde_json::to_string_pretty(&rec)?);
            } else {
                match rec {
                    Some(rec) => print_recommendation(&rec),
                    None => println!("{}", result.message),
                }
            }
        }
        Commands::Check(args) => {
            let text = read_input(args)?;
            let data = extract_with(&text, profile_for(args, &settings));
            let registry = registry_for(&settings)?;
            let carrier = data.carrier_name().map(str::to_string);
            let result = carrier.as_deref().map(|c| registry.resolve(c));
            let rec = match (&carrier, &result) {
                (Some(c), Some(r)) => explain(c, r),
                _ => None,
            };

            if json {
                let payload = serde_json::json!({
                    "flight": data,
                    "bookability": result,
                    "recommendation": rec,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                print_flight(&data);
                println!();
                match (&carrier, &result) {
                    (Some(c), Some(r)) => {
                        print_bookability(c, r, settings.show_badges);
                        if let Some(rec) = &rec {
                            println!();
                            print_recommendation(rec);
                        }
                    }
                    _ => println!("No airline found in the text."),
                }
            }
        }
        Commands::Airlines { search } => {
            let registry = registry_for(&settings)?;
            let names = search_airlines(search.as_deref().unwrap_or(""));
            if json {
                let rows: Vec<_> = names
                    .iter()
                    .map(|name| badges_for(name, &registry.resolve(name)))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else if names.is_empty() {
                println!("No airlines match.");
            } else {
                for name in names {
                    println!(
                        "{}",
                        with_badges(name, &registry.resolve(name), settings.show_badges)
                    );
                }
            }
        }
        Commands::Legend => {
            let legend = legend();
            if json {
                println!("{}", serde_json::to_string_pretty(&legend)?);
            } else {
                for badge in legend {
                    println!("{} {}", badge.emoji, badge.meaning);
                }
            }
        }
    }

    Ok(())
}
