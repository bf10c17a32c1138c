use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::style::Stylize;
use numerology_core::input::{mask_dob_input, parse_dob};
use numerology_core::{DateOfBirth, EngineConfig, Language, NumerologyEngine, NumerologyReport};
use std::io::{stdin, stdout, Write};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Lang {
    En,
    Vi,
}

impl From<Lang> for Language {
    fn from(lang: Lang) -> Self {
        match lang {
            Lang::En => Language::English,
            Lang::Vi => Language::Vietnamese,
        }
    }
}

/// Pythagorean numerology reading from a full name and a date of birth.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Full name, accents allowed (e.g. "Nguyễn Văn An")
    #[arg(long)]
    name: Option<String>,

    /// Date of birth as dd/mm/yyyy
    #[arg(long)]
    dob: Option<String>,

    /// Year used for the personal year number (defaults to the current year)
    #[arg(long, env = "NUMEROLOGY_CURRENT_YEAR")]
    year: Option<u32>,

    /// Label language
    #[arg(long, value_enum, default_value_t = Lang::En)]
    lang: Lang,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let engine = NumerologyEngine::with_config(EngineConfig {
        current_year: cli.year,
        language: cli.lang.into(),
    });

    match (cli.name.as_deref(), cli.dob.as_deref()) {
        (Some(name), Some(dob)) => {
            let dob = parse_dob(dob).context("invalid --dob")?;
            print_report(&engine.calculate(name, dob), cli.json)
        }
        _ => run_interactive(&engine, cli.json),
    }
}

fn run_interactive(engine: &NumerologyEngine, json: bool) -> Result<()> {
    println!("Numerology calculator. Type 'exit' to quit.");
    println!("---------------------------------------------------------------");

    loop {
        let Some(name) = prompt("Name")? else { break };
        let Some(raw_dob) = prompt("Date of birth (dd/mm/yyyy)")? else { break };

        let masked = mask_dob_input(&raw_dob);
        let dob: DateOfBirth = match parse_dob(&masked) {
            Ok(dob) => dob,
            Err(e) => {
                warn!(input = %raw_dob, "rejected date of birth");
                println!("{}", e.to_string().red());
                continue;
            }
        };

        info!(%name, ?dob, "running calculation");
        print_report(&engine.calculate(&name, dob), json)?;
    }
    Ok(())
}

/// Reads one trimmed line; `None` on `exit` or end of input.
fn prompt(label: &str) -> Result<Option<String>> {
    print!("\n{} > ", label.bold());
    stdout().flush()?;

    let mut input = String::new();
    if stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    match input.trim() {
        "exit" => Ok(None),
        s => Ok(Some(s.to_string())),
    }
}

fn print_report(report: &NumerologyReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    let width = report
        .entries
        .iter()
        .map(|e| e.label.chars().count())
        .max()
        .unwrap_or(0);

    println!("\n{} {}", "Name:".bold(), report.name);
    let dob = report.date_of_birth;
    println!("{} {:02}/{:02}/{:04}", "Born:".bold(), dob.day, dob.month, dob.year);
    println!("---------------------------------------------------------------");
    for entry in &report.entries {
        let pad = width - entry.label.chars().count();
        println!("  {}{}  {}", entry.label.cyan(), " ".repeat(pad), entry.display.as_str().bold());
    }
    Ok(())
}
