//! Command-line interface for almanac.
//!
//! Loads the data directory once, then answers a single query against the
//! loaded snapshot. Queries that find nothing exit with status 2.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::core::{random_fact_summary, Almanac, DataSource, DayFacts};
use crate::domain::max_day;
use crate::parser::render::{self, TextStyle};
use crate::view::{self, FactShortJson, MessageJson};

/// almanac - "On this day in history" fact browser
#[derive(Parser, Debug)]
#[command(name = "almanac")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Data directory (overrides ALMANAC_DATA_DIR and the config file)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show resolved configuration (debug)
    Config,

    #[command(flatten)]
    Query(QueryCommand),
}

/// Subcommands answered from a loaded almanac
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum QueryCommand {
    /// Show facts for a day
    Day {
        /// Month (1-12)
        month: u32,

        /// Day of month (1-31)
        day: u32,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show facts for today
    Today {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show a random short-form fact for today as JSON
    Short,

    /// List facts of a year
    Year {
        year: i32,
    },

    /// List facts naming a person
    Person {
        /// Full name as written in the data files
        name: String,
    },

    /// List indexed people
    People,

    /// Show which days of a month have facts
    Calendar {
        /// Month (1-12)
        month: u32,
    },

    /// List quotes
    Quotes,

    /// List books
    Books,

    /// Show dataset totals
    Stats,
}

/// Whether a query produced data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Found,
    NotFound,
}

/// Process exit status for queries that found nothing
pub const NOT_FOUND_EXIT: u8 = 2;

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Found => ExitCode::SUCCESS,
            Outcome::NotFound => ExitCode::from(NOT_FOUND_EXIT),
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<ExitCode> {
        let query = match self.command {
            Commands::Config => {
                show_config(self.data_dir.as_deref())?;
                return Ok(ExitCode::SUCCESS);
            }
            Commands::Query(query) => query,
        };

        let source = data_source(self.data_dir)?;
        let almanac = tokio::task::spawn_blocking(move || Almanac::load(&source))
            .await
            .context("Load task panicked")?
            .context("Failed to load data")?;

        let outcome = query.run(&almanac)?;
        if outcome == Outcome::NotFound {
            debug!(?query, "Query found no data");
        }
        Ok(outcome.into())
    }
}

impl QueryCommand {
    /// Answer the query, printing to stdout
    pub fn run(&self, almanac: &Almanac) -> Result<Outcome> {
        match self {
            Self::Day { month, day, json } => show_facts(almanac.facts_for_day(*month, *day), *json),
            Self::Today { json } => show_facts(almanac.facts_for_today(), *json),
            Self::Short => show_short(almanac),
            Self::Year { year } => show_year(almanac, *year),
            Self::Person { name } => show_person(almanac, name),
            Self::People => show_people(almanac),
            Self::Calendar { month } => show_calendar(almanac, *month),
            Self::Quotes => show_quotes(almanac),
            Self::Books => show_books(almanac),
            Self::Stats => show_stats(almanac),
        }
    }
}

/// Resolve the data source from the CLI flag or configuration
fn data_source(data_dir: Option<PathBuf>) -> Result<DataSource> {
    let config = crate::config::config()?;
    Ok(match data_dir {
        Some(dir) => DataSource::new(dir).with_extension(&config.extension),
        None => config.data_source(),
    })
}

fn show_config(data_dir: Option<&Path>) -> Result<()> {
    let config = crate::config::config()?;

    println!("Almanac Configuration");
    println!("=====================");
    println!();
    match &config.config_file {
        Some(path) => println!("Config file: {}", path.display()),
        None => println!("Config file: (none - using defaults)"),
    }
    match data_dir {
        Some(dir) => println!("Data dir:    {} (--data-dir)", dir.display()),
        None => println!("Data dir:    {}", config.data_dir.display()),
    }
    println!("Extension:   {}", config.extension);

    Ok(())
}

fn not_found() -> Outcome {
    eprintln!("{}", view::NOT_FOUND_MESSAGE);
    Outcome::NotFound
}

fn not_found_json() -> Result<Outcome> {
    println!("{}", serde_json::to_string_pretty(&MessageJson::not_found())?);
    Ok(Outcome::NotFound)
}

fn show_facts(facts: Option<DayFacts>, json: bool) -> Result<Outcome> {
    let Some(facts) = facts else {
        return if json { not_found_json() } else { Ok(not_found()) };
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&view::facts_json(&facts))?);
        return Ok(Outcome::Found);
    }

    for fact in facts.iter() {
        println!("{}  {}", fact.date(), fact.title);
        if !fact.location.is_empty() {
            println!("  Location: {}", fact.location);
        }
        if !fact.people.is_empty() {
            println!("  People:   {}", fact.people);
        }
        println!();
        println!(
            "  {}",
            render::fact_content(&fact.content, &fact.sources, TextStyle::Plain)
        );
        for source in &fact.sources {
            if source.url.is_empty() {
                println!("  - {}", source.value);
            } else {
                println!("  - {} <{}>", source.value, source.url);
            }
        }
        println!();
    }

    Ok(Outcome::Found)
}

fn show_short(almanac: &Almanac) -> Result<Outcome> {
    let Some(facts) = almanac.facts_for_today() else {
        return not_found_json();
    };

    let summary = random_fact_summary(&facts)?;
    println!("{}", serde_json::to_string_pretty(&FactShortJson::from(summary))?);
    Ok(Outcome::Found)
}

fn show_year(almanac: &Almanac, year: i32) -> Result<Outcome> {
    let Some(entries) = almanac.year(year) else {
        return Ok(not_found());
    };

    println!("{}", year);
    for entry in entries {
        println!("  {:<16} {}", entry.date_month, entry.title);
    }
    Ok(Outcome::Found)
}

fn show_person(almanac: &Almanac, name: &str) -> Result<Outcome> {
    let Some(entries) = almanac.person(name) else {
        return Ok(not_found());
    };

    println!("{}", name);
    for entry in entries {
        println!("  {:<22} {}", entry.date_month, entry.title);
    }
    Ok(Outcome::Found)
}

fn show_people(almanac: &Almanac) -> Result<Outcome> {
    for (name, entries) in almanac.indexes().people_index() {
        println!("{:<40} {}", name, entries.len());
    }
    Ok(Outcome::Found)
}

fn show_calendar(almanac: &Almanac, month: u32) -> Result<Outcome> {
    let Some(last) = max_day(month) else {
        return Ok(not_found());
    };

    let days: Vec<String> = (1..=last)
        .map(|day| {
            if almanac.day_has_facts(month, day) {
                format!("{:>3}*", day)
            } else {
                format!("{:>3} ", day)
            }
        })
        .collect();

    for week in days.chunks(7) {
        println!("{}", week.join(""));
    }
    Ok(Outcome::Found)
}

fn show_quotes(almanac: &Almanac) -> Result<Outcome> {
    for quote in almanac.quotes().iter() {
        println!("\"{}\"", quote.content);
        if !quote.source.is_empty() {
            println!("    - {}", quote.source);
        }
    }
    Ok(Outcome::Found)
}

fn show_books(almanac: &Almanac) -> Result<Outcome> {
    for book in almanac.books().iter() {
        println!("{} - {} ({})", book.author, book.title, book.year);
        if !book.url.is_empty() {
            println!("    {}", book.url);
        }
    }
    Ok(Outcome::Found)
}

fn show_stats(almanac: &Almanac) -> Result<Outcome> {
    let stats = almanac.stats();
    println!("Days:   {}", stats.days);
    println!("Facts:  {}", stats.facts);
    println!("Years:  {}", stats.years);
    println!("People: {}", stats.people);
    println!("Quotes: {}", stats.quotes);
    println!("Books:  {}", stats.books);
    println!("Loaded: {}", stats.loaded_at.to_rfc3339());
    Ok(Outcome::Found)
}
