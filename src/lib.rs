//! almanac - "On this day in history" fact store
//!
//! Historical facts are kept in YAML day-files named `MM-DD.yaml`, one
//! document per fact. They are loaded once at startup into an immutable
//! in-memory snapshot and served read-only from then on.
//!
//! # Architecture
//!
//! - Parser: decodes document streams into facts, quotes and books and
//!   derives their presentation strings
//! - Index builder: groups facts by year and by person and records which
//!   days have a data file
//! - Fact store: day → facts plus the quote and book singletons, on top of
//!   a generic expiring cache
//! - Almanac: the read API (facts for a day, for today, random summary)
//!
//! # Modules
//!
//! - `core`: Store, indexes, loader and the `Almanac` read API
//! - `domain`: Data structures (DayKey, Fact, Source, Quote, Book)
//! - `parser`: YAML document streams and rendering helpers
//! - `view`: JSON projections
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Facts for 3 May
//! almanac --data-dir ./data day 5 3
//!
//! # Random short fact for today
//! almanac short
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod parser;
pub mod view;

// Re-export main types at crate root for convenience
pub use crate::core::{random_fact_summary, Almanac, AlmanacHandle, DataSource, LoadError, LookupError};
pub use crate::domain::{Book, DayKey, Fact, FactSummary, PeopleFact, Quote, Source, YearFact};
pub use crate::parser::ParseError;
