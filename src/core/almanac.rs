//! Read API over a loaded data snapshot.
//!
//! An [`Almanac`] is immutable once built: every method takes `&self`, so a
//! single instance behind an `Arc` serves any number of threads without
//! locking. Replacing the data means building a new `Almanac` and publishing
//! it through an [`AlmanacHandle`].

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Datelike, Local, Utc};
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use crate::domain::{Book, DayKey, Fact, FactSummary, PeopleFact, Quote, YearFact};

use super::index::Indexes;
use super::loader::{self, DataSource, LoadError};
use super::store::{DayFacts, FactStore};

/// Errors returned by lookups that cannot produce a value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Cannot pick a fact from an empty list")]
    NoFacts,
}

/// Dataset totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub days: usize,
    pub facts: usize,
    pub years: usize,
    pub people: usize,
    pub quotes: usize,
    pub books: usize,
    pub loaded_at: DateTime<Utc>,
}

/// Loaded facts with their indexes
#[derive(Debug, Clone)]
pub struct Almanac {
    store: FactStore,
    indexes: Indexes,
    fact_count: usize,
    loaded_at: DateTime<Utc>,
}

impl Almanac {
    /// Assemble an almanac from a finished store and indexes
    pub fn new(store: FactStore, indexes: Indexes, fact_count: usize) -> Self {
        Self {
            store,
            indexes,
            fact_count,
            loaded_at: Utc::now(),
        }
    }

    /// Load a data directory (blocking)
    pub fn load(source: &DataSource) -> Result<Self, LoadError> {
        loader::load(source)
    }

    /// Facts for a calendar day.
    ///
    /// Impossible dates (month 13, 31 April, 30 February) and days without
    /// facts both yield `None`.
    pub fn facts_for_day(&self, month: u32, day: u32) -> Option<DayFacts> {
        let key = DayKey::new(month, day)?;
        self.store.day(key).filter(|facts| !facts.is_empty())
    }

    /// Facts for the current local day
    pub fn facts_for_today(&self) -> Option<DayFacts> {
        let today = Local::now().date_naive();
        self.facts_for_day(today.month(), today.day())
    }

    /// Whether a data file exists for the day; `false` for impossible dates
    pub fn day_has_facts(&self, month: u32, day: u32) -> bool {
        DayKey::new(month, day).is_some_and(|key| self.indexes.day_has_facts(key))
    }

    /// Index entries for a year, in load order
    pub fn year(&self, year: i32) -> Option<&[YearFact]> {
        self.indexes.year(year)
    }

    /// Index entries for a person, ascending by date
    pub fn person(&self, name: &str) -> Option<&[PeopleFact]> {
        self.indexes.person(name)
    }

    /// Year, people and day-presence indexes
    pub fn indexes(&self) -> &Indexes {
        &self.indexes
    }

    pub fn quotes(&self) -> Arc<Vec<Quote>> {
        self.store.quotes()
    }

    pub fn books(&self) -> Arc<Vec<Book>> {
        self.store.books()
    }

    /// Total number of facts loaded
    pub fn fact_count(&self) -> usize {
        self.fact_count
    }

    pub fn stats(&self) -> Stats {
        Stats {
            days: self.indexes.days().count(),
            facts: self.fact_count,
            years: self.indexes.years().count(),
            people: self.indexes.people().count(),
            quotes: self.quotes().len(),
            books: self.books().len(),
            loaded_at: self.loaded_at,
        }
    }
}

/// Summary of a uniformly random fact from the list
pub fn random_fact_summary(facts: &[Fact]) -> Result<FactSummary, LookupError> {
    random_fact_summary_with_rng(facts, &mut rand::thread_rng())
}

/// Summary of a random fact using the given RNG
pub fn random_fact_summary_with_rng<R: Rng + ?Sized>(
    facts: &[Fact],
    rng: &mut R,
) -> Result<FactSummary, LookupError> {
    if facts.is_empty() {
        return Err(LookupError::NoFacts);
    }
    let choice = rng.gen_range(0..=facts.len() - 1);
    Ok(FactSummary::from(&facts[choice]))
}

/// Shared slot holding the currently published almanac.
///
/// Readers clone the inner `Arc` and keep using their snapshot even if a
/// new one is published meanwhile. Writers only ever swap in a complete
/// almanac.
#[derive(Debug)]
pub struct AlmanacHandle {
    current: RwLock<Arc<Almanac>>,
}

impl AlmanacHandle {
    pub fn new(almanac: Almanac) -> Self {
        Self {
            current: RwLock::new(Arc::new(almanac)),
        }
    }

    /// The currently published snapshot
    pub fn current(&self) -> Arc<Almanac> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the published snapshot, returning the previous one
    pub fn publish(&self, almanac: Almanac) -> Arc<Almanac> {
        let next = Arc::new(almanac);
        let mut slot = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *slot, next)
    }
}
