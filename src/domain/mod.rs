//! Domain types for the almanac.
//!
//! This module contains the core data structures:
//! - Day keys: "MM-DD" calendar days
//! - Facts: historical events with their sources
//! - Extras: quotes and books
//! - Index entries: year and people projections of facts

use serde::{Deserialize, Deserializer};

pub mod day;
pub mod extras;
pub mod fact;

// Re-export commonly used types
pub use day::{max_day, month_name, DayKey, InvalidDayKey};
pub use extras::{Book, Quote};
pub use fact::{Fact, FactSummary, PeopleFact, Source, YearFact};

/// Read a field that may be written as an explicit null (`pages:`),
/// treating null like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
