//! Core storage and lookup logic.
//!
//! This module contains:
//! - ExpiringCache: Generic key-value cache with per-entry TTL
//! - FactStore: Day → facts store with quote and book singletons
//! - Indexes: Year, people and day-presence indexes
//! - Loader: One-shot load of a data directory
//! - Almanac: Read API over a loaded snapshot

pub mod almanac;
pub mod cache;
pub mod index;
pub mod loader;
pub mod store;

// Re-export commonly used types
pub use almanac::{
    random_fact_summary, random_fact_summary_with_rng, Almanac, AlmanacHandle, LookupError, Stats,
};
pub use cache::{Expiration, ExpiringCache};
pub use index::{IndexBuilder, Indexes};
pub use loader::{load, DataSource, LoadError};
pub use store::{DayFacts, FactStore, Payload, StoreKey};
