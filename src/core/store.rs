//! Primary day → facts store.
//!
//! Payloads are tagged by kind so a lookup can never observe a payload of
//! the wrong type under a key.

use std::sync::Arc;

use crate::domain::{Book, DayKey, Fact, Quote};

use super::cache::{Expiration, ExpiringCache};

/// Key of a store entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// Facts for one calendar day
    Day(DayKey),

    /// The singleton quote list
    Quotes,

    /// The singleton book list
    Books,
}

/// Facts of one day, shared between the store and its readers
pub type DayFacts = Arc<Vec<Fact>>;

/// Value of a store entry
#[derive(Debug, Clone)]
pub enum Payload {
    DayFacts(DayFacts),
    Quotes(Arc<Vec<Quote>>),
    Books(Arc<Vec<Book>>),
}

/// Store of loaded records, keyed by day plus the quote and book singletons.
///
/// Writes take `&mut self` even though the backing cache does not need it,
/// so only the owner building a snapshot can fill the store.
#[derive(Debug, Clone, Default)]
pub struct FactStore {
    cache: ExpiringCache<StoreKey, Payload>,
}

impl FactStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an entry
    pub fn put(&mut self, key: StoreKey, value: Payload, expiration: Expiration) {
        self.cache.put(key, value, expiration);
    }

    /// Get a live entry
    pub fn get(&self, key: &StoreKey) -> Option<Payload> {
        self.cache.get(key)
    }

    /// Store the facts of a day; loaded data never expires
    pub fn put_day(&mut self, day: DayKey, facts: Vec<Fact>) {
        self.put(
            StoreKey::Day(day),
            Payload::DayFacts(Arc::new(facts)),
            Expiration::Never,
        );
    }

    pub fn put_quotes(&mut self, quotes: Vec<Quote>) {
        self.put(StoreKey::Quotes, Payload::Quotes(Arc::new(quotes)), Expiration::Never);
    }

    pub fn put_books(&mut self, books: Vec<Book>) {
        self.put(StoreKey::Books, Payload::Books(Arc::new(books)), Expiration::Never);
    }

    /// Facts stored for a day
    pub fn day(&self, day: DayKey) -> Option<DayFacts> {
        match self.get(&StoreKey::Day(day))? {
            Payload::DayFacts(facts) => Some(facts),
            _ => None,
        }
    }

    /// All quotes, empty if none were stored
    pub fn quotes(&self) -> Arc<Vec<Quote>> {
        match self.get(&StoreKey::Quotes) {
            Some(Payload::Quotes(quotes)) => quotes,
            _ => Arc::default(),
        }
    }

    /// All books, empty if none were stored
    pub fn books(&self) -> Arc<Vec<Book>> {
        match self.get(&StoreKey::Books) {
            Some(Payload::Books(books)) => books,
            _ => Arc::default(),
        }
    }

    /// Day keys with a stored entry, in calendar order
    pub fn days(&self) -> Vec<DayKey> {
        let mut days: Vec<DayKey> = self
            .cache
            .entries()
            .into_iter()
            .filter_map(|(key, _)| match key {
                StoreKey::Day(day) => Some(day),
                _ => None,
            })
            .collect();
        days.sort();
        days
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
