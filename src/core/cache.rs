//! Generic key-value cache with per-entry expiration.
//!
//! Backed by `moka::sync::Cache`. Each entry carries the lifetime it was
//! inserted with and a [`moka::Expiry`] policy turns that into the entry's
//! deadline. Expired entries are never returned by `get`; `purge_expired`
//! runs moka's pending maintenance so they are also evicted.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::time::{Duration, Instant};

use moka::sync::Cache;
use moka::Expiry;

/// Default lifetime for entries inserted with [`Expiration::Default`]
pub const DEFAULT_TTL: Duration = Duration::from_secs(300); // 5 min

/// Lifetime requested for a single entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiration {
    /// The entry is kept until it is overwritten or removed
    Never,

    /// Use the cache's default TTL
    Default,

    /// Expire after the given duration
    After(Duration),
}

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    ttl: Option<Duration>,
}

/// Reads each entry's own TTL; overwriting an entry restarts its clock
struct EntryTtl;

impl<K, V> Expiry<K, Entry<V>> for EntryTtl {
    fn expire_after_create(
        &self,
        _key: &K,
        entry: &Entry<V>,
        _created_at: Instant,
    ) -> Option<Duration> {
        entry.ttl
    }

    fn expire_after_update(
        &self,
        _key: &K,
        entry: &Entry<V>,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        entry.ttl
    }
}

/// Key-value cache with expiring entries
#[derive(Clone)]
pub struct ExpiringCache<K, V> {
    cache: Cache<K, Entry<V>>,
    default_ttl: Duration,
}

impl<K, V> Default for ExpiringCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl<K, V> fmt::Debug for ExpiringCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpiringCache")
            .field("entries", &self.cache.entry_count())
            .field("default_ttl", &self.default_ttl)
            .finish()
    }
}

impl<K, V> ExpiringCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Create an empty cache with the given default TTL
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            cache: Cache::builder().expire_after(EntryTtl).build(),
            default_ttl,
        }
    }

    /// The TTL applied by [`Expiration::Default`]
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Insert or overwrite an entry
    pub fn put(&self, key: K, value: V, expiration: Expiration) {
        let ttl = match expiration {
            Expiration::Never => None,
            Expiration::Default => Some(self.default_ttl),
            Expiration::After(ttl) => Some(ttl),
        };
        self.cache.insert(key, Entry { value, ttl });
    }

    /// Get a live entry; absent and expired keys both yield `None`
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.cache.get(key).map(|entry| entry.value)
    }

    /// Check whether a live entry exists
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Remove an entry, returning its value if it was still live
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.cache.remove(key).map(|entry| entry.value)
    }

    /// Evict expired entries now instead of on moka's own schedule
    pub fn purge_expired(&self) {
        self.cache.run_pending_tasks();
    }

    /// Number of stored entries after pending maintenance has run
    pub fn len(&self) -> usize {
        self.cache.run_pending_tasks();
        self.cache.entry_count() as usize
    }

    /// Check if the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the live entries
    pub fn entries(&self) -> Vec<(K, V)>
    where
        K: Clone,
    {
        self.cache
            .iter()
            .map(|(key, entry)| ((*key).clone(), entry.value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::thread::sleep;

    use super::*;

    const SHORT: Duration = Duration::from_millis(5);
    const WAIT: Duration = Duration::from_millis(50);

    #[test]
    fn test_put_and_get() {
        let cache = ExpiringCache::default();
        cache.put("a".to_string(), 1, Expiration::Never);

        assert_eq!(cache.get("a"), Some(1));
        assert_eq!(cache.get("b"), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_overwrite() {
        let cache = ExpiringCache::default();
        cache.put("a", 1, Expiration::Never);
        cache.put("a", 2, Expiration::Never);

        assert_eq!(cache.get("a"), Some(2));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_expired_key_not_found() {
        let cache = ExpiringCache::default();
        cache.put("gone", 1, Expiration::After(SHORT));
        cache.put("kept", 2, Expiration::Never);

        sleep(WAIT);

        assert_eq!(cache.get("gone"), None);
        assert!(!cache.contains("gone"));
        assert_eq!(cache.get("kept"), Some(2));
    }

    #[test]
    fn test_default_ttl_applies() {
        let cache = ExpiringCache::new(SHORT);
        cache.put("default", 1, Expiration::Default);
        cache.put("kept", 2, Expiration::Never);

        sleep(WAIT);
        cache.purge_expired();

        assert_eq!(cache.get("default"), None);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.entries(), vec![("kept", 2)]);
    }

    #[test]
    fn test_overwrite_resets_expiration() {
        let cache = ExpiringCache::default();
        cache.put("a", 1, Expiration::After(SHORT));
        cache.put("a", 2, Expiration::Never);

        sleep(WAIT);
        assert_eq!(cache.get("a"), Some(2));
    }

    #[test]
    fn test_remove() {
        let cache = ExpiringCache::default();
        cache.put("a", 1, Expiration::Never);

        assert_eq!(cache.remove("a"), Some(1));
        assert_eq!(cache.remove("a"), None);
        assert!(cache.is_empty());
    }
}
