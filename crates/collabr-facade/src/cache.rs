//! Last-write-wins query cache with staleness flags.
//!
//! The cache is the only mutable state the façade owns. Entries are keyed by
//! [`CacheKey`] and carry a staleness flag: invalidation marks an entry stale
//! so the next access re-fetches; it does not drop the value. `clear()` drops
//! everything and advances a generation counter — reads that were in flight
//! when the cache was cleared compare their captured generation on completion
//! and are discarded instead of repopulating another session's cache.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::keys::CacheKey;

struct Entry {
    value: Box<dyn Any + Send + Sync>,
    stale: bool,
}

struct State {
    entries: HashMap<CacheKey, Entry>,
    generation: u64,
}

/// Keyed mapping from cache key to last-known value plus staleness flag.
///
/// Created at session start, torn down (cleared) at logout. Explicitly owned
/// and passed around rather than ambient global state.
pub struct QueryCache {
    inner: Mutex<State>,
}

impl QueryCache {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(State {
                entries: HashMap::new(),
                generation: 0,
            }),
        }
    }

    /// Current generation. Captured before a fetch and passed back to
    /// [`QueryCache::put_if_current`].
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Returns the cached value for `key` if present, fresh, and of type `T`.
    #[must_use]
    pub fn get_fresh<T>(&self, key: &CacheKey) -> Option<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        let state = self.lock();
        let entry = state.entries.get(key)?;
        if entry.stale {
            return None;
        }
        entry.value.downcast_ref::<T>().cloned()
    }

    /// Stores `value` under `key`, last write wins — unless the cache moved
    /// past `generation` (a session clear happened while the fetch was in
    /// flight), in which case the result is discarded. Returns whether the
    /// value was stored.
    pub fn put_if_current<T>(&self, key: CacheKey, value: T, generation: u64) -> bool
    where
        T: Send + Sync + 'static,
    {
        let mut state = self.lock();
        if state.generation != generation {
            tracing::debug!(key = %key, "discarding read result fetched before session clear");
            return false;
        }
        state.entries.insert(
            key,
            Entry {
                value: Box::new(value),
                stale: false,
            },
        );
        true
    }

    /// Marks the entry under `key` stale. A missing entry is a no-op: there
    /// is nothing to serve stale in the first place.
    pub fn invalidate(&self, key: &CacheKey) {
        let mut state = self.lock();
        if let Some(entry) = state.entries.get_mut(key) {
            entry.stale = true;
            tracing::debug!(key = %key, "cache entry invalidated");
        }
    }

    /// Drops every entry and advances the generation. Cached data is
    /// principal-scoped; this runs at logout so nothing leaks across
    /// sessions.
    pub fn clear(&self) {
        let mut state = self.lock();
        let dropped = state.entries.len();
        state.entries.clear();
        state.generation += 1;
        tracing::debug!(dropped, generation = state.generation, "cache cleared");
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        // A poisoned cache mutex means a panic mid-insert; the map itself is
        // still structurally sound, so continue with it.
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}
