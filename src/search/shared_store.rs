//! Thread-safe handle around an [`IndexStore`].
//!
//! Adds take the write lock so a reader never sees an item that is stored but
//! only partly registered in the posting lists. Searches take the read lock
//! and may run in parallel with each other.

use super::index_store::{AddOutcome, IndexStore, ScoredMatch};
use crate::config::IndexConfig;
use crate::observability::{MetricsTracker, Timer};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A shareable fuzzy index. Clones refer to the same index and metrics.
///
/// Search results are cloned out of the index, so for large items consider
/// storing `Arc<T>`.
pub struct SharedIndexStore<T> {
    store: Arc<RwLock<IndexStore<T>>>,
    metrics: MetricsTracker,
}

impl<T> SharedIndexStore<T> {
    /// Create a new empty shared index with the default configuration.
    pub fn new() -> Self {
        Self::with_config(IndexConfig::default())
    }

    /// Create a new empty shared index with the given configuration.
    pub fn with_config(config: IndexConfig) -> Self {
        Self::from_store(IndexStore::with_config(config))
    }

    /// Wrap an already populated index.
    pub fn from_store(store: IndexStore<T>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            metrics: MetricsTracker::new(),
        }
    }

    // Caller code only runs under the lock as the accessor, before any
    // mutation, so a poisoned index is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, IndexStore<T>> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, IndexStore<T>> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Index an item whose label is the item itself.
    pub fn add(&self, item: T) -> AddOutcome
    where
        T: AsRef<str>,
    {
        let outcome = self.write().add(item);
        self.metrics.track_add(outcome);
        outcome
    }

    /// Index an item under the label returned by `accessor`.
    pub fn add_with<F>(&self, item: T, accessor: F) -> AddOutcome
    where
        F: FnOnce(&T) -> String,
    {
        let outcome = self.write().add_with(item, accessor);
        self.metrics.track_add(outcome);
        outcome
    }

    /// Search for items close to `query`, best match first.
    pub fn search(&self, query: &str) -> Vec<T>
    where
        T: Clone,
    {
        let timer = Timer::new("search");
        let results: Vec<T> = self.read().search(query).into_iter().cloned().collect();
        self.metrics.track_search(timer.finish(), results.len());
        results
    }

    /// Ranked and filtered hits for `query`.
    pub fn search_scored(&self, query: &str) -> Vec<ScoredMatch> {
        let timer = Timer::new("search_scored");
        let matches = self.read().search_scored(query);
        self.metrics.track_search(timer.finish(), matches.len());
        matches
    }

    /// Number of indexed items.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn metrics(&self) -> &MetricsTracker {
        &self.metrics
    }
}

impl<T> Clone for SharedIndexStore<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            metrics: self.metrics.clone(),
        }
    }
}

impl<T> Default for SharedIndexStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for SharedIndexStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedIndexStore")
            .field("items", &self.len())
            .field("metrics", &self.metrics.snapshot())
            .finish()
    }
}
