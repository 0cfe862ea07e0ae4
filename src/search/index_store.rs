//! Inverted index over k-of-window keys.
//!
//! Items are stored in insertion order and identified by their position. Each
//! fuzzy key maps to the positions of the items whose label produced it. A
//! search keys the query the same way, counts how many of its keys every item
//! shares, and ranks by that count.

use crate::config::IndexConfig;
use crate::keys::{compute_index_keys, compute_search_keys_with};
use std::collections::{HashMap, HashSet};

/// Matches scoring at or below this fraction of the best count are dropped.
pub const QUALITY_RATIO: f64 = 0.5;

/// What happened to an item passed to [`IndexStore::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The item was stored at this index.
    Indexed(usize),

    /// An item with exactly the same label is already indexed.
    Duplicate,

    /// The label produced no keys (empty, or only words under three characters).
    NoKeys,
}

impl AddOutcome {
    /// Whether the item was actually stored.
    pub fn is_indexed(&self) -> bool {
        matches!(self, Self::Indexed(_))
    }
}

/// A ranked hit: item index and number of query keys it shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMatch {
    /// Position of the item in the store
    pub index: usize,

    /// Number of distinct query keys registered by the item
    pub count: usize,
}

/// Append-only fuzzy index of items keyed by a text label.
#[derive(Debug, Clone)]
pub struct IndexStore<T> {
    /// Posting lists: key -> indices of items that registered it
    indices_for_key: HashMap<String, Vec<usize>>,

    /// Indexed items, in insertion order
    items: Vec<T>,

    /// Labels already indexed
    labels: HashSet<String>,

    config: IndexConfig,
}

impl<T> IndexStore<T> {
    /// Create a new empty index with the default configuration.
    pub fn new() -> Self {
        Self::with_config(IndexConfig::default())
    }

    /// Create a new empty index with the given configuration.
    pub fn with_config(config: IndexConfig) -> Self {
        Self {
            indices_for_key: HashMap::new(),
            items: Vec::new(),
            labels: HashSet::new(),
            config,
        }
    }

    /// Index an item whose label is the item itself.
    pub fn add(&mut self, item: T) -> AddOutcome
    where
        T: AsRef<str>,
    {
        let label = item.as_ref().to_string();
        self.insert(item, label)
    }

    /// Index an item under the label returned by `accessor`.
    ///
    /// ```
    /// use typeahead_index::IndexStore;
    ///
    /// struct City { name: String, population: u32 }
    ///
    /// let mut store = IndexStore::new();
    /// store.add_with(City { name: "Lisbon".into(), population: 545_000 }, |c| c.name.clone());
    ///
    /// let hits = store.search("lisbn");
    /// assert_eq!(hits[0].population, 545_000);
    /// ```
    pub fn add_with<F>(&mut self, item: T, accessor: F) -> AddOutcome
    where
        F: FnOnce(&T) -> String,
    {
        let label = accessor(&item);
        self.insert(item, label)
    }

    fn insert(&mut self, item: T, label: String) -> AddOutcome {
        if self.labels.contains(&label) {
            tracing::trace!(label = %label, "Skipping duplicate label");
            return AddOutcome::Duplicate;
        }

        let keys = compute_index_keys(&label);
        if keys.is_empty() {
            tracing::trace!(label = %label, "Skipping label without keys");
            return AddOutcome::NoKeys;
        }

        let idx = self.items.len();
        self.items.push(item);
        self.register_item(idx, keys);

        tracing::trace!(label = %label, index = idx, "Indexed item");
        self.labels.insert(label);

        AddOutcome::Indexed(idx)
    }

    fn register_item(&mut self, idx: usize, keys: Vec<String>) {
        for key in keys {
            self.indices_for_key.entry(key).or_default().push(idx);
        }
    }

    /// Search for items whose label is close to `query`.
    ///
    /// Items are returned best match first. Returns an empty vector when no
    /// key of the query is shared with any indexed label.
    pub fn search(&self, query: &str) -> Vec<&T> {
        let mut matches = self.search_scored(query);

        if let Some(limit) = self.config.max_results {
            matches.truncate(limit);
        }

        matches.iter().map(|m| &self.items[m.index]).collect()
    }

    /// Ranked and filtered hits for `query`, without materializing items.
    pub fn search_scored(&self, query: &str) -> Vec<ScoredMatch> {
        let keys = compute_search_keys_with(query, self.config.key_strategy);
        let matches = self.search_keys(&keys);

        tracing::debug!(
            query = %query,
            key_count = keys.len(),
            result_count = matches.len(),
            "Search completed"
        );

        matches
    }

    /// Rank items by how many of `keys` they registered.
    ///
    /// When more than one item matches, only those scoring strictly more than
    /// half of the best count are kept. Ties keep ascending item order.
    pub fn search_keys<S: AsRef<str>>(&self, keys: &[S]) -> Vec<ScoredMatch> {
        let mut matches = self.retrieve_counts(keys);

        if matches.len() > 1 {
            let threshold = matches[0].count as f64 * QUALITY_RATIO;
            matches.retain(|m| m.count as f64 > threshold);
        }

        matches
    }

    fn retrieve_counts<S: AsRef<str>>(&self, keys: &[S]) -> Vec<ScoredMatch> {
        let mut count_per_index: HashMap<usize, usize> = HashMap::new();

        for key in keys {
            if let Some(indices) = self.indices_for_key.get(key.as_ref()) {
                for &idx in indices {
                    *count_per_index.entry(idx).or_insert(0) += 1;
                }
            }
        }

        let mut matches: Vec<ScoredMatch> = count_per_index
            .into_iter()
            .map(|(index, count)| ScoredMatch { index, count })
            .collect();

        matches.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.index.cmp(&b.index)));

        matches
    }

    /// Posting list for a key, if any item registered it.
    pub fn indices_for_key(&self, key: &str) -> Option<&[usize]> {
        self.indices_for_key.get(key).map(Vec::as_slice)
    }

    /// All indexed items, in insertion order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Item at a given index.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Whether an item with exactly this label has been indexed.
    pub fn contains_label(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    /// Number of indexed items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct keys in the index.
    pub fn key_count(&self) -> usize {
        self.indices_for_key.len()
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }
}

impl<T> Default for IndexStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
