//! Typeahead Index - an in-memory fuzzy text index for typeahead search.
//!
//! Items are registered under a text label and found again from queries that
//! are misspelled, truncated or have characters swapped. Matching uses an
//! inverted index over short k-of-window subsequence keys instead of computing
//! edit distances.
//!
//! # Architecture
//!
//! - **keys**: Pure functions turning words and sentences into fuzzy keys
//! - **search**: The inverted index store and its thread-safe wrapper
//! - **config**: Query key strategy and result limit, loadable from the environment
//! - **error**: Configuration error types
//! - **observability**: Metrics counters and timing
//!
//! # Example
//!
//! ```
//! use typeahead_index::IndexStore;
//!
//! let mut store = IndexStore::new();
//! for word in ["hello", "cello", "shall", "shill", "chill", "hills", "hells"] {
//!     store.add(word);
//! }
//!
//! assert_eq!(store.search("hil"), vec![&"hills", &"shill", &"chill"]);
//! ```

pub mod config;
pub mod error;
pub mod keys;
pub mod observability;
pub mod search;

pub use config::IndexConfig;
pub use error::{ConfigError, ConfigResult};
pub use keys::{compute_index_keys, compute_search_keys, KeyStrategy};
pub use observability::{MetricsSummary, MetricsTracker, Timer};
pub use search::{AddOutcome, IndexStore, ScoredMatch, SharedIndexStore};
