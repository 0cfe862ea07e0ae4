//! Inverted index store for fuzzy typeahead search.
//!
//! [`IndexStore`] is the single-threaded core; [`SharedIndexStore`] wraps it
//! for one writer and many concurrent readers.

pub mod index_store;
pub mod shared_store;

pub use index_store::{AddOutcome, IndexStore, ScoredMatch, QUALITY_RATIO};
pub use shared_store::SharedIndexStore;
