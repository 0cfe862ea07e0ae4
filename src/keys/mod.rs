//! Fuzzy key generation.
//!
//! This module turns words and sentences into short k-of-window keys, the
//! fingerprints the inverted index is built on.

pub mod generator;

pub use generator::{
    compute_index_keys, compute_index_keys_from_word, compute_search_keys,
    compute_search_keys_from_word, compute_search_keys_with, select_pairs, select_triples,
    KeySet, KeyStrategy, MIN_INDEX_WORD_LEN, PAIR_WINDOW, TRIPLE_WINDOW,
};
