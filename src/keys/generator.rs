//! k-of-window key generation.
//!
//! A word is fingerprinted by every ordered choice of `k` characters from its
//! first `W` characters. Keys built this way survive small edits:
//!
//! - Insertion: `query` vs `querya` still share the 3-of-5 keys, and anything
//!   past the sixth character of an indexed word is ignored entirely.
//! - Deletion: `querA` vs `quer` share the 3-of-4 keys, which the 3-of-6 window
//!   of the longer word already contains.
//! - Truncation: `que` vs `query` share 2-of-3 keys, generated for both words as
//!   part of their 2-of-4 window.
//!
//! Per word there are at most C(6,3) + C(4,2) + 1 = 27 keys, so the cost of
//! keying a sentence grows with its word count, never with word length.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Characters considered when choosing 3-character keys.
pub const TRIPLE_WINDOW: usize = 6;

/// Characters considered when choosing 2-character keys.
pub const PAIR_WINDOW: usize = 4;

/// Indexed words shorter than this are skipped. Query words have no floor.
pub const MIN_INDEX_WORD_LEN: usize = 3;

/// How query words are turned into keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyStrategy {
    /// Same keys as indexing: triples, pairs and the first letter.
    /// Slower per query, better ranking.
    #[default]
    #[serde(rename = "index")]
    IndexKeys,

    /// A single family of keys chosen by word length. Cheaper lookups.
    #[serde(rename = "search")]
    SearchKeys,
}

impl KeyStrategy {
    /// Name used in configuration values.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IndexKeys => "index",
            Self::SearchKeys => "search",
        }
    }
}

impl fmt::Display for KeyStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "index" => Ok(Self::IndexKeys),
            "search" => Ok(Self::SearchKeys),
            other => Err(format!("Expected 'index' or 'search', got: {}", other)),
        }
    }
}

/// Ordered set of keys: insertion order is kept and repeats are dropped.
#[derive(Debug, Clone, Default)]
pub struct KeySet {
    keys: Vec<String>,
    seen: HashSet<String>,
}

impl KeySet {
    /// Create an empty key set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a key unless it is already present.
    ///
    /// Returns `true` if the key was new.
    pub fn push(&mut self, key: String) -> bool {
        if self.seen.contains(&key) {
            return false;
        }
        self.seen.insert(key.clone());
        self.keys.push(key);
        true
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.keys
    }

    pub fn into_vec(self) -> Vec<String> {
        self.keys
    }
}

/// All 2-character keys from the first `window` characters of `word`.
///
/// Pass `usize::MAX` to use the whole word.
pub fn select_pairs(word: &str, window: usize) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut keys = KeySet::new();
    push_pairs(&chars, window, &mut keys);
    keys.into_vec()
}

/// All 3-character keys from the first `window` characters of `word`.
///
/// Pass `usize::MAX` to use the whole word.
pub fn select_triples(word: &str, window: usize) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut keys = KeySet::new();
    push_triples(&chars, window, &mut keys);
    keys.into_vec()
}

/// Keys for a single, already lowercased word as used at index time.
///
/// Order is 3-of-6 keys, then 2-of-4 keys, then the first letter.
pub fn compute_index_keys_from_word(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut keys = KeySet::new();
    push_index_keys(&chars, &mut keys);
    keys.into_vec()
}

/// Keys for a single, already lowercased word using the lighter search strategy.
pub fn compute_search_keys_from_word(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut keys = KeySet::new();
    push_search_keys(&chars, &mut keys);
    keys.into_vec()
}

/// Keys for a label being indexed.
///
/// Splits on single spaces, lowercases each word and skips words shorter
/// than [`MIN_INDEX_WORD_LEN`]. Keys are unique across the whole label.
pub fn compute_index_keys(sentence: &str) -> Vec<String> {
    let mut keys = KeySet::new();

    for word in sentence.split(' ') {
        let chars: Vec<char> = word.to_lowercase().chars().collect();
        if chars.len() < MIN_INDEX_WORD_LEN {
            continue;
        }
        push_index_keys(&chars, &mut keys);
    }

    keys.into_vec()
}

/// Keys for a query using the default [`KeyStrategy::IndexKeys`] strategy.
pub fn compute_search_keys(sentence: &str) -> Vec<String> {
    compute_search_keys_with(sentence, KeyStrategy::default())
}

/// Keys for a query. Every non-empty word contributes, however short.
pub fn compute_search_keys_with(sentence: &str, strategy: KeyStrategy) -> Vec<String> {
    let mut keys = KeySet::new();

    for word in sentence.split(' ') {
        let chars: Vec<char> = word.to_lowercase().chars().collect();
        match strategy {
            KeyStrategy::IndexKeys => push_index_keys(&chars, &mut keys),
            KeyStrategy::SearchKeys => push_search_keys(&chars, &mut keys),
        }
    }

    keys.into_vec()
}

fn push_index_keys(chars: &[char], keys: &mut KeySet) {
    let Some(&first) = chars.first() else {
        return;
    };

    if chars.len() >= 3 {
        push_triples(chars, TRIPLE_WINDOW, keys);
    }

    if chars.len() >= 2 {
        push_pairs(chars, PAIR_WINDOW, keys);
    }

    keys.push(first.to_string());
}

// Long words only get triples, short ones fall back to pairs and then the
// first letter. 3-of-3 rides along with the pairs to ease the switch.
fn push_search_keys(chars: &[char], keys: &mut KeySet) {
    let Some(&first) = chars.first() else {
        return;
    };
    let len = chars.len();

    if len >= 3 {
        push_triples(chars, TRIPLE_WINDOW, keys);
    }

    if len <= 4 {
        push_pairs(chars, PAIR_WINDOW, keys);

        if len <= 2 {
            keys.push(first.to_string());
        }
    }
}

fn push_pairs(chars: &[char], window: usize, keys: &mut KeySet) {
    let len = chars.len().min(window);

    for i in 0..len {
        for j in (i + 1)..len {
            keys.push([chars[i], chars[j]].iter().collect());
        }
    }
}

fn push_triples(chars: &[char], window: usize, keys: &mut KeySet) {
    let len = chars.len().min(window);

    for i in 0..len {
        for j in (i + 1)..len {
            for k in (j + 1)..len {
                keys.push([chars[i], chars[j], chars[k]].iter().collect());
            }
        }
    }
}
