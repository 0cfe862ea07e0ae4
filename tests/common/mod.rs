//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Once;
use typeahead_index::IndexStore;

static TRACING: Once = Once::new();

/// Words indexed by the shared fixture, in insertion order (indices 0-6).
pub const FIXTURE_WORDS: [&str; 7] = ["hello", "cello", "shall", "shill", "chill", "hills", "hells"];

/// Install a test subscriber once. Honors `RUST_LOG`, silent by default.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// A store holding the fixture words as owned strings.
pub fn fixture_store() -> IndexStore<String> {
    init_tracing();

    let mut store = IndexStore::new();
    for word in FIXTURE_WORDS {
        store.add(word.to_string());
    }
    store
}

/// A record indexed through an accessor.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    pub fn new(id: u32, first_name: &str, last_name: &str) -> Self {
        Self {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A small directory of people used by the accessor tests.
pub fn people() -> Vec<Person> {
    vec![
        Person::new(1, "John", "Smith"),
        Person::new(2, "Jane", "Doe"),
        Person::new(3, "Johnny", "Appleseed"),
        Person::new(4, "Joan", "Smythe"),
        Person::new(5, "Bob", "Jones"),
    ]
}
