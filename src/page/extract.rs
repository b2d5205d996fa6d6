use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Named selector set used to pull text content from a page.
/// Iteration order is insertion order, so results come back in the order the
/// extractors were declared.
pub type ExtractionMap = IndexMap<String, String>;

/// A per-key extraction failure that was recovered into an empty value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionMiss {
    /// Key from the extraction map
    pub key: String,

    /// Why the key produced no text
    pub reason: String,
}

/// Result of extracting text from a page.
///
/// `values` always carries exactly the key set of the input map; keys whose
/// element was missing or unreadable hold an empty string and are additionally
/// reported in `misses`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Extraction {
    pub values: IndexMap<String, String>,
    pub misses: Vec<ExtractionMiss>,
}

impl Extraction {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: IndexMap::with_capacity(capacity),
            misses: Vec::new(),
        }
    }

    /// Record a successfully extracted value
    pub fn record(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }

    /// Record a recovered failure: the key maps to an empty string and the
    /// reason is kept on the side
    pub fn record_miss(&mut self, key: &str, reason: String) {
        self.values.insert(key.to_string(), String::new());
        self.misses.push(ExtractionMiss {
            key: key.to_string(),
            reason,
        });
    }

    /// Extracted text for `key`, if the key was part of the extraction map
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether every key resolved to an element
    pub fn is_complete(&self) -> bool {
        self.misses.is_empty()
    }
}
