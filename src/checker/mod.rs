pub mod distance;
pub mod store;
pub mod suggestions;
pub mod tokenizer;

use crate::Config;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::{Duration, Instant};
use store::WordStore;
use thiserror::Error;
use tokenizer::Words;

/// A query containing anything but ASCII letters. Rejected before it
/// reaches the dictionary.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("word contains non-alphabetic characters")]
pub struct InvalidWord;

/// Outcome of checking a single query word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Misspelled { suggestions: Vec<String> },
}

/// How the dictionary load went: entry count and wall time.
#[derive(Debug, Clone, Copy)]
pub struct LoadStats {
    pub words: usize,
    pub elapsed: Duration,
}

pub struct SpellChecker {
    store: WordStore,
    max_suggestions: usize,
    load_stats: LoadStats,
}

impl SpellChecker {
    pub fn new(config: &Config) -> Result<Self> {
        Self::from_path(
            &config.dictionary,
            config.bucket_capacity,
            config.max_suggestions,
        )
    }

    /// Build the dictionary from a word-list file (useful for testing).
    pub fn from_path(path: &Path, capacity: usize, max_suggestions: usize) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open dictionary: {}", path.display()))?;

        let started = Instant::now();
        let mut store = WordStore::with_capacity(capacity);
        for word in Words::new(BufReader::new(file)) {
            let word = word
                .with_context(|| format!("Failed to read dictionary: {}", path.display()))?;
            store.insert_or_init(&word, 0);
        }

        let load_stats = LoadStats {
            words: store.len(),
            elapsed: started.elapsed(),
        };

        Ok(Self {
            store,
            max_suggestions,
            load_stats,
        })
    }

    pub fn load_stats(&self) -> LoadStats {
        self.load_stats
    }

    /// Exact membership test against the lowercased dictionary.
    pub fn is_correct(&self, word: &str) -> bool {
        self.store.contains_key(word)
    }

    /// Check an already-normalized word. Known words short-circuit;
    /// ranking only runs for misses.
    pub fn check(&self, word: &str) -> Verdict {
        if self.is_correct(word) {
            return Verdict::Correct;
        }

        let suggestions = suggestions::suggest(&self.store, word, self.max_suggestions)
            .into_iter()
            .map(|c| c.word.to_owned())
            .collect();

        Verdict::Misspelled { suggestions }
    }

    pub fn store(&self) -> &WordStore {
        &self.store
    }
}

/// Lowercase a raw query, rejecting anything outside ASCII letters.
pub fn normalize_query(raw: &str) -> Result<String, InvalidWord> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(InvalidWord);
    }
    Ok(raw.to_ascii_lowercase())
}
