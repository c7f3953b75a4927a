//! Lemma dictionary loaded from a tab-separated file.
//!
//! Each non-blank line not starting with `#` is `word<TAB>lemma` or
//! `word<TAB>lemma<TAB>stem`. Words are looked up in normalized form
//! (lowercase, ASCII apostrophe), so the file may use any apostrophe variant.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::morph::MorphAnalyzer;
use crate::analysis::transliteration::unify_apostrophes;
use crate::error::{Result, UznlpError};

#[derive(Debug, Clone)]
struct Entry {
    lemma: String,
    stem: Option<String>,
}

/// In-memory [`MorphAnalyzer`] backed by a word list.
#[derive(Debug, Clone, Default)]
pub struct LemmaDictionary {
    entries: HashMap<String, Entry>,
}

impl LemmaDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a dictionary file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref()).map_err(|e| {
            UznlpError::config(format!(
                "cannot open lemma dictionary {}: {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse dictionary lines from a reader.
    ///
    /// Later lines override earlier ones for the same word.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut dictionary = Self::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut columns = line.split('\t').map(str::trim);
            let word = columns.next().unwrap_or_default();
            let lemma = columns.next().unwrap_or_default();
            if word.is_empty() || lemma.is_empty() {
                return Err(UznlpError::config(format!(
                    "lemma dictionary line {}: expected word<TAB>lemma[<TAB>stem]",
                    index + 1
                )));
            }
            let stem = columns.next().filter(|s| !s.is_empty());

            dictionary.insert(word, lemma, stem);
        }

        Ok(dictionary)
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, word: &str, lemma: &str, stem: Option<&str>) {
        self.entries.insert(
            normalize_key(word),
            Entry {
                lemma: lemma.to_string(),
                stem: stem.map(str::to_string),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize_key(word: &str) -> String {
    unify_apostrophes(word).to_lowercase()
}

impl MorphAnalyzer for LemmaDictionary {
    fn stem(&self, word: &str) -> Result<Option<String>> {
        Ok(self
            .entries
            .get(&normalize_key(word))
            .and_then(|entry| entry.stem.clone()))
    }

    fn lemmatize(&self, word: &str) -> Result<Option<String>> {
        Ok(self
            .entries
            .get(&normalize_key(word))
            .map(|entry| entry.lemma.clone()))
    }

    fn name(&self) -> &'static str {
        "lemma_dictionary"
    }
}
