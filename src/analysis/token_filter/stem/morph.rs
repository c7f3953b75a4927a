//! Adapter for an external morphological analyzer.
//!
//! The analyzer itself lives outside this crate. [`MorphAnalyzerStemmer`]
//! turns it into a [`Stemmer`] that never fails: errors, missing results,
//! blank results and panics all leave the word as it was.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use super::Stemmer;
use crate::error::Result;

/// Contract expected from a morphological analyzer.
pub trait MorphAnalyzer: Send + Sync {
    /// Reduce `word` to its stem, or `None` if the analyzer does not know it.
    fn stem(&self, word: &str) -> Result<Option<String>>;

    /// Reduce `word` to its dictionary form, or `None` if unknown.
    fn lemmatize(&self, word: &str) -> Result<Option<String>>;

    /// Get the name of this analyzer.
    fn name(&self) -> &'static str;
}

/// Which analyzer operation the adapter calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyzerMode {
    Stem,
    #[default]
    Lemmatize,
}

impl std::fmt::Display for AnalyzerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalyzerMode::Stem => write!(f, "stem"),
            AnalyzerMode::Lemmatize => write!(f, "lemmatize"),
        }
    }
}

/// [`Stemmer`] backed by a [`MorphAnalyzer`].
#[derive(Clone)]
pub struct MorphAnalyzerStemmer {
    analyzer: Arc<dyn MorphAnalyzer>,
    mode: AnalyzerMode,
}

impl MorphAnalyzerStemmer {
    /// Wrap `analyzer`, lemmatizing by default.
    pub fn new(analyzer: Arc<dyn MorphAnalyzer>) -> Self {
        Self::with_mode(analyzer, AnalyzerMode::default())
    }

    /// Wrap `analyzer` with an explicit mode.
    pub fn with_mode(analyzer: Arc<dyn MorphAnalyzer>, mode: AnalyzerMode) -> Self {
        MorphAnalyzerStemmer { analyzer, mode }
    }

    pub fn mode(&self) -> AnalyzerMode {
        self.mode
    }

    fn call(&self, word: &str) -> Result<Option<String>> {
        match self.mode {
            AnalyzerMode::Stem => self.analyzer.stem(word),
            AnalyzerMode::Lemmatize => self.analyzer.lemmatize(word),
        }
    }
}

impl std::fmt::Debug for MorphAnalyzerStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MorphAnalyzerStemmer")
            .field("analyzer", &self.analyzer.name())
            .field("mode", &self.mode)
            .finish()
    }
}

impl Stemmer for MorphAnalyzerStemmer {
    fn stem(&self, word: &str) -> String {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.call(word)));

        match outcome {
            Ok(Ok(Some(reduced))) if !reduced.trim().is_empty() => reduced,
            Ok(Ok(_)) => {
                debug!(
                    "analyzer '{}' had no {} for '{word}'",
                    self.analyzer.name(),
                    self.mode
                );
                word.to_string()
            }
            Ok(Err(e)) => {
                debug!("analyzer '{}' failed on '{word}': {e}", self.analyzer.name());
                word.to_string()
            }
            Err(_) => {
                debug!("analyzer '{}' panicked on '{word}'", self.analyzer.name());
                word.to_string()
            }
        }
    }

    fn name(&self) -> &'static str {
        "morph"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UznlpError;

    /// Stems by cutting "lar", lemmatizes by appending "moq".
    struct StubAnalyzer;

    impl MorphAnalyzer for StubAnalyzer {
        fn stem(&self, word: &str) -> Result<Option<String>> {
            Ok(word.strip_suffix("lar").map(str::to_string))
        }

        fn lemmatize(&self, word: &str) -> Result<Option<String>> {
            Ok(Some(format!("{word}moq")))
        }

        fn name(&self) -> &'static str {
            "stub"
        }
    }

    struct BrokenAnalyzer;

    impl MorphAnalyzer for BrokenAnalyzer {
        fn stem(&self, _word: &str) -> Result<Option<String>> {
            Err(UznlpError::analysis("model not loaded"))
        }

        fn lemmatize(&self, _word: &str) -> Result<Option<String>> {
            panic!("index out of range")
        }

        fn name(&self) -> &'static str {
            "broken"
        }
    }

    struct BlankAnalyzer;

    impl MorphAnalyzer for BlankAnalyzer {
        fn stem(&self, _word: &str) -> Result<Option<String>> {
            Ok(Some(String::new()))
        }

        fn lemmatize(&self, _word: &str) -> Result<Option<String>> {
            Ok(Some("  ".to_string()))
        }

        fn name(&self) -> &'static str {
            "blank"
        }
    }

    #[test]
    fn test_default_mode_is_lemmatize() {
        let stemmer = MorphAnalyzerStemmer::new(Arc::new(StubAnalyzer));
        assert_eq!(stemmer.mode(), AnalyzerMode::Lemmatize);
        assert_eq!(stemmer.stem("o'qi"), "o'qimoq");
    }

    #[test]
    fn test_stem_mode() {
        let stemmer = MorphAnalyzerStemmer::with_mode(Arc::new(StubAnalyzer), AnalyzerMode::Stem);
        assert_eq!(stemmer.stem("kitoblar"), "kitob");
        // None falls back
        assert_eq!(stemmer.stem("kitob"), "kitob");
    }

    #[test]
    fn test_error_falls_back() {
        let stemmer = MorphAnalyzerStemmer::with_mode(Arc::new(BrokenAnalyzer), AnalyzerMode::Stem);
        assert_eq!(stemmer.stem("maktablar"), "maktablar");
    }

    #[test]
    fn test_panic_falls_back() {
        let stemmer = MorphAnalyzerStemmer::new(Arc::new(BrokenAnalyzer));
        assert_eq!(stemmer.stem("maktablar"), "maktablar");
    }

    #[test]
    fn test_blank_output_falls_back() {
        let analyzer: Arc<dyn MorphAnalyzer> = Arc::new(BlankAnalyzer);
        let stem = MorphAnalyzerStemmer::with_mode(analyzer.clone(), AnalyzerMode::Stem);
        let lemma = MorphAnalyzerStemmer::with_mode(analyzer, AnalyzerMode::Lemmatize);
        assert_eq!(stem.stem("uylar"), "uylar");
        assert_eq!(lemma.stem("uylar"), "uylar");
    }

    #[test]
    fn test_mode_serde() {
        let mode: AnalyzerMode = serde_json::from_str("\"stem\"").unwrap();
        assert_eq!(mode, AnalyzerMode::Stem);
        assert_eq!(
            serde_json::to_string(&AnalyzerMode::Lemmatize).unwrap(),
            "\"lemmatize\""
        );
    }

    #[test]
    fn test_stemmer_name() {
        let stemmer = MorphAnalyzerStemmer::new(Arc::new(StubAnalyzer));
        assert_eq!(Stemmer::name(&stemmer), "morph");
    }
}
