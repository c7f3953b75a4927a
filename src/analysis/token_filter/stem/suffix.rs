//! Rule-based suffix stemmer for Uzbek.
//!
//! Uzbek builds word forms by chaining suffixes onto a root
//! (root + plural + possessive + case, e.g. `maktab-lar-imiz-da`). The
//! stemmer peels them off one at a time:
//!
//! - words shorter than 4 characters are returned unchanged;
//! - the suffix list is scanned in order, and the first suffix the word ends
//!   with whose removal leaves at least 3 characters is removed;
//! - after every removal the scan restarts from the top of the list;
//! - the word is returned once a full scan removes nothing.
//!
//! Because of the restart, list order decides which suffix wins when several
//! match; it is not a longest-match policy.
//!
//! # Examples
//!
//! ```
//! use uznlp::analysis::token_filter::stem::{Stemmer, SuffixStemmer};
//!
//! let stemmer = SuffixStemmer::new();
//! assert_eq!(stemmer.stem("maktablarimizda"), "maktab");
//! assert_eq!(stemmer.stem("bolalar"), "bola");
//! assert_eq!(stemmer.stem("uy"), "uy");
//! ```

use super::Stemmer;
use crate::error::{Result, UznlpError};

/// Possessive, plural, case and derivational suffixes, in scan order.
pub const DEFAULT_SUFFIXES: &[&str] = &[
    // possessive
    "imiz", "ingiz", "lari", "miz", "ngiz",
    // plural
    "lar",
    // case
    "ning", "ni", "ga", "da", "dan",
    // derivational
    "lik", "siz", "gi",
];

/// Longer list covering fused plural+case forms and common verbal endings.
pub const EXTENDED_SUFFIXES: &[&str] = &[
    "larning", "larniki", "larimiz", "laringiz", "larim", "laring", "lardan", "larda", "larga",
    "larni", "likni", "likka", "likda", "ning", "niki", "imiz", "miz", "ngiz", "ingiz", "si", "ni",
    "dan", "da", "ga", "ka", "qa", "la", "lar", "lik", "siz", "iy", "dagi", "dir", "moq", "yapti",
    "gan", "digan", "sa",
];

/// Words shorter than this many characters are never stemmed.
pub const MIN_WORD_LEN: usize = 4;

/// A removal must leave at least this many characters.
pub const MIN_ROOT_LEN: usize = 3;

/// Iterative, restart-from-top suffix stripper.
#[derive(Debug, Clone)]
pub struct SuffixStemmer {
    suffixes: Vec<String>,
}

impl SuffixStemmer {
    /// Create a stemmer with [`DEFAULT_SUFFIXES`].
    pub fn new() -> Self {
        Self::from_static(DEFAULT_SUFFIXES)
    }

    /// Create a stemmer with [`EXTENDED_SUFFIXES`].
    pub fn extended() -> Self {
        Self::from_static(EXTENDED_SUFFIXES)
    }

    /// Create a stemmer with a custom ordered suffix list.
    ///
    /// An empty suffix would match every word without shortening it, so it
    /// is rejected.
    pub fn with_suffixes<I, S>(suffixes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let suffixes: Vec<String> = suffixes.into_iter().map(Into::into).collect();
        if let Some(position) = suffixes.iter().position(|s| s.is_empty()) {
            return Err(UznlpError::config(format!(
                "suffix list entry {position} is empty"
            )));
        }
        Ok(SuffixStemmer { suffixes })
    }

    fn from_static(suffixes: &[&str]) -> Self {
        SuffixStemmer {
            suffixes: suffixes.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// The suffixes in scan order.
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// Remove one suffix from `word`, if any applies.
    fn strip_one<'a>(&self, word: &'a str) -> Option<&'a str> {
        self.suffixes.iter().find_map(|suffix| {
            word.strip_suffix(suffix.as_str())
                .filter(|root| root.chars().count() >= MIN_ROOT_LEN)
        })
    }
}

impl Default for SuffixStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer for SuffixStemmer {
    fn stem(&self, word: &str) -> String {
        if word.chars().count() < MIN_WORD_LEN {
            return word.to_string();
        }

        let mut current = word;
        while let Some(shorter) = self.strip_one(current) {
            current = shorter;
        }
        current.to_string()
    }

    fn name(&self) -> &'static str {
        "suffix"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_then_locative() {
        let stemmer = SuffixStemmer::new();
        assert_eq!(stemmer.stem("maktablarda"), "maktab");
        assert_eq!(stemmer.stem("kitoblarda"), "kitob");
        assert_eq!(stemmer.stem("shaharlarda"), "shahar");
    }

    #[test]
    fn test_three_suffix_chain() {
        let stemmer = SuffixStemmer::new();
        // da, then imiz, then lar
        assert_eq!(stemmer.stem("maktablarimizda"), "maktab");
    }

    #[test]
    fn test_case_suffixes() {
        let stemmer = SuffixStemmer::new();
        assert_eq!(stemmer.stem("maktabning"), "maktab");
        assert_eq!(stemmer.stem("maktabga"), "maktab");
        assert_eq!(stemmer.stem("maktabdan"), "maktab");
        assert_eq!(stemmer.stem("kitobni"), "kitob");
    }

    #[test]
    fn test_short_words_untouched() {
        let stemmer = SuffixStemmer::new();
        assert_eq!(stemmer.stem("uy"), "uy");
        assert_eq!(stemmer.stem("lar"), "lar");
        assert_eq!(stemmer.stem("oda"), "oda");
        assert_eq!(stemmer.stem(""), "");
    }

    #[test]
    fn test_root_floor_blocks_removal() {
        let stemmer = SuffixStemmer::new();
        // no listed suffix ends "bola"
        assert_eq!(stemmer.stem("bola"), "bola");
        // "onalar" -> "ona" is allowed (3 left)
        assert_eq!(stemmer.stem("onalar"), "ona");
        // "unda" -> removing "da" would leave "un"
        assert_eq!(stemmer.stem("unda"), "unda");
    }

    #[test]
    fn test_floor_checked_per_removal_not_only_at_end() {
        // "ga" cannot go (leaves "ab"), so the scan falls through to nothing
        let stemmer = SuffixStemmer::with_suffixes(["ga", "bga"]).unwrap();
        assert_eq!(stemmer.stem("abga"), "abga");
    }

    #[test]
    fn test_list_order_decides_overlaps() {
        // Same two suffixes, different order, different root
        let first = SuffixStemmer::with_suffixes(["ni", "mizni"]).unwrap();
        let second = SuffixStemmer::with_suffixes(["mizni", "ni"]).unwrap();
        assert_eq!(first.stem("uyimizni"), "uyimiz");
        assert_eq!(second.stem("uyimizni"), "uyi");
    }

    #[test]
    fn test_fused_plural_possessive() {
        let stemmer = SuffixStemmer::new();
        assert_eq!(stemmer.stem("kitoblari"), "kitob");
    }

    #[test]
    fn test_non_alphabetic_pass_through() {
        let stemmer = SuffixStemmer::new();
        assert_eq!(stemmer.stem("2024"), "2024");
        assert_eq!(stemmer.stem("o'qishmoqda"), "o'qishmoq");
    }

    #[test]
    fn test_extended_list() {
        let stemmer = SuffixStemmer::extended();
        assert_eq!(stemmer.stem("kitoblarning"), "kitob");
        assert_eq!(stemmer.stem("o'qiyapti"), "o'qi");
        assert_eq!(stemmer.stem("bormoq"), "bor");
    }

    #[test]
    fn test_empty_suffix_rejected() {
        assert!(SuffixStemmer::with_suffixes(["lar", ""]).is_err());
        assert!(SuffixStemmer::with_suffixes(Vec::<String>::new()).is_ok());
    }

    #[test]
    fn test_stemmer_name() {
        assert_eq!(SuffixStemmer::new().name(), "suffix");
    }
}
