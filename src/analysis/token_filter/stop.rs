//! Stop filter implementation.
//!
//! Removes tokens that exactly match an entry of the stop word set. Matching
//! happens on normalized tokens, so stop words should be written in
//! normalized form (Latin, lowercase, ASCII apostrophe).
//!
//! # Examples
//!
//! ```
//! use uznlp::analysis::token_filter::Filter;
//! use uznlp::analysis::token_filter::stop::StopFilter;
//! use uznlp::analysis::token::Token;
//!
//! let filter = StopFilter::from_words(vec!["va", "bilan", "uchun", "bu"]);
//! let tokens = vec![
//!     Token::new("bu", 0),
//!     Token::new("maktab", 1),
//!     Token::new("va", 2),
//!     Token::new("universitet", 3),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "maktab");
//! assert_eq!(result[1].text, "universitet");
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Common Uzbek function words in normalized Latin spelling.
const DEFAULT_UZBEK_STOP_WORDS: &[&str] = &[
    "agar", "ammo", "balki", "biroq", "bilan", "bir", "biz", "bizning", "bo'lgan", "bo'ladi",
    "bo'lib", "bo'yicha", "bu", "bunda", "chunki", "deb", "edi", "ekan", "emas", "endi", "esa",
    "faqat", "hali", "ham", "hamda", "har", "haqida", "kabi", "keyin", "lekin", "mazkur", "men",
    "na", "o'z", "oldin", "orqali", "qilib", "sen", "shu", "siz", "u", "uchun", "ular", "uning",
    "ushbu", "va", "ya'ni", "yana", "yoki",
];

/// Default Uzbek stop words as a HashSet.
pub static DEFAULT_UZBEK_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_UZBEK_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that removes stop words from the token stream.
///
/// Stopped tokens are dropped by default; with `remove_stopped(false)` they
/// are kept and marked instead, so later filters skip them.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
    /// Whether to remove stopped tokens entirely or just mark them as stopped
    remove_stopped: bool,
}

impl StopFilter {
    /// Create a new stop filter with the built-in Uzbek stop words.
    ///
    /// ```
    /// use uznlp::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::new();
    /// assert!(filter.is_stop_word("va"));
    /// assert!(!filter.is_stop_word("maktab"));
    /// ```
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_UZBEK_STOP_WORDS_SET.clone())
    }

    /// Create a stop filter that removes nothing.
    pub fn empty() -> Self {
        Self::with_stop_words(HashSet::new())
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
            remove_stopped: true,
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Set whether to remove stopped tokens entirely or just mark them as stopped.
    pub fn remove_stopped(mut self, remove: bool) -> Self {
        self.remove_stopped = remove;
        self
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter_map(|token| {
                if token.is_stopped() {
                    Some(token)
                } else if self.is_stop_word(&token.text) {
                    if self.remove_stopped {
                        None
                    } else {
                        Some(token.stop())
                    }
                } else {
                    Some(token)
                }
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
