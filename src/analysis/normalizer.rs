//! Uzbek text normalizer.
//!
//! Turns raw article text into CleanText: ASCII lowercase letters, digits,
//! the apostrophe and single spaces, with no leading or trailing space.
//!
//! The steps run in a fixed order because each one assumes the narrower
//! character set left by the previous ones:
//!
//! 1. HTML stripping (tags become spaces, character references are decoded)
//! 2. Cyrillic to Latin transliteration (optional, on by default)
//! 3. Apostrophe unification (‘ ’ ʻ ʼ ` become ')
//! 4. Lowercasing
//! 5. URL removal, then email removal
//! 6. Every character outside `[a-z0-9']` and whitespace becomes a space
//! 7. Whitespace collapsing and trimming
//!
//! There is no general Unicode normalization step: a combining mark on a
//! Latin letter is split off by step 6 and the letter survives.
//!
//! # Examples
//!
//! ```
//! use uznlp::analysis::normalizer::UzbekNormalizer;
//!
//! let normalizer = UzbekNormalizer::new().unwrap();
//! assert_eq!(
//!     normalizer.clean_text_robust("<p>O‘zbekiston   va G’azna!</p>"),
//!     "o'zbekiston va g'azna"
//! );
//! assert_eq!(normalizer.clean_text_robust("Yalpi ichki mahsulot 5,9 foizga"), "yalpi ichki mahsulot 5 9 foizga");
//! ```

use std::sync::Arc;

use serde_json::Value;

use crate::analysis::char_filter::{
    CharFilter, HtmlStripCharFilter, HtmlStripper, LowercaseCharFilter, MappingCharFilter,
    PatternReplaceCharFilter, RegexHtmlStripper, TransliterateCharFilter,
};
use crate::error::Result;

/// Ordered chain of char filters producing CleanText.
#[derive(Clone)]
pub struct UzbekNormalizer {
    char_filters: Vec<Arc<dyn CharFilter>>,
    transliterate: bool,
}

impl UzbekNormalizer {
    /// Create a normalizer with the regex HTML stripper and transliteration
    /// enabled.
    pub fn new() -> Result<Self> {
        Self::with_options(Arc::new(RegexHtmlStripper::new()?), true)
    }

    /// Create a normalizer with a custom HTML stripper and an explicit
    /// transliteration setting. With transliteration disabled, Cyrillic
    /// letters are dropped by the character class step.
    pub fn with_options(stripper: Arc<dyn HtmlStripper>, transliterate: bool) -> Result<Self> {
        let mut char_filters: Vec<Arc<dyn CharFilter>> =
            vec![Arc::new(HtmlStripCharFilter::with_stripper(stripper))];
        if transliterate {
            char_filters.push(Arc::new(TransliterateCharFilter::new()));
        }
        char_filters.push(Arc::new(MappingCharFilter::apostrophes()?));
        char_filters.push(Arc::new(LowercaseCharFilter::new()));
        char_filters.push(Arc::new(PatternReplaceCharFilter::urls()?));
        char_filters.push(Arc::new(PatternReplaceCharFilter::emails()?));
        char_filters.push(Arc::new(PatternReplaceCharFilter::non_word_chars()?));
        char_filters.push(Arc::new(PatternReplaceCharFilter::collapse_whitespace()?));
        char_filters.push(Arc::new(PatternReplaceCharFilter::trim()?));

        Ok(Self {
            char_filters,
            transliterate,
        })
    }

    /// Normalize raw text into CleanText. Never fails.
    pub fn clean_text_robust(&self, text: &str) -> String {
        self.char_filters
            .iter()
            .fold(text.to_string(), |current, filter| filter.filter(&current).0)
    }

    /// Normalize a JSON value. Anything other than a string yields an empty
    /// string.
    pub fn clean_value(&self, value: &Value) -> String {
        match value {
            Value::String(text) => self.clean_text_robust(text),
            _ => String::new(),
        }
    }

    /// The char filters, in application order.
    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }

    /// Whether Cyrillic input is transliterated.
    pub fn transliterates(&self) -> bool {
        self.transliterate
    }
}

impl std::fmt::Debug for UzbekNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UzbekNormalizer")
            .field(
                "char_filters",
                &self
                    .char_filters
                    .iter()
                    .map(|f| f.name())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
