//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the raw string before it reaches the tokenizer.
//! Every step of the Uzbek normalizer is a char filter, applied in a fixed
//! order by [`UzbekNormalizer`](crate::analysis::normalizer::UzbekNormalizer).
//!
//! # Available Filters
//!
//! - [`html_strip::HtmlStripCharFilter`] - Visible text extraction through an [`html_strip::HtmlStripper`]
//! - [`transliterate::TransliterateCharFilter`] - Cyrillic to Latin script conversion, composing decomposed letters
//! - [`mapping::MappingCharFilter`] - Literal string replacement (apostrophe unification)
//! - [`lowercase::LowercaseCharFilter`] - Unicode lowercasing
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//!
//! # Examples
//!
//! ```
//! use uznlp::analysis::char_filter::CharFilter;
//! use uznlp::analysis::char_filter::mapping::MappingCharFilter;
//!
//! let filter = MappingCharFilter::apostrophes().unwrap();
//! let (output, _) = filter.filter("O‘zbekiston");
//! assert_eq!(output, "O'zbekiston");
//! ```

/// Represents a change in the text, mapping a range in the original text
/// to a range in the new text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transformation {
    pub original_start: usize,
    pub original_end: usize,
    pub new_start: usize,
    pub new_end: usize,
}

impl Transformation {
    pub fn new(
        original_start: usize,
        original_end: usize,
        new_start: usize,
        new_end: usize,
    ) -> Self {
        Self {
            original_start,
            original_end,
            new_start,
            new_end,
        }
    }
}

/// Trait for character filters that transform text before tokenization.
///
/// Filters return the new text along with the transformations that changed
/// byte lengths, so token offsets can be mapped back to the input. A filter
/// that cannot track its changes returns no transformations.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> (String, Vec<Transformation>);

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod html_strip;
pub mod lowercase;
pub mod mapping;
pub mod pattern_replace;
pub mod transliterate;

pub use html_strip::{HtmlStripCharFilter, HtmlStripper, RegexHtmlStripper};
pub use lowercase::LowercaseCharFilter;
pub use mapping::MappingCharFilter;
pub use pattern_replace::PatternReplaceCharFilter;
pub use transliterate::TransliterateCharFilter;
