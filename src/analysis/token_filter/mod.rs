//! Token filter implementations for token transformation.
//!
//! Filters receive a token stream and produce a new one. The Uzbek pipeline
//! chains them as:
//!
//! ```text
//! Tokenizer → StopFilter → ShortTokenFilter → StemFilter
//! ```
//!
//! # Available Filters
//!
//! - [`stop::StopFilter`] - Removes stop words by exact match
//! - [`short::ShortTokenFilter`] - Drops single letters but keeps numbers
//! - [`stem::StemFilter`] - Reduces words with a [`stem::Stemmer`]

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod short;
pub mod stem;
pub mod stop;

pub use short::ShortTokenFilter;
pub use stem::{
    AnalyzerMode, LemmaDictionary, MorphAnalyzer, MorphAnalyzerStemmer, StemFilter, Stemmer,
    SuffixStemmer,
};
pub use stop::StopFilter;
