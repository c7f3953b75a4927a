//! # uznlp
//!
//! Normalization, tokenization and stemming for Uzbek text.
//!
//! ## Features
//!
//! - HTML stripping, Unicode normalization and Cyrillic to Latin transliteration
//! - Apostrophe unification for the many `o‘`/`g‘` spellings found online
//! - Rule-based suffix stemming, or an injected morphological analyzer
//! - Parallel batch processing
//!
//! ## Example
//!
//! ```
//! use uznlp::analysis::analyzer::UzbekPreprocessor;
//!
//! let preprocessor = UzbekPreprocessor::new(["va", "bu"]).unwrap();
//! assert_eq!(
//!     preprocessor.process("<p>Bu O‘zbekistonda kitoblar va maktablar</p>"),
//!     "o'zbekiston kitob maktab"
//! );
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
