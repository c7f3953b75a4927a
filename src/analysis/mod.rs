//! Text analysis for Uzbek.
//!
//! The building blocks follow a char filter → tokenizer → token filter
//! design: [`char_filter`]s normalize raw text, a [`tokenizer`] splits it and
//! [`token_filter`]s drop or rewrite tokens. [`analyzer`] assembles them into
//! pipelines, including the complete [`UzbekPreprocessor`].

pub mod analyzer;
pub mod char_filter;
pub mod normalizer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
pub mod transliteration;

// Re-export commonly used types
pub use analyzer::{Analyzer, PipelineAnalyzer, UzbekPreprocessor};
pub use normalizer::UzbekNormalizer;
pub use token::{Token, TokenStream, TokenType};
pub use transliteration::{to_cyrillic, to_latin, unify_apostrophes};
