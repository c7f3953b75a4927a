//! Analyzer implementations that combine char filters, tokenizers and filters.

mod analyzer;
mod pipeline;
mod uzbek;

pub use analyzer::Analyzer;
pub use pipeline::PipelineAnalyzer;
pub use uzbek::UzbekPreprocessor;
