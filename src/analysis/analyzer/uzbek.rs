//! Uzbek news text preprocessor.
//!
//! Wraps a [`PipelineAnalyzer`] configured as:
//!
//! 1. [`UzbekNormalizer`] char filters (HTML, transliteration, apostrophes,
//!    lowercase, URL/email removal, character class, whitespace)
//! 2. [`WhitespaceTokenizer`]
//! 3. [`StopFilter`] with the configured stop words
//! 4. [`ShortTokenFilter`] (single letters go, numbers stay)
//! 5. [`StemFilter`] with the configured stemmer
//!
//! and adds document-level entry points returning either the token list or
//! the tokens joined by single spaces.
//!
//! # Examples
//!
//! ```
//! use uznlp::analysis::analyzer::UzbekPreprocessor;
//!
//! let preprocessor = UzbekPreprocessor::new(["va", "bilan", "uchun", "bu"]).unwrap();
//!
//! assert_eq!(
//!     preprocessor.process("Bu <b>maktablarda</b> va universitetlarda!"),
//!     "maktab universitet"
//! );
//! assert_eq!(
//!     preprocessor.process_tokens("37 ta katta uy"),
//!     vec!["37", "ta", "katta", "uy"]
//! );
//! ```

use std::sync::Arc;

use log::{info, warn};
use rayon::prelude::*;
use serde_json::Value;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::char_filter::RegexHtmlStripper;
use crate::analysis::normalizer::UzbekNormalizer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{
    MorphAnalyzer, MorphAnalyzerStemmer, ShortTokenFilter, StemFilter, Stemmer, StopFilter,
    SuffixStemmer,
};
use crate::analysis::tokenizer::WhitespaceTokenizer;
use crate::config::{PreprocessorConfig, StemmingStrategy};
use crate::error::{Result, UznlpError};

/// End-to-end preprocessing for Uzbek text.
#[derive(Clone)]
pub struct UzbekPreprocessor {
    normalizer: UzbekNormalizer,
    stop_filter: Arc<StopFilter>,
    stemmer: Arc<dyn Stemmer>,
    inner: PipelineAnalyzer,
}

impl UzbekPreprocessor {
    /// Create a preprocessor with the given stop words and rule-based
    /// stemming.
    pub fn new<I, S>(stopwords: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::with_components(
            UzbekNormalizer::new()?,
            StopFilter::from_words(stopwords),
            Arc::new(SuffixStemmer::new()),
        ))
    }

    /// Assemble a preprocessor from its parts.
    pub fn with_components(
        normalizer: UzbekNormalizer,
        stop_filter: StopFilter,
        stemmer: Arc<dyn Stemmer>,
    ) -> Self {
        let stop_filter = Arc::new(stop_filter);
        let inner = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filters(normalizer.char_filters().iter().cloned())
            .add_filter(stop_filter.clone())
            .add_filter(Arc::new(ShortTokenFilter::new()))
            .add_filter(Arc::new(StemFilter::with_stemmer(stemmer.clone())))
            .with_name("uzbek");

        UzbekPreprocessor {
            normalizer,
            stop_filter,
            stemmer,
            inner,
        }
    }

    /// Build a preprocessor from configuration.
    ///
    /// `analyzer` is required when the configuration selects the external
    /// strategy and ignored otherwise.
    pub fn from_config(
        config: &PreprocessorConfig,
        analyzer: Option<Arc<dyn MorphAnalyzer>>,
    ) -> Result<Self> {
        let stemmer: Arc<dyn Stemmer> = match config.stemming_strategy {
            StemmingStrategy::RuleBased => match &config.suffixes {
                Some(suffixes) => Arc::new(SuffixStemmer::with_suffixes(suffixes.iter().cloned())?),
                None => Arc::new(SuffixStemmer::new()),
            },
            StemmingStrategy::ExternalAnalyzer => {
                let analyzer = analyzer.ok_or_else(|| {
                    UznlpError::config(
                        "stemming strategy 'external-analyzer' requires a morphological analyzer",
                    )
                })?;
                Arc::new(MorphAnalyzerStemmer::with_mode(analyzer, config.analyzer_mode))
            }
        };

        let normalizer = UzbekNormalizer::with_options(
            Arc::new(RegexHtmlStripper::new()?),
            config.transliterate,
        )?;
        let stop_filter = StopFilter::with_stop_words(config.resolved_stopwords()?);

        Ok(Self::with_components(normalizer, stop_filter, stemmer))
    }

    /// Preprocess `text` into space-joined tokens.
    pub fn process(&self, text: &str) -> String {
        self.process_tokens(text).join(" ")
    }

    /// Preprocess `text` into an ordered token list. Duplicates are kept.
    pub fn process_tokens(&self, text: &str) -> Vec<String> {
        match self.analyze(text) {
            Ok(tokens) => tokens
                .filter(|token| !token.is_stopped())
                .map(|token| token.text)
                .collect(),
            Err(e) => {
                warn!("analysis failed, dropping document: {e}");
                Vec::new()
            }
        }
    }

    /// Preprocess a JSON value. Anything other than a string yields an empty
    /// result.
    pub fn process_value(&self, value: &Value) -> String {
        self.process_value_tokens(value).join(" ")
    }

    /// Token list form of [`process_value`](Self::process_value).
    pub fn process_value_tokens(&self, value: &Value) -> Vec<String> {
        match value {
            Value::String(text) => self.process_tokens(text),
            _ => Vec::new(),
        }
    }

    /// Preprocess documents in parallel. Output order matches input order.
    pub fn process_batch<S>(&self, texts: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        let processed: Vec<String> = texts
            .par_iter()
            .map(|text| self.process(text.as_ref()))
            .collect();
        info!("processed batch of {} documents", processed.len());
        processed
    }

    /// Token list form of [`process_batch`](Self::process_batch).
    pub fn process_batch_tokens<S>(&self, texts: &[S]) -> Vec<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        let processed: Vec<Vec<String>> = texts
            .par_iter()
            .map(|text| self.process_tokens(text.as_ref()))
            .collect();
        info!("processed batch of {} documents", processed.len());
        processed
    }

    /// Preprocess JSON values in parallel, as token lists.
    pub fn process_values_batch(&self, values: &[Value]) -> Vec<Vec<String>> {
        let processed: Vec<Vec<String>> = values
            .par_iter()
            .map(|value| self.process_value_tokens(value))
            .collect();
        info!("processed batch of {} documents", processed.len());
        processed
    }

    /// Normalize without tokenizing.
    pub fn clean_text_robust(&self, text: &str) -> String {
        self.normalizer.clean_text_robust(text)
    }

    pub fn normalizer(&self) -> &UzbekNormalizer {
        &self.normalizer
    }

    pub fn stop_filter(&self) -> &StopFilter {
        &self.stop_filter
    }

    pub fn stemmer(&self) -> &Arc<dyn Stemmer> {
        &self.stemmer
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Analyzer for UzbekPreprocessor {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "uzbek"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl std::fmt::Debug for UzbekPreprocessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UzbekPreprocessor")
            .field("stop_words", &self.stop_filter.len())
            .field("stemmer", &self.stemmer.name())
            .field("inner", &self.inner)
            .finish()
    }
}
