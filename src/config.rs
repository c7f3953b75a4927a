//! Preprocessor configuration.
//!
//! A [`PreprocessorConfig`] can be built in code or loaded from JSON. Every
//! field is optional in the file:
//!
//! ```json
//! {
//!   "stopwords": ["va", "bilan", "uchun", "bu"],
//!   "stopwords_path": "stopwords.txt",
//!   "stemming_strategy": "rule-based",
//!   "analyzer_mode": "lemmatize",
//!   "suffixes": ["lar", "da"],
//!   "transliterate": true
//! }
//! ```
//!
//! # Examples
//!
//! ```
//! use uznlp::config::{PreprocessorConfig, StemmingStrategy};
//!
//! let config = PreprocessorConfig::from_json_str(r#"{"stopwords": ["va"]}"#).unwrap();
//! assert_eq!(config.stemming_strategy, StemmingStrategy::RuleBased);
//! assert!(config.transliterate);
//! ```

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::stem::AnalyzerMode;
use crate::error::{Result, UznlpError};

/// How tokens are reduced to a base form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StemmingStrategy {
    /// Built-in suffix stripping.
    #[default]
    #[serde(alias = "rule_based")]
    RuleBased,
    /// Delegate to an injected morphological analyzer.
    #[serde(alias = "external_analyzer", alias = "external")]
    ExternalAnalyzer,
}

impl FromStr for StemmingStrategy {
    type Err = UznlpError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rule-based" | "rule_based" => Ok(StemmingStrategy::RuleBased),
            "external-analyzer" | "external_analyzer" | "external" => {
                Ok(StemmingStrategy::ExternalAnalyzer)
            }
            other => Err(UznlpError::config(format!(
                "unknown stemming strategy: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for StemmingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StemmingStrategy::RuleBased => write!(f, "rule-based"),
            StemmingStrategy::ExternalAnalyzer => write!(f, "external-analyzer"),
        }
    }
}

/// Settings for [`UzbekPreprocessor`](crate::analysis::analyzer::UzbekPreprocessor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessorConfig {
    /// Stop words, in normalized form.
    pub stopwords: Vec<String>,

    /// Optional file with one stop word per line, merged with `stopwords`.
    pub stopwords_path: Option<PathBuf>,

    pub stemming_strategy: StemmingStrategy,

    /// Analyzer operation used by the external strategy.
    pub analyzer_mode: AnalyzerMode,

    /// Ordered suffix list for the rule-based strategy. `None` uses the
    /// built-in list.
    pub suffixes: Option<Vec<String>>,

    /// Transliterate Cyrillic input to Latin before cleaning.
    pub transliterate: bool,
}

impl Default for PreprocessorConfig {
    fn default() -> Self {
        PreprocessorConfig {
            stopwords: Vec::new(),
            stopwords_path: None,
            stemming_strategy: StemmingStrategy::default(),
            analyzer_mode: AnalyzerMode::default(),
            suffixes: None,
            transliterate: true,
        }
    }
}

impl PreprocessorConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            UznlpError::config(format!("cannot open config {}: {e}", path.display()))
        })?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The inline stop words plus those read from `stopwords_path`.
    pub fn resolved_stopwords(&self) -> Result<HashSet<String>> {
        let mut words: HashSet<String> = self.stopwords.iter().cloned().collect();
        if let Some(path) = &self.stopwords_path {
            words.extend(load_stopwords(path)?);
        }
        Ok(words)
    }
}

/// Read a stop word file: one word per line, trimmed, blank lines skipped.
pub fn load_stopwords<P: AsRef<Path>>(path: P) -> Result<HashSet<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        UznlpError::config(format!(
            "cannot read stop word file {}: {e}",
            path.display()
        ))
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
