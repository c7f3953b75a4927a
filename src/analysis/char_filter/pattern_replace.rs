use regex::Regex;

use super::{CharFilter, Transformation};
use crate::error::{Result, UznlpError};

/// A char filter that replaces every match of a regex pattern.
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern).map_err(|e| UznlpError::Anyhow(anyhow::Error::from(e)))?,
            replacement: replacement.to_string(),
        })
    }

    /// Drop URL-like substrings (`http...` or `www.` up to the next space).
    pub fn urls() -> Result<Self> {
        Self::new(r"http\S+|www\.\S+", "")
    }

    /// Drop email-like substrings (anything around an `@` up to spaces).
    pub fn emails() -> Result<Self> {
        Self::new(r"\S+@\S+", "")
    }

    /// Replace every run of characters outside `[a-z0-9']` and whitespace
    /// with one space. Punctuation-joined numbers such as `5,9` split in two.
    pub fn non_word_chars() -> Result<Self> {
        Self::new(r"[^a-z0-9'\s]+", " ")
    }

    /// Collapse whitespace runs to a single ASCII space.
    pub fn collapse_whitespace() -> Result<Self> {
        Self::new(r"\s+", " ")
    }

    /// Remove leading and trailing whitespace.
    pub fn trim() -> Result<Self> {
        Self::new(r"^\s+|\s+$", "")
    }

    /// The regex this filter replaces.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> (String, Vec<Transformation>) {
        let mut output = String::with_capacity(input.len());
        let mut transformations = Vec::new();
        let mut last_match_end = 0;

        for m in self.pattern.find_iter(input) {
            output.push_str(&input[last_match_end..m.start()]);

            let replacement_start = output.len();
            output.push_str(&self.replacement);
            let replacement_end = output.len();

            // Same-length replacements keep offsets linear.
            if m.end() - m.start() != replacement_end - replacement_start {
                transformations.push(Transformation::new(
                    m.start(),
                    m.end(),
                    replacement_start,
                    replacement_end,
                ));
            }

            last_match_end = m.end();
        }

        output.push_str(&input[last_match_end..]);

        (output, transformations)
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}
