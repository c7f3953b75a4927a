//! Cyrillic to Latin char filter.

use super::{CharFilter, Transformation};
use crate::analysis::transliteration::{latin_for, letters};

/// Rewrites Cyrillic Uzbek letters in Latin script, leaving every other
/// character untouched.
#[derive(Clone, Debug, Default)]
pub struct TransliterateCharFilter;

impl TransliterateCharFilter {
    /// Create a new transliteration char filter.
    pub fn new() -> Self {
        TransliterateCharFilter
    }
}

impl CharFilter for TransliterateCharFilter {
    fn filter(&self, input: &str) -> (String, Vec<Transformation>) {
        if input.is_ascii() {
            return (input.to_string(), Vec::new());
        }

        let mut output = String::with_capacity(input.len());
        let mut transformations = Vec::new();

        for (start, end, c) in letters(input) {
            match latin_for(c) {
                Some(latin) => {
                    let new_start = output.len();
                    output.push_str(&latin);
                    let new_end = output.len();

                    if new_end - new_start != end - start {
                        transformations.push(Transformation::new(start, end, new_start, new_end));
                    }
                }
                None => output.push_str(&input[start..end]),
            }
        }

        (output, transformations)
    }

    fn name(&self) -> &'static str {
        "transliterate"
    }
}
