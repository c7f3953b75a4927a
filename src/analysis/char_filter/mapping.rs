//! Literal string replacement char filter.

use aho_corasick::{AhoCorasick, MatchKind};

use super::{CharFilter, Transformation};
use crate::analysis::transliteration::APOSTROPHE_VARIANTS;
use crate::error::{Result, UznlpError};

/// Replaces literal strings using a leftmost-longest Aho-Corasick automaton.
pub struct MappingCharFilter {
    ac: AhoCorasick,
    replacements: Vec<String>,
}

impl MappingCharFilter {
    /// Build a filter from `(pattern, replacement)` pairs.
    pub fn new<I, K, V>(mapping: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let (keys, replacements): (Vec<String>, Vec<String>) = mapping
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .unzip();

        let ac = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&keys)
            .map_err(|e| UznlpError::Anyhow(anyhow::Error::from(e)))?;

        Ok(Self { ac, replacements })
    }

    /// Map every apostrophe-like code point (U+2018, U+2019, U+02BB,
    /// U+02BC, backtick) to the ASCII apostrophe.
    pub fn apostrophes() -> Result<Self> {
        Self::new(
            APOSTROPHE_VARIANTS
                .iter()
                .map(|c| (c.to_string(), "'".to_string())),
        )
    }
}

impl CharFilter for MappingCharFilter {
    fn filter(&self, input: &str) -> (String, Vec<Transformation>) {
        let mut output = String::with_capacity(input.len());
        let mut transformations = Vec::new();
        let mut last_match_end = 0;

        for m in self.ac.find_iter(input) {
            output.push_str(&input[last_match_end..m.start()]);

            let new_start = output.len();
            output.push_str(&self.replacements[m.pattern().as_usize()]);
            let new_end = output.len();

            transformations.push(Transformation::new(m.start(), m.end(), new_start, new_end));
            last_match_end = m.end();
        }

        output.push_str(&input[last_match_end..]);

        (output, transformations)
    }

    fn name(&self) -> &'static str {
        "mapping"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apostrophe_variants_unified() {
        let filter = MappingCharFilter::apostrophes().unwrap();
        for variant in ["\u{2018}", "\u{2019}", "\u{02BB}", "\u{02BC}", "`"] {
            let input = format!("g{variant}oz");
            let (output, trans) = filter.filter(&input);
            assert_eq!(output, "g'oz");
            assert_eq!(trans.len(), 1);
        }
    }

    #[test]
    fn test_multibyte_offsets() {
        let filter = MappingCharFilter::apostrophes().unwrap();
        // U+2018 is 3 bytes, replaced by 1 byte
        let (output, trans) = filter.filter("o\u{2018}g\u{2018}il");
        assert_eq!(output, "o'g'il");
        assert_eq!(trans.len(), 2);

        assert_eq!(trans[0].original_start, 1);
        assert_eq!(trans[0].original_end, 4);
        assert_eq!(trans[0].new_start, 1);
        assert_eq!(trans[0].new_end, 2);

        assert_eq!(trans[1].original_start, 5);
        assert_eq!(trans[1].original_end, 8);
        assert_eq!(trans[1].new_start, 3);
        assert_eq!(trans[1].new_end, 4);
    }

    #[test]
    fn test_mapping_prefers_longest() {
        let filter = MappingCharFilter::new([("sh", "ш"), ("s", "с")]).unwrap();
        let (output, _) = filter.filter("shs");
        assert_eq!(output, "шс");
    }

    #[test]
    fn test_mapping_deletion() {
        let filter = MappingCharFilter::new([("\u{00AD}", "")]).unwrap();
        let (output, trans) = filter.filter("kitob\u{00AD}lar");
        assert_eq!(output, "kitoblar");
        assert_eq!(trans.len(), 1);
        assert_eq!(trans[0].new_start, trans[0].new_end);
    }

    #[test]
    fn test_no_matches_is_identity() {
        let filter = MappingCharFilter::apostrophes().unwrap();
        let (output, trans) = filter.filter("o'zbek");
        assert_eq!(output, "o'zbek");
        assert!(trans.is_empty());
    }
}
