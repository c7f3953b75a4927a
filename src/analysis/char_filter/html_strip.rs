//! HTML markup removal.
//!
//! Visible text extraction is delegated to an [`HtmlStripper`]. The char
//! filter never fails: if the stripper returns an error or panics, the text
//! is passed on unstripped and later normalization steps clean up what they
//! can.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use html_escape::decode_html_entities;
use log::warn;
use regex::Regex;

use super::{CharFilter, Transformation};
use crate::error::{Result, UznlpError};

/// Extracts the visible text of an HTML fragment.
///
/// Implementations must put whitespace where tags were, so words on either
/// side of a tag boundary never run together.
pub trait HtmlStripper: Send + Sync {
    /// Return the visible text of `markup`.
    fn extract_visible_text(&self, markup: &str) -> Result<String>;

    /// Return the visible text together with the transformations mapping it
    /// back to `markup`. Strippers that do not track positions report none.
    fn extract_with_offsets(&self, markup: &str) -> Result<(String, Vec<Transformation>)> {
        Ok((self.extract_visible_text(markup)?, Vec::new()))
    }

    /// Get the name of this stripper.
    fn name(&self) -> &'static str;
}

/// Regex-based [`HtmlStripper`].
///
/// Drops `<script>`, `<style>` and `<noscript>` elements with their content
/// and HTML comments, replaces every remaining tag with a space and decodes
/// character references. Quoted attribute values may contain `>`. Named
/// references that are not HTML entities become a space.
#[derive(Debug, Clone)]
pub struct RegexHtmlStripper {
    markup: Regex,
}

const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript"];

/// Attribute text of a tag: anything up to `>`, with quoted values skipped.
const ATTRIBUTES: &str = r#"(?:[^>"']|"[^"]*"|'[^']*')*"#;

impl RegexHtmlStripper {
    /// Create a new regex HTML stripper.
    pub fn new() -> Result<Self> {
        // Alternatives are tried in order: hidden elements before plain tags.
        let mut alternatives: Vec<String> = HIDDEN_ELEMENTS
            .iter()
            .map(|element| format!(r"(?is:<{element}\b{ATTRIBUTES}>.*?</{element}\s*>)"))
            .collect();
        alternatives.push(r"(?s:<!--.*?-->)".to_string());
        alternatives.push(format!(r"</?[A-Za-z!?]{ATTRIBUTES}>"));
        alternatives.push(
            r"(?P<entity>&(?:#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[A-Za-z][A-Za-z0-9]{1,31});)"
                .to_string(),
        );

        let markup = Regex::new(&alternatives.join("|"))
            .map_err(|e| UznlpError::Anyhow(anyhow::Error::from(e)))?;
        Ok(Self { markup })
    }

    fn decode_entity(reference: &str) -> String {
        let decoded = decode_html_entities(reference);
        if decoded == reference {
            " ".to_string()
        } else {
            decoded.into_owned()
        }
    }
}

impl HtmlStripper for RegexHtmlStripper {
    fn extract_visible_text(&self, markup: &str) -> Result<String> {
        Ok(self.extract_with_offsets(markup)?.0)
    }

    fn extract_with_offsets(&self, markup: &str) -> Result<(String, Vec<Transformation>)> {
        // Plain text is the common case for already-extracted article bodies.
        if !markup.contains('<') && !markup.contains('&') {
            return Ok((markup.to_string(), Vec::new()));
        }

        let mut output = String::with_capacity(markup.len());
        let mut transformations = Vec::new();
        let mut last_match_end = 0;

        for caps in self.markup.captures_iter(markup) {
            let Some(m) = caps.get(0) else { continue };
            output.push_str(&markup[last_match_end..m.start()]);

            let new_start = output.len();
            match caps.name("entity") {
                Some(entity) => output.push_str(&Self::decode_entity(entity.as_str())),
                None => output.push(' '),
            }
            let new_end = output.len();

            if new_end - new_start != m.len() {
                transformations.push(Transformation::new(m.start(), m.end(), new_start, new_end));
            }
            last_match_end = m.end();
        }

        output.push_str(&markup[last_match_end..]);
        Ok((output, transformations))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

/// Char filter delegating to an [`HtmlStripper`].
#[derive(Clone)]
pub struct HtmlStripCharFilter {
    stripper: Arc<dyn HtmlStripper>,
}

impl HtmlStripCharFilter {
    /// Create a filter backed by the default [`RegexHtmlStripper`].
    pub fn new() -> Result<Self> {
        Ok(Self::with_stripper(Arc::new(RegexHtmlStripper::new()?)))
    }

    /// Create a filter backed by a custom stripper.
    pub fn with_stripper(stripper: Arc<dyn HtmlStripper>) -> Self {
        Self { stripper }
    }
}

impl std::fmt::Debug for HtmlStripCharFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlStripCharFilter")
            .field("stripper", &self.stripper.name())
            .finish()
    }
}

impl CharFilter for HtmlStripCharFilter {
    fn filter(&self, input: &str) -> (String, Vec<Transformation>) {
        let outcome =
            panic::catch_unwind(AssertUnwindSafe(|| self.stripper.extract_with_offsets(input)));

        match outcome {
            Ok(Ok(stripped)) => stripped,
            Ok(Err(e)) => {
                warn!(
                    "html stripper '{}' failed, keeping markup: {e}",
                    self.stripper.name()
                );
                (input.to_string(), Vec::new())
            }
            Err(_) => {
                warn!(
                    "html stripper '{}' panicked, keeping markup",
                    self.stripper.name()
                );
                (input.to_string(), Vec::new())
            }
        }
    }

    fn name(&self) -> &'static str {
        "html_strip"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingStripper;

    impl HtmlStripper for FailingStripper {
        fn extract_visible_text(&self, _markup: &str) -> Result<String> {
            Err(UznlpError::analysis("parser crashed"))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    struct PanickingStripper;

    impl HtmlStripper for PanickingStripper {
        fn extract_visible_text(&self, _markup: &str) -> Result<String> {
            panic!("malformed document")
        }

        fn name(&self) -> &'static str {
            "panicking"
        }
    }

    #[test]
    fn test_tags_become_spaces() {
        let stripper = RegexHtmlStripper::new().unwrap();
        let text = stripper
            .extract_visible_text("<div>Yangiliklar <b>e'lon</b> qilindi.</div>")
            .unwrap();
        assert!(!text.contains('<'));
        assert!(text.contains("Yangiliklar"));
        assert!(text.contains(" e'lon "));
    }

    #[test]
    fn test_adjacent_tags_do_not_join_words() {
        let stripper = RegexHtmlStripper::new().unwrap();
        let text = stripper
            .extract_visible_text("<p>birinchi</p><p>ikkinchi</p>")
            .unwrap();
        let words: Vec<_> = text.split_whitespace().collect();
        assert_eq!(words, vec!["birinchi", "ikkinchi"]);
    }

    #[test]
    fn test_hidden_elements_and_comments_removed() {
        let stripper = RegexHtmlStripper::new().unwrap();
        let html = "<p>Matn</p><script type=\"text/javascript\">var x = 1;</script>\
                    <!-- reklama --><STYLE>.a{color:red}</STYLE><noscript>JS yoqing</noscript>";
        let text = stripper.extract_visible_text(html).unwrap();
        assert!(text.contains("Matn"));
        assert!(!text.contains("var x"));
        assert!(!text.contains("reklama"));
        assert!(!text.contains("color"));
        assert!(!text.contains("JS yoqing"));
    }

    #[test]
    fn test_entities_decoded() {
        let stripper = RegexHtmlStripper::new().unwrap();
        let text = stripper
            .extract_visible_text("Tom &amp; Jerry &#8216;o&#x2019;zbek&rsquo; &lt;b&gt;")
            .unwrap();
        assert_eq!(text, "Tom & Jerry \u{2018}o\u{2019}zbek\u{2019} <b>");
    }

    #[test]
    fn test_unknown_entities_become_spaces() {
        let stripper = RegexHtmlStripper::new().unwrap();
        let text = stripper
            .extract_visible_text("narx&zqxv;100 &copy;")
            .unwrap();
        assert!(!text.contains("zqxv"));
        assert!(!text.contains("copy"));
        assert!(text.starts_with("narx 100"));
    }

    #[test]
    fn test_quoted_attribute_may_contain_gt() {
        let stripper = RegexHtmlStripper::new().unwrap();
        let text = stripper
            .extract_visible_text(r#"<a title="narx > 100" data-x='a>b'>Yangilik</a>"#)
            .unwrap();
        assert_eq!(text.split_whitespace().collect::<Vec<_>>(), vec!["Yangilik"]);

        let text = stripper
            .extract_visible_text(r#"<script src="a.js?x>1">var y;</script>Matn"#)
            .unwrap();
        assert_eq!(text.trim(), "Matn");
    }

    #[test]
    fn test_offsets_recorded() {
        let stripper = RegexHtmlStripper::new().unwrap();
        let (text, transformations) = stripper
            .extract_with_offsets("<b>uy</b> &amp; bog'")
            .unwrap();
        assert_eq!(text, " uy  & bog'");
        assert_eq!(
            transformations,
            vec![
                Transformation::new(0, 3, 0, 1),
                Transformation::new(5, 9, 3, 4),
                Transformation::new(10, 15, 5, 6),
            ]
        );
    }

    #[test]
    fn test_plain_text_passes_through() {
        let stripper = RegexHtmlStripper::new().unwrap();
        let (text, transformations) = stripper.extract_with_offsets("oddiy matn").unwrap();
        assert_eq!(text, "oddiy matn");
        assert!(transformations.is_empty());
    }

    #[test]
    fn test_comparison_sign_is_not_a_tag() {
        let stripper = RegexHtmlStripper::new().unwrap();
        let text = stripper.extract_visible_text("narx < 100 so'm").unwrap();
        assert_eq!(text, "narx < 100 so'm");
    }

    #[test]
    fn test_failing_stripper_keeps_input() {
        let filter = HtmlStripCharFilter::with_stripper(Arc::new(FailingStripper));
        let (output, _) = filter.filter("<b>salom</b>");
        assert_eq!(output, "<b>salom</b>");
    }

    #[test]
    fn test_panicking_stripper_keeps_input() {
        let filter = HtmlStripCharFilter::with_stripper(Arc::new(PanickingStripper));
        let (output, _) = filter.filter("<b>salom</b>");
        assert_eq!(output, "<b>salom</b>");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(HtmlStripCharFilter::new().unwrap().name(), "html_strip");
    }
}
