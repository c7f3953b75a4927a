//! Integration tests for the Uzbek preprocessing pipeline.

use std::io::Write;
use std::sync::Arc;

use serde_json::json;
use tempfile::NamedTempFile;
use uznlp::analysis::analyzer::{Analyzer, UzbekPreprocessor};
use uznlp::analysis::char_filter::{HtmlStripper, RegexHtmlStripper};
use uznlp::analysis::normalizer::UzbekNormalizer;
use uznlp::analysis::token_filter::StopFilter;
use uznlp::analysis::token_filter::stem::{
    AnalyzerMode, LemmaDictionary, MorphAnalyzer, Stemmer, SuffixStemmer,
};
use uznlp::analysis::transliteration::{to_cyrillic, to_latin};
use uznlp::config::{PreprocessorConfig, StemmingStrategy};
use uznlp::error::{Result, UznlpError};

struct FlakyAnalyzer;

impl MorphAnalyzer for FlakyAnalyzer {
    fn stem(&self, word: &str) -> Result<Option<String>> {
        match word {
            "kitoblar" => Ok(Some("kitob".to_string())),
            "xatolik" => Err(UznlpError::analysis("lookup failed")),
            "vahima" => panic!("analyzer crashed"),
            _ => Ok(None),
        }
    }

    fn lemmatize(&self, word: &str) -> Result<Option<String>> {
        self.stem(word)
    }

    fn name(&self) -> &'static str {
        "flaky"
    }
}

/// Fails on documents mentioning "xato", panics on "vahima", and otherwise
/// strips markup normally.
struct BrittleStripper {
    inner: RegexHtmlStripper,
}

impl HtmlStripper for BrittleStripper {
    fn extract_visible_text(&self, markup: &str) -> Result<String> {
        if markup.contains("xato") {
            return Err(UznlpError::analysis("unbalanced markup"));
        }
        if markup.contains("vahima") {
            panic!("parser crashed");
        }
        self.inner.extract_visible_text(markup)
    }

    fn name(&self) -> &'static str {
        "brittle"
    }
}

#[test]
fn test_numbers_survive_without_stop_words() {
    let preprocessor = UzbekPreprocessor::new(Vec::<&str>::new()).unwrap();
    let tokens = preprocessor.process_tokens("37 ta yangi uy 12 qavatli");

    for expected in ["37", "12", "ta"] {
        assert!(tokens.iter().any(|t| t == expected), "missing {expected}");
    }
}

#[test]
fn test_stop_words_never_appear() {
    let preprocessor = UzbekPreprocessor::new(["va", "bilan", "uchun", "bu"]).unwrap();
    let output = preprocessor.process("bu maktab va universitet uchun");

    for stop_word in ["bu", "va", "uchun"] {
        assert!(!output.split(' ').any(|t| t == stop_word));
    }
}

#[test]
fn test_html_article() {
    let normalizer = UzbekNormalizer::new().unwrap();
    let clean = normalizer.clean_text_robust("<div>Yangiliklar <b>e'lon</b> qilindi.</div>");

    assert!(clean.contains("yangiliklar"));
    assert!(clean.contains("e'lon"));
    assert!(!clean.contains("<div>"));
    assert!(!clean.contains("<b>"));
}

#[test]
fn test_plural_locative_reduces_to_root() {
    let stemmer = SuffixStemmer::new();
    for root in ["maktab", "kitob", "shahar", "daraxt"] {
        assert_eq!(stemmer.stem(&format!("{root}larda")), root);
    }
}

#[test]
fn test_full_news_paragraph() {
    let preprocessor = UzbekPreprocessor::new(["va", "bilan", "uchun", "bu"]).unwrap();
    let html = r#"<article>
        <h1>O‘zbekiston iqtisodiyoti</h1>
        <script>trackPageView();</script>
        <p>Yalpi ichki mahsulot 5,9 foizga o’sdi. Batafsil: https://kun.uz/news/1</p>
        <p>Savollar uchun: info@xabar.uz</p>
    </article>"#;

    assert_eq!(
        preprocessor.process(html),
        "o'zbekiston iqtisodiyoti yalpi ichki mahsulot 5 9 foiz o'sdi batafsil savol"
    );
}

#[test]
fn test_cyrillic_and_latin_agree() {
    let preprocessor = UzbekPreprocessor::new(["va"]).unwrap();
    assert_eq!(
        preprocessor.process("Шаҳарларда ва қишлоқларда"),
        preprocessor.process("Shaharlarda va qishloqlarda")
    );
}

#[test]
fn test_transliteration_round_trip_of_common_words() {
    for word in ["o'zbekiston", "shahar", "qishloq", "g'alaba", "choy"] {
        assert_eq!(to_latin(&to_cyrillic(word)), word);
    }
}

#[test]
fn test_json_values() {
    let preprocessor = UzbekPreprocessor::new(["va"]).unwrap();
    let values = vec![json!("Kitoblar va daftarlar"), json!(null), json!({"body": 1})];

    assert_eq!(preprocessor.process_value(&values[0]), "kitob daftar");
    assert_eq!(preprocessor.process_value(&values[1]), "");
    assert_eq!(
        preprocessor.process_values_batch(&values),
        vec![
            vec!["kitob".to_string(), "daftar".to_string()],
            Vec::new(),
            Vec::new()
        ]
    );
}

#[test]
fn test_batch_keeps_input_order() {
    let preprocessor = UzbekPreprocessor::new(["va"]).unwrap();
    let docs: Vec<String> = (0..200).map(|i| format!("hujjat {i} maktablarda")).collect();

    let processed = preprocessor.process_batch(&docs);
    assert_eq!(processed.len(), docs.len());
    for (i, output) in processed.iter().enumerate() {
        assert_eq!(output, &format!("hujjat {i} maktab"));
    }
}

#[test]
fn test_external_analyzer_falls_back_on_failure() {
    let config = PreprocessorConfig {
        stemming_strategy: StemmingStrategy::ExternalAnalyzer,
        analyzer_mode: AnalyzerMode::Stem,
        ..Default::default()
    };
    let preprocessor =
        UzbekPreprocessor::from_config(&config, Some(Arc::new(FlakyAnalyzer))).unwrap();

    assert_eq!(
        preprocessor.process("kitoblar xatolik vahima maktablarda"),
        "kitob xatolik vahima maktablarda"
    );
}

#[test]
fn test_external_strategy_requires_analyzer() {
    let config = PreprocessorConfig::from_json_str(r#"{"stemming_strategy": "external-analyzer"}"#)
        .unwrap();
    let err = UzbekPreprocessor::from_config(&config, None).unwrap_err();
    assert!(matches!(err, UznlpError::Config(_)));
}

#[test]
fn test_unknown_strategy_name() {
    assert!("porter".parse::<StemmingStrategy>().is_err());
}

#[test]
fn test_config_file_with_stop_word_file() {
    let mut stop_file = NamedTempFile::new().unwrap();
    writeln!(stop_file, "va\nbilan\n\n  uchun  ").unwrap();

    let mut config_file = NamedTempFile::new().unwrap();
    let config_json = json!({
        "stopwords": ["bu"],
        "stopwords_path": stop_file.path(),
    });
    write!(config_file, "{config_json}").unwrap();

    let config = PreprocessorConfig::from_file(config_file.path()).unwrap();
    let preprocessor = UzbekPreprocessor::from_config(&config, None).unwrap();

    assert_eq!(
        preprocessor.process("bu kitob va daftar bilan qalam uchun"),
        "kitob daftar qalam"
    );
}

#[test]
fn test_lemma_dictionary_as_analyzer() {
    let mut dict_file = NamedTempFile::new().unwrap();
    writeln!(dict_file, "# word\tlemma\tstem").unwrap();
    writeln!(dict_file, "bordi\tbormoq\tbor").unwrap();
    writeln!(dict_file, "kitoblarimiz\tkitob").unwrap();

    let dictionary = LemmaDictionary::from_path(dict_file.path()).unwrap();
    let config = PreprocessorConfig {
        stemming_strategy: StemmingStrategy::ExternalAnalyzer,
        ..Default::default()
    };
    let preprocessor =
        UzbekPreprocessor::from_config(&config, Some(Arc::new(dictionary))).unwrap();

    assert_eq!(
        preprocessor.process("U bordi kitoblarimiz noma'lum"),
        "bormoq kitob noma'lum"
    );
}

#[test]
fn test_token_metadata() {
    let preprocessor = UzbekPreprocessor::new(Vec::<&str>::new()).unwrap();
    let tokens: Vec<_> = preprocessor.analyze("kitoblar 2024").unwrap().collect();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].position, 0);
    assert_eq!(tokens[1].position, 1);
    assert_eq!(tokens[1].text, "2024");
}

#[test]
fn test_broken_markup_does_not_affect_other_documents() {
    let stripper = BrittleStripper {
        inner: RegexHtmlStripper::new().unwrap(),
    };
    let normalizer = UzbekNormalizer::with_options(Arc::new(stripper), true).unwrap();
    let preprocessor = UzbekPreprocessor::with_components(
        normalizer,
        StopFilter::from_words(["va"]),
        Arc::new(SuffixStemmer::new()),
    );

    let docs = vec![
        "<p>Kitoblar va daftarlar</p>",
        "<p>xato <b>maktablarda</b></p>",
        "<div>Shaharlarda</div>",
        "<p>vahima <i>qishloqlarda</i></p>",
        "<p>Gazetalar</p>",
    ];
    let processed = preprocessor.process_batch_tokens(&docs);

    assert_eq!(processed.len(), docs.len());
    assert_eq!(processed[0], vec!["kitob", "daftar"]);
    assert_eq!(processed[2], vec!["shahar"]);
    assert_eq!(processed[4], vec!["gazeta"]);

    // The unstripped documents are still cleaned by the later steps.
    assert!(processed[1].iter().any(|t| t == "maktab"));
    assert!(processed[3].iter().any(|t| t == "qishloq"));
    for tokens in [&processed[1], &processed[3]] {
        assert!(tokens.iter().all(|t| !t.contains('<')));
    }
}
