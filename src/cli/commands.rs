//! Command implementations for the uznlp CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::sync::Arc;
use std::time::Instant;

use log::{info, warn};
use rayon::prelude::*;
use serde_json::Value;

use crate::analysis::analyzer::UzbekPreprocessor;
use crate::analysis::char_filter::RegexHtmlStripper;
use crate::analysis::normalizer::UzbekNormalizer;
use crate::analysis::token_filter::stem::{LemmaDictionary, MorphAnalyzer, Stemmer, SuffixStemmer};
use crate::analysis::transliteration::{to_cyrillic, to_latin};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::{PreprocessorConfig, StemmingStrategy};
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: UznlpArgs) -> Result<()> {
    match &args.command {
        Command::Clean(clean_args) => clean(clean_args, &args),
        Command::Process(process_args) => process(process_args, &args),
        Command::Stem(stem_args) => stem(stem_args, &args),
        Command::Transliterate(translit_args) => transliterate(translit_args, &args),
    }
}

/// Print the normalized text of each document.
fn clean(args: &CleanArgs, cli_args: &UznlpArgs) -> Result<()> {
    let transliterate = !args.no_transliterate && load_config(cli_args)?.transliterate;
    let normalizer =
        UzbekNormalizer::with_options(Arc::new(RegexHtmlStripper::new()?), transliterate)?;

    let documents = read_documents(&args.input)?;
    let results: Vec<TextResult> = documents
        .par_iter()
        .map(|doc| TextResult {
            text: normalizer.clean_text_robust(doc),
        })
        .collect();

    output_results("Cleaned documents", &results, cli_args)
}

/// Run the preprocessing pipeline.
fn process(args: &ProcessArgs, cli_args: &UznlpArgs) -> Result<()> {
    let config = process_config(args, load_config(cli_args)?);
    let analyzer: Option<Arc<dyn MorphAnalyzer>> = match &args.lemma_dict {
        Some(path) => {
            let dictionary = LemmaDictionary::from_path(path)?;
            info!(
                "loaded {} lemma dictionary entries from {}",
                dictionary.len(),
                path.display()
            );
            Some(Arc::new(dictionary))
        }
        None => None,
    };
    let preprocessor = UzbekPreprocessor::from_config(&config, analyzer)?;

    let start_time = Instant::now();
    let token_lists = if args.jsonl {
        let values = read_json_field(&args.input, &args.field)?;
        preprocessor.process_values_batch(&values)
    } else {
        let documents = read_documents(&args.input)?;
        preprocessor.process_batch_tokens(&documents)
    };
    info!(
        "processed {} documents in {} ms",
        token_lists.len(),
        start_time.elapsed().as_millis()
    );

    let results: Vec<ProcessedDocument> = token_lists
        .into_iter()
        .map(|tokens| {
            if args.tokens {
                ProcessedDocument::Tokens { tokens }
            } else {
                ProcessedDocument::Text {
                    text: tokens.join(" "),
                }
            }
        })
        .collect();

    output_results("Processed documents", &results, cli_args)
}

/// Stem each word with the rule-based stemmer.
fn stem(args: &StemArgs, cli_args: &UznlpArgs) -> Result<()> {
    let stemmer = if args.extended {
        SuffixStemmer::extended()
    } else {
        match load_config(cli_args)?.suffixes {
            Some(suffixes) => SuffixStemmer::with_suffixes(suffixes)?,
            None => SuffixStemmer::new(),
        }
    };

    let results: Vec<StemResult> = args
        .words
        .iter()
        .map(|word| StemResult {
            word: word.clone(),
            stem: stemmer.stem(word),
        })
        .collect();

    output_results("Stems", &results, cli_args)
}

/// Convert documents between scripts.
fn transliterate(args: &TransliterateArgs, cli_args: &UznlpArgs) -> Result<()> {
    let documents = read_documents(&args.input)?;
    let results: Vec<TextResult> = documents
        .iter()
        .map(|doc| TextResult {
            text: match args.to {
                Script::Latin => to_latin(doc),
                Script::Cyrillic => to_cyrillic(doc),
            },
        })
        .collect();

    output_results("Transliterated documents", &results, cli_args)
}

/// Load the `--config` file, or the defaults.
fn load_config(cli_args: &UznlpArgs) -> Result<PreprocessorConfig> {
    match &cli_args.config {
        Some(path) => PreprocessorConfig::from_file(path),
        None => Ok(PreprocessorConfig::default()),
    }
}

/// Apply command line overrides to a loaded configuration.
fn process_config(args: &ProcessArgs, mut config: PreprocessorConfig) -> PreprocessorConfig {
    if let Some(path) = &args.stopwords {
        config.stopwords_path = Some(path.clone());
    }
    if let Some(mode) = args.analyzer_mode {
        config.analyzer_mode = mode.into();
    }
    match args.stemmer {
        Some(strategy) => config.stemming_strategy = strategy,
        // A dictionary on its own selects the external strategy.
        None if args.lemma_dict.is_some() => {
            config.stemming_strategy = StemmingStrategy::ExternalAnalyzer
        }
        None => {}
    }
    config
}

fn open_input(input: &InputArgs) -> Result<Box<dyn BufRead>> {
    Ok(match &input.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    })
}

/// Read documents: one per line, or the whole input with `--whole`.
fn read_documents(input: &InputArgs) -> Result<Vec<String>> {
    let mut reader = open_input(input)?;
    if input.whole {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        return Ok(vec![text]);
    }

    Ok(reader.lines().collect::<io::Result<Vec<_>>>()?)
}

/// Read JSON lines and pull out `field`. Blank lines are skipped; malformed
/// lines and missing fields become `null`.
fn read_json_field(input: &InputArgs, field: &str) -> Result<Vec<Value>> {
    let reader = open_input(input)?;
    let mut values = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        values.push(extract_field(&line, field).unwrap_or_else(|e| {
            warn!("line {}: {e}", line_num + 1);
            Value::Null
        }));
    }

    Ok(values)
}

fn extract_field(line: &str, field: &str) -> Result<Value> {
    let mut document: Value = serde_json::from_str(line)?;
    Ok(document
        .get_mut(field)
        .map(Value::take)
        .unwrap_or(Value::Null))
}
