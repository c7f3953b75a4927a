//! Command line argument parsing for the uznlp CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::stem::AnalyzerMode;
use crate::config::StemmingStrategy;

/// uznlp - Uzbek text normalization and stemming
#[derive(Parser, Debug, Clone)]
#[command(name = "uznlp")]
#[command(about = "Normalize, tokenize and stem Uzbek text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct UznlpArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Preprocessor configuration file (JSON)
    #[arg(long, env = "UZNLP_CONFIG", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl UznlpArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the normalized text of each document
    Clean(CleanArgs),

    /// Run the full preprocessing pipeline
    Process(ProcessArgs),

    /// Stem words with the rule-based stemmer
    Stem(StemArgs),

    /// Convert between Cyrillic and Latin script
    Transliterate(TransliterateArgs),
}

/// Where documents come from and how they are split.
#[derive(Parser, Debug, Clone)]
pub struct InputArgs {
    /// Input file (stdin if omitted)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Treat the whole input as one document instead of one per line
    #[arg(long)]
    pub whole: bool,
}

/// Arguments for cleaning text
#[derive(Parser, Debug, Clone)]
pub struct CleanArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Keep Cyrillic letters out of the transliteration step
    #[arg(long)]
    pub no_transliterate: bool,
}

/// Arguments for the preprocessing pipeline
#[derive(Parser, Debug, Clone)]
pub struct ProcessArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print token lists instead of joined text
    #[arg(short, long)]
    pub tokens: bool,

    /// Stop word file, one word per line
    #[arg(short, long, value_name = "FILE")]
    pub stopwords: Option<PathBuf>,

    /// Stemming strategy (rule-based, external-analyzer)
    #[arg(long, env = "UZNLP_STEMMER", value_name = "STRATEGY")]
    pub stemmer: Option<StemmingStrategy>,

    /// Tab-separated lemma dictionary used as the external analyzer
    #[arg(long, value_name = "FILE")]
    pub lemma_dict: Option<PathBuf>,

    /// Analyzer operation for the external strategy
    #[arg(long, value_name = "MODE")]
    pub analyzer_mode: Option<AnalyzerModeArg>,

    /// Read one JSON object per line
    #[arg(long, conflicts_with = "whole")]
    pub jsonl: bool,

    /// JSON field to process with --jsonl
    #[arg(long, default_value = "body")]
    pub field: String,
}

/// Arguments for stemming words
#[derive(Parser, Debug, Clone)]
pub struct StemArgs {
    /// Words to stem
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Use the extended suffix list
    #[arg(long)]
    pub extended: bool,
}

/// Arguments for transliteration
#[derive(Parser, Debug, Clone)]
pub struct TransliterateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Target script
    #[arg(long, default_value = "latin")]
    pub to: Script,
}

/// Writing systems for transliteration
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Latin,
    Cyrillic,
}

/// Analyzer modes accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzerModeArg {
    Stem,
    Lemmatize,
}

impl From<AnalyzerModeArg> for AnalyzerMode {
    fn from(mode: AnalyzerModeArg) -> Self {
        match mode {
            AnalyzerModeArg::Stem => AnalyzerMode::Stem,
            AnalyzerModeArg::Lemmatize => AnalyzerMode::Lemmatize,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output, one object per document
    Json,
}
