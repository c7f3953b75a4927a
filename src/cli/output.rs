//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, UznlpArgs};
use crate::error::Result;

/// A result that can print itself as one human-readable line.
pub trait HumanReadable {
    fn human_line(&self) -> String;
}

/// Normalized or transliterated text of one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextResult {
    pub text: String,
}

/// Pipeline output for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProcessedDocument {
    Text { text: String },
    Tokens { tokens: Vec<String> },
}

/// Stem of one word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StemResult {
    pub word: String,
    pub stem: String,
}

impl HumanReadable for TextResult {
    fn human_line(&self) -> String {
        self.text.clone()
    }
}

impl HumanReadable for ProcessedDocument {
    fn human_line(&self) -> String {
        match self {
            ProcessedDocument::Text { text } => text.clone(),
            ProcessedDocument::Tokens { tokens } => tokens.join("\t"),
        }
    }
}

impl HumanReadable for StemResult {
    fn human_line(&self) -> String {
        format!("{}\t{}", self.word, self.stem)
    }
}

/// Output results in the specified format, one line per result.
pub fn output_results<T>(message: &str, results: &[T], args: &UznlpArgs) -> Result<()>
where
    T: Serialize + HumanReadable,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_results(&mut out, message, results, args)?;
    out.flush()?;
    Ok(())
}

/// Write results to any writer.
pub fn write_results<W, T>(out: &mut W, message: &str, results: &[T], args: &UznlpArgs) -> Result<()>
where
    W: Write,
    T: Serialize + HumanReadable,
{
    if args.verbosity() > 1 {
        eprintln!("{message}");
    }

    match args.output_format {
        OutputFormat::Human => {
            for result in results {
                writeln!(out, "{}", result.human_line())?;
            }
        }
        OutputFormat::Json => {
            for result in results {
                let json = if args.pretty {
                    serde_json::to_string_pretty(result)?
                } else {
                    serde_json::to_string(result)?
                };
                writeln!(out, "{json}")?;
            }
        }
    }

    Ok(())
}
