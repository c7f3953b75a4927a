//! Tokenizer implementations for text analysis.
//!
//! Tokenizers split normalized text into [`Token`](crate::analysis::token::Token)s.
//! CleanText only contains single ASCII spaces between words, so the
//! whitespace tokenizer is the one the Uzbek pipeline uses.
//!
//! # Examples
//!
//! ```
//! use uznlp::analysis::tokenizer::Tokenizer;
//! use uznlp::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("37 ta yangi uy").unwrap().collect();
//! assert_eq!(tokens.len(), 4);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so one analyzer can serve many threads.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod whitespace;

pub use whitespace::WhitespaceTokenizer;
