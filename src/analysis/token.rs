//! Token types and utilities for text analysis.
//!
//! A [`Token`] is a maximal whitespace-delimited piece of normalized text. It
//! is created by a tokenizer, reshaped or dropped by token filters, and
//! finally turned back into plain strings by the preprocessor.
//!
//! # Examples
//!
//! ```
//! use uznlp::analysis::token::{Token, TokenType};
//!
//! let token = Token::with_offsets("maktablarda", 0, 0, 11).with_token_type(TokenType::Word);
//! assert_eq!(token.text, "maktablarda");
//! assert_eq!(token.end_offset, 11);
//! assert_eq!(token.char_len(), 11);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the original token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text.
    ///
    /// Offsets are mapped back through every char filter that reports its
    /// transformations. A custom [`HtmlStripper`](crate::analysis::char_filter::HtmlStripper)
    /// that does not implement `extract_with_offsets` leaves them relative to
    /// its stripped output.
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Whether this token has been marked as stopped (removed) by a filter
    pub stopped: bool,

    /// Coarse classification of the token content
    pub token_type: TokenType,
}

/// Token type classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// Latin letters, possibly with apostrophes and digits mixed in
    Word,
    /// Digits only (apostrophes ignored)
    Num,
    /// Anything else
    #[default]
    Other,
}

impl TokenType {
    /// Classify a piece of text.
    pub fn detect(text: &str) -> Self {
        let mut chars = text.chars().filter(|&c| c != '\'').peekable();
        if chars.peek().is_none() {
            return TokenType::Other;
        }

        let mut all_digits = true;
        let mut all_alnum = true;
        for c in chars {
            all_digits &= c.is_ascii_digit();
            all_alnum &= c.is_ascii_alphanumeric();
        }

        if all_digits {
            TokenType::Num
        } else if all_alnum {
            TokenType::Word
        } else {
            TokenType::Other
        }
    }
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            stopped: false,
            token_type: TokenType::Other,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            start_offset,
            end_offset,
            ..Token::new(text, position)
        }
    }

    /// Length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Length of the token text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Mark this token as stopped.
    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    /// Check if this token is stopped.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Set the token type.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = token_type;
        self
    }

    /// Replace the text, keeping position and offsets.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}
