//! Short token filter.
//!
//! Drops tokens that are too short to carry meaning (stray single letters left
//! over after punctuation removal) while keeping numbers of any length, so
//! "5 9" from "5,9" survives. Apostrophes do not count towards the length.
//! Numbers are recognised by the [`TokenType`] the tokenizer assigned.

use crate::analysis::token::{IntoTokenStream, Token, TokenStream, TokenType};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Keeps a token when its apostrophe-free length is at least `min_len`
/// characters, or when it is typed [`TokenType::Num`].
#[derive(Clone, Debug)]
pub struct ShortTokenFilter {
    min_len: usize,
}

impl ShortTokenFilter {
    /// Drop tokens of a single (non-digit) character.
    pub fn new() -> Self {
        Self::with_min_len(2)
    }

    /// Drop tokens shorter than `min_len` characters.
    pub fn with_min_len(min_len: usize) -> Self {
        ShortTokenFilter { min_len }
    }

    /// Whether `token` passes the filter.
    pub fn keeps(&self, token: &Token) -> bool {
        token.token_type == TokenType::Num
            || token.text.chars().filter(|&c| c != '\'').count() >= self.min_len
    }
}

impl Default for ShortTokenFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for ShortTokenFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let kept: Vec<Token> = tokens
            .filter(|token| token.is_stopped() || self.keeps(token))
            .collect();

        Ok(kept.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "short_token"
    }
}
