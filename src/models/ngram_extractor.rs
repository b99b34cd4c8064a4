use crate::constants::ASCII_PUNCTUATION_TOKENS;
use crate::models::Tokenizer;
use crate::types::{NGram, TokenRef};

/// Produces every contiguous n-token window over a text document, dropping
/// windows that contain a punctuation-only token.
pub struct NGramExtractor {
    ngram_size: usize,
    tokenizer: Tokenizer,
}

impl NGramExtractor {
    pub fn new(ngram_size: usize) -> Self {
        Self {
            ngram_size,
            tokenizer: Tokenizer::word_boundary_parser(),
        }
    }

    /// Extracts all surviving n-grams from `text`, in document order.
    ///
    /// A text with fewer than `ngram_size` tokens (and any text when
    /// `ngram_size` is zero) yields an empty sequence rather than an error;
    /// parameter validation is the caller's concern.
    ///
    /// No deduplication happens here. Repeated windows appear once per
    /// occurrence so that downstream counting sees every instance.
    pub fn extract(&self, text: &str) -> Vec<NGram> {
        let tokens = self.tokenizer.tokenize(text);

        if self.ngram_size == 0 || tokens.len() < self.ngram_size {
            return Vec::new();
        }

        tokens
            .windows(self.ngram_size)
            .filter(|window| !window.iter().any(|token| is_punctuation_token(token)))
            .map(|window| window.to_vec())
            .collect()
    }
}

/// A token is filtered only when it is *exactly* one standard ASCII
/// punctuation character. Longer tokens containing punctuation, and Unicode
/// punctuation, pass through.
fn is_punctuation_token(token: &TokenRef) -> bool {
    ASCII_PUNCTUATION_TOKENS.contains(&token)
}
