use crate::types::Token;

#[derive(Copy, Clone)]
pub struct Tokenizer;

impl Tokenizer {
    /// Configuration for word-boundary splitting of arbitrary text docs.
    ///
    /// There are no tokenizer resources to load; construction is free and
    /// the value can be created once at process start and copied anywhere.
    pub const fn word_boundary_parser() -> Self {
        Self
    }

    /// Tokenizer function to split the text into individual tokens.
    ///
    /// Note: This explicitly does not modify the case of the text.
    ///
    /// Splitting rules:
    /// - Whitespace separates tokens and is never itself a token.
    /// - A maximal run of alphanumeric characters is one token.
    /// - Every other non-whitespace character becomes a single-character
    ///   token, so `"mat."` yields `["mat", "."]` and `"don't"` yields
    ///   `["don", "'", "t"]`.
    pub fn tokenize(self, text: &str) -> Vec<Token> {
        let mut tokens: Vec<Token> = Vec::new();
        let mut word = String::new();

        for character in text.chars() {
            if character.is_alphanumeric() {
                word.push(character);
            } else {
                if !word.is_empty() {
                    tokens.push(std::mem::take(&mut word));
                }
                if !character.is_whitespace() {
                    tokens.push(character.to_string());
                }
            }
        }

        if !word.is_empty() {
            tokens.push(word);
        }

        tokens
    }
}
