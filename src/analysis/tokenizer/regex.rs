//! Regex-based tokenizer implementation.

use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{HelpdeskError, Result};

/// Words of two or more Unicode word characters.
pub const DEFAULT_TOKEN_PATTERN: &str = r"(?u)\b\w\w+\b";

lazy_static! {
    static ref DEFAULT_PATTERN: Arc<Regex> =
        Arc::new(Regex::new(DEFAULT_TOKEN_PATTERN).expect("default token pattern is valid"));
}

/// A tokenizer that extracts every match of a regular expression.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with [`DEFAULT_TOKEN_PATTERN`].
    pub fn new() -> Result<Self> {
        Ok(RegexTokenizer {
            pattern: Arc::clone(&DEFAULT_PATTERN),
        })
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        if pattern == DEFAULT_TOKEN_PATTERN {
            return Self::new();
        }

        let regex = Regex::new(pattern)
            .map_err(|e| HelpdeskError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_tokenizer() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("reset my AIS login").unwrap().collect();

        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].text, "reset");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 5);

        assert_eq!(tokens[2].text, "AIS");
        assert_eq!(tokens[2].start_offset, 9);
        assert_eq!(tokens[2].end_offset, 12);
    }

    #[test]
    fn test_default_pattern_drops_single_characters() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let tokens: Vec<String> = tokenizer
            .tokenize("I can't log in, 2FA!")
            .unwrap()
            .map(|t| t.text)
            .collect();

        assert_eq!(tokens, vec!["can", "log", "in", "2FA"]);
    }

    #[test]
    fn test_lithuanian_letters_are_word_characters() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let tokens: Vec<String> = tokenizer
            .tokenize("pamiršau slaptažodį")
            .unwrap()
            .map(|t| t.text)
            .collect();

        assert_eq!(tokens, vec!["pamiršau", "slaptažodį"]);
    }

    #[test]
    fn test_custom_pattern() {
        let tokenizer = RegexTokenizer::with_pattern(r"\S+").unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("a b").unwrap().collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokenizer.pattern(), r"\S+");

        assert!(RegexTokenizer::with_pattern("(").is_err());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(RegexTokenizer::new().unwrap().name(), "regex");
    }
}
