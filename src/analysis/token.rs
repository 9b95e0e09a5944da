//! Token types for text analysis.
//!
//! A [`Token`] is the unit that flows from a tokenizer through the filter
//! chain. A [`TokenStream`] is a boxed iterator of tokens.
//!
//! # Examples
//!
//! ```
//! use helpdesk::analysis::token::Token;
//!
//! let token = Token::with_offsets("password", 2, 14, 22);
//! assert_eq!(token.text, "password");
//! assert_eq!(token.position, 2);
//! assert_eq!(token.end_offset, 22);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,
}

/// A boxed iterator of tokens.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
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
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Clone this token with updated text.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.text, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("slaptažodis", 0);
        assert_eq!(token.text, "slaptažodis");
        assert_eq!(token.position, 0);
        assert!(!token.is_empty());
        // multi-byte characters count in bytes
        assert_eq!(token.len(), "slaptažodis".len());
    }

    #[test]
    fn test_with_text_keeps_offsets() {
        let token = Token::with_offsets("Outlook", 1, 4, 11);
        let lowered = token.with_text("outlook");

        assert_eq!(lowered.text, "outlook");
        assert_eq!(lowered.position, 1);
        assert_eq!(lowered.start_offset, 4);
        assert_eq!(lowered.end_offset, 11);
        assert_eq!(lowered.to_string(), "outlook@1");
    }
}
