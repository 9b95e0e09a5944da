//! Lowercase filter implementation.
//!
//! # Examples
//!
//! ```
//! use helpdesk::analysis::token::Token;
//! use helpdesk::analysis::token_filter::{Filter, LowercaseFilter};
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Microsoft", 0), Token::new("TEAMS", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "microsoft");
//! assert_eq!(filtered[1].text, "teams");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that converts tokens to lowercase.
///
/// Lowercasing is Unicode-aware so Lithuanian capitals (`Š`, `Ž`, `Ą`, ...)
/// fold the same way ASCII does. Positions and offsets are preserved.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.text.chars().any(char::is_uppercase) {
                    token.with_text(token.text.to_lowercase())
                } else {
                    token
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_lowercase_filter() {
        let filter = LowercaseFilter::new();
        let tokens = vec![
            Token::with_offsets("SLAPTAŽODIS", 0, 0, 12),
            Token::new("outlook", 1),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "slaptažodis");
        assert_eq!(result[0].end_offset, 12);
        assert_eq!(result[1].text, "outlook");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LowercaseFilter::new().name(), "lowercase");
    }
}
