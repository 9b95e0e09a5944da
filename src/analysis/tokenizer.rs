//! Tokenizers that split raw text into tokens.
//!
//! # Examples
//!
//! ```
//! use helpdesk::analysis::tokenizer::{RegexTokenizer, Tokenizer};
//!
//! let tokenizer = RegexTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("I forgot my password").unwrap().collect();
//!
//! // single-character words are not tokens
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].text, "forgot");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a trained analyzer can be shared
/// across request-handling threads.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod regex;

pub use self::regex::RegexTokenizer;
