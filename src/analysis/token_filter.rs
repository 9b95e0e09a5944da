//! Token filters that transform token streams.
//!
//! ```text
//! Tokenizer → Lowercase → Vectorizer
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod lowercase;

pub use lowercase::LowercaseFilter;
