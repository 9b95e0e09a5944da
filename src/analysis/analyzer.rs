//! Analyzers that combine a tokenizer with a chain of filters.
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Vectorizer
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 .. N
//! ```
//!
//! # Examples
//!
//! ```
//! use helpdesk::analysis::analyzer::{Analyzer, StandardAnalyzer};
//!
//! let analyzer = StandardAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("Outlook won't OPEN").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "outlook");
//! assert_eq!(tokens[2].text, "open");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so the trained context can be read from
/// any number of request-handling threads.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

mod pipeline;
mod standard;

pub use pipeline::PipelineAnalyzer;
pub use standard::StandardAnalyzer;
