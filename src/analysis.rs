//! Text analysis for intent classification.
//!
//! Raw issue descriptions go through a tokenizer and a chain of token filters
//! before they reach the TF-IDF vectorizer. Training examples and live
//! requests share the same analyzer so both land in the same feature space.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, PipelineAnalyzer, StandardAnalyzer};
pub use token::{Token, TokenStream};
pub use token_filter::{Filter, LowercaseFilter};
pub use tokenizer::{RegexTokenizer, Tokenizer};
