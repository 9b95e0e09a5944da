//! Standard analyzer used for intent classification.
//!
//! # Pipeline
//!
//! 1. RegexTokenizer (words of two or more word characters)
//! 2. LowercaseFilter
//!
//! There is no stop word filter: the corpus mixes English and Lithuanian and
//! the IDF weighting already discounts words common to every intent.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::LowercaseFilter;
use crate::analysis::tokenizer::RegexTokenizer;
use crate::error::Result;

/// The analyzer shared by the vectorizer at training and inference time.
pub struct StandardAnalyzer {
    inner: PipelineAnalyzer,
}

impl StandardAnalyzer {
    /// Create a new standard analyzer with the default token pattern.
    pub fn new() -> Result<Self> {
        Ok(Self::from_tokenizer(RegexTokenizer::new()?))
    }

    /// Create a standard analyzer with a custom token pattern.
    pub fn with_token_pattern(pattern: &str) -> Result<Self> {
        Ok(Self::from_tokenizer(RegexTokenizer::with_pattern(pattern)?))
    }

    fn from_tokenizer(tokenizer: RegexTokenizer) -> Self {
        let analyzer = PipelineAnalyzer::new(Arc::new(tokenizer))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("standard");

        StandardAnalyzer { inner: analyzer }
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

impl std::fmt::Debug for StandardAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}
