//! Pipeline analyzer that combines a tokenizer and filters.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use helpdesk::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use helpdesk::analysis::token_filter::LowercaseFilter;
//! use helpdesk::analysis::tokenizer::RegexTokenizer;
//!
//! let tokenizer = Arc::new(RegexTokenizer::new().unwrap());
//! let analyzer = PipelineAnalyzer::new(tokenizer)
//!     .add_filter(Arc::new(LowercaseFilter::new()))
//!     .with_name("issues");
//!
//! let tokens: Vec<_> = analyzer.analyze("Teams CRASHES").unwrap().collect();
//! assert_eq!(tokens[1].text, "crashes");
//! assert_eq!(analyzer.pipeline_name(), "issues");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// The configured name of this pipeline.
    pub fn pipeline_name(&self) -> &str {
        &self.name
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;

        // Apply filters in sequence
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;
    use crate::analysis::token_filter::LowercaseFilter;
    use crate::analysis::tokenizer::RegexTokenizer;

    #[test]
    fn test_pipeline_without_filters_keeps_case() {
        let analyzer = PipelineAnalyzer::new(Arc::new(RegexTokenizer::new().unwrap()));
        let tokens: Vec<Token> = analyzer.analyze("AIS Error").unwrap().collect();

        assert_eq!(tokens[0].text, "AIS");
        assert_eq!(tokens[1].text, "Error");
        assert_eq!(analyzer.pipeline_name(), "pipeline_regex");
        assert!(analyzer.filters().is_empty());
    }

    #[test]
    fn test_pipeline_applies_filters() {
        let analyzer = PipelineAnalyzer::new(Arc::new(RegexTokenizer::new().unwrap()))
            .add_filter(Arc::new(LowercaseFilter::new()));
        let tokens: Vec<Token> = analyzer.analyze("AIS Error").unwrap().collect();

        assert_eq!(tokens[0].text, "ais");
        assert_eq!(tokens[1].text, "error");
        assert_eq!(analyzer.filters().len(), 1);
    }
}
