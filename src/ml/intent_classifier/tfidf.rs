//! TF-IDF vectorizer for text feature extraction.

use std::collections::BTreeMap;
use std::sync::Arc;

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::error::{HelpdeskError, Result};

/// TF-IDF vectorizer for text feature extraction.
///
/// The vocabulary is assigned in ascending lexical order of tokens, so the
/// same corpus always produces the same feature indices. Once fitted the
/// vocabulary is frozen: tokens unseen at fit time are ignored by
/// [`transform`](Self::transform).
pub struct TfIdfVectorizer {
    /// Vocabulary: word -> index mapping.
    vocabulary: AHashMap<String, usize>,
    /// Inverse document frequency for each word.
    idf: Vec<f64>,
    /// Analyzer for tokenization.
    analyzer: Arc<dyn Analyzer>,
}

/// Serializable state of a fitted vectorizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfIdfState {
    /// Terms in feature index order.
    pub terms: Vec<String>,
    /// IDF weight per feature index.
    pub idf: Vec<f64>,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Create a new, unfitted TF-IDF vectorizer with the specified analyzer.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self {
            vocabulary: AHashMap::new(),
            idf: Vec::new(),
            analyzer,
        }
    }

    /// Fit the vectorizer on training documents.
    ///
    /// IDF is smoothed as if one extra document contained every term:
    /// `idf(t) = ln((1 + n) / (1 + df(t))) + 1`.
    pub fn fit(&mut self, documents: &[String]) -> Result<()> {
        if documents.is_empty() {
            return Err(HelpdeskError::training(
                "cannot fit a vectorizer on zero documents",
            ));
        }

        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();

        for doc in documents {
            let unique_tokens: AHashSet<String> = self.tokenize(doc)?.into_iter().collect();
            for token in unique_tokens {
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }

        if document_frequency.is_empty() {
            return Err(HelpdeskError::training(
                "empty vocabulary: no document contains a single token",
            ));
        }

        let n_documents = documents.len();
        let mut vocabulary = AHashMap::with_capacity(document_frequency.len());
        let mut idf = Vec::with_capacity(document_frequency.len());

        // BTreeMap iterates in lexical order, which fixes the feature indices
        for (idx, (term, df)) in document_frequency.into_iter().enumerate() {
            idf.push(((n_documents as f64 + 1.0) / (df as f64 + 1.0)).ln() + 1.0);
            vocabulary.insert(term, idx);
        }

        self.vocabulary = vocabulary;
        self.idf = idf;

        Ok(())
    }

    /// Transform a document into an L2-normalised TF-IDF feature vector.
    ///
    /// A document with no known tokens maps to the all-zero vector.
    pub fn transform(&self, document: &str) -> Result<Vec<f64>> {
        let mut features = vec![0.0; self.vocabulary.len()];

        // Count term frequencies
        for token in self.tokenize(document)? {
            if let Some(&idx) = self.vocabulary.get(&token) {
                features[idx] += 1.0;
            }
        }

        for (idx, value) in features.iter_mut().enumerate() {
            *value *= self.idf[idx];
        }

        let l2_norm = features.iter().map(|v| v * v).sum::<f64>().sqrt();
        if l2_norm > 0.0 {
            for value in &mut features {
                *value /= l2_norm;
            }
        }

        Ok(features)
    }

    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyzer.analyze(text)?.map(|token| token.text).collect())
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Feature index of a term, if it is in the vocabulary.
    pub fn feature_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// Export the fitted state for persistence.
    pub fn state(&self) -> TfIdfState {
        let mut terms = vec![String::new(); self.vocabulary.len()];
        for (term, &idx) in &self.vocabulary {
            terms[idx] = term.clone();
        }

        TfIdfState {
            terms,
            idf: self.idf.clone(),
        }
    }

    /// Rebuild a fitted vectorizer from persisted state.
    pub fn from_state(state: TfIdfState, analyzer: Arc<dyn Analyzer>) -> Result<Self> {
        if state.terms.len() != state.idf.len() {
            return Err(HelpdeskError::training(format!(
                "vectorizer state has {} terms but {} idf weights",
                state.terms.len(),
                state.idf.len()
            )));
        }

        let vocabulary: AHashMap<String, usize> = state
            .terms
            .into_iter()
            .enumerate()
            .map(|(idx, term)| (term, idx))
            .collect();
        if vocabulary.len() != state.idf.len() {
            return Err(HelpdeskError::training(format!(
                "vectorizer state repeats terms: {} distinct of {}",
                vocabulary.len(),
                state.idf.len()
            )));
        }

        Ok(Self {
            vocabulary,
            idf: state.idf,
            analyzer,
        })
    }
}
