//! Logistic regression intent classifier over TF-IDF features.

use std::sync::Arc;

use log::info;

use crate::analysis::analyzer::StandardAnalyzer;
use crate::error::{HelpdeskError, Result};
use crate::ml::models::TrainingStats;

use super::classifier::IntentClassifier;
use super::label_codec::LabelCodec;
use super::logreg::{MulticlassLogisticRegression, TrainingConfig};
use super::tfidf::TfIdfVectorizer;
use super::types::IntentExample;

/// Vectorizer, model and codec fitted together on one corpus.
///
/// Nothing here is mutable after [`fit`](Self::fit) returns, so a single
/// instance can serve any number of threads.
#[derive(Debug)]
pub struct LogRegIntentClassifier {
    vectorizer: TfIdfVectorizer,
    model: MulticlassLogisticRegression,
    codec: LabelCodec,
    token_pattern: String,
    stats: TrainingStats,
}

impl LogRegIntentClassifier {
    /// Fit the vectorizer, label codec and logistic regression on `examples`.
    pub fn fit(examples: &[IntentExample], config: &TrainingConfig) -> Result<Self> {
        if examples.is_empty() {
            return Err(HelpdeskError::training("training examples cannot be empty"));
        }
        config.validate()?;

        let documents: Vec<String> = examples.iter().map(|e| e.text.clone()).collect();
        let labels: Vec<&str> = examples.iter().map(|e| e.intent.as_str()).collect();

        let analyzer = Arc::new(StandardAnalyzer::with_token_pattern(&config.token_pattern)?);
        let mut vectorizer = TfIdfVectorizer::new(analyzer);
        vectorizer.fit(&documents)?;

        let codec = LabelCodec::fit(&labels)?;
        let encoded = codec.encode_all(&labels)?;

        let features = documents
            .iter()
            .map(|doc| vectorizer.transform(doc))
            .collect::<Result<Vec<_>>>()?;

        let (model, stats) =
            MulticlassLogisticRegression::fit(&features, &encoded, codec.len(), config)?;

        info!(
            "trained intent classifier: {} examples, {} features, {} intents, {} iterations, loss {:.4}",
            examples.len(),
            vectorizer.vocabulary_size(),
            codec.len(),
            stats.iterations,
            stats.final_training_loss
        );

        Ok(Self {
            vectorizer,
            model,
            codec,
            token_pattern: config.token_pattern.clone(),
            stats,
        })
    }

    /// Reassemble a classifier from already fitted parts.
    pub fn from_parts(
        vectorizer: TfIdfVectorizer,
        model: MulticlassLogisticRegression,
        codec: LabelCodec,
        token_pattern: String,
    ) -> Result<Self> {
        if model.nb_features() != vectorizer.vocabulary_size() {
            return Err(HelpdeskError::training(format!(
                "model expects {} features but the vocabulary has {}",
                model.nb_features(),
                vectorizer.vocabulary_size()
            )));
        }
        if model.nb_classes() != codec.len() {
            return Err(HelpdeskError::training(format!(
                "model has {} classes but the codec has {}",
                model.nb_classes(),
                codec.len()
            )));
        }

        Ok(Self {
            vectorizer,
            model,
            codec,
            token_pattern,
            stats: TrainingStats::default(),
        })
    }

    /// Trimmed and lowercased feature vector for an issue description.
    fn features(&self, text: &str) -> Result<Vec<f64>> {
        self.vectorizer.transform(&text.trim().to_lowercase())
    }

    pub fn vectorizer(&self) -> &TfIdfVectorizer {
        &self.vectorizer
    }

    pub fn model(&self) -> &MulticlassLogisticRegression {
        &self.model
    }

    pub fn codec(&self) -> &LabelCodec {
        &self.codec
    }

    pub fn token_pattern(&self) -> &str {
        &self.token_pattern
    }

    /// Statistics of the fit; empty for a classifier loaded from a snapshot.
    pub fn training_stats(&self) -> &TrainingStats {
        &self.stats
    }
}

impl IntentClassifier for LogRegIntentClassifier {
    fn predict(&self, text: &str) -> Result<String> {
        let class_id = self.model.predict(&self.features(text)?)?;
        Ok(self.codec.decode(class_id)?.to_string())
    }

    fn labels(&self) -> &[String] {
        self.codec.classes()
    }

    fn predict_proba(&self, text: &str) -> Result<Vec<(String, f64)>> {
        let probabilities = self.model.predict_proba(&self.features(text)?)?;
        Ok(self
            .codec
            .classes()
            .iter()
            .cloned()
            .zip(probabilities)
            .collect())
    }

    fn name(&self) -> &str {
        "logreg_tfidf"
    }
}
