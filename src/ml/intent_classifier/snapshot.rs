//! Binary snapshots of a fitted intent classifier.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use log::info;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::StandardAnalyzer;
use crate::error::Result;
use crate::ml::models::ModelMetadata;

use super::label_codec::LabelCodec;
use super::logreg::{MulticlassLogisticRegression, TrainingConfig};
use super::ml_classifier::LogRegIntentClassifier;
use super::tfidf::{TfIdfState, TfIdfVectorizer};

/// Everything needed to rebuild a [`LogRegIntentClassifier`] without refitting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSnapshot {
    pub metadata: ModelMetadata,
    pub token_pattern: String,
    pub vectorizer: TfIdfState,
    pub model: MulticlassLogisticRegression,
    pub codec: LabelCodec,
}

impl ModelSnapshot {
    /// Capture a fitted classifier.
    pub fn capture(
        classifier: &LogRegIntentClassifier,
        training_examples: usize,
        config: &TrainingConfig,
    ) -> Self {
        ModelSnapshot {
            metadata: ModelMetadata {
                name: "logreg_tfidf".to_string(),
                version: crate::VERSION.to_string(),
                trained_at: chrono::Utc::now(),
                training_examples,
                hyperparameters: config.hyperparameters(),
            },
            token_pattern: classifier.token_pattern().to_string(),
            vectorizer: classifier.vectorizer().state(),
            model: classifier.model().clone(),
            codec: classifier.codec().clone(),
        }
    }

    /// Rebuild the classifier this snapshot was taken from.
    pub fn into_classifier(self) -> Result<LogRegIntentClassifier> {
        let analyzer = Arc::new(StandardAnalyzer::with_token_pattern(&self.token_pattern)?);
        let vectorizer = TfIdfVectorizer::from_state(self.vectorizer, analyzer)?;
        LogRegIntentClassifier::from_parts(vectorizer, self.model, self.codec, self.token_pattern)
    }

    /// Save the snapshot to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        bincode::serialize_into(&mut writer, self)?;
        writer.flush()?;
        info!("saved model snapshot to {}", path.as_ref().display());
        Ok(())
    }

    /// Load a snapshot from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        let snapshot: ModelSnapshot = bincode::deserialize_from(reader)?;
        info!(
            "loaded model snapshot from {} (trained {})",
            path.as_ref().display(),
            snapshot.metadata.trained_at
        );
        Ok(snapshot)
    }
}
