//! Training bookkeeping shared by the classifier and model snapshots.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Model metadata for tracking model information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Model name/identifier.
    pub name: String,
    /// Crate version that produced the model.
    pub version: String,
    /// Training timestamp.
    pub trained_at: chrono::DateTime<chrono::Utc>,
    /// Number of training examples used.
    pub training_examples: usize,
    /// Model hyperparameters.
    pub hyperparameters: HashMap<String, f64>,
}

/// Training statistics for one fit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingStats {
    /// Training loss after each iteration.
    pub training_losses: Vec<f64>,
    /// Number of gradient steps taken.
    pub iterations: usize,
    /// Training time in milliseconds.
    pub training_time_ms: u64,
    /// Final training loss.
    pub final_training_loss: f64,
    /// Whether the gradient fell below the tolerance before the iteration cap.
    pub converged: bool,
}
