//! Multinomial logistic regression fitted by full-batch gradient descent.

use std::collections::HashMap;
use std::time::Instant;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::regex::DEFAULT_TOKEN_PATTERN;
use crate::error::{HelpdeskError, Result};
use crate::ml::models::TrainingStats;

/// Hyperparameters for fitting the intent classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Regex used by the tokenizer.
    pub token_pattern: String,
    /// Gradient descent step size.
    pub learning_rate: f64,
    /// Iteration cap.
    pub max_iterations: usize,
    /// Stop once every gradient component is below this value.
    pub tolerance: f64,
    /// Inverse L2 regularization strength.
    pub regularization_c: f64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            token_pattern: DEFAULT_TOKEN_PATTERN.to_string(),
            learning_rate: 1.0,
            max_iterations: 1000,
            tolerance: 1e-4,
            regularization_c: 1.0,
        }
    }
}

impl TrainingConfig {
    /// Reject hyperparameters that cannot produce a model.
    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate > 0.0 && self.learning_rate.is_finite()) {
            return Err(HelpdeskError::config("learning_rate must be positive"));
        }
        if self.max_iterations == 0 {
            return Err(HelpdeskError::config("max_iterations must be at least 1"));
        }
        if !(self.tolerance >= 0.0) {
            return Err(HelpdeskError::config("tolerance must not be negative"));
        }
        if !(self.regularization_c > 0.0) {
            return Err(HelpdeskError::config("regularization_c must be positive"));
        }
        Ok(())
    }

    /// Numeric hyperparameters, for model metadata.
    pub fn hyperparameters(&self) -> HashMap<String, f64> {
        HashMap::from([
            ("learning_rate".to_string(), self.learning_rate),
            ("max_iterations".to_string(), self.max_iterations as f64),
            ("tolerance".to_string(), self.tolerance),
            ("regularization_c".to_string(), self.regularization_c),
        ])
    }
}

/// Softmax classifier over dense feature vectors.
///
/// `weights` has one row per class and one column per feature; each class
/// also has an unpenalised intercept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MulticlassLogisticRegression {
    weights: Vec<Vec<f64>>,
    intercept: Vec<f64>,
}

impl MulticlassLogisticRegression {
    /// Build a model from explicit parameters.
    pub fn new(weights: Vec<Vec<f64>>, intercept: Vec<f64>) -> Result<Self> {
        if weights.is_empty() || weights.len() != intercept.len() {
            return Err(HelpdeskError::training(format!(
                "{} weight rows for {} intercepts",
                weights.len(),
                intercept.len()
            )));
        }
        let nb_features = weights[0].len();
        if weights.iter().any(|row| row.len() != nb_features) {
            return Err(HelpdeskError::training("weight rows differ in length"));
        }
        Ok(Self { weights, intercept })
    }

    /// Fit the model on feature vectors and encoded labels.
    ///
    /// Minimises the mean cross-entropy plus `||W||² / (2 C n)`, starting from
    /// all-zero parameters, so the result depends only on the inputs.
    pub fn fit(
        features: &[Vec<f64>],
        labels: &[usize],
        nb_classes: usize,
        config: &TrainingConfig,
    ) -> Result<(Self, TrainingStats)> {
        config.validate()?;

        let n_samples = features.len();
        if n_samples == 0 {
            return Err(HelpdeskError::training("no training samples"));
        }
        if labels.len() != n_samples {
            return Err(HelpdeskError::training(format!(
                "{n_samples} samples but {} labels",
                labels.len()
            )));
        }
        if nb_classes == 0 {
            return Err(HelpdeskError::training("zero classes"));
        }
        if let Some(&label) = labels.iter().find(|&&label| label >= nb_classes) {
            return Err(HelpdeskError::training(format!(
                "label {label} outside 0..{nb_classes}"
            )));
        }
        let nb_features = features[0].len();
        if features.iter().any(|row| row.len() != nb_features) {
            return Err(HelpdeskError::training("feature vectors differ in length"));
        }

        let start = Instant::now();
        let n = n_samples as f64;
        let lambda = 1.0 / (config.regularization_c * n);

        let mut model = Self {
            weights: vec![vec![0.0; nb_features]; nb_classes],
            intercept: vec![0.0; nb_classes],
        };
        let mut stats = TrainingStats::default();

        for iteration in 0..config.max_iterations {
            let mut grad_weights = vec![vec![0.0; nb_features]; nb_classes];
            let mut grad_intercept = vec![0.0; nb_classes];
            let mut loss = 0.0;

            for (x, &y) in features.iter().zip(labels) {
                let probabilities = softmax(&model.decision_function(x));
                loss -= probabilities[y].max(f64::MIN_POSITIVE).ln();

                for (class, &p) in probabilities.iter().enumerate() {
                    let residual = if class == y { p - 1.0 } else { p };
                    grad_intercept[class] += residual;
                    for (j, &value) in x.iter().enumerate() {
                        if value != 0.0 {
                            grad_weights[class][j] += residual * value;
                        }
                    }
                }
            }

            let mut penalty = 0.0;
            let mut max_gradient: f64 = 0.0;
            for class in 0..nb_classes {
                for j in 0..nb_features {
                    let w = model.weights[class][j];
                    penalty += w * w;
                    let g = grad_weights[class][j] / n + lambda * w;
                    grad_weights[class][j] = g;
                    max_gradient = max_gradient.max(g.abs());
                }
                grad_intercept[class] /= n;
                max_gradient = max_gradient.max(grad_intercept[class].abs());
            }

            let loss = loss / n + 0.5 * lambda * penalty;
            if !loss.is_finite() {
                return Err(HelpdeskError::training(format!(
                    "loss diverged at iteration {iteration}"
                )));
            }
            stats.training_losses.push(loss);
            stats.final_training_loss = loss;

            if max_gradient < config.tolerance {
                stats.converged = true;
                break;
            }

            for class in 0..nb_classes {
                for j in 0..nb_features {
                    model.weights[class][j] -= config.learning_rate * grad_weights[class][j];
                }
                model.intercept[class] -= config.learning_rate * grad_intercept[class];
            }
            stats.iterations = iteration + 1;
        }

        stats.training_time_ms = start.elapsed().as_millis() as u64;

        if !stats.converged {
            warn!(
                "logistic regression hit the iteration cap of {} (loss {:.6})",
                config.max_iterations, stats.final_training_loss
            );
            return Err(HelpdeskError::training(format!(
                "did not converge within {} iterations (tolerance {})",
                config.max_iterations, config.tolerance
            )));
        }
        debug!(
            "logistic regression converged after {} iterations (loss {:.6})",
            stats.iterations, stats.final_training_loss
        );

        Ok((model, stats))
    }

    /// Raw per-class scores `W·x + b`.
    pub fn decision_function(&self, features: &[f64]) -> Vec<f64> {
        self.weights
            .iter()
            .zip(&self.intercept)
            .map(|(row, b)| {
                row.iter()
                    .zip(features)
                    .map(|(w, x)| w * x)
                    .sum::<f64>()
                    + b
            })
            .collect()
    }

    /// Class probabilities.
    pub fn predict_proba(&self, features: &[f64]) -> Result<Vec<f64>> {
        self.check_dimension(features)?;
        Ok(softmax(&self.decision_function(features)))
    }

    /// The highest scoring class; ties go to the lowest class id.
    pub fn predict(&self, features: &[f64]) -> Result<usize> {
        self.check_dimension(features)?;
        Ok(argmax(&self.decision_function(features)))
    }

    fn check_dimension(&self, features: &[f64]) -> Result<()> {
        if features.len() != self.nb_features() {
            return Err(HelpdeskError::training(format!(
                "expected {} features, got {}",
                self.nb_features(),
                features.len()
            )));
        }
        Ok(())
    }

    pub fn nb_classes(&self) -> usize {
        self.weights.len()
    }

    pub fn nb_features(&self) -> usize {
        self.weights.first().map_or(0, Vec::len)
    }
}

fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

fn argmax(scores: &[f64]) -> usize {
    let mut best = 0;
    for (idx, &score) in scores.iter().enumerate().skip(1) {
        if score > scores[best] {
            best = idx;
        }
    }
    best
}
