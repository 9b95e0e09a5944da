//! Helper functions for creating intent classifiers.

use crate::error::Result;
use crate::ml::intent_classifier::classifier::IntentClassifier;
use crate::ml::intent_classifier::logreg::TrainingConfig;
use crate::ml::intent_classifier::ml_classifier::LogRegIntentClassifier;
use crate::ml::intent_classifier::types::IntentExample;

/// Fit a logistic regression intent classifier from training examples.
pub fn new_logreg_based(
    examples: &[IntentExample],
    config: &TrainingConfig,
) -> Result<Box<dyn IntentClassifier>> {
    Ok(Box::new(LogRegIntentClassifier::fit(examples, config)?))
}
