//! Intent classifier trait definition.

use crate::error::Result;

/// Intent classifier trait.
///
/// Implementations must be deterministic: the same text always yields the
/// same label. There is no "unknown" outcome; the best-scoring intent is
/// always returned.
pub trait IntentClassifier: Send + Sync {
    /// Predict the intent label for a free-text issue description.
    fn predict(&self, text: &str) -> Result<String>;

    /// Every label this classifier can produce, in class id order.
    fn labels(&self) -> &[String];

    /// Probability of each label for `text`, in [`labels`](Self::labels) order.
    ///
    /// Classifiers without a probabilistic model put all the mass on the
    /// predicted label.
    fn predict_proba(&self, text: &str) -> Result<Vec<(String, f64)>> {
        let intent = self.predict(text)?;
        Ok(self
            .labels()
            .iter()
            .map(|label| (label.clone(), if *label == intent { 1.0 } else { 0.0 }))
            .collect())
    }

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}
