//! Bijective mapping between intent labels and dense class ids.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{HelpdeskError, Result};

/// Maps intent strings to class ids `0..K` and back.
///
/// Ids are assigned in ascending lexical order of the distinct labels, so
/// the same corpus always yields the same codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCodec {
    classes: Vec<String>,
}

impl LabelCodec {
    /// Fit the codec on every label observed at training time.
    pub fn fit<S: AsRef<str>>(labels: &[S]) -> Result<Self> {
        let classes: Vec<String> = labels
            .iter()
            .map(|label| label.as_ref().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        if classes.is_empty() {
            return Err(HelpdeskError::training("cannot fit a label codec on zero labels"));
        }

        Ok(LabelCodec { classes })
    }

    /// Encode a label into its class id.
    pub fn encode(&self, label: &str) -> Result<usize> {
        self.classes
            .binary_search_by(|class| class.as_str().cmp(label))
            .map_err(|_| HelpdeskError::unknown_label(label))
    }

    /// Encode a batch of labels.
    pub fn encode_all<S: AsRef<str>>(&self, labels: &[S]) -> Result<Vec<usize>> {
        labels.iter().map(|label| self.encode(label.as_ref())).collect()
    }

    /// Decode a class id back into its label.
    pub fn decode(&self, id: usize) -> Result<&str> {
        self.classes
            .get(id)
            .map(String::as_str)
            .ok_or(HelpdeskError::InvalidId {
                id,
                classes: self.classes.len(),
            })
    }

    /// All labels in class id order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// A fitted codec always has at least one class.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
