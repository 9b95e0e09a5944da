//! Common types for intent classification.

use serde::{Deserialize, Serialize};

/// One training example: an issue description and its intent label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentExample {
    /// Example text.
    pub text: String,
    /// Intent label.
    pub intent: String,
}

impl IntentExample {
    /// Create a new example.
    pub fn new<T: Into<String>, I: Into<String>>(text: T, intent: I) -> Self {
        IntentExample {
            text: text.into(),
            intent: intent.into(),
        }
    }
}
