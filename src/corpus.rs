//! The intents document: training examples and responses per intent.
//!
//! ```json
//! {
//!   "intents": [
//!     {
//!       "intent": "password_issue",
//!       "examples": ["I forgot my password", "pamiršau slaptažodį"],
//!       "responses": {
//!         "Student": { "EN": "...", "LT": "..." },
//!         "Employee": { "EN": "..." }
//!       }
//!     }
//!   ]
//! }
//! ```

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::catalog::{IntentDefinition, ResponseCatalog, RoleResponses};
use crate::error::{HelpdeskError, Result};
use crate::ml::intent_classifier::IntentExample;

/// One intent with its example phrasings and canned responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusEntry {
    pub intent: String,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub responses: RoleResponses,
}

/// The full intents document, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentCorpus {
    pub intents: Vec<CorpusEntry>,
}

impl IntentCorpus {
    /// Parse and validate a corpus from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let corpus: IntentCorpus = serde_json::from_str(json)?;
        corpus.validate()?;
        Ok(corpus)
    }

    /// Load and validate a corpus from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let corpus = Self::from_json(&content)?;
        info!(
            "loaded {} intents ({} examples) from {}",
            corpus.intents.len(),
            corpus.example_count(),
            path.as_ref().display()
        );
        Ok(corpus)
    }

    /// A corpus must name at least one intent and carry at least one example.
    pub fn validate(&self) -> Result<()> {
        if self.intents.is_empty() {
            return Err(HelpdeskError::corpus("no intents defined"));
        }
        if let Some(entry) = self.intents.iter().find(|e| e.intent.is_empty()) {
            return Err(HelpdeskError::corpus(format!(
                "intent with {} examples has an empty name",
                entry.examples.len()
            )));
        }
        if self.example_count() == 0 {
            return Err(HelpdeskError::corpus("no training examples"));
        }
        Ok(())
    }

    /// Every (example, intent) pair, in entry order then example order.
    pub fn training_examples(&self) -> Vec<IntentExample> {
        self.intents
            .iter()
            .flat_map(|entry| {
                entry
                    .examples
                    .iter()
                    .map(|text| IntentExample::new(text.as_str(), entry.intent.as_str()))
            })
            .collect()
    }

    /// The response catalog, preserving entry order.
    pub fn catalog(&self) -> ResponseCatalog {
        ResponseCatalog::new(
            self.intents
                .iter()
                .map(|entry| IntentDefinition {
                    intent: entry.intent.clone(),
                    responses: entry.responses.clone(),
                })
                .collect(),
        )
    }

    pub fn example_count(&self) -> usize {
        self.intents.iter().map(|e| e.examples.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"{
        "intents": [
            {
                "intent": "password_issue",
                "examples": ["forgot password", "pamiršau slaptažodį"],
                "responses": {"Student": {"EN": "Reset it.", "LT": "Atkurkite."}}
            },
            {
                "intent": "greeting",
                "examples": ["hello"]
            }
        ]
    }"#;

    #[test]
    fn test_from_json() {
        let corpus = IntentCorpus::from_json(SMALL).unwrap();
        assert_eq!(corpus.intents.len(), 2);
        assert_eq!(corpus.example_count(), 3);
        assert!(corpus.intents[1].responses.is_empty());
    }

    #[test]
    fn test_training_examples_keep_order() {
        let corpus = IntentCorpus::from_json(SMALL).unwrap();
        let examples = corpus.training_examples();

        assert_eq!(
            examples,
            vec![
                IntentExample::new("forgot password", "password_issue"),
                IntentExample::new("pamiršau slaptažodį", "password_issue"),
                IntentExample::new("hello", "greeting"),
            ]
        );
    }

    #[test]
    fn test_catalog() {
        let corpus = IntentCorpus::from_json(SMALL).unwrap();
        let catalog = corpus.catalog();

        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get_response("password_issue", "student", "LT"),
            "Atkurkite."
        );
    }

    #[test]
    fn test_invalid_corpora() {
        assert!(IntentCorpus::from_json(r#"{"intents": []}"#).is_err());
        assert!(IntentCorpus::from_json(r#"{"intents": [{"intent": "x"}]}"#).is_err());
        assert!(
            IntentCorpus::from_json(r#"{"intents": [{"intent": "", "examples": ["a"]}]}"#)
                .is_err()
        );
        assert!(IntentCorpus::from_json("not json").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("intents.json");
        std::fs::write(&path, SMALL).unwrap();

        let corpus = IntentCorpus::load(&path).unwrap();
        assert_eq!(corpus.intents[0].intent, "password_issue");

        assert!(IntentCorpus::load(dir.path().join("missing.json")).is_err());
    }
}
