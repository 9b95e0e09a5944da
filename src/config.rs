//! Service configuration.
//!
//! All fields have defaults, so a config file only needs the values it
//! changes:
//!
//! ```json
//! {
//!   "data_path": "resources/intents.json",
//!   "training": { "max_iterations": 500 }
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{HelpdeskError, Result};
use crate::ml::intent_classifier::TrainingConfig;

/// Corpus shipped with the crate.
pub const DEFAULT_DATA_PATH: &str = "resources/intents.json";

/// Where the corpus lives and how to train on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpdeskConfig {
    /// Intents document with training examples and responses.
    pub data_path: PathBuf,
    /// Vectorizer and classifier hyperparameters.
    pub training: TrainingConfig,
}

impl Default for HelpdeskConfig {
    fn default() -> Self {
        HelpdeskConfig {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            training: TrainingConfig::default(),
        }
    }
}

impl HelpdeskConfig {
    /// Read and validate a JSON config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: HelpdeskConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.data_path.as_os_str().is_empty() {
            return Err(HelpdeskError::config("data_path must not be empty"));
        }
        if self.training.token_pattern.is_empty() {
            return Err(HelpdeskError::config("token_pattern must not be empty"));
        }
        self.training.validate()
    }
}
