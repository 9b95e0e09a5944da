//! Intent classification using TF-IDF features and logistic regression.
//!
//! # Architecture
//!
//! - `IntentClassifier` trait: common interface for classifiers
//! - `TfIdfVectorizer`: frozen vocabulary and IDF weights
//! - `LabelCodec`: intent string ↔ dense class id
//! - `MulticlassLogisticRegression`: softmax model fitted by gradient descent
//! - `LogRegIntentClassifier`: the three above, fitted together
//! - `ModelSnapshot`: bincode persistence of a fitted classifier
//!
//! # Example
//!
//! ```rust,no_run
//! use helpdesk::ml::intent_classifier::{self, IntentExample, TrainingConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let examples = vec![
//!     IntentExample::new("I forgot my password", "password_issue"),
//!     IntentExample::new("Outlook does not open", "microsoft_issue"),
//! ];
//!
//! let classifier = intent_classifier::new_logreg_based(&examples, &TrainingConfig::default())?;
//! let intent = classifier.predict("reset password")?;
//! # Ok(())
//! # }
//! ```

mod classifier;
mod core;
mod label_codec;
mod logreg;
mod ml_classifier;
mod snapshot;
mod tfidf;
mod types;

pub use self::classifier::IntentClassifier;
pub use self::core::new_logreg_based;
pub use self::label_codec::LabelCodec;
pub use self::logreg::{MulticlassLogisticRegression, TrainingConfig};
pub use self::ml_classifier::LogRegIntentClassifier;
pub use self::snapshot::ModelSnapshot;
pub use self::tfidf::{TfIdfState, TfIdfVectorizer};
pub use self::types::IntentExample;
