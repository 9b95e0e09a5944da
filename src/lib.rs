//! # Helpdesk
//!
//! A bilingual (English/Lithuanian) help-desk assistant for students and
//! employees.
//!
//! ## Features
//!
//! - TF-IDF text vectorizer over a regex/lowercase analysis pipeline
//! - Multinomial logistic regression intent classifier
//! - Response catalog with English and fixed bilingual fallbacks
//! - Stateless four-stage dialogue router
//! - Model snapshots, so serving does not require refitting
//!
//! ## Example
//!
//! ```rust,no_run
//! use helpdesk::context::HelpdeskContext;
//! use helpdesk::corpus::IntentCorpus;
//! use helpdesk::ml::intent_classifier::TrainingConfig;
//!
//! # fn main() -> helpdesk::error::Result<()> {
//! let corpus = IntentCorpus::load("resources/intents.json")?;
//! let context = HelpdeskContext::train(&corpus, &TrainingConfig::default())?;
//!
//! let intent = context.predict_intent("I forgot my password")?;
//! println!("{}", context.get_response(&intent, "Student", "EN"));
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod context;
pub mod corpus;
pub mod dialogue;
pub mod error;
pub mod ml;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
