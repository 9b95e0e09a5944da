//! Machine learning for issue classification.
//!
//! The [`intent_classifier`] module turns free-text issue descriptions into
//! intent labels with a TF-IDF vectorizer feeding a multinomial logistic
//! regression. [`models`] holds the bookkeeping types shared by training and
//! model snapshots.

pub mod intent_classifier;
pub mod models;
