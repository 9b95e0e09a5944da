//! The trained, read-only state every request is served from.

use std::fmt;
use std::sync::Arc;

use log::{info, warn};

use crate::catalog::ResponseCatalog;
use crate::corpus::IntentCorpus;
use crate::dialogue::{DialogueController, DialogueRequest, TurnResult};
use crate::error::Result;
use crate::ml::intent_classifier::{self, IntentClassifier, ModelSnapshot, TrainingConfig};

/// Classifier and response catalog, built once and then only read.
///
/// The context is `Send + Sync`; wrap it in an [`Arc`] to share it between
/// request handlers.
///
/// # Example
///
/// ```rust,no_run
/// use helpdesk::context::HelpdeskContext;
/// use helpdesk::corpus::IntentCorpus;
/// use helpdesk::ml::intent_classifier::TrainingConfig;
///
/// # fn main() -> helpdesk::error::Result<()> {
/// let corpus = IntentCorpus::load("resources/intents.json")?;
/// let context = HelpdeskContext::train(&corpus, &TrainingConfig::default())?;
///
/// let turn = context.handle_turn("choose_issue", "EN", Some("Student"), Some("I forgot my password"))?;
/// println!("{}", turn.text());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct HelpdeskContext {
    classifier: Arc<dyn IntentClassifier>,
    catalog: ResponseCatalog,
}

impl HelpdeskContext {
    /// Assemble a context from any classifier and a catalog.
    ///
    /// Catalog intents the classifier can never predict are tolerated but
    /// logged, since their responses are unreachable.
    pub fn new(classifier: Arc<dyn IntentClassifier>, catalog: ResponseCatalog) -> Self {
        let labels = classifier.labels();
        for intent in catalog.intents() {
            if !labels.iter().any(|label| label == intent) {
                warn!(
                    "catalog intent {intent:?} is never predicted by {}",
                    classifier.name()
                );
            }
        }

        HelpdeskContext {
            classifier,
            catalog,
        }
    }

    /// Fit a classifier on `corpus` and pair it with the corpus' catalog.
    pub fn train(corpus: &IntentCorpus, config: &TrainingConfig) -> Result<Self> {
        corpus.validate()?;
        let classifier = intent_classifier::new_logreg_based(&corpus.training_examples(), config)?;
        Ok(Self::new(Arc::from(classifier), corpus.catalog()))
    }

    /// Restore a previously trained classifier instead of fitting one.
    pub fn from_snapshot(snapshot: ModelSnapshot, catalog: ResponseCatalog) -> Result<Self> {
        info!(
            "restoring {} model v{} trained {} on {} examples",
            snapshot.metadata.name,
            snapshot.metadata.version,
            snapshot.metadata.trained_at,
            snapshot.metadata.training_examples
        );
        let classifier = snapshot.into_classifier()?;
        Ok(Self::new(Arc::new(classifier), catalog))
    }

    /// The most likely intent for a free-text issue description.
    pub fn predict_intent(&self, text: &str) -> Result<String> {
        self.classifier.predict(text)
    }

    /// Probability of every intent for a free-text issue description.
    pub fn predict_proba(&self, text: &str) -> Result<Vec<(String, f64)>> {
        self.classifier.predict_proba(text)
    }

    /// Catalog response for an intent, role and language.
    pub fn get_response(&self, intent: &str, role: &str, language: &str) -> &str {
        self.catalog.get_response(intent, role, language)
    }

    /// Answer one dialogue request.
    pub fn handle(&self, request: &DialogueRequest) -> Result<TurnResult> {
        DialogueController::new(self.classifier.as_ref(), &self.catalog).handle(request)
    }

    /// Answer one dialogue turn given as loose fields.
    pub fn handle_turn(
        &self,
        action: &str,
        language: &str,
        user_type: Option<&str>,
        issue: Option<&str>,
    ) -> Result<TurnResult> {
        let request = DialogueRequest {
            action: action.to_string(),
            language: language.to_string(),
            user_type: user_type.map(str::to_string),
            issue: issue.map(str::to_string),
        };
        self.handle(&request)
    }

    pub fn classifier(&self) -> &dyn IntentClassifier {
        self.classifier.as_ref()
    }

    pub fn catalog(&self) -> &ResponseCatalog {
        &self.catalog
    }
}

impl fmt::Debug for HelpdeskContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HelpdeskContext")
            .field("classifier", &self.classifier.name())
            .field("labels", &self.classifier.labels())
            .field("catalog_entries", &self.catalog.len())
            .finish()
    }
}
