//! Per-turn dispatch over the trained classifier and the response catalog.

use log::debug;

use crate::catalog::ResponseCatalog;
use crate::error::Result;
use crate::ml::intent_classifier::IntentClassifier;

use super::action::Action;
use super::error::DialogueError;
use super::language::Language;
use super::options;
use super::payload::{DialogueRequest, TurnResult};
use super::role::Role;

type TurnOutcome = std::result::Result<TurnResult, DialogueError>;

/// Routes one request through the conversation stages.
///
/// The controller only borrows the classifier and catalog and holds no
/// state of its own, so any number of them can run side by side.
pub struct DialogueController<'a> {
    classifier: &'a dyn IntentClassifier,
    catalog: &'a ResponseCatalog,
}

impl<'a> DialogueController<'a> {
    pub fn new(classifier: &'a dyn IntentClassifier, catalog: &'a ResponseCatalog) -> Self {
        DialogueController {
            classifier,
            catalog,
        }
    }

    /// Answer one turn.
    ///
    /// Dialogue failures come back as [`TurnResult::Error`]; `Err` is
    /// reserved for a classifier that cannot produce a label at all.
    pub fn handle(&self, request: &DialogueRequest) -> Result<TurnResult> {
        let language = Language::parse(&request.language);

        let outcome = match Action::resolve(&request.action, language) {
            Some(action) => {
                debug!(
                    "action {:?} resolved to {action} (language {:?})",
                    request.action, request.language
                );
                match action {
                    Action::Start => Ok(Self::greeting()),
                    Action::SetLanguage => Self::role_prompt(language),
                    Action::SetUserType => {
                        Self::issue_options(language, request.user_type.as_deref())
                    }
                    Action::ChooseIssue => match language {
                        Some(language) => Ok(self.respond(
                            language,
                            request.user_type.as_deref(),
                            request.issue.as_deref(),
                        )?),
                        None => Err(DialogueError::InvalidLanguage),
                    },
                }
            }
            None => Err(DialogueError::InvalidAction),
        };

        Ok(outcome.unwrap_or_else(|error| {
            debug!("turn {:?} rejected: {error:?}", request.action);
            TurnResult::from(error)
        }))
    }

    fn greeting() -> TurnResult {
        TurnResult::Greeting {
            message: options::GREETING.to_string(),
            options: options::language_options(),
        }
    }

    fn role_prompt(language: Option<Language>) -> TurnOutcome {
        let language = language.ok_or(DialogueError::InvalidLanguage)?;
        Ok(TurnResult::RolePrompt {
            message: options::role_prompt(language).to_string(),
            options: options::role_options(language),
        })
    }

    fn issue_options(language: Option<Language>, user_type: Option<&str>) -> TurnOutcome {
        let language = language.ok_or(DialogueError::InvalidLanguage)?;
        let role = user_type
            .and_then(|token| Role::from_synonym(token, language))
            .ok_or(DialogueError::InvalidUserType)?;
        let choices = options::issue_options(role, language).ok_or(DialogueError::NoOptionsForRole)?;

        Ok(TurnResult::IssueOptions {
            message: options::ISSUE_PROMPT.to_string(),
            options: choices.iter().map(|c| c.to_string()).collect(),
        })
    }

    fn respond(
        &self,
        language: Language,
        user_type: Option<&str>,
        issue: Option<&str>,
    ) -> Result<TurnResult> {
        // A localized role name is mapped to its catalog key; anything else
        // goes to the catalog as typed.
        let role = match user_type {
            Some(token) => Role::from_synonym(token, language)
                .map(|role| role.as_str().to_string())
                .unwrap_or_else(|| token.to_string()),
            None => String::new(),
        };

        let intent = self.classifier.predict(issue.unwrap_or_default())?;
        let response = self.catalog.get_response(&intent, &role, language.code());
        debug!("issue classified as {intent} for role {role:?} in {language}");

        Ok(TurnResult::Response {
            response: response.to_string(),
            intent,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::catalog::{FALLBACK_RESPONSE, IntentDefinition};

    /// Classifies by keyword so tests do not depend on training.
    struct KeywordStub {
        labels: Vec<String>,
    }

    impl KeywordStub {
        fn new() -> Self {
            KeywordStub {
                labels: vec!["ais_issue".to_string(), "password_issue".to_string()],
            }
        }
    }

    impl IntentClassifier for KeywordStub {
        fn predict(&self, text: &str) -> Result<String> {
            let text = text.to_lowercase();
            let intent = if text.contains("password") || text.contains("slaptažod") {
                "password_issue"
            } else {
                "ais_issue"
            };
            Ok(intent.to_string())
        }

        fn labels(&self) -> &[String] {
            &self.labels
        }

        fn name(&self) -> &str {
            "keyword_stub"
        }
    }

    fn texts(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(language, text)| (language.to_string(), text.to_string()))
            .collect()
    }

    fn catalog() -> ResponseCatalog {
        let mut responses = HashMap::new();
        responses.insert(
            "Student".to_string(),
            texts(&[
                ("EN", "Reset your password in AIS."),
                ("LT", "Atkurkite slaptažodį AIS."),
            ]),
        );
        responses.insert("Employee".to_string(), texts(&[("EN", "Contact IT.")]));

        ResponseCatalog::new(vec![IntentDefinition {
            intent: "password_issue".to_string(),
            responses,
        }])
    }

    fn turn(request: DialogueRequest) -> TurnResult {
        let classifier = KeywordStub::new();
        let catalog = catalog();
        DialogueController::new(&classifier, &catalog)
            .handle(&request)
            .unwrap()
    }

    #[test]
    fn test_start() {
        let result = turn(DialogueRequest::new("start"));
        assert_eq!(
            result,
            TurnResult::Greeting {
                message: options::GREETING.to_string(),
                options: vec!["EN".to_string(), "LT".to_string()],
            }
        );
        // start needs no valid language
        assert!(!turn(DialogueRequest::new("start").with_language("FR")).is_error());
    }

    #[test]
    fn test_set_language() {
        let result = turn(DialogueRequest::new("set_language").with_language("LT"));
        assert_eq!(result.text(), "Prašome pasirinkti savo vaidmenį:");
        assert_eq!(result.options().unwrap(), ["Studentas", "Darbuotojas"]);

        let result = turn(DialogueRequest::new("set_language").with_language("FR"));
        assert_eq!(result, TurnResult::from(DialogueError::InvalidLanguage));

        let result = turn(DialogueRequest::new("set_language").with_language("lt"));
        assert_eq!(result, TurnResult::from(DialogueError::InvalidLanguage));
    }

    #[test]
    fn test_set_user_type() {
        let result = turn(
            DialogueRequest::new("nustatyti_vartotojo_tipą")
                .with_language("LT")
                .with_user_type("darbuotojas"),
        );
        assert!(matches!(result, TurnResult::IssueOptions { .. }));
        assert_eq!(result.options().unwrap().len(), 4);

        let result = turn(DialogueRequest::new("set_user_type").with_user_type("teacher"));
        assert_eq!(result, TurnResult::from(DialogueError::InvalidUserType));

        let result = turn(DialogueRequest::new("set_user_type"));
        assert_eq!(result, TurnResult::from(DialogueError::InvalidUserType));

        let result = turn(
            DialogueRequest::new("set_user_type")
                .with_language("FR")
                .with_user_type("student"),
        );
        assert_eq!(result, TurnResult::from(DialogueError::InvalidLanguage));
    }

    #[test]
    fn test_choose_issue() {
        let result = turn(
            DialogueRequest::new("choose_issue")
                .with_user_type("Student")
                .with_issue("I forgot my password"),
        );
        assert_eq!(
            result,
            TurnResult::Response {
                response: "Reset your password in AIS.".to_string(),
                intent: "password_issue".to_string(),
            }
        );
    }

    #[test]
    fn test_choose_issue_localized() {
        let result = turn(
            DialogueRequest::new("pasirinkti_problema")
                .with_language("LT")
                .with_user_type("studentas")
                .with_issue("pamiršau slaptažodį"),
        );
        assert_eq!(result.text(), "Atkurkite slaptažodį AIS.");

        // no Lithuanian text for employees, English is used
        let result = turn(
            DialogueRequest::new("choose_issue")
                .with_language("LT")
                .with_user_type("Darbuotojas")
                .with_issue("slaptažodis"),
        );
        assert_eq!(result.text(), "Contact IT.");
    }

    #[test]
    fn test_choose_issue_falls_back() {
        // the stub predicts an intent the catalog does not know
        let result = turn(
            DialogueRequest::new("choose_issue")
                .with_user_type("Student")
                .with_issue("grades missing"),
        );
        assert_eq!(result.text(), FALLBACK_RESPONSE);

        // no role at all
        let result = turn(DialogueRequest::new("choose_issue").with_issue("password"));
        assert_eq!(result.text(), FALLBACK_RESPONSE);

        // missing issue text is classified as empty
        let result = turn(DialogueRequest::new("choose_issue").with_user_type("student"));
        assert!(matches!(result, TurnResult::Response { .. }));
    }

    #[test]
    fn test_invalid_action() {
        for action in ["", "restart", "paleisti"] {
            let result = turn(DialogueRequest::new(action));
            assert_eq!(result, TurnResult::from(DialogueError::InvalidAction));
        }
        let result = turn(DialogueRequest::new("pasirinkti_problema").with_language("EN"));
        assert_eq!(result, TurnResult::from(DialogueError::InvalidAction));
    }

    #[test]
    fn test_classifier_failure_propagates() {
        struct Failing;
        impl IntentClassifier for Failing {
            fn predict(&self, _text: &str) -> Result<String> {
                Err(crate::error::HelpdeskError::training("not fitted"))
            }
            fn labels(&self) -> &[String] {
                &[]
            }
            fn name(&self) -> &str {
                "failing"
            }
        }

        let catalog = catalog();
        let controller = DialogueController::new(&Failing, &catalog);
        assert!(
            controller
                .handle(&DialogueRequest::new("choose_issue").with_issue("x"))
                .is_err()
        );
        assert!(controller.handle(&DialogueRequest::new("start")).is_ok());
    }
}
