//! Request and result shapes exchanged with the transport layer.

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::error::DialogueError;

fn default_language() -> String {
    "EN".to_string()
}

/// One self-contained dialogue request.
///
/// ```
/// use helpdesk::dialogue::DialogueRequest;
///
/// let request: DialogueRequest = serde_json::from_str(r#"{"action": "start"}"#).unwrap();
/// assert_eq!(request.language, "EN");
/// assert!(request.user_type.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueRequest {
    #[serde(default)]
    pub action: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub user_type: Option<String>,
    #[serde(default)]
    pub issue: Option<String>,
}

impl Default for DialogueRequest {
    fn default() -> Self {
        DialogueRequest {
            action: String::new(),
            language: default_language(),
            user_type: None,
            issue: None,
        }
    }
}

impl DialogueRequest {
    pub fn new<S: Into<String>>(action: S) -> Self {
        DialogueRequest {
            action: action.into(),
            ..Default::default()
        }
    }

    pub fn with_language<S: Into<String>>(mut self, language: S) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_user_type<S: Into<String>>(mut self, user_type: S) -> Self {
        self.user_type = Some(user_type.into());
        self
    }

    pub fn with_issue<S: Into<String>>(mut self, issue: S) -> Self {
        self.issue = Some(issue.into());
        self
    }
}

/// What a turn answers with.
///
/// Serialises to the bare JSON shapes clients expect: `{message, options}`,
/// `{response}` or `{error}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TurnResult {
    /// Greeting with the language codes to choose from.
    Greeting { message: String, options: Vec<String> },
    /// Role prompt in the chosen language.
    RolePrompt { message: String, options: Vec<String> },
    /// Issue categories for the chosen role.
    IssueOptions { message: String, options: Vec<String> },
    /// Final canned response. The predicted intent is kept for callers but
    /// not serialised.
    Response {
        response: String,
        #[serde(skip)]
        intent: String,
    },
    Error { error: String },
}

impl TurnResult {
    pub fn options(&self) -> Option<&[String]> {
        match self {
            TurnResult::Greeting { options, .. }
            | TurnResult::RolePrompt { options, .. }
            | TurnResult::IssueOptions { options, .. } => Some(options),
            _ => None,
        }
    }

    /// The user-facing text of the result, whatever its kind.
    pub fn text(&self) -> &str {
        match self {
            TurnResult::Greeting { message, .. }
            | TurnResult::RolePrompt { message, .. }
            | TurnResult::IssueOptions { message, .. } => message,
            TurnResult::Response { response, .. } => response,
            TurnResult::Error { error } => error,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, TurnResult::Error { .. })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<DialogueError> for TurnResult {
    fn from(error: DialogueError) -> Self {
        TurnResult::Error {
            error: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request: DialogueRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, DialogueRequest::default());
        assert_eq!(request.action, "");
        assert_eq!(request.language, "EN");
    }

    #[test]
    fn test_request_builder() {
        let request = DialogueRequest::new("choose_issue")
            .with_language("LT")
            .with_user_type("studentas")
            .with_issue("pamiršau slaptažodį");

        let parsed: DialogueRequest = serde_json::from_str(
            r#"{"action": "choose_issue", "language": "LT", "user_type": "studentas", "issue": "pamiršau slaptažodį"}"#,
        )
        .unwrap();
        assert_eq!(request, parsed);
    }

    #[test]
    fn test_result_json_shapes() {
        let greeting = TurnResult::Greeting {
            message: "hi".to_string(),
            options: vec!["EN".to_string(), "LT".to_string()],
        };
        assert_eq!(
            greeting.to_json().unwrap(),
            r#"{"message":"hi","options":["EN","LT"]}"#
        );

        let response = TurnResult::Response {
            response: "done".to_string(),
            intent: "password_issue".to_string(),
        };
        assert_eq!(response.to_json().unwrap(), r#"{"response":"done"}"#);

        let error = TurnResult::from(DialogueError::InvalidAction);
        assert!(error.is_error());
        assert_eq!(
            error.to_json().unwrap(),
            r#"{"error":"Invalid action\nNetinkamas veiksmas"}"#
        );
    }

    #[test]
    fn test_accessors() {
        let prompt = TurnResult::RolePrompt {
            message: "Please choose your role:".to_string(),
            options: vec!["Student".to_string()],
        };
        assert_eq!(prompt.options().unwrap().len(), 1);
        assert_eq!(prompt.text(), "Please choose your role:");
        assert!(!prompt.is_error());

        let error = TurnResult::from(DialogueError::InvalidLanguage);
        assert!(error.options().is_none());
    }
}
