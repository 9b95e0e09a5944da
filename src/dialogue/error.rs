//! Request-scoped dialogue failures.

use thiserror::Error;

/// A turn that cannot be served as asked.
///
/// These never escape a turn as `Err`: the controller turns each one into
/// an `{"error": message}` payload. Messages hold the English and Lithuanian
/// phrasing on separate lines.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogueError {
    #[error("Invalid language choice\nNetinkamas kalbos pasirinkimas.")]
    InvalidLanguage,

    #[error(
        "Invalid user type. Please select either Student or Employee.\nNetinkamas vartotojo tipas. Pasirinkite Studentą arba Darbuotoją."
    )]
    InvalidUserType,

    #[error(
        "No options available for this user type\nŠiam vartotojo tipui nėra galimų pasirinkimų."
    )]
    NoOptionsForRole,

    #[error("Invalid action\nNetinkamas veiksmas")]
    InvalidAction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_bilingual() {
        for error in [
            DialogueError::InvalidLanguage,
            DialogueError::InvalidUserType,
            DialogueError::NoOptionsForRole,
            DialogueError::InvalidAction,
        ] {
            assert_eq!(error.to_string().lines().count(), 2, "{error:?}");
        }
    }

    #[test]
    fn test_invalid_action_message() {
        assert_eq!(
            DialogueError::InvalidAction.to_string(),
            "Invalid action\nNetinkamas veiksmas"
        );
    }
}
