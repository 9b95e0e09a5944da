//! Fixed prompts and option lists shown during the conversation.

use super::language::Language;
use super::role::Role;

/// Greeting sent for `start`, in both languages.
pub const GREETING: &str = "Hi! How can I help you?\nLabas! Kaip galiu tau padėti?";

/// Prompt preceding the issue categories, in both languages.
pub const ISSUE_PROMPT: &str = "Please select your issue:\nPasirinkite problemą:";

const ISSUE_OPTIONS: &[(Role, Language, &[&str])] = &[
    (
        Role::Student,
        Language::En,
        &[
            "AIS related issue",
            "Microsoft related issue",
            "Password related issue",
        ],
    ),
    (
        Role::Employee,
        Language::En,
        &[
            "AIS related issue",
            "Microsoft related issue",
            "Password related issue",
            "2FA issue",
        ],
    ),
    (
        Role::Student,
        Language::Lt,
        &[
            "Su AIS susijusi problema",
            "Su Microsoft susijusi problema",
            "Su slaptažodžiu susijusi problema",
        ],
    ),
    (
        Role::Employee,
        Language::Lt,
        &[
            "Su AIS susijusi problema",
            "Su Microsoft susijusi problema",
            "Su slaptažodžiu susijusi problema",
            "2AF problema",
        ],
    ),
];

/// Language codes offered after the greeting.
pub fn language_options() -> Vec<String> {
    Language::ALL.iter().map(|l| l.code().to_string()).collect()
}

/// The role prompt, worded entirely in `language`.
pub fn role_prompt(language: Language) -> &'static str {
    match language {
        Language::En => "Please choose your role:",
        Language::Lt => "Prašome pasirinkti savo vaidmenį:",
    }
}

/// Role names offered in `language`.
pub fn role_options(language: Language) -> Vec<String> {
    Role::ALL
        .iter()
        .map(|role| role.label(language).to_string())
        .collect()
}

/// Issue categories configured for a role in a language, if any.
pub fn issue_options(role: Role, language: Language) -> Option<&'static [&'static str]> {
    ISSUE_OPTIONS
        .iter()
        .find(|(r, l, _)| *r == role && *l == language)
        .map(|(_, _, options)| *options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_has_options_in_every_language() {
        for role in Role::ALL {
            for language in Language::ALL {
                assert!(issue_options(role, language).is_some());
            }
        }
    }

    #[test]
    fn test_employee_gets_two_factor_option() {
        for language in Language::ALL {
            let student = issue_options(Role::Student, language).unwrap();
            let employee = issue_options(Role::Employee, language).unwrap();
            assert_eq!(employee.len(), student.len() + 1);
            assert_eq!(&employee[..student.len()], student);
        }
        assert_eq!(issue_options(Role::Employee, Language::En).unwrap()[3], "2FA issue");
        assert_eq!(issue_options(Role::Employee, Language::Lt).unwrap()[3], "2AF problema");
    }

    #[test]
    fn test_role_options() {
        assert_eq!(role_options(Language::En), vec!["Student", "Employee"]);
        assert_eq!(role_options(Language::Lt), vec!["Studentas", "Darbuotojas"]);
        assert_eq!(language_options(), vec!["EN", "LT"]);
    }
}
