//! User roles and their localized names.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::language::Language;

/// The declared category of the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Student,
    Employee,
}

impl Role {
    /// All roles, in the order they are offered to the user.
    pub const ALL: [Role; 2] = [Role::Student, Role::Employee];

    /// Canonical name, used as the catalog key.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Employee => "Employee",
        }
    }

    /// The role's name as shown to the user in `language`.
    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Role::Student, Language::En) => "Student",
            (Role::Employee, Language::En) => "Employee",
            (Role::Student, Language::Lt) => "Studentas",
            (Role::Employee, Language::Lt) => "Darbuotojas",
        }
    }

    /// Resolve a user-typed role name for `language`.
    ///
    /// Only the localized names are accepted, compared after lowercasing:
    /// `"studentas"` is a student in Lithuanian but unknown in English.
    pub fn from_synonym(token: &str, language: Language) -> Option<Role> {
        let token = token.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|role| role.label(language).to_lowercase() == token)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
