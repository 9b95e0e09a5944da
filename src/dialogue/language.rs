//! Supported conversation languages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DialogueError;

/// A language the dialogue can be held in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "EN")]
    En,
    #[serde(rename = "LT")]
    Lt,
}

impl Language {
    /// All supported languages, in the order they are offered to the user.
    pub const ALL: [Language; 2] = [Language::En, Language::Lt];

    /// Two-letter uppercase code, as used for catalog keys.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Lt => "LT",
        }
    }

    /// Parse an exact two-letter uppercase language code.
    pub fn parse(code: &str) -> Option<Language> {
        Self::ALL.into_iter().find(|language| language.code() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = DialogueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::parse(s).ok_or(DialogueError::InvalidLanguage)
    }
}
