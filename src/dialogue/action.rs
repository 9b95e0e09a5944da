//! Canonical dialogue actions and their per-language spellings.

use std::fmt;

use super::language::Language;

/// A step of the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Start,
    SetLanguage,
    SetUserType,
    ChooseIssue,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::Start,
        Action::SetLanguage,
        Action::SetUserType,
        Action::ChooseIssue,
    ];

    /// Language-independent key.
    pub fn key(self) -> &'static str {
        match self {
            Action::Start => "start",
            Action::SetLanguage => "set_language",
            Action::SetUserType => "set_user_type",
            Action::ChooseIssue => "choose_issue",
        }
    }

    /// How the action is spelled by clients speaking `language`.
    pub fn alias(self, language: Language) -> &'static str {
        match (self, language) {
            (Action::Start, _) => "start/paleisti",
            (Action::SetLanguage, _) => "set_language/nustatyti_kalbą",
            (Action::SetUserType, Language::En) => "set_user_type",
            (Action::SetUserType, Language::Lt) => "nustatyti_vartotojo_tipą",
            (Action::ChooseIssue, Language::En) => "choose_issue",
            (Action::ChooseIssue, Language::Lt) => "pasirinkti_problema",
        }
    }

    pub fn from_key(key: &str) -> Option<Action> {
        Self::ALL.into_iter().find(|action| action.key() == key)
    }

    /// Resolve a raw action string sent by a client.
    ///
    /// The string is lowercased. If the part before the first `/` is a
    /// canonical key, that action applies; otherwise the whole string must
    /// equal the action's alias for `language`. Without a supported
    /// language only canonical keys resolve.
    pub fn resolve(raw: &str, language: Option<Language>) -> Option<Action> {
        let raw = raw.to_lowercase();
        let prefix = raw.split_once('/').map_or(raw.as_str(), |(head, _)| head);

        if let Some(action) = Self::from_key(prefix) {
            return Some(action);
        }

        let language = language?;
        Self::ALL
            .into_iter()
            .find(|action| action.alias(language) == raw)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_keys() {
        for action in Action::ALL {
            for language in Language::ALL {
                assert_eq!(Action::resolve(action.key(), Some(language)), Some(action));
            }
            assert_eq!(Action::resolve(action.key(), None), Some(action));
        }
    }

    #[test]
    fn test_aliases_resolve_in_their_language() {
        for action in Action::ALL {
            for language in Language::ALL {
                assert_eq!(
                    Action::resolve(action.alias(language), Some(language)),
                    Some(action)
                );
            }
        }
    }

    #[test]
    fn test_localized_alias_only_in_its_language() {
        assert_eq!(
            Action::resolve("nustatyti_vartotojo_tipą", Some(Language::Lt)),
            Some(Action::SetUserType)
        );
        assert_eq!(Action::resolve("nustatyti_vartotojo_tipą", Some(Language::En)), None);
        assert_eq!(
            Action::resolve("PASIRINKTI_PROBLEMA", Some(Language::Lt)),
            Some(Action::ChooseIssue)
        );
        assert_eq!(Action::resolve("pasirinkti_problema", None), None);
    }

    #[test]
    fn test_prefix_before_slash() {
        assert_eq!(Action::resolve("Start/anything", Some(Language::En)), Some(Action::Start));
        assert_eq!(
            Action::resolve("set_language/nustatyti_kalbą", None),
            Some(Action::SetLanguage)
        );
        // the localized half alone is not an alias
        assert_eq!(Action::resolve("paleisti", Some(Language::Lt)), None);
    }

    #[test]
    fn test_unknown_actions() {
        assert_eq!(Action::resolve("", Some(Language::En)), None);
        assert_eq!(Action::resolve("restart", Some(Language::En)), None);
        assert_eq!(Action::resolve("/start", Some(Language::En)), None);
    }
}
