//! Canned responses keyed by intent, role and language.
//!
//! Lookups walk a fixed chain:
//!
//! ```text
//! intent ─▶ role ─▶ language ─▶ "EN" ─▶ FALLBACK_RESPONSE
//! ```
//!
//! The first definition whose intent matches governs; later duplicates are
//! never consulted. A miss anywhere along the chain yields
//! [`FALLBACK_RESPONSE`], which is an ordinary answer rather than an error.

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

/// Returned when no catalog entry answers the request.
pub const FALLBACK_RESPONSE: &str = "Does this solve your issue? If not, please talk to our help center.\nAr tai išsprendžia jūsų problemą? Jei ne, susisiekite su mūsų pagalbos centru.";

/// Language code consulted when the requested one is missing for a role.
pub const FALLBACK_LANGUAGE: &str = "EN";

/// Role name → language code → response text.
pub type RoleResponses = HashMap<String, HashMap<String, String>>;

/// The responses configured for one intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentDefinition {
    pub intent: String,
    #[serde(default)]
    pub responses: RoleResponses,
}

/// Where a lookup ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseLookup<'a> {
    /// The role has text in the requested language.
    Exact(&'a str),
    /// The role lacks the requested language; its English text is used.
    EnglishFallback(&'a str),
    /// No intent entry matched.
    UnknownIntent,
    /// The intent matched but has no responses for the role.
    UnknownRole,
    /// The role has neither the requested language nor English.
    MissingLanguage,
}

impl<'a> ResponseLookup<'a> {
    /// The response text this lookup resolves to.
    pub fn text(self) -> &'a str {
        match self {
            ResponseLookup::Exact(text) | ResponseLookup::EnglishFallback(text) => text,
            ResponseLookup::UnknownIntent
            | ResponseLookup::UnknownRole
            | ResponseLookup::MissingLanguage => FALLBACK_RESPONSE,
        }
    }

    /// Whether the fixed fallback text was used.
    pub fn is_fallback(self) -> bool {
        !matches!(
            self,
            ResponseLookup::Exact(_) | ResponseLookup::EnglishFallback(_)
        )
    }
}

/// Ordered list of intent definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseCatalog {
    definitions: Vec<IntentDefinition>,
}

impl ResponseCatalog {
    /// Create a catalog. Order matters: the first definition of an intent
    /// that covers the requested role wins.
    pub fn new(definitions: Vec<IntentDefinition>) -> Self {
        ResponseCatalog { definitions }
    }

    /// Walk the lookup chain without collapsing misses into the fallback.
    ///
    /// `role` and `language` are canonicalised with [`canonical_role`] and
    /// [`canonical_language`] before the lookup.
    pub fn resolve(&self, intent: &str, role: &str, language: &str) -> ResponseLookup<'_> {
        let role = canonical_role(role);
        let language = canonical_language(language);

        let mut definitions = self.definitions.iter().filter(|d| d.intent == intent).peekable();
        if definitions.peek().is_none() {
            return ResponseLookup::UnknownIntent;
        }
        let Some(by_language) = definitions.find_map(|d| d.responses.get(&role)) else {
            return ResponseLookup::UnknownRole;
        };

        if let Some(text) = by_language.get(&language) {
            ResponseLookup::Exact(text.as_str())
        } else if let Some(text) = by_language.get(FALLBACK_LANGUAGE) {
            ResponseLookup::EnglishFallback(text.as_str())
        } else {
            ResponseLookup::MissingLanguage
        }
    }

    /// The response text for an intent, role and language.
    pub fn get_response(&self, intent: &str, role: &str, language: &str) -> &str {
        let lookup = self.resolve(intent, role, language);
        if lookup.is_fallback() {
            debug!("no response for intent={intent} role={role} language={language}: {lookup:?}");
        }
        lookup.text()
    }

    /// Distinct intents in definition order.
    pub fn intents(&self) -> impl Iterator<Item = &str> {
        let mut seen = std::collections::HashSet::new();
        self.definitions
            .iter()
            .map(|d| d.intent.as_str())
            .filter(move |intent| seen.insert(*intent))
    }

    pub fn definitions(&self) -> &[IntentDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Uppercase the first character of a role and leave the rest untouched.
///
/// `"student"` becomes `"Student"`; `"sTUDENT"` becomes `"STUDENT"`.
pub fn canonical_role(role: &str) -> String {
    let mut chars = role.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercase a language code.
pub fn canonical_language(language: &str) -> String {
    language.to_uppercase()
}
