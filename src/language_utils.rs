use anyhow::{Result, anyhow};
use isolang::Language;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::errors::TranslationError;

/// Language utilities for the supported chat languages
///
/// Chat text moves between English and two other languages. Anything outside
/// this set is treated as a pass-through by the translation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    /// English, the pivot language
    En,
    /// Arabic
    Ar,
    /// Bengali
    Bn,
}

impl LanguageCode {
    /// All supported languages, in display order
    pub const ALL: [LanguageCode; 3] = [LanguageCode::En, LanguageCode::Ar, LanguageCode::Bn];

    /// ISO 639-1 code as used in field markers and provider requests
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
            Self::Bn => "bn",
        }
    }

    pub fn is_english(&self) -> bool {
        matches!(self, Self::En)
    }

    /// English name of the language, resolved through isolang
    pub fn name(&self) -> String {
        Language::from_639_1(self.as_str())
            .map(|lang| lang.to_name().to_string())
            .unwrap_or_else(|| self.as_str().to_uppercase())
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LanguageCode {
    type Err = TranslationError;

    /// Exact match against the lowercase codes; `"AR"` or `" ar "` are rejected
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        LanguageCode::ALL
            .into_iter()
            .find(|language| language.as_str() == s)
            .ok_or_else(|| TranslationError::UnsupportedLanguage(s.to_string()))
    }
}

/// Trim and lowercase a code typed by a user, e.g. on the command line
pub fn normalize_code(code: &str) -> String {
    code.trim().to_lowercase()
}

/// Check if a language code belongs to the supported set
pub fn is_supported_language(code: &str) -> bool {
    code.parse::<LanguageCode>().is_ok()
}

/// Resolve a user-supplied language code, falling back to English
///
/// Chat entry points accept whatever the client sends; an unknown code is
/// logged and the conversation continues in English.
pub fn resolve_language_or_default(code: &str) -> LanguageCode {
    match code.parse::<LanguageCode>() {
        Ok(language) => language,
        Err(_) => {
            warn!("Unsupported language: {}, defaulting to English", code);
            LanguageCode::En
        }
    }
}

/// Get the language name from a code
pub fn get_language_name(code: &str) -> Result<String> {
    let language = code
        .parse::<LanguageCode>()
        .map_err(|e| anyhow!("{}", e))?;
    Ok(language.name())
}
