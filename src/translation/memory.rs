/*!
 * Translation memory for Arabic industry terms.
 *
 * Generic machine translation gets trade vocabulary wrong (incoterms,
 * currency names), so a small glossary corrects the provider output when
 * translating into Arabic, and maps the same Arabic terms back to English
 * before translating from Arabic. Bengali is deliberately left alone.
 */

use parking_lot::RwLock;
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use log::{debug, info};

use super::fields::PRESERVED_PLACEHOLDER;

/// Terms seeded into every new memory: (english, arabic)
const DEFAULT_ARABIC_TERMS: &[(&str, &str)] = &[
    ("sample", "العينة"),
    ("order", "الطلب"),
    ("quotation", "عرض الأسعار"),
    ("bulk tanker", "ناقل البضائع السائبة"),
    ("ex factory", "التسليم من المصنع"),
    ("bdt", "تاكا بنغلاديشي"),
    ("bangladeshi taka", "تاكا بنغلاديشي"),
    ("taka", "تاكا"),
    ("bdt (bangladeshi taka)", "تاكا بنغلاديشي"),
    ("price in bdt", "السعر بالتاكا البنغلاديشي"),
    ("bangladeshi taka (bdt)", "تاكا بنغلاديشي"),
];

/// Spelling variants folded onto a canonical glossary key
const TERM_VARIATIONS: &[(&str, &str)] = &[
    ("ex-factory", "ex factory"),
    ("ex works", "ex factory"),
    ("bulk-tanker", "bulk tanker"),
    ("bulk-carrier", "bulk carrier"),
    ("t.t", "tt"),
    ("telegraphic transfer", "tt"),
    ("letter of credit", "lc"),
    ("full lc", "full letter of credit"),
];

/// Normalize a term for use as a glossary key
pub fn normalize_term(term: &str) -> String {
    let normalized = term.trim().to_lowercase();
    TERM_VARIATIONS
        .iter()
        .find(|(variant, _)| *variant == normalized)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or(normalized)
}

/// Summary of the memory contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationMemoryStats {
    pub total_terms: usize,
    pub arabic_translations: usize,
    pub terms: Vec<String>,
}

/// Substitutions made by one memory pass, original term -> replacement
pub type AppliedTerms = BTreeMap<String, String>;

/// Thread-safe glossary shared by all translation calls
#[derive(Debug, Clone)]
pub struct TranslationMemory {
    /// english term -> arabic term
    terms: Arc<RwLock<BTreeMap<String, String>>>,
    enabled: bool,
}

impl TranslationMemory {
    /// Create a memory seeded with the default glossary
    pub fn new(enabled: bool) -> Self {
        let terms = DEFAULT_ARABIC_TERMS
            .iter()
            .map(|(en, ar)| (en.to_string(), ar.to_string()))
            .collect();
        Self {
            terms: Arc::new(RwLock::new(terms)),
            enabled,
        }
    }

    /// Create a memory without any terms
    pub fn empty() -> Self {
        Self {
            terms: Arc::new(RwLock::new(BTreeMap::new())),
            enabled: true,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Add or replace a term; without a non-blank Arabic value the English term is stored as-is
    pub fn add_entry(&self, english_term: &str, arabic_translation: Option<&str>) {
        let key = normalize_term(english_term);
        if key.is_empty() {
            return;
        }
        // A blank value would delete the term from Arabic output
        let value = arabic_translation
            .map(str::trim)
            .filter(|arabic| !arabic.is_empty())
            .unwrap_or_else(|| english_term.trim())
            .to_string();

        info!("Added to Arabic translation memory: '{}' -> '{}'", key, value);
        self.terms.write().insert(key, value);
    }

    pub fn lookup(&self, english_term: &str) -> Option<String> {
        self.terms.read().get(&normalize_term(english_term)).cloned()
    }

    pub fn stats(&self) -> TranslationMemoryStats {
        let terms = self.terms.read();
        TranslationMemoryStats {
            total_terms: terms.len(),
            arabic_translations: terms.values().filter(|ar| !ar.is_empty()).count(),
            terms: terms.keys().cloned().collect(),
        }
    }

    /// Entries sorted longest-first so multi-word terms win over their parts
    fn entries_longest_first(&self) -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = self
            .terms
            .read()
            .iter()
            .map(|(en, ar)| (en.clone(), ar.clone()))
            .collect();
        entries.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()).then(a.0.cmp(&b.0)));
        entries
    }

    /// Replace English glossary terms left in Arabic provider output
    ///
    /// Field placeholders are restored after this pass, so only the text
    /// between them is rewritten.
    pub fn apply_to_arabic(&self, translated: &str) -> (String, AppliedTerms) {
        let mut applied = AppliedTerms::new();
        if !self.enabled {
            return (translated.to_string(), applied);
        }

        let patterns: Vec<(Regex, String)> = self
            .entries_longest_first()
            .into_iter()
            .filter_map(|(english, arabic)| term_pattern(&english).map(|pattern| (pattern, arabic)))
            .collect();

        let result = translated
            .split(PRESERVED_PLACEHOLDER)
            .map(|segment| {
                let mut segment = segment.to_string();
                for (pattern, arabic) in &patterns {
                    let replaced = pattern.replace_all(&segment, |caps: &regex::Captures<'_>| {
                        applied.insert(caps[0].to_string(), arabic.clone());
                        arabic.clone()
                    });
                    segment = replaced.into_owned();
                }
                segment
            })
            .collect::<Vec<_>>()
            .join(PRESERVED_PLACEHOLDER);

        if !applied.is_empty() {
            debug!("Translation memory corrections: {:?}", applied);
        }
        (result, applied)
    }

    /// Replace known Arabic terms with their English keys before translating to English
    pub fn reverse_lookup(&self, text: &str) -> (String, AppliedTerms) {
        let mut applied = AppliedTerms::new();
        if !self.enabled {
            return (text.to_string(), applied);
        }

        let mut entries = self.entries_longest_first();
        entries.sort_by(|a, b| b.1.chars().count().cmp(&a.1.chars().count()));

        let mut result = text.to_string();
        for (english, arabic) in entries {
            if arabic.is_empty() || !result.contains(&arabic) {
                continue;
            }
            result = result.replace(&arabic, &english);
            applied.entry(arabic).or_insert(english);
        }

        if !applied.is_empty() {
            debug!("Reverse translation memory: {:?}", applied);
        }
        (result, applied)
    }
}

impl Default for TranslationMemory {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Word-bounded, case-insensitive pattern for an English term
fn term_pattern(term: &str) -> Option<Regex> {
    let escaped = regex::escape(term);
    // `\b` only applies next to word characters, e.g. not after "(bdt)"
    let starts_word = term.chars().next().is_some_and(|c| c.is_alphanumeric());
    let ends_word = term.chars().last().is_some_and(|c| c.is_alphanumeric());
    let pattern = format!(
        "{}{}{}",
        if starts_word { r"\b" } else { "" },
        escaped,
        if ends_word { r"\b" } else { "" }
    );
    RegexBuilder::new(&pattern).case_insensitive(true).build().ok()
}
