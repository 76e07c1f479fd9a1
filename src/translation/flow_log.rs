/*!
 * Structured log lines for translation events.
 *
 * Each call builds its own `TranslationFlow` record, so the languages that
 * end up in the log are always the ones of that call.
 */

use log::info;

use crate::language_utils::LanguageCode;
use super::memory::AppliedTerms;

/// Direction of a translation relative to English
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationDirection {
    ToEnglish,
    FromEnglish,
}

impl std::fmt::Display for TranslationDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ToEnglish => write!(f, "to_english"),
            Self::FromEnglish => write!(f, "from_english"),
        }
    }
}

/// Everything worth recording about one completed translation
#[derive(Debug, Clone)]
pub struct TranslationFlow<'a> {
    pub direction: TranslationDirection,
    pub source: LanguageCode,
    pub target: LanguageCode,
    pub session_id: &'a str,
    pub original: &'a str,
    pub translated: &'a str,
    pub memory_applied: &'a AppliedTerms,
}

impl<'a> TranslationFlow<'a> {
    /// Session suffix for log lines, empty when the caller has no session
    fn session_suffix(&self) -> String {
        if self.session_id.is_empty() {
            String::new()
        } else {
            format!(" session={}", self.session_id)
        }
    }
}

/// Emit the log lines describing a translation
pub fn log_translation_flow(flow: &TranslationFlow<'_>) {
    let session = flow.session_suffix();

    info!(
        "translation flow={} source={} target={}{}",
        flow.direction, flow.source, flow.target, session
    );
    if !flow.memory_applied.is_empty() {
        info!("translation memory applied{}: {:?}", session, flow.memory_applied);
    }
    info!("original ({}){}: \"{}\"", flow.source, session, flow.original);
    info!("translated ({}){}: \"{}\"", flow.target, session, flow.translated);
}

/// Log the start of a chat exchange
pub fn log_chat_session_start(session_id: &str, language: LanguageCode, user_message: &str) {
    info!("chat session started language={} session={}", language, session_id);
    info!("user input ({}) session={}: \"{}\"", language, session_id, user_message);
}

/// Log the end of a chat exchange
pub fn log_chat_session_end(session_id: &str, language: LanguageCode, response: &str) {
    info!("chat session completed language={} session={}", language, session_id);
    info!("response ({}) session={}: \"{}\"", language, session_id, response);
}
