/*!
 * Tests for chat session and translation flow logging
 */

use chatlingo::language_utils::{normalize_code, resolve_language_or_default, LanguageCode};
use chatlingo::translation::flow_log::{
    log_translation_flow, TranslationDirection, TranslationFlow,
};
use chatlingo::translation::memory::AppliedTerms;
use chatlingo::translation::{log_chat_session_end, log_chat_session_start};

use crate::common::init_logging;

#[test]
fn test_translationDirection_display_shouldUseSnakeCase() {
    assert_eq!(TranslationDirection::ToEnglish.to_string(), "to_english");
    assert_eq!(TranslationDirection::FromEnglish.to_string(), "from_english");
}

#[test]
fn test_chatSession_withCliLanguageCode_shouldLogResolvedLanguage() {
    init_logging();
    let language = resolve_language_or_default(&normalize_code(" BN "));
    assert_eq!(language, LanguageCode::Bn);

    log_chat_session_start("session-1", language, "ধন্যবাদ");
    log_chat_session_end("session-1", LanguageCode::En, "Thank you");
}

#[test]
fn test_logTranslationFlow_withoutSession_shouldNotPanic() {
    init_logging();
    let mut applied = AppliedTerms::new();
    applied.insert("BDT".to_string(), "تاكا بنغلاديشي".to_string());

    log_translation_flow(&TranslationFlow {
        direction: TranslationDirection::FromEnglish,
        source: LanguageCode::En,
        target: LanguageCode::Ar,
        session_id: "",
        original: "500 BDT",
        translated: "500 تاكا بنغلاديشي",
        memory_applied: &applied,
    });
}
