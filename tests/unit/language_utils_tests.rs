/*!
 * Tests for language utility functions
 */

use chatlingo::errors::TranslationError;
use chatlingo::language_utils::{
    get_language_name, is_supported_language, normalize_code, resolve_language_or_default,
    LanguageCode,
};

#[test]
fn test_isSupportedLanguage_withKnownCodes_shouldReturnTrue() {
    assert!(is_supported_language("en"));
    assert!(is_supported_language("ar"));
    assert!(is_supported_language("bn"));
}

#[test]
fn test_isSupportedLanguage_withUnknownCodes_shouldReturnFalse() {
    assert!(!is_supported_language("fr"));
    assert!(!is_supported_language(""));
    assert!(!is_supported_language("ben"));
}

#[test]
fn test_isSupportedLanguage_withWrongCaseOrPadding_shouldReturnFalse() {
    assert!(!is_supported_language("AR"));
    assert!(!is_supported_language(" ar "));
    assert!(!is_supported_language("En"));
    assert!(!is_supported_language("bn\n"));
}

#[test]
fn test_normalizeCode_withUserInput_shouldYieldSupportedCode() {
    assert_eq!(normalize_code(" AR "), "ar");
    assert!(is_supported_language(&normalize_code("Bn")));
    assert!(!is_supported_language(&normalize_code("FR")));
}

#[test]
fn test_parse_withUnknownCode_shouldReturnUnsupportedLanguage() {
    let result = "fr".parse::<LanguageCode>();
    assert!(matches!(result, Err(TranslationError::UnsupportedLanguage(code)) if code == "fr"));
}

#[test]
fn test_languageCode_display_shouldMatchMarkerSuffix() {
    assert_eq!(LanguageCode::Bn.to_string(), "bn");
    assert_eq!(LanguageCode::Ar.as_str(), "ar");
    assert!(LanguageCode::En.is_english());
    assert!(!LanguageCode::Ar.is_english());
}

#[test]
fn test_resolveLanguageOrDefault_withUnknownCode_shouldFallBackToEnglish() {
    assert_eq!(resolve_language_or_default("bn"), LanguageCode::Bn);
    assert_eq!(resolve_language_or_default("xx"), LanguageCode::En);
}

#[test]
fn test_getLanguageName_shouldResolveSupportedCodesOnly() {
    assert_eq!(get_language_name("ar").unwrap(), "Arabic");
    assert!(get_language_name("fr").is_err());
}

#[test]
fn test_languageCode_serde_shouldUseLowercaseCodes() {
    let json = serde_json::to_string(&LanguageCode::Bn).unwrap();
    assert_eq!(json, "\"bn\"");
    let parsed: LanguageCode = serde_json::from_str("\"ar\"").unwrap();
    assert_eq!(parsed, LanguageCode::Ar);
}
