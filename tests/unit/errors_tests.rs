/*!
 * Tests for error types and conversions
 */

use chatlingo::errors::{ProviderError, TranslationError};

#[test]
fn test_providerError_apiError_shouldDisplayStatusAndMessage() {
    let error = ProviderError::ApiError {
        status_code: 429,
        message: "Too many requests".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("429"));
    assert!(display.contains("Too many requests"));
}

#[test]
fn test_providerError_connectionError_shouldDisplayCorrectly() {
    let error = ProviderError::ConnectionError("Host unreachable".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Connection error"));
    assert!(display.contains("Host unreachable"));
}

#[test]
fn test_translationError_unsupportedLanguage_shouldNameCode() {
    let error = TranslationError::UnsupportedLanguage("fr".to_string());
    assert_eq!(format!("{}", error), "Unsupported language: fr");
}

#[test]
fn test_providerError_rateLimit_shouldDisplayReason() {
    let error = ProviderError::RateLimitExceeded("HTTP 429".to_string());
    assert_eq!(format!("{}", error), "Rate limit exceeded: HTTP 429");
}
