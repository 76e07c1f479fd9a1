/*!
 * Tests for best-effort behavior when the provider fails
 */

use chatlingo::providers::mock::MockProvider;

use crate::common::service_with;

#[tokio::test]
async fn test_translateToEnglish_withFailingProvider_shouldReturnOriginal() {
    let (service, provider) = service_with(MockProvider::failing());

    let result = service.translate_to_english("أريد العينة", "ar", "session-1").await;

    // The reverse memory pass must not leak into the fallback
    assert_eq!(result, "أريد العينة");
    assert_eq!(provider.request_count(), 1);
}

#[tokio::test]
async fn test_translateFromEnglish_withFailingProvider_shouldReturnEnglishText() {
    let (service, _) = service_with(MockProvider::failing());

    let text = r#"Hello, name_bn: "বন্ধু", please respond."#;
    let result = service.translate_from_english(text, "bn", "session-1").await;

    assert_eq!(result, text);
}

#[tokio::test]
async fn test_intermittentProvider_shouldOnlyFallBackOnFailedCalls() {
    let (service, _) = service_with(MockProvider::intermittent(2));

    let first = service.translate_from_english("Hello", "bn", "").await;
    let second = service.translate_from_english("Hello", "bn", "").await;
    let third = service.translate_from_english("Hello", "bn", "").await;

    assert_eq!(first, "[bn] Hello");
    assert_eq!(second, "Hello");
    assert_eq!(third, "[bn] Hello");
}

#[tokio::test]
async fn test_emptyProviderResponse_shouldStillRestoreFields() {
    let (service, _) = service_with(MockProvider::empty());

    let result = service.translate_from_english(r#"brand_bn: "প্রাণ""#, "bn", "").await;

    assert_eq!(result, "\nbrand_bn: \"প্রাণ\"");
}

#[tokio::test]
async fn test_testConnection_shouldReflectProviderHealth() {
    let (healthy, _) = service_with(MockProvider::working());
    let (broken, _) = service_with(MockProvider::failing());

    assert!(healthy.test_connection().await.is_ok());
    assert!(broken.test_connection().await.is_err());
}
