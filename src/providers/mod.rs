/*!
 * Provider implementations for machine translation backends.
 *
 * This module contains client implementations for translation providers:
 * - Google: the public Google Translate endpoint
 * - Mock: deterministic provider used by tests and offline runs
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;
use crate::language_utils::LanguageCode;

/// A single translation request sent to a provider
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRequest {
    /// The text to translate
    pub text: String,
    /// Source language
    pub source_language: LanguageCode,
    /// Target language
    pub target_language: LanguageCode,
}

impl ProviderRequest {
    pub fn new(text: impl Into<String>, source_language: LanguageCode, target_language: LanguageCode) -> Self {
        Self {
            text: text.into(),
            source_language,
            target_language,
        }
    }
}

/// The provider's answer to a `ProviderRequest`
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderResponse {
    /// The translated text
    pub text: String,
    /// Source language reported by the provider, when it returns one
    pub detected_language: Option<String>,
}

/// Common trait for all translation providers
///
/// This trait defines the interface that all provider implementations must follow,
/// allowing them to be injected interchangeably into the translation service.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Translate a request using this provider
    ///
    /// # Arguments
    /// * `request` - The request to translate
    ///
    /// # Returns
    /// * `Result<ProviderResponse, ProviderError>` - The response from the provider or an error
    async fn translate(&self, request: ProviderRequest) -> Result<ProviderResponse, ProviderError>;

    /// Test the connection to the provider
    ///
    /// # Returns
    /// * `Result<(), ProviderError>` - Ok if the connection is successful, or an error
    async fn test_connection(&self) -> Result<(), ProviderError>;

    /// Short provider name used in log lines
    fn name(&self) -> &str;
}

pub mod google;
pub mod mock;
