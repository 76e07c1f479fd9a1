/*!
 * Core translation service implementation.
 *
 * This module contains the `TranslationService`, which moves chat text
 * between English and the other supported languages through an injected
 * provider. Provider failures never reach the caller: the untranslated text
 * is returned instead, since a chat turn must not fail because translation
 * did.
 */

use anyhow::Result;
use log::{debug, error, info, warn};
use std::sync::Arc;

use crate::app_config::{TranslationConfig, TranslationProvider as ConfigTranslationProvider};
use crate::errors::ProviderError;
use crate::language_utils::{self, LanguageCode};
use crate::providers::google::GoogleTranslate;
use crate::providers::mock::MockProvider;
use crate::providers::{Provider, ProviderRequest};
use super::fields::{extract_preserved_fields, restore_preserved_fields, PreservedFields};
use super::flow_log::{log_translation_flow, TranslationDirection, TranslationFlow};
use super::memory::{AppliedTerms, TranslationMemory, TranslationMemoryStats};

/// Translation options for customizing the translation process
#[derive(Debug, Clone)]
pub struct TranslationOptions {
    /// Whether to keep target-language field markers out of translation
    pub preserve_fields: bool,

    /// Whether to apply the Arabic translation memory
    pub use_translation_memory: bool,
}

impl Default for TranslationOptions {
    fn default() -> Self {
        Self {
            preserve_fields: true,
            use_translation_memory: true,
        }
    }
}

/// Field-preserving translator for chat text
#[derive(Debug, Clone)]
pub struct TranslationService {
    /// Provider implementation
    provider: Arc<dyn Provider>,

    /// Glossary corrections for Arabic
    memory: TranslationMemory,

    /// Translation options
    pub options: TranslationOptions,
}

impl TranslationService {
    /// Create a service around an explicit provider
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self::with_options(provider, TranslationOptions::default())
    }

    pub fn with_options(provider: Arc<dyn Provider>, options: TranslationOptions) -> Self {
        let memory = TranslationMemory::new(options.use_translation_memory);
        Self {
            provider,
            memory,
            options,
        }
    }

    /// Build the service described by the configuration
    pub fn from_config(config: &TranslationConfig) -> Result<Self> {
        let provider: Arc<dyn Provider> = match config.provider {
            ConfigTranslationProvider::Google => Arc::new(GoogleTranslate::with_config(
                config.endpoint.clone(),
                config.timeout_secs,
                config.user_agent.clone(),
            )),
            ConfigTranslationProvider::Mock => Arc::new(MockProvider::working()),
        };
        Ok(Self::with_provider_and_config(provider, config))
    }

    /// Build the service with a given provider and the configured options
    pub fn with_provider_and_config(provider: Arc<dyn Provider>, config: &TranslationConfig) -> Self {
        let options = TranslationOptions {
            preserve_fields: config.preserve_fields,
            use_translation_memory: config.translation_memory,
        };
        let service = Self::with_options(provider, options);
        for entry in &config.memory_entries {
            service
                .memory
                .add_entry(&entry.english, entry.arabic.as_deref());
        }
        service
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Check if a language code is supported
    pub fn is_supported_language(&self, code: &str) -> bool {
        language_utils::is_supported_language(code)
    }

    /// Test the connection to the translation provider
    pub async fn test_connection(&self) -> Result<(), ProviderError> {
        self.provider.test_connection().await
    }

    /// Add a term to the Arabic translation memory
    pub fn add_translation_memory_entry(&self, english_term: &str, arabic_translation: Option<&str>) {
        self.memory.add_entry(english_term, arabic_translation);
    }

    pub fn translation_memory_stats(&self) -> TranslationMemoryStats {
        self.memory.stats()
    }

    /// Translate user text into English
    ///
    /// English input and unsupported languages come back unchanged, as does
    /// the input itself when the provider fails.
    pub async fn translate_to_english(&self, text: &str, source_language: &str, session_id: &str) -> String {
        let source = match source_language.parse::<LanguageCode>() {
            Ok(LanguageCode::En) => return text.to_string(),
            Ok(language) => language,
            Err(e) => {
                warn!("{}; passing text through untranslated", e);
                return text.to_string();
            }
        };

        info!("received input ({}): \"{}\"", source, text);

        let (processed, memory_applied) = if source == LanguageCode::Ar {
            self.memory.reverse_lookup(text)
        } else {
            (text.to_string(), AppliedTerms::new())
        };

        let request = ProviderRequest::new(processed, source, LanguageCode::En);
        let translated = match self.provider.translate(request).await {
            Ok(response) => response.text,
            Err(e) => {
                error!("Translation to English failed: {}", e);
                warn!("Using original text as fallback");
                return text.to_string();
            }
        };

        log_translation_flow(&TranslationFlow {
            direction: TranslationDirection::ToEnglish,
            source,
            target: LanguageCode::En,
            session_id,
            original: text,
            translated: &translated,
            memory_applied: &memory_applied,
        });

        translated
    }

    /// Translate English text into the user's language, preserving field markers
    ///
    /// Markers tagged with the target language keep their exact value. English
    /// targets and unsupported languages come back unchanged, as does the
    /// English text itself when the provider fails.
    pub async fn translate_from_english(&self, english_text: &str, target_language: &str, session_id: &str) -> String {
        let target = match target_language.parse::<LanguageCode>() {
            Ok(LanguageCode::En) => return english_text.to_string(),
            Ok(language) => language,
            Err(e) => {
                warn!("{}; passing text through untranslated", e);
                return english_text.to_string();
            }
        };

        let (cleaned, preserved) = if self.options.preserve_fields {
            extract_preserved_fields(english_text, target)
        } else {
            (english_text.to_string(), PreservedFields::default())
        };

        if !preserved.is_empty() {
            info!(
                "preserving {} {} fields: {:?}",
                preserved.len(),
                target,
                preserved.keys()
            );
        }

        let request = ProviderRequest::new(cleaned, LanguageCode::En, target);
        let translated = match self.provider.translate(request).await {
            Ok(response) => response.text,
            Err(e) => {
                error!("Translation from English failed: {}", e);
                warn!("Using English text as fallback");
                return english_text.to_string();
            }
        };

        let (corrected, memory_applied) = if target == LanguageCode::Ar {
            self.memory.apply_to_arabic(&translated)
        } else {
            (translated, AppliedTerms::new())
        };

        let missing = preserved.missing_placeholders(&corrected);
        if !missing.is_empty() {
            debug!("placeholders dropped by provider, appending: {:?}", missing);
        }
        let final_text = restore_preserved_fields(&corrected, &preserved);

        log_translation_flow(&TranslationFlow {
            direction: TranslationDirection::FromEnglish,
            source: LanguageCode::En,
            target,
            session_id,
            original: english_text,
            translated: &final_text,
            memory_applied: &memory_applied,
        });
        info!("final output ({}): \"{}\"", target, final_text);

        final_text
    }
}
