/*!
 * # chatlingo - field-preserving chat translation
 *
 * A Rust library that moves chat text between English, Arabic and Bengali
 * through an external machine-translation provider, while keeping inline
 * localized field markers such as `name_bn: "..."` byte-identical.
 *
 * ## Features
 *
 * - Translate user input to English and responses back to the user's language
 * - Preserve `name`, `description`, `specification` and `brand` markers
 *   tagged with the target language
 * - Arabic translation memory for trade and currency terms
 * - Best-effort behavior: provider failures fall back to the original text
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `translation`: the translation service:
 *   - `translation::core`: `TranslationService`
 *   - `translation::fields`: field marker extraction and restoration
 *   - `translation::memory`: Arabic translation memory
 *   - `translation::flow_log`: structured translation logs
 * - `language_utils`: supported language codes
 * - `providers`: translation backends:
 *   - `providers::google`: Google Translate client
 *   - `providers::mock`: deterministic provider for tests
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod language_utils;
pub mod providers;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{ProviderError, TranslationError};
pub use language_utils::{LanguageCode, is_supported_language};
pub use providers::{Provider, ProviderRequest, ProviderResponse};
pub use translation::TranslationService;
