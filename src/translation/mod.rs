/*!
 * Translation of chat text between English and the supported languages.
 *
 * This module is split into several submodules:
 *
 * - `core`: the `TranslationService` and its two translation directions
 * - `fields`: pure extract/restore transform for language-tagged field markers
 * - `memory`: Arabic translation memory applied around provider calls
 * - `flow_log`: structured log lines for each translation event
 */

// Re-export main types for easier usage
pub use self::core::{TranslationOptions, TranslationService};
pub use self::fields::{
    extract_preserved_fields, restore_preserved_fields, FieldType, PreservedField, PreservedFields,
    PRESERVED_PLACEHOLDER,
};
pub use self::flow_log::{log_chat_session_end, log_chat_session_start};
pub use self::memory::{TranslationMemory, TranslationMemoryStats};

// Submodules
pub mod core;
pub mod fields;
pub mod flow_log;
pub mod memory;
