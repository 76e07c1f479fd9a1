/*!
 * Preservation of language-tagged field markers.
 *
 * Chat responses can embed localized catalogue strings as inline markers of
 * the form `name_bn: "..."`. Markers tagged with the target language are
 * already in their final form and must come out of translation unchanged,
 * so they are swapped for a placeholder before the provider call and put
 * back afterwards. Everything here is a pure text transform.
 */

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::language_utils::LanguageCode;

/// Sentinel value that stands in for a preserved field during translation
pub const PRESERVED_PLACEHOLDER: &str = "[PRESERVED]";

/// `<fieldType>_<langCode>: "<value>"`, field type matched case-insensitively
static FIELD_MARKER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i:(name|description|specification|brand))_(en|ar|bn)\s*:\s*"([^"]*)""#).unwrap()
});

/// Field types recognized inside chat text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldType {
    Name,
    Description,
    Specification,
    Brand,
}

impl FieldType {
    pub const ALL: [FieldType; 4] = [
        FieldType::Name,
        FieldType::Description,
        FieldType::Specification,
        FieldType::Brand,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Specification => "specification",
            Self::Brand => "brand",
        }
    }

    /// Case-insensitive lookup of a field type name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field_type| field_type.as_str().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A field value lifted out of the text before translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreservedField {
    pub field_type: FieldType,
    pub language: LanguageCode,
    /// Literal value between the quotes, byte-for-byte
    pub value: String,
}

impl PreservedField {
    /// Marker key, e.g. `name_bn`
    pub fn key(&self) -> String {
        format!("{}_{}", self.field_type, self.language)
    }

    /// Marker carrying the placeholder instead of the value
    pub fn placeholder(&self) -> String {
        format!("{}: \"{}\"", self.key(), PRESERVED_PLACEHOLDER)
    }

    /// Marker carrying the original value
    pub fn marker(&self) -> String {
        format!("{}: \"{}\"", self.key(), self.value)
    }
}

/// Preserved fields of one call, at most one per key, ordered by field type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreservedFields {
    fields: Vec<PreservedField>,
}

impl PreservedFields {
    /// Insert a field; a later value for the same key replaces the earlier one
    pub fn insert(&mut self, field_type: FieldType, language: LanguageCode, value: impl Into<String>) {
        let value = value.into();
        match self
            .fields
            .iter_mut()
            .find(|f| f.field_type == field_type && f.language == language)
        {
            Some(existing) => existing.value = value,
            None => {
                self.fields.push(PreservedField {
                    field_type,
                    language,
                    value,
                });
                self.fields.sort_by_key(|f| (f.field_type, f.language));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.key() == key)
            .map(|f| f.value.as_str())
    }

    pub fn keys(&self) -> Vec<String> {
        self.fields.iter().map(PreservedField::key).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PreservedField> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Keys whose placeholder no longer appears in `text`
    pub fn missing_placeholders(&self, text: &str) -> Vec<String> {
        self.fields
            .iter()
            .filter(|f| !text.contains(&f.placeholder()))
            .map(PreservedField::key)
            .collect()
    }
}

/// Extract the field markers tagged with `target` and replace them with placeholders
///
/// Markers for other languages are left in place and get translated with the
/// surrounding text. Returns the placeholder text and the extracted values.
pub fn extract_preserved_fields(text: &str, target: LanguageCode) -> (String, PreservedFields) {
    let mut preserved = PreservedFields::default();

    let cleaned = FIELD_MARKER_REGEX.replace_all(text, |caps: &Captures<'_>| {
        let field_type = FieldType::from_name(&caps[1]);
        match field_type {
            Some(field_type) if &caps[2] == target.as_str() => {
                preserved.insert(field_type, target, &caps[3]);
                format!("{}_{}: \"{}\"", field_type, target, PRESERVED_PLACEHOLDER)
            }
            _ => caps[0].to_string(),
        }
    });

    (cleaned.into_owned(), preserved)
}

/// Put preserved values back into translated text
///
/// Every placeholder occurrence of a key is restored. When the provider
/// dropped or reworded a placeholder, the marker is appended on a new line.
pub fn restore_preserved_fields(translated: &str, preserved: &PreservedFields) -> String {
    let mut result = translated.to_string();

    for field in preserved.iter() {
        let placeholder = field.placeholder();
        if result.contains(&placeholder) {
            result = result.replace(&placeholder, &field.marker());
        } else {
            result.push('\n');
            result.push_str(&field.marker());
        }
    }

    result
}
