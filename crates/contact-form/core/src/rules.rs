// File: src/rules.rs
// Purpose: Per-field rules and the ordered validation pass

use crate::fields::{ContactFields, FieldKey};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ECMAScript WhiteSpace + LineTerminator, the set a browser's `\s` and `trim()` use
const JS_WHITESPACE: &[char] = &[
    '\u{0009}', '\u{000a}', '\u{000b}', '\u{000c}', '\u{000d}', '\u{0020}', '\u{00a0}',
    '\u{1680}', '\u{2000}', '\u{2001}', '\u{2002}', '\u{2003}', '\u{2004}', '\u{2005}',
    '\u{2006}', '\u{2007}', '\u{2008}', '\u{2009}', '\u{200a}', '\u{2028}', '\u{2029}',
    '\u{202f}', '\u{205f}', '\u{3000}', '\u{feff}',
];

// local@domain.tld, no whitespace or extra '@' inside any segment
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    let segment = r"[^@\t\n\v\f\r \u{a0}\u{1680}\u{2000}-\u{200a}\u{2028}\u{2029}\u{202f}\u{205f}\u{3000}\u{feff}]+";
    Regex::new(&format!(r"^{0}@{0}\.{0}$", segment)).unwrap()
});

const DEFAULT_MIN_MESSAGE_LENGTH: usize = 10;

/// A user-facing validation failure. `Display` is the literal inline message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please enter your full name.")]
    NameRequired,

    #[error("Email address is required.")]
    EmailRequired,

    #[error("Please provide a valid email (name@example.com).")]
    EmailInvalid,

    #[error("Subject cannot be empty.")]
    SubjectRequired,

    #[error("Please share your message.")]
    MessageRequired,

    #[error("Message must be at least {min} characters long.")]
    MessageTooShort { min: usize },
}

impl FieldError {
    /// The field this error is rendered under
    pub fn field(&self) -> FieldKey {
        match self {
            FieldError::NameRequired => FieldKey::Name,
            FieldError::EmailRequired | FieldError::EmailInvalid => FieldKey::Email,
            FieldError::SubjectRequired => FieldKey::Subject,
            FieldError::MessageRequired | FieldError::MessageTooShort { .. } => FieldKey::Message,
        }
    }
}

/// Tunable parts of the rule table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRules {
    /// Minimum trimmed message length (inclusive)
    #[serde(default = "default_min_message_length")]
    pub min_message_length: usize,
}

fn default_min_message_length() -> usize {
    DEFAULT_MIN_MESSAGE_LENGTH
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_message_length: DEFAULT_MIN_MESSAGE_LENGTH,
        }
    }
}

/// Outcome of one validation pass, failures kept in evaluation order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<FieldError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Earliest failing field in `FieldKey::ORDER`
    pub fn first_invalid(&self) -> Option<FieldKey> {
        self.errors.first().map(FieldError::field)
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn error_for(&self, key: FieldKey) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field() == key)
    }

    pub fn to_report(&self) -> ValidationReport {
        ValidationReport {
            is_valid: self.is_valid(),
            first_invalid: self.first_invalid(),
            field_errors: self
                .errors
                .iter()
                .map(|e| FieldMessage {
                    field: e.field(),
                    message: e.to_string(),
                })
                .collect(),
        }
    }
}

/// Serializable view of a [`ValidationResult`], handed to JavaScript
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub first_invalid: Option<FieldKey>,
    pub field_errors: Vec<FieldMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldMessage {
    pub field: FieldKey,
    pub message: String,
}

/// Strip the same characters a browser's `String.prototype.trim` removes
fn trim_value(raw: &str) -> &str {
    raw.trim_matches(JS_WHITESPACE)
}

/// Validate basic `local@domain.tld` shape
///
/// Intentionally loose: `a@b@c.d` is rejected only because '@' is excluded
/// from each segment, nothing checks TLD length or allowed characters.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Run the rules for one field. The first matching rule wins.
pub fn check_field(key: FieldKey, raw: &str, rules: &ValidationRules) -> Option<FieldError> {
    let value = trim_value(raw);

    match key {
        FieldKey::Name if value.is_empty() => Some(FieldError::NameRequired),
        FieldKey::Email if value.is_empty() => Some(FieldError::EmailRequired),
        FieldKey::Email if !is_valid_email(value) => Some(FieldError::EmailInvalid),
        FieldKey::Subject if value.is_empty() => Some(FieldError::SubjectRequired),
        FieldKey::Message if value.is_empty() => Some(FieldError::MessageRequired),
        // Length counts UTF-16 units, as the page's own input length does
        FieldKey::Message if value.encode_utf16().count() < rules.min_message_length => {
            Some(FieldError::MessageTooShort {
                min: rules.min_message_length,
            })
        }
        _ => None,
    }
}

/// Validate every field in order
pub fn validate_contact(fields: &ContactFields, rules: &ValidationRules) -> ValidationResult {
    let errors = FieldKey::ORDER
        .iter()
        .filter_map(|&key| check_field(key, fields.get(key), rules))
        .collect();

    ValidationResult { errors }
}
