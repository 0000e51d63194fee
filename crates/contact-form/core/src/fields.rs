// File: src/fields.rs
// Purpose: Field identifiers and the raw value snapshot read from a form

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four inputs of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKey {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldKey {
    /// Evaluation order. The first failing field in this order receives focus.
    pub const ORDER: [FieldKey; 4] = [
        FieldKey::Name,
        FieldKey::Email,
        FieldKey::Subject,
        FieldKey::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Name => "name",
            FieldKey::Email => "email",
            FieldKey::Subject => "subject",
            FieldKey::Message => "message",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw, untrimmed input values captured at submit time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Name => &self.name,
            FieldKey::Email => &self.email,
            FieldKey::Subject => &self.subject,
            FieldKey::Message => &self.message,
        }
    }

    /// Build a snapshot by reading each field through `read`
    pub fn collect(mut read: impl FnMut(FieldKey) -> String) -> Self {
        Self {
            name: read(FieldKey::Name),
            email: read(FieldKey::Email),
            subject: read(FieldKey::Subject),
            message: read(FieldKey::Message),
        }
    }
}
