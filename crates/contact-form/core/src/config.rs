// File: src/config.rs
// Purpose: Element selectors and rule settings for a contact form

use crate::fields::FieldKey;
use crate::rules::ValidationRules;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("minMessageLength must be at least 1")]
    ZeroMessageLength,

    #[error("selector for {0} is empty")]
    EmptySelector(&'static str),
}

/// Full configuration for one contact form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormConfig {
    #[serde(default)]
    pub selectors: FormSelectors,

    #[serde(default)]
    pub rules: ValidationRules,
}

/// CSS selectors used to locate the form and its parts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormSelectors {
    /// Container, resolved against the document
    pub form: String,

    // Everything below is resolved inside the form
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub success: String,
    pub error_name: String,
    pub error_email: String,
    pub error_subject: String,
    pub error_message: String,
}

fn test_id(id: &str) -> String {
    format!("[data-testid=\"{}\"]", id)
}

impl Default for FormSelectors {
    fn default() -> Self {
        Self {
            form: test_id("test-contact-form"),
            name: test_id("test-contact-name"),
            email: test_id("test-contact-email"),
            subject: test_id("test-contact-subject"),
            message: test_id("test-contact-message"),
            success: test_id("test-contact-success"),
            error_name: test_id("test-contact-error-name"),
            error_email: test_id("test-contact-error-email"),
            error_subject: test_id("test-contact-error-subject"),
            error_message: test_id("test-contact-error-message"),
        }
    }
}

impl FormSelectors {
    pub fn input(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Name => &self.name,
            FieldKey::Email => &self.email,
            FieldKey::Subject => &self.subject,
            FieldKey::Message => &self.message,
        }
    }

    pub fn error(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Name => &self.error_name,
            FieldKey::Email => &self.error_email,
            FieldKey::Subject => &self.error_subject,
            FieldKey::Message => &self.error_message,
        }
    }
}

impl ContactFormConfig {
    /// Parse from TOML, filling anything unspecified with defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ContactFormConfig =
            toml::from_str(content).context("Failed to parse contact form config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.rules.min_message_length == 0 {
            return Err(ConfigError::ZeroMessageLength);
        }

        if self.selectors.form.trim().is_empty() {
            return Err(ConfigError::EmptySelector("form"));
        }
        for key in FieldKey::ORDER {
            if self.selectors.input(key).trim().is_empty() {
                return Err(ConfigError::EmptySelector(key.as_str()));
            }
        }

        Ok(())
    }
}
