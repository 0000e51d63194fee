//! Contact Form WASM
//!
//! Browser entry point for the contact form. On load it waits for the DOM,
//! finds the form by its default selectors and takes over submit handling.
//! Pages with different markup can call `attachContactForm` with their own
//! selectors.
//!
//! Nothing here throws into page scripts: a form that cannot be located is
//! simply left alone.

pub mod dom;

use contact_form_core::{self as core, ContactFields, ContactFormConfig, ValidationRules};
use wasm_bindgen::prelude::*;

pub use dom::{attach, AttachError, DomSurface};

/// Set panic hook, then attach to the default contact form once the DOM is ready
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    if let Ok(document) = dom::document() {
        let target = document.clone();
        dom::when_ready(&document, move || {
            let _ = dom::attach(&target, &ContactFormConfig::default());
        });
    }
}

/// Attach validation to a form described by `config`
///
/// Returns `false` when the form or one of its inputs is missing.
///
/// # Example (JavaScript)
/// ```javascript
/// attachContactForm({ selectors: { form: '#support-form' } });
/// ```
#[wasm_bindgen(js_name = attachContactForm)]
pub fn attach_contact_form(config: JsValue) -> bool {
    let config = if config.is_undefined() || config.is_null() {
        ContactFormConfig::default()
    } else {
        match serde_wasm_bindgen::from_value::<ContactFormConfig>(config) {
            Ok(config) => config,
            Err(_) => return false,
        }
    };

    dom::document()
        .and_then(|document| dom::attach(&document, &config))
        .is_ok()
}

/// Validate raw field values without touching the DOM
///
/// # Example (JavaScript)
/// ```javascript
/// const report = validateContact({ name: '', email: 'a@b.co', subject: 'Hi', message: 'hello there' });
/// // report.isValid === false, report.firstInvalid === 'name'
/// ```
#[wasm_bindgen(js_name = validateContact)]
pub fn validate_contact(values: JsValue, rules: JsValue) -> Result<JsValue, JsValue> {
    let fields: ContactFields = serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse fields: {}", e)))?;

    let rules = if rules.is_undefined() || rules.is_null() {
        ValidationRules::default()
    } else {
        serde_wasm_bindgen::from_value(rules)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse rules: {}", e)))?
    };

    let report = core::validate_contact(&fields, &rules).to_report();
    Ok(serde_wasm_bindgen::to_value(&report)?)
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    core::is_valid_email(email.trim())
}
