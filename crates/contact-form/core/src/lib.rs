//! Contact Form Core
//!
//! Platform-free validation for the site's contact form. The browser
//! adapter (`contact-form-wasm`) wires these types to the DOM; everything
//! here can be driven directly from tests through a fake [`FormSurface`].
//!
//! ## Quick Start
//!
//! ```rust
//! use contact_form_core::{validate_contact, ContactFields, FieldKey, ValidationRules};
//!
//! let fields = ContactFields {
//!     name: "Jane Doe".into(),
//!     email: "not-an-email".into(),
//!     subject: "Hello".into(),
//!     message: "1234567890".into(),
//! };
//!
//! let result = validate_contact(&fields, &ValidationRules::default());
//! assert!(!result.is_valid());
//! assert_eq!(result.first_invalid(), Some(FieldKey::Email));
//! ```

pub mod config;
pub mod fields;
pub mod rules;
pub mod surface;
pub mod validator;

// Re-export main types
pub use config::{ConfigError, ContactFormConfig, FormSelectors};
pub use fields::{ContactFields, FieldKey};
pub use rules::{
    check_field, is_valid_email, validate_contact, FieldError, FieldMessage, ValidationReport,
    ValidationResult, ValidationRules,
};
pub use surface::{FormSurface, Region};
pub use validator::{FormState, FormValidator};
