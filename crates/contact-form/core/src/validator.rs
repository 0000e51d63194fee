// File: src/validator.rs
// Purpose: Per-form submit handling (reset, evaluate, render, focus, clear)

use crate::fields::ContactFields;
use crate::rules::{validate_contact, ValidationResult, ValidationRules};
use crate::surface::{FormSurface, Region};
use tracing::{debug, trace};

/// Logical state of a form between submit attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    /// Nothing flagged: initial state, and the state after a valid submit
    #[default]
    Idle,
    /// At least one field failed on the last attempt
    ShowingErrors,
}

/// Validator bound to one form instance
#[derive(Debug)]
pub struct FormValidator<S> {
    surface: S,
    rules: ValidationRules,
    state: FormState,
}

impl<S: FormSurface> FormValidator<S> {
    pub fn new(surface: S, rules: ValidationRules) -> Self {
        Self {
            surface,
            rules,
            state: FormState::Idle,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Hide and empty every error region, hide the success notice
    pub fn clear_messages(&mut self) {
        for region in Region::ALL {
            if let Region::Error(_) = region {
                self.surface.set_text(region, "");
            }
            self.surface.set_hidden(region, true);
        }
    }

    /// Handle one submit attempt.
    ///
    /// The caller is responsible for suppressing the platform's default
    /// submit action before calling this.
    pub fn handle_submit(&mut self) -> ValidationResult {
        self.clear_messages();

        let fields = ContactFields::collect(|key| self.surface.value(key));
        let result = validate_contact(&fields, &self.rules);

        if result.is_valid() {
            self.surface.reset_all();
            self.surface.set_hidden(Region::Success, false);
            self.state = FormState::Idle;
            debug!("contact form accepted");
            return result;
        }

        for error in result.errors() {
            let region = Region::Error(error.field());
            self.surface.set_hidden(region, false);
            self.surface.set_text(region, &error.to_string());
            trace!(field = %error.field(), "{}", error);
        }

        if let Some(first) = result.first_invalid() {
            self.surface.focus(first);
        }

        self.state = FormState::ShowingErrors;
        debug!(
            failed = result.errors().len(),
            first_invalid = ?result.first_invalid(),
            "contact form rejected"
        );
        result
    }
}
