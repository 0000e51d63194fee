// File: src/dom.rs
// Purpose: web-sys implementation of FormSurface and the submit listener

use contact_form_core::{
    ConfigError, ContactFormConfig, FieldKey, FormSelectors, FormSurface, FormValidator, Region,
};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement,
};

/// Marks a form that already has a submit listener installed
const ATTACHED_ATTR: &str = "data-contact-validated";

/// Why a form could not be wired up. Never surfaced to page scripts.
#[derive(Debug, Error)]
pub enum AttachError {
    #[error("no document available")]
    NoDocument,

    #[error("contact form not found")]
    MissingForm,

    #[error("input for {0} not found")]
    MissingInput(FieldKey),

    #[error("element for {0} is not an input or textarea")]
    NotAnInput(FieldKey),

    #[error("form already has a validator attached")]
    AlreadyAttached,

    #[error("failed to register submit listener")]
    Listener,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

enum FieldInput {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl FieldInput {
    fn from_element(element: Element) -> Option<Self> {
        match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => Some(FieldInput::Input(input)),
            Err(element) => element
                .dyn_into::<HtmlTextAreaElement>()
                .ok()
                .map(FieldInput::TextArea),
        }
    }

    fn value(&self) -> String {
        match self {
            FieldInput::Input(el) => el.value(),
            FieldInput::TextArea(el) => el.value(),
        }
    }

    fn clear(&self) {
        match self {
            FieldInput::Input(el) => el.set_value(""),
            FieldInput::TextArea(el) => el.set_value(""),
        }
    }

    fn focus(&self) {
        let _ = match self {
            FieldInput::Input(el) => el.focus(),
            FieldInput::TextArea(el) => el.focus(),
        };
    }
}

fn find(root: &Element, selector: &str) -> Option<Element> {
    // An invalid selector behaves like a missing element
    root.query_selector(selector).ok().flatten()
}

/// A contact form located in the live document
pub struct DomSurface {
    container: Element,
    inputs: HashMap<FieldKey, FieldInput>,
    errors: HashMap<FieldKey, HtmlElement>,
    success: Option<HtmlElement>,
}

impl DomSurface {
    /// Look up every part of the form inside `container`.
    ///
    /// All four inputs are required. Error regions and the success notice
    /// are optional and silently skipped when absent.
    pub fn locate(container: Element, selectors: &FormSelectors) -> Result<Self, AttachError> {
        let mut inputs = HashMap::new();
        let mut errors = HashMap::new();

        for key in FieldKey::ORDER {
            let element =
                find(&container, selectors.input(key)).ok_or(AttachError::MissingInput(key))?;
            let input = FieldInput::from_element(element).ok_or(AttachError::NotAnInput(key))?;
            inputs.insert(key, input);

            if let Some(region) = find(&container, selectors.error(key))
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            {
                errors.insert(key, region);
            }
        }

        let success =
            find(&container, &selectors.success).and_then(|el| el.dyn_into::<HtmlElement>().ok());

        Ok(Self {
            container,
            inputs,
            errors,
            success,
        })
    }

    fn region(&self, region: Region) -> Option<&HtmlElement> {
        match region {
            Region::Error(key) => self.errors.get(&key),
            Region::Success => self.success.as_ref(),
        }
    }
}

impl FormSurface for DomSurface {
    fn value(&self, field: FieldKey) -> String {
        self.inputs.get(&field).map(FieldInput::value).unwrap_or_default()
    }

    fn set_hidden(&mut self, region: Region, hidden: bool) {
        if let Some(el) = self.region(region) {
            el.set_hidden(hidden);
        }
    }

    fn set_text(&mut self, region: Region, text: &str) {
        if let Some(el) = self.region(region) {
            el.set_text_content(Some(text));
        }
    }

    fn focus(&mut self, field: FieldKey) {
        if let Some(input) = self.inputs.get(&field) {
            input.focus();
        }
    }

    fn reset_all(&mut self) {
        match self.container.dyn_ref::<HtmlFormElement>() {
            Some(form) => form.reset(),
            None => self.inputs.values().for_each(FieldInput::clear),
        }
    }
}

/// Find the configured form and install its submit listener
pub fn attach(document: &Document, config: &ContactFormConfig) -> Result<(), AttachError> {
    config.validate()?;

    let form = document
        .query_selector(&config.selectors.form)
        .ok()
        .flatten()
        .ok_or(AttachError::MissingForm)?;

    if form.has_attribute(ATTACHED_ATTR) {
        return Err(AttachError::AlreadyAttached);
    }

    let surface = DomSurface::locate(form.clone(), &config.selectors)?;
    let mut validator = FormValidator::new(surface, config.rules.clone());

    form.set_attribute(ATTACHED_ATTR, "").map_err(|_| AttachError::Listener)?;

    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        validator.handle_submit();
    });

    if form
        .add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .is_err()
    {
        let _ = form.remove_attribute(ATTACHED_ATTR);
        return Err(AttachError::Listener);
    }
    // Lives as long as the page
    on_submit.forget();

    debug!(selector = %config.selectors.form, "contact form validator attached");
    Ok(())
}

/// Run `f` once the DOM is parsed
pub fn when_ready(document: &Document, f: impl FnOnce() + 'static) {
    if document.ready_state() != "loading" {
        f();
        return;
    }

    let callback = Closure::once_into_js(f);
    let _ = document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref());
}

pub fn document() -> Result<Document, AttachError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(AttachError::NoDocument)
}
