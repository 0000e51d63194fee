//! Browser tests for the DOM adapter
//!
//! Run with `wasm-pack test --headless --firefox crates/contact-form/wasm`.

use contact_form_core::{ContactFormConfig, FieldKey};
use contact_form_wasm::{attach, attach_contact_form, AttachError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{
    Document, Element, Event, EventInit, HtmlElement, HtmlInputElement, HtmlTextAreaElement,
};

wasm_bindgen_test_configure!(run_in_browser);

const FORM_MARKUP: &str = r#"
    <input data-testid="test-contact-name">
    <p data-testid="test-contact-error-name" hidden></p>
    <input data-testid="test-contact-email">
    <p data-testid="test-contact-error-email" hidden></p>
    <input data-testid="test-contact-subject">
    <p data-testid="test-contact-error-subject" hidden></p>
    <textarea data-testid="test-contact-message"></textarea>
    <p data-testid="test-contact-error-message" hidden></p>
    <p data-testid="test-contact-success" hidden>Thanks!</p>
"#;

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Mount a form with the given id and inner markup, returning the wrapper
fn mount(id: &str, inner: &str) -> Element {
    let doc = document();
    let wrapper = doc.create_element("div").unwrap();
    wrapper.set_inner_html(&format!(r#"<form id="{}">{}</form>"#, id, inner));
    doc.body().unwrap().append_child(&wrapper).unwrap();
    wrapper
}

fn config_for(id: &str) -> ContactFormConfig {
    let mut config = ContactFormConfig::default();
    config.selectors.form = format!("#{}", id);
    config
}

fn query(root: &Element, test_id: &str) -> Element {
    root.query_selector(&format!(r#"[data-testid="{}"]"#, test_id))
        .unwrap()
        .unwrap()
}

fn set_input(root: &Element, test_id: &str, value: &str) {
    query(root, test_id)
        .dyn_into::<HtmlInputElement>()
        .unwrap()
        .set_value(value);
}

fn set_message(root: &Element, value: &str) {
    query(root, "test-contact-message")
        .dyn_into::<HtmlTextAreaElement>()
        .unwrap()
        .set_value(value);
}

fn region(root: &Element, test_id: &str) -> HtmlElement {
    query(root, test_id).dyn_into::<HtmlElement>().unwrap()
}

/// Dispatch a cancelable submit on `target`, returning whether the default was allowed
fn submit_to(target: &Element) -> bool {
    let init = EventInit::new();
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("submit", &init).unwrap();
    target.dispatch_event(&event).unwrap()
}

fn submit(root: &Element) -> bool {
    submit_to(&root.query_selector("form").unwrap().unwrap())
}

#[wasm_bindgen_test]
fn test_invalid_submit_shows_errors_and_prevents_default() {
    let root = mount("invalid-submit", FORM_MARKUP);
    attach(&document(), &config_for("invalid-submit")).unwrap();

    set_input(&root, "test-contact-email", "not-an-email");
    set_message(&root, "123456789");
    assert!(!submit(&root));

    let name_error = region(&root, "test-contact-error-name");
    assert!(!name_error.hidden());
    assert_eq!(
        name_error.text_content().as_deref(),
        Some("Please enter your full name.")
    );
    assert_eq!(
        region(&root, "test-contact-error-email").text_content().as_deref(),
        Some("Please provide a valid email (name@example.com).")
    );
    assert_eq!(
        region(&root, "test-contact-error-message").text_content().as_deref(),
        Some("Message must be at least 10 characters long.")
    );
    assert!(region(&root, "test-contact-success").hidden());

    root.remove();
}

#[wasm_bindgen_test]
fn test_valid_submit_resets_and_shows_success() {
    let root = mount("valid-submit", FORM_MARKUP);
    attach(&document(), &config_for("valid-submit")).unwrap();

    set_input(&root, "test-contact-name", "Jane Doe");
    set_input(&root, "test-contact-email", "jane@example.com");
    set_input(&root, "test-contact-subject", "Hello");
    set_message(&root, "1234567890");
    assert!(!submit(&root));

    assert!(!region(&root, "test-contact-success").hidden());
    assert!(region(&root, "test-contact-error-name").hidden());
    let name = query(&root, "test-contact-name")
        .dyn_into::<HtmlInputElement>()
        .unwrap();
    assert_eq!(name.value(), "");

    root.remove();
}

#[wasm_bindgen_test]
fn test_missing_error_regions_degrade_gracefully() {
    let root = mount(
        "bare-form",
        r#"
        <input data-testid="test-contact-name">
        <input data-testid="test-contact-email">
        <input data-testid="test-contact-subject">
        <textarea data-testid="test-contact-message"></textarea>
        "#,
    );
    attach(&document(), &config_for("bare-form")).unwrap();
    assert!(!submit(&root));

    root.remove();
}

#[wasm_bindgen_test]
fn test_missing_input_does_not_attach() {
    let root = mount(
        "no-subject",
        r#"
        <input data-testid="test-contact-name">
        <input data-testid="test-contact-email">
        <textarea data-testid="test-contact-message"></textarea>
        "#,
    );

    let err = attach(&document(), &config_for("no-subject")).unwrap_err();
    assert!(matches!(err, AttachError::MissingInput(FieldKey::Subject)));
    // No listener, so the default action is not prevented
    assert!(submit(&root));

    root.remove();
}

#[wasm_bindgen_test]
fn test_missing_form_does_not_attach() {
    let err = attach(&document(), &config_for("does-not-exist")).unwrap_err();
    assert!(matches!(err, AttachError::MissingForm));
}

#[wasm_bindgen_test]
fn test_second_attach_is_refused() {
    let root = mount("twice", FORM_MARKUP);
    attach(&document(), &config_for("twice")).unwrap();

    let err = attach(&document(), &config_for("twice")).unwrap_err();
    assert!(matches!(err, AttachError::AlreadyAttached));

    root.remove();
}

#[wasm_bindgen_test]
fn test_focus_lands_on_first_invalid_input() {
    let root = mount("focus-first", FORM_MARKUP);
    attach(&document(), &config_for("focus-first")).unwrap();

    set_input(&root, "test-contact-name", "Jane Doe");
    set_input(&root, "test-contact-email", "jane@example.com");
    set_message(&root, "short");
    submit(&root);

    let active = document().active_element().unwrap();
    assert_eq!(
        active.get_attribute("data-testid").as_deref(),
        Some("test-contact-subject")
    );

    root.remove();
}

#[wasm_bindgen_test]
fn test_non_form_container_clears_each_input() {
    let doc = document();
    let root = doc.create_element("div").unwrap();
    root.set_inner_html(&format!(r#"<div id="div-container">{}</div>"#, FORM_MARKUP));
    doc.body().unwrap().append_child(&root).unwrap();
    attach(&doc, &config_for("div-container")).unwrap();

    set_input(&root, "test-contact-name", "Jane Doe");
    set_input(&root, "test-contact-email", "jane@example.com");
    set_input(&root, "test-contact-subject", "Hello");
    set_message(&root, "1234567890");
    let container = root.query_selector("#div-container").unwrap().unwrap();
    assert!(!submit_to(&container));

    for test_id in ["test-contact-name", "test-contact-email", "test-contact-subject"] {
        let input = query(&root, test_id).dyn_into::<HtmlInputElement>().unwrap();
        assert_eq!(input.value(), "");
    }
    let message = query(&root, "test-contact-message")
        .dyn_into::<HtmlTextAreaElement>()
        .unwrap();
    assert_eq!(message.value(), "");
    assert!(!region(&root, "test-contact-success").hidden());

    root.remove();
}

#[wasm_bindgen_test]
fn test_non_input_element_does_not_attach() {
    let root = mount(
        "div-name",
        r#"
        <div data-testid="test-contact-name"></div>
        <input data-testid="test-contact-email">
        <input data-testid="test-contact-subject">
        <textarea data-testid="test-contact-message"></textarea>
        "#,
    );

    let err = attach(&document(), &config_for("div-name")).unwrap_err();
    assert!(matches!(err, AttachError::NotAnInput(FieldKey::Name)));
    assert!(submit(&root));

    root.remove();
}

#[wasm_bindgen_test]
fn test_attach_contact_form_rejects_bad_config() {
    let root = mount("bad-config", FORM_MARKUP);

    assert!(!attach_contact_form(JsValue::from_f64(42.0)));

    let mut config = config_for("bad-config");
    config.rules.min_message_length = 0;
    let config = serde_wasm_bindgen::to_value(&config).unwrap();
    assert!(!attach_contact_form(config));

    // Nothing was attached, so a good config still succeeds
    let config = serde_wasm_bindgen::to_value(&config_for("bad-config")).unwrap();
    assert!(attach_contact_form(config));

    root.remove();
}
