//! Comprehensive tests for sdui-schema
//!
//! Decoding and resolution exercised together over a realistic registration
//! document.

use sdui_schema::{resolve, Component, Document, TextRole};

const REGISTRATION: &str = include_str!("../../../demos/registration.json");

fn registration() -> Document {
    Document::from_json(REGISTRATION).unwrap()
}

fn form_children(document: &Document) -> &[Component] {
    let Component::Form(form) = &document.components[1] else {
        panic!("expected the registration form");
    };
    &form.children
}

#[test]
fn test_registration_document_decodes() {
    let doc = registration();
    assert_eq!(doc.title.as_deref(), Some("User Registration Form"));
    assert_eq!(doc.components.len(), 2);

    let children = form_children(&doc);
    assert_eq!(children.len(), 11);

    // Every child keeps its document-order position.
    let ids: Vec<&str> = children.iter().map(Component::id).collect();
    assert_eq!(
        ids,
        vec![
            "firstNameLabel",
            "firstName",
            "lastNameLabel",
            "lastName",
            "emailLabel",
            "email",
            "countryLabel",
            "country",
            "terms",
            "submit",
            "reset"
        ]
    );
}

#[test]
fn test_registration_labels_resolve() {
    let doc = resolve(registration());
    let children = form_children(&doc);

    let mut flags = Vec::new();
    for child in children {
        if let Component::Text(text) = child {
            if text.label == Some(TextRole::Label) {
                flags.push((text.id.as_str(), text.for_required));
            }
        }
    }
    // The three inputs are required, the country dropdown is not.
    assert_eq!(
        flags,
        vec![
            ("firstNameLabel", true),
            ("lastNameLabel", true),
            ("emailLabel", true),
            ("countryLabel", false)
        ]
    );
}

#[test]
fn test_registration_resolution_is_idempotent() {
    let once = resolve(registration());
    let twice = resolve(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn test_registration_terms_text_is_plain() {
    let doc = resolve(registration());
    let children = form_children(&doc);
    let Component::Text(terms) = &children[8] else {
        panic!("expected the terms text");
    };
    assert_eq!(terms.label, None);
    assert!(!terms.for_required);
}

#[test]
fn test_registration_form_uses_default_endpoint() {
    let doc = registration();
    let Component::Form(form) = &doc.components[1] else {
        panic!("expected the registration form");
    };
    assert_eq!(form.endpoint(), "/api/submit");
}
