//! Comprehensive tests for sdui-render
//!
//! The full pipeline: decode, resolve, build boundaries, render, serialize.

use sdui_form::{BoundarySet, Notice, Phase, SubmitOutcome, TransportError};
use sdui_render::{render_document, RenderContext};
use sdui_schema::{resolve, Document};

const REGISTRATION: &str = include_str!("../../../demos/registration.json");

fn registration() -> Document {
    resolve(Document::from_json(REGISTRATION).unwrap())
}

fn render_with(document: &Document, boundaries: &BoundarySet) -> String {
    render_document(document, RenderContext::with_boundaries(boundaries)).to_html()
}

#[test]
fn test_registration_page_renders_accessible_markup() {
    let document = registration();
    let boundaries = BoundarySet::from_document(&document);
    let html = render_with(&document, &boundaries);

    // Title plus welcome paragraph.
    assert!(html.contains("<h1>User Registration Form</h1>"));
    assert!(html.contains("<p>Welcome! Please complete the form below"));

    // Labels reference their fields and required ones carry the marker.
    assert!(html.contains(r#"<label for="firstName">First Name<span aria-label="required"> *</span></label>"#));
    assert!(html.contains(r#"<label for="country">Country</label>"#));

    // Required inputs are wired to their descriptions.
    assert!(html.contains(r#"aria-describedby="email-required""#));
    assert!(html.contains(r#"<span id="email-required""#));
    assert!(html.contains("This field is required"));

    // The dropdown offers the synthetic placeholder first.
    assert!(html.contains(r#"<option value="">Select an option</option>"#));
    assert!(html.contains(r#"<option value="us">United States</option>"#));

    // Buttons map their actions to types.
    assert!(html.contains(r#"type="submit""#));
    assert!(html.contains(r#"type="reset""#));
    assert!(html.contains(">Create Account</button>"));

    // Idle form: no overlay, no notices.
    assert!(html.contains(r#"<form id="form" novalidate role="form">"#));
    assert!(!html.contains("aria-busy"));
    assert!(!html.contains("form-error"));
    assert!(!html.contains("form-success"));
}

#[test]
fn test_submitting_form_disables_controls_and_announces() {
    let document = registration();
    let mut boundaries = BoundarySet::from_document(&document);
    boundaries.get_mut("form").unwrap().begin_submit().unwrap();

    let html = render_with(&document, &boundaries);
    assert!(html.contains(r#"aria-busy="true""#));
    assert!(html.contains("opacity:0.7;pointer-events:none"));
    assert!(html.contains("Form is being submitted, please wait..."));
    // Every control inside the form picks up the disabled flag.
    assert!(html.contains(r#"<input id="firstName" name="firstName" type="text" placeholder="Enter your first name" required disabled"#));
    assert!(html.contains(r#"<select id="country" name="country" disabled"#));
}

#[test]
fn test_success_notice_renders_as_status() {
    let document = registration();
    let mut boundaries = BoundarySet::from_document(&document);
    let boundary = boundaries.get_mut("form").unwrap();
    boundary.begin_submit().unwrap();
    boundary.finish_submit(Ok(SubmitOutcome::Accepted {
        message: Some("Welcome".to_string()),
    }));

    let html = render_with(&document, &boundaries);
    assert!(html.contains(r#"aria-describedby="form-success""#));
    assert!(html.contains(r#"<div id="form-success" role="status" aria-live="polite">"#));
    assert!(html.contains("Welcome"));
    assert!(html.contains(r#"aria-label="Dismiss""#));
    assert!(!html.contains("form-error"));
    assert!(!html.contains("aria-busy"));
}

#[test]
fn test_error_notice_renders_as_alert() {
    let document = registration();
    let mut boundaries = BoundarySet::from_document(&document);
    let boundary = boundaries.get_mut("form").unwrap();
    boundary.begin_submit().unwrap();
    boundary.finish_submit(Ok(SubmitOutcome::Rejected {
        error: None,
        status_text: "Bad Request".to_string(),
    }));

    let html = render_with(&document, &boundaries);
    assert!(html.contains(r#"aria-describedby="form-error""#));
    assert!(html.contains(r#"<div id="form-error" role="alert" aria-live="polite">"#));
    assert!(html.contains("Form submission failed: Bad Request"));
    assert!(!html.contains("form-success"));
}

#[test]
fn test_transport_failure_renders_like_any_error() {
    let document = registration();
    let mut boundaries = BoundarySet::from_document(&document);
    let boundary = boundaries.get_mut("form").unwrap();
    boundary.begin_submit().unwrap();
    boundary.finish_submit(Err(TransportError::FetchStatus {
        status: 502,
        status_text: "Bad Gateway".to_string(),
    }));

    assert_eq!(
        boundary.phase(),
        &Phase::Idle {
            notice: Some(Notice::Error(
                "Failed to fetch document: Bad Gateway".to_string()
            ))
        }
    );
    let html = render_with(&document, &boundaries);
    assert!(html.contains(r#"role="alert""#));
}

#[test]
fn test_rendering_is_pure() {
    let document = registration();
    let boundaries = BoundarySet::from_document(&document);
    let first = render_with(&document, &boundaries);
    let second = render_with(&document, &boundaries);
    assert_eq!(first, second);
}

#[test]
fn test_boundary_state_alone_changes_the_output() {
    let document = registration();
    let idle = BoundarySet::from_document(&document);
    let mut busy = idle.clone();
    busy.get_mut("form").unwrap().begin_submit().unwrap();

    let idle_html = render_with(&document, &idle);
    let busy_html = render_with(&document, &busy);
    assert_ne!(idle_html, busy_html);
    // The boundary did not leak into the idle set.
    assert!(!idle.get("form").unwrap().is_submitting());
    assert_eq!(idle_html, render_with(&document, &idle));
}
