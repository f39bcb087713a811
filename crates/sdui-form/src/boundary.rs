//! Form Boundary
//!
//! Submission state for one form, modeled so invalid combinations cannot be
//! built: a notice only exists while idle, and success and error never
//! coexist. All of it is per-load-cycle state; re-fetching the document
//! drops every boundary.

use std::collections::BTreeMap;

use sdui_net::{Payload, SubmitOutcome, Transport, TransportError};
use sdui_schema::{Component, Document, FormNode};

/// Confirmation text used when the server accepts but sends no message.
pub const SUCCESS_FALLBACK: &str = "Form submitted successfully!";

/// Interaction phase of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Accepting interaction. Holds at most one notice left over from the
    /// previous submission.
    Idle { notice: Option<Notice> },
    /// A submission is in flight: controls are disabled and no second
    /// submission can start.
    Submitting,
}

impl Phase {
    fn idle() -> Self {
        Self::Idle { notice: None }
    }
}

/// Outcome message of the most recent submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    /// The user-visible message text.
    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// What kind of control backs a registered field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Input,
    Dropdown,
}

/// One field registered with a boundary: identity plus its seeded default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSlot {
    pub id: String,
    pub kind: FieldKind,
    pub required: bool,
    pub default_value: Option<String>,
}

/// Everything one submission needs: where to post and what.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub url: String,
    pub payload: Payload,
}

/// Submission boundary for one form.
///
/// Built from the form node at load time; the document itself stays
/// read-only afterwards. Fields are harvested through nested forms because
/// only the outermost form is a boundary.
#[derive(Debug, Clone)]
pub struct FormBoundary {
    form_id: String,
    submit_url: String,
    fields: Vec<FieldSlot>,
    values: BTreeMap<String, String>,
    phase: Phase,
}

impl FormBoundary {
    pub fn new(form: &FormNode) -> Self {
        let mut fields = Vec::new();
        harvest_fields(&form.children, &mut fields);
        let values = seeded_values(&fields);
        Self {
            form_id: form.id.clone(),
            submit_url: form.endpoint().to_string(),
            fields,
            values,
            phase: Phase::idle(),
        }
    }

    /// Id of the form this boundary belongs to.
    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    /// Endpoint submissions post to.
    pub fn submit_url(&self) -> &str {
        &self.submit_url
    }

    /// Registered field slots, in document order.
    pub fn fields(&self) -> &[FieldSlot] {
        &self.fields
    }

    /// Current interaction phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Whether a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting)
    }

    /// The retained outcome notice, if any.
    pub fn notice(&self) -> Option<&Notice> {
        match &self.phase {
            Phase::Idle { notice } => notice.as_ref(),
            Phase::Submitting => None,
        }
    }

    /// Current value of one field.
    pub fn value(&self, field_id: &str) -> Option<&str> {
        self.values.get(field_id).map(String::as_str)
    }

    /// All current values, keyed by field id. Fields with no default and no
    /// user edit are absent.
    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    /// Apply a value change from the user. Ignored while submitting (the
    /// controls are disabled then) and for ids not registered with this
    /// boundary.
    pub fn set_value(&mut self, field_id: &str, value: impl Into<String>) {
        if self.is_submitting() {
            tracing::warn!(
                form = %self.form_id,
                field = field_id,
                "value change ignored while submitting"
            );
            return;
        }
        if !self.fields.iter().any(|field| field.id == field_id) {
            tracing::warn!(
                form = %self.form_id,
                field = field_id,
                "value change for unknown field ignored"
            );
            return;
        }
        self.values.insert(field_id.to_string(), value.into());
    }

    /// Restore every field to its seeded default, dropping user edits. The
    /// reset-action button maps to this.
    pub fn reset(&mut self) {
        if self.is_submitting() {
            tracing::warn!(form = %self.form_id, "reset ignored while submitting");
            return;
        }
        self.values = seeded_values(&self.fields);
    }

    /// Clear the retained notice, leaving values and phase alone.
    pub fn dismiss_notice(&mut self) {
        if let Phase::Idle { notice } = &mut self.phase {
            *notice = None;
        }
    }

    /// Start a submission: clears any leftover notice, snapshots the
    /// payload, and enters [`Phase::Submitting`]. Returns `None` when a
    /// submission is already in flight; nothing queues, because the trigger
    /// control is disabled while submitting.
    pub fn begin_submit(&mut self) -> Option<SubmitRequest> {
        if self.is_submitting() {
            tracing::warn!(form = %self.form_id, "submit ignored: already in flight");
            return None;
        }
        self.phase = Phase::Submitting;
        Some(SubmitRequest {
            url: self.submit_url.clone(),
            payload: self.values.clone(),
        })
    }

    /// Finish the in-flight submission with the transport's result,
    /// re-entering idle with exactly one notice.
    pub fn finish_submit(&mut self, result: Result<SubmitOutcome, TransportError>) {
        if !self.is_submitting() {
            tracing::warn!(form = %self.form_id, "finish_submit without a submission in flight");
        }
        let notice = match result {
            Ok(SubmitOutcome::Accepted { message }) => {
                Notice::Success(message.unwrap_or_else(|| SUCCESS_FALLBACK.to_string()))
            }
            Ok(SubmitOutcome::Rejected { error, status_text }) => Notice::Error(
                error.unwrap_or_else(|| format!("Form submission failed: {status_text}")),
            ),
            Err(error) => Notice::Error(error.to_string()),
        };
        self.phase = Phase::Idle {
            notice: Some(notice),
        };
    }

    /// Run one full submission against `transport`: begin, post, finish.
    /// Returns the resulting notice, or `None` when a submission was already
    /// in flight and nothing happened.
    pub fn submit<T: Transport>(&mut self, transport: &T) -> Option<&Notice> {
        let request = self.begin_submit()?;
        tracing::info!(
            form = %self.form_id,
            url = %request.url,
            fields = request.payload.len(),
            "submitting form"
        );
        let result = transport.submit(&request.url, &request.payload);
        self.finish_submit(result);
        self.notice()
    }
}

/// Boundaries for every top-level form in a document, for one load cycle.
#[derive(Debug, Clone, Default)]
pub struct BoundarySet {
    boundaries: BTreeMap<String, FormBoundary>,
}

impl BoundarySet {
    /// One boundary per top-level form. Forms nested inside another form do
    /// not get their own; their fields belong to the outermost boundary.
    pub fn from_document(document: &Document) -> Self {
        let mut boundaries = BTreeMap::new();
        for component in &document.components {
            if let Component::Form(form) = component {
                if boundaries.contains_key(&form.id) {
                    tracing::warn!(form = %form.id, "duplicate form id, keeping the first");
                    continue;
                }
                boundaries.insert(form.id.clone(), FormBoundary::new(form));
            }
        }
        Self { boundaries }
    }

    pub fn get(&self, form_id: &str) -> Option<&FormBoundary> {
        self.boundaries.get(form_id)
    }

    pub fn get_mut(&mut self, form_id: &str) -> Option<&mut FormBoundary> {
        self.boundaries.get_mut(form_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FormBoundary> {
        self.boundaries.values()
    }

    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }
}

fn seeded_values(fields: &[FieldSlot]) -> BTreeMap<String, String> {
    fields
        .iter()
        .filter_map(|field| {
            field
                .default_value
                .as_ref()
                .map(|value| (field.id.clone(), value.clone()))
        })
        .collect()
}

fn harvest_fields(components: &[Component], fields: &mut Vec<FieldSlot>) {
    for component in components {
        match component {
            Component::Input(input) => fields.push(FieldSlot {
                id: input.id.clone(),
                kind: FieldKind::Input,
                required: input.required,
                default_value: input.default_value.clone(),
            }),
            Component::Dropdown(dropdown) => fields.push(FieldSlot {
                id: dropdown.id.clone(),
                kind: FieldKind::Dropdown,
                required: dropdown.required,
                default_value: dropdown.default_value.clone(),
            }),
            Component::Form(nested) => harvest_fields(&nested.children, fields),
            _ => {}
        }
    }
}
