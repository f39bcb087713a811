//! Renderer Dispatcher
//!
//! One match arm per component variant, each producing an accessible
//! element; the unknown arm produces nothing and logs, so one bad node never
//! takes the document down. Interaction state (submitting, notices, the
//! disabled cascade) arrives through [`RenderContext`].

use sdui_form::{BoundarySet, FormBoundary, Notice};
use sdui_schema::{
    ButtonNode, Component, Document, DropdownNode, FormNode, InputNode, TextNode, TextRole,
};

use crate::element::{Element, ViewNode};

/// Inline style keeping a node out of view but in the accessibility tree.
const SR_ONLY_STYLE: &str =
    "position:absolute;width:1px;height:1px;overflow:hidden;clip:rect(0 0 0 0)";

/// Inline style de-emphasizing a form while its submission is in flight.
const SUBMITTING_STYLE: &str = "opacity:0.7;pointer-events:none";

/// Description linked to every required field.
const REQUIRED_DESCRIPTION: &str = "This field is required";

/// Label of the synthetic placeholder option every dropdown gets.
const PLACEHOLDER_OPTION: &str = "Select an option";

/// Live-region announcement while a form submits.
const SUBMITTING_ANNOUNCEMENT: &str = "Form is being submitted, please wait...";

/// State threaded through dispatch.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderContext<'a> {
    /// Disable interactive controls; set for everything inside a submitting
    /// form.
    pub disabled: bool,
    /// Whether dispatch has already entered a form. Forms nested inside
    /// another form render as plain groups, because only the outermost form
    /// is a submission boundary.
    pub within_form: bool,
    /// Interaction state per form id. Forms without a boundary render idle.
    pub boundaries: Option<&'a BoundarySet>,
}

impl<'a> RenderContext<'a> {
    /// Context that renders live interaction state from `boundaries`.
    pub fn with_boundaries(boundaries: &'a BoundarySet) -> Self {
        Self {
            disabled: false,
            within_form: false,
            boundaries: Some(boundaries),
        }
    }

    fn inside_form(self, submitting: bool) -> Self {
        Self {
            disabled: self.disabled || submitting,
            within_form: true,
            ..self
        }
    }
}

/// Render one component. Total over every variant: recognized components map
/// to an element, unrecognized ones to [`ViewNode::Empty`] plus a warning.
pub fn render(component: &Component, ctx: RenderContext<'_>) -> ViewNode {
    match component {
        Component::Text(text) => render_text(text),
        Component::Input(input) => render_input(input, ctx),
        Component::Dropdown(dropdown) => render_dropdown(dropdown, ctx),
        Component::Button(button) => render_button(button, ctx),
        Component::Form(form) => render_form(form, ctx),
        Component::Unknown(unknown) => {
            tracing::warn!(
                id = %unknown.id,
                kind = %unknown.kind,
                "unknown component type, rendering nothing"
            );
            ViewNode::Empty
        }
    }
}

/// Render a slice of components in document order.
pub fn render_all(components: &[Component], ctx: RenderContext<'_>) -> Vec<ViewNode> {
    components
        .iter()
        .map(|component| render(component, ctx))
        .collect()
}

/// Render a whole document: title heading, then the top-level components.
pub fn render_document(document: &Document, ctx: RenderContext<'_>) -> ViewNode {
    let mut root = Element::new("div");
    if let Some(title) = &document.title {
        root = root.child(Element::new("h1").text(title.as_str()));
    }
    root.children(render_all(&document.components, ctx)).into()
}

fn render_text(text: &TextNode) -> ViewNode {
    match text.label {
        Some(TextRole::Heading) => Element::new("h1").text(text.content.as_str()).into(),
        Some(TextRole::Label) => {
            let mut label = Element::new("label")
                .attr_opt("for", text.for_id.as_deref())
                .text(text.content.as_str());
            if text.for_required {
                label = label.child(Element::new("span").attr("aria-label", "required").text(" *"));
            }
            label.into()
        }
        _ => Element::new("p").text(text.content.as_str()).into(),
    }
}

fn render_input(input: &InputNode, ctx: RenderContext<'_>) -> ViewNode {
    let description_id = format!("{}-required", input.id);
    let mut control = Element::new("input")
        .attr("id", input.id.as_str())
        .attr("name", input.id.as_str())
        .attr("type", "text")
        .attr_opt("placeholder", input.placeholder.as_deref())
        .attr_opt("value", input.default_value.as_deref())
        .flag("required", input.required)
        .flag("disabled", ctx.disabled)
        .attr("role", "textbox");
    if input.required {
        control = control
            .attr("aria-required", "true")
            .attr("aria-describedby", description_id.as_str());
    }
    let mut group = Element::new("div").child(control);
    if input.required {
        group = group.child(required_description(&description_id));
    }
    group.into()
}

fn render_dropdown(dropdown: &DropdownNode, ctx: RenderContext<'_>) -> ViewNode {
    let description_id = format!("{}-required", dropdown.id);
    let mut select = Element::new("select")
        .attr("id", dropdown.id.as_str())
        .attr("name", dropdown.id.as_str())
        .flag("required", dropdown.required)
        .flag("disabled", ctx.disabled)
        .attr("role", "combobox");
    if dropdown.required {
        select = select
            .attr("aria-required", "true")
            .attr("aria-describedby", description_id.as_str());
    }
    select = select.child(
        Element::new("option")
            .attr("value", "")
            .text(PLACEHOLDER_OPTION),
    );
    // Option values are treated as unique: only the first match for the
    // default is marked selected.
    let mut selected_seen = false;
    for option in &dropdown.options {
        let selected =
            !selected_seen && dropdown.default_value.as_deref() == Some(option.value.as_str());
        selected_seen = selected_seen || selected;
        select = select.child(
            Element::new("option")
                .attr("value", option.value.as_str())
                .flag("selected", selected)
                .text(option.label.as_str()),
        );
    }
    let mut group = Element::new("div").child(select);
    if dropdown.required {
        group = group.child(required_description(&description_id));
    }
    group.into()
}

fn render_button(button: &ButtonNode, ctx: RenderContext<'_>) -> ViewNode {
    Element::new("div")
        .child(
            Element::new("button")
                .attr("id", button.id.as_str())
                .attr("type", button.action.html_type())
                .attr("data-variant", button.variant.as_str())
                .flag("disabled", ctx.disabled)
                .attr("role", "button")
                .attr("aria-label", button.text.as_str())
                .text(button.text.as_str()),
        )
        .into()
}

fn render_form(form: &FormNode, ctx: RenderContext<'_>) -> ViewNode {
    if ctx.within_form {
        // A nested form is just a group around its children; its fields
        // already belong to the outermost boundary.
        return Element::new("div")
            .attr("id", form.id.as_str())
            .children(render_all(&form.children, ctx))
            .into();
    }

    let boundary = ctx.boundaries.and_then(|set| set.get(&form.id));
    let submitting = boundary.is_some_and(FormBoundary::is_submitting);
    let notice = boundary.and_then(FormBoundary::notice);

    let mut element = Element::new("form")
        .attr("id", form.id.as_str())
        .flag("novalidate", true)
        .attr("role", "form");
    if let Some(notice) = notice {
        element = element.attr("aria-describedby", notice_id(&form.id, notice));
    }
    if submitting {
        element = element
            .attr("aria-busy", "true")
            .attr("style", SUBMITTING_STYLE);
    }
    if let Some(notice) = notice {
        element = element.child(render_notice(&form.id, notice));
    }
    element = element.children(render_all(&form.children, ctx.inside_form(submitting)));
    if submitting {
        element = element.child(
            Element::new("div")
                .attr("style", SR_ONLY_STYLE)
                .attr("aria-live", "polite")
                .text(SUBMITTING_ANNOUNCEMENT),
        );
    }
    element.into()
}

fn render_notice(form_id: &str, notice: &Notice) -> Element {
    let role = if notice.is_error() { "alert" } else { "status" };
    Element::new("div")
        .attr("id", notice_id(form_id, notice))
        .attr("role", role)
        .attr("aria-live", "polite")
        .child(
            Element::new("button")
                .attr("type", "button")
                .attr("aria-label", "Dismiss")
                .text("\u{d7}"),
        )
        .text(notice.text())
}

fn notice_id(form_id: &str, notice: &Notice) -> String {
    if notice.is_error() {
        format!("{form_id}-error")
    } else {
        format!("{form_id}-success")
    }
}

fn required_description(id: &str) -> Element {
    Element::new("span")
        .attr("id", id)
        .attr("style", SR_ONLY_STYLE)
        .text(REQUIRED_DESCRIPTION)
}
