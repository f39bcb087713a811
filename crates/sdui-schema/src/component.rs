//! Component Model
//!
//! Typed descriptors for every node a server-driven document can carry.
//! The variants mirror the wire vocabulary one-to-one; anything outside it
//! lands in [`Component::Unknown`] so a single unfamiliar node never takes
//! the whole document down.

use serde::Deserialize;

/// Endpoint a form posts to when the document does not name one.
pub const DEFAULT_SUBMIT_URL: &str = "/api/submit";

/// A complete server-supplied UI description.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Optional page heading.
    pub title: Option<String>,
    /// Top-level components in document order.
    pub components: Vec<Component>,
}

/// One node of the component tree.
///
/// Dispatch over this enum is exhaustive: adding a variant forces every
/// consumer to handle it. [`Component::Unknown`] is the single tolerant
/// path for tags this engine does not recognize.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Text(TextNode),
    Input(InputNode),
    Dropdown(DropdownNode),
    Button(ButtonNode),
    Form(FormNode),
    Unknown(UnknownNode),
}

impl Component {
    /// Identity of this node within its document.
    pub fn id(&self) -> &str {
        match self {
            Self::Text(node) => &node.id,
            Self::Input(node) => &node.id,
            Self::Dropdown(node) => &node.id,
            Self::Button(node) => &node.id,
            Self::Form(node) => &node.id,
            Self::Unknown(node) => &node.id,
        }
    }

    /// The wire tag this node was decoded from.
    pub fn kind(&self) -> &str {
        match self {
            Self::Text(_) => "text",
            Self::Input(_) => "input",
            Self::Dropdown(_) => "dropdown",
            Self::Button(_) => "button",
            Self::Form(_) => "form",
            Self::Unknown(node) => &node.kind,
        }
    }

    /// Whether this node contributes a value to a submission payload.
    pub fn is_field(&self) -> bool {
        matches!(self, Self::Input(_) | Self::Dropdown(_))
    }

    /// The `required` flag for field nodes; `false` for everything else,
    /// including forms and buttons that happen to share an id with a label's
    /// reference.
    pub fn is_required_field(&self) -> bool {
        match self {
            Self::Input(node) => node.required,
            Self::Dropdown(node) => node.required,
            _ => false,
        }
    }
}

/// Static text: headings, paragraphs, and field labels.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TextNode {
    pub id: String,
    pub content: String,
    /// Presentation role; plain paragraph when absent.
    #[serde(default)]
    pub label: Option<TextRole>,
    /// Id of the field this text labels, meaningful only for
    /// [`TextRole::Label`].
    #[serde(default, rename = "for")]
    pub for_id: Option<String>,
    /// Whether the referenced field is required. Derived by
    /// [`resolve`](crate::resolve); never read from the wire, and any value a
    /// server sends for it is discarded.
    #[serde(skip)]
    pub for_required: bool,
}

impl TextNode {
    /// A label bound to a field by id, eligible for requirement resolution.
    pub fn is_bound_label(&self) -> bool {
        self.label == Some(TextRole::Label) && self.for_id.is_some()
    }
}

/// Presentation role of a [`TextNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextRole {
    Heading,
    Paragraph,
    Label,
}

/// Single-line text field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InputNode {
    pub id: String,
    #[serde(default)]
    pub placeholder: Option<String>,
    /// Value the field starts with before the user edits it.
    #[serde(default, rename = "defaultValue")]
    pub default_value: Option<String>,
    #[serde(default)]
    pub required: bool,
}

/// Selection control. The renderer prepends a synthetic placeholder choice,
/// so `options` holds real choices only.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DropdownNode {
    pub id: String,
    pub options: Vec<SelectOption>,
    /// Value of the option selected before the user picks one.
    #[serde(default, rename = "defaultValue")]
    pub default_value: Option<String>,
    #[serde(default)]
    pub required: bool,
}

/// One choice offered by a [`DropdownNode`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

/// Clickable control. Buttons never contribute to submission payloads.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ButtonNode {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub variant: ButtonVariant,
    #[serde(default)]
    pub action: ButtonAction,
}

/// Visual emphasis of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

/// Interaction a button triggers. Absent on the wire means a plain button
/// with no built-in behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonAction {
    /// Submits the enclosing form.
    Submit,
    /// Restores the enclosing form's fields to their defaults.
    Reset,
    #[default]
    Plain,
}

impl ButtonAction {
    /// The `type` attribute this action maps to on a rendered button.
    pub fn html_type(&self) -> &'static str {
        match self {
            Self::Submit => "submit",
            Self::Reset => "reset",
            Self::Plain => "button",
        }
    }
}

/// The unit of submission: an ordered group of child components.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FormNode {
    pub id: String,
    pub children: Vec<Component>,
    #[serde(default, rename = "submitUrl")]
    pub submit_url: Option<String>,
}

impl FormNode {
    /// Endpoint this form posts to, falling back to [`DEFAULT_SUBMIT_URL`].
    pub fn endpoint(&self) -> &str {
        self.submit_url.as_deref().unwrap_or(DEFAULT_SUBMIT_URL)
    }
}

/// A node whose `type` tag is outside the recognized vocabulary. Carried
/// through decoding so the renderer can skip it with a diagnostic instead of
/// failing the document.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownNode {
    pub id: String,
    /// The unrecognized wire tag.
    pub kind: String,
}
