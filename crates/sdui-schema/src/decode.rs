//! Document Decoding
//!
//! Turns wire JSON into the typed component tree. Strict about the fields a
//! recognized variant requires, permissive about fields it does not know,
//! and preserving of unrecognized `type` tags as [`Component::Unknown`] so
//! the renderer can skip them.

use serde::de::{self, Deserialize, DeserializeOwned, Deserializer};
use serde_json::Value;

use crate::component::{Component, Document, UnknownNode};

/// Failure to decode a document or one of its components.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The payload is not syntactically valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document root is something other than a JSON object.
    #[error("document root is not an object")]
    RootNotAnObject,

    /// The document object carries no `components` array.
    #[error("document has no `components` array")]
    MissingComponents,

    /// A component is something other than a JSON object.
    #[error("component is not an object")]
    ComponentNotAnObject,

    /// A component object carries no usable `type` tag.
    #[error("component {id:?} has no `type` tag")]
    MissingType { id: String },

    /// A recognized component is missing a required field or carries a
    /// malformed one.
    #[error("{kind} component {id:?}: {source}")]
    BadComponent {
        kind: &'static str,
        id: String,
        source: serde_json::Error,
    },
}

impl Document {
    /// Decode a document from JSON text.
    pub fn from_json(text: &str) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Decode a document from an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        let Value::Object(map) = value else {
            return Err(DecodeError::RootNotAnObject);
        };
        let title = match map.get("title") {
            Some(Value::String(title)) => Some(title.clone()),
            _ => None,
        };
        let components = match map.get("components") {
            Some(Value::Array(items)) => items
                .iter()
                .map(decode_component)
                .collect::<Result<Vec<_>, _>>()?,
            _ => return Err(DecodeError::MissingComponents),
        };
        Ok(Self { title, components })
    }
}

/// Decode one component object, dispatching on its `type` tag.
fn decode_component(value: &Value) -> Result<Component, DecodeError> {
    let Some(object) = value.as_object() else {
        return Err(DecodeError::ComponentNotAnObject);
    };
    let id = object
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let Some(kind) = object.get("type").and_then(Value::as_str) else {
        return Err(DecodeError::MissingType { id });
    };
    let component = match kind {
        "text" => Component::Text(decode_variant("text", value)?),
        "input" => Component::Input(decode_variant("input", value)?),
        "dropdown" => Component::Dropdown(decode_variant("dropdown", value)?),
        "button" => Component::Button(decode_variant("button", value)?),
        "form" => Component::Form(decode_variant("form", value)?),
        other => Component::Unknown(UnknownNode {
            id,
            kind: other.to_string(),
        }),
    };
    Ok(component)
}

fn decode_variant<T: DeserializeOwned>(
    kind: &'static str,
    value: &Value,
) -> Result<T, DecodeError> {
    serde_json::from_value(value.clone()).map_err(|source| DecodeError::BadComponent {
        kind,
        id: value
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        source,
    })
}

// Hand-written so form children recurse through the same tag dispatch as
// top-level components.
impl<'de> Deserialize<'de> for Component {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        decode_component(&value).map_err(de::Error::custom)
    }
}
