//! SDUI Schema
//!
//! The typed component model for server-driven documents: a tagged tree of
//! text, input, dropdown, button, and form nodes, plus the JSON decoding
//! layer and the cross-reference pass that derives requirement markers for
//! field labels.
//!
//! A document travels through three stages:
//! 1. [`Document::from_json`] turns wire JSON into the typed tree, keeping
//!    unrecognized node types as [`Component::Unknown`].
//! 2. [`resolve`] fills in every bound label's `for_required` flag from the
//!    field it references.
//! 3. The resolved tree is handed to rendering and form state downstream.

mod component;
mod decode;
mod resolve;

pub use component::{
    ButtonAction, ButtonNode, ButtonVariant, Component, Document, DropdownNode, FormNode,
    InputNode, SelectOption, TextNode, TextRole, UnknownNode, DEFAULT_SUBMIT_URL,
};
pub use decode::DecodeError;
pub use resolve::{is_required, resolve};
