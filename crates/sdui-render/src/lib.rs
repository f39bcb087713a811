//! SDUI Rendering
//!
//! Pure mapping from resolved components to a view tree with HTML-like
//! semantics. Rendering never mutates component or form state; interaction
//! state flows in through [`RenderContext`] and shows up as attributes on
//! the produced elements. A shell can serialize the tree with
//! [`ViewNode::to_html`] or walk it directly.

mod element;
mod render;

pub use element::{Attr, Element, ViewNode};
pub use render::{render, render_all, render_document, RenderContext};
