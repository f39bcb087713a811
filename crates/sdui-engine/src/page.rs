//! Page - one load cycle's document and interaction state

use sdui_form::{BoundarySet, FormBoundary};
use sdui_render::{render_document, RenderContext, ViewNode};
use sdui_schema::Document;

/// A loaded page: the resolved component tree, read-only for the rest of the
/// cycle, plus every form's transient interaction state. Re-fetching the
/// document replaces the whole page; nothing carries over.
#[derive(Debug, Clone)]
pub struct Page {
    document: Document,
    boundaries: BoundarySet,
}

impl Page {
    /// Build a page from an already decoded document: resolves label
    /// cross-references and creates one boundary per top-level form.
    pub fn from_document(document: Document) -> Self {
        let document = sdui_schema::resolve(document);
        let boundaries = BoundarySet::from_document(&document);
        Self {
            document,
            boundaries,
        }
    }

    /// The resolved document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// All form boundaries on this page.
    pub fn boundaries(&self) -> &BoundarySet {
        &self.boundaries
    }

    /// One form's boundary.
    pub fn form(&self, form_id: &str) -> Option<&FormBoundary> {
        self.boundaries.get(form_id)
    }

    /// One form's boundary, mutably.
    pub fn form_mut(&mut self, form_id: &str) -> Option<&mut FormBoundary> {
        self.boundaries.get_mut(form_id)
    }

    /// Apply a user value change to a field of `form_id`.
    pub fn set_value(&mut self, form_id: &str, field_id: &str, value: impl Into<String>) {
        match self.form_mut(form_id) {
            Some(boundary) => boundary.set_value(field_id, value),
            None => {
                tracing::warn!(form = form_id, "value change for unknown form ignored");
            }
        }
    }

    /// Render the page to a view tree reflecting current interaction state.
    pub fn render(&self) -> ViewNode {
        render_document(&self.document, RenderContext::with_boundaries(&self.boundaries))
    }

    /// Render the page straight to HTML.
    pub fn render_html(&self) -> String {
        self.render().to_html()
    }
}
