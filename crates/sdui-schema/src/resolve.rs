//! Cross-Reference Resolution
//!
//! Fills in `for_required` on every bound label from the field it points at.
//! Lookups deliberately rescan the tree from the top instead of building an
//! id index: document order is the tie-break for duplicate ids, and at
//! realistic document sizes the rescan is cheaper than keeping an index
//! honest.

use crate::component::{Component, Document, FormNode};

/// Resolve a document: an equivalent tree where every bound label's
/// `for_required` reflects the field it references. Non-label text and all
/// other variants pass through untouched. Running it again on its own output
/// changes nothing.
pub fn resolve(document: Document) -> Document {
    let components = document
        .components
        .iter()
        .map(|component| resolve_component(component, &document.components))
        .collect();
    Document {
        title: document.title,
        components,
    }
}

/// Whether the first node with `id` anywhere under `components` is a
/// required field. Searches depth-first in document order, descending into
/// a form's children before moving to the form's next sibling; the first id
/// match decides, even when that node is not a field.
pub fn is_required(id: &str, components: &[Component]) -> bool {
    find_by_id(id, components).unwrap_or(false)
}

fn resolve_component(component: &Component, scope: &[Component]) -> Component {
    match component {
        Component::Text(text) => {
            let mut resolved = text.clone();
            resolved.for_required = match &text.for_id {
                Some(target) if text.is_bound_label() => is_required(target, scope),
                _ => false,
            };
            Component::Text(resolved)
        }
        // Labels inside a form still resolve against the whole document, so
        // the scope stays the top-level slice.
        Component::Form(form) => Component::Form(FormNode {
            id: form.id.clone(),
            children: form
                .children
                .iter()
                .map(|child| resolve_component(child, scope))
                .collect(),
            submit_url: form.submit_url.clone(),
        }),
        other => other.clone(),
    }
}

fn find_by_id(id: &str, components: &[Component]) -> Option<bool> {
    for component in components {
        if component.id() == id {
            return Some(component.is_required_field());
        }
        if let Component::Form(form) = component {
            if let Some(answer) = find_by_id(id, &form.children) {
                return Some(answer);
            }
        }
    }
    None
}
