//! Engine - Main entry point

use sdui_net::{Transport, TransportError};
use sdui_schema::{DecodeError, Document};

use crate::{Config, Page};

/// The server-driven UI engine: a transport plus configuration. Generic over
/// [`Transport`] so tests and embedders can swap the network out.
pub struct Engine<T: Transport> {
    transport: T,
    config: Config,
}

impl<T: Transport> Engine<T> {
    /// Create an engine over `transport` with default configuration.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, Config::default())
    }

    /// Create an engine with explicit configuration.
    pub fn with_config(transport: T, config: Config) -> Self {
        tracing::info!("SDUI Engine {} initialized", crate::VERSION);
        Self { transport, config }
    }

    /// Fetch, decode, and resolve the configured document, returning the
    /// page for this load cycle. Every call starts a fresh cycle; state held
    /// by a previous page is meant to be discarded.
    pub fn load(&self) -> Result<Page, LoadError> {
        tracing::info!(path = %self.config.document_path, "loading document");
        let text = self.transport.fetch_document(&self.config.document_path)?;
        let document = Document::from_json(&text)?;
        let page = Page::from_document(document);
        tracing::debug!(
            components = page.document().components.len(),
            forms = page.boundaries().len(),
            "document ready"
        );
        Ok(page)
    }

    /// Submit the form `form_id` on `page` through this engine's transport.
    /// Returns `false` when the page has no such form.
    pub fn submit(&self, page: &mut Page, form_id: &str) -> bool {
        match page.form_mut(form_id) {
            Some(boundary) => {
                boundary.submit(&self.transport);
                true
            }
            None => {
                tracing::warn!(form = form_id, "submit requested for unknown form");
                false
            }
        }
    }

    /// Get engine configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The transport collaborator.
    pub fn transport(&self) -> &T {
        &self.transport
    }
}

/// Why a load attempt failed. Transport and decode failures stay separate so
/// callers can phrase retry messaging accordingly.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Malformed document: {0}")]
    Decode(#[from] DecodeError),
}
