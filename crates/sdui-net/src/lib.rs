//! SDUI Networking
//!
//! The engine's view of the network: fetching UI documents and posting form
//! submissions. Everything above this crate programs against [`Transport`];
//! [`HttpTransport`] is the blocking production implementation.

mod http;

pub use http::{HttpTransport, HttpTransportBuilder};
pub use url::Url;

use std::collections::BTreeMap;

/// Flat field-id to value mapping posted as a submission body.
pub type Payload = BTreeMap<String, String>;

/// What a submission endpoint decided about a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Success response; optional server-provided confirmation message.
    Accepted { message: Option<String> },
    /// Rejection; optional server-provided reason, plus the HTTP status text
    /// for callers that need a fallback message.
    Rejected {
        error: Option<String>,
        status_text: String,
    },
}

/// Transport failure: the request never produced a usable response. A
/// rejected submission is not an error; it comes back as
/// [`SubmitOutcome::Rejected`].
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Connection, TLS, or protocol failure below the HTTP layer.
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint path could not be joined onto the base URL.
    #[error("Invalid endpoint {path:?}: {source}")]
    InvalidEndpoint {
        path: String,
        #[source]
        source: url::ParseError,
    },

    /// A document fetch came back with a non-success status.
    #[error("Failed to fetch document: {status_text}")]
    FetchStatus { status: u16, status_text: String },
}

/// The network seam between the engine core and the outside world.
pub trait Transport {
    /// Fetch the raw JSON text of a UI document. Decoding stays in the
    /// schema layer so malformed documents are distinguishable from
    /// transport failures.
    fn fetch_document(&self, path: &str) -> Result<String, TransportError>;

    /// Post a submission payload as JSON and report the endpoint's verdict.
    fn submit(&self, path: &str, payload: &Payload) -> Result<SubmitOutcome, TransportError>;
}
