//! SDUI Forms
//!
//! The submission side of the engine. Each form in a loaded document gets a
//! [`FormBoundary`] owning that form's transient state: live field values,
//! the in-flight flag, and the outcome notice of the last submission. The
//! boundary drives the collect-and-post protocol against a transport and
//! never mutates the document tree itself.

mod boundary;

pub use boundary::{
    BoundarySet, FieldKind, FieldSlot, FormBoundary, Notice, Phase, SubmitRequest,
    SUCCESS_FALLBACK,
};
pub use sdui_net::{Payload, SubmitOutcome, Transport, TransportError};
