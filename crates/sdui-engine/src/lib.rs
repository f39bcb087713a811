//! SDUI Engine
//!
//! A server-driven UI renderer core: fetches a JSON document describing a
//! page, decodes it into a typed component tree, resolves label
//! cross-references, and renders accessible markup with live form state.
//!
//! # Example
//! ```rust,ignore
//! use sdui_engine::{Config, Engine, HttpTransport, Url};
//!
//! let transport = HttpTransport::new(Url::parse("http://localhost:3000")?)?;
//! let engine = Engine::new(transport);
//! let mut page = engine.load()?;
//! page.set_value("form", "firstName", "Ada");
//! engine.submit(&mut page, "form");
//! println!("{}", page.render_html());
//! ```

mod config;
mod engine;
mod page;

pub use config::Config;
pub use engine::{Engine, LoadError};
pub use page::Page;

// Re-export sub-crates for advanced usage
pub use sdui_form as form;
pub use sdui_net as net;
pub use sdui_render as render;
pub use sdui_schema as schema;

// The types the common path touches, lifted to the top level.
pub use sdui_form::{BoundarySet, FormBoundary, Notice, Phase};
pub use sdui_net::{HttpTransport, Payload, SubmitOutcome, Transport, TransportError, Url};
pub use sdui_render::{render_document, RenderContext, ViewNode};
pub use sdui_schema::{Component, DecodeError, Document};

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
