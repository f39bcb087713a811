//! Blocking HTTP Transport
//!
//! reqwest-backed [`Transport`]: GET for documents, POST with a JSON body
//! for submissions. Endpoint paths from documents are relative; they join
//! onto the base URL the transport was built with.

use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::{Payload, SubmitOutcome, Transport, TransportError};

/// Body shape the submission endpoint answers with. Servers that send
/// anything else are tolerated; both fields just come back empty.
#[derive(Debug, Default, Deserialize)]
struct SubmitBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Builder for [`HttpTransport`].
pub struct HttpTransportBuilder {
    base_url: Url,
    user_agent: String,
    timeout: Duration,
}

impl HttpTransportBuilder {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            user_agent: concat!("sdui/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn user_agent(mut self, ua: &str) -> Self {
        self.user_agent = ua.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<HttpTransport, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(self.user_agent)
            .timeout(self.timeout)
            .build()?;
        Ok(HttpTransport {
            base_url: self.base_url,
            client,
        })
    }
}

/// Blocking HTTP transport. One request at a time by construction, which is
/// all the engine's single-submission discipline needs.
pub struct HttpTransport {
    base_url: Url,
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Transport against `base_url` with default settings.
    pub fn new(base_url: Url) -> Result<Self, TransportError> {
        HttpTransportBuilder::new(base_url).build()
    }

    pub fn builder(base_url: Url) -> HttpTransportBuilder {
        HttpTransportBuilder::new(base_url)
    }

    /// The origin requests are issued against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, TransportError> {
        self.base_url
            .join(path)
            .map_err(|source| TransportError::InvalidEndpoint {
                path: path.to_string(),
                source,
            })
    }
}

impl Transport for HttpTransport {
    fn fetch_document(&self, path: &str) -> Result<String, TransportError> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "fetching document");
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::FetchStatus {
                status: status.as_u16(),
                status_text: status_text(status),
            });
        }
        Ok(response.text()?)
    }

    fn submit(&self, path: &str, payload: &Payload) -> Result<SubmitOutcome, TransportError> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, fields = payload.len(), "posting submission");
        let response = self.client.post(url).json(payload).send()?;
        let status = response.status();
        let body: SubmitBody = response
            .text()
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default();
        if status.is_success() {
            Ok(SubmitOutcome::Accepted {
                message: body.message,
            })
        } else {
            Ok(SubmitOutcome::Rejected {
                error: body.error,
                status_text: status_text(status),
            })
        }
    }
}

fn status_text(status: reqwest::StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_onto_base() {
        let base = Url::parse("http://localhost:3000").unwrap();
        let transport = HttpTransport::new(base).unwrap();
        assert_eq!(
            transport.endpoint("/api/submit").unwrap().as_str(),
            "http://localhost:3000/api/submit"
        );
    }

    #[test]
    fn test_submit_body_tolerates_unknown_shapes() {
        let body: SubmitBody = serde_json::from_str(r#"{"ok": true}"#).unwrap();
        assert_eq!(body.message, None);
        assert_eq!(body.error, None);

        let body: SubmitBody =
            serde_json::from_str(r#"{"message": "Welcome", "extra": 1}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("Welcome"));
    }
}
