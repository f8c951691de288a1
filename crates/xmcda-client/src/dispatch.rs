//! Blocking request/response exchange with the SOAP endpoint.

use std::time::Duration;

use tracing::{debug, error, info, instrument};
use xmcda_xml::builder::Element;
use xmcda_xml::parser::Document;

use crate::envelope;
use crate::error::DispatchError;

/// A blocking dispatch client bound to one endpoint URL.
///
/// The HTTP agent is created once and reused for every invocation of this
/// instance. Calls block the current thread until the service answers or the
/// transport gives up.
pub struct Dispatch {
    endpoint: String,
    agent: ureq::Agent,
}

impl Dispatch {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(30))
            .timeout_read(Duration::from_secs(60))
            .build();
        Dispatch {
            endpoint: endpoint.into(),
            agent,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Wraps `payload` in a SOAP 1.1 envelope and sends it.
    #[instrument(name = "dispatch.invoke_payload", level = "info", skip(self, payload), fields(endpoint = %self.endpoint), err)]
    pub fn invoke_payload(&self, payload: Element<'_>) -> Result<SoapResponse, DispatchError> {
        self.invoke_message(envelope::wrap(payload))
    }

    /// Sends a caller-built envelope as-is.
    #[instrument(name = "dispatch.invoke_message", level = "info", skip(self, envelope), fields(endpoint = %self.endpoint), err)]
    pub fn invoke_message(&self, envelope: Element<'_>) -> Result<SoapResponse, DispatchError> {
        let xml = envelope::to_xml(envelope)?;
        debug!(body_length = xml.len(), "sending request");

        let result = self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", "text/xml; charset=utf-8")
            .set("SOAPAction", "\"\"")
            .send_string(&xml);

        match result {
            Ok(response) => {
                let status = response.status();
                let body = response.into_string()?;
                info!(status, body_length = body.len(), "response received");
                Ok(SoapResponse { raw: body })
            }
            Err(ureq::Error::Status(status, response)) => {
                debug!(status, "received error status");
                let body = response.into_string().unwrap_or_default();
                Err(decode_error_response(status, &body))
            }
            Err(e) => {
                error!(error = %e, "request failed");
                Err(e.into())
            }
        }
    }
}

/// Error statuses often still carry a fault envelope in the body; surface it
/// as a `Fault` when it decodes, otherwise report the bare status.
fn decode_error_response(status: u16, body: &str) -> DispatchError {
    if let Ok(doc) = xmcda_xml::parser::parse(body) {
        if let Ok(body_node) = envelope::body(&doc) {
            if let Some(fault) = envelope::fault(body_node) {
                return DispatchError::Fault {
                    code: fault.code,
                    string: fault.string,
                };
            }
        }
    }
    DispatchError::Http { status }
}

/// A response owning its raw XML text. Navigation borrows from it.
#[derive(Debug, Clone)]
pub struct SoapResponse {
    raw: String,
}

impl SoapResponse {
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Parses the raw text into a document rooted at the response envelope.
    pub fn document(&self) -> Result<Document<'_>, DispatchError> {
        Ok(xmcda_xml::parser::parse(&self.raw)?)
    }
}
