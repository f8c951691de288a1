use xmcda_xml::builder::XmlBuilderError;
use xmcda_xml::XmlError;

/// Everything that can go wrong between building a request and walking the
/// response. Nothing is retried; errors propagate to the caller as-is.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("transport error: {0}")]
    Transport(#[from] ureq::Error),

    #[error("failed to read response body: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize request: {0}")]
    Serialize(#[from] XmlBuilderError),

    #[error("invalid response XML: {0}")]
    Xml(#[from] XmlError),

    #[error("SOAP fault {code}: {string}")]
    Fault { code: String, string: String },

    #[error("HTTP status {status} with undecodable body")]
    Http { status: u16 },
}
