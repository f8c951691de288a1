//! SOAP 1.1 envelope construction and response-side navigation.
//!
//! The envelope itself is matched namespace-aware; payload children are
//! matched by local name only, since the service is namespace-oblivious on
//! payloads.

use xmcda_xml::builder::{Builder, Declaration, Element, Namespace, XmlBuilderError};
use xmcda_xml::parser::{self, Document, Node};
use xmcda_xml::XmlError;

/// SOAP 1.1 envelope namespace.
pub const SOAP_ENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";
/// XML Schema namespace, declared so payload parameters can reference
/// `xsd:string`.
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema";
/// XML Schema instance namespace, for `xsi:type` attributes.
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Wraps a payload element into a SOAP 1.1 envelope. All namespace
/// declarations the payloads rely on live on the envelope root.
pub fn wrap(payload: Element<'_>) -> Element<'_> {
    let soapenv = Namespace::new(SOAP_ENV_NS);
    Element::new("Envelope")
        .set_namespace(soapenv.clone())
        .add_namespace_declaration(SOAP_ENV_NS, Some("soapenv"))
        .add_namespace_declaration(XSD_NS, Some("xsd"))
        .add_namespace_declaration(XSI_NS, Some("xsi"))
        .add_child(
            Element::new("Body")
                .set_namespace(soapenv)
                .add_child(payload),
        )
}

/// Serializes an envelope to wire XML, declaration included.
pub fn to_xml(envelope: Element<'_>) -> Result<String, XmlBuilderError> {
    Builder::new(Some(Declaration::new("1.0", "utf-8")), envelope).to_xml_string()
}

/// A decoded SOAP 1.1 fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault {
    pub code: String,
    pub string: String,
}

/// Locates the `Body` element of a parsed SOAP response document.
pub fn body<'a, 'input>(doc: &'a Document<'input>) -> Result<Node<'a, 'input>, XmlError> {
    let root = doc.root_element();
    parser::expect_name(root, "Envelope")?;
    match root.tag_name().namespace() {
        Some(SOAP_ENV_NS) => {}
        found => {
            return Err(XmlError::InvalidNamespace {
                expected: SOAP_ENV_NS.to_string(),
                found: found.map(str::to_string),
            })
        }
    }
    root.children()
        .filter(|n| n.is_element())
        .find(|n| {
            n.tag_name().name() == "Body" && n.tag_name().namespace() == Some(SOAP_ENV_NS)
        })
        .ok_or_else(|| XmlError::InvalidTag {
            expected: "Body".to_string(),
            found: "no Body child of Envelope".to_string(),
        })
}

/// Decodes a `Fault` child of the body, if one is present.
pub fn fault(body: Node<'_, '_>) -> Option<Fault> {
    let fault = body
        .children()
        .filter(|n| n.is_element())
        .find(|n| n.tag_name().name() == "Fault")?;
    let field = |name: &str| {
        fault
            .children()
            .filter(|n| n.is_element())
            .find(|n| n.tag_name().name() == name)
            .and_then(|n| n.text())
            .unwrap_or_default()
            .to_string()
    };
    Some(Fault {
        code: field("faultcode"),
        string: field("faultstring"),
    })
}
