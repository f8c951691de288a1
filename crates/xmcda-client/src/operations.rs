//! The three operations of the ranking service, as request builders and typed
//! response views.
//!
//! The service dispatches on the payload root element name, so a request is
//! nothing more than a small XML fragment. Responses have fixed shapes and
//! are walked with the xmcda-xml helpers; any deviation is an error naming
//! the expected tag or count.

use xmcda_xml::builder::{Attribute, Element, Namespace};
use xmcda_xml::parser::{self, Node};

use crate::envelope::XSI_NS;
use crate::error::DispatchError;

/// Literal message returned by a successful problem submission.
pub const SUBMISSION_SUCCESS: &str = "The problem submission was successful!";

/// Root-only `hello` request.
pub fn hello() -> Element<'static> {
    Element::new("hello")
}

/// `submitProblem` request carrying the two XMCDA documents as string
/// parameters. The contents are embedded as text, not parsed.
pub fn submit_problem<'a>(overall_values: &'a str, alternatives: &'a str) -> Element<'a> {
    Element::new("submitProblem")
        .add_child(string_param("overallValues", overall_values))
        .add_child(string_param("alternatives", alternatives))
}

/// `requestSolution` request presenting a ticket from an earlier submission.
pub fn request_solution(ticket: &str) -> Element<'_> {
    Element::new("requestSolution").add_child(string_param("ticket", ticket))
}

/// A parameter element annotated as `xsi:type="xsd:string"`, the way the
/// service expects its string arguments.
fn string_param<'a>(name: &'a str, text: &'a str) -> Element<'a> {
    Element::new(name)
        .add_attribute(Attribute::new("type", "xsd:string").set_namespace(Namespace::new(XSI_NS)))
        .set_text(text)
}

/// View over a `helloResponse` body: exactly one `message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelloAck {
    pub message: String,
}

impl HelloAck {
    pub fn from_body(body: Node<'_, '_>) -> Result<Self, DispatchError> {
        let response = parser::only_child(body, "helloResponse")?;
        let message = parser::only_child(response, "message")?;
        Ok(HelloAck {
            message: parser::text(message)?.to_string(),
        })
    }
}

/// View over a `submitProblemResponse` body: a status message plus an opaque
/// ticket. The ticket is extracted verbatim, never format-checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionAck {
    pub message: String,
    pub ticket: String,
}

impl SubmissionAck {
    pub fn from_body(body: Node<'_, '_>) -> Result<Self, DispatchError> {
        let response = parser::only_child(body, "submitProblemResponse")?;
        let children = parser::expect_children(response, 2)?;
        parser::expect_name(children[0], "message")?;
        parser::expect_name(children[1], "ticket")?;
        Ok(SubmissionAck {
            message: parser::text(children[0])?.to_string(),
            ticket: parser::text(children[1])?.to_string(),
        })
    }
}

/// View over a `requestSolutionResponse` body: the solver's result parts,
/// collected by element name. Part contents are left unchecked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionAck {
    pub parts: Vec<String>,
}

impl SolutionAck {
    pub fn from_body(body: Node<'_, '_>) -> Result<Self, DispatchError> {
        let response = parser::only_child(body, "requestSolutionResponse")?;
        let parts = parser::element_children(response)
            .into_iter()
            .map(|n| n.tag_name().name().to_string())
            .collect();
        Ok(SolutionAck { parts })
    }
}
