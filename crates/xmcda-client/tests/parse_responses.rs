//! Typed views over canned response bodies, success and deviation cases.

use xmcda_client::envelope;
use xmcda_client::operations::{HelloAck, SolutionAck, SubmissionAck, SUBMISSION_SUCCESS};
use xmcda_client::DispatchError;
use xmcda_xml::parser;
use xmcda_xml::XmlError;

/// Wraps a body fragment the way the live service does (ZSI declares the
/// schema namespaces on the envelope).
fn enveloped(inner: &str) -> String {
    format!(
        r#"<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/" xmlns:xsd="http://www.w3.org/2001/XMLSchema" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"><SOAP-ENV:Body>{inner}</SOAP-ENV:Body></SOAP-ENV:Envelope>"#
    )
}

#[test]
fn test_hello_ack() {
    let xml = enveloped("<helloResponse><message>Hello! This is the rankAlternativesValues service.</message></helloResponse>");
    let doc = parser::parse(&xml).unwrap();
    let ack = HelloAck::from_body(envelope::body(&doc).unwrap()).unwrap();
    assert_eq!(
        ack.message,
        "Hello! This is the rankAlternativesValues service."
    );
}

#[test]
fn test_submission_ack() {
    let xml = enveloped(&format!(
        "<submitProblemResponse><message>{SUBMISSION_SUCCESS}</message><ticket>UVQ84befzm</ticket></submitProblemResponse>"
    ));
    let doc = parser::parse(&xml).unwrap();
    let ack = SubmissionAck::from_body(envelope::body(&doc).unwrap()).unwrap();
    assert_eq!(ack.message, SUBMISSION_SUCCESS);
    assert_eq!(ack.ticket, "UVQ84befzm");
}

#[test]
fn test_solution_ack_collects_four_parts() {
    let xml = enveloped(
        "<requestSolutionResponse><alternativesRanks>r</alternativesRanks><messageLog>m</messageLog><solutionStatus>ok</solutionStatus><ticket>UVQ84befzm</ticket></requestSolutionResponse>",
    );
    let doc = parser::parse(&xml).unwrap();
    let ack = SolutionAck::from_body(envelope::body(&doc).unwrap()).unwrap();
    assert_eq!(ack.parts.len(), 4);
    assert_eq!(ack.parts[0], "alternativesRanks");
}

#[test]
fn test_wrong_response_root_is_rejected() {
    let xml = enveloped("<goodbyeResponse><message>bye</message></goodbyeResponse>");
    let doc = parser::parse(&xml).unwrap();
    let result = HelloAck::from_body(envelope::body(&doc).unwrap());
    assert!(matches!(
        result,
        Err(DispatchError::Xml(XmlError::InvalidTag { ref expected, ref found }))
            if expected == "helloResponse" && found == "goodbyeResponse"
    ));
}

#[test]
fn test_extra_submission_child_is_rejected() {
    let xml = enveloped(
        "<submitProblemResponse><message>m</message><ticket>t</ticket><extra/></submitProblemResponse>",
    );
    let doc = parser::parse(&xml).unwrap();
    let result = SubmissionAck::from_body(envelope::body(&doc).unwrap());
    assert!(matches!(
        result,
        Err(DispatchError::Xml(XmlError::ChildCount {
            expected: 2,
            found: 3,
            ..
        }))
    ));
}

#[test]
fn test_missing_ticket_text_is_rejected() {
    let xml = enveloped(
        "<submitProblemResponse><message>m</message><ticket/></submitProblemResponse>",
    );
    let doc = parser::parse(&xml).unwrap();
    let result = SubmissionAck::from_body(envelope::body(&doc).unwrap());
    assert!(matches!(
        result,
        Err(DispatchError::Xml(XmlError::MissingText { ref tag })) if tag == "ticket"
    ));
}

#[test]
fn test_swapped_children_are_rejected() {
    let xml = enveloped(
        "<submitProblemResponse><ticket>t</ticket><message>m</message></submitProblemResponse>",
    );
    let doc = parser::parse(&xml).unwrap();
    let result = SubmissionAck::from_body(envelope::body(&doc).unwrap());
    assert!(matches!(
        result,
        Err(DispatchError::Xml(XmlError::InvalidTag { .. }))
    ));
}

#[test]
fn test_body_requires_a_soap_envelope() {
    let doc = parser::parse("<helloResponse><message>m</message></helloResponse>").unwrap();
    let result = envelope::body(&doc);
    assert!(matches!(result, Err(XmlError::InvalidTag { .. })));
}

#[test]
fn test_body_checks_the_envelope_namespace() {
    let xml = r#"<Envelope xmlns="http://example.com/not-soap"><Body/></Envelope>"#;
    let doc = parser::parse(xml).unwrap();
    let result = envelope::body(&doc);
    assert!(matches!(result, Err(XmlError::InvalidNamespace { .. })));
}

#[test]
fn test_fault_is_decoded() {
    let xml = enveloped(
        "<SOAP-ENV:Fault><faultcode>SOAP-ENV:Server</faultcode><faultstring>Processing failure</faultstring></SOAP-ENV:Fault>",
    );
    let doc = parser::parse(&xml).unwrap();
    let body = envelope::body(&doc).unwrap();
    let fault = envelope::fault(body).expect("fault must decode");
    assert_eq!(fault.code, "SOAP-ENV:Server");
    assert_eq!(fault.string, "Processing failure");
}

#[test]
fn test_no_fault_in_a_normal_body() {
    let xml = enveloped("<helloResponse><message>m</message></helloResponse>");
    let doc = parser::parse(&xml).unwrap();
    assert!(envelope::fault(envelope::body(&doc).unwrap()).is_none());
}
