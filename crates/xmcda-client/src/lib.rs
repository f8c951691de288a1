//! Blocking SOAP 1.1 client for the decision-deck XMCDA ranking web service.
//!
//! The service at [`ENDPOINT_ADDRESS`] infers the operation from the root
//! element of the request payload; no WSDL is involved. Three operations
//! exist: `hello`, `submitProblem` and `requestSolution` (see [`operations`]).
//! A submission yields an opaque ticket which a later `requestSolution`
//! presents verbatim to fetch the result.

pub mod dispatch;
pub mod envelope;
pub mod error;
pub mod operations;

pub use dispatch::{Dispatch, SoapResponse};
pub use error::DispatchError;

/// The live rankAlternativesValues solver endpoint.
pub const ENDPOINT_ADDRESS: &str =
    "http://webservices.decision-deck.org/soap/rankAlternativesValues-RXMCDA.py";
