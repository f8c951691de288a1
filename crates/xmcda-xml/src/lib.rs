//! A small XML builder and parser for XMCDA web-service payloads.
//!
//! The builder produces namespace-aware, escaped XML text; the parser is a
//! thin layer over `roxmltree` with shape helpers for walking response trees.

pub mod builder;
pub mod parser;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum XmlError {
    #[error("invalid XML: {0}")]
    Parse(#[from] crate::parser::Error),

    #[error("invalid namespace: expected '{expected}', found '{found:?}'")]
    InvalidNamespace {
        expected: String,
        found: Option<String>,
    },

    #[error("invalid tag: expected '{expected}', found '{found}'")]
    InvalidTag { expected: String, found: String },

    #[error("invalid number of children for {tag}: expected {expected}, found {found}")]
    ChildCount {
        tag: String,
        expected: usize,
        found: usize,
    },

    #[error("missing text content in '{tag}'")]
    MissingText { tag: String },
}
