//! Programmatic construction of XML documents.
//!
//! Namespace handling works through alias maps: an element declares aliases
//! with [`Element::add_namespace_declaration`], and every descendant (element
//! or attribute) carrying a [`Namespace`] resolves its prefix against the
//! declarations in scope. Text and attribute values are escaped on write, so
//! whole XML documents can be embedded as text content.

mod attribute;
mod builder;
mod declaration;
mod element;
mod namespace;

use std::collections::HashMap;

pub use self::attribute::*;
pub use self::builder::*;
pub use self::declaration::*;
pub use self::element::*;
pub use self::namespace::*;

/// Namespace declarations in scope while writing, keyed by URI. `None` marks
/// the default (unprefixed) namespace.
pub type AliasMap<'a> = HashMap<Namespace<'a>, Option<&'a str>>;

#[derive(Debug, thiserror::Error)]
pub enum XmlBuilderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("namespace '{ns}' not declared for '{tag}'")]
    NamespaceNotDeclared { tag: String, ns: String },

    #[error("namespace '{ns}' has no alias usable for attribute '{attr}'")]
    NamespaceHasNoAlias { attr: String, ns: String },
}

pub trait NamespaceWrite<'a> {
    fn ns_write<W: std::io::Write>(
        &self,
        w: &mut W,
        aliases: &AliasMap<'a>,
    ) -> Result<(), XmlBuilderError>;
}

/// Writes `text` with the XML-significant characters replaced by entities.
/// Quotes are only escaped inside attribute values.
pub(crate) fn write_escaped<W: std::io::Write>(
    w: &mut W,
    text: &str,
    escape_quote: bool,
) -> std::io::Result<()> {
    let bytes = text.as_bytes();
    let mut start = 0;
    for (i, b) in bytes.iter().enumerate() {
        let replacement: &[u8] = match b {
            b'&' => b"&amp;",
            b'<' => b"&lt;",
            b'>' => b"&gt;",
            b'"' if escape_quote => b"&quot;",
            _ => continue,
        };
        w.write_all(&bytes[start..i])?;
        w.write_all(replacement)?;
        start = i + 1;
    }
    w.write_all(&bytes[start..])
}
