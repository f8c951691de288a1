use std::borrow::Cow;

use crate::builder::{write_escaped, AliasMap, Namespace, NamespaceWrite, XmlBuilderError};

/// An XML attribute. The value may be borrowed or owned; it is escaped on
/// write.
#[derive(Debug, Clone)]
pub struct Attribute<'a> {
    /// The local name of the attribute.
    name: &'a str,
    /// The attribute value, unescaped.
    value: Cow<'a, str>,

    namespace: Option<Namespace<'a>>,
}

impl<'a> Attribute<'a> {
    pub fn new(name: &'a str, value: impl Into<Cow<'a, str>>) -> Self {
        Attribute {
            name,
            value: value.into(),
            namespace: None,
        }
    }

    pub fn set_namespace(mut self, namespace: Namespace<'a>) -> Self {
        self.namespace = Some(namespace);
        self
    }
}

impl<'a> NamespaceWrite<'a> for Attribute<'a> {
    fn ns_write<W: std::io::Write>(
        &self,
        w: &mut W,
        aliases: &AliasMap<'a>,
    ) -> Result<(), XmlBuilderError> {
        match &self.namespace {
            None => write!(w, " {}=\"", self.name)?,
            Some(ns) => {
                let alias = aliases.get(ns).copied().ok_or_else(|| {
                    XmlBuilderError::NamespaceNotDeclared {
                        tag: self.name.to_string(),
                        ns: ns.url.to_string(),
                    }
                })?;
                // Attributes never pick up the default namespace, so an
                // unaliased declaration cannot qualify them.
                let alias = alias.ok_or_else(|| XmlBuilderError::NamespaceHasNoAlias {
                    attr: self.name.to_string(),
                    ns: ns.url.to_string(),
                })?;
                write!(w, " {alias}:{}=\"", self.name)?;
            }
        }
        write_escaped(w, &self.value, true)?;
        w.write_all(b"\"")?;
        Ok(())
    }
}
