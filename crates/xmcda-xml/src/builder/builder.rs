use crate::builder::{AliasMap, Declaration, Element, NamespaceWrite, XmlBuilderError};

/// Serializes a complete XML document: optional declaration plus root element.
pub struct Builder<'a> {
    /// The XML declaration, omitted from output when `None`.
    declaration: Option<Declaration<'a>>,
    /// The root element of the document.
    root: Element<'a>,
}

impl<'a> Builder<'a> {
    pub fn new(declaration: Option<Declaration<'a>>, root: Element<'a>) -> Self {
        Builder { declaration, root }
    }

    pub fn write_to<W: std::io::Write>(&self, mut w: W) -> Result<(), XmlBuilderError> {
        if let Some(declaration) = &self.declaration {
            declaration.write(&mut w)?;
        }
        self.root.ns_write(&mut w, &AliasMap::new())
    }

    pub fn to_xml_string(&self) -> Result<String, XmlBuilderError> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }
}
