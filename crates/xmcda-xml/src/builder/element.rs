use std::borrow::Cow;

use crate::builder::{
    write_escaped, AliasMap, Attribute, Namespace, NamespaceWrite, XmlBuilderError,
};

/// The content of an element.
#[derive(Debug, Clone)]
pub enum Content<'a> {
    /// Text content, unescaped. Escaping happens on write.
    Text(Cow<'a, str>),
    /// Child elements.
    Elements(Vec<Element<'a>>),

    None,
}

/// An XML element under construction.
#[derive(Debug, Clone)]
pub struct Element<'a> {
    /// The local name of the element.
    name: &'a str,
    /// The namespace the element's name lives in, if any.
    namespace: Option<Namespace<'a>>,
    /// Namespace declarations emitted on this element, in insertion order.
    declarations: Vec<(Namespace<'a>, Option<&'a str>)>,
    /// The attributes of the element.
    attributes: Vec<Attribute<'a>>,
    /// The content of the element.
    content: Content<'a>,
}

impl<'a> Element<'a> {
    /// Creates an empty element with the given name.
    pub fn new(name: &'a str) -> Self {
        Element {
            name,
            namespace: None,
            declarations: Vec::new(),
            attributes: Vec::new(),
            content: Content::None,
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    /// Puts the element's name into `namespace`. The namespace must be
    /// declared on this element or an ancestor by the time the tree is
    /// written.
    pub fn set_namespace(mut self, namespace: Namespace<'a>) -> Self {
        self.namespace = Some(namespace);
        self
    }

    /// Declares a namespace alias on this element (`xmlns:alias="url"`, or
    /// `xmlns="url"` when `alias` is `None`). Declarations are inherited by
    /// descendants and serialized in insertion order.
    pub fn add_namespace_declaration(mut self, url: &'a str, alias: Option<&'a str>) -> Self {
        self.declarations.push((Namespace::new(url), alias));
        self
    }

    pub fn add_attribute(mut self, attribute: Attribute<'a>) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Appends a child element. Any text content set earlier is discarded.
    pub fn add_child(mut self, child: Element<'a>) -> Self {
        match self.content {
            Content::None | Content::Text(_) => {
                self.content = Content::Elements(vec![child]);
            }
            Content::Elements(ref mut children) => {
                children.push(child);
            }
        }
        self
    }

    pub fn add_children(mut self, children: Vec<Element<'a>>) -> Self {
        for child in children {
            self = self.add_child(child);
        }
        self
    }

    /// Sets the text content. Any children added earlier are discarded.
    pub fn set_text(mut self, text: impl Into<Cow<'a, str>>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    fn qualified_name(&self, aliases: &AliasMap<'a>) -> Result<String, XmlBuilderError> {
        match &self.namespace {
            None => Ok(self.name.to_string()),
            Some(ns) => match aliases.get(ns) {
                Some(Some(alias)) => Ok(format!("{alias}:{}", self.name)),
                // Default namespace: the plain name already resolves there.
                Some(None) => Ok(self.name.to_string()),
                None => Err(XmlBuilderError::NamespaceNotDeclared {
                    tag: self.name.to_string(),
                    ns: ns.url.to_string(),
                }),
            },
        }
    }
}

impl<'a> NamespaceWrite<'a> for Element<'a> {
    fn ns_write<W: std::io::Write>(
        &self,
        w: &mut W,
        aliases: &AliasMap<'a>,
    ) -> Result<(), XmlBuilderError> {
        let effective: Cow<'_, AliasMap<'a>> = if self.declarations.is_empty() {
            Cow::Borrowed(aliases)
        } else {
            let mut merged = aliases.clone();
            for (ns, alias) in &self.declarations {
                merged.insert(ns.clone(), *alias);
            }
            Cow::Owned(merged)
        };

        let name = self.qualified_name(&effective)?;
        write!(w, "<{name}")?;

        for (ns, alias) in &self.declarations {
            match alias {
                Some(alias) => write!(w, " xmlns:{alias}=\"{}\"", ns.url)?,
                None => write!(w, " xmlns=\"{}\"", ns.url)?,
            }
        }

        for attribute in &self.attributes {
            attribute.ns_write(w, &effective)?;
        }

        match &self.content {
            Content::None => {
                w.write_all(b"/>")?;
            }
            Content::Text(text) => {
                w.write_all(b">")?;
                write_escaped(w, text, false)?;
                write!(w, "</{name}>")?;
            }
            Content::Elements(children) => {
                w.write_all(b">")?;
                for child in children {
                    child.ns_write(w, &effective)?;
                }
                write!(w, "</{name}>")?;
            }
        }
        Ok(())
    }
}
