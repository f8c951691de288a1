//! Thin parsing layer over `roxmltree`, plus shape helpers for asserting the
//! structure of response trees.

pub use roxmltree::*;

use crate::XmlError;

/// Parses an XML string into a borrowing document.
pub fn parse(xml: &str) -> Result<Document<'_>, XmlError> {
    let doc = roxmltree::Document::parse(xml)?;
    tracing::debug!(input_length = xml.len(), "parsed XML document");
    Ok(doc)
}

/// The element children of a node, skipping text, comment and PI nodes.
pub fn element_children<'a, 'input>(node: Node<'a, 'input>) -> Vec<Node<'a, 'input>> {
    node.children().filter(|n| n.is_element()).collect()
}

/// Fails unless the node's local name is `expected`.
pub fn expect_name(node: Node<'_, '_>, expected: &str) -> Result<(), XmlError> {
    let found = node.tag_name().name();
    if found == expected {
        Ok(())
    } else {
        Err(XmlError::InvalidTag {
            expected: expected.to_string(),
            found: found.to_string(),
        })
    }
}

/// The element children of `node`, which must number exactly `expected`.
pub fn expect_children<'a, 'input>(
    node: Node<'a, 'input>,
    expected: usize,
) -> Result<Vec<Node<'a, 'input>>, XmlError> {
    let children = element_children(node);
    if children.len() == expected {
        Ok(children)
    } else {
        Err(XmlError::ChildCount {
            tag: node.tag_name().name().to_string(),
            expected,
            found: children.len(),
        })
    }
}

/// The single element child of `node`, which must be named `expected`.
pub fn only_child<'a, 'input>(
    node: Node<'a, 'input>,
    expected: &str,
) -> Result<Node<'a, 'input>, XmlError> {
    let children = expect_children(node, 1)?;
    expect_name(children[0], expected)?;
    Ok(children[0])
}

/// The text content of `node`; absent text is an error.
pub fn text<'a>(node: Node<'a, '_>) -> Result<&'a str, XmlError> {
    node.text().ok_or_else(|| XmlError::MissingText {
        tag: node.tag_name().name().to_string(),
    })
}
