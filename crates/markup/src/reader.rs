//! Parses XML text into a [`Node`] tree with `roxmltree`.
use crate::error::MarkupError;
use crate::node::{AttrValue, Node};
use roxmltree::{Document, ParsingOptions};

/// Parses `source` and returns its root element. Comments and processing
/// instructions are dropped; text content is trimmed and omitted when blank.
pub fn read_document(source: &str) -> Result<Node, MarkupError> {
    // Mapnik stylesheets commonly declare entities in an internal DTD.
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(source, options)?;
    Ok(convert(doc.root_element()))
}

fn convert(element: roxmltree::Node<'_, '_>) -> Node {
    let attributes = element
        .attributes()
        .map(|attr| (attr.name().to_string(), AttrValue::Text(attr.value().to_string())))
        .collect();

    let text: String = element
        .children()
        .filter(|child| child.is_text())
        .filter_map(|child| child.text())
        .collect();
    let text = text.trim();

    Node {
        name: element.tag_name().name().to_string(),
        attributes,
        text: (!text.is_empty()).then(|| text.to_string()),
        children: element
            .children()
            .filter(|child| child.is_element())
            .map(convert)
            .collect(),
    }
}
