//! Serializes a [`Node`] tree to indented XML with `quick-xml`.
use crate::error::MarkupError;
use crate::node::Node;
use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// Writes `root` as a complete document, preceded by the XML declaration.
pub fn write_document(root: &Node) -> Result<String, MarkupError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(write_error)?;
    write_node(&mut writer, root)?;

    let mut xml = String::from_utf8(writer.into_inner())?;
    xml.push('\n');
    Ok(xml)
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &Node) -> Result<(), MarkupError> {
    let mut start = BytesStart::new(node.name.as_str());
    for (name, value) in &node.attributes {
        let value = value.to_string();
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if node.text.is_none() && node.children.is_empty() {
        return writer.write_event(Event::Empty(start)).map_err(write_error);
    }

    writer.write_event(Event::Start(start)).map_err(write_error)?;
    if let Some(text) = &node.text {
        writer
            .write_event(Event::Text(BytesText::from_escaped(partial_escape(text.as_str()))))
            .map_err(write_error)?;
    }
    for child in &node.children {
        write_node(writer, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(node.name.as_str())))
        .map_err(write_error)
}

fn write_error(err: impl std::fmt::Display) -> MarkupError {
    MarkupError::Write(err.to_string())
}
