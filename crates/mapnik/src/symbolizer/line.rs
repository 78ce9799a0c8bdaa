use super::{graphic_file, graphic_from_file};
use crate::attributes::{AttributeMapping, read_attributes, trace_unmapped, write_attributes};
use crate::elements::SymbolizerElement;
use crate::error::MapnikError;
use crate::glyphs::GlyphTable;
use mapstyle_markup::{AttrValue, Node};
use mapstyle_types::{LineCap, LineJoin, LineSymbolizer};

static LINE: &[AttributeMapping<LineSymbolizer>] = &[
    text_field!("stroke", color),
    number_field!("stroke-opacity", opacity),
    number_field!("stroke-width", width),
    keyword_field!("stroke-linecap", cap, LineCap),
    keyword_field!("stroke-linejoin", join, LineJoin),
    dasharray_field!("stroke-dasharray", dasharray),
];

pub(crate) fn write(line: &LineSymbolizer, glyphs: &GlyphTable) -> Result<Node, MapnikError> {
    let element = if line.graphic_fill.is_some() {
        SymbolizerElement::LinePattern
    } else {
        SymbolizerElement::Line
    };
    let mut node = Node::new(element.tag());
    write_attributes(LINE, line, &mut node);
    if line.visibility == Some(false) {
        node.attributes.insert("stroke-opacity".into(), AttrValue::Number(0.0));
    }

    // A pattern fill takes the file slot over a stroke graphic.
    if let Some(graphic) = line.graphic_fill.as_ref().or(line.graphic_stroke.as_ref()) {
        if let Some(file) = graphic_file(graphic, glyphs)? {
            node.attributes.insert("file".into(), file.into());
        }
    }
    Ok(node)
}

pub(crate) fn read(node: &Node, glyphs: &GlyphTable) -> Result<LineSymbolizer, MapnikError> {
    let mut line = LineSymbolizer::default();
    read_attributes(LINE, node, &mut line)?;
    if let Some(file) = node.attribute("file") {
        let graphic = Some(graphic_from_file(&file.to_string(), glyphs));
        if node.name == SymbolizerElement::LinePattern.tag() {
            line.graphic_fill = graphic;
        } else {
            line.graphic_stroke = graphic;
        }
    }
    trace_unmapped(node, &[LINE], &["file"]);
    Ok(line)
}
