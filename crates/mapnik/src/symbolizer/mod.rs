//! Symbolizer translation in both directions.
//!
//! Writing dispatches on the neutral [`Symbolizer`] kind and may produce more
//! than one element (a fill with an outline yields a polygon element followed
//! by a line element). Reading dispatches on the element name and yields one
//! symbolizer per element.
mod fill;
mod line;
mod markers;
mod raster;
mod text;

use crate::elements::SymbolizerElement;
use crate::error::MapnikError;
use crate::glyphs::GlyphTable;
use mapstyle_markup::Node;
use mapstyle_types::{Graphic, IconSymbolizer, MarkSymbolizer, Symbolizer};

pub fn symbolizer_to_nodes(
    symbolizer: &Symbolizer,
    glyphs: &GlyphTable,
) -> Result<Vec<Node>, MapnikError> {
    match symbolizer {
        Symbolizer::Fill(fill) => fill::write(fill, glyphs),
        Symbolizer::Line(line) => Ok(vec![line::write(line, glyphs)?]),
        Symbolizer::Mark(mark) => Ok(vec![markers::write_mark(mark, glyphs)?]),
        Symbolizer::Icon(icon) => Ok(vec![markers::write_icon(icon)]),
        Symbolizer::Raster(raster) => Ok(vec![raster::write(raster)]),
        Symbolizer::Text(text) => Ok(vec![text::write(text)]),
    }
}

pub fn node_to_symbolizer(node: &Node, glyphs: &GlyphTable) -> Result<Symbolizer, MapnikError> {
    let element = SymbolizerElement::from_tag(&node.name)
        .ok_or_else(|| MapnikError::UnrecognizedElement(node.name.clone()))?;

    Ok(match element {
        SymbolizerElement::Polygon | SymbolizerElement::PolygonPattern => {
            Symbolizer::Fill(fill::read(node, glyphs)?)
        }
        SymbolizerElement::Line | SymbolizerElement::LinePattern => {
            Symbolizer::Line(line::read(node, glyphs)?)
        }
        SymbolizerElement::Markers => markers::read(node, glyphs)?,
        SymbolizerElement::Raster => Symbolizer::Raster(raster::read(node)?),
        SymbolizerElement::Text => Symbolizer::Text(text::read(node)?),
    })
}

/// Reads a rule's symbolizer elements in document order, one symbolizer per
/// element.
pub fn nodes_to_symbolizers<'n>(
    nodes: impl IntoIterator<Item = &'n Node>,
    glyphs: &GlyphTable,
) -> Result<Vec<Symbolizer>, MapnikError> {
    nodes
        .into_iter()
        .enumerate()
        .map(|(index, node)| {
            node_to_symbolizer(node, glyphs)
                .map_err(|err| err.in_symbolizer(index, node.name.clone()))
        })
        .collect()
}

/// The `file` attribute for a fill or stroke graphic.
pub(crate) fn graphic_file(
    graphic: &Graphic,
    glyphs: &GlyphTable,
) -> Result<Option<String>, MapnikError> {
    match graphic {
        Graphic::Mark(mark) => mark
            .well_known_name
            .as_deref()
            .map(|name| glyphs.resolve(name))
            .transpose(),
        Graphic::Icon(icon) => Ok(icon.image.clone()),
    }
}

pub(crate) fn graphic_from_file(file: &str, glyphs: &GlyphTable) -> Graphic {
    match glyphs.well_known_name(file) {
        Some(name) => Graphic::Mark(MarkSymbolizer {
            well_known_name: Some(name.to_string()),
            ..Default::default()
        }),
        None => Graphic::Icon(IconSymbolizer {
            image: Some(file.to_string()),
            ..Default::default()
        }),
    }
}
