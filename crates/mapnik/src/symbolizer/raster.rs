use crate::attributes::{AttributeMapping, read_attributes, trace_unmapped, write_attributes};
use crate::elements::SymbolizerElement;
use crate::error::MapnikError;
use mapstyle_markup::{AttrValue, Node};
use mapstyle_types::RasterSymbolizer;

static RASTER: &[AttributeMapping<RasterSymbolizer>] = &[number_field!("opacity", opacity)];

pub(crate) fn write(raster: &RasterSymbolizer) -> Node {
    let mut node = Node::new(SymbolizerElement::Raster.tag());
    write_attributes(RASTER, raster, &mut node);
    if raster.visibility == Some(false) {
        node.attributes.insert("opacity".into(), AttrValue::Number(0.0));
    }
    node
}

pub(crate) fn read(node: &Node) -> Result<RasterSymbolizer, MapnikError> {
    let mut raster = RasterSymbolizer::default();
    read_attributes(RASTER, node, &mut raster)?;
    trace_unmapped(node, &[RASTER], &[]);
    Ok(raster)
}
