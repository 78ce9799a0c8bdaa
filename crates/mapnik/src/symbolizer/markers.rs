//! Marks and icons. Both render to `MarkersSymbolizer`; on read the `file`
//! attribute decides which one an element was.
use crate::attributes::{AttributeMapping, read_attributes, trace_unmapped, write_attributes};
use crate::elements::SymbolizerElement;
use crate::error::MapnikError;
use crate::glyphs::GlyphTable;
use mapstyle_markup::{AttrValue, Node};
use mapstyle_types::{IconSymbolizer, MarkSymbolizer, Symbolizer};

static MARK: &[AttributeMapping<MarkSymbolizer>] = &[
    number_field!("opacity", fill_opacity),
    text_field!("stroke", stroke_color),
    number_field!("stroke-width", stroke_width),
    number_field!("stroke-opacity", stroke_opacity),
    number_field!("width", radius),
    AttributeMapping {
        attribute: "height",
        write: |s| s.radius.map(AttrValue::from),
        read: |s, v| {
            let height = v.as_f64()?;
            s.radius.get_or_insert(height);
            Some(())
        },
    },
    text_field!("fill", color),
    flag_field!("avoid-edges", avoid_edges),
    rotation_field!("transform", rotate),
];

static ICON: &[AttributeMapping<IconSymbolizer>] = &[
    number_field!("opacity", opacity),
    number_field!("width", size),
    AttributeMapping {
        attribute: "height",
        write: |s| s.size.map(AttrValue::from),
        read: |s, v| {
            let height = v.as_f64()?;
            s.size.get_or_insert(height);
            Some(())
        },
    },
    text_field!("fill", color),
    flag_field!("allow-overlap", allow_overlap),
    flag_field!("avoid-edges", avoid_edges),
    rotation_field!("transform", rotate),
    text_field!("file", image),
];

pub(crate) fn write_mark(mark: &MarkSymbolizer, glyphs: &GlyphTable) -> Result<Node, MapnikError> {
    let mut node = Node::new(SymbolizerElement::Markers.tag());
    write_attributes(MARK, mark, &mut node);
    if let Some(name) = &mark.well_known_name {
        node.attributes.insert("file".into(), glyphs.resolve(name)?.into());
    }
    if mark.visibility == Some(false) {
        node.attributes.insert("opacity".into(), AttrValue::Number(0.0));
    }
    Ok(node)
}

pub(crate) fn write_icon(icon: &IconSymbolizer) -> Node {
    let mut node = Node::new(SymbolizerElement::Markers.tag());
    write_attributes(ICON, icon, &mut node);
    if icon.visibility == Some(false) {
        node.attributes.insert("opacity".into(), AttrValue::Number(0.0));
    }
    node
}

/// A glyph file reads back as a mark, any other file as an icon. Without a
/// file, only `allow-overlap` (which marks never carry) makes an icon.
pub(crate) fn read(node: &Node, glyphs: &GlyphTable) -> Result<Symbolizer, MapnikError> {
    let file = node.attribute("file").map(ToString::to_string);
    let well_known_name = file.as_deref().and_then(|file| glyphs.well_known_name(file));
    let is_icon = match (&file, well_known_name) {
        (Some(_), Some(_)) => false,
        (Some(_), None) => true,
        (None, _) => node.attribute("allow-overlap").is_some(),
    };

    if is_icon {
        let mut icon = IconSymbolizer::default();
        read_attributes(ICON, node, &mut icon)?;
        trace_unmapped(node, &[ICON], &[]);
        return Ok(Symbolizer::Icon(icon));
    }

    let mut mark = MarkSymbolizer {
        well_known_name: well_known_name.map(str::to_string),
        ..Default::default()
    };
    read_attributes(MARK, node, &mut mark)?;
    trace_unmapped(node, &[MARK], &["file"]);
    Ok(Symbolizer::Mark(mark))
}
