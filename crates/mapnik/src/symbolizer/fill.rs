//! Polygon fills, with an optional outline drawn as a sibling line element.
//!
//! Mapnik has no outline on its polygon elements, so the outline fields are
//! written as a separate `LineSymbolizer` and read back as a line.
use super::{graphic_file, graphic_from_file};
use crate::attributes::{AttributeMapping, read_attributes, trace_unmapped, write_attributes};
use crate::elements::SymbolizerElement;
use crate::error::MapnikError;
use crate::glyphs::GlyphTable;
use mapstyle_markup::{AttrValue, Node};
use mapstyle_types::FillSymbolizer;

static FILL: &[AttributeMapping<FillSymbolizer>] = &[
    text_field!("fill", color),
    number_field!("fill-opacity", opacity),
    AttributeMapping {
        attribute: "gamma",
        write: |s| s.antialias.map(|on| AttrValue::from(if on { 1.0 } else { 0.0 })),
        read: |s, v| {
            s.antialias = Some(v.as_f64()? > 0.0);
            Some(())
        },
    },
];

static OUTLINE: &[AttributeMapping<FillSymbolizer>] = &[
    text_field!("stroke", outline_color),
    number_field!("stroke-opacity", outline_opacity),
    number_field!("stroke-width", outline_width),
    dasharray_field!("stroke-dasharray", outline_dasharray),
];

pub(crate) fn write(fill: &FillSymbolizer, glyphs: &GlyphTable) -> Result<Vec<Node>, MapnikError> {
    let element = if fill.graphic_fill.is_some() {
        SymbolizerElement::PolygonPattern
    } else {
        SymbolizerElement::Polygon
    };
    let mut node = Node::new(element.tag());
    write_attributes(FILL, fill, &mut node);
    if let Some(graphic) = &fill.graphic_fill {
        if let Some(file) = graphic_file(graphic, glyphs)? {
            node.attributes.insert("file".into(), file.into());
        }
    }
    if fill.visibility == Some(false) {
        node.attributes.insert("fill-opacity".into(), AttrValue::Number(0.0));
    }

    let mut nodes = vec![node];
    if fill.has_outline() {
        let mut outline = Node::new(SymbolizerElement::Line.tag());
        write_attributes(OUTLINE, fill, &mut outline);
        nodes.push(outline);
    }
    Ok(nodes)
}

pub(crate) fn read(node: &Node, glyphs: &GlyphTable) -> Result<FillSymbolizer, MapnikError> {
    let mut fill = FillSymbolizer::default();
    read_attributes(FILL, node, &mut fill)?;
    if let Some(file) = node.attribute("file") {
        fill.graphic_fill = Some(graphic_from_file(&file.to_string(), glyphs));
    }
    trace_unmapped(node, &[FILL], &["file"]);
    Ok(fill)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbolizer::nodes_to_symbolizers;
    use mapstyle_types::{Graphic, LineSymbolizer, MarkSymbolizer, Symbolizer};

    #[test]
    fn test_plain_fill() {
        let fill = FillSymbolizer {
            color: Some("#ff0000".into()),
            opacity: Some(0.5),
            ..Default::default()
        };
        let nodes = write(&fill, &GlyphTable::default()).unwrap();

        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].name, "PolygonSymbolizer");
        assert_eq!(nodes[0].attribute("fill"), Some(&AttrValue::from("#ff0000")));
        assert_eq!(nodes[0].attribute("fill-opacity"), Some(&AttrValue::from(0.5)));
    }

    #[test]
    fn test_graphic_fill_switches_to_pattern() {
        let fill = FillSymbolizer {
            graphic_fill: Some(Graphic::Mark(MarkSymbolizer {
                well_known_name: Some("shape://slash".into()),
                ..Default::default()
            })),
            ..Default::default()
        };
        let nodes = write(&fill, &GlyphTable::new(Some("glyphs"))).unwrap();

        assert_eq!(nodes[0].name, "PolygonPatternSymbolizer");
        assert_eq!(
            nodes[0].attribute("file"),
            Some(&AttrValue::from("glyphs/shape-slash.svg"))
        );
        assert_eq!(read(&nodes[0], &GlyphTable::default()).unwrap(), fill);
    }

    #[test]
    fn test_outline_becomes_line_sibling() {
        let fill = FillSymbolizer {
            color: Some("#eeeeee".into()),
            outline_color: Some("#333333".into()),
            outline_width: Some(0.5),
            outline_dasharray: Some(vec![2.0, 1.0]),
            ..Default::default()
        };
        let nodes = write(&fill, &GlyphTable::default()).unwrap();

        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1].name, "LineSymbolizer");
        assert_eq!(nodes[1].attribute("stroke"), Some(&AttrValue::from("#333333")));
        assert_eq!(nodes[1].attribute("stroke-dasharray"), Some(&AttrValue::from("2,1")));
        assert!(nodes[0].attribute("stroke").is_none());
    }

    #[test]
    fn test_outline_reads_back_as_a_separate_line() {
        let fill = FillSymbolizer {
            color: Some("#eeeeee".into()),
            outline_color: Some("#333333".into()),
            outline_width: Some(0.5),
            outline_opacity: Some(0.7),
            outline_dasharray: Some(vec![2.0, 1.0]),
            ..Default::default()
        };
        let glyphs = GlyphTable::default();
        let nodes = write(&fill, &glyphs).unwrap();

        assert_eq!(
            nodes_to_symbolizers(&nodes, &glyphs).unwrap(),
            vec![
                Symbolizer::Fill(FillSymbolizer {
                    color: Some("#eeeeee".into()),
                    ..Default::default()
                }),
                Symbolizer::Line(LineSymbolizer {
                    color: Some("#333333".into()),
                    width: Some(0.5),
                    opacity: Some(0.7),
                    dasharray: Some(vec![2.0, 1.0]),
                    ..Default::default()
                }),
            ]
        );
    }

    #[test]
    fn test_invisible_fill_keeps_other_attributes() {
        let fill = FillSymbolizer {
            color: Some("#00ff00".into()),
            opacity: Some(0.8),
            antialias: Some(true),
            visibility: Some(false),
            ..Default::default()
        };
        let node = &write(&fill, &GlyphTable::default()).unwrap()[0];

        assert_eq!(node.attribute("fill-opacity"), Some(&AttrValue::from(0.0)));
        assert_eq!(node.attribute("fill"), Some(&AttrValue::from("#00ff00")));
        assert_eq!(node.attribute("gamma"), Some(&AttrValue::from(1.0)));
    }

    #[test]
    fn test_bad_opacity_is_reported() {
        let node = Node::new("PolygonSymbolizer").with_attribute("fill-opacity", "half");
        assert!(matches!(
            read(&node, &GlyphTable::default()),
            Err(MapnikError::InvalidAttribute { attribute, .. }) if attribute == "fill-opacity"
        ));
    }
}
