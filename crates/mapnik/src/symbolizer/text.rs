//! Labels. The label property is the element's text content (`[name]`);
//! everything else is attributes.
use crate::attributes::{AttributeMapping, read_attributes, trace_unmapped, write_attributes};
use crate::elements::SymbolizerElement;
use crate::error::MapnikError;
use mapstyle_markup::{AttrValue, Node};
use mapstyle_types::{Anchor, Justify, TextSymbolizer, TextTransform};

const VERTICAL: &str = "vertical-alignment";
const HORIZONTAL: &str = "horizontal-alignment";

/// Anchor to (vertical, horizontal) alignment.
static ANCHORS: [(Anchor, Option<&str>, Option<&str>); 9] = [
    (Anchor::Center, Some("middle"), Some("middle")),
    (Anchor::Left, None, Some("left")),
    (Anchor::Right, None, Some("right")),
    (Anchor::Top, Some("top"), None),
    (Anchor::Bottom, Some("bottom"), None),
    (Anchor::TopLeft, Some("top"), Some("left")),
    (Anchor::TopRight, Some("top"), Some("right")),
    (Anchor::BottomLeft, Some("bottom"), Some("left")),
    (Anchor::BottomRight, Some("bottom"), Some("right")),
];

static TEXT: &[AttributeMapping<TextSymbolizer>] = &[
    number_field!("opacity", opacity),
    flag_field!("allow-overlap", allow_overlap),
    flag_field!("avoid-edges", avoid_edges),
    text_field!("fill", color),
    AttributeMapping {
        attribute: "face-name",
        write: |s| s.font.as_ref().map(|fonts| AttrValue::from(fonts.join(", "))),
        read: |s, v| {
            let fonts = v
                .to_string()
                .split(',')
                .map(str::trim)
                .filter(|font| !font.is_empty())
                .map(str::to_string)
                .collect();
            s.font = Some(fonts);
            Some(())
        },
    },
    number_field!("size", size),
    text_field!("halo-fill", halo_color),
    number_field!("halo-radius", halo_width),
    keyword_field!("justify-alignment", justify, Justify),
    number_field!("character-spacing", letter_spacing),
    number_field!("line-spacing", line_height),
    number_field!("margin", padding),
    keyword_field!("text-transform", transform, TextTransform),
    number_field!("max-char-angle-delta", max_angle),
    AttributeMapping {
        attribute: "wrap-before",
        write: |s| s.max_width.map(|_| AttrValue::Bool(true)),
        read: |_, v| v.as_bool().map(drop),
    },
    number_field!("wrap-width", max_width),
    AttributeMapping {
        attribute: "rotate-displacement",
        write: |s| s.rotate.map(|_| AttrValue::Bool(true)),
        read: |_, v| v.as_bool().map(drop),
    },
    number_field!("orientation", rotate),
    AttributeMapping {
        attribute: "dx",
        write: |s| s.offset.map(|[x, _]| AttrValue::from(x)),
        read: |s, v| {
            let x = v.as_f64()?;
            s.offset.get_or_insert([0.0, 0.0])[0] = x;
            Some(())
        },
    },
    AttributeMapping {
        attribute: "dy",
        write: |s| s.offset.map(|[_, y]| AttrValue::from(y)),
        read: |s, v| {
            let y = v.as_f64()?;
            s.offset.get_or_insert([0.0, 0.0])[1] = y;
            Some(())
        },
    },
];

pub(crate) fn write(text: &TextSymbolizer) -> Node {
    let mut node = Node::new(SymbolizerElement::Text.tag());
    node.text = text.label.as_ref().map(|label| format!("[{label}]"));
    write_attributes(TEXT, text, &mut node);

    if let Some(anchor) = text.anchor {
        let (vertical, horizontal) = alignment(anchor);
        if let Some(vertical) = vertical {
            node.attributes.insert(VERTICAL.into(), vertical.into());
        }
        if let Some(horizontal) = horizontal {
            node.attributes.insert(HORIZONTAL.into(), horizontal.into());
        }
    }
    if text.visibility == Some(false) {
        node.attributes.insert("opacity".into(), AttrValue::Number(0.0));
    }
    node
}

pub(crate) fn read(node: &Node) -> Result<TextSymbolizer, MapnikError> {
    let mut text = TextSymbolizer {
        label: node.text.as_deref().and_then(label_property),
        ..Default::default()
    };
    read_attributes(TEXT, node, &mut text)?;

    let vertical = node.attribute(VERTICAL).map(ToString::to_string);
    let horizontal = node.attribute(HORIZONTAL).map(ToString::to_string);
    if vertical.is_some() || horizontal.is_some() {
        text.anchor = anchor(vertical.as_deref(), horizontal.as_deref());
        if text.anchor.is_none() {
            log::debug!(
                "no anchor for alignment {:?}/{:?}",
                vertical.as_deref(),
                horizontal.as_deref()
            );
        }
    }
    trace_unmapped(node, &[TEXT], &[VERTICAL, HORIZONTAL]);
    Ok(text)
}

fn alignment(anchor: Anchor) -> (Option<&'static str>, Option<&'static str>) {
    ANCHORS
        .iter()
        .find(|(candidate, ..)| *candidate == anchor)
        .map(|&(_, vertical, horizontal)| (vertical, horizontal))
        .unwrap_or((None, None))
}

fn anchor(vertical: Option<&str>, horizontal: Option<&str>) -> Option<Anchor> {
    ANCHORS
        .iter()
        .find(|(_, v, h)| *v == vertical && *h == horizontal)
        .map(|&(anchor, ..)| anchor)
}

/// `[name]` names a property; any richer expression has no neutral label.
fn label_property(content: &str) -> Option<String> {
    let inner = content.trim().strip_prefix('[')?.strip_suffix(']')?;
    if inner.is_empty() || inner.contains(['[', ']']) {
        log::debug!("text expression '{content}' is not a single property");
        return None;
    }
    Some(inner.to_string())
}
