use crate::elements::{MAP, RULE, STYLE};
use crate::error::MapnikError;
use crate::glyphs::GlyphTable;
use crate::options::{OutputOptions, apply_output_options};
use crate::rule::{node_to_rule, rule_to_node};
use mapstyle_markup::Node;
use mapstyle_types::Style;

/// Builds the `Style` element, wrapped in `Map` unless the options say
/// otherwise, with the configured attributes overlaid last.
pub fn style_to_node(style: &Style, options: &OutputOptions) -> Result<Node, MapnikError> {
    let glyphs = options.glyphs();
    let mut node = Node::new(STYLE);
    if !style.name.is_empty() {
        node.attributes.insert("name".into(), style.name.as_str().into());
    }

    for (index, rule) in style.rules.iter().enumerate() {
        let element = rule_to_node(rule, &glyphs).map_err(|err| err.in_rule(index, rule.name.clone()))?;
        node.children.push(element);
    }
    log::debug!("built style '{}' with {} rules", style.name, node.children.len());

    let root = if options.include_map_container {
        Node::new(MAP).with_child(node)
    } else {
        node
    };
    Ok(apply_output_options(root, options))
}

/// Reads a style from a `Map` root (its first `Style`) or a bare `Style` root.
pub fn node_to_style(root: &Node, glyphs: &GlyphTable) -> Result<Style, MapnikError> {
    let style = match root.name.as_str() {
        MAP => {
            let mut styles = root.children_named(STYLE);
            let first = styles.next().ok_or(MapnikError::MissingElement(STYLE))?;
            let extra = styles.count();
            if extra > 0 {
                log::warn!("map holds {} more styles; only the first is read", extra);
            }
            first
        }
        STYLE => root,
        other => return Err(MapnikError::UnrecognizedElement(other.to_string())),
    };

    let mut rules = Vec::new();
    for child in &style.children {
        if child.name != RULE {
            log::trace!("skipping <{}> inside <{STYLE}>", child.name);
            continue;
        }
        let index = rules.len();
        let rule = node_to_rule(child, glyphs).map_err(|err| {
            let name = child.attribute("name").map(ToString::to_string);
            err.in_rule(index, name)
        })?;
        rules.push(rule);
    }

    let name = style
        .attribute("name")
        .map(ToString::to_string)
        .unwrap_or_default();
    log::debug!("read style '{}' with {} rules", name, rules.len());
    Ok(Style { name, rules })
}
