use crate::elements::{FILTER, MAX_SCALE, MIN_SCALE, RULE};
use crate::error::MapnikError;
use crate::glyphs::GlyphTable;
use crate::scale::{scale_from_nodes, scale_to_nodes};
use crate::symbolizer::{nodes_to_symbolizers, symbolizer_to_nodes};
use mapstyle_filter::{parse_filter, render_filter};
use mapstyle_markup::Node;
use mapstyle_types::Rule;

/// Builds a `Rule` element: scale bounds, then the filter, then every
/// symbolizer element in order. Repeated element names stay separate
/// siblings.
pub fn rule_to_node(rule: &Rule, glyphs: &GlyphTable) -> Result<Node, MapnikError> {
    let mut node = Node::new(RULE);
    if let Some(name) = &rule.name {
        node.attributes.insert("name".into(), name.as_str().into());
    }
    if let Some(scale) = &rule.scale_denominator {
        node.children.extend(scale_to_nodes(scale));
    }
    if let Some(filter) = &rule.filter {
        node.children.push(Node::new(FILTER).with_text(render_filter(filter)?));
    }
    for (index, symbolizer) in rule.symbolizers.iter().enumerate() {
        let elements = symbolizer_to_nodes(symbolizer, glyphs)
            .map_err(|err| err.in_symbolizer(index, symbolizer.kind().keyword()))?;
        node.children.extend(elements);
    }
    Ok(node)
}

pub fn node_to_rule(node: &Node, glyphs: &GlyphTable) -> Result<Rule, MapnikError> {
    let mut filters = node.children_named(FILTER);
    let filter_text = match filters.next() {
        Some(element) => element.text.clone(),
        None => node.attribute("filter").map(ToString::to_string),
    };
    if filters.next().is_some() {
        log::warn!("rule has more than one <{FILTER}>; using the first");
    }

    let filter = filter_text
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(parse_filter)
        .transpose()?;

    let symbolizers = nodes_to_symbolizers(
        node.children
            .iter()
            .filter(|child| ![FILTER, MIN_SCALE, MAX_SCALE].contains(&child.name.as_str())),
        glyphs,
    )?;

    Ok(Rule {
        name: node.attribute("name").map(ToString::to_string),
        filter,
        scale_denominator: scale_from_nodes(node)?,
        symbolizers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapstyle_markup::AttrValue;
    use mapstyle_types::{
        ComparisonOperator, Filter, LineSymbolizer, MarkSymbolizer, ScaleDenominator, Symbolizer,
    };

    fn stroke(color: &str, width: f64) -> Symbolizer {
        Symbolizer::Line(LineSymbolizer {
            color: Some(color.into()),
            width: Some(width),
            ..Default::default()
        })
    }

    fn casing_rule() -> Rule {
        Rule {
            name: Some("motorway".into()),
            filter: Some(Filter::and(vec![
                Filter::equal("highway", "motorway"),
                Filter::comparison(ComparisonOperator::GreaterThanOrEqual, "lanes", 2.0),
            ])),
            scale_denominator: Some(ScaleDenominator {
                min: Some(1000.0),
                max: Some(250000.0),
            }),
            symbolizers: vec![stroke("#7f0000", 6.0), stroke("#e892a2", 4.0)],
        }
    }

    #[test]
    fn test_child_order() {
        let node = rule_to_node(&casing_rule(), &GlyphTable::default()).unwrap();
        let names: Vec<&str> = node.children.iter().map(|child| child.name.as_str()).collect();

        assert_eq!(
            names,
            vec![
                "MaxScaleDenominator",
                "MinScaleDenominator",
                "Filter",
                "LineSymbolizer",
                "LineSymbolizer"
            ]
        );
        assert_eq!(node.attribute("name"), Some(&AttrValue::from("motorway")));
        assert_eq!(
            node.children[2].text.as_deref(),
            Some("([highway] == 'motorway') && ([lanes] >= 2)")
        );
    }

    #[test]
    fn test_rule_round_trip_keeps_repeated_strokes() {
        let glyphs = GlyphTable::default();
        let node = rule_to_node(&casing_rule(), &glyphs).unwrap();
        assert_eq!(node_to_rule(&node, &glyphs).unwrap(), casing_rule());
    }

    #[test]
    fn test_empty_rule() {
        let glyphs = GlyphTable::default();
        let node = rule_to_node(&Rule::default(), &glyphs).unwrap();
        assert!(node.children.is_empty());
        assert_eq!(node_to_rule(&node, &glyphs).unwrap(), Rule::default());
    }

    #[test]
    fn test_filter_attribute_is_accepted() {
        let node = Node::new("Rule").with_attribute("filter", "[kind] = 'park'");
        let rule = node_to_rule(&node, &GlyphTable::default()).unwrap();
        assert_eq!(rule.filter, Some(Filter::equal("kind", "park")));
    }

    #[test]
    fn test_malformed_filter_fails() {
        let node = Node::new("Rule").with_child(Node::new("Filter").with_text("[kind] == "));
        assert!(matches!(
            node_to_rule(&node, &GlyphTable::default()),
            Err(MapnikError::Filter(_))
        ));
    }

    #[test]
    fn test_symbolizer_error_names_its_position() {
        let rule = Rule {
            symbolizers: vec![
                stroke("#000000", 1.0),
                Symbolizer::Mark(MarkSymbolizer {
                    well_known_name: Some("Circle".into()),
                    ..Default::default()
                }),
            ],
            ..Default::default()
        };
        let err = rule_to_node(&rule, &GlyphTable::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "symbolizer 1 (Mark): well-known mark 'Circle' has no Mapnik glyph"
        );
    }
}
