//! Scale bounds as `MaxScaleDenominator` / `MinScaleDenominator` children.
use crate::elements::{MAX_SCALE, MIN_SCALE};
use crate::error::MapnikError;
use mapstyle_markup::Node;
use mapstyle_types::ScaleDenominator;

/// One child per bound that is set, maximum first.
pub fn scale_to_nodes(scale: &ScaleDenominator) -> Vec<Node> {
    [(MAX_SCALE, scale.max), (MIN_SCALE, scale.min)]
        .into_iter()
        .filter_map(|(element, bound)| bound.map(|value| Node::new(element).with_text(value.to_string())))
        .collect()
}

/// Reads the bounds from a rule element. `None` when neither child is present.
pub fn scale_from_nodes(rule: &Node) -> Result<Option<ScaleDenominator>, MapnikError> {
    let scale = ScaleDenominator {
        min: bound(rule, MIN_SCALE)?,
        max: bound(rule, MAX_SCALE)?,
    };
    Ok((!scale.is_unbounded()).then_some(scale))
}

fn bound(rule: &Node, element: &str) -> Result<Option<f64>, MapnikError> {
    let Some(node) = rule.first_child(element) else {
        return Ok(None);
    };
    let text = node.text.as_deref().unwrap_or_default();
    text.trim()
        .parse()
        .map(Some)
        .map_err(|_| MapnikError::InvalidScale {
            element: element.to_string(),
            value: text.to_string(),
        })
}
