use crate::filter::Filter;
use crate::symbolizer::Symbolizer;
use serde::{Deserialize, Serialize};

/// A named, ordered list of rules. Rule order is rendering priority.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Style {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_denominator: Option<ScaleDenominator>,
    #[serde(default)]
    pub symbolizers: Vec<Symbolizer>,
}

/// The scale range over which a rule is active. An absent bound is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScaleDenominator {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl ScaleDenominator {
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbolizer::{FillSymbolizer, Symbolizer};
    use serde_json::json;

    #[test]
    fn test_style_from_json_ir() {
        let style: Style = serde_json::from_value(json!({
            "name": "landuse",
            "rules": [{
                "name": "parks",
                "filter": ["==", "type", "park"],
                "scaleDenominator": { "max": 50000 },
                "symbolizers": [{ "kind": "Fill", "color": "#00ff00" }]
            }]
        }))
        .unwrap();

        let rule = &style.rules[0];
        assert_eq!(style.name, "landuse");
        assert_eq!(rule.name.as_deref(), Some("parks"));
        assert_eq!(rule.filter, Some(Filter::equal("type", "park")));
        assert_eq!(
            rule.scale_denominator,
            Some(ScaleDenominator {
                min: None,
                max: Some(50000.0)
            })
        );
        assert_eq!(
            rule.symbolizers,
            vec![Symbolizer::Fill(FillSymbolizer {
                color: Some("#00ff00".into()),
                ..Default::default()
            })]
        );
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let style: Style = serde_json::from_value(json!({ "rules": [{}] })).unwrap();
        assert_eq!(style.name, "");
        assert!(style.rules[0].symbolizers.is_empty());
    }
}
