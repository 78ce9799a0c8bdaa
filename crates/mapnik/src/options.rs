//! Caller-supplied output configuration and the attribute overlay it drives.
use crate::elements::{MAP, STYLE, SymbolizerElement};
use crate::glyphs::GlyphTable;
use indexmap::IndexMap;
use mapstyle_markup::{AttrValue, Node};
use serde::{Deserialize, Serialize};

/// A configured attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Number(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<&OptionValue> for AttrValue {
    fn from(value: &OptionValue) -> Self {
        match value {
            OptionValue::Bool(b) => AttrValue::Bool(*b),
            OptionValue::Number(n) => AttrValue::Number(*n),
            OptionValue::Text(text) => AttrValue::Text(text.clone()),
        }
    }
}

pub type AttributeOptions = IndexMap<String, OptionValue>;

/// Options for the write direction. Deserializes from camelCase JSON; the
/// shorter keys `includeMap`, `map`, `style`, `symbolizers` and
/// `wellKnownBasePath` are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutputOptions {
    /// Wrap the style in a `Map` element.
    #[serde(alias = "includeMap")]
    pub include_map_container: bool,
    #[serde(alias = "map")]
    pub map_options: AttributeOptions,
    #[serde(alias = "style")]
    pub style_options: AttributeOptions,
    #[serde(alias = "symbolizers")]
    pub symbolizer_options: IndexMap<SymbolizerElement, AttributeOptions>,
    /// Directory joined in front of well-known mark glyph files.
    #[serde(alias = "wellKnownBasePath", skip_serializing_if = "Option::is_none")]
    pub glyph_base_path: Option<String>,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            include_map_container: true,
            map_options: IndexMap::new(),
            style_options: IndexMap::new(),
            symbolizer_options: IndexMap::new(),
            glyph_base_path: None,
        }
    }
}

impl OutputOptions {
    pub fn glyphs(&self) -> GlyphTable<'_> {
        GlyphTable::new(self.glyph_base_path.as_deref())
    }

    fn for_element(&self, name: &str) -> Option<&AttributeOptions> {
        match name {
            MAP => Some(&self.map_options),
            STYLE => Some(&self.style_options),
            _ => SymbolizerElement::from_tag(name)
                .and_then(|element| self.symbolizer_options.get(&element)),
        }
    }
}

/// Overlays configured attributes onto `root` and every descendant. An
/// attribute the translation already computed is never replaced.
pub fn apply_output_options(mut root: Node, options: &OutputOptions) -> Node {
    overlay(&mut root, options);
    root
}

fn overlay(node: &mut Node, options: &OutputOptions) {
    if let Some(configured) = options.for_element(&node.name) {
        for (name, value) in configured {
            if node.attributes.contains_key(name) {
                log::debug!("<{}> keeps computed '{}' over configured value", node.name, name);
                continue;
            }
            node.attributes.insert(name.clone(), value.into());
        }
    }
    for child in &mut node.children {
        overlay(child, options);
    }
}
