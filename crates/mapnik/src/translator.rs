use crate::error::MapnikError;
use crate::options::OutputOptions;
use crate::style::{node_to_style, style_to_node};
use mapstyle_markup::{Node, read_document, write_document};
use mapstyle_types::Style;

/// Converts styles to and from Mapnik XML with one set of output options.
///
/// The translator holds no state beyond its options, so a shared reference
/// can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct MapnikTranslator {
    options: OutputOptions,
}

impl MapnikTranslator {
    pub fn new(options: OutputOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &OutputOptions {
        &self.options
    }

    pub fn style_to_node(&self, style: &Style) -> Result<Node, MapnikError> {
        style_to_node(style, &self.options)
    }

    pub fn node_to_style(&self, root: &Node) -> Result<Style, MapnikError> {
        node_to_style(root, &self.options.glyphs())
    }

    /// Renders `style` as an XML document, declaration included.
    pub fn write_style(&self, style: &Style) -> Result<String, MapnikError> {
        Ok(write_document(&self.style_to_node(style)?)?)
    }

    pub fn read_style(&self, source: &str) -> Result<Style, MapnikError> {
        self.node_to_style(&read_document(source)?)
    }
}
