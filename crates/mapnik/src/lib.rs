//! Mapnik XML styles for the neutral style model.
//!
//! The write direction assembles a [`Node`](mapstyle_markup::Node) tree from a
//! [`Style`](mapstyle_types::Style): one `Rule` element per rule holding the
//! scale bounds, the rendered filter expression and one element per
//! symbolizer. The read direction inverts each of those steps. Both are
//! exposed through [`MapnikTranslator`].

#[macro_use]
mod attributes;

pub mod elements;
pub mod error;
pub mod glyphs;
pub mod options;
pub mod rule;
pub mod scale;
pub mod style;
pub mod symbolizer;
pub mod translator;

pub use elements::SymbolizerElement;
pub use error::MapnikError;
pub use glyphs::GlyphTable;
pub use options::{OptionValue, OutputOptions, apply_output_options};
pub use translator::MapnikTranslator;
