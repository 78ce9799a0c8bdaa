//! The renderer-neutral style model.
//!
//! A [`Style`] is an ordered list of [`Rule`]s; each rule optionally carries a
//! [`Filter`] and a [`ScaleDenominator`] and draws its [`Symbolizer`]s in
//! order. The serde representation is the JSON style IR exchanged with the
//! outside world, with filters encoded as operator-first arrays
//! (`["==", "name", "foo"]`).

#[macro_use]
mod keyword;

pub mod filter;
pub mod style;
pub mod symbolizer;

pub use filter::{CombinationOperator, ComparisonOperator, Filter, FilterValue, NEGATION_KEYWORD};
pub use style::{Rule, ScaleDenominator, Style};
pub use symbolizer::{
    Anchor, FillSymbolizer, Graphic, IconSymbolizer, Justify, LineCap, LineJoin, LineSymbolizer,
    MarkSymbolizer, RasterSymbolizer, Symbolizer, SymbolizerKind, TextSymbolizer, TextTransform,
};
