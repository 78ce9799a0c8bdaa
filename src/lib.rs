//! Cartographic style conversion between the neutral JSON style model and
//! Mapnik XML.
//!
//! The heavy lifting lives in the workspace crates; this crate ties them to
//! files and JSON text and hosts the `mapstyle` command-line tool.

pub mod converter;

pub use converter::{ConvertError, Direction, convert_file, json_to_mapnik, load_options, mapnik_to_json};
pub use mapstyle_filter::{FilterError, parse_filter, render_filter};
pub use mapstyle_mapnik::{MapnikError, MapnikTranslator, OptionValue, OutputOptions};
pub use mapstyle_types::{Filter, Rule, ScaleDenominator, Style, Symbolizer};
