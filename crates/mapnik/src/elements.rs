//! The Mapnik element vocabulary.
use serde::{Deserialize, Serialize};

pub const MAP: &str = "Map";
pub const STYLE: &str = "Style";
pub const RULE: &str = "Rule";
pub const FILTER: &str = "Filter";
pub const MIN_SCALE: &str = "MinScaleDenominator";
pub const MAX_SCALE: &str = "MaxScaleDenominator";

/// The closed set of symbolizer elements this crate reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolizerElement {
    #[serde(rename = "PolygonSymbolizer")]
    Polygon,
    #[serde(rename = "PolygonPatternSymbolizer")]
    PolygonPattern,
    #[serde(rename = "LineSymbolizer")]
    Line,
    #[serde(rename = "LinePatternSymbolizer")]
    LinePattern,
    #[serde(rename = "MarkersSymbolizer", alias = "IconSymbolizer")]
    Markers,
    #[serde(rename = "RasterSymbolizer")]
    Raster,
    #[serde(rename = "TextSymbolizer")]
    Text,
}

impl SymbolizerElement {
    pub const ALL: [SymbolizerElement; 7] = [
        SymbolizerElement::Polygon,
        SymbolizerElement::PolygonPattern,
        SymbolizerElement::Line,
        SymbolizerElement::LinePattern,
        SymbolizerElement::Markers,
        SymbolizerElement::Raster,
        SymbolizerElement::Text,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            SymbolizerElement::Polygon => "PolygonSymbolizer",
            SymbolizerElement::PolygonPattern => "PolygonPatternSymbolizer",
            SymbolizerElement::Line => "LineSymbolizer",
            SymbolizerElement::LinePattern => "LinePatternSymbolizer",
            SymbolizerElement::Markers => "MarkersSymbolizer",
            SymbolizerElement::Raster => "RasterSymbolizer",
            SymbolizerElement::Text => "TextSymbolizer",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|element| element.tag() == tag)
    }
}
