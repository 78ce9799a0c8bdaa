//! Drawing instructions. Every field is optional; an absent field means the
//! renderer default applies.
use serde::{Deserialize, Serialize};

keyword_enum! {
    SymbolizerKind {
        Fill => "Fill",
        Line => "Line",
        Mark => "Mark",
        Icon => "Icon",
        Raster => "Raster",
        Text => "Text",
    }
}

keyword_enum! {
    LineCap {
        Butt => "butt",
        Round => "round",
        Square => "square",
    }
}

keyword_enum! {
    LineJoin {
        Miter => "miter",
        Round => "round",
        Bevel => "bevel",
    }
}

keyword_enum! {
    Justify {
        Left => "left",
        Center => "center",
        Right => "right",
        Auto => "auto",
    }
}

keyword_enum! {
    TextTransform {
        None => "none",
        Uppercase => "uppercase",
        Lowercase => "lowercase",
        Capitalize => "capitalize",
    }
}

keyword_enum! {
    /// Placement of a label relative to its anchor point.
    Anchor {
        Center => "center",
        Left => "left",
        Right => "right",
        Top => "top",
        Bottom => "bottom",
        TopLeft => "top-left",
        TopRight => "top-right",
        BottomLeft => "bottom-left",
        BottomRight => "bottom-right",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Symbolizer {
    Fill(FillSymbolizer),
    Line(LineSymbolizer),
    Mark(MarkSymbolizer),
    Icon(IconSymbolizer),
    Raster(RasterSymbolizer),
    Text(TextSymbolizer),
}

impl Symbolizer {
    pub fn kind(&self) -> SymbolizerKind {
        match self {
            Symbolizer::Fill(_) => SymbolizerKind::Fill,
            Symbolizer::Line(_) => SymbolizerKind::Line,
            Symbolizer::Mark(_) => SymbolizerKind::Mark,
            Symbolizer::Icon(_) => SymbolizerKind::Icon,
            Symbolizer::Raster(_) => SymbolizerKind::Raster,
            Symbolizer::Text(_) => SymbolizerKind::Text,
        }
    }
}

/// A point graphic used as a fill or stroke pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Graphic {
    Mark(MarkSymbolizer),
    Icon(IconSymbolizer),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillSymbolizer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub antialias: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphic_fill: Option<Graphic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline_dasharray: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<bool>,
}

impl FillSymbolizer {
    pub fn has_outline(&self) -> bool {
        self.outline_color.is_some()
            || self.outline_opacity.is_some()
            || self.outline_width.is_some()
            || self.outline_dasharray.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSymbolizer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cap: Option<LineCap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join: Option<LineJoin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dasharray: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphic_stroke: Option<Graphic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphic_fill: Option<Graphic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkSymbolizer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub well_known_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid_edges: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconSymbolizer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_overlap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid_edges: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RasterSymbolizer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSymbolizer {
    /// Name of the feature property holding the label text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Font family names, in order of preference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub halo_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub halo_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify: Option<Justify>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<TextTransform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<Anchor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_overlap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid_edges: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<bool>,
}
