//! Well-known mark names and the SVG glyphs that stand in for them.
use crate::error::MapnikError;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static GLYPHS: [(&str, &str); 14] = [
    ("X", "x.svg"),
    ("Cross", "cross.svg"),
    ("Square", "square.svg"),
    ("Star", "star.svg"),
    ("Triangle", "triangle.svg"),
    ("shape://backslash", "shape-backslash.svg"),
    ("shape://carrow", "shape-carrow.svg"),
    ("shape://dot", "shape-dot.svg"),
    ("shape://horline", "shape-horline.svg"),
    ("shape://oarrow", "shape-oarrow.svg"),
    ("shape://plus", "shape-plus.svg"),
    ("shape://slash", "shape-slash.svg"),
    ("shape://times", "shape-times.svg"),
    ("shape://vertline", "shape-vertline.svg"),
];

static BY_NAME: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| GLYPHS.iter().copied().collect());

static BY_BASENAME: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| GLYPHS.iter().map(|&(name, file)| (file, name)).collect());

/// Resolves well-known names to glyph paths, joined onto an optional base path.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlyphTable<'a> {
    base_path: Option<&'a str>,
}

impl<'a> GlyphTable<'a> {
    pub fn new(base_path: Option<&'a str>) -> Self {
        Self { base_path }
    }

    pub fn basename(well_known_name: &str) -> Option<&'static str> {
        BY_NAME.get(well_known_name).copied()
    }

    pub fn resolve(&self, well_known_name: &str) -> Result<String, MapnikError> {
        let basename = Self::basename(well_known_name)
            .ok_or_else(|| MapnikError::UnsupportedSymbol(well_known_name.to_string()))?;
        Ok(match self.base_path {
            Some(base) if !base.is_empty() => format!("{}/{basename}", base.trim_end_matches('/')),
            _ => basename.to_string(),
        })
    }

    /// The well-known name whose glyph `file` points at, if any. Only the
    /// final path component is compared.
    pub fn well_known_name(&self, file: &str) -> Option<&'static str> {
        let basename = file.rsplit(['/', '\\']).next().unwrap_or(file);
        BY_BASENAME.get(basename).copied()
    }
}
