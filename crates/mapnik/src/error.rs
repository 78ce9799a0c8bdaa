use mapstyle_filter::FilterError;
use mapstyle_markup::MarkupError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapnikError {
    #[error("well-known mark '{0}' has no Mapnik glyph")]
    UnsupportedSymbol(String),

    #[error("unrecognized symbolizer element <{0}>")]
    UnrecognizedElement(String),

    #[error("invalid value '{value}' for attribute '{attribute}' on <{element}>")]
    InvalidAttribute {
        element: String,
        attribute: String,
        value: String,
    },

    #[error("<{element}> must contain a number, found '{value}'")]
    InvalidScale { element: String, value: String },

    #[error("expected a <{0}> element")]
    MissingElement(&'static str),

    #[error("filter error: {0}")]
    Filter(#[from] FilterError),

    #[error("markup error: {0}")]
    Markup(#[from] MarkupError),

    #[error("rule {index}{}: {source}", rule_label(.name))]
    Rule {
        index: usize,
        name: Option<String>,
        #[source]
        source: Box<MapnikError>,
    },

    #[error("symbolizer {index} ({kind}): {source}")]
    Symbolizer {
        index: usize,
        kind: String,
        #[source]
        source: Box<MapnikError>,
    },
}

fn rule_label(name: &Option<String>) -> String {
    name.as_deref()
        .map(|name| format!(" '{name}'"))
        .unwrap_or_default()
}

impl MapnikError {
    pub(crate) fn in_rule(self, index: usize, name: Option<String>) -> Self {
        MapnikError::Rule {
            index,
            name,
            source: Box::new(self),
        }
    }

    pub(crate) fn in_symbolizer(self, index: usize, kind: impl Into<String>) -> Self {
        MapnikError::Symbolizer {
            index,
            kind: kind.into(),
            source: Box::new(self),
        }
    }

    /// The underlying failure, with rule and symbolizer context removed.
    pub fn innermost(&self) -> &MapnikError {
        match self {
            MapnikError::Rule { source, .. } | MapnikError::Symbolizer { source, .. } => {
                source.innermost()
            }
            other => other,
        }
    }
}
