//! Whole-document conversions between style JSON and Mapnik XML.
use mapstyle_mapnik::{MapnikError, MapnikTranslator, OutputOptions};
use mapstyle_types::Style;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid style JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid output options in '{}': {source}", path.display())]
    Options {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Mapnik(#[from] MapnikError),
}

/// Which way a document is converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Style JSON in, Mapnik XML out.
    Write,
    /// Mapnik XML in, style JSON out.
    Read,
}

pub fn style_from_json(source: &str) -> Result<Style, ConvertError> {
    Ok(serde_json::from_str(source)?)
}

pub fn style_to_json(style: &Style) -> Result<String, ConvertError> {
    Ok(serde_json::to_string_pretty(style)?)
}

pub fn json_to_mapnik(source: &str, options: &OutputOptions) -> Result<String, ConvertError> {
    let style = style_from_json(source)?;
    Ok(MapnikTranslator::new(options.clone()).write_style(&style)?)
}

pub fn mapnik_to_json(source: &str, options: &OutputOptions) -> Result<String, ConvertError> {
    let style = MapnikTranslator::new(options.clone()).read_style(source)?;
    style_to_json(&style)
}

pub fn load_options(path: &Path) -> Result<OutputOptions, ConvertError> {
    let source = read(path)?;
    serde_json::from_str(&source).map_err(|source| ConvertError::Options {
        path: path.to_path_buf(),
        source,
    })
}

/// Converts `input` and returns the converted document. When `output` is
/// given the document is also written there.
pub fn convert_file(
    direction: Direction,
    input: &Path,
    output: Option<&Path>,
    options: &OutputOptions,
) -> Result<String, ConvertError> {
    let source = read(input)?;
    let converted = match direction {
        Direction::Write => json_to_mapnik(&source, options)?,
        Direction::Read => mapnik_to_json(&source, options)?,
    };
    log::debug!("converted {} ({:?})", input.display(), direction);

    if let Some(output) = output {
        fs::write(output, &converted).map_err(|source| ConvertError::Io {
            path: output.to_path_buf(),
            source,
        })?;
    }
    Ok(converted)
}

fn read(path: &Path) -> Result<String, ConvertError> {
    fs::read_to_string(path).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })
}
