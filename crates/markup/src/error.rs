use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarkupError {
    #[error("XML parsing error: {0}")]
    XmlParse(#[from] roxmltree::Error),

    #[error("XML writing error: {0}")]
    Write(String),

    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
