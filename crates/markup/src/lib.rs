//! The attributed element tree exchanged between the style translators and
//! XML text.
//!
//! Translators only build and inspect [`Node`]s; [`write_document`] and
//! [`read_document`] are the only places that see markup syntax.

pub mod error;
pub mod node;
mod reader;
mod writer;

pub use error::MarkupError;
pub use node::{AttrValue, Node};
pub use reader::read_document;
pub use writer::{XML_DECLARATION, write_document};
