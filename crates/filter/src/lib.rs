//! Filter expressions.
//!
//! [`render_filter`] turns a neutral [`Filter`](mapstyle_types::Filter) into a
//! Mapnik boolean expression such as `([a] == '1') && ([b] > 2)`;
//! [`parse_filter`] reads such an expression back. Operator correspondence
//! lives in [`operators`].

pub mod error;
mod lexer;
pub mod operators;
mod parser;
mod render;

pub use error::FilterError;
pub use operators::Reverse;
pub use parser::parse_filter;
pub use render::render_filter;
