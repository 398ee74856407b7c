//! SVG output.
//!
//! Generators describe their drawing as an [`SvgDocument`]; this module owns
//! all markup formatting and the single file write.

mod document;
mod write;

pub use document::{Element, SvgDocument, Unit};
pub use write::write_svg;
