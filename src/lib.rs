//! cutpath - SVG template generator for laser cutting and CNC
//!
//! Computes star, lobed "amoeba" and pegboard geometry from a handful of
//! numeric parameters and renders it as SVG cut lines.

pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod output;
pub mod shapes;
pub mod svg;
pub mod validate;

pub use config::{Config, CONFIG_FILENAME};
pub use error::{CutError, Result};
pub use geometry::{ArcSweep, Path, PathSegment, Point2D};
pub use shapes::{
    amoeba_document, create_lobed_path, create_star_path, get_star_tips, layout_holes,
    pegboard_document, render_hole, star_document, tip_circle_center, AmoebaDrawing, AmoebaSpec,
    HoleShape, PegboardDrawing, PegboardLayout, PegboardSpec, StarDrawing, StarSpec, StarTip,
};
pub use svg::{write_svg, Element, SvgDocument, Unit};
