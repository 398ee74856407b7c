//! Template generators.
//!
//! Each generator is a set of stateless functions: parameters in, a
//! [`Path`](crate::geometry::Path) or [`SvgDocument`](crate::svg::SvgDocument) out.

pub mod amoeba;
pub mod pegboard;
pub mod star;

pub use amoeba::{amoeba_document, create_lobed_path, AmoebaDrawing, AmoebaSpec, Lobe};
pub use pegboard::{
    layout_holes, pegboard_document, render_hole, HoleShape, PegboardDrawing, PegboardLayout,
    PegboardSpec,
};
pub use star::{
    create_star_path, get_star_tips, star_document, tip_circle_center, StarDrawing, StarSpec,
    StarTip,
};
