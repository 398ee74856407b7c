//! Geometry primitives shared by the generators.
//!
//! Generators build a [`Path`] out of typed [`PathSegment`] records; turning
//! those records into SVG path text happens only in [`Path::to_svg`].

mod path;
mod point;

pub use path::{ArcSweep, Path, PathSegment};
pub use point::Point2D;
