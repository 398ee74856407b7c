//! Typed path segments and their SVG serialization.

use super::Point2D;

/// Direction an arc sweeps in screen space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcSweep {
    /// Positive-angle direction; SVG sweep flag `1`. Used for convex caps.
    Clockwise,
    /// Negative-angle direction; SVG sweep flag `0`. Used for concave joins.
    CounterClockwise,
}

impl ArcSweep {
    /// The SVG `sweep-flag` value.
    pub fn flag(self) -> u8 {
        match self {
            ArcSweep::Clockwise => 1,
            ArcSweep::CounterClockwise => 0,
        }
    }
}

/// One element of a path outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Point2D),
    LineTo(Point2D),
    /// Cubic Bézier: two control points, then the end point.
    CubicTo(Point2D, Point2D, Point2D),
    /// Circular arc, x-rotation 0, always the small arc.
    ArcTo {
        radius: f64,
        sweep: ArcSweep,
        to: Point2D,
    },
    Close,
}

impl PathSegment {
    /// The point the pen rests at after this segment, if it moves the pen.
    pub fn end_point(&self) -> Option<Point2D> {
        match *self {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => Some(p),
            PathSegment::CubicTo(_, _, p) => Some(p),
            PathSegment::ArcTo { to, .. } => Some(to),
            PathSegment::Close => None,
        }
    }
}

/// An ordered outline built from [`PathSegment`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: Point2D) -> &mut Self {
        self.segments.push(PathSegment::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Point2D) -> &mut Self {
        self.segments.push(PathSegment::LineTo(p));
        self
    }

    pub fn cubic_to(&mut self, c1: Point2D, c2: Point2D, p: Point2D) -> &mut Self {
        self.segments.push(PathSegment::CubicTo(c1, c2, p));
        self
    }

    pub fn arc_to(&mut self, radius: f64, sweep: ArcSweep, to: Point2D) -> &mut Self {
        self.segments.push(PathSegment::ArcTo { radius, sweep, to });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.segments.push(PathSegment::Close);
        self
    }

    /// All segments in drawing order.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Check whether the last segment closes the outline.
    pub fn is_closed(&self) -> bool {
        matches!(self.segments.last(), Some(PathSegment::Close))
    }

    /// End points of every move, line, curve and arc, in order.
    pub fn vertices(&self) -> Vec<Point2D> {
        self.segments.iter().filter_map(PathSegment::end_point).collect()
    }

    /// Count arcs sweeping in the given direction.
    pub fn arc_count(&self, sweep: ArcSweep) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, PathSegment::ArcTo { sweep: d, .. } if *d == sweep))
            .count()
    }

    /// Serialize to SVG path data (the `d` attribute).
    pub fn to_svg(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match *segment {
                PathSegment::MoveTo(p) => format!("M {}", p),
                PathSegment::LineTo(p) => format!("L {}", p),
                PathSegment::CubicTo(c1, c2, p) => format!("C {} {} {}", c1, c2, p),
                PathSegment::ArcTo { radius, sweep, to } => {
                    format!("A {},{} 0 0 {} {}", radius, radius, sweep.flag(), to)
                }
                PathSegment::Close => "Z".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
