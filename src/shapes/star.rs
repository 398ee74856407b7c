//! Three-point star outlines with tip circles.
//!
//! The star alternates outer and inner vertices around its center, starting
//! straight up. Each outer tip optionally carries a circle pulled inward by
//! its own radius so the circle's far edge touches the tip.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::Result;
use crate::geometry::{Path, Point2D};
use crate::svg::{Element, SvgDocument, Unit};
use crate::validate;

/// Number of outer tips.
pub const STAR_POINTS: usize = 3;

/// Star geometry parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarSpec {
    pub center: Point2D,
    pub outer_radius: f64,
    /// Inner radius as a percentage of the outer radius.
    pub inner_radius_pct: f64,
}

impl StarSpec {
    pub fn inner_radius(&self) -> f64 {
        self.outer_radius * self.inner_radius_pct / 100.0
    }

    /// Check that the star is well defined.
    pub fn validate(&self) -> Result<()> {
        validate::finite_point("center", self.center)?;
        validate::positive("outer_radius", self.outer_radius)?;
        validate::percentage("inner_radius_pct", self.inner_radius_pct, true)?;
        Ok(())
    }
}

/// An outer tip and the direction it points in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarTip {
    pub point: Point2D,
    /// Radial angle in radians, screen space.
    pub angle: f64,
}

/// Build the closed star polygon: `M v0 L v1 .. L v5 Z`.
pub fn create_star_path(spec: &StarSpec) -> Result<Path> {
    spec.validate()?;

    let inner_radius = spec.inner_radius();
    let mut path = Path::new();

    for i in 0..STAR_POINTS * 2 {
        let angle = i as f64 * PI / STAR_POINTS as f64 - FRAC_PI_2;
        let radius = if i % 2 == 0 {
            spec.outer_radius
        } else {
            inner_radius
        };
        let vertex = Point2D::polar(spec.center, radius, angle);

        if i == 0 {
            path.move_to(vertex);
        } else {
            path.line_to(vertex);
        }
    }

    path.close();
    Ok(path)
}

/// The outer tips in drawing order, starting at the top.
pub fn get_star_tips(center: Point2D, outer_radius: f64) -> Vec<StarTip> {
    (0..STAR_POINTS)
        .map(|i| {
            let angle = i as f64 * 2.0 * PI / STAR_POINTS as f64 - FRAC_PI_2;
            StarTip {
                point: Point2D::polar(center, outer_radius, angle),
                angle,
            }
        })
        .collect()
}

/// Center of a tip circle: shifted from the tip toward the star center by
/// exactly `circle_radius`.
pub fn tip_circle_center(tip: &StarTip, circle_radius: f64) -> Point2D {
    Point2D::new(
        tip.point.x - circle_radius * tip.angle.cos(),
        tip.point.y - circle_radius * tip.angle.sin(),
    )
}

/// A complete star drawing on an inch canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarDrawing {
    pub width: f64,
    pub height: f64,
    pub outer_radius: f64,
    pub inner_radius_pct: f64,
    pub circle_radius: f64,
    pub stroke_width: f64,
}

impl StarDrawing {
    /// The star centered on the canvas.
    pub fn spec(&self) -> StarSpec {
        StarSpec {
            center: Point2D::new(self.width / 2.0, self.height / 2.0),
            outer_radius: self.outer_radius,
            inner_radius_pct: self.inner_radius_pct,
        }
    }
}

/// Assemble background, star outline and tip circles.
pub fn star_document(drawing: &StarDrawing) -> Result<SvgDocument> {
    validate::positive("width", drawing.width)?;
    validate::positive("height", drawing.height)?;
    validate::positive("stroke_width", drawing.stroke_width)?;
    validate::positive("circle_radius", drawing.circle_radius)?;
    validate::less_than(
        "circle_radius",
        drawing.circle_radius,
        "outer_radius",
        drawing.outer_radius,
    )?;

    let spec = drawing.spec();
    let path = create_star_path(&spec)?;

    let mut document = SvgDocument::new(
        drawing.width,
        drawing.height,
        Unit::Inches,
        drawing.stroke_width,
    );
    document.push(Element::Background);
    document.push(Element::Path(path));

    for tip in get_star_tips(spec.center, spec.outer_radius) {
        document.push(Element::Circle {
            center: tip_circle_center(&tip, drawing.circle_radius),
            radius: drawing.circle_radius,
        });
    }

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CutError;
    use crate::geometry::PathSegment;

    const EPS: f64 = 1e-9;

    fn example_spec() -> StarSpec {
        StarSpec {
            center: Point2D::new(30.0, 30.0),
            outer_radius: 25.0,
            inner_radius_pct: 20.0,
        }
    }

    fn drawing() -> StarDrawing {
        StarDrawing {
            width: 60.0,
            height: 60.0,
            outer_radius: 28.0,
            inner_radius_pct: 20.0,
            circle_radius: 7.0,
            stroke_width: 0.05,
        }
    }

    #[test]
    fn test_first_vertex_points_up() {
        let path = create_star_path(&example_spec()).unwrap();
        let first = path.vertices()[0];
        assert!((first.x - 30.0).abs() < EPS);
        assert!((first.y - 5.0).abs() < EPS);
    }

    #[test]
    fn test_six_alternating_vertices() {
        let spec = example_spec();
        let path = create_star_path(&spec).unwrap();

        let vertices = path.vertices();
        assert_eq!(vertices.len(), 6);
        for (i, v) in vertices.iter().enumerate() {
            let expected = if i % 2 == 0 { 25.0 } else { 5.0 };
            assert!((v.distance(spec.center) - expected).abs() < EPS, "vertex {i}");
        }
    }

    #[test]
    fn test_path_structure() {
        let path = create_star_path(&example_spec()).unwrap();
        let segments = path.segments();

        assert_eq!(segments.len(), 7);
        assert!(matches!(segments[0], PathSegment::MoveTo(_)));
        assert!(segments[1..6]
            .iter()
            .all(|s| matches!(s, PathSegment::LineTo(_))));
        assert!(path.is_closed());
        assert!(path.to_svg().starts_with("M 30,5 L "));
    }

    #[test]
    fn test_tips_are_outer_vertices() {
        let spec = example_spec();
        let path = create_star_path(&spec).unwrap();
        let vertices = path.vertices();
        let tips = get_star_tips(spec.center, spec.outer_radius);

        assert_eq!(tips.len(), 3);
        for (i, tip) in tips.iter().enumerate() {
            assert!(tip.point.distance(vertices[i * 2]) < EPS);
        }
        assert!((tips[0].angle + FRAC_PI_2).abs() < EPS);
        assert!((tips[1].angle - PI / 6.0).abs() < EPS);
    }

    #[test]
    fn test_tip_circle_touches_tip() {
        let spec = example_spec();
        for tip in get_star_tips(spec.center, spec.outer_radius) {
            let center = tip_circle_center(&tip, 7.0);
            assert!((center.distance(tip.point) - 7.0).abs() < EPS);
            assert!((center.distance(spec.center) - 18.0).abs() < EPS);
        }
    }

    #[test]
    fn test_rejects_bad_parameters() {
        let mut spec = example_spec();
        spec.outer_radius = 0.0;
        assert!(matches!(
            create_star_path(&spec),
            Err(CutError::InvalidParameter { .. })
        ));

        let mut spec = example_spec();
        spec.inner_radius_pct = 120.0;
        assert!(create_star_path(&spec).is_err());
    }

    #[test]
    fn test_document_elements() {
        let document = star_document(&drawing()).unwrap();
        let elements = document.elements();

        assert_eq!(elements.len(), 5);
        assert_eq!(elements[0], Element::Background);
        assert!(matches!(elements[1], Element::Path(_)));
        assert_eq!(
            elements[2..]
                .iter()
                .filter(|e| matches!(e, Element::Circle { radius, .. } if *radius == 7.0))
                .count(),
            3
        );
        assert_eq!(document.unit, Unit::Inches);
    }

    #[test]
    fn test_document_rejects_oversized_circle() {
        let mut bad = drawing();
        bad.circle_radius = 28.0;
        assert!(star_document(&bad).is_err());
    }

    #[test]
    fn test_document_is_idempotent() {
        let a = star_document(&drawing()).unwrap().render();
        let b = star_document(&drawing()).unwrap().render();
        assert_eq!(a, b);
    }
}
