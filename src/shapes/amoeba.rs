//! Lobed "amoeba" outlines.
//!
//! Lobes radiate from a hub circle of radius `branch_thickness / 2`. Each
//! lobe leaves the hub on its clockwise side, tapers out along a cubic
//! Bézier to a round tip cap, returns along a second Bézier, then an inward
//! arc hugging the hub carries the outline to the next lobe.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::{CutError, Result};
use crate::geometry::{ArcSweep, Path, Point2D};
use crate::svg::{Element, SvgDocument, Unit};
use crate::validate;

/// Lobe count used when none is given.
pub const DEFAULT_LOBE_COUNT: u32 = 3;

/// Most lobes whose bases still fit side by side on the hub.
pub const MAX_LOBE_COUNT: u32 = 6;

/// Amoeba geometry parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmoebaSpec {
    pub center: Point2D,
    /// Distance from the center to the far edge of each lobe.
    pub lobe_radius: f64,
    /// Radius of the round cap at the end of each lobe.
    pub lobe_tip_radius: f64,
    /// Width of each branch where it meets the hub.
    pub branch_thickness: f64,
    /// Bézier handle length as a percentage of `lobe_radius`.
    pub curve_pct: f64,
    pub lobe_count: u32,
}

impl AmoebaSpec {
    pub fn curve_radius(&self) -> f64 {
        self.lobe_radius * self.curve_pct / 100.0
    }

    /// Radius of the hub circle.
    pub fn center_radius(&self) -> f64 {
        self.branch_thickness / 2.0
    }

    /// Angular half-width of a lobe's base on the hub.
    ///
    /// Fixed at `atan(1/2)`; independent of every parameter.
    pub fn base_half_angle(&self) -> f64 {
        let r = self.center_radius();
        r.atan2(2.0 * r)
    }

    /// Central angle of lobe `i`; lobe 0 points straight up.
    pub fn lobe_angle(&self, i: u32) -> f64 {
        i as f64 * 2.0 * PI / self.lobe_count as f64 - FRAC_PI_2
    }

    /// Check that the outline is well defined.
    pub fn validate(&self) -> Result<()> {
        validate::finite_point("center", self.center)?;
        validate::positive("lobe_radius", self.lobe_radius)?;
        validate::positive("lobe_tip_radius", self.lobe_tip_radius)?;
        validate::positive("branch_thickness", self.branch_thickness)?;
        validate::percentage("curve_pct", self.curve_pct, false)?;
        validate::less_than(
            "lobe_tip_radius",
            self.lobe_tip_radius,
            "lobe_radius",
            self.lobe_radius,
        )?;
        validate::less_than(
            "branch_thickness / 2",
            self.center_radius(),
            "lobe_radius",
            self.lobe_radius,
        )?;
        if self.lobe_count < 2 {
            return Err(CutError::InvalidParameter {
                message: format!("lobe_count must be at least 2, got {}", self.lobe_count),
                help: Some("A single lobe has no hub arc to close the outline".to_string()),
            });
        }
        // Lobe bases must not overlap on the hub, or the hub arcs run backwards.
        let pitch = 2.0 * PI / self.lobe_count as f64;
        if pitch < 2.0 * self.base_half_angle() {
            return Err(CutError::InvalidParameter {
                message: format!(
                    "lobe_count {} is too many; neighbouring lobes overlap on the hub",
                    self.lobe_count
                ),
                help: Some(format!("Use at most {} lobes", MAX_LOBE_COUNT)),
            });
        }
        Ok(())
    }
}

/// Key points of a single lobe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lobe {
    /// Hub point where the lobe leaves on its clockwise side.
    pub hub_cw: Point2D,
    /// Hub point where the lobe returns on its counter-clockwise side.
    pub hub_ccw: Point2D,
    /// Center of the round tip cap.
    pub tip_center: Point2D,
    pub tip_cw: Point2D,
    pub tip_ccw: Point2D,
    /// Unit vector pointing out along the lobe.
    pub direction: Point2D,
}

impl AmoebaSpec {
    /// Compute the key points of lobe `i`.
    pub fn lobe(&self, i: u32) -> Lobe {
        let angle = self.lobe_angle(i);
        let delta = self.base_half_angle();
        let hub = self.center_radius();

        let direction = Point2D::new(angle.cos(), angle.sin());
        let perpendicular = Point2D::new(-direction.y, direction.x);

        let tip_center = self.center + direction * (self.lobe_radius - self.lobe_tip_radius);

        Lobe {
            hub_cw: Point2D::polar(self.center, hub, angle - delta),
            hub_ccw: Point2D::polar(self.center, hub, angle + delta),
            tip_center,
            tip_cw: tip_center - perpendicular * self.lobe_tip_radius,
            tip_ccw: tip_center + perpendicular * self.lobe_tip_radius,
            direction,
        }
    }
}

/// Build the closed lobed outline.
///
/// Starts at lobe 0's clockwise hub point and visits lobes in increasing
/// index order. Per lobe: Bézier out, convex tip arc, Bézier back, concave
/// hub arc to the next lobe (the last one returns to the start).
pub fn create_lobed_path(spec: &AmoebaSpec) -> Result<Path> {
    spec.validate()?;

    let handle = spec.curve_radius();
    let hub_radius = spec.center_radius();
    let first = spec.lobe(0);

    let mut path = Path::new();
    path.move_to(first.hub_cw);

    for i in 0..spec.lobe_count {
        let lobe = spec.lobe(i);
        let pull = lobe.direction * handle;

        path.cubic_to(lobe.hub_cw + pull, lobe.tip_cw - pull, lobe.tip_cw);
        path.arc_to(spec.lobe_tip_radius, ArcSweep::Clockwise, lobe.tip_ccw);
        path.cubic_to(lobe.tip_ccw - pull, lobe.hub_ccw + pull, lobe.hub_ccw);

        let next = if i + 1 < spec.lobe_count {
            spec.lobe(i + 1).hub_cw
        } else {
            first.hub_cw
        };
        path.arc_to(hub_radius, ArcSweep::CounterClockwise, next);
    }

    path.close();
    Ok(path)
}

/// A complete amoeba drawing on an inch canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmoebaDrawing {
    pub width: f64,
    pub height: f64,
    pub lobe_radius: f64,
    pub lobe_tip_radius: f64,
    pub branch_thickness: f64,
    pub curve_pct: f64,
    pub lobe_count: u32,
    pub stroke_width: f64,
}

impl AmoebaDrawing {
    /// The amoeba centered on the canvas.
    pub fn spec(&self) -> AmoebaSpec {
        AmoebaSpec {
            center: Point2D::new(self.width / 2.0, self.height / 2.0),
            lobe_radius: self.lobe_radius,
            lobe_tip_radius: self.lobe_tip_radius,
            branch_thickness: self.branch_thickness,
            curve_pct: self.curve_pct,
            lobe_count: self.lobe_count,
        }
    }
}

/// Assemble background and outline.
pub fn amoeba_document(drawing: &AmoebaDrawing) -> Result<SvgDocument> {
    validate::positive("width", drawing.width)?;
    validate::positive("height", drawing.height)?;
    validate::positive("stroke_width", drawing.stroke_width)?;

    let path = create_lobed_path(&drawing.spec())?;

    let mut document = SvgDocument::new(
        drawing.width,
        drawing.height,
        Unit::Inches,
        drawing.stroke_width,
    );
    document.push(Element::Background);
    document.push(Element::Path(path));
    Ok(document)
}
