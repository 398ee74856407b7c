//! Pegboard hole grids.
//!
//! Fits as many holes as the pitch allows on the board, then centers the
//! whole pattern. Holes are plain rectangles, or closed paths with a single
//! concave fillet arc across each corner when a dogbone diameter is given.

use std::f64::consts::SQRT_2;

use serde::Serialize;

use crate::error::{CutError, Result};
use crate::geometry::{ArcSweep, Path, Point2D};
use crate::svg::{Element, SvgDocument, Unit};
use crate::validate;

/// Board and hole parameters, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PegboardSpec {
    pub board_width: f64,
    pub board_height: f64,
    pub hole_width: f64,
    pub hole_height: f64,
    /// Horizontal pitch between hole left edges.
    pub spacing_x: f64,
    /// Vertical pitch between hole top edges.
    pub spacing_y: f64,
    /// Corner relief diameter; zero for square corners.
    pub dogbone_diameter: f64,
}

impl PegboardSpec {
    /// Check that the board and holes are well defined.
    ///
    /// Board-too-small is reported by [`layout_holes`] itself.
    pub fn validate(&self) -> Result<()> {
        validate::positive("board_width", self.board_width)?;
        validate::positive("board_height", self.board_height)?;
        validate::positive("hole_width", self.hole_width)?;
        validate::positive("hole_height", self.hole_height)?;
        validate::positive("spacing_x", self.spacing_x)?;
        validate::positive("spacing_y", self.spacing_y)?;
        validate::non_negative("dogbone_diameter", self.dogbone_diameter)?;

        let reach = 2.0 * fillet_offset(self.dogbone_diameter / 2.0);
        let shortest = self.hole_width.min(self.hole_height);
        if reach > shortest {
            return Err(CutError::InvalidParameter {
                message: format!(
                    "dogbone_diameter {} is too large for a {}x{} hole",
                    self.dogbone_diameter, self.hole_width, self.hole_height
                ),
                help: Some(format!(
                    "Fillets need {} along each edge; use a diameter of at most {}",
                    reach,
                    shortest * SQRT_2
                )),
            });
        }
        Ok(())
    }
}

/// A centered hole grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PegboardLayout {
    pub columns: usize,
    pub rows: usize,
    pub pattern_width: f64,
    pub pattern_height: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub hole_width: f64,
    pub hole_height: f64,
    pub spacing_x: f64,
    pub spacing_y: f64,
}

impl PegboardLayout {
    /// Total number of holes.
    pub fn hole_count(&self) -> usize {
        // Bounded by `layout_holes`.
        self.columns * self.rows
    }

    /// Top-left corner of the hole at `(row, col)`.
    pub fn hole_origin(&self, row: usize, col: usize) -> Point2D {
        Point2D::new(
            self.offset_x + col as f64 * self.spacing_x,
            self.offset_y + row as f64 * self.spacing_y,
        )
    }

    /// Top-left corners of every hole, row by row.
    pub fn holes(&self) -> impl Iterator<Item = Point2D> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.columns).map(move |col| self.hole_origin(row, col)))
    }
}

/// Count holes along one axis: `floor((board - hole) / pitch) + 1`.
fn fit_count(axis: &str, board: f64, hole: f64, pitch: f64) -> Result<usize> {
    let count = ((board - hole) / pitch).floor() + 1.0;
    if !count.is_finite() || count >= usize::MAX as f64 {
        return Err(CutError::InvalidParameter {
            message: format!(
                "board {} ({}) fits too many holes at pitch {}",
                axis, board, pitch
            ),
            help: Some("Use a larger spacing".to_string()),
        });
    }
    if count < 1.0 {
        return Err(CutError::InvalidParameter {
            message: format!(
                "board {} ({}) is smaller than one hole ({})",
                axis, board, hole
            ),
            help: Some("Use a larger board or a smaller hole".to_string()),
        });
    }
    Ok(count as usize)
}

/// Compute the centered grid for a board.
pub fn layout_holes(spec: &PegboardSpec) -> Result<PegboardLayout> {
    spec.validate()?;

    let columns = fit_count("width", spec.board_width, spec.hole_width, spec.spacing_x)?;
    let rows = fit_count("height", spec.board_height, spec.hole_height, spec.spacing_y)?;
    if columns.checked_mul(rows).is_none() {
        return Err(CutError::InvalidParameter {
            message: format!("{} columns by {} rows is too many holes", columns, rows),
            help: Some("Use a larger spacing".to_string()),
        });
    }

    let pattern_width = (columns - 1) as f64 * spec.spacing_x + spec.hole_width;
    let pattern_height = (rows - 1) as f64 * spec.spacing_y + spec.hole_height;

    Ok(PegboardLayout {
        columns,
        rows,
        pattern_width,
        pattern_height,
        offset_x: (spec.board_width - pattern_width) / 2.0,
        offset_y: (spec.board_height - pattern_height) / 2.0,
        hole_width: spec.hole_width,
        hole_height: spec.hole_height,
        spacing_x: spec.spacing_x,
        spacing_y: spec.spacing_y,
    })
}

/// Outline of a single hole.
#[derive(Debug, Clone, PartialEq)]
pub enum HoleShape {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    /// Rectangle with a concave arc across each corner.
    Filleted(Path),
}

impl From<HoleShape> for Element {
    fn from(shape: HoleShape) -> Self {
        match shape {
            HoleShape::Rect {
                x,
                y,
                width,
                height,
            } => Element::Rect {
                x,
                y,
                width,
                height,
            },
            HoleShape::Filleted(path) => Element::Path(path),
        }
    }
}

/// Distance from a corner to each fillet endpoint along both edges.
pub fn fillet_offset(radius: f64) -> f64 {
    radius / SQRT_2
}

/// Outline one hole with its top-left corner at `(x, y)`.
///
/// With a non-zero `dogbone_diameter` each corner is replaced by one arc of
/// radius `dogbone_diameter / 2` whose endpoints sit `radius / √2` from the
/// corner. Traversal starts on the left edge just below the top-left fillet
/// and runs down, across the bottom, up the right side and back across the
/// top.
pub fn render_hole(x: f64, y: f64, width: f64, height: f64, dogbone_diameter: f64) -> HoleShape {
    if dogbone_diameter == 0.0 {
        return HoleShape::Rect {
            x,
            y,
            width,
            height,
        };
    }

    let radius = dogbone_diameter / 2.0;
    let o = fillet_offset(radius);
    let (right, bottom) = (x + width, y + height);
    let sweep = ArcSweep::CounterClockwise;

    let mut path = Path::new();
    path.move_to(Point2D::new(x, y + o))
        .line_to(Point2D::new(x, bottom - o))
        .arc_to(radius, sweep, Point2D::new(x + o, bottom))
        .line_to(Point2D::new(right - o, bottom))
        .arc_to(radius, sweep, Point2D::new(right, bottom - o))
        .line_to(Point2D::new(right, y + o))
        .arc_to(radius, sweep, Point2D::new(right - o, y))
        .line_to(Point2D::new(x + o, y))
        .arc_to(radius, sweep, Point2D::new(x, y + o))
        .close();

    HoleShape::Filleted(path)
}

/// A complete pegboard drawing on a millimetre canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PegboardDrawing {
    pub spec: PegboardSpec,
    pub stroke_width: f64,
}

/// Assemble the board outline and every hole.
pub fn pegboard_document(drawing: &PegboardDrawing) -> Result<(SvgDocument, PegboardLayout)> {
    validate::positive("stroke_width", drawing.stroke_width)?;

    let spec = &drawing.spec;
    let layout = layout_holes(spec)?;

    let mut document = SvgDocument::new(
        spec.board_width,
        spec.board_height,
        Unit::Millimeters,
        drawing.stroke_width,
    );
    document.push(Element::Rect {
        x: 0.0,
        y: 0.0,
        width: spec.board_width,
        height: spec.board_height,
    });

    for origin in layout.holes() {
        let hole = render_hole(
            origin.x,
            origin.y,
            spec.hole_width,
            spec.hole_height,
            spec.dogbone_diameter,
        );
        document.push(hole.into());
    }

    Ok((document, layout))
}
