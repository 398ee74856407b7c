//! SVG document model and markup formatting.

use std::fmt;

use crate::geometry::{Path, Point2D};

/// Background fill for drawings that carry one.
const BACKGROUND_FILL: &str = "#f0f0f0";

/// Stroke colour for every cut line.
const STROKE: &str = "#000000";

/// Physical unit of the document's width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Inches,
    Millimeters,
}

impl Unit {
    /// The SVG length suffix.
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Inches => "in",
            Unit::Millimeters => "mm",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// A drawable element. All shapes are unfilled and stroked.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// Full-canvas light gray background.
    Background,
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Path(Path),
    Circle { center: Point2D, radius: f64 },
}

/// An SVG document sized in physical units.
///
/// The `viewBox` uses the same numbers without a unit, so one user unit is
/// one inch or one millimetre.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    pub width: f64,
    pub height: f64,
    pub unit: Unit,
    pub stroke_width: f64,
    elements: Vec<Element>,
}

impl SvgDocument {
    /// Create an empty document.
    pub fn new(width: f64, height: f64, unit: Unit, stroke_width: f64) -> Self {
        Self {
            width,
            height,
            unit,
            stroke_width,
            elements: Vec::new(),
        }
    }

    /// Append an element; elements render in insertion order.
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Render the full document as UTF-8 markup.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        out.push_str(&format!(
            "<svg width=\"{w}{unit}\" height=\"{h}{unit}\" viewBox=\"0 0 {w} {h}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
            w = self.width,
            h = self.height,
            unit = self.unit,
        ));

        for element in &self.elements {
            out.push_str("    ");
            out.push_str(&self.render_element(element));
            out.push('\n');
        }

        out.push_str("</svg>\n");
        out
    }

    fn render_element(&self, element: &Element) -> String {
        let stroke = format!(
            "fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"",
            STROKE, self.stroke_width
        );
        match element {
            Element::Background => format!(
                "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
                BACKGROUND_FILL
            ),
            Element::Rect {
                x,
                y,
                width,
                height,
            } => format!(
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {}/>",
                x, y, width, height, stroke
            ),
            Element::Path(path) => format!("<path d=\"{}\" {}/>", path.to_svg(), stroke),
            Element::Circle { center, radius } => format!(
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" {}/>",
                center.x, center.y, radius, stroke
            ),
        }
    }
}
