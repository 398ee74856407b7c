//! Parameter checks shared by the generators.
//!
//! Every generator validates its inputs before computing any geometry, so
//! out-of-range values surface as `InvalidParameter` instead of a malformed
//! document.

use crate::error::{CutError, Result};
use crate::geometry::Point2D;

/// Require a finite value strictly greater than zero.
pub fn positive(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CutError::InvalidParameter {
            message: format!("{} must be a positive number, got {}", name, value),
            help: None,
        })
    }
}

/// Require a finite value greater than or equal to zero.
pub fn non_negative(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CutError::InvalidParameter {
            message: format!("{} must be zero or positive, got {}", name, value),
            help: None,
        })
    }
}

/// Require a percentage in `0..=100`; zero is rejected when `exclusive_min`
/// is set.
pub fn percentage(name: &str, value: f64, exclusive_min: bool) -> Result<f64> {
    let above_min = if exclusive_min { value > 0.0 } else { value >= 0.0 };
    if value.is_finite() && above_min && value <= 100.0 {
        Ok(value)
    } else {
        let range = if exclusive_min { "(0, 100]" } else { "[0, 100]" };
        Err(CutError::InvalidParameter {
            message: format!("{} must be a percentage in {}, got {}", name, range, value),
            help: None,
        })
    }
}

/// Require `inner < outer`.
pub fn less_than(inner_name: &str, inner: f64, outer_name: &str, outer: f64) -> Result<()> {
    if inner < outer {
        Ok(())
    } else {
        Err(CutError::InvalidParameter {
            message: format!(
                "{} ({}) must be smaller than {} ({})",
                inner_name, inner, outer_name, outer
            ),
            help: None,
        })
    }
}

/// Require a point with finite coordinates.
pub fn finite_point(name: &str, point: Point2D) -> Result<Point2D> {
    if point.is_finite() {
        Ok(point)
    } else {
        Err(CutError::invalid(format!(
            "{} must have finite coordinates, got ({})",
            name, point
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive() {
        assert_eq!(positive("radius", 2.5).unwrap(), 2.5);
        assert!(positive("radius", 0.0).is_err());
        assert!(positive("radius", -1.0).is_err());
        assert!(positive("radius", f64::NAN).is_err());
        assert!(positive("radius", f64::INFINITY).is_err());
    }

    #[test]
    fn test_non_negative() {
        assert!(non_negative("dogbone", 0.0).is_ok());
        assert!(non_negative("dogbone", -0.1).is_err());
    }

    #[test]
    fn test_percentage_bounds() {
        assert!(percentage("inner", 100.0, true).is_ok());
        assert!(percentage("inner", 0.0, true).is_err());
        assert!(percentage("curve", 0.0, false).is_ok());
        assert!(percentage("curve", 100.5, false).is_err());
    }

    #[test]
    fn test_less_than_message() {
        let err = less_than("lobe_tip_radius", 7.0, "lobe_radius", 7.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid parameter: lobe_tip_radius (7) must be smaller than lobe_radius (7)"
        );
    }

    #[test]
    fn test_finite_point() {
        assert!(finite_point("center", Point2D::new(1.0, 2.0)).is_ok());
        assert!(finite_point("center", Point2D::new(f64::NAN, 2.0)).is_err());
    }
}
