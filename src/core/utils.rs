use log::warn;

use crate::core::{weakly_dominates, KError, MAX_DIMENSIONS};

/// Check that the number of dimensions can be handled by the kink-point engine.
///
/// # Arguments
///
/// * `dimensions`: The number of dimensions.
///
/// returns: `Result<(), KError>`
pub fn check_dimensions(dimensions: usize) -> Result<(), KError> {
    if dimensions < 2 {
        return Err(KError::NotEnoughDimensions(dimensions));
    }
    if dimensions > MAX_DIMENSIONS {
        return Err(KError::TooManyDimensions(dimensions, MAX_DIMENSIONS));
    }
    Ok(())
}

/// Check that all points have `dimensions` coordinates and that none of them is NaN or infinite.
/// A warning is logged if a point has negative coordinates, because all dimensions are floored
/// at [`crate::core::FLOOR`].
///
/// # Arguments
///
/// * `points`: The points to check.
/// * `dimensions`: The expected number of coordinates.
/// * `name`: The name of the points used in the error message (for example "front point").
///
/// returns: `Result<(), KError>`
pub fn check_points(points: &[Vec<f64>], dimensions: usize, name: &str) -> Result<(), KError> {
    let mut has_negative = false;
    for (idx, point) in points.iter().enumerate() {
        check_point(point, dimensions, name, idx)?;
        has_negative |= point.iter().any(|v| *v < 0.0);
    }
    if has_negative {
        warn!("Some {name}s have negative coordinates, but the dominated region is floored at 0");
    }
    Ok(())
}

/// Check the size of one point and its coordinates.
///
/// # Arguments
///
/// * `point`: The point to check.
/// * `dimensions`: The expected number of coordinates.
/// * `name`: The name of the point used in the error message.
/// * `index`: The point position used in the error message.
///
/// returns: `Result<(), KError>`
pub fn check_point(
    point: &[f64],
    dimensions: usize,
    name: &str,
    index: usize,
) -> Result<(), KError> {
    if point.len() != dimensions {
        return Err(KError::DimensionMismatch(
            name.to_string(),
            index,
            point.len(),
            dimensions,
        ));
    }
    if point.iter().any(|v| !v.is_finite()) {
        return Err(KError::NonFinite(name.to_string(), index));
    }
    Ok(())
}

/// Check that no point weakly dominates another one. Duplicated points dominate each other. This
/// has complexity $O(d * N^2)$ and is only called in checked builds (see
/// [`crate::core::EXPENSIVE_CHECKS`]).
///
/// # Arguments
///
/// * `points`: The points to check.
///
/// returns: `Result<(), KError>`
pub fn check_antichain(points: &[Vec<f64>]) -> Result<(), KError> {
    for (pi, p) in points.iter().enumerate() {
        for (qi, q) in points.iter().enumerate().skip(pi + 1) {
            if weakly_dominates(p, q) {
                return Err(KError::NotAntichain(pi, qi));
            }
            if weakly_dominates(q, p) {
                return Err(KError::NotAntichain(qi, pi));
            }
        }
    }
    Ok(())
}
