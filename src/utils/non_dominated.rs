use log::debug;

use crate::core::utils::check_points;
use crate::core::{weakly_dominates, KError};

/// Extract the non-dominated points from a set of points (with complexity $O(d * N^2)$, where
/// `d` is the number of dimensions and `N` the number of points). All objectives are maximised.
///
/// A point is removed when another point weakly dominates it. Duplicated points weakly
/// dominate each other, so only their first occurrence is kept. The returned points keep their
/// original order and form an antichain that can be passed to
/// [`crate::kink_points::get_kink_points`].
///
/// # Arguments
///
/// * `points`: The points. All points must have the same number of coordinates.
///
/// returns: `Result<Vec<Vec<f64>>, KError>`
pub fn non_dominated_points(points: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, KError> {
    let Some(first) = points.first() else {
        return Ok(Vec::new());
    };
    check_points(points, first.len(), "point")?;

    let mut front: Vec<Vec<f64>> = Vec::new();
    for (pi, p) in points.iter().enumerate() {
        let is_dominated = points.iter().enumerate().any(|(qi, q)| {
            // an earlier duplicate takes precedence
            qi != pi && weakly_dominates(q, p) && (qi < pi || q != p)
        });
        if !is_dominated {
            front.push(p.clone());
        }
    }

    if front.len() != points.len() {
        debug!(
            "{} points were removed because they are dominated by other points",
            points.len() - front.len()
        );
    }
    Ok(front)
}
