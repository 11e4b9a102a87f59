use std::collections::HashMap;

use log::debug;
use ordered_float::OrderedFloat;

use crate::archive::{Archive, NonDominatedArchive};
use crate::core::utils::{check_antichain, check_dimensions, check_points};
use crate::core::{strictly_dominates_except_last, Dominance, KError, EXPENSIVE_CHECKS, FLOOR};
use crate::kink_points::sweep_3d::kink_points_3d;
use crate::utils::sort_by_last_coordinate;

/// Calculate the kink points of a Pareto front with `dimensions` objectives to maximise. See
/// the [module documentation](crate::kink_points) for their definition.
///
/// The points are sorted by their last coordinate in descending order and swept one by one,
/// while keeping an archive with the projections of the swept points on the first
/// `dimensions - 1` coordinates and an archive with the kink-point candidates of those
/// projections. When a new point strictly dominates a candidate whose activation level is above
/// the point's last coordinate, the candidate becomes a kink point at that level. The
/// candidates of the projections are calculated by recursively calling this algorithm one
/// dimension down. The recursion stops at three dimensions, where the candidates are derived
/// from the two neighbours of each new projection in `O(log n)`. Candidates left at the end of
/// the sweep become kink points on the floor.
///
/// The number of kink points grows super-linearly with the number of points when `dimensions`
/// is larger than 3.
///
/// **IMPLEMENTATION NOTES**:
/// 1) Points with the same last coordinate are processed as one batch. A candidate created by a
///    point in the batch cannot become a kink point at the same level.
/// 2) The mutual non-dominance of `points` is only verified in checked builds (debug builds or
///    with the `expensive-checks` feature).
/// 3) An empty front has one kink point at the origin.
///
/// # Arguments
///
/// * `points`: The mutually non-dominated points.
/// * `dimensions`: The number of coordinates of each point. This must be at least 2 and at most
///    [`crate::core::MAX_DIMENSIONS`].
///
/// returns: `Result<Vec<Vec<f64>>, KError>`
///
/// # Example
/// ```
///  use pareto_kink::kink_points::get_kink_points;
///
///  let front = vec![vec![1.0, 9.0], vec![2.0, 8.0], vec![3.0, 5.0]];
///  let kink_points = get_kink_points(&front, 2).unwrap();
///  assert_eq!(
///     kink_points,
///     vec![vec![0.0, 9.0], vec![1.0, 8.0], vec![2.0, 5.0], vec![3.0, 0.0]]
///  );
/// ```
pub fn get_kink_points(points: &[Vec<f64>], dimensions: usize) -> Result<Vec<Vec<f64>>, KError> {
    check_dimensions(dimensions)?;
    check_points(points, dimensions, "point")?;
    if EXPENSIVE_CHECKS {
        check_antichain(points)?;
    }

    if points.is_empty() {
        return Ok(vec![vec![FLOOR; dimensions]]);
    }

    debug!(
        "Calculating the kink points of {} points in {} dimensions",
        points.len(),
        dimensions
    );
    let points = sort_by_last_coordinate(points);
    let kink_points = kink_points_rec(&points, dimensions);
    debug!("Found {} kink points", kink_points.len());

    Ok(kink_points)
}

/// Calculate the kink points of points already sorted by their last coordinate in descending
/// order, dispatching to the algorithm for the number of dimensions.
///
/// # Arguments
///
/// * `points`: The sorted non-dominated points.
/// * `dimensions`: The number of coordinates.
///
/// returns: `Vec<Vec<f64>>`
pub(crate) fn kink_points_rec(points: &[Vec<f64>], dimensions: usize) -> Vec<Vec<f64>> {
    debug_assert!(dimensions >= 2);
    debug_assert!(
        points
            .windows(2)
            .all(|w| w[0][dimensions - 1] >= w[1][dimensions - 1]),
        "points are not sorted by their last coordinate"
    );
    debug_assert!(points.iter().all(|p| p.len() == dimensions));

    match dimensions {
        2 => kink_points_2d(points),
        3 => kink_points_3d(points),
        _ => kink_points_nd(points, dimensions),
    }
}

/// The kink points of a two-dimensional front. With the points sorted by decreasing second
/// coordinate, the first coordinate increases, and each kink point takes the first coordinate of
/// a point and the second coordinate of the next one. The floor closes the staircase on both
/// ends.
///
/// # Arguments
///
/// * `points`: The non-dominated points sorted by their second coordinate in descending order.
///
/// returns: `Vec<Vec<f64>>`
fn kink_points_2d(points: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let mut kink_points = Vec::with_capacity(points.len() + 1);
    let mut previous_x = FLOOR;
    for point in points {
        kink_points.push(vec![previous_x, point[1]]);
        previous_x = point[0];
    }
    kink_points.push(vec![previous_x, FLOOR]);
    kink_points
}

/// The sweep for four or more dimensions. The candidates at each step are the kink points of the
/// projections swept so far, calculated by [`kink_points_rec`] one dimension down.
///
/// # Arguments
///
/// * `points`: The sorted non-dominated points.
/// * `dimensions`: The number of coordinates.
///
/// returns: `Vec<Vec<f64>>`
pub(crate) fn kink_points_nd(points: &[Vec<f64>], dimensions: usize) -> Vec<Vec<f64>> {
    let reduced = dimensions - 1;
    let origin = vec![FLOOR; reduced];

    let mut points_state = Archive::new();
    let mut activation: HashMap<Vec<OrderedFloat<f64>>, f64> = HashMap::new();
    activation.insert(activation_key(&origin), f64::INFINITY);
    let mut candidates = Archive::from_antichain(vec![origin]);
    let mut kink_points: Vec<Vec<f64>> = Vec::new();

    for point in points {
        let (projection, level) = (&point[..reduced], point[reduced]);

        for candidate in candidates.remove_dominated(projection, Dominance::Strict) {
            let activated_at = activation
                .get(&activation_key(&candidate))
                .copied()
                .unwrap_or(f64::INFINITY);
            if let Some(kink_point) = graduate(point, &candidate, activated_at) {
                kink_points.push(kink_point);
            }
        }

        points_state.add(projection);
        let state = sort_by_last_coordinate(points_state.points());
        let new_candidates = kink_points_rec(&state, reduced);
        for candidate in &new_candidates {
            activation
                .entry(activation_key(candidate))
                .or_insert(level);
        }
        candidates = Archive::from_antichain(new_candidates);
    }

    kink_points.extend(candidates.into_points().into_iter().map(|mut c| {
        c.push(FLOOR);
        c
    }));
    kink_points
}

/// Turn a candidate removed by `point` into a kink point. This happens when `point` strictly
/// dominates the candidate and its last coordinate is below the level at which the candidate
/// was activated. The kink point has the candidate coordinates and the last coordinate of
/// `point`.
///
/// # Arguments
///
/// * `point`: The point being swept.
/// * `candidate`: The removed candidate with one coordinate less than `point`.
/// * `activated_at`: The activation level of the candidate.
///
/// returns: `Option<Vec<f64>>`
pub(crate) fn graduate(point: &[f64], candidate: &[f64], activated_at: f64) -> Option<Vec<f64>> {
    let mut kink_point = Vec::with_capacity(point.len());
    kink_point.extend_from_slice(candidate);
    kink_point.push(activated_at);

    if !strictly_dominates_except_last(point, &kink_point, point.len()) {
        return None;
    }
    let last = point.len() - 1;
    kink_point[last] = point[last];
    Some(kink_point)
}

/// The key of a candidate in the activation map. Coordinates are compared exactly.
///
/// # Arguments
///
/// * `point`: The candidate.
///
/// returns: `Vec<OrderedFloat<f64>>`
fn activation_key(point: &[f64]) -> Vec<OrderedFloat<f64>> {
    point.iter().copied().map(OrderedFloat).collect()
}
