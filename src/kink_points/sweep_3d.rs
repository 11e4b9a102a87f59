use std::collections::hash_map::Entry;
use std::collections::HashMap;

use ordered_float::OrderedFloat;

use crate::archive::{NonDominatedArchive, Staircase};
use crate::core::{Dominance, FLOOR};
use crate::kink_points::engine::graduate;

/// The kink points of a three-dimensional front.
///
/// The projections on the first two coordinates are kept in a [`Staircase`]. When a projection
/// is added, the two-dimensional kink points it creates are the corners with its left and right
/// neighbours, or with the floor when a neighbour is missing. The candidates the projection
/// strictly dominates are removed before adding it, so each point costs `O(log n)` plus the
/// number of removed candidates.
///
/// # Arguments
///
/// * `points`: The non-dominated points sorted by their third coordinate in descending order.
///
/// returns: `Vec<Vec<f64>>`
pub(crate) fn kink_points_3d(points: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let origin = [FLOOR, FLOOR];
    let mut points_state = Staircase::new();
    let mut candidates = Staircase::new();
    candidates.insert(&origin);
    let mut activation: HashMap<[OrderedFloat<f64>; 2], f64> = HashMap::new();
    activation.insert(activation_key(&origin), f64::INFINITY);
    let mut kink_points: Vec<Vec<f64>> = Vec::new();

    for point in points {
        let (projection, level) = ([point[0], point[1]], point[2]);

        for candidate in candidates.remove_dominated(&projection, Dominance::Strict) {
            let activated_at = activation
                .get(&activation_key(&candidate))
                .copied()
                .unwrap_or(f64::INFINITY);
            if let Some(kink_point) = graduate(point, &candidate, activated_at) {
                kink_points.push(kink_point);
            }
        }

        if !points_state.add(&projection) {
            continue;
        }
        let (left, right) = points_state.neighbours(projection[0]);
        let new_candidates = [
            [left.map_or(FLOOR, |l| l[0]), projection[1]],
            [projection[0], right.map_or(FLOOR, |r| r[1])],
        ];
        for candidate in new_candidates {
            // a corner surviving a tie keeps its first activation level
            if let Entry::Vacant(entry) = activation.entry(activation_key(&candidate)) {
                entry.insert(level);
                candidates.add(&candidate);
            }
        }
    }

    kink_points.extend(candidates.iter().map(|[x, y]| vec![x, y, FLOOR]));
    kink_points
}

fn activation_key(point: &[f64; 2]) -> [OrderedFloat<f64>; 2] {
    [OrderedFloat(point[0]), OrderedFloat(point[1])]
}

#[cfg(test)]
mod test {
    use crate::core::test_utils::{get_rng, random_front, sorted_points};
    use crate::kink_points::engine::kink_points_nd;
    use crate::kink_points::sweep_3d::kink_points_3d;
    use crate::utils::sort_by_last_coordinate;

    #[test]
    /// The corners above, between and below two points.
    fn test_two_points() {
        let points = sort_by_last_coordinate(&[vec![3.0, 1.0, 2.0], vec![1.0, 2.0, 3.0]]);
        let kink_points = kink_points_3d(&points);
        assert_eq!(
            sorted_points(&kink_points),
            vec![
                vec![0.0, 0.0, 3.0],
                vec![0.0, 2.0, 0.0],
                vec![1.0, 0.0, 2.0],
                vec![1.0, 1.0, 0.0],
                vec![3.0, 0.0, 0.0],
            ]
        );
    }

    #[test]
    /// A projection dominating older projections replaces their corners.
    fn test_dominating_projection() {
        let points = vec![vec![1.0, 1.0, 3.0], vec![2.0, 2.0, 1.0]];
        let kink_points = kink_points_3d(&points);
        assert_eq!(
            sorted_points(&kink_points),
            vec![
                vec![0.0, 0.0, 3.0],
                vec![0.0, 1.0, 1.0],
                vec![0.0, 2.0, 0.0],
                vec![1.0, 0.0, 1.0],
                vec![2.0, 0.0, 0.0],
            ]
        );
    }

    #[test]
    /// The neighbour lookup gives the same result as recomputing the two-dimensional kink points
    /// after each point.
    fn test_same_as_generic_sweep() {
        let mut rng = get_rng(3);
        for _ in 0..10 {
            let front = sort_by_last_coordinate(&random_front(&mut rng, 30, 3));
            assert_eq!(
                sorted_points(&kink_points_3d(&front)),
                sorted_points(&kink_points_nd(&front, 3))
            );
        }
    }
}
