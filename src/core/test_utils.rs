use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::{strictly_dominates, weakly_dominates};
use crate::utils::non_dominated_points;

/// Get the random number generator used in the tests.
///
/// # Arguments
///
/// * `seed`: The seed number.
///
/// returns: `ChaCha8Rng`
pub(crate) fn get_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Sample `number_of_points` random points in $(0, 1]^d$ and keep the non-dominated ones.
///
/// # Arguments
///
/// * `rng`: The random number generator.
/// * `number_of_points`: The number of points to sample. The returned front may be smaller.
/// * `dimensions`: The number of coordinates of each point.
///
/// returns: `Vec<Vec<f64>>`
pub(crate) fn random_front(
    rng: &mut ChaCha8Rng,
    number_of_points: usize,
    dimensions: usize,
) -> Vec<Vec<f64>> {
    let points: Vec<Vec<f64>> = (0..number_of_points)
        .map(|_| (0..dimensions).map(|_| rng.gen_range(0.01..1.0)).collect())
        .collect();
    non_dominated_points(&points).unwrap()
}

/// Sample a point in the unit cube until it is weakly dominated by at least one point of `front`.
///
/// # Arguments
///
/// * `rng`: The random number generator.
/// * `front`: The front.
///
/// returns: `Vec<f64>`
pub(crate) fn random_dominated_point(rng: &mut ChaCha8Rng, front: &[Vec<f64>]) -> Vec<f64> {
    let p = &front[rng.gen_range(0..front.len())];
    p.iter().map(|v| v * rng.gen_range(0.0..1.0)).collect()
}

/// Sample `number_of_points` random points whose coordinates are integers in `1..=levels` and
/// keep the non-dominated ones. With few levels many points share coordinates.
///
/// # Arguments
///
/// * `rng`: The random number generator.
/// * `number_of_points`: The number of points to sample.
/// * `dimensions`: The number of coordinates of each point.
/// * `levels`: The largest coordinate.
///
/// returns: `Vec<Vec<f64>>`
pub(crate) fn random_grid_front(
    rng: &mut ChaCha8Rng,
    number_of_points: usize,
    dimensions: usize,
    levels: u32,
) -> Vec<Vec<f64>> {
    let points: Vec<Vec<f64>> = (0..number_of_points)
        .map(|_| {
            (0..dimensions)
                .map(|_| rng.gen_range(1..=levels) as f64)
                .collect()
        })
        .collect();
    non_dominated_points(&points).unwrap()
}

/// All grid corners whose coordinates are either 0 or the coordinate of a front point, and that
/// no front point strictly dominates.
///
/// # Arguments
///
/// * `front`: The front.
/// * `dimensions`: The number of coordinates.
///
/// returns: `Vec<Vec<f64>>`
fn free_grid_corners(front: &[Vec<f64>], dimensions: usize) -> Vec<Vec<f64>> {
    let axes: Vec<Vec<f64>> = (0..dimensions)
        .map(|i| {
            let mut axis = vec![0.0];
            axis.extend(front.iter().map(|p| p[i]));
            axis.sort_by(|a, b| a.total_cmp(b));
            axis.dedup();
            axis
        })
        .collect();

    let mut corners = Vec::new();
    let mut indexes = vec![0; dimensions];
    loop {
        let corner: Vec<f64> = indexes
            .iter()
            .enumerate()
            .map(|(i, idx)| axes[i][*idx])
            .collect();
        if !front.iter().any(|p| strictly_dominates(p, &corner)) {
            corners.push(corner);
        }

        // next combination
        let mut i = 0;
        while i < dimensions {
            indexes[i] += 1;
            if indexes[i] < axes[i].len() {
                break;
            }
            indexes[i] = 0;
            i += 1;
        }
        if i == dimensions {
            return corners;
        }
    }
}

/// Calculate the distance from `query` to the region not dominated by `front` by checking all
/// the free grid corners.
///
/// # Arguments
///
/// * `front`: The front.
/// * `query`: The query point.
///
/// returns: `f64`
pub(crate) fn brute_force_distance(front: &[Vec<f64>], query: &[f64]) -> f64 {
    free_grid_corners(front, query.len())
        .iter()
        .map(|corner| {
            corner
                .iter()
                .zip(query)
                .map(|(c, q)| (c - q).max(0.0).powi(2))
                .sum::<f64>()
        })
        .fold(f64::INFINITY, f64::min)
        .sqrt()
}

/// Find the kink points of `front` by keeping the free grid corners that are minimal, sorted
/// with [`sorted_points`].
///
/// # Arguments
///
/// * `front`: The front.
/// * `dimensions`: The number of coordinates.
///
/// returns: `Vec<Vec<f64>>`
pub(crate) fn brute_force_kink_points(front: &[Vec<f64>], dimensions: usize) -> Vec<Vec<f64>> {
    let kink_points: Vec<Vec<f64>> = free_grid_corners(front, dimensions)
        .into_iter()
        .filter(|corner| is_minimal_corner(front, corner))
        .collect();
    sorted_points(&kink_points)
}

/// Whether decreasing any positive coordinate of `corner` makes it strictly dominated.
fn is_minimal_corner(front: &[Vec<f64>], corner: &[f64]) -> bool {
    (0..corner.len()).filter(|i| corner[*i] > 0.0).all(|i| {
        let mut lowered = corner.to_vec();
        lowered[i] -= 1e-9;
        front.iter().any(|p| strictly_dominates(p, &lowered))
    })
}

/// Sort points lexicographically so that two sets of points can be compared.
///
/// # Arguments
///
/// * `points`: The points.
///
/// returns: `Vec<Vec<f64>>`
pub(crate) fn sorted_points(points: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let mut points = points.to_vec();
    points.sort_by(|a, b| {
        a.iter()
            .zip(b)
            .map(|(x, y)| x.total_cmp(y))
            .find(|o| o.is_ne())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    points
}

/// Check that each kink point is a minimal corner of the region not dominated by `front`: no
/// front point strictly dominates it, and decreasing any of its positive coordinates makes it
/// strictly dominated.
///
/// # Arguments
///
/// * `front`: The front.
/// * `kink_points`: The kink points.
///
/// returns: `()`
pub(crate) fn assert_minimal_corners(front: &[Vec<f64>], kink_points: &[Vec<f64>]) {
    for k in kink_points {
        assert!(
            !front.iter().any(|p| strictly_dominates(p, k)),
            "kink point {k:?} is inside the dominated region"
        );
        assert!(
            is_minimal_corner(front, k),
            "kink point {k:?} is not minimal"
        );
    }
}

/// Check that no point in `points` weakly dominates another one.
pub(crate) fn assert_antichain(points: &[Vec<f64>]) {
    for (pi, p) in points.iter().enumerate() {
        for (qi, q) in points.iter().enumerate() {
            if pi != qi {
                assert!(!weakly_dominates(p, q), "{p:?} dominates {q:?}");
            }
        }
    }
}
