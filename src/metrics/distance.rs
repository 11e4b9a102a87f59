use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::utils::{check_dimensions, check_point, check_points};
use crate::core::{any_weakly_dominates, KError};
use crate::kink_points::get_kink_points;
use crate::utils::vector_min;

/// Calculate the distance from `query` to a Pareto front, where all objectives are maximised.
///
/// The distance is:
///  - `0` when the front is empty;
///  - `0` when any front point weakly dominates `query`;
///  - otherwise the distance to the closest kink point `k` of the front
///
///     $ d(k, q) = \sqrt{ \sum_{i=1}^{M} \[max(k_i - q_i, 0) \]^2 } $
///
/// with `M` the number of objectives. The kink points are calculated on each call; use
/// [`KinkPoints`] to query the same front more than once.
///
/// # Arguments
///
/// * `front`: The mutually non-dominated points of the front.
/// * `query`: The point whose distance is calculated. Its size sets the number of objectives.
///
/// returns: `Result<f64, KError>`
///
/// # Example
/// ```
///  use pareto_kink::metrics::distance_to_pareto_front;
///
///  let front = vec![vec![1.0, 2.0, 3.0], vec![2.0, 3.0, 1.0], vec![3.0, 1.0, 2.0]];
///  let distance = distance_to_pareto_front(&front, &[1.5, 1.5, 1.5]).unwrap();
///  assert_eq!(distance, 0.0);
/// ```
pub fn distance_to_pareto_front(front: &[Vec<f64>], query: &[f64]) -> Result<f64, KError> {
    if front.is_empty() {
        return Ok(0.0);
    }
    let dimensions = query.len();
    check_dimensions(dimensions)?;
    check_point(query, dimensions, "query", 0)?;
    check_points(front, dimensions, "front point")?;

    if any_weakly_dominates(front, query) {
        return Ok(0.0);
    }
    let kink_points = get_kink_points(front, dimensions)?;
    distance_to_kink_points(&kink_points, query)
}

/// Calculate the distance from `query` to the closest kink point with
///
///  $ d(k, q) = \sqrt{ \sum_{i=1}^{M} \[max(k_i - q_i, 0) \]^2 } $
///
/// Contrarily to [`distance_to_pareto_front`], dominated queries are not mapped to `0`: the
/// result is how much the query has to be improved to leave the region dominated by the front.
///
/// # Arguments
///
/// * `kink_points`: The kink points, as returned by [`get_kink_points`]. This must not be empty.
/// * `query`: The point whose distance is calculated.
///
/// returns: `Result<f64, KError>`
pub fn distance_to_kink_points(kink_points: &[Vec<f64>], query: &[f64]) -> Result<f64, KError> {
    check_point(query, query.len(), "query", 0)?;
    check_points(kink_points, query.len(), "kink point")?;

    let sq_distances: Vec<f64> = kink_points
        .iter()
        .map(|k| squared_distance_plus(k, query))
        .collect();
    Ok(vector_min(&sq_distances)?.sqrt())
}

/// The squared distance, where only the coordinates of `k` larger than the query's contribute.
///
/// # Arguments
///
/// * `k`: The kink point.
/// * `query`: The query point.
///
/// returns: `f64`
fn squared_distance_plus(k: &[f64], query: &[f64]) -> f64 {
    k.iter()
        .zip(query)
        .map(|(k_i, q_i)| (k_i - q_i).max(0.0).powi(2))
        .sum()
}

/// The kink points of a Pareto front, kept together with the front to answer many distance
/// queries without calculating them again.
///
/// # Example
/// ```
///  use pareto_kink::metrics::KinkPoints;
///
///  let front = vec![vec![1.0, 9.0], vec![2.0, 8.0], vec![3.0, 5.0]];
///  let kink_points = KinkPoints::new(&front, 2).unwrap();
///  assert_eq!(kink_points.len(), 4);
///  assert_eq!(kink_points.distance(&[1.0, 5.0]).unwrap(), 1.0);
///  // dominated by (2, 8)
///  assert_eq!(kink_points.distance_to_front(&[1.0, 5.0]).unwrap(), 0.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KinkPoints {
    /// The mutually non-dominated points of the front.
    front: Vec<Vec<f64>>,
    /// The kink points of the front.
    kink_points: Vec<Vec<f64>>,
    /// The number of objectives.
    dimensions: usize,
}

impl KinkPoints {
    /// Calculate the kink points of a front.
    ///
    /// # Arguments
    ///
    /// * `front`: The mutually non-dominated points of the front.
    /// * `dimensions`: The number of objectives.
    ///
    /// returns: `Result<KinkPoints, KError>`
    pub fn new(front: &[Vec<f64>], dimensions: usize) -> Result<Self, KError> {
        let kink_points = get_kink_points(front, dimensions)?;
        Ok(Self {
            front: front.to_vec(),
            kink_points,
            dimensions,
        })
    }

    /// The kink points.
    ///
    /// returns: `&[Vec<f64>]`
    pub fn points(&self) -> &[Vec<f64>] {
        &self.kink_points
    }

    /// The front the kink points were calculated from.
    ///
    /// returns: `&[Vec<f64>]`
    pub fn front(&self) -> &[Vec<f64>] {
        &self.front
    }

    /// The number of objectives.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// The number of kink points.
    pub fn len(&self) -> usize {
        self.kink_points.len()
    }

    /// Whether there are no kink points. This is never the case for a value built with
    /// [`KinkPoints::new`].
    pub fn is_empty(&self) -> bool {
        self.kink_points.is_empty()
    }

    /// Calculate the distance from `query` to the closest kink point. See
    /// [`distance_to_kink_points`].
    ///
    /// # Arguments
    ///
    /// * `query`: The point with [`KinkPoints::dimensions`] coordinates.
    ///
    /// returns: `Result<f64, KError>`
    pub fn distance(&self, query: &[f64]) -> Result<f64, KError> {
        check_point(query, self.dimensions, "query", 0)?;
        distance_to_kink_points(&self.kink_points, query)
    }

    /// Calculate the distance from `query` to the front. See [`distance_to_pareto_front`].
    ///
    /// # Arguments
    ///
    /// * `query`: The point with [`KinkPoints::dimensions`] coordinates.
    ///
    /// returns: `Result<f64, KError>`
    pub fn distance_to_front(&self, query: &[f64]) -> Result<f64, KError> {
        check_point(query, self.dimensions, "query", 0)?;
        if self.front.is_empty() || any_weakly_dominates(&self.front, query) {
            return Ok(0.0);
        }
        distance_to_kink_points(&self.kink_points, query)
    }

    /// Calculate the distance from each query to the front in parallel. See
    /// [`KinkPoints::distance_to_front`].
    ///
    /// # Arguments
    ///
    /// * `queries`: The points.
    ///
    /// returns: `Result<Vec<f64>, KError>`. The distances in the same order as `queries`.
    pub fn distances(&self, queries: &[Vec<f64>]) -> Result<Vec<f64>, KError> {
        debug!(
            "Calculating the distance of {} queries from {} kink points",
            queries.len(),
            self.len()
        );
        queries
            .par_iter()
            .map(|query| self.distance_to_front(query))
            .collect()
    }
}
