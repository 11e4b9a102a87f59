use std::mem;

use crate::archive::NonDominatedArchive;
use crate::core::{any_weakly_dominates, Dominance};

/// An archive of mutually non-dominated points with any number of coordinates. Members are
/// stored in a vector sorted by their first coordinate and dominance is checked with a linear
/// scan, therefore [`NonDominatedArchive::remove_dominated`] costs `O(d * n)`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Archive {
    /// The members sorted by their first coordinate.
    points: Vec<Vec<f64>>,
}

impl Archive {
    /// Create an empty archive.
    ///
    /// returns: `Archive`
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an archive from points that are already mutually non-dominated. The points are
    /// sorted by their first coordinate, but their dominance is not checked.
    ///
    /// # Arguments
    ///
    /// * `points`: The points. Each point must have at least one coordinate.
    ///
    /// returns: `Archive`
    pub fn from_antichain(mut points: Vec<Vec<f64>>) -> Self {
        points.sort_by(|a, b| a[0].total_cmp(&b[0]));
        Self { points }
    }

    /// The members sorted by their first coordinate.
    ///
    /// returns: `&[Vec<f64>]`
    pub fn points(&self) -> &[Vec<f64>] {
        &self.points
    }

    /// Consume the archive and return its members sorted by their first coordinate.
    ///
    /// returns: `Vec<Vec<f64>>`
    pub fn into_points(self) -> Vec<Vec<f64>> {
        self.points
    }
}

impl NonDominatedArchive for Archive {
    type Point = Vec<f64>;

    fn remove_dominated(&mut self, new_point: &[f64], dominance: Dominance) -> Vec<Vec<f64>> {
        let (removed, kept): (Vec<_>, Vec<_>) = mem::take(&mut self.points)
            .into_iter()
            .partition(|p| dominance.dominates(new_point, p));
        self.points = kept;
        removed
    }

    fn is_dominated(&self, point: &[f64]) -> bool {
        any_weakly_dominates(&self.points, point)
    }

    fn insert(&mut self, new_point: &[f64]) {
        let idx = self.points.partition_point(|p| p[0] < new_point[0]);
        self.points.insert(idx, new_point.to_vec());
    }

    fn len(&self) -> usize {
        self.points.len()
    }

    fn to_points(&self) -> Vec<Vec<f64>> {
        self.points.clone()
    }
}
