//! Ordered archives of mutually non-dominated points.
//!
//! An archive is an antichain under weak dominance sorted by the first coordinate. It only
//! changes through [`NonDominatedArchive::add`], which evicts the members dominated by the new
//! point, and through [`NonDominatedArchive::remove_dominated`]. The kink-point engine keeps two
//! archives per recursion level: the projections of the points swept so far and the kink-point
//! candidates.
pub use archive_nd::Archive;
pub use staircase::Staircase;

use crate::core::Dominance;

mod archive_nd;
mod staircase;

/// A trait to implement an archive of mutually non-dominated points sorted by their first
/// coordinate.
pub trait NonDominatedArchive {
    /// The type of the points returned by the archive.
    type Point;

    /// Remove and return all the members dominated by `new_point`, sorted by their first
    /// coordinate. With [`Dominance::Weak`] members equal to `new_point` are removed as well;
    /// with [`Dominance::Strict`] members tied with `new_point` on any coordinate are kept.
    ///
    /// # Arguments
    ///
    /// * `new_point`: The point.
    /// * `dominance`: The dominance relation to use.
    ///
    /// returns: `Vec<Self::Point>`
    fn remove_dominated(&mut self, new_point: &[f64], dominance: Dominance) -> Vec<Self::Point>;

    /// Add a point to the archive. All the members weakly dominated by `new_point` are evicted
    /// first; the point is then added unless a remaining member weakly dominates it.
    ///
    /// # Arguments
    ///
    /// * `new_point`: The point to add.
    ///
    /// returns: `bool`. Whether the point was added.
    fn add(&mut self, new_point: &[f64]) -> bool {
        self.remove_dominated(new_point, Dominance::Weak);
        if self.is_dominated(new_point) {
            return false;
        }
        self.insert(new_point);
        true
    }

    /// Whether any member weakly dominates `point`.
    ///
    /// # Arguments
    ///
    /// * `point`: The point to check.
    ///
    /// returns: `bool`
    fn is_dominated(&self, point: &[f64]) -> bool;

    /// Insert a point at its sorted position without checking dominance. Use
    /// [`NonDominatedArchive::add`] to preserve the archive invariant.
    ///
    /// # Arguments
    ///
    /// * `new_point`: The point to insert.
    ///
    /// returns: `()`
    fn insert(&mut self, new_point: &[f64]);

    /// The number of members.
    fn len(&self) -> usize;

    /// Whether the archive has no members.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy the members sorted by their first coordinate.
    fn to_points(&self) -> Vec<Vec<f64>>;
}
