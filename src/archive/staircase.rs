use std::collections::BTreeMap;
use std::ops::Bound;

use ordered_float::OrderedFloat;

use crate::archive::NonDominatedArchive;
use crate::core::Dominance;

/// An archive of mutually non-dominated two-dimensional points.
///
/// In a two-dimensional antichain sorted by the first coordinate, the second coordinate strictly
/// decreases. The points dominated by a new point `(x, y)` are therefore a contiguous range
/// ending at the last member whose first coordinate does not exceed `x`. The range is found by
/// one bounded lookup on the first coordinate followed by a walk on the second one, and each
/// member in it is removed from the tree, so that [`NonDominatedArchive::remove_dominated`]
/// costs `O((k + 1) log n)`, with `k` the number of removed members and independently of where
/// the range is. The neighbours of a member are found in `O(log n)` with
/// [`Staircase::neighbours`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Staircase {
    /// The members as a map from the first to the second coordinate.
    steps: BTreeMap<OrderedFloat<f64>, f64>,
}

impl Staircase {
    /// Create an empty staircase.
    ///
    /// returns: `Staircase`
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate the members sorted by their first coordinate.
    ///
    /// returns: `impl Iterator<Item = [f64; 2]>`
    pub fn iter(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.steps.iter().map(|(x, y)| [x.into_inner(), *y])
    }

    /// Get the members immediately before and after the first coordinate `x`.
    ///
    /// # Arguments
    ///
    /// * `x`: The first coordinate.
    ///
    /// returns: `(Option<[f64; 2]>, Option<[f64; 2]>)`. The member with the largest first
    /// coordinate smaller than `x` and the one with the smallest first coordinate larger than `x`.
    pub fn neighbours(&self, x: f64) -> (Option<[f64; 2]>, Option<[f64; 2]>) {
        let key = OrderedFloat(x);
        let before = self
            .steps
            .range(..key)
            .next_back()
            .map(|(x, y)| [x.into_inner(), *y]);
        let after = self
            .steps
            .range((Bound::Excluded(key), Bound::Unbounded))
            .next()
            .map(|(x, y)| [x.into_inner(), *y]);
        (before, after)
    }

    /// Whether `point` is a member.
    ///
    /// # Arguments
    ///
    /// * `point`: The two-dimensional point.
    ///
    /// returns: `bool`
    pub fn contains(&self, point: &[f64]) -> bool {
        self.steps
            .get(&OrderedFloat(point[0]))
            .is_some_and(|y| *y == point[1])
    }
}

impl NonDominatedArchive for Staircase {
    type Point = [f64; 2];

    fn remove_dominated(&mut self, new_point: &[f64], dominance: Dominance) -> Vec<[f64; 2]> {
        let (x, y) = (OrderedFloat(new_point[0]), new_point[1]);
        let upper = match dominance {
            Dominance::Weak => Bound::Included(x),
            Dominance::Strict => Bound::Excluded(x),
        };

        // walk down from the last member within the bound while the second coordinate is
        // dominated; it only increases along the walk
        let keys: Vec<OrderedFloat<f64>> = self
            .steps
            .range((Bound::Unbounded, upper))
            .rev()
            .take_while(|(_, y_m)| match dominance {
                Dominance::Weak => **y_m <= y,
                Dominance::Strict => **y_m < y,
            })
            .map(|(x_m, _)| *x_m)
            .collect();

        keys.into_iter()
            .rev()
            .filter_map(|x_m| self.steps.remove(&x_m).map(|y_m| [x_m.into_inner(), y_m]))
            .collect()
    }

    fn is_dominated(&self, point: &[f64]) -> bool {
        // among the members with a larger or equal first coordinate, the first one has the
        // largest second coordinate
        self.steps
            .range(OrderedFloat(point[0])..)
            .next()
            .is_some_and(|(_, y)| *y >= point[1])
    }

    fn insert(&mut self, new_point: &[f64]) {
        self.steps.insert(OrderedFloat(new_point[0]), new_point[1]);
    }

    fn len(&self) -> usize {
        self.steps.len()
    }

    fn to_points(&self) -> Vec<Vec<f64>> {
        self.iter().map(|p| p.to_vec()).collect()
    }
}
