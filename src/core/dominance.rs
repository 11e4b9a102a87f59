/// The dominance relation to use when comparing two points. All objectives are maximised.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dominance {
    /// A point `p` dominates `q` when `p[i] >= q[i]` for all coordinates. Two equal points
    /// dominate each other.
    Weak,
    /// A point `p` dominates `q` when `p[i] > q[i]` for all coordinates. A tie on any
    /// coordinate breaks the dominance.
    Strict,
}

impl Dominance {
    /// Check whether `p` dominates `q` using this relation.
    ///
    /// # Arguments
    ///
    /// * `p`: The first point.
    /// * `q`: The second point. This must have the same size of `p`.
    ///
    /// returns: `bool`
    pub fn dominates(&self, p: &[f64], q: &[f64]) -> bool {
        match self {
            Dominance::Weak => weakly_dominates(p, q),
            Dominance::Strict => strictly_dominates(p, q),
        }
    }
}

/// Returns `true` if `p` weakly dominates `q`, i.e. `p[i] >= q[i]` for all `i`.
///
/// # Arguments
///
/// * `p`: The first point.
/// * `q`: The second point. This must have the same size of `p`.
///
/// returns: `bool`
pub fn weakly_dominates(p: &[f64], q: &[f64]) -> bool {
    debug_assert_eq!(p.len(), q.len());
    p.iter().zip(q).all(|(p_i, q_i)| p_i >= q_i)
}

/// Returns `true` if `p` strictly dominates `q`, i.e. `p[i] > q[i]` for all `i`.
///
/// # Arguments
///
/// * `p`: The first point.
/// * `q`: The second point. This must have the same size of `p`.
///
/// returns: `bool`
pub fn strictly_dominates(p: &[f64], q: &[f64]) -> bool {
    debug_assert_eq!(p.len(), q.len());
    p.iter().zip(q).all(|(p_i, q_i)| p_i > q_i)
}

/// Returns `true` if `p` strictly dominates `q` in the first `dimensions - 1` coordinates while
/// having a smaller last coordinate. The kink-point engine uses this to decide whether a removed
/// candidate, with its activation level as last coordinate, becomes a kink point.
///
/// # Arguments
///
/// * `p`: The first point.
/// * `q`: The second point.
/// * `dimensions`: The number of coordinates to compare. Both points must have at least this
///    number of coordinates.
///
/// returns: `bool`
///
/// # Panics
///
/// If `dimensions` is zero or larger than the size of either point.
pub fn strictly_dominates_except_last(p: &[f64], q: &[f64], dimensions: usize) -> bool {
    let last = dimensions - 1;
    strictly_dominates(&p[..last], &q[..last]) && p[last] < q[last]
}

/// Returns `true` if any point in `points` weakly dominates `point`.
///
/// # Arguments
///
/// * `points`: The points to check.
/// * `point`: The point that may be dominated.
///
/// returns: `bool`
pub fn any_weakly_dominates(points: &[Vec<f64>], point: &[f64]) -> bool {
    points.iter().any(|p| weakly_dominates(p, point))
}
