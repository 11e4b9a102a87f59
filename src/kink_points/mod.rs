//! The kink points of a Pareto front.
//!
//! All objectives are maximised and every dimension is floored at [`crate::core::FLOOR`]. The
//! region dominated by a front is the union of the boxes between the floor and each front
//! point. Its boundary is an axis-aligned staircase, and the kink points are the minimal corners
//! of the region above it: any point strictly dominating a kink point is outside the dominated
//! region, and lowering any positive coordinate of a kink point moves it inside. For example, the
//! two-dimensional front `[(1, 9), (2, 8), (3, 5)]` has kink points `(0, 9)`, `(1, 8)`,
//! `(2, 5)` and `(3, 0)`.
//!
//! The points are swept by their last coordinate in descending order and the kink points of the
//! projections swept so far are computed one dimension down, down to a three-dimensional sweep
//! that only looks at the neighbours of each new projection.
pub use engine::get_kink_points;

mod engine;
mod sweep_3d;
