//! Distances from a Pareto front, calculated with its kink points.
pub use distance::{distance_to_kink_points, distance_to_pareto_front, KinkPoints};

mod distance;
