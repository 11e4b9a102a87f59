//! Kink points of a Pareto front and distance of a point from the region the front dominates.
//!
//! All objectives are maximised and every dimension is floored at `0`. The kink points of a
//! front are the minimal corners of the region that no front point dominates (see
//! [`kink_points`]). With them, the distance of a point from that region is the smallest
//! distance to a kink point, where only the coordinates the point has to improve count:
//!
//! ```
//!  use pareto_kink::kink_points::get_kink_points;
//!  use pareto_kink::metrics::{distance_to_kink_points, distance_to_pareto_front};
//!
//!  let front = vec![vec![1.0, 2.0, 3.0], vec![2.0, 3.0, 1.0], vec![3.0, 1.0, 2.0]];
//!  let kink_points = get_kink_points(&front, 3).unwrap();
//!  assert_eq!(kink_points.len(), 7);
//!
//!  // dominated by (1, 2, 3)
//!  assert_eq!(distance_to_pareto_front(&front, &[0.5, 0.5, 0.5]).unwrap(), 0.0);
//!  // (1, 1, 1) is the closest kink point
//!  let distance = distance_to_kink_points(&kink_points, &[0.5, 0.5, 0.5]).unwrap();
//!  assert!((distance - 0.75_f64.sqrt()).abs() < 1e-12);
//! ```
pub mod archive;
pub mod core;
pub mod kink_points;
pub mod metrics;
pub mod utils;
