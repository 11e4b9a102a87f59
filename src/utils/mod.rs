pub use non_dominated::non_dominated_points;
pub use vectors::{argsort_descending, sort_by_last_coordinate, vector_min};

mod non_dominated;
mod vectors;
