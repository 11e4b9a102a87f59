pub use constants::{EXPENSIVE_CHECKS, FLOOR, MAX_DIMENSIONS};
pub use dominance::{
    any_weakly_dominates, strictly_dominates, strictly_dominates_except_last, weakly_dominates,
    Dominance,
};
pub use error::KError;

mod constants;
mod dominance;
mod error;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod utils;
