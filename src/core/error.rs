use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
/// Errors raised by the library.
pub enum KError {
    #[error("The following error occurred: {0}")]
    Generic(String),
    #[error("At least 2 dimensions are needed to calculate the kink points, but {0} given")]
    NotEnoughDimensions(usize),
    #[error("The number of dimensions ({0}) exceeds the maximum supported number ({1})")]
    TooManyDimensions(usize, usize),
    #[error("The {0} #{1} has {2} coordinates, but {3} are expected")]
    DimensionMismatch(String, usize, usize, usize),
    #[error("NaN or infinite coordinate detected in the {0} #{1}")]
    NonFinite(String, usize),
    #[error("The front is not made of mutually non-dominated points: point #{0} weakly dominates point #{1}")]
    NotAntichain(usize, usize),
}
