/// The value every dimension is floored at. Candidates still alive at the end of a sweep become
/// kink points at this level.
pub const FLOOR: f64 = 0.0;

/// The maximum number of dimensions accepted by the kink-point engine, which recurses once per
/// dimension.
pub const MAX_DIMENSIONS: usize = 32;

/// Whether the quadratic validation of the front (mutual non-dominance) runs. This is enabled in
/// debug builds or with the `expensive-checks` feature.
pub const EXPENSIVE_CHECKS: bool = cfg!(any(debug_assertions, feature = "expensive-checks"));
