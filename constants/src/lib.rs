/// Tuning values for the entity finder tool: distance-unit scaling,
/// threshold slider ranges, and overlay panel dimensions.
pub mod finder;
