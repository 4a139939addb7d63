/// The substitution engine and its rewrite result types.
pub mod engine;
/// Boundary-anchored whole-word patterns over opaque SQL text.
pub mod pattern;
