/// Consolidates per-sheet exports into a flat physical/logical table.
pub mod consolidate;
/// Ordered physical→logical dictionaries with unique physical keys.
pub mod dictionary;
/// Loads the mapping CSV and builds the table and column dictionaries.
pub mod loader;
