//! Rewrite SQL text between physical database identifiers and logical business names.
#![warn(missing_docs)]

/// Error taxonomy shared by mapping loading, rewriting, and output writing.
pub mod error;
/// Mapping entries and dictionaries, the mapping CSV loader, and sheet consolidation.
pub mod mapping;
/// Matched-tables report and output-file writing.
pub mod output;
/// Whole-word patterns and the identifier substitution engine.
pub mod rewrite;

pub use error::{Error, Result};
