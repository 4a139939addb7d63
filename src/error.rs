use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by mapping loading, pattern compilation, and file I/O.
///
/// A matched table without a description is not an error; the report falls
/// back to the `"N/A"` sentinel instead.
#[derive(Debug, Error)]
pub enum Error {
    /// The mapping source is unusable: unreadable, undecodable, or missing
    /// required headers. Raised before any rewrite starts.
    #[error("mapping load failed: {0}")]
    MappingLoad(String),

    /// A sheet export could not be read during consolidation.
    #[error("consolidation failed: {0}")]
    Consolidate(String),

    /// A physical name could not be compiled into a whole-word pattern.
    #[error("invalid whole-word pattern for '{name}': {source}")]
    Pattern {
        /// The name the pattern was built from.
        name: String,
        /// Compilation error reported by the regex engine.
        #[source]
        source: regex::Error,
    },

    /// An output file name is empty or would escape the output directory.
    #[error("invalid output name '{name}': {reason}")]
    OutputName {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// Reading an input or writing an output failed.
    #[error("{context}: {source}")]
    Io {
        /// What was being read or written.
        context: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Build an [`Error::Io`] with a human-readable context line.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            context: context.into(),
            source,
        }
    }

    /// Build an [`Error::MappingLoad`] from any displayable cause.
    pub fn mapping_load(message: impl Into<String>) -> Self {
        Error::MappingLoad(message.into())
    }
}
