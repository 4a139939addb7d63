use std::borrow::Cow;

use regex::{NoExpand, Regex};

use crate::error::{Error, Result};

/// A whole-word occurrence matcher for one identifier, paired with its
/// replacement text.
///
/// The identifier is escaped before the boundary-anchored pattern is built,
/// so names containing regex metacharacters (`T$BK`, `A.B`) match literally.
/// The replacement is applied with [`NoExpand`] so `$` in a logical name is
/// never treated as a capture reference.
#[derive(Debug, Clone)]
pub struct WholeWordPattern {
    regex: Regex,
    replacement: String,
}

impl WholeWordPattern {
    /// Compile a whole-word pattern for `name`, replacing matches with `replacement`.
    pub fn new(name: &str, replacement: &str) -> Result<Self> {
        let regex = Regex::new(&format!(r"\b{}\b", regex::escape(name))).map_err(|source| {
            Error::Pattern {
                name: name.to_string(),
                source,
            }
        })?;
        Ok(Self {
            regex,
            replacement: replacement.to_string(),
        })
    }

    /// Whether the identifier occurs as a whole word anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Replace every whole-word occurrence, leaving partial identifiers intact.
    pub fn replace_all<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.regex.replace_all(text, NoExpand(&self.replacement))
    }
}
