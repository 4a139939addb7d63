use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::mapping::dictionary::{MappingDictionary, MappingEntry};
use crate::rewrite::pattern::WholeWordPattern;

/// Which vocabulary is matched in the SQL and which is substituted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Match physical names, substitute logical names.
    #[default]
    PhysicalToLogical,
    /// Match logical names, substitute physical names.
    LogicalToPhysical,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::PhysicalToLogical => write!(f, "physical-to-logical"),
            Direction::LogicalToPhysical => write!(f, "logical-to-physical"),
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "physical-to-logical" => Ok(Direction::PhysicalToLogical),
            "logical-to-physical" => Ok(Direction::LogicalToPhysical),
            _ => Err(format!(
                "Invalid direction: {s} (expected physical-to-logical or logical-to-physical)"
            )),
        }
    }
}

/// Sentinel description for matched tables whose mapping row has none.
pub const NO_DESCRIPTION: &str = "N/A";

/// A table whose name was found and rewritten, enriched for the report.
///
/// Serialized field names are the report's column headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedTable {
    /// Logical table name.
    #[serde(rename = "テーブル論理名")]
    pub logical: String,
    /// Physical table name.
    #[serde(rename = "テーブル物理名")]
    pub physical: String,
    /// Description from the mapping row, or [`NO_DESCRIPTION`].
    #[serde(rename = "説明")]
    pub description: String,
}

impl From<&MappingEntry> for MatchedTable {
    fn from(entry: &MappingEntry) -> Self {
        Self {
            logical: entry.logical.clone(),
            physical: entry.physical.clone(),
            description: entry
                .description
                .clone()
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        }
    }
}

/// The rewritten text and the audit trail of tables that were touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteResult {
    /// SQL text with every matched name substituted.
    pub text: String,
    /// Matched tables in mapping order, one entry per matched name.
    pub matched_tables: Vec<MatchedTable>,
}

/// The identifier substitution engine.
///
/// Construction compiles one whole-word pattern per dictionary entry for the
/// chosen direction; [`Rewriter::rewrite`] is then infallible and stateless,
/// safe to share across independent inputs.
#[derive(Debug, Clone)]
pub struct Rewriter {
    tables: Vec<(WholeWordPattern, MappingEntry)>,
    columns: Vec<WholeWordPattern>,
}

impl Rewriter {
    /// Compile patterns for every entry of both dictionaries.
    pub fn new(
        tables: &MappingDictionary,
        columns: &MappingDictionary,
        direction: Direction,
    ) -> Result<Self> {
        let pair = |entry: &MappingEntry| match direction {
            Direction::PhysicalToLogical => (entry.physical.clone(), entry.logical.clone()),
            Direction::LogicalToPhysical => (entry.logical.clone(), entry.physical.clone()),
        };

        let tables = tables
            .iter()
            .map(|entry| {
                let (needle, replacement) = pair(entry);
                Ok((WholeWordPattern::new(&needle, &replacement)?, entry.clone()))
            })
            .collect::<Result<Vec<_>>>()?;
        let columns = columns
            .iter()
            .map(|entry| {
                let (needle, replacement) = pair(entry);
                WholeWordPattern::new(&needle, &replacement)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { tables, columns })
    }

    /// Rewrite one SQL text, folding the accumulated text through every
    /// mapping entry in dictionary order.
    ///
    /// Each table replacement operates on the already-substituted text from
    /// prior entries, so a name introduced by an earlier replacement is
    /// matched (and reported) by a later entry. Mapping order is significant
    /// and must follow the order mapping rows were loaded.
    pub fn rewrite(&self, sql: &str) -> RewriteResult {
        let mut text = sql.to_string();
        let mut matched_tables = Vec::new();

        for (pattern, entry) in &self.tables {
            if pattern.is_match(&text) {
                matched_tables.push(MatchedTable::from(entry));
                text = pattern.replace_all(&text).into_owned();
            }
        }
        for pattern in &self.columns {
            if let std::borrow::Cow::Owned(replaced) = pattern.replace_all(&text) {
                text = replaced;
            }
        }

        RewriteResult {
            text,
            matched_tables,
        }
    }
}

/// One-shot convenience: compile a throwaway [`Rewriter`] and run it.
pub fn rewrite(
    sql: &str,
    tables: &MappingDictionary,
    columns: &MappingDictionary,
) -> Result<RewriteResult> {
    Ok(Rewriter::new(tables, columns, Direction::PhysicalToLogical)?.rewrite(sql))
}
