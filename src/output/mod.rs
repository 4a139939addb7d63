/// Writes the rewritten SQL and the matched-tables report to disk.
pub mod formatter;
/// Builds the matched-tables CSV report.
pub mod report;
