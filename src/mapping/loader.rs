use std::path::Path;

use crate::error::{Error, Result};
use crate::mapping::dictionary::{MappingDictionary, MappingEntry};

/// Header of the physical table name column.
pub const TABLE_PHYSICAL_HEADER: &str = "テーブル物理名";
/// Header of the logical table name column.
pub const TABLE_LOGICAL_HEADER: &str = "テーブル論理名";
/// Header of the physical column name column.
pub const COLUMN_PHYSICAL_HEADER: &str = "項目物理名";
/// Header of the logical column name column.
pub const COLUMN_LOGICAL_HEADER: &str = "項目論理名";
/// Header of the optional description column, read for table rows only.
pub const DESCRIPTION_HEADER: &str = "説明";

/// The two dictionaries built from one mapping CSV, plus load diagnostics.
#[derive(Debug, Clone, Default)]
pub struct MappingFile {
    /// Table name mappings, in source-row order.
    pub tables: MappingDictionary,
    /// Column name mappings, in source-row order.
    pub columns: MappingDictionary,
    /// Rows where exactly one cell of a physical/logical pair was blank.
    pub skipped_partial_pairs: usize,
}

/// Column positions of the required headers, resolved once per file.
///
/// Rows are then read by fixed index; header text is never consulted again.
struct HeaderLayout {
    table_physical: usize,
    table_logical: usize,
    column_physical: usize,
    column_logical: usize,
    description: Option<usize>,
}

impl HeaderLayout {
    fn resolve(headers: &csv::StringRecord) -> Result<Self> {
        let find = |wanted: &str| {
            headers
                .iter()
                .position(|header| strip_bom(header).trim() == wanted)
        };

        let table_physical = find(TABLE_PHYSICAL_HEADER);
        let table_logical = find(TABLE_LOGICAL_HEADER);
        let column_physical = find(COLUMN_PHYSICAL_HEADER);
        let column_logical = find(COLUMN_LOGICAL_HEADER);

        let missing: Vec<&str> = [
            (TABLE_PHYSICAL_HEADER, table_physical),
            (TABLE_LOGICAL_HEADER, table_logical),
            (COLUMN_PHYSICAL_HEADER, column_physical),
            (COLUMN_LOGICAL_HEADER, column_logical),
        ]
        .into_iter()
        .filter_map(|(name, position)| position.is_none().then_some(name))
        .collect();

        if !missing.is_empty() {
            return Err(Error::mapping_load(format!(
                "missing required headers: {}",
                missing.join(", ")
            )));
        }

        Ok(Self {
            table_physical: table_physical.unwrap_or_default(),
            table_logical: table_logical.unwrap_or_default(),
            column_physical: column_physical.unwrap_or_default(),
            column_logical: column_logical.unwrap_or_default(),
            description: find(DESCRIPTION_HEADER),
        })
    }
}

/// Excel CSV exports prefix the first header with a UTF-8 BOM.
fn strip_bom(cell: &str) -> &str {
    cell.strip_prefix('\u{feff}').unwrap_or(cell)
}

fn cell<'a>(record: &'a csv::StringRecord, position: usize) -> &'a str {
    record.get(position).unwrap_or("").trim()
}

/// Load a mapping CSV into table and column dictionaries.
///
/// Headers are located by name in any column order; any required header
/// missing aborts the load before any rewrite can start. A row contributes a
/// table entry when both table cells are non-blank, and independently a
/// column entry when both column cells are non-blank (the spreadsheet pads
/// the shorter vocabulary with blank cells). Duplicate physical names
/// collapse last-write-wins per [`MappingDictionary::insert`].
pub fn load_mapping(path: &Path) -> Result<MappingFile> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| Error::mapping_load(format!("cannot read {}: {e}", path.display())))?;

    let headers = reader
        .headers()
        .map_err(|e| Error::mapping_load(format!("cannot read headers of {}: {e}", path.display())))?
        .clone();
    let layout = HeaderLayout::resolve(&headers)?;

    let mut mapping = MappingFile::default();
    for record in reader.records() {
        let record = record
            .map_err(|e| Error::mapping_load(format!("malformed row in {}: {e}", path.display())))?;

        let table_physical = cell(&record, layout.table_physical);
        let table_logical = cell(&record, layout.table_logical);
        match (table_physical.is_empty(), table_logical.is_empty()) {
            (false, false) => {
                let description = layout
                    .description
                    .map(|position| cell(&record, position))
                    .filter(|text| !text.is_empty())
                    .map(str::to_string);
                mapping
                    .tables
                    .insert(MappingEntry::new(table_physical, table_logical, description));
            }
            (true, true) => {}
            _ => mapping.skipped_partial_pairs += 1,
        }

        let column_physical = cell(&record, layout.column_physical);
        let column_logical = cell(&record, layout.column_logical);
        match (column_physical.is_empty(), column_logical.is_empty()) {
            (false, false) => mapping
                .columns
                .insert(MappingEntry::new(column_physical, column_logical, None)),
            (true, true) => {}
            _ => mapping.skipped_partial_pairs += 1,
        }
    }

    Ok(mapping)
}
