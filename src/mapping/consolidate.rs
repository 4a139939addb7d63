use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};

/// Sheet rows above this index belong to the sheet's header block.
const DATA_START_ROW: usize = 6;
/// Sheet column holding the logical name.
const LOGICAL_COLUMN: usize = 1;
/// Sheet column holding the physical name.
const PHYSICAL_COLUMN: usize = 2;
/// Sheet column holding the free-text remark.
const REMARK_COLUMN: usize = 11;

/// One row of the consolidated flat table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsolidatedRow {
    /// Physical name taken from the sheet.
    #[serde(rename = "物理名")]
    pub physical: String,
    /// Logical name taken from the sheet.
    #[serde(rename = "論理名")]
    pub logical: String,
    /// Name of the sheet the row came from.
    #[serde(rename = "シート名")]
    pub sheet: String,
    /// Free-text remark column, possibly blank.
    #[serde(rename = "備考")]
    pub remark: String,
}

/// Result of consolidating a sheet directory.
#[derive(Debug, Clone, Default)]
pub struct Consolidation {
    /// Flat rows in sheet order, then sheet-row order.
    pub rows: Vec<ConsolidatedRow>,
    /// Sheets skipped because they cannot supply the remark column.
    pub skipped_sheets: Vec<String>,
}

/// Consolidate a directory of per-sheet CSV exports into a flat table.
///
/// Each `.csv` file is one workbook sheet, its file stem the sheet name.
/// Files are processed in file-name order for determinism. Per sheet the
/// header block (first [`DATA_START_ROW`] rows) is skipped, then each data
/// row contributes its logical name, physical name, and remark from the
/// fixed sheet columns. Sheets too narrow for the remark column are skipped
/// with a notice rather than aborting the run; this tolerant policy is
/// deliberate for preprocessing and distinct from the loader's fail-fast
/// header validation.
pub fn consolidate_sheets(sheet_dir: &Path) -> Result<Consolidation> {
    let entries = std::fs::read_dir(sheet_dir)
        .map_err(|e| Error::Consolidate(format!("cannot read {}: {e}", sheet_dir.display())))?;

    let mut sheet_paths: Vec<_> = entries
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|e| e == "csv"))
        .collect();
    sheet_paths.sort();

    let mut consolidation = Consolidation::default();
    for path in sheet_paths {
        let sheet = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default()
            .to_string();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&path)
            .map_err(|e| Error::Consolidate(format!("cannot read {}: {e}", path.display())))?;

        let mut records = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| {
                Error::Consolidate(format!("malformed row in {}: {e}", path.display()))
            })?;
            records.push(record);
        }

        let width = records.iter().map(csv::StringRecord::len).max().unwrap_or(0);
        if width <= REMARK_COLUMN {
            consolidation.skipped_sheets.push(sheet);
            continue;
        }

        for record in records.iter().skip(DATA_START_ROW) {
            let cell = |position: usize| record.get(position).unwrap_or("").trim();
            let logical = cell(LOGICAL_COLUMN);
            let physical = cell(PHYSICAL_COLUMN);
            if logical.is_empty() && physical.is_empty() {
                continue;
            }
            consolidation.rows.push(ConsolidatedRow {
                physical: physical.to_string(),
                logical: logical.to_string(),
                sheet: sheet.clone(),
                remark: cell(REMARK_COLUMN).to_string(),
            });
        }
    }

    Ok(consolidation)
}

/// Write consolidated rows as a flat CSV with the 物理名/論理名/シート名/備考 headers.
pub fn write_consolidated(rows: &[ConsolidatedRow], output: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(output)
        .map_err(|e| Error::Consolidate(format!("cannot write {}: {e}", output.display())))?;
    if rows.is_empty() {
        writer
            .write_record(["物理名", "論理名", "シート名", "備考"])
            .map_err(|e| Error::Consolidate(format!("cannot write {}: {e}", output.display())))?;
    }
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| Error::Consolidate(format!("cannot write {}: {e}", output.display())))?;
    }
    writer
        .flush()
        .map_err(|e| Error::io(format!("flushing {}", output.display()), e))?;
    Ok(())
}
