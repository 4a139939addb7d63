use std::path::{Component, Path};

use crate::error::{Error, Result};

/// Write the rewritten SQL and the matched-tables report for one input.
///
/// `name` becomes `<name>.sql` and `<name>_tables.csv` inside `output_dir`.
/// Each file is written to a temp path in the same directory and renamed
/// into place, so a failed run leaves no partial output file behind.
pub fn write_output(output_dir: &Path, name: &str, sql: &str, report: &str) -> Result<()> {
    validate_output_name(name)?;

    std::fs::create_dir_all(output_dir)
        .map_err(|e| Error::io(format!("creating {}", output_dir.display()), e))?;

    write_atomic(&output_dir.join(format!("{name}.sql")), sql)?;
    write_atomic(&output_dir.join(format!("{name}_tables.csv")), report)?;
    Ok(())
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let mut temp = path.as_os_str().to_os_string();
    temp.push(".tmp");
    let temp = Path::new(&temp);

    std::fs::write(temp, contents)
        .map_err(|e| Error::io(format!("writing {}", temp.display()), e))?;
    std::fs::rename(temp, path)
        .map_err(|e| Error::io(format!("renaming {} into place", temp.display()), e))
}

fn validate_output_name(name: &str) -> Result<()> {
    let reject = |reason: &'static str| {
        Err(Error::OutputName {
            name: name.to_string(),
            reason,
        })
    };
    if name.trim().is_empty() {
        return reject("must not be empty");
    }
    let candidate = Path::new(name);
    if candidate.is_absolute() {
        return reject("absolute paths are not allowed");
    }
    if candidate.components().any(|component| {
        matches!(
            component,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    }) {
        return reject("traversal segments are not allowed");
    }
    if name.contains('/') || name.contains('\\') {
        return reject("path separators are not allowed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_path(prefix: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        std::env::temp_dir().join(format!("{prefix}_{nanos}"))
    }

    #[test]
    fn write_output_reports_directory_creation_errors() {
        let path = unique_path("phys2log_formatter_file");
        std::fs::write(&path, "not a directory").expect("should create marker file");

        let err = write_output(&path, "output", "SELECT 1;", "report")
            .expect_err("directory creation should fail");
        assert!(err.to_string().contains("creating"), "got: {err}");
    }

    #[test]
    fn write_output_rejects_unsafe_name_paths() {
        let dir = unique_path("phys2log_formatter_dir");
        std::fs::create_dir_all(&dir).expect("should create temp directory");

        let err = write_output(&dir, "nested/output", "SELECT 1;", "report")
            .expect_err("unsafe output name should fail validation");
        assert!(err.to_string().contains("invalid output name"), "got: {err}");

        let err = write_output(&dir, "../escape", "SELECT 1;", "report")
            .expect_err("path traversal should fail validation");
        assert!(err.to_string().contains("invalid output name"), "got: {err}");
    }

    #[test]
    fn write_output_writes_both_artifacts_and_no_temp_files() {
        let dir = unique_path("phys2log_formatter_ok");

        write_output(&dir, "docs", "SELECT * FROM UserAccount;", "header\nrow\n")
            .expect("write_output should succeed");

        let sql = std::fs::read_to_string(dir.join("docs.sql")).expect("sql file should exist");
        let report =
            std::fs::read_to_string(dir.join("docs_tables.csv")).expect("report should exist");
        assert_eq!(sql, "SELECT * FROM UserAccount;");
        assert_eq!(report, "header\nrow\n");

        let leftovers: Vec<_> = std::fs::read_dir(&dir)
            .expect("output dir should be listable")
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.path().extension().is_some_and(|e| e == "tmp"))
            .collect();
        assert!(leftovers.is_empty(), "temp files left behind: {leftovers:?}");
    }
}
