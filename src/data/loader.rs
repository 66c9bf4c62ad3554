// CSV corpus loader.
//
// The expected file is a plain CSV with a header row containing at least
// `text` and `label` columns. Deserialization maps columns by header name,
// so the leading unnamed index column that pandas exports carry — and any
// other extra columns — are ignored.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::NewsRecord;

/// Load all labeled records from a CSV file.
///
/// Fails on a missing file, a row missing either the `text` or `label`
/// column, or an empty dataset. No recovery — a malformed corpus terminates
/// the run.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<NewsRecord>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("cannot open dataset '{}'", path.display()))?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        // The csv error already carries the record position
        let record: NewsRecord =
            row.with_context(|| format!("malformed record in '{}'", path.display()))?;
        records.push(record);
    }

    if records.is_empty() {
        anyhow::bail!("dataset '{}' contains no records", path.display());
    }

    info!(records = records.len(), path = %path.display(), "Loaded dataset");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_csv(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir()
            .join(format!("veracity-loader-{name}-{}.csv", std::process::id()));
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_loads_with_index_column() {
        let path = write_temp_csv(
            "index",
            ",title,text,label\n0,A,the first article,real\n1,B,the second article,fake\n",
        );
        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text, "the first article");
        assert_eq!(records[0].label, "real");
        assert_eq!(records[1].label, "fake");
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_columns_mapped_by_name_not_position() {
        // label before text — header names decide, not column order
        let path = write_temp_csv(
            "reordered",
            "label,extra,text\nreal,x,first body\nfake,y,second body\n",
        );
        let records = load_records(&path).unwrap();
        assert_eq!(records[0].text, "first body");
        assert_eq!(records[0].label, "real");
        assert_eq!(records[1].label, "fake");
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file_fails() {
        let result = load_records("definitely/not/here.csv");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_label_column_fails() {
        let path = write_temp_csv("nolabel", "text,category\nsome text,real\n");
        let result = load_records(&path);
        assert!(result.is_err());
        let err = format!("{:#}", result.unwrap_err());
        assert!(err.contains("label"), "error was: {err}");
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_empty_dataset_fails() {
        let path = write_temp_csv("empty", "text,label\n");
        assert!(load_records(&path).is_err());
        std::fs::remove_file(path).ok();
    }
}
