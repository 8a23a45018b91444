//! Flattening accumulated records into a uniform table and writing CSV.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::error::{Error, Result};
use crate::soda::Record;

/// A uniform grid over a set of records: the column list is the union of
/// every key observed, in first-seen order, and rows render missing keys as
/// empty cells.
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Record>,
}

impl Table {
    pub fn from_records(rows: Vec<Record>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for row in &rows {
            for key in row.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Remove `name` from the column list. The values stay in the underlying
    /// records but are no longer written out. Fails if the column was never
    /// observed.
    pub fn drop_column(&mut self, name: &str) -> Result<()> {
        match self.columns.iter().position(|c| c == name) {
            Some(idx) => {
                self.columns.remove(idx);
                Ok(())
            }
            None => Err(Error::MissingColumn(name.to_string())),
        }
    }

    /// Write the table to `path` as UTF-8 CSV with a header row, creating
    /// parent directories and replacing any existing file.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(&self.columns)?;
        for row in &self.rows {
            let cells = self
                .columns
                .iter()
                .map(|col| render_cell(row.get(col)))
                .collect::<Vec<_>>();
            writer.write_record(&cells)?;
        }
        writer.flush()?;

        info!(path = %path.display(), rows = self.rows.len(), "wrote CSV");
        Ok(())
    }
}

/// Missing keys and JSON nulls become empty cells; strings are written
/// verbatim; anything nested is written as compact JSON.
fn render_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(pairs: &[(&str, Value)]) -> Record {
        let mut rec = Record::new();
        for (k, v) in pairs {
            rec.insert(k.to_string(), v.clone());
        }
        rec
    }

    #[test]
    fn columns_are_union_in_first_seen_order() {
        let table = Table::from_records(vec![
            record(&[("a", json!("1")), ("b", json!("2"))]),
            record(&[("b", json!("3")), ("c", json!("4"))]),
        ]);
        assert_eq!(table.columns(), &["a", "b", "c"]);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn drop_column_removes_it() {
        let mut table = Table::from_records(vec![record(&[
            ("fine_amount", json!("35")),
            ("interest_amount", json!("0.12")),
        ])]);
        table.drop_column("interest_amount").unwrap();
        assert_eq!(table.columns(), &["fine_amount"]);
    }

    #[test]
    fn drop_missing_column_fails() {
        let mut table = Table::from_records(vec![record(&[("a", json!("1"))])]);
        let err = table.drop_column("interest_amount").unwrap_err();
        assert!(matches!(err, Error::MissingColumn(name) if name == "interest_amount"));
    }

    #[test]
    fn csv_has_header_and_one_line_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let table = Table::from_records(vec![
            record(&[("a", json!("x")), ("b", json!("y"))]),
            record(&[("a", json!("z"))]),
        ]);
        table.write_csv(&path).unwrap();

        let body = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines, vec!["a,b", "x,y", "z,"]);
    }

    #[test]
    fn missing_and_null_values_render_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let table = Table::from_records(vec![
            record(&[("a", json!("1")), ("b", Value::Null)]),
            record(&[("b", json!("2"))]),
        ]);
        table.write_csv(&path).unwrap();

        let body = fs::read_to_string(&path).unwrap();
        assert_eq!(body.lines().collect::<Vec<_>>(), vec!["a,b", "1,", ",2"]);
    }

    #[test]
    fn nested_values_render_as_json() {
        assert_eq!(
            render_cell(Some(&json!({"latitude": "40.7"}))),
            r#"{"latitude":"40.7"}"#
        );
        assert_eq!(render_cell(Some(&json!(42))), "42");
        assert_eq!(render_cell(None), "");
    }

    #[test]
    fn rewrite_overwrites_with_identical_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let table = Table::from_records(vec![record(&[("a", json!("1"))])]);

        table.write_csv(&path).unwrap();
        let first = fs::read(&path).unwrap();
        table.write_csv(&path).unwrap();
        let second = fs::read(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("out.csv");
        let table = Table::from_records(Vec::new());
        table.write_csv(&path).unwrap();
        assert!(path.exists());
    }
}
