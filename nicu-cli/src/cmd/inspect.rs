//! `inspect`: show what the upload handler makes of a file.

use super::load_table;
use nicu_core::Table;
use std::path::Path;

pub fn run_inspect(file: &Path, rows: usize) -> anyhow::Result<()> {
    let (upload, table) = load_table(file)?;
    println!("{}", upload.filename);
    print!("{}", summary(&table, rows)?);
    println!("Raw Content");
    println!("{}", upload.preview());
    Ok(())
}

/// Column list, row count and the first `rows` rows as JSON records.
pub fn summary(table: &Table, rows: usize) -> serde_json::Result<String> {
    let mut out = format!("columns ({}): {}\n", table.columns().len(), table.columns().join(", "));
    out.push_str(&format!("rows: {}\n", table.len()));
    for record in table.to_records().into_iter().take(rows) {
        out.push_str(&serde_json::to_string(&record)?);
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::tests::{temp_file, WEIGHTS_CSV};
    use tempfile::tempdir;

    #[test]
    fn summary_lists_columns_and_leading_records() {
        let dir = tempdir().unwrap();
        let path = temp_file(&dir, "inspect.csv", WEIGHTS_CSV.as_bytes());
        let (_, table) = load_table(&path).unwrap();
        let text = summary(&table, 2).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with("columns (10): Date, Weight,"));
        assert!(lines[0].ends_with("An.Gap, Weight_diff"));
        assert_eq!(lines[1], "rows: 4");
        assert_eq!(lines.len(), 4);
        assert!(lines[2].contains("\"Date\":\"03-01\""));
        assert!(lines[2].contains("\"Weight_diff\":null"));
    }
}
