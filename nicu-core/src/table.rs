//! Column-ordered table of uploaded measurements.
//!
//! A `Table` keeps the header order of the source file and stores rows as
//! `Vec<Cell>` aligned with `columns`. Column lookups are by exact name; a
//! missing column is a [`TableError::MissingColumn`], never a panic.

use crate::cell::Cell;
use crate::error::TableError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create an empty table with the given (already normalized) header.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a table from a header and rows. Short rows are padded with
    /// `Cell::Empty`; rows wider than the header are rejected.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self, TableError> {
        let mut table = Table::new(columns);
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    pub fn push_row(&mut self, mut row: Vec<Cell>) -> Result<(), TableError> {
        let width = self.columns.len();
        if row.len() > width {
            return Err(TableError::RowTooWide {
                row: self.rows.len(),
                expected: width,
                found: row.len(),
            });
        }
        row.resize(width, Cell::Empty);
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn column_index(&self, name: &str) -> Result<usize, TableError> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| TableError::MissingColumn(name.to_string()))
    }

    /// Clone out every cell of one column, in row order.
    pub fn column(&self, name: &str) -> Result<Vec<Cell>, TableError> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(|r| r[idx].clone()).collect())
    }

    /// Read one column as numbers. Empty cells become `None`; text or
    /// booleans are an error.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<Option<f64>>, TableError> {
        let idx = self.column_index(name)?;
        self.rows
            .iter()
            .enumerate()
            .map(|(row, r)| match &r[idx] {
                Cell::Number(v) => Ok(Some(*v)),
                Cell::Empty => Ok(None),
                other => Err(TableError::NonNumeric {
                    column: name.to_string(),
                    row,
                    value: other.to_string(),
                }),
            })
            .collect()
    }

    /// Get a single cell by row index and column name.
    pub fn cell(&self, row: usize, name: &str) -> Result<Option<&Cell>, TableError> {
        let idx = self.column_index(name)?;
        Ok(self.rows.get(row).map(|r| &r[idx]))
    }

    /// Replace the column if it already exists, otherwise append it.
    pub fn set_column(&mut self, name: &str, values: Vec<Cell>) -> Result<(), TableError> {
        if values.len() != self.rows.len() {
            return Err(TableError::ColumnLength {
                column: name.to_string(),
                expected: self.rows.len(),
                found: values.len(),
            });
        }
        match self.columns.iter().position(|c| c == name) {
            Some(idx) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[idx] = value;
                }
            }
            None => {
                self.columns.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
        Ok(())
    }

    /// Rows as `{column: value}` records, the shape the store hands to the charts.
    pub fn to_records(&self) -> Vec<Map<String, Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .zip(row)
                    .map(|(c, v)| (c.clone(), serde_json::to_value(v).unwrap_or(Value::Null)))
                    .collect()
            })
            .collect()
    }

    /// Number of pages needed to show every row. An empty table still has one page.
    pub fn page_count(&self, page_size: usize) -> usize {
        if page_size == 0 {
            return 1;
        }
        self.rows.len().div_ceil(page_size).max(1)
    }

    /// Rows on the zero-based `page`; past the end yields an empty slice.
    pub fn page(&self, page: usize, page_size: usize) -> &[Vec<Cell>] {
        let start = page.saturating_mul(page_size).min(self.rows.len());
        let end = start.saturating_add(page_size).min(self.rows.len());
        &self.rows[start..end]
    }
}

/// Make raw header cells usable as column names.
///
/// Blank headers become `Unnamed: <index>`, and repeats of an earlier name get
/// `.1`, `.2`, ... appended so every column name is unique.
pub fn normalize_headers<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for (i, name) in raw.into_iter().enumerate() {
        let name = name.as_ref();
        let base = if name.trim().is_empty() {
            format!("Unnamed: {}", i)
        } else {
            name.to_string()
        };
        let mut candidate = base.clone();
        let mut suffix = 1;
        while out.contains(&candidate) {
            candidate = format!("{}.{}", base, suffix);
            suffix += 1;
        }
        out.push(candidate);
    }
    out
}
