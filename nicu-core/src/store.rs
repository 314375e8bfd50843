//! The shared table store.
//!
//! The store is the only channel between the upload handler and the chart
//! builders. It is recreated on every upload event and overwritten by each
//! file that parses, so with several files only the last good one is kept.

use crate::table::Table;
use crate::upload::{handle_upload, UploadOutcome, UploadedFile};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableStore {
    table: Option<Table>,
}

impl TableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The table the chart builders read, if any upload has succeeded.
    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    /// Process one upload event (one or more files) and return one outcome per file.
    pub fn ingest(&mut self, files: &[UploadedFile]) -> Vec<UploadOutcome> {
        self.table = None;
        let outcomes: Vec<UploadOutcome> = files.iter().map(handle_upload).collect();
        for outcome in &outcomes {
            if let Some(table) = outcome.table() {
                if self.table.is_some() {
                    log::warn!(
                        "[NICU] store: {} replaces the previously stored table",
                        outcome.filename()
                    );
                }
                self.table = Some(table.clone());
            }
        }
        outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv(name: &str, body: &str) -> UploadedFile {
        UploadedFile::from_bytes(name, "text/csv", body.as_bytes())
    }

    #[test]
    fn starts_empty() {
        assert!(TableStore::new().table().is_none());
    }

    #[test]
    fn reupload_overwrites_the_store() {
        let mut store = TableStore::new();
        store.ingest(&[csv("first.csv", "Date,Weight\nd1,1.0\n")]);
        assert_eq!(store.table().map(Table::len), Some(1));

        store.ingest(&[csv("second.csv", "Date,Weight\nd1,2.0\nd2,2.5\n")]);
        let table = store.table().unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.numeric_column("Weight").unwrap(), vec![Some(2.0), Some(2.5)]);
    }

    #[test]
    fn last_parsed_file_wins_within_one_upload() {
        let mut store = TableStore::new();
        let outcomes = store.ingest(&[
            csv("a.csv", "Date,Weight\nd1,1.0\n"),
            csv("b.csv", "Date,Weight\nd1,3.0\n"),
            UploadedFile::from_bytes("c.txt", "text/plain", b"ignored"),
        ]);
        assert_eq!(outcomes.len(), 3);
        assert!(matches!(outcomes[2], UploadOutcome::Rejected { .. }));
        assert_eq!(
            store.table().unwrap().numeric_column("Weight").unwrap(),
            vec![Some(3.0)]
        );
    }

    #[test]
    fn failed_upload_clears_previous_table() {
        let mut store = TableStore::new();
        store.ingest(&[csv("a.csv", "Date,Weight\nd1,1.0\n")]);
        store.ingest(&[UploadedFile::from_bytes("data.txt", "text/plain", b"x")]);
        assert!(store.table().is_none());
    }
}
