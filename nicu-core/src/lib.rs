//! Table model and upload parsing for the NICU dashboard.
//!
//! This crate provides:
//! - `table`: the column-ordered `Table` of `Cell`s shared by every handler
//! - `upload`: data-URL decoding, format dispatch and the `Weight_diff` column
//! - `store`: the shared table store that the upload handler overwrites
//! - `csv_table` / `workbook`: the two decoders behind the upload handler
//!
//! Nothing here touches the DOM, so the whole crate is tested natively.

pub mod cell;
pub mod columns;
pub mod csv_table;
pub mod dates;
pub mod derive;
pub mod error;
pub mod store;
pub mod table;
pub mod upload;
pub mod workbook;

pub use cell::Cell;
pub use error::{TableError, UploadError};
pub use store::TableStore;
pub use table::Table;
pub use upload::{UploadOutcome, UploadedFile};
