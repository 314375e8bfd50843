//! CSV decoding for uploaded measurement files.
//!
//! # Format
//!
//! The first record is the header. Every later record becomes one row; each
//! field is typed with [`Cell::from_field`]. Rows shorter than the header are
//! padded, longer ones fail the whole upload.
//!
//! ```text
//! Date,Weight,Breastfeeding_oral,TPN
//! 2022-03-01,0.86,2,48
//! 2022-03-02,0.80,4,46
//! ```

use crate::cell::Cell;
use crate::error::UploadError;
use crate::table::{normalize_headers, Table};

/// Parse UTF-8 CSV text into a table.
pub fn parse_csv(text: &str) -> Result<Table, UploadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let header = rdr.headers()?.clone();
    let mut table = Table::new(normalize_headers(header.iter()));

    let mut count = 0u32;
    for result in rdr.records() {
        let record = result?;
        // Empty lines never reach here; `,,` rows stay as rows of gaps
        table.push_row(record.iter().map(Cell::from_field).collect())?;
        count += 1;
    }
    log::info!(
        "[NICU] csv: Parsed {} rows x {} columns",
        count,
        table.columns().len()
    );
    Ok(table)
}

/// Parse raw CSV bytes, which must be UTF-8.
pub fn parse_csv_bytes(bytes: Vec<u8>) -> Result<Table, UploadError> {
    let text = String::from_utf8(bytes)?;
    // A leading byte-order mark would otherwise stick to the first header
    parse_csv(text.strip_prefix('\u{feff}').unwrap_or(&text))
}
