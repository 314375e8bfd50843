//! Upload handling: data-URL decoding, format dispatch and parsing.
//!
//! Browsers hand uploaded files over as data URLs
//! (`data:<mime>;base64,<payload>`). [`UploadedFile::parse`] splits off the
//! payload, base64-decodes it, picks a decoder from the file name and appends
//! the derived `Weight_diff` column.

use crate::csv_table::parse_csv_bytes;
use crate::derive::append_weight_diff;
use crate::error::UploadError;
use crate::table::Table;
use crate::workbook::parse_workbook;
use base64::prelude::*;

/// Number of characters of the raw contents shown in the preview.
pub const PREVIEW_CHARS: usize = 200;

/// Message shown in place of the table when an upload cannot be parsed.
pub const FORMAT_ERROR_MESSAGE: &str = "파일 형식 혹은 양식을 맞춰주세요";

/// MIME type used when the browser does not report one.
pub const DEFAULT_MIME: &str = "application/octet-stream";

/// Decoder chosen for an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Excel,
}

impl FileFormat {
    /// Pick a decoder by substring of the file name.
    ///
    /// `csv` is checked first, then `xls` (which also covers `xlsx`). The
    /// match is case-sensitive.
    pub fn detect(filename: &str) -> Option<Self> {
        if filename.contains("csv") {
            Some(FileFormat::Csv)
        } else if filename.contains("xls") {
            Some(FileFormat::Excel)
        } else {
            None
        }
    }
}

/// One uploaded file: its name and the data-URL string the browser produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub filename: String,
    pub contents: String,
}

impl UploadedFile {
    pub fn new(filename: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            contents: contents.into(),
        }
    }

    /// Wrap raw file bytes as a base64 data URL.
    pub fn from_bytes(filename: impl Into<String>, mime: &str, bytes: &[u8]) -> Self {
        let mime = if mime.is_empty() { DEFAULT_MIME } else { mime };
        let contents = format!("data:{};base64,{}", mime, BASE64_STANDARD.encode(bytes));
        Self::new(filename, contents)
    }

    /// Base64-decode the payload after the first `,`.
    pub fn decode(&self) -> Result<Vec<u8>, UploadError> {
        let (_content_type, payload) = self
            .contents
            .split_once(',')
            .ok_or(UploadError::MalformedContents)?;
        Ok(BASE64_STANDARD.decode(payload.trim())?)
    }

    /// Leading characters of the raw contents followed by `...`.
    pub fn preview(&self) -> String {
        let head: String = self.contents.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", head)
    }

    /// Decode, parse and derive. This is the whole upload pipeline for one file.
    pub fn parse(&self) -> Result<Table, UploadError> {
        let bytes = self.decode()?;
        let mut table = match FileFormat::detect(&self.filename) {
            Some(FileFormat::Csv) => parse_csv_bytes(bytes)?,
            Some(FileFormat::Excel) => parse_workbook(bytes)?,
            None => return Err(UploadError::UnsupportedFormat(self.filename.clone())),
        };
        append_weight_diff(&mut table)?;
        Ok(table)
    }
}

/// What the upload handler renders for one file.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    /// The file parsed; render name, buttons, table and preview.
    Parsed {
        filename: String,
        preview: String,
        table: Table,
    },
    /// The file did not parse; render the format message. `reason` is only logged.
    Rejected { filename: String, reason: String },
}

impl UploadOutcome {
    pub fn filename(&self) -> &str {
        match self {
            UploadOutcome::Parsed { filename, .. } | UploadOutcome::Rejected { filename, .. } => {
                filename
            }
        }
    }

    pub fn table(&self) -> Option<&Table> {
        match self {
            UploadOutcome::Parsed { table, .. } => Some(table),
            UploadOutcome::Rejected { .. } => None,
        }
    }
}

/// Run the pipeline on one file, logging and collapsing any failure.
pub fn handle_upload(file: &UploadedFile) -> UploadOutcome {
    match file.parse() {
        Ok(table) => {
            log::info!(
                "[NICU] upload: {} -> {} rows, {} columns",
                file.filename,
                table.len(),
                table.columns().len()
            );
            UploadOutcome::Parsed {
                filename: file.filename.clone(),
                preview: file.preview(),
                table,
            }
        }
        Err(e) => {
            log::error!("[NICU] upload: {} rejected: {}", file.filename, e);
            UploadOutcome::Rejected {
                filename: file.filename.clone(),
                reason: e.to_string(),
            }
        }
    }
}
