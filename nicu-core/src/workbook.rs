//! Excel workbook decoding using calamine.
//!
//! Only the first worksheet is read. Its first row is the header; every
//! following row becomes a table row. Format detection (xls, xlsx, xlsb, ods)
//! is left to `calamine::open_workbook_auto_from_rs`.

use crate::cell::Cell;
use crate::dates::format_cell_datetime;
use crate::error::UploadError;
use crate::table::{normalize_headers, Table};
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use std::io::Cursor;

/// Parse workbook bytes into a table.
pub fn parse_workbook(bytes: Vec<u8>) -> Result<Table, UploadError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(UploadError::EmptyWorkbook)??;
    range_to_table(&range)
}

fn range_to_table(range: &Range<Data>) -> Result<Table, UploadError> {
    let mut rows = range.rows();
    let header = match rows.next() {
        Some(header) => header.iter().map(header_text).collect::<Vec<_>>(),
        None => return Ok(Table::default()),
    };
    let mut table = Table::new(normalize_headers(header));

    let mut count = 0u32;
    for row in rows {
        // Blank rows inside the used range stay, so row indices match the sheet
        table.push_row(row.iter().map(data_to_cell).collect())?;
        count += 1;
    }
    log::info!(
        "[NICU] workbook: Parsed {} rows x {} columns",
        count,
        table.columns().len()
    );
    Ok(table)
}

fn header_text(data: &Data) -> String {
    match data_to_cell(data) {
        Cell::Empty => String::new(),
        cell => cell.to_string(),
    }
}

fn data_to_cell(data: &Data) -> Cell {
    match data {
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) if f.is_nan() => Cell::Empty,
        Data::Float(f) => Cell::Number(*f),
        Data::String(s) if s.trim().is_empty() => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ndt) => Cell::Text(format_cell_datetime(&ndt)),
            None => Cell::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) => Cell::Text(s.clone()),
        Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => {
            log::warn!("[NICU] workbook: Error cell {:?} read as empty", e);
            Cell::Empty
        }
        Data::Empty => Cell::Empty,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    /// One worksheet cell for [`build_xlsx`].
    pub enum XCell<'a> {
        Str(&'a str),
        Num(f64),
    }

    fn column_letter(col: usize) -> char {
        (b'A' + col as u8) as char
    }

    /// Build a minimal single-sheet XLSX in memory.
    pub fn build_xlsx(rows: &[Vec<XCell<'_>>]) -> Vec<u8> {
        let mut strings: Vec<String> = Vec::new();
        let mut sheet_data = String::new();
        for (r, row) in rows.iter().enumerate() {
            sheet_data.push_str(&format!(r#"<row r="{}">"#, r + 1));
            for (c, cell) in row.iter().enumerate() {
                let reference = format!("{}{}", column_letter(c), r + 1);
                match cell {
                    XCell::Str(s) => {
                        let idx = strings.len();
                        strings.push(s.to_string());
                        sheet_data.push_str(&format!(r#"<c r="{}" t="s"><v>{}</v></c>"#, reference, idx));
                    }
                    XCell::Num(n) => {
                        sheet_data.push_str(&format!(r#"<c r="{}"><v>{}</v></c>"#, reference, n));
                    }
                }
            }
            sheet_data.push_str("</row>");
        }

        let shared: String = strings.iter().map(|s| format!("<si><t>{}</t></si>", s)).collect();

        let mut buf = Vec::new();
        {
            let mut zip = ZipWriter::new(Cursor::new(&mut buf));
            let options =
                SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

            zip.start_file("[Content_Types].xml", options).unwrap();
            zip.write_all(br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
<Override PartName="/xl/sharedStrings.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sharedStrings+xml"/>
</Types>"#).unwrap();

            zip.start_file("_rels/.rels", options).unwrap();
            zip.write_all(br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#).unwrap();

            zip.start_file("xl/workbook.xml", options).unwrap();
            zip.write_all(br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
<sheets><sheet name="Sheet1" sheetId="1" r:id="rId1"/></sheets>
</workbook>"#).unwrap();

            zip.start_file("xl/_rels/workbook.xml.rels", options).unwrap();
            zip.write_all(br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/sharedStrings" Target="sharedStrings.xml"/>
</Relationships>"#).unwrap();

            zip.start_file("xl/sharedStrings.xml", options).unwrap();
            zip.write_all(
                format!(
                    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="{0}" uniqueCount="{0}">{1}</sst>"#,
                    strings.len(),
                    shared
                )
                .as_bytes(),
            )
            .unwrap();

            zip.start_file("xl/worksheets/sheet1.xml", options).unwrap();
            zip.write_all(
                format!(
                    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>{}</sheetData></worksheet>"#,
                    sheet_data
                )
                .as_bytes(),
            )
            .unwrap();

            zip.finish().unwrap();
        }
        buf
    }

    #[test]
    fn reads_first_sheet_with_header() {
        let bytes = build_xlsx(&[
            vec![XCell::Str("Date"), XCell::Str("Weight"), XCell::Str("pH")],
            vec![XCell::Str("03-01"), XCell::Num(0.86), XCell::Num(7.31)],
            vec![XCell::Str("03-02"), XCell::Num(0.8), XCell::Num(7.4)],
        ]);
        let table = parse_workbook(bytes).unwrap();
        assert_eq!(table.columns(), ["Date", "Weight", "pH"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.numeric_column("Weight").unwrap(), vec![Some(0.86), Some(0.8)]);
        assert_eq!(table.rows()[1][0], Cell::Text("03-02".into()));
    }

    #[test]
    fn keeps_blank_rows_inside_the_sheet() {
        let bytes = build_xlsx(&[
            vec![XCell::Str("Date"), XCell::Str("Weight")],
            vec![XCell::Str("03-01"), XCell::Num(0.86)],
            vec![],
            vec![XCell::Str("03-03"), XCell::Num(0.9)],
        ]);
        let table = parse_workbook(bytes).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows()[1], vec![Cell::Empty, Cell::Empty]);
        assert_eq!(table.numeric_column("Weight").unwrap(), vec![Some(0.86), None, Some(0.9)]);
    }

    #[test]
    fn garbage_bytes_are_a_workbook_error() {
        let err = parse_workbook(b"definitely not a spreadsheet".to_vec()).unwrap_err();
        assert!(matches!(err, UploadError::Workbook(_)));
    }

    #[test]
    fn maps_calamine_values() {
        assert_eq!(data_to_cell(&Data::Int(3)), Cell::Number(3.0));
        assert_eq!(data_to_cell(&Data::String("  ".into())), Cell::Empty);
        assert_eq!(data_to_cell(&Data::Bool(true)), Cell::Bool(true));
        assert_eq!(
            data_to_cell(&Data::DateTimeIso("2022-03-01".into())),
            Cell::Text("2022-03-01".into())
        );
    }
}
