use crate::core::zipcode::pad_zip5;
use crate::domain::model::{RawSheet, RegionMap, RegionMapEntry};
use crate::utils::error::{Result, SplitError};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use std::io::Cursor;

/// Read every sheet of the region workbook. The format is detected from the
/// content, so both `.xls` and `.xlsx` uploads work. The first row of each
/// sheet is a header row and is dropped; original header names are ignored
/// because the columns are taken positionally.
pub fn parse_region_workbook(bytes: &[u8]) -> Result<Vec<RawSheet>> {
    let cursor = Cursor::new(bytes.to_vec());
    let mut workbook = open_workbook_auto_from_rs(cursor)?;

    let mut sheets = Vec::new();
    for (name, range) in workbook.worksheets() {
        let width = range.width();
        let mut data_rows = range.rows();
        data_rows.next(); // header row

        let rows: Vec<Vec<Option<String>>> = data_rows
            .map(|row| row.iter().map(cell_to_string).collect())
            .collect();

        tracing::debug!("Sheet '{}': {} columns, {} data rows", name, width, rows.len());
        sheets.push(RawSheet { name, width, rows });
    }

    Ok(sheets)
}

/// Build the unified County/Zip/Region table: first three columns of every
/// sheet, relabelled positionally, zips zero-padded to 5 characters, all
/// sheets concatenated in workbook order. Duplicate rows are kept on
/// purpose; the join later emits one output row per matching entry.
pub fn build_region_map(sheets: &[RawSheet]) -> Result<RegionMap> {
    let mut entries = Vec::new();

    for sheet in sheets {
        if sheet.width < 3 {
            return Err(SplitError::MapFormatError {
                sheet: sheet.name.clone(),
                columns: sheet.width,
            });
        }

        for row in &sheet.rows {
            let county = row.first().cloned().flatten();
            let zip = row.get(1).cloned().flatten();
            let region = row.get(2).cloned().flatten();

            if county.is_none() && zip.is_none() && region.is_none() {
                continue;
            }

            entries.push(RegionMapEntry {
                county: county.unwrap_or_default(),
                // An empty zip cell stays empty rather than being padded to
                // "00000", which would falsely match a real roster zip.
                zip: zip.map(|z| pad_zip5(&z)).unwrap_or_default(),
                region,
            });
        }
    }

    Ok(RegionMap { entries })
}

fn cell_to_string(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) => {
            if s.trim().is_empty() {
                None
            } else {
                Some(s.clone())
            }
        }
        // Numeric zip columns come back as floats; render whole numbers
        // without the trailing ".0" so padding lines up.
        Data::Float(f) if f.fract() == 0.0 => Some(format!("{}", *f as i64)),
        Data::Int(i) => Some(i.to_string()),
        other => Some(other.to_string()),
    }
}
