use crate::utils::error::Result;
use rust_xlsxwriter::Workbook;

/// Serialize one header row plus data rows into a single-sheet `.xlsx`
/// file, returned as bytes ready for the archive. All cells are written as
/// strings; the roster is stringly data and zips must keep leading zeros.
pub fn write_worksheet(headers: &[String], rows: &[Vec<String>]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, header)?;
    }

    for (r, row) in rows.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            worksheet.write_string((r + 1) as u32, col as u16, value)?;
        }
    }

    let bytes = workbook.save_to_buffer()?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{open_workbook_auto_from_rs, Data, Reader};
    use std::io::Cursor;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_round_trips_headers_and_rows() {
        let bytes = write_worksheet(
            &headers(&["Name", "Zip_clean", "Region"]),
            &[
                vec!["A".to_string(), "01001".to_string(), "Capital".to_string()],
                vec!["B".to_string(), "10001".to_string(), "NYC".to_string()],
            ],
        )
        .unwrap();

        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes)).unwrap();
        let sheets = workbook.worksheets();
        assert_eq!(sheets.len(), 1);

        let range = &sheets[0].1;
        assert_eq!(range.height(), 3);
        assert_eq!(range.width(), 3);
        assert_eq!(range.get_value((0, 0)), Some(&Data::String("Name".to_string())));
        // Leading zeros survive because every cell is a string.
        assert_eq!(range.get_value((1, 1)), Some(&Data::String("01001".to_string())));
        assert_eq!(range.get_value((2, 2)), Some(&Data::String("NYC".to_string())));
    }

    #[test]
    fn test_empty_row_set_still_produces_a_sheet_with_headers() {
        let bytes = write_worksheet(&headers(&["Name", "Zip"]), &[]).unwrap();

        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes)).unwrap();
        let sheets = workbook.worksheets();
        let range = &sheets[0].1;
        assert_eq!(range.height(), 1);
        assert_eq!(range.width(), 2);
    }
}
