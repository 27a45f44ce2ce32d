use crate::domain::model::{MemberRecord, RosterTable};
use crate::utils::error::{Result, SplitError};

/// Column the roster must carry. Matching is exact, as exported by the
/// membership system.
pub const ZIP_HEADER: &str = "Zip";

/// Parse the member export CSV. Columns are arbitrary and kept in file
/// order; the only requirement is a `Zip` header.
pub fn parse_roster(bytes: &[u8]) -> Result<RosterTable> {
    let mut reader = csv::Reader::from_reader(bytes);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let zip_column = headers
        .iter()
        .position(|h| h == ZIP_HEADER)
        .ok_or_else(|| SplitError::LoadError {
            message: format!("member export has no '{}' column", ZIP_HEADER),
        })?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(MemberRecord {
            values: row.iter().map(str::to_string).collect(),
        });
    }

    tracing::debug!(
        "Parsed roster: {} columns, {} records, zip column at index {}",
        headers.len(),
        records.len(),
        zip_column
    );

    Ok(RosterTable {
        headers,
        zip_column,
        records,
    })
}
