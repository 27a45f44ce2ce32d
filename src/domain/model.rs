use serde::{Deserialize, Serialize};

/// One roster row: an ordered bag of string values parallel to
/// `RosterTable::headers`. No schema is imposed beyond the required ZIP
/// column tracked by the table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberRecord {
    pub values: Vec<String>,
}

impl MemberRecord {
    pub fn zip_raw(&self, zip_column: usize) -> &str {
        self.values.get(zip_column).map(String::as_str).unwrap_or("")
    }
}

/// The member roster as loaded: column headers, the index of the `Zip`
/// column, and every row in file order.
#[derive(Debug, Clone)]
pub struct RosterTable {
    pub headers: Vec<String>,
    pub zip_column: usize,
    pub records: Vec<MemberRecord>,
}

/// One mapping sheet as read from the workbook. `width` is the used column
/// count of the sheet (header row included); `rows` are the data rows with
/// the header row already dropped. Empty cells are `None`.
#[derive(Debug, Clone)]
pub struct RawSheet {
    pub name: String,
    pub width: usize,
    pub rows: Vec<Vec<Option<String>>>,
}

/// One row of the unified region map: the first three sheet columns
/// relabelled positionally. `region` is `None` when the cell was empty; such
/// entries still join but route the member to the unmatched bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionMapEntry {
    pub county: String,
    pub zip: String,
    pub region: Option<String>,
}

/// The unified County/Zip/Region table, all sheets concatenated in order.
/// Duplicate zips are preserved; the join emits one row per matching entry.
#[derive(Debug, Clone, Default)]
pub struct RegionMap {
    pub entries: Vec<RegionMapEntry>,
}

impl RegionMap {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Both inputs after the load stage, before any transformation.
#[derive(Debug, Clone)]
pub struct SourceData {
    pub roster: RosterTable,
    pub sheets: Vec<RawSheet>,
}

/// All matched rows for one region, in roster order.
#[derive(Debug, Clone)]
pub struct RegionGroup {
    pub region: String,
    pub rows: Vec<Vec<String>>,
}

/// Output of the transform stage: the final column set and every row routed
/// to exactly one group.
#[derive(Debug, Clone)]
pub struct SplitResult {
    /// Roster headers followed by `Zip_clean`, `County`, `Region`.
    pub headers: Vec<String>,
    /// One group per distinct region, in discovery order.
    pub regions: Vec<RegionGroup>,
    /// Rows with no region: failed join, un-normalizable ZIP, or a mapping
    /// row with an empty Region cell.
    pub unmatched: Vec<Vec<String>>,
}

impl SplitResult {
    /// Total output rows across all partitions, join multiplicity included.
    pub fn total_rows(&self) -> usize {
        self.regions.iter().map(|g| g.rows.len()).sum::<usize>() + self.unmatched.len()
    }
}
