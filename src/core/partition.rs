use crate::core::zipcode::clean_zip;
use crate::domain::model::{RegionGroup, RegionMap, RosterTable, SplitResult};
use std::collections::HashMap;

/// File name reserved for records without a region.
pub const UNMATCHED_FILE_NAME: &str = "Unmatched_OutOfState_Members.xlsx";

/// Columns appended to the roster headers in every output file.
const APPENDED_HEADERS: [&str; 3] = ["Zip_clean", "County", "Region"];

/// Left-join the roster to the region map on normalized ZIP and split the
/// result into one group per region plus the unmatched bucket.
///
/// Every roster record survives: a record with N matching map entries
/// produces N output rows (duplicate zips in the mapping are not
/// deduplicated); a record with no match, no usable ZIP, or a matching entry
/// whose Region cell was empty produces exactly one unmatched row. Region
/// groups appear in the order they are first seen in the roster.
pub fn merge_and_partition(roster: &RosterTable, map: &RegionMap) -> SplitResult {
    let mut headers = roster.headers.clone();
    headers.extend(APPENDED_HEADERS.iter().map(|h| h.to_string()));

    // zip -> indices of every map entry carrying it, in map order
    let mut index: HashMap<&str, Vec<usize>> = HashMap::new();
    for (i, entry) in map.entries.iter().enumerate() {
        if !entry.zip.is_empty() {
            index.entry(entry.zip.as_str()).or_default().push(i);
        }
    }

    let mut regions: Vec<RegionGroup> = Vec::new();
    let mut region_slots: HashMap<String, usize> = HashMap::new();
    let mut unmatched: Vec<Vec<String>> = Vec::new();

    for record in &roster.records {
        let zip_clean = clean_zip(record.zip_raw(roster.zip_column));

        let matches = zip_clean
            .as_deref()
            .and_then(|zip| index.get(zip))
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        if matches.is_empty() {
            let mut row = record.values.clone();
            row.push(zip_clean.clone().unwrap_or_default());
            row.push(String::new());
            row.push(String::new());
            unmatched.push(row);
            continue;
        }

        for &i in matches {
            let entry = &map.entries[i];
            let mut row = record.values.clone();
            row.push(zip_clean.clone().unwrap_or_default());
            row.push(entry.county.clone());
            row.push(entry.region.clone().unwrap_or_default());

            match &entry.region {
                Some(region) => {
                    let slot = *region_slots.entry(region.clone()).or_insert_with(|| {
                        regions.push(RegionGroup {
                            region: region.clone(),
                            rows: Vec::new(),
                        });
                        regions.len() - 1
                    });
                    regions[slot].rows.push(row);
                }
                // Matched a mapping row with an empty Region cell.
                None => unmatched.push(row),
            }
        }
    }

    SplitResult {
        headers,
        regions,
        unmatched,
    }
}

/// Output file name for one region group. `/` would nest the entry inside
/// the archive and spaces travel badly, so both are replaced.
pub fn partition_file_name(region: &str) -> String {
    let safe = region.replace('/', "-").replace(' ', "_");
    format!("{}_Members.xlsx", safe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{MemberRecord, RegionMapEntry};

    fn roster(rows: Vec<Vec<&str>>) -> RosterTable {
        RosterTable {
            headers: vec!["Name".to_string(), "Zip".to_string()],
            zip_column: 1,
            records: rows
                .into_iter()
                .map(|r| MemberRecord {
                    values: r.into_iter().map(str::to_string).collect(),
                })
                .collect(),
        }
    }

    fn entry(county: &str, zip: &str, region: Option<&str>) -> RegionMapEntry {
        RegionMapEntry {
            county: county.to_string(),
            zip: zip.to_string(),
            region: region.map(str::to_string),
        }
    }

    #[test]
    fn test_matched_record_gets_county_and_region() {
        let roster = roster(vec![vec!["A", "10001-1234"]]);
        let map = RegionMap {
            entries: vec![entry("New York", "10001", Some("NYC"))],
        };

        let result = merge_and_partition(&roster, &map);
        assert_eq!(result.headers, vec!["Name", "Zip", "Zip_clean", "County", "Region"]);
        assert_eq!(result.regions.len(), 1);
        assert_eq!(result.regions[0].region, "NYC");
        assert_eq!(
            result.regions[0].rows[0],
            vec!["A", "10001-1234", "10001", "New York", "NYC"]
        );
        assert!(result.unmatched.is_empty());
    }

    #[test]
    fn test_unmatched_zip_routes_to_unmatched_with_blank_columns() {
        let roster = roster(vec![vec!["B", "00000"]]);
        let map = RegionMap {
            entries: vec![entry("New York", "10001", Some("NYC"))],
        };

        let result = merge_and_partition(&roster, &map);
        assert!(result.regions.is_empty());
        assert_eq!(result.unmatched.len(), 1);
        assert_eq!(result.unmatched[0], vec!["B", "00000", "00000", "", ""]);
    }

    #[test]
    fn test_missing_zip_never_matches() {
        let roster = roster(vec![vec!["C", ""]]);
        let map = RegionMap {
            entries: vec![entry("New York", "10001", Some("NYC"))],
        };

        let result = merge_and_partition(&roster, &map);
        assert_eq!(result.unmatched.len(), 1);
        // Zip_clean column stays empty when nothing could be extracted.
        assert_eq!(result.unmatched[0][2], "");
    }

    #[test]
    fn test_duplicate_map_zips_duplicate_the_record() {
        let roster = roster(vec![vec!["A", "10001"]]);
        let map = RegionMap {
            entries: vec![
                entry("New York", "10001", Some("NYC")),
                entry("New York", "10001", Some("Metro")),
            ],
        };

        let result = merge_and_partition(&roster, &map);
        assert_eq!(result.regions.len(), 2);
        assert_eq!(result.total_rows(), 2);
        assert_eq!(result.regions[0].region, "NYC");
        assert_eq!(result.regions[1].region, "Metro");
    }

    #[test]
    fn test_entry_without_region_routes_to_unmatched_but_keeps_county() {
        let roster = roster(vec![vec!["A", "10001"]]);
        let map = RegionMap {
            entries: vec![entry("New York", "10001", None)],
        };

        let result = merge_and_partition(&roster, &map);
        assert!(result.regions.is_empty());
        assert_eq!(result.unmatched[0], vec!["A", "10001", "10001", "New York", ""]);
    }

    #[test]
    fn test_every_record_lands_in_exactly_one_partition() {
        let roster = roster(vec![
            vec!["A", "10001"],
            vec!["B", "14201"],
            vec!["C", "99999"],
            vec!["D", "not a zip"],
        ]);
        let map = RegionMap {
            entries: vec![
                entry("New York", "10001", Some("NYC")),
                entry("Erie", "14201", Some("Western NY")),
            ],
        };

        let result = merge_and_partition(&roster, &map);
        assert_eq!(result.total_rows(), roster.records.len());
        assert_eq!(result.regions.len(), 2);
        assert_eq!(result.unmatched.len(), 2);
    }

    #[test]
    fn test_groups_appear_in_discovery_order() {
        let roster = roster(vec![
            vec!["A", "14201"],
            vec!["B", "10001"],
            vec!["C", "14201"],
        ]);
        let map = RegionMap {
            entries: vec![
                entry("New York", "10001", Some("NYC")),
                entry("Erie", "14201", Some("Western NY")),
            ],
        };

        let result = merge_and_partition(&roster, &map);
        let order: Vec<&str> = result.regions.iter().map(|g| g.region.as_str()).collect();
        assert_eq!(order, vec!["Western NY", "NYC"]);
        assert_eq!(result.regions[0].rows.len(), 2);
    }

    #[test]
    fn test_partition_file_name_sanitizes_label() {
        assert_eq!(
            partition_file_name("Upstate/North East"),
            "Upstate-North_East_Members.xlsx"
        );
        assert_eq!(partition_file_name("NYC"), "NYC_Members.xlsx");
    }
}
