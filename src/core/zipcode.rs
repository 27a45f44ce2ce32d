use once_cell::sync::Lazy;
use regex::Regex;

static ZIP5_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{5}\b").expect("zip pattern"));

/// Extract the first standalone run of exactly 5 digits from free text.
/// ZIP+4 values like `10001-1234` yield `10001`; 9 contiguous digits, letters
/// or an empty value yield `None`. Absence is a normal outcome and routes the
/// record to the unmatched bucket.
pub fn clean_zip(raw: &str) -> Option<String> {
    ZIP5_RE.find(raw).map(|m| m.as_str().to_string())
}

/// Left-pad a mapping-sheet zip to 5 characters with zeros, so numeric cells
/// like `1001` line up with cleaned roster zips (`01001`). Longer strings are
/// returned unchanged.
pub fn pad_zip5(raw: &str) -> String {
    format!("{:0>5}", raw)
}
