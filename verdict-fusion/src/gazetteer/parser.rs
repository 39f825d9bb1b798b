//! GeoNames table row parsing.
//!
//! Rows are tab-separated and consumed column-by-position, not by header:
//! primary name at column 1, alternate names (comma-separated) at column
//! 3, feature class at column 6, country code at column 8. Rows with
//! fewer than 9 columns, or with a country code that is not two ASCII
//! letters, are skipped — expected reference-data noise, never an error.

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{CountryCode, GazetteerRecord};

const NAME_COLUMN: usize = 1;
const ALTERNATES_COLUMN: usize = 3;
const FEATURE_CLASS_COLUMN: usize = 6;
const COUNTRY_COLUMN: usize = 8;
const MIN_COLUMNS: usize = 9;

/// Names must be plain Latin text: letters (incl. diacritics), digits,
/// whitespace, hyphens, apostrophes. Anything else (other scripts,
/// punctuation-heavy entries) is dropped before indexing.
static ALLOWED_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9A-Za-zÀ-ÿ\s\-']+$").unwrap());

/// Short alternates without a vowel are abbreviation noise ("NH", "ZH")
/// that would vote on unrelated text.
static HAS_VOWEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)[aeiouyà-ÿ]").unwrap());

/// Parse one tab-separated row. Returns `None` for malformed rows.
pub fn parse_row(line: &str) -> Option<GazetteerRecord> {
    let columns: Vec<&str> = line.split('\t').collect();
    if columns.len() < MIN_COLUMNS {
        return None;
    }

    let country: CountryCode = columns[COUNTRY_COLUMN].trim().parse().ok()?;
    let name = columns[NAME_COLUMN].trim();
    if name.is_empty() {
        return None;
    }

    let alternates = columns[ALTERNATES_COLUMN]
        .split(',')
        .map(str::trim)
        .filter(|alt| !alt.is_empty())
        .map(str::to_string)
        .collect();

    Some(GazetteerRecord {
        name: name.to_string(),
        alternates,
        feature_class: columns[FEATURE_CLASS_COLUMN].trim().to_string(),
        country,
    })
}

/// Whether a lowercased primary name is indexable.
pub(crate) fn primary_name_ok(name: &str) -> bool {
    !name.is_empty() && ALLOWED_NAME.is_match(name)
}

/// Whether a lowercased alternate name is indexable. Alternates carry the
/// stricter filters: minimum length 3 and at least one vowel.
pub(crate) fn alternate_name_ok(name: &str) -> bool {
    primary_name_ok(name) && name.chars().count() >= 3 && HAS_VOWEL.is_match(name)
}
