//! Immutable name→country index and its builder.

use std::path::Path;

use tracing::debug;
use verdict_core::errors::GazetteerError;
use verdict_core::types::collections::{FxHashMap, FxHashSet};

use super::parser;
use super::types::{CountryCode, GazetteerRecord};

/// Immutable lookup table from lowercased place name to country code.
///
/// Built once per process run, then shared read-only across all item
/// evaluations. Lookup is exact case-insensitive match only — no fuzzy
/// or partial matching.
#[derive(Debug, Clone, Default)]
pub struct GazetteerIndex {
    entries: FxHashMap<String, CountryCode>,
}

impl GazetteerIndex {
    /// Resolve a candidate name to a country code.
    pub fn resolve(&self, name: &str) -> Option<CountryCode> {
        self.entries.get(name.trim().to_lowercase().as_str()).copied()
    }

    /// Number of indexed names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge several per-country tables into one index.
    ///
    /// Collision policy is last-writer-wins: a name shared by two tables
    /// resolves to the table merged last. Deterministic for a fixed merge
    /// order; a cross-border place name silently loses its earlier
    /// assignment.
    pub fn merge(tables: impl IntoIterator<Item = GazetteerIndex>) -> GazetteerIndex {
        let mut entries = FxHashMap::default();
        for table in tables {
            entries.extend(table.entries);
        }
        GazetteerIndex { entries }
    }

    fn insert(&mut self, name: String, country: CountryCode) {
        self.entries.insert(name, country);
    }
}

/// Builder applying the scope and name filters while accumulating an
/// index. Rows that fail any filter are skipped and counted, never
/// raised.
#[derive(Debug, Clone)]
pub struct GazetteerBuilder {
    keep_countries: FxHashSet<CountryCode>,
    keep_feature_classes: FxHashSet<String>,
    keep_alternates: bool,
}

impl GazetteerBuilder {
    pub fn new(
        keep_countries: impl IntoIterator<Item = CountryCode>,
        keep_feature_classes: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            keep_countries: keep_countries.into_iter().collect(),
            keep_feature_classes: keep_feature_classes.into_iter().collect(),
            keep_alternates: true,
        }
    }

    /// Whether alternate names are indexed alongside primary names.
    pub fn keep_alternates(mut self, keep: bool) -> Self {
        self.keep_alternates = keep;
        self
    }

    /// Build an index from already-parsed records.
    pub fn build_from_records(
        &self,
        records: impl IntoIterator<Item = GazetteerRecord>,
    ) -> GazetteerIndex {
        let mut index = GazetteerIndex::default();
        let mut skipped = 0usize;

        for record in records {
            if !self.keep_countries.contains(&record.country)
                || !self.keep_feature_classes.contains(&record.feature_class)
            {
                skipped += 1;
                continue;
            }

            let primary = record.name.to_lowercase();
            if parser::primary_name_ok(&primary) {
                index.insert(primary, record.country);
            }

            if self.keep_alternates {
                for alternate in &record.alternates {
                    let alternate = alternate.to_lowercase();
                    if parser::alternate_name_ok(&alternate) {
                        index.insert(alternate, record.country);
                    }
                }
            }
        }

        debug!(entries = index.len(), skipped, "gazetteer table built");
        index
    }

    /// Build an index from raw tab-separated lines, skipping malformed
    /// rows.
    pub fn build_from_lines<'a>(
        &self,
        lines: impl IntoIterator<Item = &'a str>,
    ) -> GazetteerIndex {
        self.build_from_records(lines.into_iter().filter_map(parser::parse_row))
    }

    /// Build an index from a table file on disk. The only I/O entry point
    /// in the crate; file-level failures surface as `GazetteerError::Io`.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<GazetteerIndex, GazetteerError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| GazetteerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.build_from_lines(raw.lines()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cc(code: &str) -> CountryCode {
        code.parse().unwrap()
    }

    fn builder(countries: &[&str]) -> GazetteerBuilder {
        GazetteerBuilder::new(
            countries.iter().map(|c| cc(c)),
            ["P".to_string(), "A".to_string()],
        )
    }

    fn record(name: &str, alternates: &[&str], class: &str, country: &str) -> GazetteerRecord {
        GazetteerRecord {
            name: name.to_string(),
            alternates: alternates.iter().map(|s| s.to_string()).collect(),
            feature_class: class.to_string(),
            country: cc(country),
        }
    }

    #[test]
    fn indexes_primary_and_alternates_lowercased() {
        let index = builder(&["NL"])
            .build_from_records([record("Maastricht", &["Mestreech", "NH"], "P", "NL")]);
        assert_eq!(index.resolve("maastricht"), Some(cc("NL")));
        assert_eq!(index.resolve("MESTREECH"), Some(cc("NL")));
        // Two-letter alternate filtered out.
        assert_eq!(index.resolve("nh"), None);
    }

    #[test]
    fn drops_out_of_scope_countries_and_classes() {
        let index = builder(&["NL"]).build_from_records([
            record("Aachen", &[], "P", "DE"),
            record("Meuse", &[], "H", "NL"),
        ]);
        assert!(index.is_empty());
    }

    #[test]
    fn keep_alternates_false_indexes_primaries_only() {
        let index = builder(&["NL"])
            .keep_alternates(false)
            .build_from_records([record("Maastricht", &["Mestreech"], "P", "NL")]);
        assert_eq!(index.resolve("Maastricht"), Some(cc("NL")));
        assert_eq!(index.resolve("Mestreech"), None);
    }

    #[test]
    fn resolve_is_exact_match_only() {
        let index = builder(&["NL"]).build_from_records([record("Maastricht", &[], "P", "NL")]);
        assert_eq!(index.resolve("Maastrich"), None);
        assert_eq!(index.resolve("Maastricht centrum"), None);
        assert_eq!(index.resolve("  Maastricht  "), Some(cc("NL")));
    }

    #[test]
    fn merge_is_last_writer_wins() {
        let nl = builder(&["NL"]).build_from_records([record("Borderville", &[], "P", "NL")]);
        let de = builder(&["DE"]).build_from_records([record("Borderville", &[], "P", "DE")]);

        let nl_then_de = GazetteerIndex::merge([nl.clone(), de.clone()]);
        assert_eq!(nl_then_de.resolve("borderville"), Some(cc("DE")));

        // Reversing the merge order flips the colliding assignment.
        let de_then_nl = GazetteerIndex::merge([de, nl]);
        assert_eq!(de_then_nl.resolve("borderville"), Some(cc("NL")));
    }

    #[test]
    fn build_from_lines_skips_malformed_rows() {
        let lines = [
            "1\tMaastricht\tMaastricht\t\t50.8\t5.7\tP\tPPL\tNL",
            "garbage row",
            "2\tAachen\tAachen\t\t50.7\t6.1\tP\tPPL\tDE",
        ];
        let index = builder(&["NL", "DE"]).build_from_lines(lines);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn load_path_reads_table_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("NL.txt");
        std::fs::write(
            &path,
            "1\tMaastricht\tMaastricht\tMestreech\t50.8\t5.7\tP\tPPL\tNL\n",
        )
        .unwrap();
        let index = builder(&["NL"]).load_path(&path).unwrap();
        assert_eq!(index.resolve("mestreech"), Some(cc("NL")));
    }

    #[test]
    fn load_path_missing_file_is_io_error() {
        let err = builder(&["NL"]).load_path("/nonexistent/NL.txt").unwrap_err();
        assert!(matches!(err, GazetteerError::Io { .. }));
    }
}
