//! Country voting over candidate place names.

use smallvec::SmallVec;
use verdict_core::types::collections::{FxHashMap, FxHashSet};

use crate::confidence::beta;
use crate::gazetteer::{CountryCode, GazetteerIndex};

use super::types::{CountryTally, GeoEvidence, GeoResolution, GeoVote};

/// Resolve an article's candidate place names to a country.
///
/// Each candidate that resolves inside the target set casts one vote for
/// its country and one evidence entry. The winner is the country with the
/// most votes; ties break to the lexicographically smallest country code.
/// Confidence is the winner's vote share. Below `threshold` the outcome
/// is `Uncertain`, with the score and evidence retained; a share exactly
/// equal to the threshold is accepted. Zero matches yield exactly
/// (`Uncertain`, 0.0, no evidence).
///
/// Pure and deterministic: no I/O, no retries, no shared mutable state.
pub fn vote(
    candidates: &[impl AsRef<str>],
    index: &GazetteerIndex,
    target_countries: &FxHashSet<CountryCode>,
    threshold: f64,
) -> GeoVote {
    let mut counts: FxHashMap<CountryCode, u32> = FxHashMap::default();
    let mut evidence = Vec::new();

    for candidate in candidates {
        let candidate = candidate.as_ref();
        if let Some(country) = index.resolve(candidate) {
            if target_countries.contains(&country) {
                *counts.entry(country).or_insert(0) += 1;
                evidence.push(GeoEvidence {
                    name: candidate.to_string(),
                    country,
                });
            }
        }
    }

    let total: u32 = counts.values().sum();
    if total == 0 {
        return GeoVote::uncertain();
    }

    let mut tallies: SmallVec<[CountryTally; 4]> = counts
        .into_iter()
        .map(|(country, votes)| CountryTally { country, votes })
        .collect();
    tallies.sort_unstable_by_key(|t| t.country);

    // Most votes wins; vote ties break to the smallest country code so
    // the outcome is independent of map iteration order.
    let winner = tallies
        .iter()
        .copied()
        .max_by(|a, b| {
            a.votes
                .cmp(&b.votes)
                .then_with(|| b.country.cmp(&a.country))
        })
        .unwrap_or(tallies[0]);

    let confidence = f64::from(winner.votes) / f64::from(total);
    let (alpha, beta_param) =
        beta::posterior_params(u64::from(winner.votes), u64::from(total));
    let credible_interval = beta::credible_interval(alpha, beta_param, 0.95);

    let resolution = if confidence < threshold {
        GeoResolution::Uncertain
    } else {
        GeoResolution::Country(winner.country)
    };

    GeoVote {
        resolution,
        confidence,
        tallies,
        total,
        evidence,
        credible_interval,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gazetteer::{GazetteerBuilder, GazetteerRecord};

    fn cc(code: &str) -> CountryCode {
        code.parse().unwrap()
    }

    fn test_index() -> GazetteerIndex {
        let builder = GazetteerBuilder::new(
            [cc("NL"), cc("DE"), cc("BE")],
            ["P".to_string()],
        );
        builder.build_from_records([
            GazetteerRecord {
                name: "Maastricht".into(),
                alternates: vec![],
                feature_class: "P".into(),
                country: cc("NL"),
            },
            GazetteerRecord {
                name: "Aachen".into(),
                alternates: vec![],
                feature_class: "P".into(),
                country: cc("DE"),
            },
            GazetteerRecord {
                name: "Luik".into(),
                alternates: vec![],
                feature_class: "P".into(),
                country: cc("BE"),
            },
        ])
    }

    fn targets() -> FxHashSet<CountryCode> {
        [cc("NL"), cc("DE"), cc("BE")].into_iter().collect()
    }

    #[test]
    fn majority_wins_with_vote_share_confidence() {
        let result = vote(
            &["Maastricht", "Maastricht", "Aachen"],
            &test_index(),
            &targets(),
            0.6,
        );
        assert_eq!(result.resolution, GeoResolution::Country(cc("NL")));
        assert!((result.confidence - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(result.total, 3);
        assert_eq!(result.evidence.len(), 3);
    }

    #[test]
    fn no_matches_is_exactly_uncertain_zero_empty() {
        let result = vote(&["Atlantis", "Shangri-La"], &test_index(), &targets(), 0.6);
        assert_eq!(result.resolution, GeoResolution::Uncertain);
        assert_eq!(result.confidence, 0.0);
        assert!(result.evidence.is_empty());
        assert!(result.tallies.is_empty());
        assert_eq!(result.total, 0);
    }

    #[test]
    fn below_threshold_keeps_score_and_evidence() {
        // 2/4 = 0.5 < 0.6: uncertain, but the evidence is not discarded.
        let result = vote(
            &["Maastricht", "Maastricht", "Aachen", "Luik"],
            &test_index(),
            &targets(),
            0.6,
        );
        assert_eq!(result.resolution, GeoResolution::Uncertain);
        assert!((result.confidence - 0.5).abs() < 1e-12);
        assert_eq!(result.evidence.len(), 4);
    }

    #[test]
    fn share_equal_to_threshold_is_accepted() {
        // 3/5 = 0.6 exactly.
        let result = vote(
            &["Maastricht", "Maastricht", "Maastricht", "Aachen", "Luik"],
            &test_index(),
            &targets(),
            0.6,
        );
        assert_eq!(result.resolution, GeoResolution::Country(cc("NL")));
    }

    #[test]
    fn tie_breaks_to_smallest_country_code() {
        let result = vote(
            &["Maastricht", "Aachen"],
            &test_index(),
            &targets(),
            0.0,
        );
        // NL and DE tie 1-1; DE sorts first.
        assert_eq!(result.resolution, GeoResolution::Country(cc("DE")));
    }

    #[test]
    fn out_of_target_countries_cast_no_votes() {
        let narrow: FxHashSet<CountryCode> = [cc("NL")].into_iter().collect();
        let result = vote(&["Aachen", "Maastricht"], &test_index(), &narrow, 0.5);
        assert_eq!(result.resolution, GeoResolution::Country(cc("NL")));
        assert_eq!(result.total, 1);
    }

    #[test]
    fn tallies_sum_to_total() {
        let result = vote(
            &["Maastricht", "Aachen", "Aachen", "Luik"],
            &test_index(),
            &targets(),
            0.6,
        );
        let sum: u32 = result.tallies.iter().map(|t| t.votes).sum();
        assert_eq!(sum, result.total);
    }
}
