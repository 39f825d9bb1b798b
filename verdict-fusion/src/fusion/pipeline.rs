//! The batch fusion pipeline.

use rayon::prelude::*;
use serde::Serialize;
use tracing::info;
use verdict_core::config::FusionConfig;
use verdict_core::errors::{FusionError, GazetteerError};
use verdict_core::types::collections::FxHashSet;

use crate::gate::ThresholdGate;
use crate::gazetteer::{CountryCode, GazetteerIndex};
use crate::geo;
use crate::label_model::{LabelModel, LabelModelEstimator};
use crate::labeling::{FunctionDiagnostics, LabelingFunctionSet};

use super::types::{ArticleSignals, FusionResult};

/// Batch statistics for one fusion pass.
#[derive(Debug, Clone, Serialize)]
pub struct FusionReport {
    pub items: usize,
    /// Items confidently resolved to a country.
    pub country_resolved: usize,
    /// Items marked uncertain on the geo path.
    pub country_uncertain: usize,
    /// Items gated positive on the SME path.
    pub sme_positive: usize,
    pub function_diagnostics: Vec<FunctionDiagnostics>,
    /// The fitted label model, for inspection and export.
    pub label_model: Option<LabelModel>,
}

/// Runs both evidence paths over a batch and gates the outcomes.
///
/// Holds only read-only state (index, function set, config), so one
/// pipeline value can serve any number of batches. The label model is
/// re-fitted from scratch on every run — there is no incremental or
/// online update.
pub struct FusionPipeline {
    index: GazetteerIndex,
    functions: LabelingFunctionSet,
    targets: FxHashSet<CountryCode>,
    config: FusionConfig,
}

impl FusionPipeline {
    /// Build a pipeline, validating the configuration up front.
    pub fn new(
        config: FusionConfig,
        index: GazetteerIndex,
        functions: LabelingFunctionSet,
    ) -> Result<Self, FusionError> {
        FusionConfig::validate(&config)?;
        let targets = parse_targets(&config.geo.target_countries)?;
        Ok(Self {
            index,
            functions,
            targets,
            config,
        })
    }

    /// Run one fusion pass over a batch.
    ///
    /// Per-item work (geo voting, labeling) runs as a parallel map over
    /// shared read-only state; the estimator fit is single-threaded.
    /// An empty batch yields an empty result set and no fitted model.
    pub fn run(
        &self,
        items: &[ArticleSignals],
    ) -> Result<(Vec<FusionResult>, FusionReport), FusionError> {
        if items.is_empty() {
            return Ok((
                Vec::new(),
                FusionReport {
                    items: 0,
                    country_resolved: 0,
                    country_uncertain: 0,
                    sme_positive: 0,
                    function_diagnostics: Vec::new(),
                    label_model: None,
                },
            ));
        }

        // Geo path: one vote per item.
        let geo_votes: Vec<geo::GeoVote> = items
            .par_iter()
            .map(|item| {
                geo::vote(
                    &item.candidate_places,
                    &self.index,
                    &self.targets,
                    self.config.geo.min_confidence,
                )
            })
            .collect();

        // SME path: label matrix, diagnostics, fit, posteriors.
        let texts: Vec<&str> = items.iter().map(|item| item.text.as_str()).collect();
        let matrix = self.functions.apply(&texts);
        let names = self.functions.names();

        let diagnostics = FunctionDiagnostics::from_matrix(&matrix, &names);
        FunctionDiagnostics::log_report(&diagnostics);

        let estimator = LabelModelEstimator::new(self.config.estimator.clone());
        let model = estimator.fit(&matrix, &names)?;
        let posteriors = model.predict(&matrix)?;

        let gate = ThresholdGate::from_config(&self.config.gate);
        let results: Vec<FusionResult> = geo_votes
            .into_iter()
            .zip(posteriors)
            .map(|(vote, sme_probability)| FusionResult {
                country: vote.resolution.label(),
                country_score: vote.confidence,
                country_evidence: vote.evidence,
                sme_probability,
                sme_label: gate.binary_label(sme_probability),
            })
            .collect();

        let country_resolved = results.iter().filter(|r| r.country != "uncertain").count();
        let sme_positive = results.iter().filter(|r| r.sme_label == 1).count();
        let report = FusionReport {
            items: results.len(),
            country_resolved,
            country_uncertain: results.len() - country_resolved,
            sme_positive,
            function_diagnostics: diagnostics,
            label_model: Some(model),
        };

        info!(
            items = report.items,
            country_resolved = report.country_resolved,
            sme_positive = report.sme_positive,
            "fusion pass complete"
        );

        Ok((results, report))
    }
}

fn parse_targets(codes: &[String]) -> Result<FxHashSet<CountryCode>, GazetteerError> {
    codes.iter().map(|code| code.parse()).collect()
}
