//! The labeling function contract and explicit registration.

use rayon::prelude::*;

use super::types::{LabelMatrix, Vote};

/// A single rule-based voter.
///
/// Implementations must be pure and side-effect-free: the vote is a
/// function of the item text alone, never of other functions' outputs or
/// of prior calls. This keeps batch application embarrassingly parallel.
pub trait LabelingFunction: Send + Sync {
    /// Stable identifier, used in diagnostics and reliability reports.
    fn name(&self) -> &str;

    /// Vote on one item's text.
    fn label(&self, text: &str) -> Vote;
}

/// An ordered, explicitly-registered collection of labeling functions.
///
/// Registration is plain configuration: build the set, push functions,
/// pass it to the applier and estimator. There is no global registry;
/// adding or removing a function never touches the estimator.
#[derive(Default)]
pub struct LabelingFunctionSet {
    functions: Vec<Box<dyn LabelingFunction>>,
}

impl LabelingFunctionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a function at the end of the set.
    pub fn push(&mut self, function: Box<dyn LabelingFunction>) {
        self.functions.push(function);
    }

    /// Builder-style registration.
    pub fn with(mut self, function: impl LabelingFunction + 'static) -> Self {
        self.functions.push(Box::new(function));
        self
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Function names in registration order.
    pub fn names(&self) -> Vec<String> {
        self.functions.iter().map(|f| f.name().to_string()).collect()
    }

    /// Vote every function on one item.
    pub fn label_row(&self, text: &str) -> Vec<Vote> {
        self.functions.iter().map(|f| f.label(text)).collect()
    }

    /// Apply the whole set to a batch of items.
    ///
    /// Items are independent and the set is read-only, so rows are
    /// computed with a parallel map. Row order matches item order.
    pub fn apply(&self, texts: &[impl AsRef<str> + Sync]) -> LabelMatrix {
        let rows: Vec<Vec<Vote>> = texts
            .par_iter()
            .map(|text| self.label_row(text.as_ref()))
            .collect();
        LabelMatrix::from_rows(self.len(), rows)
    }
}

impl std::fmt::Debug for LabelingFunctionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelingFunctionSet")
            .field("functions", &self.names())
            .finish()
    }
}
