//! Votes and the label matrix.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A labeling function's opinion on one item.
///
/// Abstain is an explicit non-vote, distinct from a negative vote: an
/// abstaining function contributes nothing to the posterior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Vote {
    Abstain,
    Negative,
    Positive,
}

impl Vote {
    /// Integer encoding used by the export format: -1, 0, 1.
    pub fn as_i8(self) -> i8 {
        match self {
            Self::Abstain => -1,
            Self::Negative => 0,
            Self::Positive => 1,
        }
    }

    pub fn is_abstain(self) -> bool {
        matches!(self, Self::Abstain)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Abstain => "abstain",
            Self::Negative => "negative",
            Self::Positive => "positive",
        }
    }
}

impl From<Vote> for i8 {
    fn from(vote: Vote) -> i8 {
        vote.as_i8()
    }
}

impl TryFrom<i8> for Vote {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::Abstain),
            0 => Ok(Self::Negative),
            1 => Ok(Self::Positive),
            other => Err(format!("invalid vote value {other}, expected -1, 0, or 1")),
        }
    }
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An n-items × m-functions table of votes, row-major.
///
/// Rows are independent items; every cell is a `Vote` by construction,
/// so the {-1, 0, 1} invariant holds by type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMatrix {
    n_functions: usize,
    cells: Vec<Vote>,
}

impl LabelMatrix {
    /// Create an empty matrix for `n_functions` columns.
    pub fn new(n_functions: usize) -> Self {
        Self {
            n_functions,
            cells: Vec::new(),
        }
    }

    /// Build a matrix from per-item vote rows.
    ///
    /// Rows shorter or longer than `n_functions` are a caller bug and
    /// panic; the applier always produces full rows.
    pub fn from_rows(n_functions: usize, rows: impl IntoIterator<Item = Vec<Vote>>) -> Self {
        let mut matrix = Self::new(n_functions);
        for row in rows {
            matrix.push_row(&row);
        }
        matrix
    }

    /// Append one item's votes.
    pub fn push_row(&mut self, row: &[Vote]) {
        assert_eq!(
            row.len(),
            self.n_functions,
            "label row width mismatch: got {}, expected {}",
            row.len(),
            self.n_functions
        );
        self.cells.extend_from_slice(row);
    }

    /// Number of items.
    pub fn n_rows(&self) -> usize {
        if self.n_functions == 0 {
            0
        } else {
            self.cells.len() / self.n_functions
        }
    }

    /// Number of functions (columns).
    pub fn n_functions(&self) -> usize {
        self.n_functions
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// One item's votes.
    pub fn row(&self, index: usize) -> &[Vote] {
        let start = index * self.n_functions;
        &self.cells[start..start + self.n_functions]
    }

    /// Iterate over item rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Vote]> {
        self.cells.chunks_exact(self.n_functions)
    }
}
