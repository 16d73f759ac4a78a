use ndarray::Array2;
use serde::Deserialize;

use super::types::ItemIndex;
use crate::errors::RatingError;

pub type Outcome = Option<f64>;

/// Square table of pairwise outcomes. Cell `(i, j)` is `i`'s result against
/// `j`: `1.0` win, `0.0` loss, `0.5` draw, `None` when never compared.
///
/// Only the strict upper triangle is ever read by the processor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Vec<Vec<Outcome>>")]
pub struct ComparisonMatrix {
    cells: Array2<Outcome>,
}

impl ComparisonMatrix {
    /// Builds a matrix from nested rows, rejecting ragged or non-square input.
    pub fn from_rows(rows: &[Vec<Outcome>]) -> Result<Self, RatingError> {
        let n = rows.len();
        validate_shape(rows, n)?;

        let cells = Array2::from_shape_fn((n, n), |(i, j)| rows[i][j]);
        Ok(Self { cells })
    }

    /// An `n`×`n` matrix with no comparisons recorded.
    pub fn unknown(n: usize) -> Self {
        Self {
            cells: Array2::from_elem((n, n), None),
        }
    }

    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Returns `None` for unknown cells and for indices out of range.
    pub fn get(&self, i: ItemIndex, j: ItemIndex) -> Outcome {
        self.cells.get((i, j)).copied().flatten()
    }

    /// Panics if `i` or `j` is out of range.
    pub fn set(&mut self, i: ItemIndex, j: ItemIndex, outcome: Outcome) {
        self.cells[[i, j]] = outcome;
    }

    /// Recorded cells above the diagonal, row-major.
    pub fn recorded_upper_triangle(&self) -> impl Iterator<Item = (ItemIndex, ItemIndex, f64)> + '_ {
        let n = self.size();
        (0..n)
            .flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
            .filter_map(move |(i, j)| self.cells[[i, j]].map(|result| (i, j, result)))
    }

    pub fn recorded_pairs(&self) -> usize {
        self.recorded_upper_triangle().count()
    }
}

impl TryFrom<Vec<Vec<Outcome>>> for ComparisonMatrix {
    type Error = RatingError;

    fn try_from(rows: Vec<Vec<Outcome>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

fn validate_shape(rows: &[Vec<Outcome>], expected: usize) -> Result<(), RatingError> {
    match rows.iter().position(|row| row.len() != expected) {
        Some(row) => Err(RatingError::Shape {
            row,
            expected,
            actual: rows[row].len(),
        }),
        None => Ok(()),
    }
}
