use log::{debug, info};
use ndarray::Array1;

use super::matrix::{ComparisonMatrix, Outcome};
use super::types::{Ranking, RatingValue, UpdateOrder};
use super::update::update;
use crate::errors::RatingError;

/// Rates every item in `matrix` and returns them ordered by rating.
///
/// Pairs are visited row-major over the strict upper triangle. For each
/// recorded pair, `i` is updated against `j` first, then `j` against the
/// rating `i` held before this pair.
pub fn process(
    matrix: &ComparisonMatrix,
    initial_rating: RatingValue,
    k: f64,
) -> Result<Ranking, RatingError> {
    process_with_order(matrix, initial_rating, k, UpdateOrder::Snapshot)
}

/// Like [`process`], with explicit control over which rating of `i` the
/// second update of each pair reads.
pub fn process_with_order(
    matrix: &ComparisonMatrix,
    initial_rating: RatingValue,
    k: f64,
    order: UpdateOrder,
) -> Result<Ranking, RatingError> {
    let n_items = matrix.size();
    info!(
        "Processing {}x{} comparison matrix ({} recorded pairs, {} order)",
        n_items,
        n_items,
        matrix.recorded_pairs(),
        order.as_str()
    );

    let mut ratings = Array1::<RatingValue>::from_elem(n_items, initial_rating);

    for (i, j, result) in matrix.recorded_upper_triangle() {
        let (rating_i, rating_j) = (ratings[i], ratings[j]);

        ratings[i] = update(rating_i, rating_j, result, k)?;
        let opponent = match order {
            UpdateOrder::Snapshot => rating_i,
            UpdateOrder::Sequential => ratings[i],
        };
        ratings[j] = update(rating_j, opponent, 1.0 - result, k)?;

        debug!(
            "  pair ({}, {}) result {}: {:.4} -> {:.4}, {:.4} -> {:.4}",
            i, j, result, rating_i, ratings[i], rating_j, ratings[j]
        );
    }

    let ranking = Ranking::from_ratings(&ratings.to_vec());
    info!("Rating calculation complete");
    Ok(ranking)
}

/// Validates nested rows and processes them in one step.
pub fn process_rows(
    rows: &[Vec<Outcome>],
    initial_rating: RatingValue,
    k: f64,
) -> Result<Ranking, RatingError> {
    let matrix = ComparisonMatrix::from_rows(rows)?;
    process(&matrix, initial_rating, k)
}
