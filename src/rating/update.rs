use super::probability::probability;
use super::types::RatingValue;
use crate::errors::RatingError;

/// New rating after one game: `rating + k * (result - expected)`.
///
/// `k` doubles as the estimator's divisor. `result` is applied as given
/// (1 win, 0.5 draw, 0 loss by convention).
pub fn update(
    rating: RatingValue,
    opponent_rating: RatingValue,
    result: f64,
    k: f64,
) -> Result<RatingValue, RatingError> {
    let expected = probability(rating, opponent_rating, k)?;
    Ok(rating + k * (result - expected))
}
