use super::types::RatingValue;
use crate::errors::RatingError;

/// Probability that a player rated `rating1` beats one rated `rating2`.
///
/// Logistic curve in base 10: `1 / (1 + 10^((rating2 - rating1) / k))`.
/// A zero `k` is rejected with [`RatingError::DivisionByZero`].
pub fn probability(rating1: RatingValue, rating2: RatingValue, k: f64) -> Result<f64, RatingError> {
    if k == 0.0 {
        return Err(RatingError::DivisionByZero);
    }

    let exponent = (rating2 - rating1) / k;
    Ok(1.0 / (1.0 + 10f64.powf(exponent)))
}
