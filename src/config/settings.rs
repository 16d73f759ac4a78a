use crate::errors::RatingError;
use crate::rating::{
    self, ComparisonMatrix, DEFAULT_INITIAL_RATING, DEFAULT_K_FACTOR, DEFAULT_PROBABILITY_DIVISOR,
    Ranking, UpdateOrder,
};

#[derive(Debug, Clone, PartialEq)]
pub struct RatingSettings {
    pub initial_rating: f64,
    pub k_factor: f64,
    pub probability_divisor: f64,
    pub order: UpdateOrder,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            initial_rating: DEFAULT_INITIAL_RATING,
            k_factor: DEFAULT_K_FACTOR,
            probability_divisor: DEFAULT_PROBABILITY_DIVISOR,
            order: UpdateOrder::Snapshot,
        }
    }
}

impl RatingSettings {
    pub fn with_initial_rating(mut self, initial_rating: Option<f64>) -> Self {
        if let Some(value) = initial_rating {
            self.initial_rating = value;
        }
        self
    }

    pub fn with_k_factor(mut self, k_factor: Option<f64>) -> Self {
        if let Some(value) = k_factor {
            self.k_factor = value;
        }
        self
    }

    pub fn with_order(mut self, order: Option<UpdateOrder>) -> Self {
        if let Some(value) = order {
            self.order = value;
        }
        self
    }

    pub fn process(&self, matrix: &ComparisonMatrix) -> Result<Ranking, RatingError> {
        rating::process_with_order(matrix, self.initial_rating, self.k_factor, self.order)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub rating: RatingSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            rating: RatingSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AppConfig::new().rating;
        assert_eq!(settings.initial_rating, 1500.0);
        assert_eq!(settings.k_factor, 32.0);
        assert_eq!(settings.probability_divisor, 10.0);
        assert_eq!(settings.order, UpdateOrder::Snapshot);
    }

    #[test]
    fn test_overrides() {
        let settings = RatingSettings::default()
            .with_initial_rating(Some(1000.0))
            .with_k_factor(None)
            .with_order(Some(UpdateOrder::Sequential));

        assert_eq!(settings.initial_rating, 1000.0);
        assert_eq!(settings.k_factor, 32.0);
        assert_eq!(settings.order, UpdateOrder::Sequential);
    }

    #[test]
    fn test_process_uses_initial_rating() {
        let settings = RatingSettings::default().with_initial_rating(Some(800.0));
        let ranking = settings.process(&ComparisonMatrix::unknown(2)).unwrap();
        assert_eq!(ranking.ratings, vec![800.0, 800.0]);
    }
}
