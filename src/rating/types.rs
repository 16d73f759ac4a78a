use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub type ItemIndex = usize;
pub type RatingValue = f64;

pub const DEFAULT_INITIAL_RATING: RatingValue = 1500.0;
pub const DEFAULT_K_FACTOR: f64 = 32.0;
pub const DEFAULT_PROBABILITY_DIVISOR: f64 = 10.0;

/// Which rating of item `i` feeds the second half of a pairwise update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UpdateOrder {
    /// Item `j` is updated against `i`'s rating from before this pair
    #[default]
    Snapshot,
    /// Item `j` is updated against `i`'s freshly written rating
    Sequential,
}

impl UpdateOrder {
    pub fn as_str(&self) -> &str {
        match self {
            UpdateOrder::Snapshot => "snapshot",
            UpdateOrder::Sequential => "sequential",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedItem {
    pub index: ItemIndex,
    pub rating: RatingValue,
}

/// Items ordered by final rating, highest first. `indices` and `ratings` are
/// parallel: `ratings[n]` belongs to item `indices[n]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    pub indices: Vec<ItemIndex>,
    pub ratings: Vec<RatingValue>,
}

impl Ranking {
    /// Sorts item indices by rating, descending. The sort is stable, so items
    /// with equal ratings stay in original index order. `-0.0` and `0.0`
    /// compare equal.
    pub fn from_ratings(ratings: &[RatingValue]) -> Self {
        let mut indices: Vec<ItemIndex> = (0..ratings.len()).collect();
        indices.sort_by(|&a, &b| sort_key(ratings[b]).total_cmp(&sort_key(ratings[a])));

        let sorted = indices.iter().map(|&idx| ratings[idx]).collect();
        Self {
            indices,
            ratings: sorted,
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = RankedItem> + '_ {
        self.indices
            .iter()
            .zip(&self.ratings)
            .map(|(&index, &rating)| RankedItem { index, rating })
    }
}

// adding +0.0 maps -0.0 to 0.0 and leaves every other value unchanged
fn sort_key(rating: RatingValue) -> RatingValue {
    rating + 0.0
}
