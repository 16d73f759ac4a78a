pub mod matrix;
mod probability;
pub mod process;
pub mod types;
mod update;

pub use matrix::{ComparisonMatrix, Outcome};
pub use probability::probability;
pub use process::{process, process_rows, process_with_order};
pub use types::{
    DEFAULT_INITIAL_RATING, DEFAULT_K_FACTOR, DEFAULT_PROBABILITY_DIVISOR, RankedItem, Ranking,
    RatingValue, UpdateOrder,
};
pub use update::update;
