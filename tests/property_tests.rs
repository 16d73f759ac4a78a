//! Property-based tests for the rating pipeline.

use elo_ranking::rating::{ComparisonMatrix, probability, process, update};
use proptest::prelude::*;

fn outcome() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        Just(None),
        Just(Some(0.0)),
        Just(Some(0.5)),
        Just(Some(1.0)),
    ]
}

fn matrix(max_items: usize) -> impl Strategy<Value = ComparisonMatrix> {
    (0..=max_items).prop_flat_map(|n| {
        prop::collection::vec(prop::collection::vec(outcome(), n), n)
            .prop_map(|rows| ComparisonMatrix::from_rows(&rows).unwrap())
    })
}

proptest! {
    // ==================== Probability ====================

    #[test]
    fn probability_even_for_equal_ratings(r in -5000.0..5000.0f64, k in 1.0..800.0f64) {
        prop_assert_eq!(probability(r, r, k).unwrap(), 0.5);
    }

    #[test]
    fn probability_favours_higher_rating(
        low in 1000.0..2000.0f64,
        gap in 0.01..30.0f64,
        k in 10.0..400.0f64
    ) {
        let high = low + gap;
        let p = probability(high, low, k).unwrap();
        let q = probability(low, high, k).unwrap();

        prop_assert!(p > 0.5);
        prop_assert!((p + q - 1.0).abs() < 1e-12);
    }

    #[test]
    fn probability_in_open_interval(r1 in 0.0..3000.0f64, r2 in 0.0..3000.0f64) {
        let p = probability(r1, r2, 400.0).unwrap();
        prop_assert!(p > 0.0 && p < 1.0);
    }

    // ==================== Update ====================

    #[test]
    fn update_with_expected_result_is_fixed_point(
        r in 1000.0..2000.0f64,
        opp in 1000.0..2000.0f64,
        k in 1.0..64.0f64
    ) {
        let expected = probability(r, opp, k).unwrap();
        let updated = update(r, opp, expected, k).unwrap();
        prop_assert!((updated - r).abs() < 1e-9);
    }

    #[test]
    fn win_never_lowers_and_loss_never_raises(
        r in 1000.0..2000.0f64,
        opp in 1000.0..2000.0f64,
        k in 1.0..64.0f64
    ) {
        prop_assert!(update(r, opp, 1.0, k).unwrap() >= r);
        prop_assert!(update(r, opp, 0.0, k).unwrap() <= r);
    }

    // ==================== Matrix processing ====================

    #[test]
    fn ranking_is_descending_permutation(m in matrix(8)) {
        let ranking = process(&m, 1500.0, 32.0).unwrap();

        let mut seen = ranking.indices.clone();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..m.size()).collect::<Vec<_>>());
        prop_assert!(ranking.ratings.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn equal_ratings_keep_index_order(m in matrix(8)) {
        let ranking = process(&m, 1500.0, 32.0).unwrap();

        for (w_idx, w_rating) in ranking.indices.windows(2).zip(ranking.ratings.windows(2)) {
            if w_rating[0] == w_rating[1] {
                prop_assert!(w_idx[0] < w_idx[1]);
            }
        }
    }

    #[test]
    fn unknown_matrix_keeps_initial_ratings(n in 0usize..12, initial in 0.0..3000.0f64) {
        let ranking = process(&ComparisonMatrix::unknown(n), initial, 32.0).unwrap();

        prop_assert_eq!(ranking.indices, (0..n).collect::<Vec<_>>());
        prop_assert!(ranking.ratings.iter().all(|&r| r == initial));
    }
}
