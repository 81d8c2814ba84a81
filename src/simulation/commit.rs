//! Category commitment optimizer.
//!
//! For every open category: commit the current dice's score to a copy of the
//! board, roll the copy forward to round 10 with [`simulate_to_end`], and
//! average the final totals over `category_trials` rollouts. The category with
//! the strictly highest average wins (board order breaks ties).

use rand::Rng;

use crate::constants::*;
use crate::game_mechanics::score_for_category;
use crate::types::{BoardSnapshot, Category};

use super::rollout::simulate_to_end;
use super::SearchParams;

/// Chosen category and its estimated final game total.
///
/// `category` is `None` only when the board has no open category; the
/// expected value is then [`NO_CATEGORY_EV`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CategoryDecision {
    pub category: Option<Category>,
    pub expected_value: f64,
}

impl CategoryDecision {
    pub fn none() -> Self {
        Self {
            category: None,
            expected_value: NO_CATEGORY_EV,
        }
    }
}

/// Mean final total after committing `dice` to `category` in `round`.
///
/// Independent per category, so callers may evaluate categories in parallel.
pub fn evaluate_commitment<R: Rng + ?Sized>(
    dice: &[i32; DICE_COUNT],
    board: &BoardSnapshot,
    category: Category,
    round: u32,
    is_first_roll: bool,
    trials: usize,
    rng: &mut R,
) -> f64 {
    debug_assert!(board.is_open(category));
    let potential = score_for_category(category, dice, is_first_roll);
    let mut committed = *board;
    committed.fill(category, potential);

    if trials == 0 {
        return committed.total() as f64;
    }
    let mut total = 0i64;
    for _ in 0..trials {
        total += simulate_to_end(committed, round + 1, rng) as i64;
    }
    total as f64 / trials as f64
}

/// Pick the category to fill with an explicit RNG and trial count.
pub fn find_best_category_with<R: Rng + ?Sized>(
    dice: &[i32; DICE_COUNT],
    board: &BoardSnapshot,
    round: u32,
    is_first_roll: bool,
    params: &SearchParams,
    rng: &mut R,
) -> CategoryDecision {
    debug_assert!(crate::dice_mechanics::is_valid_hand(dice));

    let mut best = CategoryDecision::none();
    for category in board.open_categories() {
        let ev = evaluate_commitment(
            dice,
            board,
            category,
            round,
            is_first_roll,
            params.category_trials,
            rng,
        );
        tracing::trace!(%category, ev, "commitment estimate");
        if ev > best.expected_value {
            best = CategoryDecision {
                category: Some(category),
                expected_value: ev,
            };
        }
    }

    tracing::debug!(?dice, round, category = ?best.category, ev = best.expected_value, "best category");
    best
}

/// Pick the category to fill with default trial counts and the thread-local RNG.
pub fn find_best_category(
    dice: &[i32; DICE_COUNT],
    board: &BoardSnapshot,
    round: u32,
    is_first_roll: bool,
) -> CategoryDecision {
    find_best_category_with(
        dice,
        board,
        round,
        is_first_roll,
        &SearchParams::default(),
        &mut rand::rng(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn quick() -> SearchParams {
        SearchParams {
            hold_trials: 50,
            category_trials: 100,
        }
    }

    #[test]
    fn test_complete_board_has_no_move() {
        let board = BoardSnapshot::from_final_scores([Some(10); CATEGORY_COUNT]);
        let mut rng = SmallRng::seed_from_u64(1);
        let d = find_best_category_with(&[6, 6, 6, 6, 6], &board, 10, true, &quick(), &mut rng);
        assert_eq!(d, CategoryDecision::none());
        assert!(d.expected_value < 0.0);
    }

    #[test]
    fn test_last_round_is_exact() {
        // Round 10: no rollout rounds remain, so estimates equal the committed totals.
        let mut scores = [Some(5); CATEGORY_COUNT];
        scores[Category::Twos.index()] = None;
        scores[Category::FullHouse.index()] = None;
        let board = BoardSnapshot::from_final_scores(scores);
        let mut rng = SmallRng::seed_from_u64(9);
        let d = find_best_category_with(&[2, 2, 2, 3, 3], &board, 10, true, &quick(), &mut rng);
        assert_eq!(d.category, Some(Category::FullHouse));
        assert_eq!(d.expected_value, 40.0 + 35.0);
    }

    #[test]
    fn test_single_open_category_is_chosen() {
        let mut scores = [Some(0); CATEGORY_COUNT];
        scores[Category::Ones.index()] = None;
        let board = BoardSnapshot::from_final_scores(scores);
        let mut rng = SmallRng::seed_from_u64(4);
        let d = find_best_category_with(&[6, 6, 6, 6, 6], &board, 3, false, &quick(), &mut rng);
        assert_eq!(d.category, Some(Category::Ones));
        assert_eq!(d.expected_value, 0.0);
    }

    #[test]
    fn test_evaluate_commitment_leaves_board_open() {
        let board = BoardSnapshot::new();
        let mut rng = SmallRng::seed_from_u64(12);
        let ev = evaluate_commitment(&[1, 2, 3, 4, 5], &board, Category::Straight, 1, true, 20, &mut rng);
        assert!(ev >= 25.0);
        assert!(board.is_open(Category::Straight));
    }
}
