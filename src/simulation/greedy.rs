//! Greedy single-step policy: best immediate score over open categories.
//!
//! This is the only decision rule used inside simulations. It never looks past
//! the current dice and ignores the value of saving a category for later.

use crate::constants::DICE_COUNT;
use crate::game_mechanics::score_for_category;
use crate::types::{BoardSnapshot, Category};

/// Highest score any open category would give `dice`; 0 if nothing is open.
pub fn best_greedy_score(dice: &[i32; DICE_COUNT], board: &BoardSnapshot, is_first_roll: bool) -> i32 {
    board
        .open_categories()
        .map(|c| score_for_category(c, dice, is_first_roll))
        .max()
        .unwrap_or(0)
        .max(0)
}

/// The open category a greedy player fills with `dice`, and its score.
///
/// Picks the first open category (board order) reaching the greedy maximum.
/// When every open category scores 0 this is the first open category, so a
/// turn is always spent. `None` only when the board is complete.
pub fn greedy_category(
    dice: &[i32; DICE_COUNT],
    board: &BoardSnapshot,
    is_first_roll: bool,
) -> Option<(Category, i32)> {
    let best = best_greedy_score(dice, board, is_first_roll);
    board
        .open_categories()
        .find(|&c| score_for_category(c, dice, is_first_roll) == best)
        .or_else(|| board.first_open())
        .map(|c| (c, best))
}
