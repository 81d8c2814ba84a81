//! Forward simulator: play a board copy to the end of the game.
//!
//! Each remaining round rolls five fresh dice once (no hold search) and fills
//! the greedy category. The board is taken by value, so the caller's board is
//! never touched.

use rand::Rng;

use crate::constants::TOTAL_ROUNDS;
use crate::dice_mechanics::roll_dice;
use crate::types::BoardSnapshot;

use super::greedy::greedy_category;

/// Play rounds `start_round..=10` on `board` and return its final total.
///
/// Stops early once no category is open; a complete board rolls no dice.
pub fn simulate_to_end<R: Rng + ?Sized>(mut board: BoardSnapshot, start_round: u32, rng: &mut R) -> i32 {
    for _round in start_round..=TOTAL_ROUNDS {
        if board.is_complete() {
            break;
        }
        let dice = roll_dice(rng);
        if let Some((category, score)) = greedy_category(&dice, &board, true) {
            board.fill(category, score);
        }
    }
    board.total()
}
