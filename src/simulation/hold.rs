//! Hold-set optimizer: Monte Carlo search over the 32 keep/reroll masks.
//!
//! Bit `i` of a mask set means die `i` is held. For each mask the rerolled
//! dice are sampled `hold_trials` times and every sample is scored with the
//! greedy policy (never as a first roll). The mask with the strictly highest
//! mean wins; masks are visited 0..=31 so ties keep the lower mask.

use rand::Rng;

use crate::constants::*;
use crate::dice_mechanics::roll_die;
use crate::types::BoardSnapshot;

use super::greedy::best_greedy_score;
use super::SearchParams;

/// Winning hold for one decision.
#[derive(Clone, Debug, PartialEq)]
pub struct HoldDecision {
    /// Winning mask (bit i set = die i held).
    pub mask: u8,
    /// Values of the held dice, in position order.
    pub held: Vec<i32>,
    /// Mean greedy score after rerolling the unheld dice.
    pub expected_value: f64,
}

impl HoldDecision {
    /// Per-position hold flags.
    pub fn held_positions(&self) -> [bool; DICE_COUNT] {
        mask_to_positions(self.mask)
    }

    pub fn holds_everything(&self) -> bool {
        self.mask == HOLD_ALL_MASK
    }
}

#[inline]
pub fn mask_to_positions(mask: u8) -> [bool; DICE_COUNT] {
    std::array::from_fn(|i| mask & (1 << i) != 0)
}

/// Split `dice` into (held values, number of dice to reroll) by `mask`.
pub fn partition_by_mask(dice: &[i32; DICE_COUNT], mask: u8) -> (Vec<i32>, usize) {
    let held: Vec<i32> = (0..DICE_COUNT)
        .filter(|&i| mask & (1 << i) != 0)
        .map(|i| dice[i])
        .collect();
    let reroll = DICE_COUNT - held.len();
    (held, reroll)
}

/// Mean greedy score of keeping `mask` and rerolling the rest, over `trials` samples.
///
/// Independent per mask, so callers may evaluate masks in parallel.
pub fn evaluate_hold_mask<R: Rng + ?Sized>(
    dice: &[i32; DICE_COUNT],
    mask: u8,
    board: &BoardSnapshot,
    trials: usize,
    rng: &mut R,
) -> f64 {
    if trials == 0 {
        return 0.0;
    }
    let (held, reroll) = partition_by_mask(dice, mask);
    let mut candidate = [0i32; DICE_COUNT];
    candidate[..held.len()].copy_from_slice(&held);

    let mut total = 0i64;
    for _ in 0..trials {
        for slot in &mut candidate[held.len()..held.len() + reroll] {
            *slot = roll_die(rng);
        }
        total += best_greedy_score(&candidate, board, false) as i64;
    }
    total as f64 / trials as f64
}

/// Search all 32 masks with an explicit RNG and trial count.
///
/// `round` and `rolls_left` describe the caller's turn but do not enter the
/// estimate.
pub fn find_best_hold_with<R: Rng + ?Sized>(
    dice: &[i32; DICE_COUNT],
    board: &BoardSnapshot,
    _round: u32,
    _rolls_left: u32,
    params: &SearchParams,
    rng: &mut R,
) -> HoldDecision {
    debug_assert!(crate::dice_mechanics::is_valid_hand(dice));

    let mut best_mask = 0u8;
    let mut best_ev = f64::NEG_INFINITY;
    for mask in 0..HOLD_MASK_COUNT {
        let ev = evaluate_hold_mask(dice, mask, board, params.hold_trials, rng);
        if ev > best_ev {
            best_ev = ev;
            best_mask = mask;
        }
    }

    let (held, _) = partition_by_mask(dice, best_mask);
    tracing::debug!(?dice, mask = best_mask, ?held, ev = best_ev, "best hold");
    HoldDecision {
        mask: best_mask,
        held,
        expected_value: best_ev,
    }
}

/// Search all 32 masks with default trial counts and the thread-local RNG.
pub fn find_best_hold(
    dice: &[i32; DICE_COUNT],
    board: &BoardSnapshot,
    round: u32,
    rolls_left: u32,
) -> HoldDecision {
    find_best_hold_with(
        dice,
        board,
        round,
        rolls_left,
        &SearchParams::default(),
        &mut rand::rng(),
    )
}
