//! Dice helpers: face counting, (face, count) grouping, validation and rolling.

use rand::Rng;

use crate::constants::*;
use crate::error::{GeneralaError, Result};

/// Count occurrences of each face (1-6) in a 5-dice hand.
/// face_count[0] is unused; face_count[f] = count of face f.
pub fn count_faces(dice: &[i32; DICE_COUNT]) -> [i32; FACE_COUNT + 1] {
    let mut face_count = [0i32; FACE_COUNT + 1];
    for &d in dice {
        debug_assert!((1..=6).contains(&d), "die out of range: {d}");
        face_count[d as usize] += 1;
    }
    face_count
}

/// Reduce a hand to (face, count) pairs, ascending by face, omitting absent faces.
///
/// `[1, 1, 3, 3, 3]` → `[(1, 2), (3, 3)]`.
pub fn group_faces(dice: &[i32; DICE_COUNT]) -> Vec<(i32, i32)> {
    let face_count = count_faces(dice);
    (1..=FACE_COUNT)
        .filter(|&f| face_count[f] > 0)
        .map(|f| (f as i32, face_count[f]))
        .collect()
}

/// Distinct faces of a hand, sorted ascending.
pub fn distinct_faces(dice: &[i32; DICE_COUNT]) -> Vec<i32> {
    group_faces(dice).into_iter().map(|(f, _)| f).collect()
}

/// Normalize dice to canonical sorted form (ascending).
pub fn sort_dice_set(arr: &mut [i32; DICE_COUNT]) {
    arr.sort_unstable();
}

/// Check length and face range of caller-supplied dice.
pub fn validate_hand(dice: &[i32]) -> Result<[i32; DICE_COUNT]> {
    let hand: [i32; DICE_COUNT] = dice
        .try_into()
        .map_err(|_| GeneralaError::InvalidHandLength(dice.len()))?;
    if let Some(&bad) = hand.iter().find(|d| !(1..=6).contains(*d)) {
        return Err(GeneralaError::InvalidFace(bad));
    }
    Ok(hand)
}

#[inline]
pub fn is_valid_hand(dice: &[i32; DICE_COUNT]) -> bool {
    dice.iter().all(|d| (1..=6).contains(d))
}

/// Roll a single die (1-6).
#[inline]
pub fn roll_die<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.random_range(1..=6)
}

/// Roll all five dice.
#[inline]
pub fn roll_dice<R: Rng + ?Sized>(rng: &mut R) -> [i32; DICE_COUNT] {
    let mut dice = [0i32; DICE_COUNT];
    for d in &mut dice {
        *d = roll_die(rng);
    }
    dice
}

/// Reroll every position whose `held` flag is false.
pub fn reroll_unheld<R: Rng + ?Sized>(
    dice: &mut [i32; DICE_COUNT],
    held: &[bool; DICE_COUNT],
    rng: &mut R,
) {
    for (d, &keep) in dice.iter_mut().zip(held) {
        if !keep {
            *d = roll_die(rng);
        }
    }
}
