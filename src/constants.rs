//! Game constants: dice, categories, scoring values and Monte Carlo trial counts.
//!
//! Category order is fixed: Ones..Sixes occupy indices 0..5, followed by
//! Straight, Full House, Four of a Kind and Generala. Every iteration over
//! open categories ("first seen wins") follows this order.

/// Dice per hand.
pub const DICE_COUNT: usize = 5;

/// Faces per die (values 1..=6).
pub const FACE_COUNT: usize = 6;

/// Number of scoring categories. The "Total" row is derived and never counted here.
pub const CATEGORY_COUNT: usize = 10;

/// Rounds per game; each round is one turn per seat.
pub const TOTAL_ROUNDS: u32 = 10;

/// Rolls available in one turn (initial roll plus two rerolls).
pub const ROLLS_PER_TURN: u32 = 3;

/// Number of hold masks over five dice: 2^5.
pub const HOLD_MASK_COUNT: u8 = 1 << DICE_COUNT;

/// Mask with every die held.
pub const HOLD_ALL_MASK: u8 = HOLD_MASK_COUNT - 1;

/// Monte Carlo samples per hold mask.
pub const HOLD_TRIALS: usize = 500;

/// Forward rollouts per candidate category.
pub const CATEGORY_TRIALS: usize = 2000;

pub const STRAIGHT_SCORE: i32 = 20;
pub const FULL_HOUSE_SCORE: i32 = 30;
pub const FOUR_OF_A_KIND_SCORE: i32 = 40;
pub const GENERALA_SCORE: i32 = 50;

/// Added to Straight, Full House and Four of a Kind when made on the first roll.
pub const FIRST_ROLL_BONUS: i32 = 5;

/// Distinct-face sets that count as a straight.
pub const SMALL_STRAIGHT: [i32; 5] = [1, 2, 3, 4, 5];
pub const LARGE_STRAIGHT: [i32; 5] = [2, 3, 4, 5, 6];

/// Expected value reported when no category is open. Below any real score.
pub const NO_CATEGORY_EV: f64 = -1.0;
