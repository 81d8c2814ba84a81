//! Generala scoring rules: s(r, c, first_roll) for all ten categories.
//!
//! Upper categories (Ones..Sixes) sum the matching faces. The four combination
//! categories score a fixed value; Straight, Full House and Four of a Kind earn
//! a 5-point bonus when made on the first roll of the turn. Generala is a flat
//! 50, and a first-roll Generala is reported separately by [`is_instant_win`].

use crate::constants::*;
use crate::dice_mechanics::{count_faces, distinct_faces, group_faces};
use crate::types::Category;

#[inline]
fn with_first_roll_bonus(base: i32, is_first_roll: bool) -> i32 {
    if is_first_roll {
        base + FIRST_ROLL_BONUS
    } else {
        base
    }
}

/// Sum of all dice showing `face`.
pub fn score_sum(dice: &[i32; DICE_COUNT], face: i32) -> i32 {
    dice.iter().filter(|&&d| d == face).sum()
}

/// 20 (25 on the first roll) if the distinct faces are exactly 1-5 or 2-6.
pub fn score_straight(dice: &[i32; DICE_COUNT], is_first_roll: bool) -> i32 {
    let faces = distinct_faces(dice);
    if faces == SMALL_STRAIGHT || faces == LARGE_STRAIGHT {
        with_first_roll_bonus(STRAIGHT_SCORE, is_first_roll)
    } else {
        0
    }
}

/// 30 (35 on the first roll) for a group of exactly 3 plus a group of exactly 2.
/// Five of a kind does not qualify.
pub fn score_full_house(dice: &[i32; DICE_COUNT], is_first_roll: bool) -> i32 {
    let groups = group_faces(dice);
    let has_three = groups.iter().any(|&(_, n)| n == 3);
    let has_two = groups.iter().any(|&(_, n)| n == 2);
    if has_three && has_two {
        with_first_roll_bonus(FULL_HOUSE_SCORE, is_first_roll)
    } else {
        0
    }
}

/// 40 (45 on the first roll) when some face appears at least 4 times.
pub fn score_four_of_a_kind(dice: &[i32; DICE_COUNT], is_first_roll: bool) -> i32 {
    if group_faces(dice).iter().any(|&(_, n)| n >= 4) {
        with_first_roll_bonus(FOUR_OF_A_KIND_SCORE, is_first_roll)
    } else {
        0
    }
}

/// 50 for five of a kind; no first-roll bonus.
pub fn score_generala(dice: &[i32; DICE_COUNT]) -> i32 {
    if is_five_of_a_kind(dice) {
        GENERALA_SCORE
    } else {
        0
    }
}

#[inline]
fn is_five_of_a_kind(dice: &[i32; DICE_COUNT]) -> bool {
    count_faces(dice).iter().any(|&n| n == DICE_COUNT as i32)
}

/// Score for placing `dice` in `category`.
pub fn score_for_category(category: Category, dice: &[i32; DICE_COUNT], is_first_roll: bool) -> i32 {
    match category {
        Category::Ones
        | Category::Twos
        | Category::Threes
        | Category::Fours
        | Category::Fives
        | Category::Sixes => {
            let face = category.index() as i32 + 1;
            score_sum(dice, face)
        }
        Category::Straight => score_straight(dice, is_first_roll),
        Category::FullHouse => score_full_house(dice, is_first_roll),
        Category::FourOfAKind => score_four_of_a_kind(dice, is_first_roll),
        Category::Generala => score_generala(dice),
    }
}

/// Score by category name. Names that are not a category score 0.
pub fn score_for_name(name: &str, dice: &[i32; DICE_COUNT], is_first_roll: bool) -> i32 {
    match name.parse::<Category>() {
        Ok(category) => score_for_category(category, dice, is_first_roll),
        Err(_) => 0,
    }
}

/// Scores for every category in board order.
pub fn score_all(dice: &[i32; DICE_COUNT], is_first_roll: bool) -> [i32; CATEGORY_COUNT] {
    Category::ALL.map(|c| score_for_category(c, dice, is_first_roll))
}

/// Five identical dice. Only meaningful right after a turn's first roll,
/// where it ends the game in the roller's favor.
pub fn is_instant_win(dice: &[i32; DICE_COUNT]) -> bool {
    is_five_of_a_kind(dice)
}
