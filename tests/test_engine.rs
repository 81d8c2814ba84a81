//! Integration tests for the decision engine with seeded RNGs.

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use generala::constants::*;
use generala::simulation::hold::{evaluate_hold_mask, partition_by_mask};
use generala::simulation::{
    find_best_category, find_best_category_with, find_best_hold, find_best_hold_with,
    simulate_to_end, SearchParams,
};
use generala::types::{BoardSnapshot, Category};

/// SmallRng that counts how many words were drawn.
struct CountingRng {
    inner: SmallRng,
    draws: usize,
}

impl CountingRng {
    fn new(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
            draws: 0,
        }
    }
}

impl RngCore for CountingRng {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws += 1;
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.draws += 1;
        self.inner.fill_bytes(dst)
    }
}

fn only_open(open: &[Category]) -> BoardSnapshot {
    let mut scores = [Some(0); CATEGORY_COUNT];
    for c in open {
        scores[c.index()] = None;
    }
    BoardSnapshot::from_final_scores(scores)
}

fn quick() -> SearchParams {
    SearchParams {
        hold_trials: 200,
        category_trials: 200,
    }
}

// ── Forward simulator ───────────────────────────────────────────────

#[test]
fn rollout_on_complete_board_rolls_nothing() {
    let board = BoardSnapshot::from_final_scores([Some(7); CATEGORY_COUNT]);
    for start in 1..=TOTAL_ROUNDS {
        let mut rng = CountingRng::new(start as u64);
        assert_eq!(simulate_to_end(board, start, &mut rng), 70);
        assert_eq!(rng.draws, 0);
    }
}

#[test]
fn rollout_fills_one_category_per_remaining_round() {
    let board = BoardSnapshot::new();
    let mut rng = SmallRng::seed_from_u64(3);
    // With every category open and start round 1, the rollout fills all ten.
    // Greedy on fresh dice never scores above 50 per category.
    for _ in 0..100 {
        let total = simulate_to_end(board, 1, &mut rng);
        assert!((0..=10 * GENERALA_SCORE).contains(&total));
    }
}

// ── Hold optimizer ──────────────────────────────────────────────────

#[test]
fn held_dice_come_from_the_hand() {
    let board = BoardSnapshot::new();
    let mut rng = SmallRng::seed_from_u64(10);
    for dice in [[1, 2, 3, 4, 6], [2, 2, 5, 5, 6], [6, 1, 6, 3, 6]] {
        let d = find_best_hold_with(&dice, &board, 1, 2, &quick(), &mut rng);
        assert!(d.held.len() <= DICE_COUNT);
        assert!(d.mask < HOLD_MASK_COUNT);
        let (expected, _) = partition_by_mask(&dice, d.mask);
        assert_eq!(d.held, expected);
        assert!(d.expected_value >= 0.0);
    }
}

#[test]
fn hold_is_reproducible_for_a_seed() {
    let board = BoardSnapshot::new();
    let dice = [2, 3, 3, 5, 6];
    let a = find_best_hold_with(&dice, &board, 2, 2, &quick(), &mut SmallRng::seed_from_u64(99));
    let b = find_best_hold_with(&dice, &board, 2, 2, &quick(), &mut SmallRng::seed_from_u64(99));
    assert_eq!(a, b);
}

#[test]
fn hold_ignores_round_and_rolls_left() {
    let board = BoardSnapshot::new();
    let dice = [1, 1, 4, 5, 6];
    let a = find_best_hold_with(&dice, &board, 1, 2, &quick(), &mut SmallRng::seed_from_u64(5));
    let b = find_best_hold_with(&dice, &board, 9, 1, &quick(), &mut SmallRng::seed_from_u64(5));
    assert_eq!(a, b);
}

#[test]
fn keeping_four_of_a_kind_dominates_for_generala() {
    let board = only_open(&[Category::Generala]);
    let dice = [4, 4, 4, 4, 2];
    let mut rng = SmallRng::seed_from_u64(0xDEC0DE);
    let four = evaluate_hold_mask(&dice, 0b01111, &board, 20_000, &mut rng);
    for mask in 0..HOLD_MASK_COUNT {
        let held_fours = (0..4).filter(|&i| mask & (1 << i) != 0).count();
        if held_fours < 4 {
            let ev = evaluate_hold_mask(&dice, mask, &board, 20_000, &mut rng);
            assert!(four >= ev, "mask {mask:05b} ev {ev} beats four-hold ev {four}");
        }
    }
    assert!((four - 50.0 / 6.0).abs() < 0.6, "four-hold ev {four}");
}

#[test]
fn default_hold_search_runs() {
    let board = only_open(&[Category::Straight]);
    let d = find_best_hold(&[1, 2, 3, 4, 4], &board, 5, 1);
    // The strong holds (1,2,3,4 or 2,3,4) all keep the 2, 3 and one 4.
    assert!(d.held.contains(&2) && d.held.contains(&3) && d.held.contains(&4));
    assert!(d.expected_value > 0.0);
}

// ── Category optimizer ──────────────────────────────────────────────

#[test]
fn no_open_category_returns_sentinel() {
    let board = BoardSnapshot::from_final_scores([Some(0); CATEGORY_COUNT]);
    let d = find_best_category(&[3, 3, 3, 3, 3], &board, 10, true);
    assert_eq!(d.category, None);
    assert_eq!(d.expected_value, NO_CATEGORY_EV);
}

#[test]
fn category_choice_never_touches_the_board() {
    let board = BoardSnapshot::new();
    let before = board;
    let mut rng = SmallRng::seed_from_u64(8);
    let d = find_best_category_with(&[5, 5, 5, 2, 2], &board, 1, true, &quick(), &mut rng);
    assert_eq!(board, before);
    assert!(d.category.is_some());
}

#[test]
fn full_house_on_first_roll_is_taken() {
    // Late game with Full House and Ones open: 35 points now beats 0 in Ones,
    // and the remaining round can only add to either choice.
    let board = only_open(&[Category::Ones, Category::FullHouse]);
    let mut rng = SmallRng::seed_from_u64(77);
    let d = find_best_category_with(&[6, 6, 6, 3, 3], &board, 9, true, &quick(), &mut rng);
    assert_eq!(d.category, Some(Category::FullHouse));
    assert!(d.expected_value >= 35.0);
}

#[test]
fn category_is_reproducible_for_a_seed() {
    let board = BoardSnapshot::new();
    let dice = [1, 2, 3, 4, 5];
    let a = find_best_category_with(&dice, &board, 3, false, &quick(), &mut SmallRng::seed_from_u64(1));
    let b = find_best_category_with(&dice, &board, 3, false, &quick(), &mut SmallRng::seed_from_u64(1));
    assert_eq!(a, b);
}
