//! Turn drivers: how a seat plays one turn against its own board.
//!
//! [`Strategy::MonteCarlo`] is the computer opponent: after each roll it
//! compares the best immediate score with the hold optimizer's estimate and
//! rerolls only when rerolling is expected to pay more, then lets the
//! commitment optimizer choose the category. [`Strategy::Greedy`] rolls once
//! and fills the greedy category, the same policy rollouts use.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::Serialize;

use crate::constants::*;
use crate::dice_mechanics::{roll_dice, reroll_unheld};
use crate::error::GeneralaError;
use crate::game_mechanics::{is_instant_win, score_for_category};
use crate::types::{BoardSnapshot, Category};

use super::commit::find_best_category_with;
use super::greedy::{best_greedy_score, greedy_category};
use super::hold::find_best_hold_with;
use super::SearchParams;

/// Seat policy, parsed from `"mc"` or `"greedy"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Strategy {
    MonteCarlo,
    Greedy,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::MonteCarlo => "mc",
            Strategy::Greedy => "greedy",
        })
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mc" | "monte-carlo" | "montecarlo" => Ok(Strategy::MonteCarlo),
            "greedy" => Ok(Strategy::Greedy),
            other => Err(format!("unknown strategy '{other}' (expected mc or greedy)")),
        }
    }
}

/// Everything that happened in one turn.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TurnRecord {
    /// Dice after each roll, in order.
    pub rolls: Vec<[i32; DICE_COUNT]>,
    /// Hold flags applied before each reroll.
    pub holds: Vec<[bool; DICE_COUNT]>,
    pub final_dice: [i32; DICE_COUNT],
    /// `None` after an instant win or when the board was already complete.
    pub category: Option<Category>,
    pub score: i32,
    /// Estimated final total reported by the commitment step.
    pub expected_value: f64,
    /// Five of a kind on the first roll.
    pub instant_win: bool,
}

impl TurnRecord {
    pub fn rolls_used(&self) -> u32 {
        self.rolls.len() as u32
    }
}

/// Play one turn for `strategy`, committing the result to `board`.
pub fn play_turn<R: Rng + ?Sized>(
    strategy: Strategy,
    board: &mut BoardSnapshot,
    round: u32,
    params: &SearchParams,
    rng: &mut R,
) -> TurnRecord {
    match strategy {
        Strategy::MonteCarlo => play_computer_turn(board, round, params, rng),
        Strategy::Greedy => play_greedy_turn(board, rng),
    }
}

/// The computer opponent's turn: roll, decide holds, then pick a category.
pub fn play_computer_turn<R: Rng + ?Sized>(
    board: &mut BoardSnapshot,
    round: u32,
    params: &SearchParams,
    rng: &mut R,
) -> TurnRecord {
    let mut dice = roll_dice(rng);
    let mut rolls = vec![dice];
    let mut holds = Vec::new();

    if is_instant_win(&dice) {
        tracing::debug!(?dice, round, "instant win on first roll");
        return TurnRecord {
            rolls,
            holds,
            final_dice: dice,
            category: None,
            score: GENERALA_SCORE,
            expected_value: 0.0,
            instant_win: true,
        };
    }

    let mut rolls_left = ROLLS_PER_TURN - 1;
    while rolls_left > 0 {
        let is_first_roll = rolls.len() == 1;
        let stop_value = best_greedy_score(&dice, board, is_first_roll) as f64;
        let hold = find_best_hold_with(&dice, board, round, rolls_left, params, rng);
        if hold.expected_value <= stop_value {
            break;
        }
        let held = hold.held_positions();
        reroll_unheld(&mut dice, &held, rng);
        holds.push(held);
        rolls.push(dice);
        rolls_left -= 1;
    }

    let is_first_roll = rolls.len() == 1;
    board.clear_potentials();
    for category in Category::ALL {
        if board.is_open(category) {
            board.set_potential(category, score_for_category(category, &dice, is_first_roll));
        }
    }

    let decision = find_best_category_with(&dice, board, round, is_first_roll, params, rng);
    let score = match decision.category {
        Some(category) => {
            let score = board.state(category).potential_score;
            board.fill(category, score);
            score
        }
        None => 0,
    };
    board.clear_potentials();

    TurnRecord {
        rolls,
        holds,
        final_dice: dice,
        category: decision.category,
        score,
        expected_value: decision.expected_value,
        instant_win: false,
    }
}

/// Baseline turn: one roll, greedy category.
pub fn play_greedy_turn<R: Rng + ?Sized>(board: &mut BoardSnapshot, rng: &mut R) -> TurnRecord {
    let dice = roll_dice(rng);
    if is_instant_win(&dice) {
        return TurnRecord {
            rolls: vec![dice],
            holds: Vec::new(),
            final_dice: dice,
            category: None,
            score: GENERALA_SCORE,
            expected_value: 0.0,
            instant_win: true,
        };
    }
    let picked = greedy_category(&dice, board, true);
    if let Some((category, score)) = picked {
        board.fill(category, score);
    }
    TurnRecord {
        rolls: vec![dice],
        holds: Vec::new(),
        final_dice: dice,
        category: picked.map(|(c, _)| c),
        score: picked.map_or(0, |(_, s)| s),
        expected_value: board.total() as f64,
        instant_win: false,
    }
}

/// Validate a round number from outside the engine.
pub fn check_round(round: u32) -> Result<u32, GeneralaError> {
    if (1..=TOTAL_ROUNDS).contains(&round) {
        Ok(round)
    } else {
        Err(GeneralaError::InvalidRound(round))
    }
}

/// Validate a rolls-left count from outside the engine.
pub fn check_rolls_left(rolls_left: u32) -> Result<u32, GeneralaError> {
    if rolls_left < ROLLS_PER_TURN {
        Ok(rolls_left)
    } else {
        Err(GeneralaError::InvalidRollsLeft(rolls_left))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn quick() -> SearchParams {
        SearchParams {
            hold_trials: 40,
            category_trials: 40,
        }
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!("mc".parse::<Strategy>(), Ok(Strategy::MonteCarlo));
        assert_eq!("Greedy".parse::<Strategy>(), Ok(Strategy::Greedy));
        assert!("random".parse::<Strategy>().is_err());
        assert_eq!(Strategy::MonteCarlo.to_string(), "mc");
    }

    #[test]
    fn test_computer_turn_fills_one_category() {
        let mut rng = SmallRng::seed_from_u64(21);
        for seed_round in 1..=5 {
            let mut board = BoardSnapshot::new();
            let rec = play_computer_turn(&mut board, seed_round, &quick(), &mut rng);
            assert!((1..=ROLLS_PER_TURN).contains(&rec.rolls_used()));
            assert_eq!(rec.holds.len() + 1, rec.rolls.len());
            assert_eq!(rec.rolls.last(), Some(&rec.final_dice));
            if rec.instant_win {
                assert_eq!(board.open_count(), CATEGORY_COUNT);
                continue;
            }
            assert_eq!(board.open_count(), CATEGORY_COUNT - 1);
            let category = rec.category.unwrap();
            assert_eq!(board.final_score(category), Some(rec.score));
            let first = rec.rolls_used() == 1;
            assert_eq!(rec.score, score_for_category(category, &rec.final_dice, first));
            assert!(Category::ALL.iter().all(|&c| board.state(c).potential_score == 0));
        }
    }

    #[test]
    fn test_held_dice_survive_reroll() {
        let mut rng = SmallRng::seed_from_u64(77);
        for _ in 0..10 {
            let mut board = BoardSnapshot::new();
            let rec = play_computer_turn(&mut board, 1, &quick(), &mut rng);
            for (i, held) in rec.holds.iter().enumerate() {
                for d in 0..DICE_COUNT {
                    if held[d] {
                        assert_eq!(rec.rolls[i][d], rec.rolls[i + 1][d]);
                    }
                }
            }
        }
    }

    #[test]
    fn test_greedy_turn_single_roll() {
        let mut rng = SmallRng::seed_from_u64(8);
        let mut board = BoardSnapshot::new();
        let rec = play_greedy_turn(&mut board, &mut rng);
        assert_eq!(rec.rolls_used(), 1);
        if !rec.instant_win {
            assert_eq!(board.open_count(), CATEGORY_COUNT - 1);
        }
    }

    #[test]
    fn test_turn_on_complete_board_commits_nothing() {
        let mut rng = SmallRng::seed_from_u64(30);
        let mut board = BoardSnapshot::from_final_scores([Some(3); CATEGORY_COUNT]);
        let rec = play_computer_turn(&mut board, 10, &quick(), &mut rng);
        if !rec.instant_win {
            assert_eq!(rec.category, None);
            assert_eq!(rec.score, 0);
        }
        assert_eq!(board.total(), 30);
    }

    #[test]
    fn test_check_bounds() {
        assert!(check_round(1).is_ok());
        assert!(check_round(10).is_ok());
        assert_eq!(check_round(0), Err(GeneralaError::InvalidRound(0)));
        assert_eq!(check_round(11), Err(GeneralaError::InvalidRound(11)));
        assert!(check_rolls_left(2).is_ok());
        assert_eq!(check_rolls_left(3), Err(GeneralaError::InvalidRollsLeft(3)));
    }
}
