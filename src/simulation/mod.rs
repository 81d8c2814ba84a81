//! Monte Carlo decision engine and game simulation.
//!
//! - [`greedy`]: single-step policy used inside every simulation
//! - [`hold`]: which dice to keep (32-mask search)
//! - [`rollout`]: forward simulation of a board copy to round 10
//! - [`commit`]: which category to fill (commit, roll out, average)
//! - [`turn`]: full turn drivers built on the above
//! - [`matches`]: headless two-seat matches and batch statistics
//!
//! Every search is blocking and single-threaded; all mutation happens on owned
//! board copies. Parallelism belongs to the caller (see [`matches`] and the
//! HTTP server).

pub mod commit;
pub mod greedy;
pub mod hold;
pub mod matches;
pub mod rollout;
pub mod turn;

use serde::{Deserialize, Serialize};

use crate::constants::{CATEGORY_TRIALS, HOLD_TRIALS};

pub use commit::{evaluate_commitment, find_best_category, find_best_category_with, CategoryDecision};
pub use greedy::{best_greedy_score, greedy_category};
pub use hold::{evaluate_hold_mask, find_best_hold, find_best_hold_with, HoldDecision};
pub use matches::{play_match, play_match_logged, simulate_matches, Finish, MatchOutcome, MatchSummary};
pub use rollout::simulate_to_end;
pub use turn::{play_computer_turn, play_greedy_turn, play_turn, Strategy, TurnRecord};

/// Trial counts for the two optimizers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Samples per hold mask.
    pub hold_trials: usize,
    /// Rollouts per candidate category.
    pub category_trials: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            hold_trials: HOLD_TRIALS,
            category_trials: CATEGORY_TRIALS,
        }
    }
}
