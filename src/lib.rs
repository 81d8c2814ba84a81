//! # Generala: Monte Carlo computer opponent
//!
//! Generala is played with five dice over ten rounds; each round both players
//! fill one of ten categories (Ones..Sixes, Straight, Full House, Four of a
//! Kind, Generala). Five of a kind on the first roll of a turn wins outright.
//!
//! This crate is the decision engine behind the computer player:
//!
//! | Step | Rust module | Description |
//! |------|-------------|-------------|
//! | Score | [`game_mechanics`] | Category scores for a hand, first-roll bonuses, instant win |
//! | Keep | [`simulation::hold`] | Try all 32 hold masks; sample rerolls, score greedily, keep the best mean |
//! | Commit | [`simulation::commit`] | For each open category: commit, roll the game forward to round 10, average the totals |
//!
//! Rollouts inside the commitment step use the greedy single-step policy
//! ([`simulation::greedy`]) on owned board copies ([`types::BoardSnapshot`]).
//! All searches are blocking; [`simulation::matches`] and [`server`] decide
//! how to run them concurrently.

#![allow(clippy::needless_range_loop)]

pub mod constants;
pub mod dice_mechanics;
pub mod env_config;
pub mod error;
pub mod game_mechanics;
pub mod server;
pub mod simulation;
pub mod types;

pub use error::GeneralaError;
pub use game_mechanics::{is_instant_win, score_for_category, score_for_name};
pub use simulation::{find_best_category, find_best_hold, SearchParams};
pub use types::{BoardSnapshot, Category, CategoryState};
