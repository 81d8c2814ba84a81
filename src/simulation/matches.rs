//! Headless two-seat matches and batch statistics.
//!
//! Each round the human seat plays first, then the computer seat, each on its
//! own board. A first-roll Generala ends the match on the spot. Batches run in
//! parallel with rayon; game `i` uses `SmallRng::seed_from_u64(seed + i)`, so a
//! batch is reproducible for a given seed regardless of thread count.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;

use crate::constants::TOTAL_ROUNDS;
use crate::types::{Scoreboard, Seat};

use super::turn::{play_turn, Strategy, TurnRecord};
use super::SearchParams;

/// How a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Finish {
    /// Five of a kind on a first roll.
    InstantWin(Seat),
    /// All rounds played; higher total wins.
    Scored(Seat),
    Draw,
}

impl Finish {
    pub fn winner(self) -> Option<Seat> {
        match self {
            Finish::InstantWin(s) | Finish::Scored(s) => Some(s),
            Finish::Draw => None,
        }
    }
}

/// Per-match result.
#[derive(Clone, Debug, Serialize)]
pub struct MatchOutcome {
    pub finish: Finish,
    /// Totals in seat order (human, computer).
    pub totals: [i32; 2],
    /// Rounds started before the match ended.
    pub rounds_played: u32,
}

/// Full turn-by-turn log of one match.
#[derive(Clone, Debug, Serialize)]
pub struct MatchLog {
    pub outcome: MatchOutcome,
    pub turns: Vec<(u32, Seat, TurnRecord)>,
    pub scoreboard: Scoreboard,
}

/// Aggregate results across a batch.
#[derive(Clone, Debug, Serialize)]
pub struct MatchSummary {
    pub strategies: [String; 2],
    pub games: u32,
    pub wins: [u32; 2],
    pub instant_wins: [u32; 2],
    pub draws: u32,
    pub win_rates: [f64; 2],
    pub score_means: [f64; 2],
    pub score_stds: [f64; 2],
}

/// Play one match, recording every turn.
pub fn play_match_logged<R: Rng + ?Sized>(
    strategies: [Strategy; 2],
    params: &SearchParams,
    rng: &mut R,
) -> MatchLog {
    let mut scoreboard = Scoreboard::new();
    let mut turns = Vec::with_capacity(2 * TOTAL_ROUNDS as usize);

    for round in 1..=TOTAL_ROUNDS {
        for seat in Seat::BOTH {
            let record = play_turn(strategies[seat.index()], scoreboard.board_mut(seat), round, params, rng);
            let instant = record.instant_win;
            turns.push((round, seat, record));
            if instant {
                tracing::debug!(?seat, round, "match ended by instant win");
                let outcome = MatchOutcome {
                    finish: Finish::InstantWin(seat),
                    totals: totals(&scoreboard),
                    rounds_played: round,
                };
                return MatchLog {
                    outcome,
                    turns,
                    scoreboard,
                };
            }
        }
    }

    let final_totals = totals(&scoreboard);
    let finish = match final_totals[0].cmp(&final_totals[1]) {
        std::cmp::Ordering::Greater => Finish::Scored(Seat::Human),
        std::cmp::Ordering::Less => Finish::Scored(Seat::Computer),
        std::cmp::Ordering::Equal => Finish::Draw,
    };
    MatchLog {
        outcome: MatchOutcome {
            finish,
            totals: final_totals,
            rounds_played: TOTAL_ROUNDS,
        },
        turns,
        scoreboard,
    }
}

/// Play one match and keep only the outcome.
pub fn play_match<R: Rng + ?Sized>(
    strategies: [Strategy; 2],
    params: &SearchParams,
    rng: &mut R,
) -> MatchOutcome {
    play_match_logged(strategies, params, rng).outcome
}

fn totals(scoreboard: &Scoreboard) -> [i32; 2] {
    Seat::BOTH.map(|s| scoreboard.total(s))
}

/// Run `games` matches in parallel and aggregate them.
pub fn simulate_matches(
    strategies: [Strategy; 2],
    games: u32,
    seed: u64,
    params: &SearchParams,
) -> MatchSummary {
    let outcomes: Vec<MatchOutcome> = (0..games as u64)
        .into_par_iter()
        .map(|i| {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i));
            play_match(strategies, params, &mut rng)
        })
        .collect();
    summarize(strategies, &outcomes)
}

/// Aggregate a set of outcomes.
pub fn summarize(strategies: [Strategy; 2], outcomes: &[MatchOutcome]) -> MatchSummary {
    let mut wins = [0u32; 2];
    let mut instant_wins = [0u32; 2];
    let mut draws = 0u32;
    let mut sums = [0.0f64; 2];
    let mut sq_sums = [0.0f64; 2];

    for outcome in outcomes {
        for (i, &t) in outcome.totals.iter().enumerate() {
            sums[i] += t as f64;
            sq_sums[i] += (t as f64) * (t as f64);
        }
        match outcome.finish {
            Finish::InstantWin(s) => {
                wins[s.index()] += 1;
                instant_wins[s.index()] += 1;
            }
            Finish::Scored(s) => wins[s.index()] += 1,
            Finish::Draw => draws += 1,
        }
    }

    let n = outcomes.len() as f64;
    let mean = |i: usize| if n > 0.0 { sums[i] / n } else { 0.0 };
    let std_dev = |i: usize| {
        if n > 0.0 {
            let m = sums[i] / n;
            (sq_sums[i] / n - m * m).max(0.0).sqrt()
        } else {
            0.0
        }
    };
    let rate = |w: u32| if n > 0.0 { w as f64 / n } else { 0.0 };

    MatchSummary {
        strategies: strategies.map(|s| s.to_string()),
        games: outcomes.len() as u32,
        wins,
        instant_wins,
        draws,
        win_rates: [rate(wins[0]), rate(wins[1])],
        score_means: [mean(0), mean(1)],
        score_stds: [std_dev(0), std_dev(1)],
    }
}
