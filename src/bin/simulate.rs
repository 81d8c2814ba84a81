use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use generala::env_config;
use generala::simulation::{play_match_logged, simulate_matches, SearchParams, Strategy};

/// Play batches of headless Generala matches and report win rates and scores.
#[derive(Parser, Debug)]
#[command(name = "generala-simulate")]
struct Args {
    /// Number of matches to play
    #[arg(long, default_value_t = 100)]
    games: u32,

    /// Base RNG seed; match i uses seed + i
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Strategy for the first (human) seat: mc or greedy
    #[arg(long, default_value = "greedy")]
    human: Strategy,

    /// Strategy for the second (computer) seat: mc or greedy
    #[arg(long, default_value = "mc")]
    computer: Strategy,

    /// Samples per hold mask (overrides GENERALA_HOLD_TRIALS)
    #[arg(long)]
    hold_trials: Option<usize>,

    /// Rollouts per category (overrides GENERALA_CATEGORY_TRIALS)
    #[arg(long)]
    category_trials: Option<usize>,

    /// Write the summary as JSON to this file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the turn-by-turn log of a single match instead of a batch
    #[arg(long)]
    trace_one: bool,
}

fn main() -> anyhow::Result<()> {
    env_config::init_tracing();
    let args = Args::parse();

    let env_params = env_config::search_params();
    let params = SearchParams {
        hold_trials: args.hold_trials.unwrap_or(env_params.hold_trials),
        category_trials: args.category_trials.unwrap_or(env_params.category_trials),
    };
    let strategies = [args.human, args.computer];

    if args.trace_one {
        let mut rng = SmallRng::seed_from_u64(args.seed);
        let log = play_match_logged(strategies, &params, &mut rng);
        for (round, seat, turn) in &log.turns {
            println!(
                "round {:>2} {:<8} rolls={} dice={:?} category={} score={}{}",
                round,
                format!("{seat:?}"),
                turn.rolls_used(),
                turn.final_dice,
                turn.category.map_or("-".to_string(), |c| c.to_string()),
                turn.score,
                if turn.instant_win { " GENERALA!" } else { "" },
            );
        }
        println!("{}", serde_json::to_string_pretty(&log.outcome)?);
        return Ok(());
    }

    let num_threads = env_config::init_rayon_threads();
    tracing::info!(
        games = args.games,
        seed = args.seed,
        human = %args.human,
        computer = %args.computer,
        hold_trials = params.hold_trials,
        category_trials = params.category_trials,
        num_threads,
        "simulating matches"
    );

    let start = Instant::now();
    let summary = simulate_matches(strategies, args.games, args.seed, &params);
    let elapsed = start.elapsed();

    println!(
        "{} games in {:.2}s ({:.1} games/s)",
        summary.games,
        elapsed.as_secs_f64(),
        summary.games as f64 / elapsed.as_secs_f64().max(1e-9)
    );
    for i in 0..2 {
        println!(
            "  seat {} [{:>6}]: wins {:>5} ({:5.1}%), instant {:>4}, score {:6.2} ± {:5.2}",
            i,
            summary.strategies[i],
            summary.wins[i],
            100.0 * summary.win_rates[i],
            summary.instant_wins[i],
            summary.score_means[i],
            summary.score_stds[i],
        );
    }
    println!("  draws: {}", summary.draws);

    if let Some(path) = args.output {
        let json = serde_json::to_string_pretty(&summary)?;
        std::fs::write(&path, json)
            .with_context(|| format!("writing summary to {}", path.display()))?;
        tracing::info!(path = %path.display(), "summary written");
    }

    Ok(())
}
