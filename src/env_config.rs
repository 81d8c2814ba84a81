//! Shared environment configuration for the Generala binaries.
//!
//! Reads `GENERALA_PORT`, `RAYON_NUM_THREADS`, the trial-count overrides and
//! `RUST_LOG`.

use crate::simulation::SearchParams;

/// Install the tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "generala=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|s| s.parse().ok())
}

/// Read `RAYON_NUM_THREADS` (fallback `OMP_NUM_THREADS`, default 8) and build
/// the global rayon pool. Tolerates an already-initialized pool.
pub fn init_rayon_threads() -> usize {
    let num_threads = env_parse("RAYON_NUM_THREADS")
        .or_else(|| env_parse("OMP_NUM_THREADS"))
        .unwrap_or(8);
    if rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .is_err()
    {
        tracing::warn!("rayon global pool already initialized");
    }
    tracing::info!(num_threads, "rayon threads");
    num_threads
}

/// Read `GENERALA_PORT` (default 9000).
pub fn server_port() -> u16 {
    env_parse("GENERALA_PORT").unwrap_or(9000)
}

/// Trial counts from `GENERALA_HOLD_TRIALS` / `GENERALA_CATEGORY_TRIALS`,
/// falling back to the defaults (500 / 2000).
pub fn search_params() -> SearchParams {
    let defaults = SearchParams::default();
    SearchParams {
        hold_trials: env_parse("GENERALA_HOLD_TRIALS").unwrap_or(defaults.hold_trials),
        category_trials: env_parse("GENERALA_CATEGORY_TRIALS").unwrap_or(defaults.category_trials),
    }
}
