//! Axum HTTP server: stateless endpoints over the decision engine.
//!
//! Every request carries the dice and the computer's final scores, so the
//! server keeps no game state. Hold and category searches are CPU-bound and
//! run on tokio's blocking pool.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/categories` | Category names in board order |
//! | POST | `/score` | Score of the dice in every category + instant-win flag |
//! | POST | `/hold` | Best dice to keep before the next reroll |
//! | POST | `/category` | Best category to fill with the final dice |

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::constants::*;
use crate::dice_mechanics::validate_hand;
use crate::error::GeneralaError;
use crate::game_mechanics::{is_instant_win, score_all};
use crate::simulation::turn::{check_rolls_left, check_round};
use crate::simulation::{find_best_category_with, find_best_hold_with, SearchParams};
use crate::types::{BoardSnapshot, Category};

pub type AppState = Arc<SearchParams>;

pub fn create_router(params: SearchParams) -> Router {
    Router::new()
        .route("/health", get(handle_health_check))
        .route("/categories", get(handle_get_categories))
        .route("/score", post(handle_score))
        .route("/hold", post(handle_hold))
        .route("/category", post(handle_category))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(params))
}

// ── Request types ───────────────────────────────────────────────────

#[derive(Deserialize)]
struct ScoreRequest {
    dice: Vec<i32>,
    #[serde(default)]
    is_first_roll: bool,
}

#[derive(Deserialize)]
struct HoldRequest {
    dice: Vec<i32>,
    final_scores: [Option<i32>; CATEGORY_COUNT],
    round: u32,
    rolls_left: u32,
    seed: Option<u64>,
}

#[derive(Deserialize)]
struct CategoryRequest {
    dice: Vec<i32>,
    final_scores: [Option<i32>; CATEGORY_COUNT],
    round: u32,
    #[serde(default)]
    is_first_roll: bool,
    seed: Option<u64>,
}

type ApiResult = Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)>;

fn error_response(status: StatusCode, msg: &str) -> (StatusCode, Json<serde_json::Value>) {
    (status, Json(serde_json::json!({ "error": msg })))
}

fn bad_request(err: GeneralaError) -> (StatusCode, Json<serde_json::Value>) {
    error_response(StatusCode::BAD_REQUEST, &err.to_string())
}

fn request_rng(seed: Option<u64>) -> SmallRng {
    SmallRng::seed_from_u64(seed.unwrap_or_else(rand::random))
}

// ── GET handlers ────────────────────────────────────────────────────

async fn handle_health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}

async fn handle_get_categories() -> Json<serde_json::Value> {
    let names: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
    Json(serde_json::json!({ "categories": names }))
}

// ── POST handlers ───────────────────────────────────────────────────

async fn handle_score(Json(req): Json<ScoreRequest>) -> ApiResult {
    let dice = validate_hand(&req.dice).map_err(bad_request)?;
    let scores = score_all(&dice, req.is_first_roll);
    let categories: Vec<serde_json::Value> = Category::ALL
        .iter()
        .zip(scores)
        .map(|(c, score)| serde_json::json!({ "id": c.index(), "name": c.name(), "score": score }))
        .collect();

    Ok(Json(serde_json::json!({
        "categories": categories,
        "instant_win": req.is_first_roll && is_instant_win(&dice),
    })))
}

async fn handle_hold(State(params): State<AppState>, Json(req): Json<HoldRequest>) -> ApiResult {
    let dice = validate_hand(&req.dice).map_err(bad_request)?;
    let round = check_round(req.round).map_err(bad_request)?;
    let rolls_left = check_rolls_left(req.rolls_left).map_err(bad_request)?;
    let board = BoardSnapshot::from_final_scores(req.final_scores);

    let decision = tokio::task::spawn_blocking(move || {
        let mut rng = request_rng(req.seed);
        find_best_hold_with(&dice, &board, round, rolls_left, &params, &mut rng)
    })
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "hold search failed");
        error_response(StatusCode::INTERNAL_SERVER_ERROR, "hold search failed")
    })?;

    Ok(Json(serde_json::json!({
        "held": decision.held,
        "mask": decision.mask,
        "held_positions": decision.held_positions(),
        "expected_value": decision.expected_value,
    })))
}

async fn handle_category(
    State(params): State<AppState>,
    Json(req): Json<CategoryRequest>,
) -> ApiResult {
    let dice = validate_hand(&req.dice).map_err(bad_request)?;
    let round = check_round(req.round).map_err(bad_request)?;
    let board = BoardSnapshot::from_final_scores(req.final_scores);
    let is_first_roll = req.is_first_roll;

    let decision = tokio::task::spawn_blocking(move || {
        let mut rng = request_rng(req.seed);
        find_best_category_with(&dice, &board, round, is_first_roll, &params, &mut rng)
    })
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "category search failed");
        error_response(StatusCode::INTERNAL_SERVER_ERROR, "category search failed")
    })?;

    Ok(Json(serde_json::json!({
        "category": decision.category.map(|c| c.name()),
        "expected_value": decision.expected_value,
    })))
}
