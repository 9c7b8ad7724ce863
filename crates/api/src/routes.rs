use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use rand::rngs::SmallRng;
use tokio::sync::Mutex;

use pitchside_store::Store;

use crate::handlers;

/// Shared per-process state: the entity store and the RNG feeding the
/// heuristics. The RNG sits behind a mutex so concurrent generate calls
/// draw from one sequence instead of reseeding per request.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub rng: Arc<Mutex<SmallRng>>,
}

impl AppState {
    pub fn new(store: Arc<Store>, rng: SmallRng) -> Self {
        Self {
            store,
            rng: Arc::new(Mutex::new(rng)),
        }
    }
}

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(handlers::health))
        // Teams
        .route(
            "/api/teams",
            get(handlers::list_teams).post(handlers::create_team),
        )
        .route("/api/teams/:id", get(handlers::get_team))
        // Players
        .route(
            "/api/players",
            get(handlers::list_players).post(handlers::create_player),
        )
        .route("/api/players/:id", get(handlers::get_player))
        // Matches
        .route(
            "/api/matches",
            get(handlers::list_matches).post(handlers::create_match),
        )
        .route("/api/matches/:id", get(handlers::get_match))
        // Predictions
        .route(
            "/api/predictions",
            get(handlers::list_predictions).post(handlers::create_prediction),
        )
        .route(
            "/api/predictions/generate",
            post(handlers::generate_prediction),
        )
        .route("/api/predictions/:id", get(handlers::get_prediction))
        // Player performance predictions
        .route(
            "/api/player-performance-predictions",
            get(handlers::list_player_performance_predictions)
                .post(handlers::create_player_performance_prediction),
        )
        .route(
            "/api/player-performance-predictions/generate",
            post(handlers::generate_player_performance_prediction),
        )
        // Chatbot
        .route("/api/chat", post(handlers::chat))
        // Data scraping
        .route("/api/scrape", post(handlers::scrape))
}
