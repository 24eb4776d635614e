// Library crate for the Odyssey of Games server
// This file exposes the public API for integration tests

pub mod catalog;
pub mod leaderboard;
pub mod player;
pub mod progress;
pub mod ranking;
pub mod seed;
pub mod session;
pub mod shared;
pub mod tournament;
pub mod user;

use axum::{
    routing::{get, post},
    Router,
};

// Re-export commonly used types for easier access in tests
pub use player::{Player, PlayerRepository, RankingService};
pub use shared::{AppError, AppState};
pub use tournament::{Tournament, TournamentRepository};

/// Builds the full HTTP router over the given state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "The Odyssey of Games API" }))
        .route("/register", post(user::handlers::register_user))
        .route("/login", post(user::handlers::login_user))
        .route("/profile/:username", get(user::handlers::get_profile))
        .route("/games", get(catalog::handlers::list_games))
        .route("/games/:game_id", get(catalog::handlers::get_game))
        .route("/progress", post(progress::handlers::upsert_progress))
        .route(
            "/progress/:user_id/:game_id",
            get(progress::handlers::get_progress),
        )
        .route("/game/start", post(session::handlers::start_game_session))
        .route(
            "/game/session/:session_id",
            get(session::handlers::get_game_session),
        )
        .route(
            "/game/end/:session_id",
            post(session::handlers::end_game_session),
        )
        .route(
            "/leaderboard/global",
            get(leaderboard::handlers::get_global_leaderboard),
        )
        .route(
            "/leaderboard/game/:game_name",
            get(leaderboard::handlers::get_game_leaderboard),
        )
        .route(
            "/leaderboard/seasonal",
            get(leaderboard::handlers::get_seasonal_ranking),
        )
        .route(
            "/player/:player_id/stats",
            get(leaderboard::handlers::get_player_stats),
        )
        .route(
            "/player/:player_id/game-result",
            post(player::handlers::report_game_result),
        )
        .route(
            "/platform/stats",
            get(leaderboard::handlers::get_platform_stats),
        )
        .route(
            "/tournaments",
            post(tournament::handlers::create_tournament),
        )
        .route(
            "/tournaments/active",
            get(tournament::handlers::get_active_tournaments),
        )
        .route(
            "/tournaments/:tournament_id/register",
            post(tournament::handlers::register_in_tournament),
        )
        .route("/achievements", get(ranking::handlers::list_achievements))
        .with_state(state)
}
