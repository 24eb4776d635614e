use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::models::{
    GameLeaderboardResponse, GlobalLeaderboardResponse, PlatformStatsResponse,
    PlayerStatsResponse, SeasonalRankingResponse,
};
use super::service::{LeaderboardService, DEFAULT_LIMIT};
use crate::shared::{AppError, AppState};

#[derive(Debug, Deserialize)]
pub struct LeaderboardParams {
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct SeasonalParams {
    pub season: Option<String>,
    pub game: Option<String>,
}

fn service(state: &AppState) -> LeaderboardService {
    LeaderboardService::new(
        Arc::clone(&state.players),
        Arc::clone(&state.game_stats),
        Arc::clone(&state.tournaments),
        Arc::clone(&state.seasonal_rng),
    )
}

/// HTTP handler for the global leaderboard
///
/// GET /leaderboard/global?limit=50
#[instrument(name = "get_global_leaderboard", skip(state))]
pub async fn get_global_leaderboard(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardParams>,
) -> Result<Json<GlobalLeaderboardResponse>, AppError> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    let response = service(&state).global_leaderboard(limit).await?;

    info!(entries = response.leaderboard.len(), "Global leaderboard built");
    Ok(Json(response))
}

/// HTTP handler for a per-game leaderboard
///
/// GET /leaderboard/game/:game_name?limit=50
/// Returns 404 for games without a stats entry
#[instrument(name = "get_game_leaderboard", skip(state))]
pub async fn get_game_leaderboard(
    State(state): State<AppState>,
    Path(game_name): Path<String>,
    Query(params): Query<LeaderboardParams>,
) -> Result<Json<GameLeaderboardResponse>, AppError> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    let response = service(&state).game_leaderboard(&game_name, limit).await?;

    Ok(Json(response))
}

/// HTTP handler for a single player's statistics
///
/// GET /player/:player_id/stats
#[instrument(name = "get_player_stats", skip(state))]
pub async fn get_player_stats(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> Result<Json<PlayerStatsResponse>, AppError> {
    let response = service(&state).player_stats(&player_id).await?;

    Ok(Json(response))
}

/// HTTP handler for platform-wide statistics
///
/// GET /platform/stats
#[instrument(name = "get_platform_stats", skip(state))]
pub async fn get_platform_stats(
    State(state): State<AppState>,
) -> Result<Json<PlatformStatsResponse>, AppError> {
    let response = service(&state).platform_stats().await?;

    Ok(Json(response))
}

/// HTTP handler for the seasonal ranking
///
/// GET /leaderboard/seasonal?season=current&game=Go
#[instrument(name = "get_seasonal_ranking", skip(state))]
pub async fn get_seasonal_ranking(
    State(state): State<AppState>,
    Query(params): Query<SeasonalParams>,
) -> Result<Json<SeasonalRankingResponse>, AppError> {
    let season = params.season.as_deref().unwrap_or("current");
    let response = service(&state)
        .seasonal_ranking(season, params.game.as_deref())
        .await?;

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::models::Player;
    use crate::player::repository::{InMemoryPlayerRepository, PlayerRepository};
    use crate::shared::test_utils::AppStateBuilder;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use tower::ServiceExt; // for `oneshot`

    async fn app_with_ratings(ratings: &[(&str, i32)]) -> Router {
        let players = Arc::new(InMemoryPlayerRepository::new());
        for (id, rating) in ratings {
            let mut player = Player::new(*id, format!("Player {id}"), "X");
            player.rating = *rating;
            players.insert_player(&player).await.unwrap();
        }
        let app_state = AppStateBuilder::new().with_players(players).build();

        Router::new()
            .route(
                "/leaderboard/global",
                axum::routing::get(get_global_leaderboard),
            )
            .route(
                "/leaderboard/game/:game_name",
                axum::routing::get(get_game_leaderboard),
            )
            .route(
                "/leaderboard/seasonal",
                axum::routing::get(get_seasonal_ranking),
            )
            .route("/player/:player_id/stats", axum::routing::get(get_player_stats))
            .route("/platform/stats", axum::routing::get(get_platform_stats))
            .with_state(app_state)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_global_leaderboard_handler_sorted_with_ranks() {
        let app = app_with_ratings(&[("a", 1400), ("b", 1800), ("c", 1600)]).await;

        let (status, body) = get(app, "/leaderboard/global").await;
        assert_eq!(status, StatusCode::OK);

        assert_eq!(body["totalPlayers"], 3);
        let leaderboard = body["leaderboard"].as_array().unwrap();
        assert_eq!(leaderboard[0]["id"], "b");
        assert_eq!(leaderboard[0]["rank"], 1);
        assert_eq!(leaderboard[2]["id"], "a");
        assert_eq!(leaderboard[2]["rank"], 3);
        assert_eq!(leaderboard[0]["winRate"], 0.0);
    }

    #[tokio::test]
    async fn test_global_leaderboard_handler_limit_param() {
        let app = app_with_ratings(&[("a", 1400), ("b", 1800), ("c", 1600)]).await;

        let (status, body) = get(app, "/leaderboard/global?limit=1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["leaderboard"].as_array().unwrap().len(), 1);
        assert_eq!(body["totalPlayers"], 3);
    }

    #[tokio::test]
    async fn test_game_leaderboard_handler_unknown_game() {
        let app = app_with_ratings(&[]).await;

        let (status, body) = get(app, "/leaderboard/game/Unknown").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("Unknown"));
    }

    #[tokio::test]
    async fn test_player_stats_handler_unknown_player() {
        let app = app_with_ratings(&[("a", 1500)]).await;

        let (status, _) = get(app, "/player/nobody/stats").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_player_stats_handler_merges_rank() {
        let app = app_with_ratings(&[("a", 1500), ("b", 1700)]).await;

        let (status, body) = get(app, "/player/a/stats").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "a");
        assert_eq!(body["globalRank"], 2);
        assert_eq!(body["winRate"], 0.0);
    }

    #[tokio::test]
    async fn test_platform_stats_handler() {
        let app = app_with_ratings(&[("a", 1500), ("b", 1700)]).await;

        let (status, body) = get(app, "/platform/stats").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalPlayers"], 2);
        assert_eq!(body["totalTournaments"], 0);
        assert_eq!(body["averagePlayerLevel"], 1.0);
    }

    #[tokio::test]
    async fn test_seasonal_ranking_handler_defaults_to_current() {
        let app = app_with_ratings(&[("a", 1500)]).await;

        let (status, body) = get(app, "/leaderboard/seasonal").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["season"], "current");
        assert_eq!(body["totalParticipants"], 1);
        assert!(body["ranking"].as_array().unwrap().len() == 1);
    }
}
