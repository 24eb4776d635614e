use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::models::Tournament;
use super::service::{CreateTournamentRequest, RegisterRequest, TournamentService};
use crate::shared::{AppError, AppState};

fn service(state: &AppState) -> TournamentService {
    TournamentService::new(Arc::clone(&state.tournaments), Arc::clone(&state.players))
}

/// HTTP handler for creating a tournament
///
/// POST /tournaments
/// Returns the created tournament in registration status
#[instrument(name = "create_tournament", skip(state, request))]
pub async fn create_tournament(
    State(state): State<AppState>,
    Json(request): Json<CreateTournamentRequest>,
) -> Result<(StatusCode, Json<Tournament>), AppError> {
    let tournament = service(&state).create_tournament(request).await?;

    info!(tournament_id = %tournament.id, "Tournament created");
    Ok((StatusCode::CREATED, Json(tournament)))
}

/// HTTP handler for listing open and running tournaments
///
/// GET /tournaments/active
#[instrument(name = "get_active_tournaments", skip(state))]
pub async fn get_active_tournaments(
    State(state): State<AppState>,
) -> Result<Json<Vec<Tournament>>, AppError> {
    let tournaments = service(&state).active_tournaments().await?;

    Ok(Json(tournaments))
}

/// HTTP handler for registering a player in a tournament
///
/// POST /tournaments/:tournament_id/register
/// Body: {"playerId": "..."}
#[instrument(name = "register_in_tournament", skip(state, request))]
pub async fn register_in_tournament(
    State(state): State<AppState>,
    Path(tournament_id): Path<String>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<Tournament>, AppError> {
    let player_id = request
        .player_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("playerId is required".to_string()))?;

    let tournament = service(&state)
        .register_player(&tournament_id, &player_id)
        .await?;

    Ok(Json(tournament))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::models::Player;
    use crate::player::repository::{InMemoryPlayerRepository, PlayerRepository};
    use crate::shared::test_utils::AppStateBuilder;
    use axum::{body::Body, http::Request, Router};
    use tower::ServiceExt; // for `oneshot`

    async fn app_with_players(ids: &[&str]) -> Router {
        let players = Arc::new(InMemoryPlayerRepository::new());
        for id in ids {
            players
                .insert_player(&Player::new(*id, format!("Player {id}"), "X"))
                .await
                .unwrap();
        }
        let app_state = AppStateBuilder::new().with_players(players).build();

        Router::new()
            .route("/tournaments", axum::routing::post(create_tournament))
            .route(
                "/tournaments/active",
                axum::routing::get(get_active_tournaments),
            )
            .route(
                "/tournaments/:tournament_id/register",
                axum::routing::post(register_in_tournament),
            )
            .with_state(app_state)
    }

    async fn post(app: &Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_create_tournament_handler() {
        let app = app_with_players(&[]).await;

        let (status, body) = post(
            &app,
            "/tournaments",
            r#"{"name": "Spring Cup", "game": "Go", "maxPlayers": 8}"#,
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["name"], "Spring Cup");
        assert_eq!(body["type"], "elimination");
        assert_eq!(body["maxPlayers"], 8);
        assert_eq!(body["status"], "registration");
        assert!(body["participants"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_tournament_handler_missing_game() {
        let app = app_with_players(&[]).await;

        let (status, _) = post(&app, "/tournaments", r#"{"name": "Spring Cup"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_tournament_registration_flow() {
        let app = app_with_players(&["p-1", "p-2", "p-3"]).await;

        let (_, tournament) = post(
            &app,
            "/tournaments",
            r#"{"name": "Duel", "game": "Go", "maxPlayers": 2}"#,
        )
        .await;
        let id = tournament["id"].as_str().unwrap().to_string();

        let register_uri = format!("/tournaments/{id}/register");
        let (status, body) = post(&app, &register_uri, r#"{"playerId": "p-1"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["participants"].as_array().unwrap().len(), 1);

        let (status, _) = post(&app, &register_uri, r#"{"playerId": "p-2"}"#).await;
        assert_eq!(status, StatusCode::OK);

        // Full tournament rejects a third player.
        let (status, _) = post(&app, &register_uri, r#"{"playerId": "p-3"}"#).await;
        assert_eq!(status, StatusCode::CONFLICT);

        // Duplicate registration rejected.
        let (status, _) = post(&app, &register_uri, r#"{"playerId": "p-1"}"#).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_register_missing_player_id() {
        let app = app_with_players(&["p-1"]).await;

        let (_, tournament) =
            post(&app, "/tournaments", r#"{"name": "Cup", "game": "Go"}"#).await;
        let id = tournament["id"].as_str().unwrap();

        let (status, _) = post(&app, &format!("/tournaments/{id}/register"), r#"{}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_active_tournaments_handler() {
        let app = app_with_players(&[]).await;

        post(&app, "/tournaments", r#"{"name": "A", "game": "Go"}"#).await;
        post(&app, "/tournaments", r#"{"name": "B", "game": "Senet"}"#).await;

        let request = Request::builder()
            .method("GET")
            .uri("/tournaments/active")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let tournaments: Vec<serde_json::Value> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(tournaments.len(), 2);
    }
}
