use odyssey_server::leaderboard::repository::InMemoryGameStatsRepository;
use odyssey_server::player::repository::InMemoryPlayerRepository;
use odyssey_server::progress::repository::InMemoryProgressRepository;
use odyssey_server::seed;
use odyssey_server::session::repository::InMemoryGameSessionRepository;
use odyssey_server::shared::AppState;
use odyssey_server::tournament::repository::InMemoryTournamentRepository;
use odyssey_server::user::repository::InMemoryUserRepository;

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "odyssey_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting The Odyssey of Games server");

    // Create shared application state with dependency injection.
    // All repositories are in-memory; a database-backed implementation
    // can be swapped in here without touching the handlers.
    let players = Arc::new(InMemoryPlayerRepository::new());
    let game_stats = Arc::new(InMemoryGameStatsRepository::new());

    // SEED makes the demo data (and seasonal rankings) reproducible.
    let mut rng = match std::env::var("SEED").ok().and_then(|s| s.parse().ok()) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    seed::seed_demo_data(players.as_ref(), game_stats.as_ref(), &mut rng)
        .await
        .expect("failed to seed demo data");

    let app_state = AppState::new(
        players,
        game_stats,
        Arc::new(InMemoryTournamentRepository::new()),
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryProgressRepository::new()),
        Arc::new(InMemoryGameSessionRepository::new()),
        rng,
    );

    let app = odyssey_server::app(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .unwrap();
    info!("Server running on http://localhost:{port}");
    axum::serve(listener, app).await.unwrap();
}
