use axum::Json;
use tracing::instrument;

use super::catalog::{AchievementInfo, ACHIEVEMENTS};

/// HTTP handler for the achievement catalog
///
/// GET /achievements
/// Returns all achievements players can earn
#[instrument(name = "list_achievements")]
pub async fn list_achievements() -> Json<Vec<AchievementInfo>> {
    Json(ACHIEVEMENTS.to_vec())
}
