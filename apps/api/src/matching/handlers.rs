use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::career::RankedCareer;
use crate::models::profile::UserProfile;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Serialize)]
pub struct RecommendationsResponse {
    pub user_info: UserProfile,
    pub riasec_code: String,
    pub recommendations: Vec<RankedCareer>,
    pub session_id: Uuid,
}

/// GET /api/careers/recommendations?user_id=<uuid>
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let session = state
        .profiles
        .get(params.user_id)
        .await
        .ok_or(AppError::NoActiveProfile)?;

    let recommendations = state.engine.recommend(
        &session.profile,
        state.catalogue.all(),
        state.config.recommendation_count,
    )?;

    info!(
        "Found {} career recommendations for user {} (RIASEC: {})",
        recommendations.len(),
        session.user_id,
        session.riasec_code
    );

    Ok(Json(RecommendationsResponse {
        user_info: session.profile,
        riasec_code: session.riasec_code,
        recommendations,
        session_id: session.user_id,
    }))
}
