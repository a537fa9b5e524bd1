use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    auth::jwt::AuthUser,
    business::{dto::BusinessProfilePayload, repo_types::BusinessProfile},
    error::ApiError,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/business/profile",
        get(get_business_profile).post(upsert_business_profile),
    )
}

#[instrument(skip(state))]
pub async fn get_business_profile(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<BusinessProfile>, ApiError> {
    let profile = BusinessProfile::find_by_user(&state.db, user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Profile not found".into()))?;
    Ok(Json(profile))
}

#[instrument(skip(state, payload))]
pub async fn upsert_business_profile(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<BusinessProfilePayload>,
) -> Result<Json<BusinessProfile>, ApiError> {
    let profile = BusinessProfile::upsert(&state.db, user.id, payload).await?;
    info!(user_id = %user.id, profile_id = %profile.id, "business profile upserted");
    Ok(Json(profile))
}
