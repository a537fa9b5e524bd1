use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        jwt::{AdminUser, AuthUser},
        password::{check_password_strength, hash_password, verify_password},
    },
    error::ApiError,
    state::AppState,
    users::{
        dto::{ChangePasswordRequest, UpdateProfileRequest},
        repo_types::User,
    },
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users/profile", get(get_profile).put(update_profile))
        .route("/users/password", put(change_password))
        .route("/users", get(list_users))
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<User>, ApiError> {
    let user = User::find_by_id(&state.db, user.id)
        .await?
        .ok_or_else(|| ApiError::Unauthenticated("User not found".into()))?;
    Ok(Json(user))
}

#[instrument(skip(state, payload))]
pub async fn update_profile(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<User>, ApiError> {
    // Documented leniency: password and role keys are dropped, not errors.
    if payload.password.is_some() || payload.role.is_some() {
        warn!(user_id = %user.id, "ignoring password/role fields in profile update");
    }

    let updated = User::update_profile(
        &state.db,
        user.id,
        payload.company_name,
        payload.subscription,
        payload.profile,
        payload.api_keys,
    )
    .await?;

    info!(user_id = %updated.id, "profile updated");
    Ok(Json(updated))
}

#[instrument(skip(state, payload))]
pub async fn change_password(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<ChangePasswordRequest>,
) -> Result<StatusCode, ApiError> {
    check_password_strength(&payload.new_password)?;

    let record = User::find_by_id(&state.db, user.id)
        .await?
        .ok_or_else(|| ApiError::Unauthenticated("User not found".into()))?;

    if !verify_password(&payload.current_password, &record.password_hash)? {
        warn!(user_id = %user.id, "password change with wrong current password");
        return Err(ApiError::Unauthenticated("Invalid credentials".into()));
    }

    let hash = hash_password(&payload.new_password)?;
    User::set_password(&state.db, user.id, &hash).await?;

    info!(user_id = %user.id, "password changed");
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
    AdminUser(_admin_id): AdminUser,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = User::list_all(&state.db).await?;
    Ok(Json(users))
}
