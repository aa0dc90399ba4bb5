use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{error::ApiError, state::AppState};

use super::dto::UpdateUserRequest;
use super::repo::UserProfile;

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/usuarios", get(list_users))
        .route("/users/:id", get(get_user))
        .route("/usuarios/:id", put(update_user).delete(delete_user))
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserProfile>>, ApiError> {
    let users = UserProfile::list(&state.db).await?;
    Ok(Json(users))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserProfile>, ApiError> {
    let user = UserProfile::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("user not found".into()))?;
    Ok(Json(user))
}

#[instrument(skip(state, changes))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(changes): Json<UpdateUserRequest>,
) -> Result<Json<UserProfile>, ApiError> {
    let user = UserProfile::update(&state.db, id, &changes)
        .await?
        .ok_or_else(|| ApiError::NotFound("user not found".into()))?;
    info!(user_id = %id, "user updated");
    Ok(Json(user))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !UserProfile::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("user not found".into()));
    }
    info!(user_id = %id, "user deleted");
    Ok(Json(serde_json::json!({ "message": "user deleted" })))
}
