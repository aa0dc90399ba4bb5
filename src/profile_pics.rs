use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use tracing::instrument;
use uuid::Uuid;

use crate::{error::ApiError, state::AppState};

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePic {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfilePicRequest {
    pub user_id: Uuid,
    pub name: String,
    pub url: String,
}

impl ProfilePic {
    async fn create(db: &PgPool, user_id: Uuid, name: &str, url: &str) -> sqlx::Result<Self> {
        sqlx::query_as::<_, ProfilePic>(
            r#"
            INSERT INTO profile_pics (user_id, name, url)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, name, url
            "#,
        )
        .bind(user_id)
        .bind(name)
        .bind(url)
        .fetch_one(db)
        .await
    }

    async fn list(db: &PgPool) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, ProfilePic>("SELECT id, user_id, name, url FROM profile_pics")
            .fetch_all(db)
            .await
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/profilePic", post(create_profile_pic).get(list_profile_pics))
}

#[instrument(skip(state, payload))]
pub async fn create_profile_pic(
    State(state): State<AppState>,
    Json(payload): Json<CreateProfilePicRequest>,
) -> Result<(StatusCode, Json<ProfilePic>), ApiError> {
    let pic = ProfilePic::create(&state.db, payload.user_id, &payload.name, &payload.url).await?;
    Ok((StatusCode::CREATED, Json(pic)))
}

#[instrument(skip(state))]
pub async fn list_profile_pics(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProfilePic>>, ApiError> {
    let pics = ProfilePic::list(&state.db).await?;
    Ok(Json(pics))
}
