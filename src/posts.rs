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

/// A photo post on a user's feed.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub url: String,
    pub likes: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub user_id: Uuid,
    pub url: String,
    pub likes: Option<i32>,
}

impl Post {
    async fn create(db: &PgPool, user_id: Uuid, url: &str, likes: i32) -> sqlx::Result<Post> {
        sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (user_id, url, likes)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, url, likes
            "#,
        )
        .bind(user_id)
        .bind(url)
        .bind(likes)
        .fetch_one(db)
        .await
    }

    async fn list(db: &PgPool) -> sqlx::Result<Vec<Post>> {
        sqlx::query_as::<_, Post>("SELECT id, user_id, url, likes FROM posts")
            .fetch_all(db)
            .await
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/posts", post(create_post).get(list_posts))
}

#[instrument(skip(state, payload))]
pub async fn create_post(
    State(state): State<AppState>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let post = Post::create(
        &state.db,
        payload.user_id,
        &payload.url,
        payload.likes.unwrap_or(0),
    )
    .await?;
    Ok((StatusCode::CREATED, Json(post)))
}

#[instrument(skip(state))]
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, ApiError> {
    let posts = Post::list(&state.db).await?;
    Ok(Json(posts))
}
