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

/// A challenge users can complete for points.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Challenge {
    pub id: Uuid,
    pub desafios: String,
    pub valor: i32,
}

/// Link record marking a challenge as completed by a user.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CompletedChallenge {
    pub id: Uuid,
    pub user_id: Uuid,
    pub desafio_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct CreateChallengeRequest {
    pub desafios: String,
    pub valor: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteChallengeRequest {
    pub user_id: Uuid,
    pub desafio_id: Uuid,
}

impl Challenge {
    async fn create(db: &PgPool, desafios: &str, valor: i32) -> sqlx::Result<Challenge> {
        sqlx::query_as::<_, Challenge>(
            r#"
            INSERT INTO desafios (desafios, valor)
            VALUES ($1, $2)
            RETURNING id, desafios, valor
            "#,
        )
        .bind(desafios)
        .bind(valor)
        .fetch_one(db)
        .await
    }

    async fn list(db: &PgPool) -> sqlx::Result<Vec<Challenge>> {
        sqlx::query_as::<_, Challenge>("SELECT id, desafios, valor FROM desafios")
            .fetch_all(db)
            .await
    }
}

impl CompletedChallenge {
    async fn create(db: &PgPool, user_id: Uuid, desafio_id: Uuid) -> sqlx::Result<Self> {
        sqlx::query_as::<_, CompletedChallenge>(
            r#"
            INSERT INTO desafios_concluidos (user_id, desafio_id)
            VALUES ($1, $2)
            RETURNING id, user_id, desafio_id
            "#,
        )
        .bind(user_id)
        .bind(desafio_id)
        .fetch_one(db)
        .await
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/desafios", post(create_challenge).get(list_challenges))
        .route("/desafiosConcluidos", post(complete_challenge))
}

#[instrument(skip(state, payload))]
pub async fn create_challenge(
    State(state): State<AppState>,
    Json(payload): Json<CreateChallengeRequest>,
) -> Result<(StatusCode, Json<Challenge>), ApiError> {
    let challenge = Challenge::create(&state.db, &payload.desafios, payload.valor).await?;
    Ok((StatusCode::CREATED, Json(challenge)))
}

#[instrument(skip(state))]
pub async fn list_challenges(
    State(state): State<AppState>,
) -> Result<Json<Vec<Challenge>>, ApiError> {
    let challenges = Challenge::list(&state.db).await?;
    Ok(Json(challenges))
}

#[instrument(skip(state, payload))]
pub async fn complete_challenge(
    State(state): State<AppState>,
    Json(payload): Json<CompleteChallengeRequest>,
) -> Result<(StatusCode, Json<CompletedChallenge>), ApiError> {
    let completed =
        CompletedChallenge::create(&state.db, payload.user_id, payload.desafio_id).await?;
    Ok((StatusCode::CREATED, Json(completed)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_challenge_serializes_camel_case() {
        let completed = CompletedChallenge {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            desafio_id: Uuid::new_v4(),
        };
        let json = serde_json::to_value(&completed).unwrap();
        assert!(json.get("userId").is_some());
        assert!(json.get("desafioId").is_some());
        assert!(json.get("user_id").is_none());
    }
}
