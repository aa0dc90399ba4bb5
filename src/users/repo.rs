use serde::Serialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::dto::UpdateUserRequest;

const PROFILE_COLUMNS: &str = "id, name, email, age, biografia, pontos, seguidores, seguindo";

/// Projection of a user without the password hash; the only shape this
/// module ever reads or returns.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub biografia: String,
    pub pontos: i32,
    pub seguidores: i32,
    pub seguindo: i32,
}

impl UserProfile {
    pub async fn list(db: &PgPool) -> sqlx::Result<Vec<UserProfile>> {
        sqlx::query_as::<_, UserProfile>(&format!("SELECT {PROFILE_COLUMNS} FROM users"))
            .fetch_all(db)
            .await
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> sqlx::Result<Option<UserProfile>> {
        sqlx::query_as::<_, UserProfile>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// Partial update; absent fields keep their stored value. Email and
    /// password are deliberately not updatable through this path.
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        changes: &UpdateUserRequest,
    ) -> sqlx::Result<Option<UserProfile>> {
        sqlx::query_as::<_, UserProfile>(&format!(
            r#"
            UPDATE users SET
                name = COALESCE($2, name),
                age = COALESCE($3, age),
                biografia = COALESCE($4, biografia),
                pontos = COALESCE($5, pontos),
                seguidores = COALESCE($6, seguidores),
                seguindo = COALESCE($7, seguindo)
            WHERE id = $1
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(changes.name.as_deref())
        .bind(changes.age)
        .bind(changes.biografia.as_deref())
        .bind(changes.pontos)
        .bind(changes.seguidores)
        .bind(changes.seguindo)
        .fetch_optional(db)
        .await
    }

    /// Returns true when a row was deleted.
    pub async fn delete(db: &PgPool, id: Uuid) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
