use sqlx::PgPool;

pub use crate::auth::repo_types::User;

const USER_COLUMNS: &str =
    "id, name, email, password_hash, age, biografia, pontos, seguidores, seguindo";

impl User {
    /// Find a user by email, the sole login key.
    pub async fn find_by_email(db: &PgPool, email: &str) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(db)
        .await
    }

    /// Create a new user. Counters start at zero; the unique index on `email`
    /// is the authoritative duplicate guard.
    pub async fn create(
        db: &PgPool,
        name: &str,
        email: &str,
        password_hash: &str,
        age: i32,
        biografia: &str,
    ) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (name, email, password_hash, age, biografia)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(age)
        .bind(biografia)
        .fetch_one(db)
        .await
    }
}

/// True when the error is the unique-index violation raised by a concurrent
/// registration that won the race between our pre-check and the insert.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test]
    async fn duplicate_email_insert_raises_unique_violation(pool: PgPool) {
        User::create(&pool, "Ana", "ana@x.com", "$2b$04$notarealhash", 30, "")
            .await
            .expect("first insert should succeed");
        let err = User::create(&pool, "Bia", "ana@x.com", "$2b$04$notarealhash", 25, "")
            .await
            .unwrap_err();
        assert!(is_unique_violation(&err));
    }
}
