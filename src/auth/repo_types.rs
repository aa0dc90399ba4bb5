use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// User record in the database.
///
/// `password_hash` is excluded from serialization so the created record can be
/// returned to the client as-is.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub age: i32,
    pub biografia: String,
    pub pontos: i32,
    pub seguidores: i32,
    pub seguindo: i32,
}
