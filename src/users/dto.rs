use serde::Deserialize;

/// Partial profile update; any subset of fields may be supplied.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub biografia: Option<String>,
    pub pontos: Option<i32>,
    pub seguidores: Option<i32>,
    pub seguindo: Option<i32>,
}
