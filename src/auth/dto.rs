use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for registration. Fields are optional so a missing one is
/// reported with the contract's own message instead of a body-decode error.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: Option<String>,
    pub age: Option<i32>,
    pub biografia: Option<String>,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Registration input after validation; every required field is present.
#[derive(Debug)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub age: i32,
    pub biografia: String,
}

/// Login acknowledgment. No token is minted.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    pub name: String,
}
