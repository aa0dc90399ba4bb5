use std::time::Duration;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tokio::time::timeout;
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, LoginResponse, NewUser, RegisterRequest},
        password,
        repo::{self, User},
    },
    error::ApiError,
    state::AppState,
};

const STORE_TIMEOUT: Duration = Duration::from_secs(5);
const HASH_TIMEOUT: Duration = Duration::from_secs(10);

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/user", post(login))
}

fn required(field: Option<&str>, msg: &str) -> Result<String, ApiError> {
    match field {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ApiError::validation(msg)),
    }
}

/// Ordered fail-fast checks; the first violation is the one reported.
fn validate_register(req: RegisterRequest) -> Result<NewUser, ApiError> {
    let name = required(req.name.as_deref(), "name required")?;
    let email = required(req.email.as_deref(), "email required")?;
    let password = required(req.password.as_deref(), "password required")?;
    let age = req.age.ok_or_else(|| ApiError::validation("age required"))?;
    if req.confirm_password.as_deref() != Some(password.as_str()) {
        return Err(ApiError::validation("passwords must match"));
    }
    Ok(NewUser {
        name,
        email,
        password,
        age,
        biografia: req.biografia.unwrap_or_default(),
    })
}

fn validate_login(req: LoginRequest) -> Result<(String, String), ApiError> {
    let email = required(req.email.as_deref(), "email required")?;
    let password = required(req.password.as_deref(), "password required")?;
    Ok((email, password))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let new_user = validate_register(payload)?;

    let existing = timeout(
        STORE_TIMEOUT,
        User::find_by_email(&state.db, &new_user.email),
    )
    .await
    .map_err(|_| ApiError::unexpected("user lookup timed out"))??;
    if existing.is_some() {
        warn!(email = %new_user.email, "email already registered");
        return Err(ApiError::Conflict("email already in use".into()));
    }

    let hash = timeout(
        HASH_TIMEOUT,
        password::hash_password_async(new_user.password.clone(), state.config.bcrypt_cost),
    )
    .await
    .map_err(|_| ApiError::unexpected("password hashing timed out"))??;

    let created = timeout(
        STORE_TIMEOUT,
        User::create(
            &state.db,
            &new_user.name,
            &new_user.email,
            &hash,
            new_user.age,
            &new_user.biografia,
        ),
    )
    .await
    .map_err(|_| ApiError::unexpected("user insert timed out"))?;

    let user = match created {
        Ok(u) => u,
        // The pre-check races with concurrent registrations; the unique
        // index on email is the authoritative guard.
        Err(e) if repo::is_unique_violation(&e) => {
            warn!(email = %new_user.email, "duplicate registration lost the race");
            return Err(ApiError::Conflict("email already in use".into()));
        }
        Err(e) => return Err(e.into()),
    };

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok((StatusCode::CREATED, Json(user)))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (email, password) = validate_login(payload)?;

    let user = timeout(STORE_TIMEOUT, User::find_by_email(&state.db, &email))
        .await
        .map_err(|_| ApiError::unexpected("user lookup timed out"))??
        .ok_or_else(|| {
            warn!(email = %email, "login unknown email");
            ApiError::NotFound("user not found".into())
        })?;

    let ok = timeout(
        HASH_TIMEOUT,
        password::verify_password_async(password, user.password_hash.clone()),
    )
    .await
    .map_err(|_| ApiError::unexpected("password verification timed out"))??;

    if !ok {
        warn!(user_id = %user.id, "login invalid password");
        return Err(ApiError::InvalidCredentials("invalid password".into()));
    }

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(Json(LoginResponse {
        message: "login successful".into(),
        user_id: user.id,
        name: user.name,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn full_register_request() -> RegisterRequest {
        RegisterRequest {
            name: Some("Ana".into()),
            email: Some("ana@x.com".into()),
            password: Some("secret1".into()),
            confirm_password: Some("secret1".into()),
            age: Some(30),
            biografia: None,
        }
    }

    #[test]
    fn register_validation_reports_first_missing_field() {
        let cases: Vec<(fn(&mut RegisterRequest), &str)> = vec![
            (|r| r.name = None, "name required"),
            (|r| r.email = None, "email required"),
            (|r| r.password = None, "password required"),
            (|r| r.age = None, "age required"),
        ];
        for (mutate, expected) in cases {
            let mut req = full_register_request();
            mutate(&mut req);
            let err = validate_register(req).unwrap_err();
            assert!(matches!(&err, ApiError::Validation(m) if m == expected));
        }
    }

    #[test]
    fn register_validation_treats_empty_strings_as_missing() {
        let mut req = full_register_request();
        req.name = Some(String::new());
        let err = validate_register(req).unwrap_err();
        assert!(matches!(&err, ApiError::Validation(m) if m == "name required"));
    }

    #[test]
    fn register_validation_rejects_mismatched_passwords() {
        let mut req = full_register_request();
        req.confirm_password = Some("other".into());
        let err = validate_register(req).unwrap_err();
        assert!(matches!(&err, ApiError::Validation(m) if m == "passwords must match"));

        let mut req = full_register_request();
        req.confirm_password = None;
        let err = validate_register(req).unwrap_err();
        assert!(matches!(&err, ApiError::Validation(m) if m == "passwords must match"));
    }

    #[test]
    fn register_validation_checks_fields_in_contract_order() {
        // Everything missing: name wins.
        let req = RegisterRequest {
            name: None,
            email: None,
            password: None,
            confirm_password: None,
            age: None,
            biografia: None,
        };
        let err = validate_register(req).unwrap_err();
        assert!(matches!(&err, ApiError::Validation(m) if m == "name required"));
    }

    #[test]
    fn register_validation_defaults_biografia_to_empty() {
        let new_user = validate_register(full_register_request()).expect("valid input");
        assert_eq!(new_user.biografia, "");
    }

    #[test]
    fn login_validation_requires_email_then_password() {
        let err = validate_login(LoginRequest {
            email: None,
            password: None,
        })
        .unwrap_err();
        assert!(matches!(&err, ApiError::Validation(m) if m == "email required"));

        let err = validate_login(LoginRequest {
            email: Some("ana@x.com".into()),
            password: None,
        })
        .unwrap_err();
        assert!(matches!(&err, ApiError::Validation(m) if m == "password required"));
    }

    #[tokio::test]
    async fn register_handler_fails_validation_before_touching_the_store() {
        let state = AppState::fake();
        let mut req = full_register_request();
        req.confirm_password = Some("different".into());
        let err = register(State(state), Json(req)).await.unwrap_err();
        assert!(matches!(&err, ApiError::Validation(m) if m == "passwords must match"));
    }

    #[tokio::test]
    async fn login_handler_fails_validation_before_touching_the_store() {
        let state = AppState::fake();
        let err = login(
            State(state),
            Json(LoginRequest {
                email: None,
                password: Some("secret1".into()),
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(&err, ApiError::Validation(m) if m == "email required"));
    }

    #[test]
    fn created_user_serializes_without_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Ana".into(),
            email: "ana@x.com".into(),
            password_hash: "$2b$12$abcdefghijklmnopqrstuv".into(),
            age: 30,
            biografia: String::new(),
            pontos: 0,
            seguidores: 0,
            seguindo: 0,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json.get("passwordHash").is_none());
        assert_eq!(json["name"], "Ana");
        assert_eq!(json["pontos"], 0);
    }

    #[test]
    fn login_response_uses_camel_case_user_id() {
        let response = LoginResponse {
            message: "login successful".into(),
            user_id: Uuid::new_v4(),
            name: "Ana".into(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("userId").is_some());
        assert!(json.get("user_id").is_none());
    }
}
