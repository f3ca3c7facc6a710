use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::{self, Claims};
use crate::database::manager::DatabaseManager;
use crate::database::models::user::UserPublic;
use crate::database::users;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Email doubles as the login username.
    pub username: String,
    pub password: String,
}

/// POST /auth/login - Verify credentials and issue a JWT
pub async fn login_post(Json(payload): Json<LoginRequest>) -> Result<Json<Value>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let user = users::find_by_email(&pool, &payload.username)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Incorrect username/password"))?;

    let valid = bcrypt::verify(&payload.password, &user.password).map_err(|e| {
        tracing::error!("Password verification failed: {}", e);
        ApiError::internal_server_error("Failed to verify password")
    })?;

    if !valid {
        return Err(ApiError::unauthorized("Incorrect username/password"));
    }

    let claims = Claims::new(user.id, user.user_name.clone(), user.email.clone(), user.role);
    let token = auth::generate_jwt(claims)?;

    let out = UserPublic {
        id: user.id,
        user_name: user.user_name,
        email: user.email,
    };

    Ok(Json(json!({ "token": token, "user": out })))
}
