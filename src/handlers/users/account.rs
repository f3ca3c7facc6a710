use axum::{extract::Extension, response::Json};
use serde_json::{json, Value};

use crate::config;
use crate::database::manager::DatabaseManager;
use crate::database::models::user::{UserCreate, UserUpdate};
use crate::database::users;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// POST /users - Register a new account.
///
/// The password is hashed before it reaches the store; the response
/// carries id, user_name and email only.
pub async fn user_post(Json(payload): Json<UserCreate>) -> Result<Json<Value>, ApiError> {
    let cost = config::config().security.bcrypt_cost;
    let hash = bcrypt::hash(&payload.password, cost).map_err(|e| {
        tracing::error!("Password hashing failed: {}", e);
        ApiError::internal_server_error("Failed to process password")
    })?;

    let pool = DatabaseManager::pool().await?;
    let user = users::create(&pool, payload.user_name.as_deref(), &payload.email, &hash).await?;

    Ok(Json(json!({ "message": "User created", "data": user })))
}

/// PUT /users - Update the caller's own record.
///
/// The response echoes the requested id/user_name/email from the input
/// payload rather than re-reading the persisted row. Kept as the original
/// contract; clients wanting the stored state follow up with a read.
pub async fn user_put_current(
    user: Option<Extension<AuthUser>>,
    Json(payload): Json<UserUpdate>,
) -> Result<Json<Value>, ApiError> {
    let Extension(user) = user.ok_or_else(|| ApiError::not_found("No user found"))?;

    let pool = DatabaseManager::pool().await?;
    users::update(&pool, user.id, &payload)
        .await?
        .ok_or_else(|| ApiError::not_found("No user found"))?;

    let data = json!({
        "id": payload.id,
        "user_name": payload.user_name,
        "email": payload.email,
    });

    Ok(Json(json!({ "message": "User updated", "data": data })))
}

/// DELETE /users - Delete the caller's own record. The target is always
/// the authenticated identity, never a path parameter.
pub async fn user_delete_current(
    user: Option<Extension<AuthUser>>,
) -> Result<Json<Value>, ApiError> {
    let Extension(user) = user.ok_or_else(|| ApiError::not_found("No user found"))?;

    let pool = DatabaseManager::pool().await?;
    let deleted = users::delete(&pool, user.id)
        .await?
        .ok_or_else(|| ApiError::not_found("No user found"))?;

    Ok(Json(json!({ "message": "User deleted", "data": deleted })))
}
