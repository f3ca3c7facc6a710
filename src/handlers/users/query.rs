use axum::{
    extract::{Extension, Path},
    response::Json,
};
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::user::UserPublic;
use crate::database::users;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// GET /users/:id - Public projection of one user
pub async fn user_get(Path(id): Path<Uuid>) -> Result<Json<UserPublic>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let user = users::find_public(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(user))
}

/// GET /users - Public projection of all users
pub async fn user_list() -> Result<Json<Vec<UserPublic>>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let users = users::list_public(&pool).await?;

    Ok(Json(users))
}

/// GET /users/token - Validate the caller's token by re-fetching their
/// record. Returned raw, no envelope.
pub async fn check_token(user: Option<Extension<AuthUser>>) -> Result<Json<UserPublic>, ApiError> {
    let Extension(user) = user.ok_or_else(|| ApiError::bad_request("No user"))?;

    let pool = DatabaseManager::pool().await?;
    let user = users::find_public(&pool, user.id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(user))
}
