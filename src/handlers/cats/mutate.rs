use axum::{
    extract::{Extension, Path},
    response::Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::cats;
use crate::database::manager::DatabaseManager;
use crate::database::models::cat::{CatCreate, CatUpdate};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::middleware::coords::RequestCoords;

/// POST /cats - Create a cat owned by the caller.
///
/// Owner and location are injected from trusted context after input
/// binding; any client-supplied values for them never reach the insert.
pub async fn cat_post(
    user: Option<Extension<AuthUser>>,
    Extension(RequestCoords(coords)): Extension<RequestCoords>,
    Json(payload): Json<CatCreate>,
) -> Result<Json<Value>, ApiError> {
    let Extension(user) = user.ok_or_else(|| ApiError::bad_request("No user"))?;

    let pool = DatabaseManager::pool().await?;
    let cat = cats::create(&pool, user.id, coords.into(), &payload).await?;

    Ok(Json(json!({ "message": "Cat created", "data": cat })))
}

/// PUT /cats/:id - Update a cat the caller owns. A cat owned by someone
/// else matches nothing and reads as absent.
pub async fn cat_put(
    user: Option<Extension<AuthUser>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CatUpdate>,
) -> Result<Json<Value>, ApiError> {
    let Extension(user) = user.ok_or_else(|| ApiError::bad_request("No user"))?;

    let pool = DatabaseManager::pool().await?;
    let cat = cats::update_owned(&pool, id, user.id, &payload)
        .await?
        .ok_or_else(|| ApiError::not_found("No cat found"))?;

    Ok(Json(json!({ "message": "Cat updated", "data": cat })))
}

/// DELETE /cats/:id - Delete a cat the caller owns.
///
/// A zero-row delete still reports success with null data. This is looser
/// than the update path's missing-match check and is kept as-is.
pub async fn cat_delete(
    user: Option<Extension<AuthUser>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let Extension(user) = user.ok_or_else(|| ApiError::bad_request("No user"))?;

    let pool = DatabaseManager::pool().await?;
    let cat = cats::delete_owned(&pool, id, user.id).await?;

    Ok(Json(json!({ "message": "Cat deleted", "data": cat })))
}
