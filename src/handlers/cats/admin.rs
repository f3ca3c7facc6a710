use axum::{
    extract::{Extension, Path},
    response::Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth;
use crate::database::cats;
use crate::database::manager::DatabaseManager;
use crate::database::models::cat::CatAdminUpdate;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// PUT /cats/admin/:id - Admin update by id alone, including owner
/// reassignment. No match is reported as a 400, unlike the owner path.
pub async fn cat_put_admin(
    user: Option<Extension<AuthUser>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CatAdminUpdate>,
) -> Result<Json<Value>, ApiError> {
    let Extension(user) = user.ok_or_else(|| ApiError::unauthorized("Not authorized"))?;
    auth::require_admin(&user)?;

    let pool = DatabaseManager::pool().await?;
    let cat = cats::update_any(&pool, id, &payload)
        .await?
        .ok_or_else(|| ApiError::bad_request("Cat not found"))?;

    Ok(Json(json!({ "message": "Cat updated", "data": cat })))
}

/// DELETE /cats/admin/:id - Admin delete by id alone.
///
/// An absent context passes through; only an authenticated non-admin is
/// rejected. Known policy gap carried over from the original contract.
pub async fn cat_delete_admin(
    user: Option<Extension<AuthUser>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    auth::require_admin_or_anonymous(user.as_ref().map(|Extension(u)| u))?;

    let pool = DatabaseManager::pool().await?;
    let cat = cats::delete_any(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("No cat found"))?;

    Ok(Json(json!({ "message": "Cat deleted", "data": cat })))
}
