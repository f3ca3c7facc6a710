use axum::{
    extract::{Extension, Path, Query},
    response::Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::cat::{Cat, CatWithOwner};
use crate::database::cats;
use crate::error::ApiError;
use crate::geo;
use crate::middleware::auth::AuthUser;

/// GET /cats - List all cats with owner attributes resolved
pub async fn cat_list() -> Result<Json<Vec<CatWithOwner>>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let cats = cats::list_with_owner(&pool).await?;

    // An empty collection is an empty list, never an error
    Ok(Json(cats))
}

/// GET /cats/:id - Get a single cat with its owner resolved
pub async fn cat_get(Path(id): Path<Uuid>) -> Result<Json<CatWithOwner>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let cat = cats::find_with_owner(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("No cat found"))?;

    Ok(Json(cat))
}

/// GET /cats/mine - List the authenticated caller's cats
pub async fn cat_get_by_owner(
    user: Option<Extension<AuthUser>>,
) -> Result<Json<Vec<Cat>>, ApiError> {
    let Extension(user) = user.ok_or_else(|| ApiError::bad_request("No user"))?;

    let pool = DatabaseManager::pool().await?;
    let cats = cats::find_by_owner(&pool, user.id).await?;

    if cats.is_empty() {
        return Err(ApiError::not_found("No cats found"));
    }

    Ok(Json(cats))
}

#[derive(Debug, Deserialize)]
pub struct AreaQuery {
    #[serde(rename = "topRight")]
    pub top_right: String,
    #[serde(rename = "bottomLeft")]
    pub bottom_left: String,
}

/// GET /cats/area?topRight=lat,lng&bottomLeft=lat,lng - Cats within a
/// bounding box. Malformed corner strings surface as a structured 400.
pub async fn cat_get_by_area(Query(query): Query<AreaQuery>) -> Result<Json<Vec<Cat>>, ApiError> {
    let top_right = geo::parse_lat_lng(&query.top_right)?;
    let bottom_left = geo::parse_lat_lng(&query.bottom_left)?;
    let bounds = geo::rectangle_bounds(top_right, bottom_left);

    let pool = DatabaseManager::pool().await?;

    // SQL prefilters on the envelope; polygon containment is the final filter
    let cats: Vec<Cat> = cats::find_within(&pool, &bounds)
        .await?
        .into_iter()
        .filter(|cat| bounds.contains(&cat.location.into()))
        .collect();

    if cats.is_empty() {
        return Err(ApiError::not_found("No cats found"));
    }

    Ok(Json(cats))
}
