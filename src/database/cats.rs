//! Store operations for the `cats` collection.
//!
//! Owner-scoped mutations combine the record id and the caller's identity
//! in a single filter, so a request targeting a foreign cat matches
//! nothing instead of failing an explicit permission check.

use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::database::manager::DbError;
use crate::database::models::cat::{
    Cat, CatAdminUpdate, CatCreate, CatUpdate, CatWithOwner, Location,
};
use crate::database::models::user::UserPublic;
use crate::geo::RectangleBounds;

const CAT_COLUMNS: &str = "id, cat_name, weight, birthdate, lat, lng, owner";

/// Joined row for owner-resolved reads.
#[derive(Debug, FromRow)]
struct CatOwnerRow {
    id: Uuid,
    cat_name: String,
    weight: f64,
    birthdate: chrono::NaiveDate,
    lat: f64,
    lng: f64,
    owner_id: Uuid,
    owner_name: Option<String>,
    owner_email: String,
}

impl From<CatOwnerRow> for CatWithOwner {
    fn from(row: CatOwnerRow) -> Self {
        CatWithOwner {
            id: row.id,
            cat_name: row.cat_name,
            weight: row.weight,
            birthdate: row.birthdate,
            location: Location { lat: row.lat, lng: row.lng },
            owner: UserPublic {
                id: row.owner_id,
                user_name: row.owner_name,
                email: row.owner_email,
            },
        }
    }
}

const CAT_OWNER_SELECT: &str = "SELECT c.id, c.cat_name, c.weight, c.birthdate, c.lat, c.lng, \
     u.id AS owner_id, u.user_name AS owner_name, u.email AS owner_email \
     FROM cats c JOIN users u ON u.id = c.owner";

pub async fn list_with_owner(pool: &PgPool) -> Result<Vec<CatWithOwner>, DbError> {
    let rows = sqlx::query_as::<_, CatOwnerRow>(&format!("{} ORDER BY c.cat_name", CAT_OWNER_SELECT))
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(CatWithOwner::from).collect())
}

pub async fn find_with_owner(pool: &PgPool, id: Uuid) -> Result<Option<CatWithOwner>, DbError> {
    let row = sqlx::query_as::<_, CatOwnerRow>(&format!("{} WHERE c.id = $1", CAT_OWNER_SELECT))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(CatWithOwner::from))
}

pub async fn find_by_owner(pool: &PgPool, owner: Uuid) -> Result<Vec<Cat>, DbError> {
    let cats = sqlx::query_as::<_, Cat>(&format!(
        "SELECT {} FROM cats WHERE owner = $1",
        CAT_COLUMNS
    ))
    .bind(owner)
    .fetch_all(pool)
    .await?;

    Ok(cats)
}

/// All cats whose location falls within the rectangle envelope.
pub async fn find_within(pool: &PgPool, bounds: &RectangleBounds) -> Result<Vec<Cat>, DbError> {
    let cats = sqlx::query_as::<_, Cat>(&format!(
        "SELECT {} FROM cats \
         WHERE lat BETWEEN $1 AND $2 AND lng BETWEEN $3 AND $4",
        CAT_COLUMNS
    ))
    .bind(bounds.min_lat())
    .bind(bounds.max_lat())
    .bind(bounds.min_lng())
    .bind(bounds.max_lng())
    .fetch_all(pool)
    .await?;

    Ok(cats)
}

/// Insert a new cat. Owner and location come from trusted context, never
/// from the payload.
pub async fn create(
    pool: &PgPool,
    owner: Uuid,
    location: Location,
    payload: &CatCreate,
) -> Result<Cat, DbError> {
    let cat = sqlx::query_as::<_, Cat>(&format!(
        "INSERT INTO cats (cat_name, weight, birthdate, lat, lng, owner) \
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}",
        CAT_COLUMNS
    ))
    .bind(&payload.cat_name)
    .bind(payload.weight)
    .bind(payload.birthdate)
    .bind(location.lat)
    .bind(location.lng)
    .bind(owner)
    .fetch_one(pool)
    .await?;

    Ok(cat)
}

/// Update matching both id and owner; a foreign cat matches nothing.
pub async fn update_owned(
    pool: &PgPool,
    id: Uuid,
    owner: Uuid,
    changes: &CatUpdate,
) -> Result<Option<Cat>, DbError> {
    let cat = sqlx::query_as::<_, Cat>(&format!(
        "UPDATE cats SET \
             cat_name = COALESCE($3, cat_name), \
             weight = COALESCE($4, weight), \
             birthdate = COALESCE($5, birthdate) \
         WHERE id = $1 AND owner = $2 RETURNING {}",
        CAT_COLUMNS
    ))
    .bind(id)
    .bind(owner)
    .bind(changes.cat_name.as_deref())
    .bind(changes.weight)
    .bind(changes.birthdate)
    .fetch_optional(pool)
    .await?;

    Ok(cat)
}

/// Delete matching both id and owner. `None` means nothing matched.
pub async fn delete_owned(pool: &PgPool, id: Uuid, owner: Uuid) -> Result<Option<Cat>, DbError> {
    let cat = sqlx::query_as::<_, Cat>(&format!(
        "DELETE FROM cats WHERE id = $1 AND owner = $2 RETURNING {}",
        CAT_COLUMNS
    ))
    .bind(id)
    .bind(owner)
    .fetch_optional(pool)
    .await?;

    Ok(cat)
}

/// Admin update by id alone, including owner reassignment.
pub async fn update_any(
    pool: &PgPool,
    id: Uuid,
    changes: &CatAdminUpdate,
) -> Result<Option<Cat>, DbError> {
    let cat = sqlx::query_as::<_, Cat>(&format!(
        "UPDATE cats SET \
             cat_name = COALESCE($2, cat_name), \
             weight = COALESCE($3, weight), \
             birthdate = COALESCE($4, birthdate), \
             owner = COALESCE($5, owner) \
         WHERE id = $1 RETURNING {}",
        CAT_COLUMNS
    ))
    .bind(id)
    .bind(changes.fields.cat_name.as_deref())
    .bind(changes.fields.weight)
    .bind(changes.fields.birthdate)
    .bind(changes.owner)
    .fetch_optional(pool)
    .await?;

    Ok(cat)
}

/// Admin delete by id alone.
pub async fn delete_any(pool: &PgPool, id: Uuid) -> Result<Option<Cat>, DbError> {
    let cat = sqlx::query_as::<_, Cat>(&format!(
        "DELETE FROM cats WHERE id = $1 RETURNING {}",
        CAT_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(cat)
}
