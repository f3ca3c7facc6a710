use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::database::models::user::UserPublic;
use crate::geo::Coordinates;

/// Geographic point stored with each cat. Flattened into the `lat`/`lng`
/// columns of the `cats` table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl From<Coordinates> for Location {
    fn from(c: Coordinates) -> Self {
        Location { lat: c.lat, lng: c.lng }
    }
}

impl From<Location> for Coordinates {
    fn from(l: Location) -> Self {
        Coordinates { lat: l.lat, lng: l.lng }
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Cat {
    pub id: Uuid,
    pub cat_name: String,
    pub weight: f64,
    pub birthdate: NaiveDate,
    #[sqlx(flatten)]
    pub location: Location,
    pub owner: Uuid,
}

/// Cat with its owner reference resolved to the owner's public attributes.
#[derive(Debug, Clone, Serialize)]
pub struct CatWithOwner {
    pub id: Uuid,
    pub cat_name: String,
    pub weight: f64,
    pub birthdate: NaiveDate,
    pub location: Location,
    pub owner: UserPublic,
}

/// Creation payload. Owner and location are not bound here: they are
/// injected server-side from the authenticated context and request
/// coordinates, so client-supplied values for them are ignored.
#[derive(Debug, Deserialize)]
pub struct CatCreate {
    pub cat_name: String,
    pub weight: f64,
    pub birthdate: NaiveDate,
}

/// Owner update payload. No owner or location fields: ownership is
/// immutable on this path.
#[derive(Debug, Default, Deserialize)]
pub struct CatUpdate {
    pub cat_name: Option<String>,
    pub weight: Option<f64>,
    pub birthdate: Option<NaiveDate>,
}

/// Admin update payload: any descriptive field plus owner reassignment.
#[derive(Debug, Deserialize)]
pub struct CatAdminUpdate {
    #[serde(flatten)]
    pub fields: CatUpdate,
    pub owner: Option<Uuid>,
}
