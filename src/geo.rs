//! Bounding-box helpers for the `/cats/area` spatial query.
//!
//! Converts two corner coordinates into a closed rectangle polygon. The
//! polygon ring uses GeoJSON axis order (lng, lat) and repeats the first
//! vertex as the last one.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Error)]
pub enum CoordinateParseError {
    #[error("Expected coordinates as \"lat,lng\", got \"{0}\"")]
    MalformedPair(String),

    #[error("Invalid coordinate number: {0}")]
    InvalidNumber(String),
}

/// Parse a "lat,lng" query string value into coordinates.
pub fn parse_lat_lng(raw: &str) -> Result<Coordinates, CoordinateParseError> {
    let mut parts = raw.split(',');
    let (lat, lng) = match (parts.next(), parts.next(), parts.next()) {
        (Some(lat), Some(lng), None) => (lat.trim(), lng.trim()),
        _ => return Err(CoordinateParseError::MalformedPair(raw.to_string())),
    };

    let lat: f64 = lat
        .parse()
        .map_err(|_| CoordinateParseError::InvalidNumber(lat.to_string()))?;
    let lng: f64 = lng
        .parse()
        .map_err(|_| CoordinateParseError::InvalidNumber(lng.to_string()))?;

    Ok(Coordinates { lat, lng })
}

/// A closed rectangle polygon. The ring is the single source of truth:
/// the envelope accessors and the containment check both read from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RectangleBounds {
    ring: [[f64; 2]; 5],
}

impl RectangleBounds {
    /// Closed ring of (lng, lat) vertices; first point equals last point.
    pub fn ring(&self) -> &[[f64; 2]; 5] {
        &self.ring
    }

    // Envelope accessors read the bottom-left and top-right vertices.
    // The store uses them as the SQL BETWEEN prefilter.
    pub fn min_lat(&self) -> f64 {
        self.ring[0][1]
    }

    pub fn max_lat(&self) -> f64 {
        self.ring[2][1]
    }

    pub fn min_lng(&self) -> f64 {
        self.ring[0][0]
    }

    pub fn max_lng(&self) -> f64 {
        self.ring[2][0]
    }

    /// Spatial containment check against the polygon.
    pub fn contains(&self, point: &Coordinates) -> bool {
        point.lat >= self.min_lat()
            && point.lat <= self.max_lat()
            && point.lng >= self.min_lng()
            && point.lng <= self.max_lng()
    }
}

/// Build a closed rectangle polygon from a top-right and bottom-left corner.
pub fn rectangle_bounds(top_right: Coordinates, bottom_left: Coordinates) -> RectangleBounds {
    let min_lat = bottom_left.lat.min(top_right.lat);
    let max_lat = bottom_left.lat.max(top_right.lat);
    let min_lng = bottom_left.lng.min(top_right.lng);
    let max_lng = bottom_left.lng.max(top_right.lng);

    RectangleBounds {
        ring: [
            [min_lng, min_lat],
            [max_lng, min_lat],
            [max_lng, max_lat],
            [min_lng, max_lat],
            [min_lng, min_lat],
        ],
    }
}
