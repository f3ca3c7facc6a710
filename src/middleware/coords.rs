use axum::{extract::Request, http::HeaderMap, middleware::Next, response::Response};

use crate::config;
use crate::geo::{self, Coordinates};

/// Per-request coordinates resolved before handlers run. Cat creation
/// consumes these as the trusted location source.
#[derive(Clone, Copy, Debug)]
pub struct RequestCoords(pub Coordinates);

const COORDS_HEADER: &str = "x-coordinates";

/// Resolve request coordinates from the `X-Coordinates: "lat,lng"` header,
/// falling back to the configured default. A malformed header falls back
/// rather than failing the request.
pub async fn coords_middleware(headers: HeaderMap, mut request: Request, next: Next) -> Response {
    let coords = resolve_coordinates(&headers);
    request.extensions_mut().insert(RequestCoords(coords));
    next.run(request).await
}

fn resolve_coordinates(headers: &HeaderMap) -> Coordinates {
    if let Some(raw) = headers.get(COORDS_HEADER).and_then(|v| v.to_str().ok()) {
        match geo::parse_lat_lng(raw) {
            Ok(coords) => return coords,
            Err(e) => tracing::debug!("Ignoring malformed {} header: {}", COORDS_HEADER, e),
        }
    }

    let defaults = &config::config().geo;
    Coordinates {
        lat: defaults.default_lat,
        lng: defaults.default_lng,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn header_coordinates_win_over_defaults() {
        let mut headers = HeaderMap::new();
        headers.insert(COORDS_HEADER, HeaderValue::from_static("61.5,23.8"));

        let coords = resolve_coordinates(&headers);
        assert_eq!(coords, Coordinates { lat: 61.5, lng: 23.8 });
    }

    #[test]
    fn malformed_header_falls_back_to_defaults() {
        let mut headers = HeaderMap::new();
        headers.insert(COORDS_HEADER, HeaderValue::from_static("somewhere"));

        let defaults = &config::config().geo;
        let coords = resolve_coordinates(&headers);
        assert_eq!(coords.lat, defaults.default_lat);
        assert_eq!(coords.lng, defaults.default_lng);
    }
}
