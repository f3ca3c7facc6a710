use axum::{
    extract::Request,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use uuid::Uuid;

use crate::auth::{self, Claims};
use crate::database::models::user::Role;
use crate::error::ApiError;

/// Authenticated user context extracted from JWT. Absent from request
/// extensions when the request carries no token.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub id: Uuid,
    pub user_name: Option<String>,
    pub email: String,
    pub role: Role,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            user_name: claims.user_name,
            email: claims.email,
            role: claims.role,
        }
    }
}

/// Optional-auth middleware: a valid Bearer token populates the request
/// context, no token leaves the request unauthenticated, and an invalid
/// token is rejected outright. Presence/role rules are enforced per
/// handler, not here.
pub async fn auth_context_middleware(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, impl IntoResponse> {
    if let Some(token) = extract_bearer_token(&headers) {
        let claims = auth::validate_jwt(&token).map_err(|msg| {
            let api_error = ApiError::unauthorized(msg);
            (
                StatusCode::from_u16(api_error.status_code()).unwrap(),
                Json(api_error.to_json()),
            )
        })?;

        let auth_user = AuthUser::from(claims);
        request.extensions_mut().insert(auth_user);
    }

    Ok::<_, (StatusCode, Json<serde_json::Value>)>(next.run(request).await)
}

/// Extract a Bearer token from the Authorization header, if any.
fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let auth_str = headers
        .get("authorization")
        .or_else(|| headers.get("Authorization"))?
        .to_str()
        .ok()?;

    let token = auth_str.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn extracts_bearer_token() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(extract_bearer_token(&headers).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn ignores_missing_or_non_bearer_headers() {
        assert!(extract_bearer_token(&HeaderMap::new()).is_none());
        assert!(extract_bearer_token(&headers_with("Basic dXNlcg==")).is_none());
        assert!(extract_bearer_token(&headers_with("Bearer ")).is_none());
    }
}
