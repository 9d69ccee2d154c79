use axum::{
    extract::{Path, Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::collections::HashMap;

use crate::auth::{verify_token, Claims};
use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated user context extracted from a verified token
#[derive(Clone, Debug, PartialEq)]
pub struct AuthUser {
    pub username: String,
    pub is_admin: bool,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            username: claims.username,
            is_admin: claims.is_admin,
        }
    }
}

/// Verify an optional bearer token and attach its claims to the request.
///
/// A missing or invalid token is not an error here: the request continues
/// anonymously and the route gates decide.
pub async fn authenticate_jwt(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(token) = extract_jwt_from_headers(&headers) {
        match verify_token(&token, &state.config.security) {
            Ok(claims) => {
                request.extensions_mut().insert(AuthUser::from(claims));
            }
            Err(e) => tracing::debug!("Ignoring bearer token: {}", e),
        }
    }

    next.run(request).await
}

/// Gate: any authenticated user
pub async fn ensure_logged_in(request: Request, next: Next) -> Result<Response, ApiError> {
    require_logged_in(request.extensions().get::<AuthUser>())?;
    Ok(next.run(request).await)
}

/// Gate: authenticated admin
pub async fn ensure_admin(request: Request, next: Next) -> Result<Response, ApiError> {
    require_admin(request.extensions().get::<AuthUser>())?;
    Ok(next.run(request).await)
}

/// Gate: admin, or the user named by the `:username` path segment
pub async fn ensure_correct_user_or_admin(
    Path(params): Path<HashMap<String, String>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let username = params.get("username").map(String::as_str);
    require_self_or_admin(request.extensions().get::<AuthUser>(), username)?;
    Ok(next.run(request).await)
}

pub fn require_logged_in(user: Option<&AuthUser>) -> Result<&AuthUser, ApiError> {
    user.ok_or_else(|| ApiError::unauthorized("Unauthorized"))
}

pub fn require_admin(user: Option<&AuthUser>) -> Result<&AuthUser, ApiError> {
    match user {
        Some(user) if user.is_admin => Ok(user),
        _ => Err(ApiError::unauthorized("Unauthorized")),
    }
}

pub fn require_self_or_admin<'a>(
    user: Option<&'a AuthUser>,
    username: Option<&str>,
) -> Result<&'a AuthUser, ApiError> {
    match user {
        Some(user) if user.is_admin || Some(user.username.as_str()) == username => Ok(user),
        _ => Err(ApiError::unauthorized("Unauthorized")),
    }
}

/// Extract the token from `Authorization: Bearer <token>` (either case of "bearer")
fn extract_jwt_from_headers(headers: &HeaderMap) -> Option<String> {
    let auth_str = headers.get("authorization")?.to_str().ok()?;

    let token = auth_str
        .strip_prefix("Bearer ")
        .or_else(|| auth_str.strip_prefix("bearer "))?
        .trim();

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
