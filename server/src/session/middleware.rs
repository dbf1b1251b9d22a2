use crate::api::ErrorResponse;
use crate::db::DbPool;
use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::CookieJar;
use std::sync::Arc;
use uuid::Uuid;

use super::cookie::SESSION_COOKIE;
use super::db::get_user_by_session;
use super::extractor::SessionUser;

/// Middleware that resolves the session cookie to a user id and attaches it
/// to the request, where the SessionUser extractor picks it up.
/// Apply this to routes that are scoped to the calling session.
pub async fn resolve_session(
    State(pool): State<Arc<DbPool>>,
    jar: CookieJar,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let cookie = match jar.get(SESSION_COOKIE) {
        Some(c) => c,
        None => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse {
                    error: "Missing session cookie".to_string(),
                }),
            )
                .into_response()
        }
    };

    let token = match Uuid::parse_str(cookie.value()) {
        Ok(t) => t,
        Err(_) => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse {
                    error: "Invalid session".to_string(),
                }),
            )
                .into_response()
        }
    };

    let user = match get_user_by_session(&pool, token).await {
        Some(u) => u,
        None => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse {
                    error: "Invalid session".to_string(),
                }),
            )
                .into_response()
        }
    };

    request.extensions_mut().insert(SessionUser(user.id));
    next.run(request).await
}
