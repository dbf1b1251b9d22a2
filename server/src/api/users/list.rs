use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::User;
use crate::schema::users;
use crate::session::session_token;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use axum_extra::extract::CookieJar;
use diesel::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "Users bound to the caller's session token; empty without one", body = UsersResponse)
    )
)]
pub async fn list_users(State(pool): State<Arc<DbPool>>, jar: CookieJar) -> impl IntoResponse {
    // No usable cookie means no session to match: an empty result, not an error
    let Some(token) = session_token(&jar) else {
        return (StatusCode::OK, Json(UsersResponse { users: Vec::new() })).into_response();
    };

    let mut conn = get_conn!(pool);

    let users: Vec<User> = match users::table
        .filter(users::session_id.eq(token))
        .select(User::as_select())
        .load(&mut conn)
    {
        Ok(users) => users,
        Err(e) => {
            tracing::error!("Failed to fetch users: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch users".to_string(),
                }),
            )
                .into_response();
        }
    };

    (StatusCode::OK, Json(UsersResponse { users })).into_response()
}
