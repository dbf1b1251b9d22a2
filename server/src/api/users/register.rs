use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::NewUser;
use crate::schema::users;
use crate::session::{session_cookie, session_token};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use axum_extra::extract::CookieJar;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

/// Duplicate-registration responses use a `message` field, not the shared
/// `error` shape.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserExistsResponse {
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body(content = CreateUserRequest, example = json!({"name": "Ada", "email": "ada@example.com"})),
    responses(
        (status = 201, description = "User created; a sessionId cookie is issued if the request carried none"),
        (status = 400, description = "Email already registered", body = UserExistsResponse)
    )
)]
pub async fn create_user(
    State(pool): State<Arc<DbPool>>,
    jar: CookieJar,
    Json(request): Json<CreateUserRequest>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    // Reuse the caller's token when one is already set; issue a fresh one
    // otherwise. The cookie rides along even on the duplicate-email response.
    let (token, jar) = match session_token(&jar) {
        Some(existing) => (existing, jar),
        None => {
            let fresh = Uuid::new_v4();
            let jar = jar.add(session_cookie(fresh));
            (fresh, jar)
        }
    };

    let existing = users::table
        .filter(users::email.eq(&request.email))
        .select(users::id)
        .first::<Uuid>(&mut conn)
        .optional();

    match existing {
        Ok(Some(_)) => {
            return (
                StatusCode::BAD_REQUEST,
                jar,
                Json(UserExistsResponse {
                    message: "User already exists".to_string(),
                }),
            )
                .into_response()
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!("Failed to check for existing user: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create user".to_string(),
                }),
            )
                .into_response();
        }
    }

    let new_user = NewUser {
        name: &request.name,
        email: &request.email,
        session_id: token,
    };

    match diesel::insert_into(users::table)
        .values(&new_user)
        .execute(&mut conn)
    {
        Ok(_) => (StatusCode::CREATED, jar).into_response(),
        // Lost the race against a concurrent registration of the same email
        Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => (
            StatusCode::BAD_REQUEST,
            jar,
            Json(UserExistsResponse {
                message: "User already exists".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to create user: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create user".to_string(),
                }),
            )
                .into_response()
        }
    }
}
